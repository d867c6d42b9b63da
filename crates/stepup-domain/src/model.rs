/// A timestamped record that a user performed a method.
///
/// `validated_at` is kept exactly as stored: a string that should contain
/// milliseconds since the epoch. Parsing happens lazily at evaluation time;
/// an unparsable value means the action is never valid, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PastAction {
    pub method: String,
    pub validated_at: String,
}

impl PastAction {
    pub fn validated_at_ms(&self) -> Option<i64> {
        self.validated_at.trim().parse::<i64>().ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,

    /// Method ids the user is registered for. May reference ids absent from
    /// the catalog; such entries simply never yield candidates.
    pub enrolled_means: Vec<String>,
}

impl User {
    pub fn is_enrolled(&self, method_id: &str) -> bool {
        self.enrolled_means.iter().any(|m| m == method_id)
    }
}

/// Authentication session: append-only history from the evaluator's view.
/// Duplicate method ids are legal; any one matching fresh entry satisfies a
/// requirement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub past_actions: Vec<PastAction>,
}

/// Snapshot of the mutable world: users and their sessions.
///
/// Owned and mutated only by external collaborators; the evaluator treats it
/// as read-only.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    pub users: Vec<User>,
    pub sessions: Vec<Session>,
}

impl Directory {
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
