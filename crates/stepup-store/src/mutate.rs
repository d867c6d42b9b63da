use stepup_domain::model::{Directory, PastAction, Session, User};

/// Append an authentication event to a session's history, stamped with the
/// caller's clock reading.
pub fn record_action(
    directory: &mut Directory,
    session_id: &str,
    method_id: &str,
    now_ms: i64,
) -> anyhow::Result<()> {
    let session = session_mut(directory, session_id)?;
    session.past_actions.push(PastAction {
        method: method_id.to_string(),
        validated_at: now_ms.to_string(),
    });
    Ok(())
}

/// Register a user for a method. Already-enrolled is a no-op.
pub fn enroll(directory: &mut Directory, user_id: &str, method_id: &str) -> anyhow::Result<()> {
    let user = user_mut(directory, user_id)?;
    if !user.is_enrolled(method_id) {
        user.enrolled_means.push(method_id.to_string());
    }
    Ok(())
}

/// Remove a method from a user's enrollments. Not-enrolled is a no-op.
pub fn unenroll(directory: &mut Directory, user_id: &str, method_id: &str) -> anyhow::Result<()> {
    let user = user_mut(directory, user_id)?;
    user.enrolled_means.retain(|m| m != method_id);
    Ok(())
}

/// Remove one past action from a session's history by position.
pub fn revoke_action(
    directory: &mut Directory,
    session_id: &str,
    index: usize,
) -> anyhow::Result<()> {
    let session = session_mut(directory, session_id)?;
    if index >= session.past_actions.len() {
        anyhow::bail!(
            "no past action at index {index} in session {session_id} ({} entries)",
            session.past_actions.len()
        );
    }
    session.past_actions.remove(index);
    Ok(())
}

fn session_mut<'a>(directory: &'a mut Directory, session_id: &str) -> anyhow::Result<&'a mut Session> {
    directory
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| anyhow::anyhow!("unknown session: {session_id}"))
}

fn user_mut<'a>(directory: &'a mut Directory, user_id: &str) -> anyhow::Result<&'a mut User> {
    directory
        .users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or_else(|| anyhow::anyhow!("unknown user: {user_id}"))
}
