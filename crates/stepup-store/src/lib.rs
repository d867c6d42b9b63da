//! Directory state adapters: load, persist, and mutate users and sessions.
//!
//! This crate is allowed to do filesystem IO. The engine itself never
//! mutates anything; every state change goes through here and becomes
//! visible to the evaluator on its next call.

#![forbid(unsafe_code)]

mod mutate;
mod state;

use anyhow::Context;
use camino::Utf8Path;
use stepup_domain::model::Directory;

pub use mutate::{enroll, record_action, revoke_action, unenroll};
pub use state::{parse_state_json, render_state_json, DirectoryStateV1};

/// Read and parse the state file. The file must exist; callers decide what a
/// missing file means (typically: fall back to [`demo_directory`]).
pub fn load_state(path: &Utf8Path) -> anyhow::Result<Directory> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read state: {path}"))?;
    parse_state_json(&text).with_context(|| format!("parse state: {path}"))
}

/// Serialize and write the whole state file.
pub fn save_state(path: &Utf8Path, directory: &Directory) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {parent}"))?;
    }
    let text = render_state_json(directory)?;
    std::fs::write(path, text).with_context(|| format!("write state: {path}"))?;
    Ok(())
}

/// The built-in demo directory used when no state file exists yet.
pub fn demo_directory() -> Directory {
    use stepup_domain::model::{PastAction, Session, User};

    Directory {
        users: vec![
            User {
                id: "arthur".to_string(),
                enrolled_means: vec![
                    "phone_otp".to_string(),
                    "password".to_string(),
                    "phone_biometry".to_string(),
                ],
            },
            User {
                id: "bigNoob".to_string(),
                enrolled_means: vec![
                    "phone_otp".to_string(),
                    "password".to_string(),
                    "phone_biometry".to_string(),
                ],
            },
            User {
                id: "otherNoob".to_string(),
                enrolled_means: vec!["phone_otp".to_string()],
            },
        ],
        sessions: vec![
            Session {
                id: "1".to_string(),
                user_id: "arthur".to_string(),
                past_actions: vec![
                    PastAction {
                        method: "phone_otp".to_string(),
                        validated_at: "1768999339620".to_string(),
                    },
                    PastAction {
                        method: "phone_biometry".to_string(),
                        validated_at: "1768998339620".to_string(),
                    },
                ],
            },
            Session {
                id: "2".to_string(),
                user_id: "bigNoob".to_string(),
                past_actions: Vec::new(),
            },
            Session {
                id: "3".to_string(),
                user_id: "otherNoob".to_string(),
                past_actions: Vec::new(),
            },
        ],
    }
}
