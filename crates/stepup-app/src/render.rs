//! Serialization, file loading, and renderable conversion helpers.

use anyhow::Context;
use camino::Utf8Path;
use stepup_domain::catalog::Catalog;
use stepup_domain::model::Directory;
use stepup_render::{
    RenderableMethod, RenderablePastAction, RenderablePolicy, RenderableSession, RenderableState,
    RenderableUser,
};
use stepup_types::DecisionEnvelope;

/// Load a catalog file; a missing or empty file means the built-in catalog.
pub fn load_catalog_file(path: &Utf8Path) -> anyhow::Result<Catalog> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read catalog: {path}")),
    };

    if text.trim().is_empty() {
        return Ok(stepup_settings::builtin_catalog());
    }
    let cfg = stepup_settings::parse_catalog_toml(&text)
        .with_context(|| format!("parse catalog: {path}"))?;
    stepup_settings::resolve_catalog(cfg).with_context(|| format!("resolve catalog: {path}"))
}

/// Load a state file; a missing or empty file means the demo directory.
pub fn load_state_file(path: &Utf8Path) -> anyhow::Result<Directory> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read state: {path}")),
    };

    if text.trim().is_empty() {
        return Ok(stepup_store::demo_directory());
    }
    stepup_store::parse_state_json(&text).with_context(|| format!("parse state: {path}"))
}

pub fn serialize_envelope(envelope: &DecisionEnvelope) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(envelope).context("serialize decision")?;
    text.push('\n');
    Ok(text)
}

pub fn parse_envelope_json(text: &str) -> anyhow::Result<DecisionEnvelope> {
    serde_json::from_str(text).context("parse decision json")
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

/// Flatten catalog + directory into the renderable `show` model.
pub fn state_to_renderable(catalog: &Catalog, directory: &Directory) -> RenderableState {
    RenderableState {
        methods: catalog
            .methods
            .iter()
            .map(|m| RenderableMethod {
                id: m.id.clone(),
                kind: m.kind.to_string(),
            })
            .collect(),
        policies: catalog
            .policies
            .iter()
            .map(|(name, policy)| RenderablePolicy {
                name: name.clone(),
                options: policy
                    .iter()
                    .map(|option| {
                        option
                            .iter()
                            .map(|r| format!("{}<={}s", r.kind, r.max_age_secs))
                            .collect::<Vec<_>>()
                            .join(" AND ")
                    })
                    .collect(),
            })
            .collect(),
        users: directory
            .users
            .iter()
            .map(|u| RenderableUser {
                id: u.id.clone(),
                enrolled_means: u.enrolled_means.clone(),
            })
            .collect(),
        sessions: directory
            .sessions
            .iter()
            .map(|s| RenderableSession {
                id: s.id.clone(),
                user_id: s.user_id.clone(),
                past_actions: s
                    .past_actions
                    .iter()
                    .map(|a| RenderablePastAction {
                        method: a.method.clone(),
                        validated_at: a.validated_at.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
