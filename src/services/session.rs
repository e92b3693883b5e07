use crate::domain::models::{AllocationResult, Session};
use crate::services::defaults::load_defaults;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("not logged in: run `shalloc login <email> --password <pw>` first")]
    AuthRequired,
    #[error("invalid credentials")]
    AuthFailed,
    #[error("no allocation results in session: run `shalloc compute` first")]
    NoResults,
    #[error("grade not found: {0}")]
    UnknownGrade(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AuthRequired => "AUTH_REQUIRED",
            AppError::AuthFailed => "AUTH_FAILED",
            AppError::NoResults => "NO_RESULTS",
            AppError::UnknownGrade(_) => "UNKNOWN_GRADE",
        }
    }
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/shalloc/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

fn session_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/shalloc/session.json"))
}

/// Load the carried session, or start a fresh one from the defaults file
/// when none exists yet.
pub fn load_session() -> anyhow::Result<Session> {
    let p = session_path()?;
    if !p.exists() {
        let defaults = load_defaults()?;
        return Ok(Session {
            config: defaults.initial_config(),
            ..Session::default()
        });
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_session(s: &Session) -> anyhow::Result<()> {
    let p = session_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}

pub fn require_auth(session: &Session) -> anyhow::Result<()> {
    if !session.authenticated {
        return Err(AppError::AuthRequired.into());
    }
    Ok(())
}

pub fn require_results(session: &Session) -> anyhow::Result<&AllocationResult> {
    session
        .final_results
        .as_ref()
        .ok_or_else(|| AppError::NoResults.into())
}
