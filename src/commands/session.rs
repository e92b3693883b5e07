use crate::*;

/// Login/logout/reset are resolved before the global auth gate; returns
/// whether the command was handled here.
pub fn handle_session_commands(cli: &Cli, session: &mut Session) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Login { email, password } => {
            if !MockAuth.login(email, password) {
                return Err(AppError::AuthFailed.into());
            }
            session.authenticated = true;
            session.user_email = email.clone();
            audit("login", serde_json::json!({"email": email}));
            save_session(session)?;
            print_one(
                cli.json,
                LoginReport {
                    email: email.clone(),
                    authenticated: true,
                },
                |r| format!("logged in as {}", r.email),
            )?;
            Ok(true)
        }
        Commands::Logout => {
            require_auth(session)?;
            audit("logout", serde_json::json!({"email": session.user_email}));
            session.authenticated = false;
            session.user_email.clear();
            save_session(session)?;
            print_one(cli.json, "logged_out", |_| "logged out".to_string())?;
            Ok(true)
        }
        Commands::Reset => {
            require_auth(session)?;
            let defaults = load_defaults()?;
            session.config = defaults.initial_config();
            session.total_expected_payout = 0.0;
            session.roster_fingerprint = None;
            session.final_results = None;
            audit("reset", serde_json::json!({"email": session.user_email}));
            save_session(session)?;
            print_one(cli.json, "reset", |_| "session reset to defaults".to_string())?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
