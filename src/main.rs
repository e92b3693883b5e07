use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::allocator;
pub use services::auth::*;
pub use services::output::*;
pub use services::report;
pub use services::roster::*;
pub use services::session::*;

pub use services::defaults::load_defaults;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut session = load_session()?;

    if handle_session_commands(cli, &mut session)? {
        return Ok(());
    }

    // Everything past the login command requires an authenticated session,
    // the CLI equivalent of the route guard around the interactive pages.
    require_auth(&session)?;
    handle_runtime_commands(cli, &mut session)
}

fn report_error(json: bool, err: &anyhow::Error) {
    if json {
        let code = err
            .downcast_ref::<AppError>()
            .map(AppError::code)
            .unwrap_or("ERROR");
        println!(
            "{}",
            serde_json::json!({
                "ok": false,
                "error": {"code": code, "message": err.to_string()}
            })
        );
    } else {
        eprintln!("error: {err}");
    }
}
