use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::authoring::*;
pub use services::fragments::*;
pub use services::output::*;
pub use services::precommit::*;
pub use services::release_check::*;
pub use services::render::*;
pub use services::storage::*;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli.repo)?;
    if commands::handle_authoring_commands(cli, &cfg)? {
        return Ok(());
    }
    if commands::handle_hook_commands(cli, &cfg)? {
        return Ok(());
    }
    commands::handle_runtime_commands(cli, &cfg)
}

fn report_error(json: bool, err: &anyhow::Error) {
    if json {
        let code = err
            .downcast_ref::<FragmentError>()
            .map(|e| e.code())
            .unwrap_or("ERROR");
        let body = serde_json::json!({
            "ok": false,
            "error": {"code": code, "message": err.to_string()}
        });
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}
