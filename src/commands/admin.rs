use crate::*;

pub fn handle_authoring_commands(cli: &Cli, cfg: &ChangesConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Init => {
            let created = init_changes_tree(&cli.repo, cfg)?;
            audit(
                "init",
                serde_json::json!({"repo": cli.repo, "created": created.len()}),
            );
            if created.is_empty() {
                print_one(cli.json, created, |_| {
                    "changes tree already initialized".to_string()
                })?;
            } else {
                print_out(cli.json, &created, |p| format!("created {}", p))?;
            }
            Ok(true)
        }
        Commands::Add {
            ticket,
            category,
            section,
            message,
        } => {
            let path = fragment_create(
                &cli.repo,
                cfg,
                *ticket,
                *category,
                section.as_deref(),
                message,
            )?;
            audit(
                "add",
                serde_json::json!({"ticket": ticket, "category": category.key()}),
            );
            let path = path.to_string_lossy().to_string();
            print_one(cli.json, path, |p| format!("added {}", p))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

pub fn handle_hook_commands(cli: &Cli, cfg: &ChangesConfig) -> anyhow::Result<bool> {
    let Commands::Hooks { command } = &cli.command else {
        return Ok(false);
    };

    let config = load_precommit(&cli.repo, cfg)?;
    match command {
        HookCommands::List { url } => {
            let entries = list_hooks(&config, url.as_deref());
            print_out(cli.json, &entries, |h| {
                format!(
                    "{}\t{}\t{}",
                    h.repo,
                    h.rev.as_deref().unwrap_or("-"),
                    h.id
                )
            })?;
        }
        HookCommands::Lint => {
            let report = lint_hooks(&config);
            let ok = report.problems.is_empty();
            print_gate(cli.json, ok, report, |r| {
                let mut lines = vec![format!("hooks lint: {}", r.overall)];
                for p in &r.problems {
                    lines.push(format!("{}\t{}\t{}", p.path, p.code, p.message));
                }
                lines
            })?;
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(true)
}
