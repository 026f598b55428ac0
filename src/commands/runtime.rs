use crate::*;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli, cfg: &ChangesConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List { section, category } => {
            let outcome = scan_changes(&cli.repo, cfg)?;
            let items: Vec<FragmentItem> =
                filter_fragments(&outcome.fragments, section.as_deref(), *category)
                    .into_iter()
                    .map(fragment_item)
                    .collect();
            print_out(cli.json, &items, |f| {
                format!(
                    "{}\t{}\t{}\t{}",
                    f.ticket,
                    f.category.key(),
                    if f.section.is_empty() { "-" } else { &f.section },
                    f.summary
                )
            })?;
        }
        Commands::Show { ticket } => {
            let outcome = scan_changes(&cli.repo, cfg)?;
            let found = fragments_for_ticket(&outcome.fragments, *ticket);
            if found.is_empty() {
                return Err(FragmentError::NotFound(*ticket).into());
            }
            let data: Vec<Fragment> = found.into_iter().cloned().collect();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data })?
                );
            } else {
                for f in &data {
                    println!("{} ({})", f.path, f.category.key());
                    println!("{}", f.content);
                }
            }
        }
        Commands::Remove { ticket } => {
            let removed = fragment_remove(&cli.repo, cfg, *ticket)?;
            if removed == 0 {
                return Err(FragmentError::NotFound(*ticket).into());
            }
            audit(
                "remove",
                serde_json::json!({"ticket": ticket, "removed": removed}),
            );
            print_one(cli.json, removed, |n| format!("removed {} fragment(s)", n))?;
        }
        Commands::Check => {
            let outcome = scan_changes(&cli.repo, cfg)?;
            let report = check_report(&outcome);
            let ok = report.problems.is_empty();
            print_gate(cli.json, ok, report, |r| {
                let mut lines = vec![format!("changes check: {}", r.overall)];
                for p in &r.problems {
                    lines.push(format!("{}\t{}\t{}", p.path, p.code, p.message));
                }
                lines
            })?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Build {
            version,
            date,
            draft,
            keep,
        } => {
            let outcome = scan_changes(&cli.repo, cfg)?;
            if !outcome.problems.is_empty() {
                anyhow::bail!(
                    "changes tree has {} problem(s); run `chlog check` first",
                    outcome.problems.len()
                );
            }
            if outcome.fragments.is_empty() {
                anyhow::bail!("no fragments to build");
            }
            let date = match date {
                Some(d) => {
                    chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d")
                        .map_err(|_| anyhow::anyhow!("invalid --date {} (expected YYYY-MM-DD)", d))?;
                    d.clone()
                }
                None => today(),
            };
            let text = render_release(version, &date, &outcome.fragments);
            let mut sections: Vec<String> = outcome
                .fragments
                .iter()
                .filter(|f| !f.section.is_empty())
                .map(|f| f.section.clone())
                .collect();
            sections.sort();
            sections.dedup();

            if *draft {
                let report = BuildReport {
                    version: version.clone(),
                    date,
                    fragments: outcome.fragments.len(),
                    sections,
                    output: cfg.output.clone(),
                    draft: true,
                    text: Some(text.clone()),
                };
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: report
                        })?
                    );
                } else {
                    print!("{}", text);
                }
                return Ok(());
            }

            let output = write_release(&cli.repo, cfg, &text)?;
            if !*keep {
                let root = changes_root(&cli.repo, cfg);
                for f in &outcome.fragments {
                    std::fs::remove_file(root.join(&f.path))?;
                }
            }
            audit(
                "build",
                serde_json::json!({"version": version, "fragments": outcome.fragments.len()}),
            );
            let report = BuildReport {
                version: version.clone(),
                date,
                fragments: outcome.fragments.len(),
                sections,
                output,
                draft: false,
                text: None,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "built {} with {} fragment(s) -> {}",
                    r.version, r.fragments, r.output
                )
            })?;
        }
        Commands::Status => {
            let outcome = scan_changes(&cli.repo, cfg)?;
            let fragments = check_report(&outcome);
            let hooks = if precommit_path(&cli.repo, cfg).exists() {
                lint_hooks(&load_precommit(&cli.repo, cfg)?)
            } else {
                HookLintReport {
                    overall: "ok".to_string(),
                    repos: 0,
                    hooks: 0,
                    problems: vec![],
                }
            };
            let output_exists = Path::new(&cli.repo).join(&cfg.output).exists();
            let report = build_status_report(fragments, hooks, output_exists);
            print_one(cli.json, report, |r| format!("status: {}", r.overall))?;
        }
        Commands::Init | Commands::Add { .. } | Commands::Hooks { .. } => {
            unreachable!("handled by the admin layer")
        }
    }

    Ok(())
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
