use crate::domain::models::{ChangesConfig, HookEntry, HookLintReport, Problem};
use crate::domain::constants::MOVING_REFS;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct PreCommitConfig {
    #[serde(default)]
    pub repos: Vec<HookRepo>,
}

#[derive(Debug, Deserialize)]
pub struct HookRepo {
    pub repo: String,
    #[serde(default)]
    pub rev: Option<String>,
    #[serde(default)]
    pub hooks: Vec<HookDef>,
}

#[derive(Debug, Deserialize)]
pub struct HookDef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub args: Vec<String>,
}

pub fn precommit_path(repo: &str, cfg: &ChangesConfig) -> std::path::PathBuf {
    Path::new(repo).join(&cfg.precommit)
}

pub fn load_precommit(repo: &str, cfg: &ChangesConfig) -> anyhow::Result<PreCommitConfig> {
    let p = precommit_path(repo, cfg);
    let raw = std::fs::read_to_string(&p)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", p.display(), e))?;
    Ok(serde_yaml::from_str(&raw)?)
}

pub fn list_hooks(config: &PreCommitConfig, repo_filter: Option<&str>) -> Vec<HookEntry> {
    let mut out = Vec::new();
    for r in &config.repos {
        if repo_filter.map(|f| !r.repo.contains(f)).unwrap_or(false) {
            continue;
        }
        for h in &r.hooks {
            out.push(HookEntry {
                repo: r.repo.clone(),
                rev: r.rev.clone(),
                id: h.id.clone(),
                args: h.args.clone(),
            });
        }
    }
    out
}

fn is_builtin(repo: &str) -> bool {
    repo == "local" || repo == "meta"
}

/// Static hygiene checks over the hook configuration. The hooks are
/// never executed; an external orchestrator owns that.
pub fn lint_hooks(config: &PreCommitConfig) -> HookLintReport {
    let mut problems = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut hooks = 0usize;
    for r in &config.repos {
        // several `local`/`meta` blocks are normal; only remote URLs must be unique
        if !is_builtin(&r.repo) && !seen.insert(r.repo.as_str()) {
            problems.push(Problem {
                path: r.repo.clone(),
                code: "DUPLICATE_REPO".to_string(),
                message: format!("hook repository listed more than once: {}", r.repo),
            });
        }
        if !is_builtin(&r.repo) {
            match &r.rev {
                None => problems.push(Problem {
                    path: r.repo.clone(),
                    code: "UNPINNED".to_string(),
                    message: format!("remote hook repository has no rev: {}", r.repo),
                }),
                Some(rev) if MOVING_REFS.contains(&rev.as_str()) => problems.push(Problem {
                    path: r.repo.clone(),
                    code: "MOVING_REV".to_string(),
                    message: format!("rev `{}` tracks a branch instead of a release: {}", rev, r.repo),
                }),
                Some(_) => {}
            }
        }
        if r.hooks.is_empty() {
            problems.push(Problem {
                path: r.repo.clone(),
                code: "NO_HOOKS".to_string(),
                message: format!("hook repository declares no hooks: {}", r.repo),
            });
        }
        for h in &r.hooks {
            hooks += 1;
            if h.id.trim().is_empty() {
                problems.push(Problem {
                    path: r.repo.clone(),
                    code: "EMPTY_HOOK_ID".to_string(),
                    message: format!("hook without an id under {}", r.repo),
                });
            }
        }
    }
    HookLintReport {
        overall: if problems.is_empty() {
            "ok"
        } else {
            "needs_attention"
        }
        .to_string(),
        repos: config.repos.len(),
        hooks,
        problems,
    }
}
