use crate::cli::Category;
use crate::domain::constants::{CONFIG_FILE, CONFIG_TEMPLATE, MAX_COUNTER, README_TEMPLATE};
use crate::domain::models::ChangesConfig;
use crate::services::fragments::{changes_root, scan_changes, FragmentError};
use std::path::{Path, PathBuf};

pub fn fragment_create(
    repo: &str,
    cfg: &ChangesConfig,
    ticket: u64,
    category: Category,
    section: Option<&str>,
    message: &str,
) -> anyhow::Result<PathBuf> {
    let root = changes_root(repo, cfg);
    let dir = match (category, section) {
        (Category::Other, None) => root,
        (Category::Other, Some(s)) => {
            anyhow::bail!("`other` fragments live at the changes root, not in section {}", s)
        }
        (_, None) => anyhow::bail!("--section is required for {} fragments", category.key()),
        (_, Some(s)) => {
            let d = root.join(s);
            if !cfg.sections.iter().any(|x| x == s) && !d.is_dir() {
                return Err(FragmentError::UnknownSection(s.to_string()).into());
            }
            d
        }
    };
    std::fs::create_dir_all(&dir)?;
    let path = next_free_path(&dir, ticket, category)?;
    let mut body = message.trim_end().to_string();
    body.push('\n');
    std::fs::write(&path, body)?;
    Ok(path)
}

fn next_free_path(dir: &Path, ticket: u64, category: Category) -> anyhow::Result<PathBuf> {
    let base = dir.join(format!("{}.{}.rst", ticket, category.key()));
    if !base.exists() {
        return Ok(base);
    }
    for n in 1..=MAX_COUNTER {
        let candidate = dir.join(format!("{}.{}.{}.rst", ticket, category.key(), n));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(FragmentError::CounterExhausted(format!("{}.{}", ticket, category.key())).into())
}

/// Deletes every fragment belonging to a ticket, across sections and
/// categories. Returns how many files went away.
pub fn fragment_remove(repo: &str, cfg: &ChangesConfig, ticket: u64) -> anyhow::Result<usize> {
    let root = changes_root(repo, cfg);
    let outcome = scan_changes(repo, cfg)?;
    let mut removed = 0usize;
    for f in outcome.fragments.iter().filter(|f| f.ticket == ticket) {
        std::fs::remove_file(root.join(&f.path))?;
        removed += 1;
    }
    Ok(removed)
}

/// Scaffolds the changes directory, configured section directories, a
/// README describing the naming convention, and a default config file.
/// Existing files are left alone. Returns the paths it created.
pub fn init_changes_tree(repo: &str, cfg: &ChangesConfig) -> anyhow::Result<Vec<String>> {
    let mut created = Vec::new();
    let root = changes_root(repo, cfg);
    if !root.is_dir() {
        std::fs::create_dir_all(&root)?;
        created.push(root.to_string_lossy().to_string());
    }
    for s in &cfg.sections {
        let d = root.join(s);
        if !d.is_dir() {
            std::fs::create_dir_all(&d)?;
            created.push(d.to_string_lossy().to_string());
        }
    }
    let readme = root.join("README.rst");
    if !readme.exists() {
        std::fs::write(&readme, README_TEMPLATE)?;
        created.push(readme.to_string_lossy().to_string());
    }
    let config = Path::new(repo).join(CONFIG_FILE);
    if !config.exists() {
        std::fs::write(&config, CONFIG_TEMPLATE)?;
        created.push(config.to_string_lossy().to_string());
    }
    Ok(created)
}
