use crate::domain::constants::CONFIG_FILE;
use crate::domain::models::{ChangesConfig, ConfigFile};
use std::path::{Path, PathBuf};

/// Loads `chlog.toml` from the repo root; a missing file means defaults.
pub fn load_config(repo: &str) -> anyhow::Result<ChangesConfig> {
    let p = Path::new(repo).join(CONFIG_FILE);
    if !p.exists() {
        return Ok(ChangesConfig::default());
    }
    let raw = std::fs::read_to_string(p)?;
    let file: ConfigFile = toml::from_str(&raw)?;
    Ok(file.changes)
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/chlog/audit.jsonl");
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

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
