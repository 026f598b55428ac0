use crate::cli::Category;
use crate::domain::models::{ChangesConfig, Fragment};
use std::collections::BTreeMap;
use std::path::Path;

/// Renders one release: version title, category headings in release
/// order, section subheadings sorted by name, one bullet per fragment.
pub fn render_release(version: &str, date: &str, fragments: &[Fragment]) -> String {
    let mut blocks: Vec<String> = Vec::new();
    blocks.push(underlined(&format!("Version {} ({})", version, date), '='));
    for category in Category::RELEASE_ORDER {
        let mut by_section: BTreeMap<&str, Vec<&Fragment>> = BTreeMap::new();
        for f in fragments.iter().filter(|f| f.category == category) {
            by_section.entry(f.section.as_str()).or_default().push(f);
        }
        if by_section.is_empty() {
            continue;
        }
        blocks.push(underlined(category.heading(), '-'));
        for (section, mut frs) in by_section {
            frs.sort_by_key(|f| (f.ticket, f.counter));
            if !section.is_empty() {
                blocks.push(underlined(section, '^'));
            }
            for f in frs {
                blocks.push(bullet(f));
            }
        }
    }
    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

fn underlined(title: &str, ch: char) -> String {
    format!("{}\n{}", title, ch.to_string().repeat(title.chars().count()))
}

fn bullet(f: &Fragment) -> String {
    let mut out = String::new();
    for (i, line) in f.content.trim().lines().enumerate() {
        if i == 0 {
            out.push_str("- ");
            out.push_str(line.trim_end());
        } else {
            out.push('\n');
            let t = line.trim();
            if !t.is_empty() {
                out.push_str("  ");
                out.push_str(t);
            }
        }
    }
    out.push_str(&format!(" [#{}]", f.ticket));
    out
}

/// Prepends the rendered release to the output file, keeping whatever
/// history is already recorded there.
pub fn write_release(repo: &str, cfg: &ChangesConfig, text: &str) -> anyhow::Result<String> {
    let path = Path::new(repo).join(&cfg.output);
    let combined = if path.exists() {
        let existing = std::fs::read_to_string(&path)?;
        if existing.trim().is_empty() {
            text.to_string()
        } else {
            format!("{}\n{}", text, existing)
        }
    } else {
        text.to_string()
    };
    std::fs::write(&path, combined)?;
    Ok(path.to_string_lossy().to_string())
}
