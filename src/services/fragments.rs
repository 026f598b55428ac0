use crate::cli::Category;
use crate::domain::constants::FRAGMENT_EXTENSION;
use crate::domain::models::{ChangesConfig, CheckReport, Fragment, FragmentItem, Problem};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum FragmentError {
    #[error("fragment filename does not match <ticket>.<category>[.<digit>].rst: {0}")]
    BadFilename(String),
    #[error("unknown category in fragment name: {0}")]
    UnknownCategory(String),
    #[error("category {category} is not allowed {place}: {path}")]
    MisplacedCategory {
        category: String,
        place: String,
        path: String,
    },
    #[error("fragment has no content: {0}")]
    EmptyFragment(String),
    #[error("no fragment found for ticket {0}")]
    NotFound(u64),
    #[error("no free counter slot left for {0}")]
    CounterExhausted(String),
    #[error("section not found: {0}")]
    UnknownSection(String),
}

impl FragmentError {
    pub fn code(&self) -> &'static str {
        match self {
            FragmentError::BadFilename(_) => "BAD_FILENAME",
            FragmentError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            FragmentError::MisplacedCategory { .. } => "MISPLACED_CATEGORY",
            FragmentError::EmptyFragment(_) => "EMPTY_FRAGMENT",
            FragmentError::NotFound(_) => "NOT_FOUND",
            FragmentError::CounterExhausted(_) => "COUNTER_EXHAUSTED",
            FragmentError::UnknownSection(_) => "UNKNOWN_SECTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName {
    pub ticket: u64,
    pub category: Category,
    pub counter: Option<u8>,
}

/// Parses `<ticket>.<category>[.<digit>].rst`. The counter is exactly one
/// digit; anything longer is a bad filename, not a big counter.
pub fn parse_fragment_name(name: &str) -> Result<ParsedName, FragmentError> {
    let parts: Vec<&str> = name.split('.').collect();
    let (ticket, category, counter, ext) = match parts.as_slice() {
        [t, c, e] => (*t, *c, None, *e),
        [t, c, n, e] => (*t, *c, Some(*n), *e),
        _ => return Err(FragmentError::BadFilename(name.to_string())),
    };
    if ext != FRAGMENT_EXTENSION {
        return Err(FragmentError::BadFilename(name.to_string()));
    }
    if ticket.is_empty() || !ticket.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FragmentError::BadFilename(name.to_string()));
    }
    let ticket: u64 = ticket
        .parse()
        .map_err(|_| FragmentError::BadFilename(name.to_string()))?;
    let counter = match counter {
        None => None,
        Some(n) => {
            let b = n.as_bytes();
            if b.len() == 1 && b[0].is_ascii_digit() {
                Some(b[0] - b'0')
            } else {
                return Err(FragmentError::BadFilename(name.to_string()));
            }
        }
    };
    let category = Category::parse(category)
        .ok_or_else(|| FragmentError::UnknownCategory(name.to_string()))?;
    Ok(ParsedName {
        ticket,
        category,
        counter,
    })
}

pub struct ScanOutcome {
    pub fragments: Vec<Fragment>,
    pub problems: Vec<Problem>,
}

pub fn changes_root(repo: &str, cfg: &ChangesConfig) -> PathBuf {
    Path::new(repo).join(&cfg.directory)
}

/// Walks the changes tree one level deep: fragments at the root and in
/// section directories. Ignored names are skipped, everything else must
/// parse and sit in the right place.
pub fn scan_changes(repo: &str, cfg: &ChangesConfig) -> anyhow::Result<ScanOutcome> {
    let root = changes_root(repo, cfg);
    if !root.is_dir() {
        anyhow::bail!("changes directory not found: {}", root.display());
    }
    let mut out = ScanOutcome {
        fragments: Vec::new(),
        problems: Vec::new(),
    };
    scan_dir(&root, "", cfg, &mut out)?;
    out.fragments
        .sort_by(|a, b| (a.section.as_str(), a.category, a.ticket, a.counter)
            .cmp(&(b.section.as_str(), b.category, b.ticket, b.counter)));
    Ok(out)
}

fn scan_dir(
    dir: &Path,
    section: &str,
    cfg: &ChangesConfig,
    out: &mut ScanOutcome,
) -> anyhow::Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let rel = if section.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", section, name)
        };
        if entry.file_type()?.is_dir() {
            if section.is_empty() {
                scan_dir(&entry.path(), &name, cfg, out)?;
            } else {
                out.problems.push(Problem {
                    path: rel,
                    code: "STRAY_DIR".to_string(),
                    message: "nested directories are not part of the changes layout".to_string(),
                });
            }
            continue;
        }
        if cfg.ignore.iter().any(|i| i == &name) {
            continue;
        }
        let parsed = match parse_fragment_name(&name) {
            Ok(p) => p,
            Err(e) => {
                out.problems.push(Problem {
                    path: rel,
                    code: e.code().to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };
        if let Some(e) = placement_error(&parsed, section, &rel) {
            out.problems.push(Problem {
                path: rel,
                code: e.code().to_string(),
                message: e.to_string(),
            });
            continue;
        }
        let content = std::fs::read_to_string(entry.path())?;
        if content.trim().is_empty() {
            let e = FragmentError::EmptyFragment(rel.clone());
            out.problems.push(Problem {
                path: rel,
                code: e.code().to_string(),
                message: e.to_string(),
            });
            continue;
        }
        out.fragments.push(Fragment {
            ticket: parsed.ticket,
            category: parsed.category,
            counter: parsed.counter,
            section: section.to_string(),
            path: rel,
            content: content.trim_end().to_string(),
        });
    }
    Ok(())
}

fn placement_error(parsed: &ParsedName, section: &str, rel: &str) -> Option<FragmentError> {
    if section.is_empty() && parsed.category != Category::Other {
        Some(FragmentError::MisplacedCategory {
            category: parsed.category.key().to_string(),
            place: "at the changes root (only `other` fragments live there)".to_string(),
            path: rel.to_string(),
        })
    } else if !section.is_empty() && parsed.category == Category::Other {
        Some(FragmentError::MisplacedCategory {
            category: parsed.category.key().to_string(),
            place: "inside a section directory".to_string(),
            path: rel.to_string(),
        })
    } else {
        None
    }
}

pub fn check_report(outcome: &ScanOutcome) -> CheckReport {
    CheckReport {
        overall: if outcome.problems.is_empty() {
            "ok"
        } else {
            "needs_attention"
        }
        .to_string(),
        fragments: outcome.fragments.len(),
        problems: outcome.problems.clone(),
    }
}

pub fn filter_fragments<'a>(
    fragments: &'a [Fragment],
    section: Option<&str>,
    category: Option<Category>,
) -> Vec<&'a Fragment> {
    fragments
        .iter()
        .filter(|f| section.map(|s| s == f.section).unwrap_or(true))
        .filter(|f| category.map(|c| c == f.category).unwrap_or(true))
        .collect()
}

pub fn fragments_for_ticket<'a>(fragments: &'a [Fragment], ticket: u64) -> Vec<&'a Fragment> {
    fragments.iter().filter(|f| f.ticket == ticket).collect()
}

pub fn fragment_item(f: &Fragment) -> FragmentItem {
    FragmentItem {
        ticket: f.ticket,
        category: f.category,
        section: f.section.clone(),
        summary: f.content.lines().next().unwrap_or("").trim().to_string(),
        path: f.path.clone(),
    }
}
