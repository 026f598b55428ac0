use crate::cli::Category;
use crate::domain::constants::{
    DEFAULT_CHANGES_DIR, DEFAULT_IGNORED_FILES, DEFAULT_OUTPUT_FILE, DEFAULT_PRECOMMIT_FILE,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One parsed changelog fragment. `path` is relative to the changes
/// directory; the section is empty for root-level `other` fragments.
#[derive(Debug, Clone, Serialize)]
pub struct Fragment {
    pub ticket: u64,
    pub category: Category,
    pub counter: Option<u8>,
    pub section: String,
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FragmentItem {
    pub ticket: u64,
    pub category: Category,
    pub section: String,
    pub summary: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub path: String,
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub fragments: usize,
    pub problems: Vec<Problem>,
}

#[derive(Serialize)]
pub struct BuildReport {
    pub version: String,
    pub date: String,
    pub fragments: usize,
    pub sections: Vec<String>,
    pub output: String,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct HookEntry {
    pub repo: String,
    pub rev: Option<String>,
    pub id: String,
    pub args: Vec<String>,
}

#[derive(Serialize)]
pub struct HookLintReport {
    pub overall: String,
    pub repos: usize,
    pub hooks: usize,
    pub problems: Vec<Problem>,
}

#[derive(Serialize)]
pub struct StatusReport {
    pub overall: String,
    pub fragments: CheckReport,
    pub hooks: HookLintReport,
    pub output_exists: bool,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub changes: ChangesConfig,
}

#[derive(Debug, Deserialize)]
pub struct ChangesConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_precommit")]
    pub precommit: String,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for ChangesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            output: default_output(),
            precommit: default_precommit(),
            sections: Vec::new(),
            ignore: default_ignore(),
        }
    }
}

fn default_directory() -> String {
    DEFAULT_CHANGES_DIR.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_precommit() -> String {
    DEFAULT_PRECOMMIT_FILE.to_string()
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect()
}
