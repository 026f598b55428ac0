use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "chlog", version, about = "Changelog fragment CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Repository root containing the changes directory"
    )]
    pub repo: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Init,
    Add {
        ticket: u64,
        #[arg(long, value_enum)]
        category: Category,
        #[arg(long)]
        section: Option<String>,
        #[arg(long, short = 'm', help = "Fragment text (first line becomes the summary)")]
        message: String,
    },
    List {
        #[arg(long)]
        section: Option<String>,
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    Show {
        ticket: u64,
    },
    Remove {
        ticket: u64,
    },
    Check,
    Build {
        #[arg(long)]
        version: String,
        #[arg(long, help = "Release date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,
        #[arg(long, default_value_t = false, help = "Render only, touch nothing")]
        draft: bool,
        #[arg(long, default_value_t = false, help = "Keep consumed fragments on disk")]
        keep: bool,
    },
    Status,
    Hooks {
        #[command(subcommand)]
        command: HookCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HookCommands {
    List {
        #[arg(long, help = "Only hooks whose repository URL contains this text")]
        url: Option<String>,
    },
    Lint,
}

/// Fragment categories, in the order they appear in a rendered release.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feature,
    Api,
    Bugfix,
    Perf,
    Other,
}

impl Category {
    pub const RELEASE_ORDER: [Category; 5] = [
        Category::Feature,
        Category::Api,
        Category::Bugfix,
        Category::Perf,
        Category::Other,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "feature" => Some(Category::Feature),
            "api" => Some(Category::Api),
            "bugfix" => Some(Category::Bugfix),
            "perf" => Some(Category::Perf),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::Api => "api",
            Category::Bugfix => "bugfix",
            Category::Perf => "perf",
            Category::Other => "other",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::Feature => "New Features",
            Category::Api => "API Changes",
            Category::Bugfix => "Bug Fixes",
            Category::Perf => "Performance Improvements",
            Category::Other => "Other Changes and Additions",
        }
    }
}
