pub const CONFIG_FILE: &str = "chlog.toml";
pub const DEFAULT_CHANGES_DIR: &str = "docs/changes";
pub const DEFAULT_OUTPUT_FILE: &str = "CHANGES.rst";
pub const DEFAULT_PRECOMMIT_FILE: &str = ".pre-commit-config.yaml";
pub const DEFAULT_IGNORED_FILES: [&str; 2] = ["README.rst", "template.rst"];
pub const FRAGMENT_EXTENSION: &str = "rst";

/// A counter suffix is a single digit, so a ticket+category pair holds
/// at most the bare name plus `.1` through `.9`.
pub const MAX_COUNTER: u8 = 9;

/// Revisions that track a branch instead of pinning a release.
pub const MOVING_REFS: [&str; 3] = ["main", "master", "HEAD"];

pub const README_TEMPLATE: &str = "\
Changelog fragments
===================

One file per unreleased change:

    <ticket>.<category>.rst          (at the root, category ``other`` only)
    <section>/<ticket>.<category>.rst (category ``bugfix``, ``feature``, ``api`` or ``perf``)

A single-digit counter suffix (``<ticket>.<category>.<n>.rst``) separates
multiple fragments for the same ticket. Fragments are aggregated into the
release changelog by ``chlog build`` and removed once consumed.
";

pub const CONFIG_TEMPLATE: &str = "\
[changes]
# directory = \"docs/changes\"
# output = \"CHANGES.rst\"
# precommit = \".pre-commit-config.yaml\"
# sections = []
# ignore = [\"README.rst\", \"template.rst\"]
";
