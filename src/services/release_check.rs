use crate::domain::models::{CheckReport, HookLintReport, StatusReport};

pub fn build_status_report(
    fragments: CheckReport,
    hooks: HookLintReport,
    output_exists: bool,
) -> StatusReport {
    let overall = if fragments.overall == "ok" && hooks.overall == "ok" {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    let mut recommendations = Vec::new();
    if fragments.overall != "ok" {
        recommendations.push(
            "Run `chlog check` and fix the listed fragment problems before building a release."
                .to_string(),
        );
    }
    if hooks.overall != "ok" {
        recommendations.push(
            "Run `chlog hooks lint` and pin every remote hook repository to a tagged revision."
                .to_string(),
        );
    }
    if !output_exists {
        recommendations
            .push("No changelog output file yet; `chlog build --version <v>` creates it.".to_string());
    }

    StatusReport {
        overall,
        fragments,
        hooks,
        output_exists,
        recommendations,
    }
}
