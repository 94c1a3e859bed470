use crate::services::utils::normalize_project_name;
use std::process::Command;

/// The suite runs once per build kind: default features are a release build,
/// `--all-features` turns on `test-build`.
const BUILD_PASSES: &[(&str, &[&str])] = &[("release", &[]), ("test", &["--all-features"])];

/// Runs tests in the workspace or a specific crate, for both release and test builds.
///
/// # Errors
/// Returns an error if any test pass fails or the test runner cannot be started.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let has_nextest = Command::new("cargo-nextest").arg("--version").output().is_ok();
    let runner = if has_nextest { "nextest" } else { "cargo test" };

    for (build, features) in BUILD_PASSES {
        println!("🧪 Running {} tests ({build} build) via '{runner}'...", target_label(project));

        let mut args: Vec<String> = if has_nextest {
            vec!["nextest".into(), "run".into()]
        } else {
            vec!["test".into()]
        };
        args.extend(target_args(project));
        args.extend(features.iter().map(|f| (*f).to_owned()));

        if has_nextest {
            args.extend(
                ["--failure-output", "immediate-final", "--success-output", "never"]
                    .into_iter()
                    .map(String::from),
            );
        } else {
            args.extend(["--tests", "--lib", "--bins", "--", "-q"].into_iter().map(String::from));
        }

        let status = Command::new("cargo").args(args).status()?;
        if !status.success() {
            anyhow::bail!("Tests failed for the {build} build!");
        }
    }

    Ok(())
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if the doctest execution fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    println!("📚 Running {} doc tests via 'cargo test --doc'...", target_label(project));

    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    args.extend(target_args(project));

    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("Doc tests failed!");
    }

    Ok(())
}

fn is_workspace(project: Option<&str>) -> bool {
    project.is_none_or(|value| value == "all")
}

fn target_label(project: Option<&str>) -> &'static str {
    if is_workspace(project) { "workspace" } else { "crate" }
}

fn target_args(project: Option<&str>) -> Vec<String> {
    match project {
        Some(project) if !is_workspace(Some(project)) => {
            vec!["-p".into(), normalize_project_name(project)]
        },
        _ => vec!["--workspace".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_means_workspace() {
        assert_eq!(target_args(None), ["--workspace"]);
        assert_eq!(target_args(Some("all")), ["--workspace"]);
        assert_eq!(target_args(Some("config")), ["-p", "themis-config"]);
    }
}
