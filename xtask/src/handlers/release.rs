use crate::services::git::Git;
use crate::services::utils::get_project_root;
use anyhow::{Context, Result, bail};
use std::fmt;
use themis_config::{BuildKind, VERSION, Version};

/// Something that blocks (or, for a dirty tree with `--allow-dirty`, merely taints) a release.
#[derive(Debug, PartialEq, Eq)]
pub enum Finding {
    Untagged,
    MalformedTag { tag: String, reason: String },
    TagMismatch { tag: Version, compiled: Version },
    TestBuild,
    DirtyTree { changes: Vec<String> },
    GitUnavailable { reason: String },
}

impl Finding {
    #[must_use]
    pub const fn is_fatal(&self, allow_dirty: bool) -> bool {
        !(allow_dirty && matches!(self, Self::DirtyTree { .. }))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untagged => f.write_str("HEAD is not tagged"),
            Self::MalformedTag { tag, reason } => {
                write!(f, "tag '{tag}' is not a version: {reason}")
            },
            Self::TagMismatch { tag, compiled } => {
                write!(f, "tag says {tag} but the build reports {compiled}")
            },
            Self::TestBuild => f.write_str("compiled as a test build (`test-build` feature is on)"),
            Self::GitUnavailable { reason } => write!(f, "repository state unknown: {reason}"),
            Self::DirtyTree { changes } => {
                write!(f, "working tree has {} uncommitted change(s)", changes.len())?;
                for change in changes {
                    write!(f, "\n      {change}")?;
                }
                Ok(())
            },
        }
    }
}

/// Checks that `HEAD` is ready to ship as the compiled version.
///
/// The compiled build kind follows xtask's own features:
/// `cargo xtask release-check` checks a release build, and
/// `cargo run -p xtask --features test-build -- release-check` checks a test build (and fails).
///
/// # Errors
/// Returns an error if the project root cannot be found or any fatal finding is reported.
pub fn release_check(allow_dirty: bool) -> Result<()> {
    let git = Git::new(get_project_root()?);

    println!("🔖 Compiled: {}", VERSION.label());

    let findings = match read_repository(&git) {
        Ok((tag, changes)) => {
            println!("🏷️  Tag on HEAD: {}", tag.as_deref().unwrap_or("<none>"));
            evaluate(VERSION, tag.as_deref(), changes)
        },
        Err(err) => {
            let mut findings = build_findings(VERSION);
            findings.push(Finding::GitUnavailable { reason: format!("{err:#}") });
            findings
        },
    };

    let mut fatal = 0;
    for finding in &findings {
        if finding.is_fatal(allow_dirty) {
            fatal += 1;
            println!("❌ {finding}");
        } else {
            println!("⚠️  {finding}");
        }
    }

    if fatal > 0 {
        bail!("Release check failed with {fatal} problem(s)");
    }

    println!("✅ Ready to release {VERSION}");
    Ok(())
}

fn read_repository(git: &Git) -> Result<(Option<String>, Vec<String>)> {
    let tag = git.exact_tag().context("Failed to read the tag on HEAD")?;
    let changes = git.uncommitted_changes().context("Failed to read the working tree status")?;
    Ok((tag, changes))
}

/// Findings about the build itself, independent of the repository state.
#[must_use]
pub fn build_findings(compiled: Version) -> Vec<Finding> {
    if compiled.build == BuildKind::Test { vec![Finding::TestBuild] } else { Vec::new() }
}

/// Compares the compiled version with the tag on `HEAD` and the working tree state.
#[must_use]
pub fn evaluate(compiled: Version, tag: Option<&str>, changes: Vec<String>) -> Vec<Finding> {
    let mut findings = build_findings(compiled);

    match tag.map(|raw| (raw, parse_tag(raw))) {
        None => findings.push(Finding::Untagged),
        Some((raw, Err(err))) => {
            findings.push(Finding::MalformedTag { tag: raw.to_owned(), reason: format!("{err:#}") });
        },
        Some((_, Ok(tagged))) if tagged != compiled => {
            findings.push(Finding::TagMismatch { tag: tagged, compiled });
        },
        Some(_) => {},
    }

    if !changes.is_empty() {
        findings.push(Finding::DirtyTree { changes });
    }

    findings
}

/// Parses a release tag such as `1.2.0`, `v1.2.0` or `v1.2.0-test`.
///
/// # Errors
/// Returns an error unless the tag is exactly three decimal components without leading zeros.
pub fn parse_tag(tag: &str) -> Result<Version> {
    let raw = tag.strip_prefix('v').unwrap_or(tag);
    let (numbers, build) = raw
        .strip_suffix("-test")
        .map_or((raw, BuildKind::Release), |numbers| (numbers, BuildKind::Test));

    let mut parts = numbers.split('.');
    let mut component = |name: &str| -> Result<u32> {
        let part = parts.next().with_context(|| format!("missing {name} component"))?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            bail!("{name} component '{part}' is not a decimal number");
        }
        if part.len() > 1 && part.starts_with('0') {
            bail!("{name} component '{part}' has a leading zero");
        }
        part.parse().with_context(|| format!("{name} component '{part}' is out of range"))
    };

    let (major, minor, patch) = (component("major")?, component("minor")?, component("patch")?);
    if parts.next().is_some() {
        bail!("expected exactly three components");
    }

    Ok(Version::new(major, minor, patch, build))
}
