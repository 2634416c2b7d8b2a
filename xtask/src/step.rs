//! Running one cargo invocation as a reported build or test step.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Run `cargo <args>` as the step `label`.
///
/// Returns the captured stdout when the command succeeds and `None` when an
/// optional step fails. A required step that fails, or a cargo that cannot
/// be started at all, is an error.
pub fn cargo_step(label: &str, args: &[&str], required: bool) -> Result<Option<String>> {
    run_step("cargo", label, args, required)
}

fn run_step(program: &str, label: &str, args: &[&str], required: bool) -> Result<Option<String>> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to start `{program}` for {label}"))?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if output.status.success() {
        println!(
            "{}",
            format!("  ✓ {label} passed in {:.2}s", start.elapsed().as_secs_f64()).green()
        );
        return Ok(Some(stdout));
    }

    let marker = if required {
        format!("  ✗ {label} failed").red().bold()
    } else {
        format!("  ⚠ {label} reported issues").yellow().bold()
    };
    eprintln!("{marker}");
    eprintln!();
    for line in stdout.lines().chain(String::from_utf8_lossy(&output.stderr).lines()) {
        eprintln!("  {line}");
    }
    if required {
        bail!("{label} failed");
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::run_step;

    #[test]
    fn test_missing_program_is_an_error() {
        let err = run_step("xtask-no-such-program", "Missing tool", &[], false).unwrap_err();
        assert!(err.to_string().contains("Failed to start"), "{err}");
    }
}
