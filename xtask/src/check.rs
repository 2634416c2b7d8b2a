use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::cargo_step;

/// Bare-metal target used to prove the library crates stay `no_std`.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

/// `(label, cargo args, required)`; clippy and fmt only report.
const STEPS: &[(&str, &[&str], bool)] = &[
    (
        "Checking effects + watchface (no_std)",
        &[
            "check",
            "-p",
            "effects",
            "-p",
            "watchface",
            "--target",
            EMBEDDED_TARGET,
            "--no-default-features",
        ],
        true,
    ),
    (
        "Checking watchface (defmt)",
        &["check", "-p", "watchface", "--target", EMBEDDED_TARGET, "--features", "defmt"],
        true,
    ),
    (
        "Checking workspace (host, std)",
        &["check", "--workspace", "--all-targets"],
        true,
    ),
    (
        "Running clippy lints",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        false,
    ),
    (
        "Checking code formatting",
        &["fmt", "--all", "--check"],
        false,
    ),
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let start = Instant::now();
    for &(label, args, required) in STEPS {
        cargo_step(label, args, required)?;
        println!();
    }

    println!(
        "{}",
        format!("✓ All checks completed in {:.2}s", start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::STEPS;

    #[test]
    fn test_embedded_builds_are_required() {
        for (label, args, required) in STEPS {
            if args.contains(&"--target") {
                assert!(*required, "{label}");
            }
        }
        assert!(STEPS.iter().any(|(_, args, _)| args.first() == Some(&"fmt")));
    }
}
