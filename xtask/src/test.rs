use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::cargo_step;

/// One `cargo test` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suite {
    label: &'static str,
    args: &'static [&'static str],
    /// Optional suites report failures without failing the run.
    required: bool,
}

const UNIT: Suite = Suite {
    label: "Unit tests",
    args: &["test", "--lib", "--bins", "--workspace"],
    required: true,
};

const INTEGRATION: Suite = Suite {
    label: "Integration tests",
    args: &["test", "--workspace", "--test", "*"],
    required: true,
};

const DOC: Suite = Suite {
    label: "Doc tests",
    args: &["test", "--doc", "--workspace"],
    required: false,
};

/// Suites selected by the `--unit` / `--integration` flags; doc tests only
/// run in a full pass.
fn suites(unit_only: bool, integration_only: bool) -> Vec<Suite> {
    match (unit_only, integration_only) {
        (true, false) => vec![UNIT],
        (false, true) => vec![INTEGRATION],
        _ => vec![UNIT, INTEGRATION, DOC],
    }
}

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let start = Instant::now();
    for suite in suites(unit_only, integration_only) {
        if let Some(stdout) = cargo_step(suite.label, suite.args, suite.required)? {
            println!("{}", format!("    {}", extract_test_summary(&stdout)).dimmed());
        }
        println!();
    }

    println!(
        "{}",
        format!("✓ Tests finished in {:.2}s", start.elapsed().as_secs_f64())
            .green()
            .bold()
    );
    println!();
    Ok(())
}

fn extract_test_summary(output: &str) -> String {
    // Sum every "test result: ok. 5 passed; 0 failed; ..." line (one per test binary).
    let mut passed = 0u32;
    let mut failed = 0u32;
    let mut binaries = 0u32;
    for line in output.lines().filter(|l| l.contains("test result:")) {
        binaries += 1;
        for part in line.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let count: u32 = count.parse().unwrap_or(0);
            match kind {
                "passed" => passed += count,
                "failed" => failed += count,
                _ => {}
            }
        }
    }
    if binaries == 0 {
        return "(summary not available)".to_string();
    }
    format!("({passed} passed, {failed} failed across {binaries} binaries)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_select_suites() {
        assert_eq!(suites(true, false), [UNIT]);
        assert_eq!(suites(false, true), [INTEGRATION]);
        assert_eq!(suites(false, false), [UNIT, INTEGRATION, DOC]);
        assert_eq!(suites(true, true), [UNIT, INTEGRATION, DOC]);
    }

    #[test]
    fn test_summary_sums_binaries() {
        let output = "test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out\n\
                      test result: ok. 7 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out\n";
        assert_eq!(
            extract_test_summary(output),
            "(12 passed, 1 failed across 2 binaries)"
        );
    }

    #[test]
    fn test_summary_without_results() {
        assert_eq!(extract_test_summary("compiling"), "(summary not available)");
    }
}
