//! Development automation for the `GoBarber` workspace.
//!
//! Run with: `cargo xtask <task>`
//!
//! Output goes straight to the terminal, so `println!`/`eprintln!` are used
//! instead of `tracing`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{anyhow, bail, Context, Result};

/// A named cargo invocation with the hint shown when it fails.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
    hint: &'static str,
}

const FMT: Step = Step {
    label: "Checking formatting",
    args: &["fmt", "--all", "--", "--check"],
    hint: "run 'cargo fmt --all' to fix",
};

const CLIPPY: Step = Step {
    label: "Running clippy",
    args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    hint: "see clippy output above",
};

const BINARY: Step = Step {
    label: "Checking the gobarber binary",
    args: &["check", "-p", "gobarber-app", "--bins"],
    hint: "gobarber-app does not compile",
};

const TEST: Step = Step {
    label: "Running tests",
    args: &["test", "--workspace"],
    hint: "see failing tests above",
};

const DENY: Step = Step {
    label: "Auditing dependencies",
    args: &["deny", "check"],
    hint: "cargo-deny reported issues",
};

const TASKS: &[(&str, &str)] = &[
    ("ci", "fmt, clippy, binary check and tests"),
    ("fmt", "check formatting"),
    ("clippy", "run clippy with warnings denied"),
    ("test", "run the workspace test suite"),
    ("deny", "audit dependencies with cargo-deny"),
    ("help", "show this message"),
];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_all(&[FMT, CLIPPY, BINARY, TEST]),
        Some("fmt") => run_step(&FMT),
        Some("clippy") => run_step(&CLIPPY),
        Some("test") => run_step(&TEST),
        Some("deny") => ensure_cargo_deny().and_then(|()| run_step(&DENY)),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(other) => {
            print_help();
            Err(anyhow!("unknown task '{other}'"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xtask failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("GoBarber development tasks\n");
    println!("USAGE:\n    cargo xtask <TASK>\n");
    println!("TASKS:");
    for (name, about) in TASKS {
        println!("    {name:<8}  {about}");
    }
}

fn run_all(steps: &[Step]) -> Result<()> {
    let total = steps.len();
    for (index, step) in steps.iter().enumerate() {
        println!("==> [{}/{total}] {}", index + 1, step.label);
        run_step(step)?;
    }
    println!("All checks passed");
    Ok(())
}

fn run_step(step: &Step) -> Result<()> {
    let status = Command::new("cargo")
        .args(step.args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", step.args.join(" ")))?;

    if !status.success() {
        bail!("{} failed ({status}): {}", step.label, step.hint);
    }
    Ok(())
}

fn ensure_cargo_deny() -> Result<()> {
    let installed = Command::new("cargo")
        .args(["deny", "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        bail!("cargo-deny is not installed; install it with 'cargo install cargo-deny'");
    }
    Ok(())
}
