use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the marketplace simulation workspace",
    long_about = "A unified CLI for running simulations, revenue sweeps, benchmarks,\n\
                  and CI checks in the marketplace simulation workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single simulated year (5 drivers, 100 riders)
    Run,
    /// Run the full revenue sweep and export CSV/JSON results
    Sweep,
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run example scenarios
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn git(args: &[&str]) -> ExitStatus {
    eprintln!("+ git {}", args.join(" "));
    Command::new("git")
        .args(args)
        .status()
        .expect("failed to execute git")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_git(args: &[&str]) {
    let status = git(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test marketsim_core");
    run_cargo(&["test", "-p", "marketsim_core"]);

    step("Test marketsim_experiments");
    run_cargo(&["test", "-p", "marketsim_experiments"]);
}

fn ci_examples() {
    step("Run single_year (5 drivers, 100 riders)");
    run_cargo(&[
        "run",
        "-p",
        "marketsim_core",
        "--example",
        "single_year",
        "--release",
    ]);

    step("Run revenue_sweep (full pricing study)");
    run_cargo(&[
        "run",
        "-p",
        "marketsim_experiments",
        "--example",
        "revenue_sweep",
        "--release",
    ]);
}

fn ci_bench() {
    step("Run core benchmarks");
    run_cargo(&[
        "bench",
        "--package",
        "marketsim_core",
        "--bench",
        "performance",
    ]);

    step("Run sweep benchmarks");
    run_cargo(&[
        "bench",
        "--package",
        "marketsim_experiments",
        "--bench",
        "sweep",
    ]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_cargo(&[
                "run",
                "-p",
                "marketsim_core",
                "--example",
                "single_year",
                "--release",
            ]);
        }
        Commands::Sweep => {
            run_cargo(&[
                "run",
                "-p",
                "marketsim_experiments",
                "--example",
                "revenue_sweep",
                "--release",
            ]);
        }
        Commands::Bench => {
            run_cargo(&[
                "bench",
                "--package",
                "marketsim_core",
                "--bench",
                "performance",
            ]);
            run_cargo(&[
                "bench",
                "--package",
                "marketsim_experiments",
                "--bench",
                "sweep",
            ]);
        }
        Commands::BenchCompare => {
            let baseline_dir = Path::new("target/criterion");
            if baseline_dir.exists() {
                step("Removing existing benchmark data");
                std::fs::remove_dir_all(baseline_dir).expect("failed to remove target/criterion");
            }

            step("Stashing current changes");
            run_git(&[
                "stash",
                "push",
                "-m",
                "Temporary stash for benchmark comparison",
            ]);

            step("Running benchmark to create baseline");
            run_cargo(&[
                "bench",
                "--package",
                "marketsim_core",
                "--bench",
                "performance",
                "--",
                "--save-baseline",
                "main",
            ]);

            step("Reapplying changes");
            run_git(&["stash", "pop"]);

            step("Running benchmark comparing against baseline");
            run_cargo(&[
                "bench",
                "--package",
                "marketsim_core",
                "--bench",
                "performance",
                "--",
                "--baseline",
                "main",
            ]);

            eprintln!("\nDone! Check the output above to see performance comparison.");
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
