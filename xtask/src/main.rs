//! Build automation tasks for the segment clock.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the segment clock", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: formatting, clippy, tests, docs and a cross build
    CheckAll,
    /// Cross-compile the clock binary for a single-board computer
    Build {
        #[arg(long, default_value = "aarch64")]
        board: Board,
        #[arg(long)]
        release: bool,
    },
    /// Build and run the clock on this machine
    Run {
        /// Read arrows, +, - and Enter from the terminal instead of GPIO
        #[arg(long)]
        keyboard: bool,
        #[arg(long)]
        release: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    /// 64-bit Raspberry Pi OS (Pi 3, 4, 5, Zero 2 W)
    Aarch64,
    /// 32-bit Raspberry Pi OS
    Armv7,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Aarch64 => write!(f, "aarch64"),
            Board::Armv7 => write!(f, "armv7"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Aarch64 => "aarch64-unknown-linux-gnu",
            Board::Armv7 => "armv7-unknown-linux-gnueabihf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board, release } => build_board(board, release),
        Commands::Run { keyboard, release } => run_clock(keyboard, release),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Checking formatting...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["fmt", "--all", "--check"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running clippy...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "clippy",
        "--workspace",
        "--all-targets",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running clippy without hardware support...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "clippy",
        "--lib",
        "--tests",
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running tests...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["test", "--workspace"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["doc", "--no-deps"]),
    ) {
        return ExitCode::FAILURE;
    }

    let board = Board::Aarch64;
    println!("\n{}", format!("==> Cross-building for {board}...").cyan());
    if !installed_targets().iter().any(|target| target == board.target()) {
        println!(
            "  {}",
            format!("Skipping: rustup target add {}", board.target()).bright_black()
        );
    } else if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--bin",
        "segment-clock",
        "--target",
        board.target(),
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_board(board: Board, release: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let target = board.target();
    println!("{}", format!("Building segment-clock for {board}").cyan());
    println!("  Target: {}", target.bright_black());

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["build", "--bin", "segment-clock", "--target", target]);
    if release {
        cmd.arg("--release");
    }

    if run_command(&mut cmd) {
        let profile = if release { "release" } else { "debug" };
        println!(
            "{}",
            format!("Built target/{target}/{profile}/segment-clock").green()
        );
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            format!("Note: install the target with: rustup target add {target}").yellow()
        );
        ExitCode::FAILURE
    }
}

fn run_clock(keyboard: bool, release: bool) -> ExitCode {
    let workspace_root = workspace_root();
    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["run", "--bin", "segment-clock"]);
    if release {
        cmd.arg("--release");
    }
    if keyboard {
        cmd.env("CLOCK_GPIO", "false").env("CLOCK_KEYBOARD", "true");
        println!(
            "{}",
            "Keyboard input: arrow keys or +/-, then Enter. Enter alone confirms.".bright_black()
        );
    }

    if run_command(&mut cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    // cargo runs aliases from the directory it was invoked in; the workspace root is the
    // parent of this crate's manifest.
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(std::path::Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current directory"))
}

fn installed_targets() -> Vec<String> {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        return Vec::new();
    };
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
