//! Build helpers for resolute: man pages and shell completions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};

const BIN_NAME: &str = "resolute";

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for resolute")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and every subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only this shell (default: all supported shells)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let cmd = resolute::command();

    clap_mangen::generate_to(cmd, out_dir).context("generate man pages")?;
    eprintln!("Wrote man pages to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shell: Option<Shell>) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let shells = shell.map_or_else(
        || vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish],
        |shell| vec![shell],
    );

    let mut cmd = resolute::command();
    for shell in shells {
        let path = generate_to(shell, &mut cmd, BIN_NAME, out_dir)
            .with_context(|| format!("generate {shell} completions"))?;
        eprintln!("Wrote completion to {}", path.display());
    }
    Ok(())
}
