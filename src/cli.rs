// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "commitgem")]
#[command(version)]
#[command(about = "Gemini-powered commit message generator", long_about = None)]
pub struct Cli {
    /// Gemini model name
    #[arg(short, long, env = "COMMITGEM_MODEL")]
    pub model: Option<String>,

    /// Extra guidance describing the intent of the change
    #[arg(short, long)]
    pub context: Option<String>,

    /// Number of recent commit subjects to show the model
    #[arg(short = 'n', long)]
    pub last_commits: Option<usize>,

    /// Auto-confirm and commit without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print message only, don't commit
    #[arg(long)]
    pub dry_run: bool,

    /// Show the prompt sent to the model
    #[arg(long)]
    pub show_prompt: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
