// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::GenerationRequestContext;
use crate::error::{Error, Result};
use crate::services::{
    git::GitService,
    llm::{self, GenerativeClient},
    prompt::PromptBuilder,
    sanitizer::CommitSanitizer,
};

pub struct App {
    cli: Cli,
    config: Config,
    cancel_token: CancellationToken,
}

enum Choice {
    Commit,
    Regenerate,
    Cancel,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            model = %config.model,
            max_diff_lines = config.max_diff_lines,
            last_commits = config.last_commits,
            "config loaded"
        );
        Ok(Self {
            cli,
            config,
            cancel_token: CancellationToken::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Ctrl+C cancels any in-flight generation
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            signal::ctrl_c().await.ok();
            cancel.cancel();
        });

        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.generate_commit().await
    }

    async fn generate_commit(&mut self) -> Result<()> {
        self.print_status("Analyzing staged changes...");

        let git = GitService::discover()?;
        let diff = git.staged_diff(self.config.max_diff_lines).await?;
        let staged = git.staged_files().await?;
        let related = git.related_files(&staged).await?;
        let last_commits = git.last_commits(self.config.last_commits).await?;

        self.print_info(&format!(
            "{} staged files, {} related directories, {} recent commits",
            staged.len(),
            related.len(),
            last_commits.len()
        ));

        let user_context = self.cli.context.clone().unwrap_or_default();

        if self.cli.show_prompt {
            let ctx = GenerationRequestContext::new(diff.as_str())
                .with_user_context(user_context.as_str())
                .with_files(llm::flatten_related_files(&related))
                .with_last_commits(last_commits.clone());
            let prompt = PromptBuilder::build(&ctx)?;
            eprintln!("{}", style("--- SYSTEM ---").dim());
            eprintln!("{}", *llm::SYSTEM_INSTRUCTION);
            eprintln!("{}", style("--- PROMPT ---").dim());
            eprintln!("{prompt}");
            eprintln!("{}", style("--- END PROMPT ---").dim());
        }

        let client = llm::create_client(&self.config)?;

        loop {
            if self.cancel_token.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let raw = self
                .generate_once(client.as_ref(), &diff, &user_context, &related, &last_commits)
                .await?;

            debug!(raw_len = raw.len(), "sanitizing model response");
            let message = CommitSanitizer::sanitize(&raw, &self.config.format)?;

            if self.cli.dry_run {
                println!("{message}");
                return Ok(());
            }

            let is_interactive =
                std::io::stdout().is_terminal() && std::io::stdin().is_terminal();

            if !self.cli.yes && !is_interactive {
                self.print_warning("Not a terminal. Use --yes to auto-confirm in scripts/hooks.");
                println!("{message}");
                return Ok(());
            }

            let choice = if self.cli.yes {
                Choice::Commit
            } else {
                eprintln!("\n{}", style("Generated commit message:").bold());
                eprintln!("{}", style(&message).green());
                eprintln!();
                Self::ask()?
            };

            match choice {
                Choice::Commit => {
                    git.commit(&message).await?;
                    eprintln!("{} Committed!", style("✓").green().bold());
                    return Ok(());
                }
                Choice::Regenerate => continue,
                Choice::Cancel => return Err(Error::Cancelled),
            }
        }
    }

    async fn generate_once(
        &self,
        client: &dyn GenerativeClient,
        diff: &str,
        user_context: &str,
        related: &BTreeMap<String, String>,
        last_commits: &[String],
    ) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Asking {} ({})...", client.name(), self.config.model));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = llm::analyze_changes(
            client,
            self.cancel_token.clone(),
            diff,
            user_context,
            related,
            &self.config.model,
            last_commits,
        )
        .await;

        spinner.finish_and_clear();
        result
    }

    fn ask() -> Result<Choice> {
        let items = ["Commit", "Regenerate", "Cancel"];
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        Ok(match selection {
            0 => Choice::Commit,
            1 => Choice::Regenerate,
            _ => Choice::Cancel,
        })
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Model: {}", self.config.model);
                println!(
                    "API key: {}",
                    if self.config.api_key.is_some() {
                        "(set)"
                    } else {
                        "(not set)"
                    }
                );
                println!(
                    "Base URL: {}",
                    self.config
                        .base_url
                        .as_deref()
                        .unwrap_or(llm::gemini::DEFAULT_BASE_URL)
                );
                println!("Timeout: {}s", self.config.timeout_secs);
                println!("Max diff lines: {}", self.config.max_diff_lines);
                println!("Last commits: {}", self.config.last_commits);
                println!();
                println!("[format]");
                println!(
                    "  lowercase_subject: {}",
                    self.config.format.lowercase_subject
                );
                if let Some(path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!();
                    println!("Config file: {} ({status})", path.display());
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commitgem", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    // ─── Output Helpers ───

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
