// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::{CommitType, GenerationRequestContext};
use crate::error::{Error, Result};

const CONTEXT_PREFIX: &str = "Use the following context to understand intent: ";

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(ctx: &GenerationRequestContext) -> Result<String> {
        Self::build_user_prompt(&ctx.user_context, &ctx.diff, &ctx.files, &ctx.last_commits)
    }

    /// Assemble the user turn of the generation request.
    ///
    /// Output depends only on the arguments: same inputs, same bytes.
    pub fn build_user_prompt(
        context: &str,
        diff: &str,
        files: &[String],
        last_commits: &[String],
    ) -> Result<String> {
        let context = Self::context_line(context);
        let catalog = Self::commit_type_catalog_json()?;
        let history = Self::last_commits_block(last_commits);

        Ok(format!(
            r#"Generate a concise git commit message written in past tense for the following code diff with the given specifications below:

The output response must be in format:
<type>(<optional scope>): <commit message>

{context}

Choose a type from the type-to-description JSON below that best describes the git diff:
{catalog}

Neighboring files:
{files}

{history}

Code diff:
{diff}"#,
            files = files.join(", "),
        ))
    }

    /// Compact JSON object of commit type to description, keys sorted.
    pub fn commit_type_catalog_json() -> Result<String> {
        serde_json::to_string(&CommitType::catalog()).map_err(Error::CatalogSerialization)
    }

    fn context_line(context: &str) -> String {
        if context.is_empty() {
            String::new()
        } else {
            format!("{CONTEXT_PREFIX}{context}")
        }
    }

    fn last_commits_block(last_commits: &[String]) -> String {
        if last_commits.is_empty() {
            return String::new();
        }

        format!(
            "These are the last {} commit messages, if your proposed commit message is related to them, please make sure the commit message is consistent:\n{}\n\n",
            last_commits.len(),
            last_commits.join("\n"),
        )
    }
}
