// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

pub mod gemini;

use crate::config::Config;
use crate::domain::{GenerateContentResponse, GenerativeModel, SAFETY_SETTINGS};
use crate::error::{Error, Result};
use crate::services::prompt::PromptBuilder;

/// Rules the model is held to for every request. Built once per process.
pub static SYSTEM_INSTRUCTION: LazyLock<String> = LazyLock::new(|| {
    r#"You are a commit message generator that follows these rules:
1. Write in past tense (e.g., "added", "fixed", "updated")
2. Be concise and direct
3. Output the commit message as raw text without any formatting, quotes, or code blocks
4. Follow the format: <type>(<optional scope>): <commit message>
5. Commit message should starts with lowercase letter.
6. Commit message must be a maximum of 72 characters.
7. Exclude anything unnecessary such as translation. Your entire response will be passed directly into git commit."#
        .to_string()
});

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Run one generation request for `prompt` against `model`.
    async fn generate_content(
        &self,
        model: &GenerativeModel,
        prompt: &str,
    ) -> Result<GenerateContentResponse>;

    fn name(&self) -> &str;
}

pub fn create_client(config: &Config) -> Result<Box<dyn GenerativeClient>> {
    Ok(Box::new(gemini::GeminiClient::new(config)?))
}

/// Ask the model for a commit message describing `diff`.
///
/// `related_files` maps a directory to the file name(s) found next to the
/// staged changes; entries are flattened to `dir/file` in directory order.
/// Exactly one provider call is made, and it is abandoned as soon as
/// `cancel` fires.
pub async fn analyze_changes(
    client: &dyn GenerativeClient,
    cancel: CancellationToken,
    diff: &str,
    user_context: &str,
    related_files: &BTreeMap<String, String>,
    model_name: &str,
    last_commits: &[String],
) -> Result<String> {
    let files = flatten_related_files(related_files);

    let model = GenerativeModel::new(model_name)
        .with_safety_settings(&SAFETY_SETTINGS)
        .with_system_instruction(&SYSTEM_INSTRUCTION);

    let prompt = PromptBuilder::build_user_prompt(user_context, diff, &files, last_commits)?;

    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }

    debug!(
        provider = client.name(),
        model = %model.name,
        prompt_chars = prompt.len(),
        "sending generation request"
    );

    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(Error::Cancelled),
        response = client.generate_content(&model, &prompt) => response,
    };

    let response = response.inspect_err(|e| {
        warn!(provider = client.name(), error = %e, "generation request failed");
    })?;

    extract_first_text(&response).ok_or_else(|| Error::EmptyResponse {
        provider: client.name().into(),
    })
}

/// Text of the first part of the first candidate, if there is one.
pub fn extract_first_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let part = candidate.content.as_ref()?.parts.first()?;
    Some(part.to_string())
}

/// `dir/file` entries in directory order.
pub fn flatten_related_files(related_files: &BTreeMap<String, String>) -> Vec<String> {
    related_files
        .iter()
        .map(|(dir, file)| format!("{dir}/{file}"))
        .collect()
}
