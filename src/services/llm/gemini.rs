// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::GenerativeClient;
use crate::config::Config;
use crate::domain::{Content, GenerateContentResponse, GenerativeModel, SafetySetting};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'a Content>,
    contents: Vec<Content>,
    safety_settings: &'a [SafetySetting],
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => SecretString::from(key.to_string()),
            _ => {
                return Err(Error::Config(
                    "Gemini requires an API key. Set COMMITGEM_API_KEY or GEMINI_API_KEY".into(),
                ));
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        })
    }

    fn provider_error(message: impl Into<String>) -> Error {
        Error::Provider {
            provider: "gemini".into(),
            message: message.into(),
        }
    }
}

/// `models/{name}`, unless the name already carries a collection such as
/// `tunedModels/...`.
fn resource_name(name: &str) -> String {
    if name.contains('/') {
        name.to_string()
    } else {
        format!("models/{name}")
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        model: &GenerativeModel,
        prompt: &str,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/{}:generateContent",
            self.base_url,
            resource_name(&model.name)
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&GenerateContentRequest {
                system_instruction: model.system_instruction.as_ref(),
                contents: vec![Content::user(prompt)],
                safety_settings: &model.safety_settings,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Self::provider_error("request timed out")
                } else {
                    Self::provider_error(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::provider_error(format!("HTTP {status}: {body}")));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| Self::provider_error(format!("invalid response body: {e}")))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
