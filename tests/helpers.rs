// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Mutex;

use async_trait::async_trait;
use commitgem::domain::{Candidate, Content, GenerateContentResponse, GenerativeModel, Part};
use commitgem::error::{Error, Result};
use commitgem::services::llm::GenerativeClient;

/// What the fake client does when asked to generate.
#[allow(dead_code)]
pub enum Behavior {
    Respond(GenerateContentResponse),
    Fail(String),
    Hang,
}

/// In-memory `GenerativeClient` that records every request it receives.
#[allow(dead_code)]
pub struct FakeClient {
    behavior: Behavior,
    pub requests: Mutex<Vec<(GenerativeModel, String)>>,
}

#[allow(dead_code)]
impl FakeClient {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Behavior::Respond(text_response(text)))
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> (GenerativeModel, String) {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl GenerativeClient for FakeClient {
    async fn generate_content(
        &self,
        model: &GenerativeModel,
        prompt: &str,
    ) -> Result<GenerateContentResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((model.clone(), prompt.to_string()));

        match &self.behavior {
            Behavior::Respond(response) => Ok(response.clone()),
            Behavior::Fail(message) => Err(Error::Provider {
                provider: "fake".into(),
                message: message.clone(),
            }),
            Behavior::Hang => std::future::pending().await,
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Response with a single candidate holding a single text part.
#[allow(dead_code)]
pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".into()),
                parts: vec![Part::text(text)],
            }),
            finish_reason: Some("STOP".into()),
        }],
    }
}
