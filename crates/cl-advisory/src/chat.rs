//! Live advisory through an OpenAI-compatible `/chat/completions` endpoint.

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::provider::{AdvisoryOptions, AdvisoryProvider};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionsAdvisor {
    base_url: String,
    api_key: String,
}

impl ChatCompletionsAdvisor {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn client(&self, options: &AdvisoryOptions) -> AdvisoryResult<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| AdvisoryError::Unavailable(format!("http client: {e}")))
    }
}

fn check_status(status: reqwest::StatusCode) -> AdvisoryResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AdvisoryError::Status {
            status: status.as_u16(),
        })
    }
}

/// Extract the first non-empty reply from a chat-completions body.
pub fn parse_chat_response(body: &str) -> AdvisoryResult<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .filter_map(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or_else(|| AdvisoryError::Malformed("response has no message content".to_string()))
}

impl AdvisoryProvider for ChatCompletionsAdvisor {
    fn name(&self) -> &str {
        "chat-completions"
    }

    fn is_live(&self) -> bool {
        true
    }

    fn generate_advisory(
        &self,
        prompt: &str,
        options: &AdvisoryOptions,
    ) -> AdvisoryResult<String> {
        let request = ChatRequest {
            model: &options.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &options.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let url = self.endpoint();
        debug!(%url, model = %options.model, "requesting advisory");

        let response = self
            .client(options)?
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        check_status(response.status())?;

        let body = response.text()?;
        parse_chat_response(&body)
    }
}
