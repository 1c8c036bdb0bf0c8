//! OpenAI-compatible chat completions client
//!
//! The oracle is an external black box: given a system prompt and a
//! subject text it returns either a structured tool call or free text.
//! Everything downstream treats the reply as best-effort.

use crate::config::OracleConfig;
use crate::error::{Result, TalentScorerError};
use log::warn;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// A function tool offered to the oracle alongside the prompt
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// What came back from one oracle call: structured tool arguments,
/// free text, or both. Absence of both is still a valid reply.
#[derive(Debug, Clone, Default)]
pub struct ChatReply {
    pub content: Option<String>,
    pub tool_arguments: Option<Value>,
}

impl ChatReply {
    /// Pull a numeric field out of the structured tool arguments
    pub fn tool_u32(&self, field: &str) -> Option<u32> {
        self.tool_arguments
            .as_ref()
            .and_then(|args| args.get(field))
            .and_then(Value::as_u64)
            .map(|n| n as u32)
    }

    /// Pull a string field out of the structured tool arguments
    pub fn tool_str(&self, field: &str) -> Option<&str> {
        self.tool_arguments
            .as_ref()
            .and_then(|args| args.get(field))
            .and_then(Value::as_str)
    }
}

/// Interface to the external oracle. The production implementation is
/// [`OpenAiOracle`]; tests substitute a canned mock.
pub trait ChatOracle {
    fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        tool: Option<&ToolSpec>,
    ) -> impl std::future::Future<Output = Result<ChatReply>> + Send;
}

pub struct OpenAiOracle {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    usage_log: PathBuf,
}

impl OpenAiOracle {
    pub fn from_config(config: &OracleConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            TalentScorerError::Configuration(format!(
                "Oracle API key not found in environment variable '{}'",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            usage_log: config.usage_log.clone(),
        })
    }

    fn record_usage(&self, total_tokens: u64) {
        let appended = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.usage_log)
            .and_then(|mut file| writeln!(file, "{}", total_tokens));
        if let Err(e) = appended {
            warn!("Could not append to usage log: {}", e);
        }
    }
}

impl ChatOracle for OpenAiOracle {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        tool: Option<&ToolSpec>,
    ) -> Result<ChatReply> {
        let mut body = json!({
            "model": self.model,
            "temperature": 0.0,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_text},
            ],
        });

        if let Some(tool) = tool {
            body["tools"] = json!([{
                "type": "function",
                "function": {
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": tool.parameters,
                },
            }]);
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TalentScorerError::Oracle(format!(
                "Oracle returned HTTP {}",
                response.status()
            )));
        }

        let completion: ChatCompletion = response.json().await?;

        if let Some(usage) = &completion.usage {
            self.record_usage(usage.total_tokens);
        }

        let Some(choice) = completion.choices.into_iter().next() else {
            return Err(TalentScorerError::Oracle(
                "Oracle reply carried no choices".to_string(),
            ));
        };

        let tool_arguments = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|call| serde_json::from_str(&call.function.arguments).ok());

        Ok(ChatReply {
            content: choice.message.content,
            tool_arguments,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ChatToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ChatToolCall {
    function: ChatFunctionCall,
}

#[derive(Debug, Deserialize)]
struct ChatFunctionCall {
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_field_accessors() {
        let reply = ChatReply {
            content: None,
            tool_arguments: Some(json!({"score": 82, "name": "Taro Yamada"})),
        };
        assert_eq!(reply.tool_u32("score"), Some(82));
        assert_eq!(reply.tool_str("name"), Some("Taro Yamada"));
        assert_eq!(reply.tool_u32("missing"), None);
    }

    #[test]
    fn test_completion_deserialization() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "function": {"name": "score_candidate", "arguments": "{\"score\": 77}"}
                    }]
                }
            }],
            "usage": {"total_tokens": 1203}
        }"#;
        let completion: ChatCompletion = serde_json::from_str(raw).unwrap();
        assert_eq!(completion.usage.unwrap().total_tokens, 1203);
        let call = &completion.choices[0].message.tool_calls.as_ref().unwrap()[0];
        let args: Value = serde_json::from_str(&call.function.arguments).unwrap();
        assert_eq!(args["score"], 77);
    }
}
