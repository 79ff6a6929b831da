use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::TranslateError;

const MODEL: &str = "deepseek-chat";
const SYSTEM_PROMPT: &str = "你是一个专业的翻译助手。将用户提供的文本从英语或日语准确翻译成简体中文，保持原文含义和语气，不添加额外解释，只返回翻译结果。";
const USER_PREFIX: &str = "请将以下内容翻译成简体中文：";

#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

impl DeepSeekClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// One non-streaming chat completion asking for a Simplified Chinese
    /// translation of `text`. Returns the trimmed completion content, or an
    /// already-classified error; no retries are attempted here.
    pub async fn translate_to_chinese(
        &self,
        api_key: &str,
        text: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}\n\n{}", USER_PREFIX, text),
                },
            ],
            max_tokens: 1000,
            temperature: 0.1,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::UpstreamStatus(status.as_u16()));
        }

        // The upstream payload is untrusted: a missing level anywhere in
        // choices[0].message.content yields an empty translation, not an error.
        let body = response.text().await?;
        let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        let content = body
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .unwrap_or("");

        Ok(content.trim().to_string())
    }
}
