use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::skin_analysis::{
    entities::ProviderError, ports::LLMClient, value_objects::LLMRequest,
};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

static OPENAI_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-[A-Za-z0-9_-]+").expect("valid OpenAI key regex"));

/// Normalises a configured OpenAI key.
///
/// Blank values count as missing. A value containing an `sk-` token (for
/// example `OPENAI_API_KEY=sk-...` pasted whole into the variable) is reduced
/// to that token; anything else is used as is.
pub fn sanitize_api_key(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|k| !k.is_empty())?;

    Some(
        OPENAI_KEY_RE
            .find(raw)
            .map_or(raw, |m| m.as_str())
            .to_string(),
    )
}

#[derive(Clone)]
pub struct OpenAiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn build_request(&self, request: LLMRequest) -> ChatRequest {
        let mut parts = Vec::with_capacity(request.images.len() + 1);
        parts.push(ContentPart::Text {
            text: request.user_text,
        });
        parts.extend(request.images.iter().map(|image| ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: image.data_url(),
                detail: "high".to_string(),
            },
        }));

        ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(request.system_prompt),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: MessageContent::Parts(parts),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        }
    }

    fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    async fn call_openai_api(&self, request: ChatRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                ProviderError::RequestFailed(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            // The body stays in the logs; callers only see the status.
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(ProviderError::RequestFailed(format!(
                "LLM API returned status {}",
                status
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            ProviderError::InvalidJson(format!("Failed to parse LLM response: {}", e))
        })?;

        Self::extract_content(chat_response)
    }
}

impl LLMClient for OpenAiLLMClient {
    async fn generate_recommendations(&self, request: LLMRequest) -> Result<String, ProviderError> {
        tracing::debug!(
            model = %self.model_name,
            images = request.images.len(),
            "Calling OpenAI chat completions"
        );

        let chat_request = self.build_request(request);
        self.call_openai_api(chat_request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skin_analysis::value_objects::AnalysisImage;
    use serde_json::json;

    fn client() -> OpenAiLLMClient {
        OpenAiLLMClient::new(
            "sk-test".to_string(),
            "gpt-4o".to_string(),
            "http://localhost:9/v1/".to_string(),
        )
    }

    #[test]
    fn test_sanitize_api_key() {
        assert_eq!(sanitize_api_key(None), None);
        assert_eq!(sanitize_api_key(Some("   ")), None);
        assert_eq!(
            sanitize_api_key(Some("OPENAI_API_KEY=sk-proj-abc_123")),
            Some("sk-proj-abc_123".to_string())
        );
        assert_eq!(
            sanitize_api_key(Some(" sk-svcacct-XYZ ")),
            Some("sk-svcacct-XYZ".to_string())
        );
        assert_eq!(
            sanitize_api_key(Some("azure-key-0001")),
            Some("azure-key-0001".to_string())
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(client().base_url, "http://localhost:9/v1");
    }

    #[test]
    fn test_request_wire_format() {
        let request = LLMRequest {
            system_prompt: "system".to_string(),
            user_text: "My concerns: rosacea".to_string(),
            images: vec![AnalysisImage {
                mime_type: "image/webp".to_string(),
                data: "aGVsbG8=".to_string(),
            }],
            response_schema: json!({}),
            temperature: 0.7,
            max_output_tokens: 1000,
        };

        let body = serde_json::to_value(client().build_request(request)).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["response_format"], json!({ "type": "json_object" }));
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(
            body["messages"][0],
            json!({ "role": "system", "content": "system" })
        );
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(
            body["messages"][1]["content"],
            json!([
                { "type": "text", "text": "My concerns: rosacea" },
                {
                    "type": "image_url",
                    "image_url": { "url": "data:image/webp;base64,aGVsbG8=", "detail": "high" }
                }
            ])
        );
    }

    #[test]
    fn test_extract_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{}" } }]
        }))
        .unwrap();
        assert_eq!(OpenAiLLMClient::extract_content(response).unwrap(), "{}");
    }

    #[test]
    fn test_extract_content_empty() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert_eq!(
            OpenAiLLMClient::extract_content(response),
            Err(ProviderError::EmptyResponse)
        );

        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(
            OpenAiLLMClient::extract_content(response),
            Err(ProviderError::EmptyResponse)
        );
    }
}
