use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::skin_analysis::{
    entities::ProviderError, ports::LLMClient, value_objects::LLMRequest,
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn build_request(request: LLMRequest) -> GeminiRequest {
        let mut parts = Vec::with_capacity(request.images.len() + 1);
        parts.push(Part::Text {
            text: request.user_text,
        });
        parts.extend(request.images.into_iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: image.data,
            },
        }));

        GeminiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_prompt,
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema,
            }),
        }
    }

    fn extract_text(response: GeminiResponse) -> Result<String, ProviderError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the URL, which carries the key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                ProviderError::RequestFailed(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            // The body stays in the logs; callers only see the status.
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(ProviderError::RequestFailed(format!(
                "LLM API returned status {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            ProviderError::InvalidJson(format!("Failed to parse LLM response: {}", e))
        })?;

        Self::extract_text(gemini_response)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_recommendations(&self, request: LLMRequest) -> Result<String, ProviderError> {
        tracing::debug!(
            model = %self.model_name,
            images = request.images.len(),
            "Calling Gemini generateContent"
        );

        self.call_gemini_api(Self::build_request(request)).await
    }
}
