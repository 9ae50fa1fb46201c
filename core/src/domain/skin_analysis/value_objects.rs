use base64::{Engine as _, engine::general_purpose};

use crate::domain::{
    common::entities::app_errors::CoreError,
    skin_analysis::{
        entities::ProviderKind,
        prompt::{MAX_OUTPUT_TOKENS, SYSTEM_PROMPT, TEMPERATURE, user_message},
        schema::get_recommendation_schema,
    },
};

pub const MAX_IMAGES: usize = 5;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024; // 5MB

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Debug, Clone, Default)]
pub struct AnalyzeSkinInput {
    pub description: Option<String>,
    /// Data URLs or bare base64 payloads.
    pub images: Vec<String>,
    pub provider_preference: Option<ProviderKind>,
}

/// Input that passed validation, with images decoded into MIME type and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAnalysisInput {
    pub description: Option<String>,
    pub images: Vec<AnalysisImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisImage {
    pub mime_type: String,
    /// Standard base64, without the data URL header.
    pub data: String,
}

/// Provider-neutral prompt handed to an [`LLMClient`](super::ports::LLMClient).
#[derive(Debug, Clone, PartialEq)]
pub struct LLMRequest {
    pub system_prompt: String,
    pub user_text: String,
    pub images: Vec<AnalysisImage>,
    pub response_schema: serde_json::Value,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl AnalyzeSkinInput {
    pub fn validate(&self) -> Result<ValidatedAnalysisInput, CoreError> {
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        if description.is_none() && self.images.is_empty() {
            return Err(CoreError::InvalidInput(
                "Skin concerns description or images are required".to_string(),
            ));
        }

        if let Some(description) = description {
            let length = description.chars().count();
            if length < MIN_DESCRIPTION_CHARS {
                return Err(CoreError::InvalidInput(format!(
                    "Description should be at least {} characters if provided.",
                    MIN_DESCRIPTION_CHARS
                )));
            }
            if length > MAX_DESCRIPTION_CHARS {
                return Err(CoreError::InvalidInput(format!(
                    "Description cannot exceed {} characters.",
                    MAX_DESCRIPTION_CHARS
                )));
            }
        }

        if self.images.len() > MAX_IMAGES {
            return Err(CoreError::InvalidInput(format!(
                "Maximum of {} images allowed",
                MAX_IMAGES
            )));
        }

        let images = self
            .images
            .iter()
            .map(|encoded| AnalysisImage::from_encoded(encoded))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedAnalysisInput {
            description: description.map(str::to_string),
            images,
        })
    }
}

impl AnalysisImage {
    /// Parses `data:<mime>;base64,<payload>` or a bare base64 payload.
    pub fn from_encoded(encoded: &str) -> Result<Self, CoreError> {
        let encoded = encoded.trim();

        let (mime_type, data) = match encoded.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest.split_once(',').ok_or_else(|| {
                    CoreError::InvalidInput("Malformed image data URL".to_string())
                })?;
                let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
                    CoreError::InvalidInput("Image data URL must be base64 encoded".to_string())
                })?;
                (mime_type.trim().to_ascii_lowercase(), data)
            }
            None => (DEFAULT_IMAGE_MIME_TYPE.to_string(), encoded),
        };

        if !ACCEPTED_IMAGE_TYPES.contains(&mime_type.as_str()) {
            let allowed = ACCEPTED_IMAGE_TYPES
                .iter()
                .filter_map(|t| t.split('/').nth(1))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CoreError::InvalidInput(format!(
                "Invalid file type {}. Only {} are allowed.",
                mime_type, allowed
            )));
        }

        let decoded = general_purpose::STANDARD.decode(data).map_err(|e| {
            CoreError::InvalidInput(format!("Image is not valid base64: {}", e))
        })?;

        if decoded.is_empty() {
            return Err(CoreError::InvalidInput("Image is empty".to_string()));
        }

        if decoded.len() > MAX_IMAGE_BYTES {
            return Err(CoreError::InvalidInput(format!(
                "File too large. Maximum size is {}MB.",
                MAX_IMAGE_BYTES / (1024 * 1024)
            )));
        }

        // "image/jpg" is not a registered type and Gemini rejects it
        let mime_type = if mime_type == "image/jpg" {
            DEFAULT_IMAGE_MIME_TYPE.to_string()
        } else {
            mime_type
        };

        Ok(Self {
            mime_type,
            data: data.to_string(),
        })
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

impl LLMRequest {
    pub fn for_analysis(input: &ValidatedAnalysisInput) -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_text: user_message(input.description.as_deref()),
            images: input.images.clone(),
            response_schema: get_recommendation_schema(),
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}
