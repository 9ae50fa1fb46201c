use serde_json::json;

use crate::domain::skin_analysis::entities::{ProviderError, RecommendationPayload};

fn section_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" }
        },
        "required": ["title", "description"]
    })
}

/// Returns the JSON schema for skin analysis LLM responses
pub fn get_recommendation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "concernAnalysis": section_schema(),
            "potentialSolutions": section_schema(),
            "recommendedProducts": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "products": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "description": { "type": "string" },
                                "benefits": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                }
                            },
                            "required": ["name", "description", "benefits"]
                        }
                    }
                },
                "required": ["title", "products"]
            },
            "nextSteps": section_schema()
        },
        "required": [
            "concernAnalysis", "potentialSolutions", "recommendedProducts", "nextSteps"
        ]
    })
}

/// Parses raw model output and checks it against the recommendation schema.
pub fn parse_recommendations(raw: &str) -> Result<RecommendationPayload, ProviderError> {
    let content = strip_code_fences(raw);
    if content.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let parsed: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ProviderError::InvalidJson(e.to_string()))?;

    if !parsed.is_object() {
        return Err(ProviderError::SchemaViolation(
            "top-level value must be an object".to_string(),
        ));
    }

    let payload: RecommendationPayload = serde_json::from_value(parsed)
        .map_err(|e| ProviderError::SchemaViolation(e.to_string()))?;

    payload.validate().map_err(ProviderError::SchemaViolation)?;

    Ok(payload)
}

/// Models sometimes wrap JSON in a markdown fence despite JSON mode.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
