use beautyai_core::domain::skin_analysis::{
    entities::ProviderKind,
    value_objects::{MAX_DESCRIPTION_CHARS, MAX_IMAGES},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_content"))]
pub struct AnalyzeSkinRequest {
    /// Free-text description of the skin concerns.
    #[serde(default, alias = "skinConcerns")]
    #[schema(example = "Red, dry patches on both cheeks that flare up in winter")]
    pub description: Option<String>,

    /// Photos as data URLs (`data:image/png;base64,...`) or bare base64.
    #[serde(default)]
    #[validate(length(max = 5, message = "Maximum of 5 images allowed"))]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub provider_preference: Option<ProviderKind>,
}

/// Description limits apply to the trimmed text, matching the core rules.
fn validate_content(request: &AnalyzeSkinRequest) -> Result<(), ValidationError> {
    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let has_images = request.images.as_ref().is_some_and(|i| !i.is_empty());

    if description.is_none() && !has_images {
        return Err(ValidationError::new("missing_content")
            .with_message("Skin concerns description or images are required".into()));
    }

    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_CHARS) {
        return Err(ValidationError::new("description_too_long").with_message(
            format!("Description cannot exceed {} characters.", MAX_DESCRIPTION_CHARS).into(),
        ));
    }

    Ok(())
}

// The `images` attribute literal must track the core limit.
const _: () = assert!(MAX_IMAGES == 5);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> AnalyzeSkinRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_requires_description_or_images() {
        assert!(parse(json!({})).validate().is_err());
        assert!(parse(json!({ "description": "  ", "images": [] })).validate().is_err());
        assert!(parse(json!({ "images": null })).validate().is_err());
        assert!(parse(json!({ "description": "itchy scalp" })).validate().is_ok());
        assert!(parse(json!({ "images": ["aGVsbG8="] })).validate().is_ok());
    }

    #[test]
    fn test_limits() {
        let long = "x".repeat(501);
        assert!(parse(json!({ "description": long })).validate().is_err());
        assert!(
            parse(json!({ "images": ["a", "b", "c", "d", "e", "f"] }))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_description_limit_ignores_surrounding_whitespace() {
        let padded = format!("  Dry patches on my cheeks{}", " ".repeat(490));
        assert!(parse(json!({ "description": padded })).validate().is_ok());

        let padded_long = format!(" {} ", "x".repeat(501));
        assert!(parse(json!({ "description": padded_long })).validate().is_err());
    }

    #[test]
    fn test_accepts_legacy_field_and_preference() {
        let request = parse(json!({
            "skinConcerns": "dark spots on forehead",
            "providerPreference": "gemini"
        }));
        assert_eq!(request.description.as_deref(), Some("dark spots on forehead"));
        assert_eq!(request.provider_preference, Some(ProviderKind::Gemini));
    }
}
