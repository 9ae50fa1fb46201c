use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Upstream LLM vendor able to produce recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Gemini,
}

impl ProviderKind {
    /// The provider tried when `self` fails.
    pub fn other(self) -> Self {
        match self {
            ProviderKind::OpenAi => ProviderKind::Gemini,
            ProviderKind::Gemini => ProviderKind::OpenAi,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(CoreError::InvalidInput(format!(
                "unknown provider '{}', expected 'openai' or 'gemini'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_swaps_providers() {
        assert_eq!(ProviderKind::OpenAi.other(), ProviderKind::Gemini);
        assert_eq!(ProviderKind::Gemini.other(), ProviderKind::OpenAi);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
        assert_eq!(" gemini ".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ProviderKind::OpenAi).unwrap(),
            serde_json::json!("openai")
        );
        let kind: ProviderKind = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(kind, ProviderKind::Gemini);
    }
}
