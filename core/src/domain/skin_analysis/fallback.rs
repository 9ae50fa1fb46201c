use crate::domain::skin_analysis::entities::{
    ProductRecommendations, RecommendationPayload, RecommendationSection, RecommendedProduct,
};

pub const NO_PROVIDER_MESSAGE: &str = "Using default recommendations. No AI provider is configured; set OPENAI_API_KEY or GEMINI_API_KEY.";

pub const ALL_PROVIDERS_FAILED_MESSAGE: &str =
    "Using default recommendations. Personalized analysis is temporarily unavailable.";

/// Static recommendations served when no provider produced a usable answer.
pub fn fallback_recommendations() -> RecommendationPayload {
    RecommendationPayload {
        concern_analysis: RecommendationSection::new(
            "General Skin Health",
            "Maintaining good skin health involves consistent cleansing and moisturizing.",
        ),
        potential_solutions: RecommendationSection::new(
            "Basic Skincare",
            "Use a gentle cleanser and a suitable moisturizer daily. Protect your skin from the sun with SPF.",
        ),
        recommended_products: ProductRecommendations {
            title: "Everyday Essentials".to_string(),
            products: vec![
                RecommendedProduct {
                    name: "Gentle Hydrating Cleanser".to_string(),
                    description: "A non-foaming, fragrance-free cleanser for daily use."
                        .to_string(),
                    benefits: vec![
                        "Removes impurities without stripping the skin barrier".to_string(),
                        "Suitable for sensitive skin".to_string(),
                    ],
                },
                RecommendedProduct {
                    name: "Broad-Spectrum Sunscreen SPF 50".to_string(),
                    description: "A lightweight daily sunscreen.".to_string(),
                    benefits: vec![
                        "Protects against UVA and UVB damage".to_string(),
                        "Helps prevent pigmentation and premature aging".to_string(),
                    ],
                },
            ],
        },
        next_steps: RecommendationSection::new(
            "Consultation Recommended",
            "For personalized advice tailored to your specific needs and concerns, we recommend booking a consultation at Dr. Bashar Clinic.",
        ),
    }
}
