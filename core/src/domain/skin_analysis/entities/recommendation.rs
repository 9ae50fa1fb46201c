use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPayload {
    pub concern_analysis: RecommendationSection,
    pub potential_solutions: RecommendationSection,
    pub recommended_products: ProductRecommendations,
    pub next_steps: RecommendationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationSection {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecommendations {
    pub title: String,
    pub products: Vec<RecommendedProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedProduct {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
}

impl RecommendationSection {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl RecommendationPayload {
    /// Checks the constraints serde cannot express: every string is
    /// non-blank and every list has at least one entry.
    pub fn validate(&self) -> Result<(), String> {
        check_section("concernAnalysis", &self.concern_analysis)?;
        check_section("potentialSolutions", &self.potential_solutions)?;
        check_section("nextSteps", &self.next_steps)?;

        let products = &self.recommended_products;
        check_text("recommendedProducts.title", &products.title)?;
        if products.products.is_empty() {
            return Err("recommendedProducts.products must not be empty".to_string());
        }

        for (index, product) in products.products.iter().enumerate() {
            let path = format!("recommendedProducts.products[{}]", index);
            check_text(&format!("{}.name", path), &product.name)?;
            check_text(&format!("{}.description", path), &product.description)?;
            if product.benefits.is_empty() {
                return Err(format!("{}.benefits must not be empty", path));
            }
            for (benefit_index, benefit) in product.benefits.iter().enumerate() {
                check_text(&format!("{}.benefits[{}]", path, benefit_index), benefit)?;
            }
        }

        Ok(())
    }
}

fn check_section(path: &str, section: &RecommendationSection) -> Result<(), String> {
    check_text(&format!("{}.title", path), &section.title)?;
    check_text(&format!("{}.description", path), &section.description)
}

fn check_text(path: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", path));
    }
    Ok(())
}
