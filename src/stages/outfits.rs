use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{Config, OUTFIT_SYSTEM_PROMPT};
use crate::llm::call_workers_ai;
use crate::stages::or_fallback;
use crate::stages::profile::StyleProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitResponse {
    pub outfit_recommendations: Vec<OutfitRecommendation>,
}

pub fn fallback_outfits() -> OutfitResponse {
    let entries = [
        (
            "https://m.media-amazon.com/images/I/41KWq9jTUWL._SX679_.jpg",
            "A classic red t-shirt perfect for casual outings",
        ),
        (
            "https://m.media-amazon.com/images/I/71WSdgKd1kL._SX679_.jpg",
            "A trendy red t-shirt for a modern look",
        ),
        (
            "https://m.media-amazon.com/images/I/61msssMmb3L._SX679_.jpg",
            "A stylish red t-shirt for everyday wear",
        ),
        (
            "https://m.media-amazon.com/images/I/61msssMmb3L._SX679_.jpg",
            "A comfortable red t-shirt for any occasion",
        ),
    ];
    OutfitResponse {
        outfit_recommendations: entries
            .into_iter()
            .map(|(url, description)| OutfitRecommendation {
                url: url.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn parse_outfits_response(text: &str) -> Result<OutfitResponse> {
    serde_json::from_str(text).context("outfit response did not match the expected schema")
}

/// Produces outfit recommendations for a style profile. Missing credentials
/// or any upstream failure degrade to the hardcoded outfit list; never
/// returns an error.
pub async fn generate_outfits(config: &Config, profile: &StyleProfile) -> OutfitResponse {
    if config.cloudflare_credentials().is_none() {
        info!("Missing Cloudflare credentials - returning hardcoded outfits");
        return fallback_outfits();
    }

    or_fallback(
        "outfits",
        async {
            let user_content =
                serde_json::to_string(profile).context("failed to serialize profile")?;
            let text =
                call_workers_ai(config, OUTFIT_SYSTEM_PROMPT, &user_content, "outfits").await?;
            parse_outfits_response(&text)
        },
        fallback_outfits,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::offline_config;
    use crate::stages::profile::fallback_profile;
    use serde_json::json;

    #[test]
    fn well_formed_recommendations_pass_through() {
        let text = json!({
            "outfit_recommendations": [
                { "url": "https://example.com/a.jpg", "description": "Linen overshirt" }
            ]
        })
        .to_string();
        let parsed = parse_outfits_response(&text).unwrap();
        assert_eq!(parsed.outfit_recommendations.len(), 1);
        assert_eq!(parsed.outfit_recommendations[0].description, "Linen overshirt");
    }

    #[test]
    fn responses_without_the_recommendations_key_are_rejected() {
        assert!(parse_outfits_response("{\"outfits\": []}").is_err());
        assert!(parse_outfits_response("not json at all").is_err());
    }

    #[test]
    fn fallback_has_four_entries() {
        assert_eq!(fallback_outfits().outfit_recommendations.len(), 4);
    }

    #[tokio::test]
    async fn missing_credentials_return_the_hardcoded_outfits() {
        let config = offline_config();
        let outfits = generate_outfits(&config, &fallback_profile()).await;
        assert_eq!(outfits, fallback_outfits());
    }
}
