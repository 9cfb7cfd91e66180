use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{Config, PROFILE_SYSTEM_PROMPT};
use crate::llm::{call_workers_ai, image_message_content};
use crate::stages::or_fallback;

/// Style profile derived from a customer's uploaded images. Field names on
/// the wire follow the upstream prompt schema, spaces included. `Age`,
/// `Occupation`, `Location`, `Ethnicity`, `Attire Style` and
/// `Style Archetype` are required; the rest default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Hobbies", default)]
    pub hobbies: Vec<String>,
    #[serde(rename = "Ethnicity")]
    pub ethnicity: String,
    #[serde(rename = "Attire Style")]
    pub attire_style: String,
    #[serde(rename = "Style Archetype")]
    pub style_archetype: String,
    #[serde(rename = "Color Palette", default)]
    pub color_palette: String,
    #[serde(rename = "Influence", default)]
    pub influence: String,
}

pub fn fallback_profile() -> StyleProfile {
    StyleProfile {
        age: 25,
        occupation: "Student".to_string(),
        location: "Urban Area".to_string(),
        hobbies: vec![
            "Fashion".to_string(),
            "Shopping".to_string(),
            "Social Media".to_string(),
        ],
        ethnicity: "Not Specified".to_string(),
        attire_style: "Casual".to_string(),
        style_archetype: "Trendy".to_string(),
        color_palette: "Red, Black, White".to_string(),
        influence: "Street Fashion".to_string(),
    }
}

fn parse_profile_response(text: &str) -> Result<StyleProfile> {
    serde_json::from_str(text).context("profile response did not match the expected schema")
}

/// Derives a style profile from raw image bytes. Degrades to the hardcoded
/// profile on missing credentials, an empty image set, or any upstream
/// failure; never returns an error.
pub async fn generate_profile(config: &Config, images: &[Vec<u8>]) -> StyleProfile {
    if config.cloudflare_credentials().is_none() {
        info!("Missing Cloudflare credentials - returning hardcoded profile");
        return fallback_profile();
    }
    if images.is_empty() {
        info!("No images provided - returning hardcoded profile");
        return fallback_profile();
    }

    or_fallback(
        "profile",
        async {
            let user_content = image_message_content(images);
            let text =
                call_workers_ai(config, PROFILE_SYSTEM_PROMPT, &user_content, "profile").await?;
            parse_profile_response(&text)
        },
        fallback_profile,
    )
    .await
}

/// Text variant serving the single-stage profile endpoint: the free text
/// becomes the user message instead of encoded images.
pub async fn generate_profile_from_text(config: &Config, text: &str) -> StyleProfile {
    if config.cloudflare_credentials().is_none() {
        info!("Missing Cloudflare credentials - returning hardcoded profile");
        return fallback_profile();
    }

    or_fallback(
        "profile",
        async {
            let response =
                call_workers_ai(config, PROFILE_SYSTEM_PROMPT, text, "profile-text").await?;
            parse_profile_response(&response)
        },
        fallback_profile,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::offline_config;
    use serde_json::json;

    fn full_profile_json() -> serde_json::Value {
        json!({
            "Age": 20,
            "Occupation": "Student/Gamer",
            "Location": "Urban Area",
            "Hobbies": ["Gaming", "Anime/Manga"],
            "Ethnicity": "Not Specified",
            "Attire Style": "Casual",
            "Style Archetype": "Youthful/Trendy",
            "Color Palette": "Black, Blue, Pink, White",
            "Influence": "Anime Culture"
        })
    }

    #[test]
    fn complete_responses_parse_into_the_profile() {
        let profile = parse_profile_response(&full_profile_json().to_string()).unwrap();
        assert_eq!(profile.age, 20);
        assert_eq!(profile.attire_style, "Casual");
        assert_eq!(profile.hobbies, vec!["Gaming", "Anime/Manga"]);
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in [
            "Age",
            "Occupation",
            "Location",
            "Ethnicity",
            "Attire Style",
            "Style Archetype",
        ] {
            let mut value = full_profile_json();
            value.as_object_mut().unwrap().remove(field);
            assert!(
                parse_profile_response(&value.to_string()).is_err(),
                "parse succeeded without {field}"
            );
        }
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let mut value = full_profile_json();
        let map = value.as_object_mut().unwrap();
        map.remove("Hobbies");
        map.remove("Color Palette");
        map.remove("Influence");
        let profile = parse_profile_response(&value.to_string()).unwrap();
        assert!(profile.hobbies.is_empty());
        assert!(profile.color_palette.is_empty());
    }

    #[test]
    fn non_json_responses_are_rejected() {
        assert!(parse_profile_response("Sure! Here is your profile:").is_err());
    }

    #[test]
    fn wire_field_names_keep_their_spaces() {
        let encoded = serde_json::to_value(fallback_profile()).unwrap();
        assert_eq!(encoded["Attire Style"], "Casual");
        assert_eq!(encoded["Style Archetype"], "Trendy");
        assert_eq!(encoded["Color Palette"], "Red, Black, White");
    }

    #[tokio::test]
    async fn missing_credentials_return_the_hardcoded_profile() {
        let config = offline_config();
        let profile = generate_profile(&config, &[vec![0xFF, 0xD8]]).await;
        assert_eq!(profile, fallback_profile());
        let from_text = generate_profile_from_text(&config, "tall, likes red").await;
        assert_eq!(from_text, fallback_profile());
    }

    #[tokio::test]
    async fn empty_image_sets_return_the_hardcoded_profile() {
        let mut config = offline_config();
        config.cloudflare_api_token = "token".to_string();
        config.cloudflare_account_id = "account".to_string();
        let profile = generate_profile(&config, &[]).await;
        assert_eq!(profile, fallback_profile());
    }
}
