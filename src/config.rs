use std::env;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub log_level: String,
    pub cloudflare_api_token: String,
    pub cloudflare_account_id: String,
    pub cloudflare_api_base_url: String,
    pub cloudflare_model: String,
    pub image_dir: String,
    pub public_image_dir: String,
    pub upstream_timeout_seconds: u64,
    pub access_token_expire_minutes: i64,
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_i64(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            bind_address: env_string("BIND_ADDRESS", "0.0.0.0:8000"),
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            cloudflare_api_token: env_string("CLOUDFLARE_API_TOKEN", ""),
            cloudflare_account_id: env_string("CLOUDFLARE_ACCOUNT_ID", ""),
            cloudflare_api_base_url: env_string(
                "CLOUDFLARE_API_BASE_URL",
                "https://api.cloudflare.com/client/v4",
            ),
            cloudflare_model: env_string("CLOUDFLARE_MODEL", "@cf/meta/llama-2-7b-chat-int8"),
            image_dir: env_string("IMAGE_DIR", "./img"),
            public_image_dir: env_string("PUBLIC_IMAGE_DIR", "public/images"),
            upstream_timeout_seconds: env_u64("UPSTREAM_TIMEOUT_SECONDS", 60),
            access_token_expire_minutes: env_i64("ACCESS_TOKEN_EXPIRE_MINUTES", 30),
        })
    }

    /// Both credentials are required for any live upstream call; absence of
    /// either one routes every stage to its hardcoded fallback.
    pub fn cloudflare_credentials(&self) -> Option<(&str, &str)> {
        let token = self.cloudflare_api_token.trim();
        let account_id = self.cloudflare_account_id.trim();
        if token.is_empty() || account_id.is_empty() {
            return None;
        }
        Some((token, account_id))
    }
}

pub const PROFILE_SYSTEM_PROMPT: &str = r#"
Analyze the images and create a customer profile in JSON format with these fields:
- Age (integer)
- Occupation (string)
- Location (string)
- Hobbies (array of strings)
- Ethnicity (string)
- Attire Style (Casual/Business Casual/Smart Casual/Business/Streetwear/Vintage)
- Style Archetype (string)
- Color Palette (string)
- Influence (string)

Example:
{
"Age": 20,
"Occupation": "Student",
"Location": "Urban",
"Hobbies": ["Gaming", "Art"],
"Ethnicity": "Not Specified",
"Attire Style": "Casual",
"Style Archetype": "Trendy",
"Color Palette": "Black, Blue",
"Influence": "Street Fashion"
}
"#;

pub const OUTFIT_SYSTEM_PROMPT: &str = r#"
Generate 4 outfit recommendations in JSON format with:
- url: Image URL
- description: Brief outfit description

Example:
{
"outfit_recommendations": [
    {
        "url": "https://example.com/image1.jpg",
        "description": "Casual red t-shirt"
    }
]
}
"#;

pub const ITEM_SYSTEM_PROMPT: &str = "You are a fashion expert. Generate a list of 5 clothing items that match the user's style profile.\nFor each item, provide:\n1. A URL to an image of the item\n2. A brief description of the item\nFormat the response as a JSON object with an 'items' array containing the items.";
