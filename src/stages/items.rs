use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::catalog::{CatalogItem, Category, CATALOG};
use crate::config::{Config, ITEM_SYSTEM_PROMPT};
use crate::llm::call_workers_ai;
use crate::sampling::sample_default;
use crate::stages::or_fallback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<CatalogItem>,
}

/// Canonical item-stage output: a per-category map. The fallback path keys
/// entries by catalog category; a live upstream result lands under
/// `RECOMMENDED_KEY` since the model returns one flat list.
pub type ItemMap = BTreeMap<String, ItemList>;

pub const RECOMMENDED_KEY: &str = "recommended";

/// Four random picks from every catalog category.
pub fn fallback_items() -> ItemMap {
    Category::ALL
        .iter()
        .map(|category| {
            (
                category.as_str().to_string(),
                ItemList {
                    items: sample_default(CATALOG.items(*category)),
                },
            )
        })
        .collect()
}

fn parse_items_response(text: &str) -> Result<ItemList> {
    serde_json::from_str(text).context("item response did not match the expected schema")
}

/// Produces clothing items for the given context (a serialized profile or
/// outfit payload). Missing credentials or any upstream failure degrade to
/// per-category catalog samples; never returns an error.
pub async fn generate_items(config: &Config, context: &Value) -> ItemMap {
    if config.cloudflare_credentials().is_none() {
        info!("Missing Cloudflare credentials - returning hardcoded items");
        return fallback_items();
    }

    or_fallback(
        "items",
        async {
            let user_content = format!("Generate items for this profile: {context}");
            let text = call_workers_ai(config, ITEM_SYSTEM_PROMPT, &user_content, "items").await?;
            let list = parse_items_response(&text)?;
            let mut map = ItemMap::new();
            map.insert(RECOMMENDED_KEY.to_string(), list);
            Ok(map)
        },
        fallback_items,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::stages::offline_config;
    use serde_json::json;

    #[test]
    fn fallback_covers_every_category_with_at_most_four_items() {
        let items = fallback_items();
        assert_eq!(items.len(), Category::ALL.len());
        for category in Category::ALL {
            let list = items
                .get(category.as_str())
                .unwrap_or_else(|| panic!("missing {category}"));
            assert!(!list.items.is_empty());
            assert!(list.items.len() <= 4);
            let pool = CATALOG.items(category);
            for item in &list.items {
                assert!(pool.contains(item), "item not drawn from the {category} pool");
            }
        }
    }

    #[test]
    fn flat_item_lists_parse() {
        let text = json!({
            "items": [
                { "url": "https://example.com/shirt.jpg", "description": "Oxford shirt" }
            ]
        })
        .to_string();
        let list = parse_items_response(&text).unwrap();
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn responses_without_an_items_key_are_rejected() {
        assert!(parse_items_response("{\"clothing\": []}").is_err());
        assert!(parse_items_response("plain text").is_err());
    }

    #[tokio::test]
    async fn missing_credentials_return_per_category_samples() {
        let config = offline_config();
        let items = generate_items(&config, &json!({ "Age": 20 })).await;
        let keys: Vec<&str> = items.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["casual", "formal", "numbered", "traditional"]);
        assert!(!items.contains_key(RECOMMENDED_KEY));
    }
}
