//! Pin search payloads
//!
//! `Upstream*` types mirror the search API's JSON; [`Pin`] and
//! [`SearchResults`] are the trimmed shape handed to our own callers.

use serde::{Deserialize, Serialize};

/// Title used when a pin has neither title nor description
pub const DEFAULT_PIN_TITLE: &str = "Wedding inspiration";

/// Longest description prefix used as a stand-in title, in characters
const TITLE_FROM_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVariant {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// The renditions the API offers for a pin image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamImages {
    #[serde(rename = "150x150", default)]
    pub square: Option<ImageVariant>,
    #[serde(rename = "400x300", default)]
    pub small: Option<ImageVariant>,
    #[serde(rename = "600x", default)]
    pub medium: Option<ImageVariant>,
    #[serde(rename = "1200x", default)]
    pub large: Option<ImageVariant>,
    #[serde(default)]
    pub originals: Option<ImageVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamMedia {
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub images: Option<UpstreamImages>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPin {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub media: Option<UpstreamMedia>,
    #[serde(default)]
    pub dominant_color: Option<String>,
}

/// One page of upstream results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSearchResponse {
    #[serde(default)]
    pub items: Vec<UpstreamPin>,
    #[serde(default)]
    pub bookmark: Option<String>,
}

/// First non-empty URL among the given renditions
fn first_url(variants: &[&Option<ImageVariant>]) -> String {
    variants
        .iter()
        .filter_map(|v| v.as_ref())
        .map(|v| v.url.as_str())
        .find(|url| !url.is_empty())
        .unwrap_or_default()
        .to_string()
}

impl UpstreamPin {
    fn images(&self) -> Option<&UpstreamImages> {
        self.media.as_ref().and_then(|m| m.images.as_ref())
    }

    /// Full-size image: 600x, then 1200x, then the original
    pub fn image_url(&self) -> String {
        self.images()
            .map(|i| first_url(&[&i.medium, &i.large, &i.originals]))
            .unwrap_or_default()
    }

    /// Grid thumbnail: 400x300, then 600x
    pub fn thumbnail_url(&self) -> String {
        self.images()
            .map(|i| first_url(&[&i.small, &i.medium]))
            .unwrap_or_default()
    }

    /// The pin's title, else the start of its description, else a stock title
    pub fn display_title(&self) -> String {
        let non_empty = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(str::to_string);
        non_empty(&self.title)
            .or_else(|| {
                non_empty(&self.description)
                    .map(|d| d.chars().take(TITLE_FROM_DESCRIPTION_CHARS).collect())
            })
            .unwrap_or_else(|| DEFAULT_PIN_TITLE.to_string())
    }
}

/// A search result as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub dominant_color: Option<String>,
    pub link: Option<String>,
}

impl From<UpstreamPin> for Pin {
    fn from(pin: UpstreamPin) -> Self {
        Self {
            title: pin.display_title(),
            image_url: pin.image_url(),
            thumbnail_url: pin.thumbnail_url(),
            id: pin.id,
            dominant_color: pin.dominant_color,
            link: pin.link,
        }
    }
}

/// A page of results; `next_page` is the bookmark for the following page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub pins: Vec<Pin>,
    pub next_page: Option<String>,
    /// Placeholder results served while no access token is configured
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_mock: bool,
}

impl From<UpstreamSearchResponse> for SearchResults {
    fn from(response: UpstreamSearchResponse) -> Self {
        Self {
            pins: response.items.into_iter().map(Pin::from).collect(),
            next_page: response.bookmark,
            is_mock: false,
        }
    }
}

/// Bias a search towards weddings unless it already mentions them
pub fn wedding_query(query: &str) -> String {
    if query.to_lowercase().contains("wedding") {
        query.to_string()
    } else {
        format!("wedding {}", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pin(value: serde_json::Value) -> UpstreamPin {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_wedding_query() {
        assert_eq!(wedding_query("boho florals"), "wedding boho florals");
        assert_eq!(wedding_query("Rustic WEDDING arch"), "Rustic WEDDING arch");
        assert_eq!(wedding_query("weddings on the beach"), "weddings on the beach");
    }

    #[test]
    fn test_title_fallbacks() {
        let titled = pin(json!({"id": "1", "title": "Peony bouquet", "description": "ignored"}));
        assert_eq!(titled.display_title(), "Peony bouquet");

        let long = "x".repeat(80);
        let described = pin(json!({"id": "2", "title": "", "description": long}));
        assert_eq!(described.display_title().chars().count(), 50);

        let accented = pin(json!({"id": "3", "description": "é".repeat(60)}));
        assert_eq!(accented.display_title(), "é".repeat(50));

        let bare = pin(json!({"id": "4", "title": null, "description": ""}));
        assert_eq!(bare.display_title(), DEFAULT_PIN_TITLE);
    }

    #[test]
    fn test_image_size_preferences() {
        let full = pin(json!({
            "id": "1",
            "media": {"media_type": "image", "images": {
                "150x150": {"url": "s", "width": 150, "height": 150},
                "400x300": {"url": "m", "width": 400, "height": 300},
                "600x": {"url": "l", "width": 600, "height": 900},
                "1200x": {"url": "xl", "width": 1200, "height": 1800},
                "originals": {"url": "o", "width": 2400, "height": 3600}
            }}
        }));
        assert_eq!(full.image_url(), "l");
        assert_eq!(full.thumbnail_url(), "m");

        let sparse = pin(json!({
            "id": "2",
            "media": {"images": {"1200x": {"url": "xl"}, "originals": {"url": "o"}}}
        }));
        assert_eq!(sparse.image_url(), "xl");
        assert_eq!(sparse.thumbnail_url(), "");

        let originals_only = pin(json!({"id": "3", "media": {"images": {"originals": {"url": "o"}}}}));
        assert_eq!(originals_only.image_url(), "o");

        let none = pin(json!({"id": "4"}));
        assert_eq!(none.image_url(), "");
        assert_eq!(none.thumbnail_url(), "");
    }

    #[test]
    fn test_results_serialize_camel_case() {
        let results = SearchResults::from(UpstreamSearchResponse {
            items: vec![pin(json!({"id": "9", "title": "Arch", "dominant_color": "#ffffff"}))],
            bookmark: Some("next-token".into()),
        });
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["nextPage"], "next-token");
        assert_eq!(value["pins"][0]["dominantColor"], "#ffffff");
        assert_eq!(value["pins"][0]["imageUrl"], "");
        assert!(value["pins"][0]["link"].is_null());
        assert!(value.get("isMock").is_none());
    }
}
