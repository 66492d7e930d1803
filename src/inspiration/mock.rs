//! Placeholder results for running without an access token

use super::types::{Pin, SearchResults};

const MOCK_IMAGES: [(&str, &str); 12] = [
    ("https://images.unsplash.com/photo-1519741497674-611481863552?w=600&h=800&fit=crop", "Bridal bouquet"),
    ("https://images.unsplash.com/photo-1519167758481-83f550bb49b3?w=600&h=900&fit=crop", "Garden venue"),
    ("https://images.unsplash.com/photo-1594552072238-b8a33785b261?w=600&h=750&fit=crop", "Wedding dress"),
    ("https://images.unsplash.com/photo-1478146896981-b80fe463b330?w=600&h=800&fit=crop", "Table setting"),
    ("https://images.unsplash.com/photo-1511795409834-ef04bbd61622?w=600&h=850&fit=crop", "Wedding decor"),
    ("https://images.unsplash.com/photo-1520854221256-17451cc331bf?w=600&h=700&fit=crop", "Wedding cake"),
    ("https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=600&h=900&fit=crop", "Outdoor ceremony"),
    ("https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=600&h=800&fit=crop", "Wedding rings"),
    ("https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?w=600&h=750&fit=crop", "Bride portrait"),
    ("https://images.unsplash.com/photo-1510076857177-7470076d4098?w=600&h=850&fit=crop", "Reception hall"),
    ("https://images.unsplash.com/photo-1537633552985-df8429e8048b?w=600&h=800&fit=crop", "Wedding photography"),
    ("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&h=900&fit=crop", "Floral arrangement"),
];

/// The fixed placeholder page, titled after the query as the user typed it
pub fn mock_results(query: &str) -> SearchResults {
    let pins = MOCK_IMAGES
        .iter()
        .enumerate()
        .map(|(i, (url, label))| Pin {
            id: (i + 1).to_string(),
            title: format!("{} - {}", query, label),
            image_url: url.to_string(),
            // Only the first "600" is swapped, wherever it occurs
            thumbnail_url: url.replacen("600", "400", 1),
            dominant_color: None,
            link: None,
        })
        .collect();

    SearchResults {
        pins,
        next_page: None,
        is_mock: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_results() {
        let results = mock_results("boho");
        assert_eq!(results.pins.len(), 12);
        assert!(results.is_mock);
        assert!(results.next_page.is_none());
        assert_eq!(results.pins[0].id, "1");
        assert_eq!(results.pins[0].title, "boho - Bridal bouquet");
        assert_eq!(results.pins[11].title, "boho - Floral arrangement");
        assert!(results.pins[0].thumbnail_url.contains("w=400"));
        assert!(results.pins.iter().all(|p| p.link.is_none()));
    }

    #[test]
    fn test_thumbnail_replaces_first_occurrence_only() {
        // The photo ID of the outdoor ceremony image contains "600"
        let pin = &mock_results("x").pins[6];
        assert!(pin.thumbnail_url.contains("1464366400400"));
        assert!(pin.thumbnail_url.contains("w=600"));
    }
}
