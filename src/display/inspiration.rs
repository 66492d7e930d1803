//! Inspiration search results formatting

use crate::inspiration::SearchResults;

pub fn format_search_results(results: &SearchResults) -> String {
    if results.pins.is_empty() {
        return "No pins found.\n".to_string();
    }

    let mut output = String::new();
    if results.is_mock {
        output.push_str(
            "Showing sample pins. Set PINTEREST_ACCESS_TOKEN to search Pinterest.\n\n",
        );
    }

    for (i, pin) in results.pins.iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", i + 1, pin.title));
        output.push_str(&format!("    {}\n", pin.image_url));
        if let Some(link) = &pin.link {
            output.push_str(&format!("    {}\n", link));
        }
    }

    if let Some(next) = &results.next_page {
        output.push_str(&format!("\nMore results: --page {}\n", next));
    }
    output
}
