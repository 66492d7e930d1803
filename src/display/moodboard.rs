//! Moodboard display formatting

use crate::models::Moodboard;

use super::or_dash;

pub fn format_moodboard_list(boards: &[Moodboard]) -> String {
    if boards.is_empty() {
        return "No moodboards yet.\n\nRun 'wedplan moodboard create <name>' to start one.\n"
            .to_string();
    }

    let name_width = boards.iter().map(|b| b.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {}\n",
        "Name",
        "Items",
        "Palette",
        name_width = name_width,
    ));
    for board in boards {
        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {}\n",
            board.name,
            board.items.len(),
            board.color_palette.join(" "),
            name_width = name_width,
        ));
    }
    output
}

/// Format one board with its items, numbered for `remove-item`
pub fn format_moodboard_details(board: &Moodboard) -> String {
    let mut output = String::new();

    output.push_str(&format!("Moodboard: {}\n", board.name));
    output.push_str(&format!("  ID:          {}\n", board.id));
    output.push_str(&format!("  Description: {}\n", or_dash(board.description.as_deref())));
    output.push_str(&format!(
        "  Palette:     {}\n",
        if board.color_palette.is_empty() {
            "-".to_string()
        } else {
            board.color_palette.join(" ")
        }
    ));
    output.push_str(&format!("  Cover:       {}\n", or_dash(board.cover_image.as_deref())));

    if board.items.is_empty() {
        output.push_str("\n  (no items)\n");
        return output;
    }

    output.push_str(&format!("\n  Items ({}):\n", board.items.len()));
    for item in &board.items {
        output.push_str(&format!("  {}  {}\n", item.id, item.image_url));
        if !item.tags.is_empty() {
            output.push_str(&format!("      tags: {}\n", item.tags.join(", ")));
        }
        if let Some(source) = &item.source_url {
            output.push_str(&format!("      source: {}\n", source));
        }
        if let Some(notes) = &item.notes {
            output.push_str(&format!("      {}\n", notes));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodboardItem;

    #[test]
    fn test_list() {
        let mut board = Moodboard::new("Florals");
        board.color_palette = vec!["#F3D6D0".into(), "#FFFFFF".into()];
        board.add_item(MoodboardItem::new("https://i.example/1.jpg"));

        let output = format_moodboard_list(&[board]);
        assert!(output.contains("Florals"));
        assert!(output.contains("#F3D6D0 #FFFFFF"));
    }

    #[test]
    fn test_details() {
        let mut board = Moodboard::new("Florals");
        let mut item = MoodboardItem::new("https://i.example/1.jpg");
        item.tags = vec!["peony".into(), "blush".into()];
        board.add_item(item);

        let output = format_moodboard_details(&board);
        assert!(output.contains("Items (1):"));
        assert!(output.contains("tags: peony, blush"));
        assert!(output.contains("Cover:       https://i.example/1.jpg"));
    }

    #[test]
    fn test_empty_board() {
        let output = format_moodboard_details(&Moodboard::new("Empty"));
        assert!(output.contains("(no items)"));
    }
}
