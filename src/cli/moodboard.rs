//! Moodboard CLI commands

use clap::Subcommand;

use crate::display::{format_moodboard_details, format_moodboard_list};
use crate::error::{WedplanError, WedplanResult};
use crate::services::{AddItemInput, MoodboardService};
use crate::storage::Storage;

/// Moodboard subcommands
#[derive(Subcommand)]
pub enum MoodboardCommands {
    /// List moodboards
    List,
    /// Create a moodboard
    Create {
        /// Board name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show a board and its items
    Show {
        /// Board name or ID
        board: String,
    },
    /// Pin an image to a board
    AddItem {
        /// Board name or ID
        board: String,
        /// Image URL
        image_url: String,
        /// Page the image came from
        #[arg(short, long)]
        source: Option<String>,
        /// Tags, comma separated
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Remove an item from a board
    RemoveItem {
        /// Board name or ID
        board: String,
        /// Item ID, as shown by `moodboard show`
        item: String,
    },
    /// Set a board's colour palette
    Palette {
        /// Board name or ID
        board: String,
        /// Hex colours, e.g. "#F3D6D0"
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Delete a board
    Delete {
        /// Board name or ID
        board: String,
    },
}

/// Handle a moodboard command
pub fn handle_moodboard_command(storage: &Storage, cmd: MoodboardCommands) -> WedplanResult<()> {
    let service = MoodboardService::new(storage);

    match cmd {
        MoodboardCommands::List => {
            let boards = service.list()?;
            print!("{}", format_moodboard_list(&boards));
        }

        MoodboardCommands::Create { name, description } => {
            let board = service.create(&name, description)?;
            println!("Created moodboard: {}", board.name);
            println!("  ID: {}", board.id);
        }

        MoodboardCommands::Show { board } => {
            let board = service
                .find(&board)?
                .ok_or_else(|| WedplanError::moodboard_not_found(&board))?;
            print!("{}", format_moodboard_details(&board));
        }

        MoodboardCommands::AddItem {
            board,
            image_url,
            source,
            tags,
            notes,
        } => {
            let (board, item) = service.add_item(
                &board,
                AddItemInput {
                    image_url,
                    source_url: source,
                    tags,
                    notes,
                },
            )?;
            println!("Pinned to {} ({} items)", board.name, board.items.len());
            println!("  Item ID: {}", item.id);
        }

        MoodboardCommands::RemoveItem { board, item } => {
            let removed = service.remove_item(&board, &item)?;
            println!("Removed {}", removed.image_url);
        }

        MoodboardCommands::Palette { board, colors } => {
            let board = service.set_palette(&board, &colors)?;
            println!("{} palette: {}", board.name, board.color_palette.join(" "));
        }

        MoodboardCommands::Delete { board } => {
            let board = service.delete(&board)?;
            println!(
                "Deleted moodboard: {} ({} items)",
                board.name,
                board.items.len()
            );
        }
    }

    Ok(())
}
