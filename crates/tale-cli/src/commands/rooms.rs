use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tale_core::Room;
use tale_engine::terminal_outcome;

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load_reported(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Transitions"]);

    for room in loaded.graph.rooms() {
        let summary = summarize(room);
        table.add_row(vec![room.id.as_str(), &room.title, &summary]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms, starting at \"{}\"", loaded.graph.len(), loaded.current);

    Ok(())
}

fn summarize(room: &Room) -> String {
    if let Some(outcome) = terminal_outcome(&room.transitions) {
        return format!("ends: {outcome}");
    }

    let total = room.transitions.len();
    let weighted = room
        .transitions
        .iter()
        .filter(|t| t.weight().is_some())
        .count();
    if weighted > 0 {
        format!("{total} choices ({weighted} weighted)")
    } else {
        format!("{total} choices")
    }
}
