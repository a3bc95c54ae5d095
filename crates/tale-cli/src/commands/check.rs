use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load_reported(path)?;
    let graph = &loaded.graph;

    let transitions: usize = graph.rooms().iter().map(|r| r.transitions.len()).sum();
    println!(
        "{}: {} rooms, {} transitions",
        loaded.story_path.display(),
        graph.len(),
        transitions
    );
    println!("Starting room: {}", loaded.current);

    // Targets resolve lazily during play, so dangling links are warnings
    // rather than errors.
    let mut warnings = 0;
    for room in graph.rooms() {
        for target in room.transitions.iter().filter_map(|t| t.target()) {
            if !graph.contains(target) {
                println!(
                    "warning: room \"{}\" links to unknown room \"{target}\"",
                    room.id
                );
                warnings += 1;
            }
        }
    }
    if warnings > 0 {
        println!("  {warnings} warning(s)");
    }

    Ok(())
}
