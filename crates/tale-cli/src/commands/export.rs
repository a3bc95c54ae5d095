use std::path::Path;

pub fn run(path: &Path, output: Option<&Path>) -> Result<(), String> {
    let loaded = super::load_reported(path)?;

    let export = serde_json::json!({
        "story": loaded.story_path.display().to_string(),
        "start": loaded.current,
        "rooms": loaded.graph.rooms(),
    });
    let content = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(out) = output {
        std::fs::write(out, &content)
            .map_err(|e| format!("cannot write to {}: {e}", out.display()))?;
        println!("  Exported to {}", out.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
