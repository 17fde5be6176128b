//! Load report formatting

use anyhow::Result;
use page_loader_core::{LoadOutcome, MountedApp};
use serde_json::{json, Value};

/// Maximum characters of a binding's state shown on one line
const STATE_PREVIEW_LEN: usize = 72;

/// Print one load result
pub fn print_outcome(result: &page_loader_core::Result<LoadOutcome>) {
    match result {
        Ok(LoadOutcome::Mounted(load)) => {
            println!(
                "✅ {} (generation {}, HTTP {}, {} bytes)",
                load.page_id,
                load.generation,
                load.status,
                load.markup.len()
            );
            print_bindings(&load.app);
        }
        Ok(LoadOutcome::Superseded {
            page_id,
            generation,
            latest,
        }) => {
            println!(
                "⏭️  {} (generation {}) discarded, generation {} is newer",
                page_id, generation, latest
            );
        }
        Err(e) => println!("❌ {}", e),
    }
}

fn print_bindings(app: &MountedApp) {
    if app.bindings.is_empty() {
        println!("   no bindings on #{}", app.mount_point);
        return;
    }

    for binding in &app.bindings {
        println!(
            "   🔗 {} → {}",
            binding.component,
            preview(&binding.state.to_string())
        );
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= STATE_PREVIEW_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(STATE_PREVIEW_LEN).collect();
    format!("{}…", cut)
}

/// Print the final contents of the mount point
pub fn print_mount_point(id: &str, content: &str) {
    println!("\n📄 #{}", id);
    if content.is_empty() {
        println!("   (empty)");
    } else {
        for line in content.lines() {
            println!("   {}", line);
        }
    }
}

/// Print every result plus the final mount point as one JSON document
pub fn print_json(
    results: &[page_loader_core::Result<LoadOutcome>],
    mount_point: &str,
    content: &str,
) -> Result<()> {
    let loads: Vec<Value> = results
        .iter()
        .map(|result| match result {
            Ok(outcome) => serde_json::to_value(outcome),
            Err(e) => Ok(json!({ "outcome": "failed", "error": e.to_string() })),
        })
        .collect::<std::result::Result<_, _>>()?;

    let report = json!({
        "loads": loads,
        "mount_point": { "id": mount_point, "content": content },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
