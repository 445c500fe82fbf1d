//! CLI command implementations.

use std::path::Path;

use crate::store::NoteStore;
use crate::templates::{greeting, greeting_prompt, GreetingStyle};
use crate::types::NotesResult;

/// Pretty-print `value` as JSON. Serialization failures surface as I/O errors.
fn render_json<T: serde::Serialize>(value: &T) -> NotesResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}

fn print_json(value: &serde_json::Value) -> NotesResult<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Print text that may or may not already end in a newline, without adding a
/// second one.
fn print_verbatim(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

/// Append a note.
pub fn cmd_add(path: &Path, message: &str, json: bool) -> NotesResult<()> {
    let store = NoteStore::new(path);
    let confirmation = store.append(message)?;
    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "status": confirmation,
        }))?;
    } else {
        println!("{confirmation}");
    }
    Ok(())
}

/// Print every note.
pub fn cmd_read(path: &Path, json: bool) -> NotesResult<()> {
    let notes = NoteStore::new(path).read_all()?;
    if json {
        print_json(&serde_json::json!({ "notes": notes }))?;
    } else {
        println!("{notes}");
    }
    Ok(())
}

/// Print the most recent note exactly as stored.
pub fn cmd_latest(path: &Path, json: bool) -> NotesResult<()> {
    let latest = NoteStore::new(path).read_latest()?;
    if json {
        print_json(&serde_json::json!({ "latest": latest }))?;
    } else {
        print_verbatim(&latest);
    }
    Ok(())
}

/// Print the summarization request for the current notes.
pub fn cmd_summary(path: &Path, json: bool) -> NotesResult<()> {
    let request = NoteStore::new(path).summarize()?;
    if json {
        print_json(&serde_json::json!({ "prompt": request }))?;
    } else {
        println!("{request}");
    }
    Ok(())
}

/// Print a plain greeting.
pub fn cmd_greet(name: &str, json: bool) -> NotesResult<()> {
    let text = greeting(name);
    if json {
        print_json(&serde_json::json!({ "greeting": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Print a greeting prompt in the requested style.
pub fn cmd_prompt(name: &str, style: &str, json: bool) -> NotesResult<()> {
    let resolved = GreetingStyle::from_name(style);
    if GreetingStyle::parse(style).is_none() {
        log::warn!("Unknown style '{style}', using '{resolved}'");
    }
    let text = greeting_prompt(name, resolved);
    if json {
        print_json(&serde_json::json!({
            "style": resolved.name(),
            "prompt": text,
        }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Display information about the notes file.
pub fn cmd_info(path: &Path, json: bool) -> NotesResult<()> {
    let store = NoteStore::new(path);
    let count = store.note_count()?;
    let size = std::fs::metadata(path)?.len();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "notes": count,
            "file_size": size,
        }))?;
    } else {
        println!("File: {}", path.display());
        println!("Notes: {count}");
        println!("File size: {size} bytes");
    }
    Ok(())
}
