//! @acp:module "Content Merge Logic"
//! @acp:summary "Merges generated content into files from an earlier setup"
//! @acp:domain cli
//! @acp:layer service

use serde_json::Value;

pub const START_MARKER: &str = "<!-- BEGIN CLAUDE-SETUP -->";
pub const END_MARKER: &str = "<!-- END CLAUDE-SETUP -->";

/// Wrap generated markdown in the generated-content markers
pub fn wrap_with_markers(content: &str) -> String {
    format!("{}\n{}\n{}", START_MARKER, content.trim_end(), END_MARKER)
}

/// Merge generated markdown into existing content
///
/// If markers exist in the existing content, replaces the section between them.
/// Otherwise, appends the new section at the end.
pub fn merge_with_markers(existing: &str, generated: &str) -> String {
    match (existing.find(START_MARKER), existing.find(END_MARKER)) {
        (Some(start), Some(end)) if start < end => {
            let before = existing[..start].trim_end();
            let after = existing[end + END_MARKER.len()..].trim_start();

            let mut merged = String::new();
            if !before.is_empty() {
                merged.push_str(before);
                merged.push_str("\n\n");
            }
            merged.push_str(&wrap_with_markers(generated));
            merged.push('\n');
            if !after.is_empty() {
                merged.push('\n');
                merged.push_str(after);
            }
            merged
        }
        _ => append_section(existing, generated),
    }
}

fn append_section(existing: &str, generated: &str) -> String {
    let trimmed = existing.trim_end();
    if trimmed.is_empty() {
        format!("{}\n", wrap_with_markers(generated))
    } else {
        format!("{}\n\n{}\n", trimmed, wrap_with_markers(generated))
    }
}

/// Recursively merge `generated` into `existing`
///
/// Objects merge key by key; any other value from `generated` replaces the
/// existing one. Keys only present in `existing` are kept.
pub fn deep_merge(existing: &mut Value, generated: Value) {
    match (existing, generated) {
        (Value::Object(existing_obj), Value::Object(generated_obj)) => {
            for (key, value) in generated_obj {
                match existing_obj.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        existing_obj.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Merge generated JSON into existing JSON text, pretty-printed
pub fn merge_json(existing: &str, generated: Value) -> Result<String, serde_json::Error> {
    let mut existing_json: Value = serde_json::from_str(existing)?;
    deep_merge(&mut existing_json, generated);
    serde_json::to_string_pretty(&existing_json)
}
