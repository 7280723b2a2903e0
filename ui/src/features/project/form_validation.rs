use crate::features::project::types::*;
use crate::utils::{char_len, is_blank};

/// Keep at most `max_chars` UTF-16 units (see [`char_len`]). Anything typed
/// or pasted past the cap is dropped, so a value already at the cap does not
/// change. A character whose surrogate pair would straddle the cap is dropped
/// whole.
pub fn enforce_char_limit(value: &str, max_chars: usize) -> String {
    let mut units = 0;
    for (byte_index, ch) in value.char_indices() {
        units += ch.len_utf16();
        if units > max_chars {
            return value[..byte_index].to_string();
        }
    }
    value.to_string()
}

/// Bring every editable attribute back under the cap, e.g. after restoring a
/// record that was saved elsewhere.
pub fn clamp_project(mut data: ProjectData, max_chars: usize) -> ProjectData {
    for field in ProjectField::ALL {
        if char_len(data.get(field)) > max_chars {
            let clamped = enforce_char_limit(data.get(field), max_chars);
            data.set(field, clamped);
        }
    }
    data
}

/// Required-field check for a single attribute
pub fn validate_field(field: ProjectField, value: &str) -> Option<String> {
    if is_blank(value) {
        Some(format!("{} is required", field.key()))
    } else {
        None
    }
}

/// Share of editable attributes that have non-blank content, 0.0 to 100.0
pub fn completion_percent(data: &ProjectData) -> f64 {
    let filled = ProjectField::ALL
        .iter()
        .filter(|field| !is_blank(data.get(**field)))
        .count();
    filled as f64 / ProjectField::ALL.len() as f64 * 100.0
}

/// Progress label, e.g. "67% completed"
pub fn progress_label(percent: f64) -> String {
    format!("{}% completed", percent.round() as u32)
}

/// Warning text once a value gets close to the cap. Hidden again at the cap itself.
pub fn char_limit_warning(len: usize, warning_threshold: usize, max_chars: usize) -> Option<String> {
    if len >= warning_threshold && len < max_chars {
        Some(format!("Approaching character limit ({}/{})", len, max_chars))
    } else {
        None
    }
}

/// Warning for a field's current value
pub fn field_warning(value: &str, warning_threshold: usize, max_chars: usize) -> Option<String> {
    char_limit_warning(char_len(value), warning_threshold, max_chars)
}
