//! Prompt normalization
//!
//! Lower-cases the prompt, drops `.` and `,`, and trims the outer whitespace.
//! Nothing else is touched, so hyphens and inner spacing survive.

/// Characters removed from every prompt before matching
pub const STRIPPED_CHARS: [char; 2] = ['.', ','];

/// Normalize a raw prompt.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(&STRIPPED_CHARS[..], "")
        .trim()
        .to_string()
}
