// Languiny Remap Engine
// Rewrites text typed under one layout into what the same keys produce under another

use crate::table::{self, MappingTable};
use crate::{Layout, LayoutError};

/// Remap `text` typed under `from` into the text the same keystrokes would
/// have produced under `to`.
///
/// Unsupported pairs (including `from == to`) return the input unchanged.
/// The output always has the same number of code points as the input.
///
/// # Examples
/// ```
/// use languiny_core::{remap, Layout};
/// assert_eq!(remap("Ghbdtn", Layout::EnUS, Layout::RuRU), "Привет");
/// assert_eq!(remap("42!", Layout::EnUS, Layout::RuRU), "42!");
/// ```
pub fn remap(text: &str, from: Layout, to: Layout) -> String {
    if from == to {
        return text.to_string();
    }
    match table::table(from, to) {
        Some(table) => remap_with(text, table),
        None => text.to_string(),
    }
}

/// Remap using raw layout identifiers, as they arrive from the C boundary
pub fn remap_word(text: &str, from: i32, to: i32) -> Result<String, LayoutError> {
    let from = Layout::from_id(from)?;
    let to = Layout::from_id(to)?;
    Ok(remap(text, from, to))
}

/// Apply a specific table to every code point of `text`
pub fn remap_with(text: &str, table: &MappingTable) -> String {
    text.chars().map(|c| remap_char(c, table)).collect()
}

/// Map a single code point, carrying its case over to the result
pub fn remap_char(c: char, table: &MappingTable) -> char {
    let Some(lower) = single(c.to_lowercase()) else {
        return c;
    };
    match table.get(lower) {
        Some(mapped) => preserve_case(c, mapped),
        None => c,
    }
}

fn preserve_case(original: char, mapped: char) -> char {
    if original.is_uppercase() {
        // Multi-char uppercase forms would change the length; keep lowercase.
        single(mapped.to_uppercase()).unwrap_or(mapped)
    } else {
        mapped
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
