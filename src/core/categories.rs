//! Category list operations.
//!
//! Categories are plain strings. Removing one never touches dishes that still carry it.

/// Appends `name` (trimmed) unless it is blank. Returns whether anything was added.
pub fn add_category(categories: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    categories.push(name.to_string());
    true
}

/// Removes every entry equal to `name`. Returns how many were removed.
pub fn remove_category(categories: &mut Vec<String>, name: &str) -> usize {
    let before = categories.len();
    categories.retain(|c| c != name);
    before - categories.len()
}
