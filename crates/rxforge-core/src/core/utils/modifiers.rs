/// Splits a comma-separated modifier list into its trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept, since every occurrence is applied in sequence.
pub fn parse_modifiers(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect()
}
