/// Normalize user input into a subdomain slug.
///
/// Lower-cases the input and keeps only `[a-z0-9]`.
pub fn normalize_subdomain(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Whether a form field is empty after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
