//! Canonical lookup keys.

/// Build the lookup key for a deck entry.
///
/// Each part is trimmed, a trailing `.0` is dropped from the depth, spaces
/// are removed from the profile, and the concatenation is upper-cased.
///
/// ```
/// use deck_weights::canonical_key;
///
/// assert_eq!(canonical_key("3.0", "VULCRAFT W ", "22"), "3VULCRAFTW22");
/// ```
pub fn canonical_key(depth: &str, profile: &str, gauge: &str) -> String {
    let depth = depth.trim();
    let depth = depth.strip_suffix(".0").unwrap_or(depth);
    let profile = profile.trim().replace(' ', "");
    let gauge = gauge.trim();

    format!("{}{}{}", depth, profile, gauge).to_uppercase()
}
