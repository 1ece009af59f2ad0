//! Category label helpers for diagnostics.
//!
//! Selection never normalizes labels. These helpers only explain, in logs,
//! why a requested category found nothing (for example `"chicken"` requested
//! while the catalog stores `"Chicken"`).

/// Trim and lowercase a label.
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Catalog labels that loosely resemble `requested`.
///
/// A label is similar when its normalized form contains the lowercased
/// request or is contained by it. Blank labels are never reported.
pub fn similar_categories<'a, I>(requested: &str, known: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = requested.to_lowercase();
    known
        .into_iter()
        .filter(|label| {
            let normalized = normalize(label);
            !normalized.is_empty()
                && (normalized.contains(&needle) || needle.contains(&normalized))
        })
        .collect()
}
