use std::collections::HashMap;

/// Display labels for the categories common detectors emit.
pub const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("PERSON", "name"),
    ("ORG", "org"),
    ("ORGANIZATION", "org"),
    ("GPE", "place"),
    ("LOCATION", "location"),
    ("ADDRESS", "address"),
    ("EMAIL", "email"),
    ("PHONE", "phone"),
    ("PHONE_NUMBER", "phone"),
    ("DATE", "date"),
    ("ID", "id"),
    ("CREDIT_CARD", "card"),
    ("IP", "ip"),
];

/// Look up a category in [`DEFAULT_LABELS`]. Exact, case-sensitive.
pub fn default_label(category: &str) -> Option<&'static str> {
    DEFAULT_LABELS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, label)| *label)
}

/// Resolve the label for `category`: override, then (optionally) the
/// default table, then the category itself. The result is lowercased.
pub fn label_for(
    category: &str,
    overrides: &HashMap<String, String>,
    use_default_labels: bool,
) -> String {
    if let Some(label) = overrides.get(category) {
        return label.to_lowercase();
    }
    if use_default_labels {
        if let Some(label) = default_label(category) {
            return label.to_string();
        }
    }
    category.to_lowercase()
}
