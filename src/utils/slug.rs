/// Lowercases, turns spaces into dashes and drops anything outside `[A-Za-z0-9_-]`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// The slug to store: the explicit one when given, otherwise derived from the
/// name, falling back to `id-<8 random hex chars>` for names with no usable characters.
pub fn resolve_slug(explicit: &str, name: &str) -> String {
    let explicit = explicit.trim();
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let derived = slugify(name);
    if derived.is_empty() {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        format!("id-{}", &uuid[..8])
    } else {
        derived
    }
}
