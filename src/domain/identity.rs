use uuid::Uuid;

/// Parses a record identifier, returning `None` for blank or malformed input
///
/// Ids travel as plain strings through models and requests. Anything that
/// is not a UUID is treated as "no identity" rather than an error.
pub fn parse_id(id: &str) -> Option<Uuid> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }
    Uuid::parse_str(trimmed).ok()
}
