use uuid::Uuid;

/// Generates a new opaque user identifier.
///
/// A random 128-bit value rendered in canonical hyphenated form. Identifier
/// uniqueness is probabilistic and needs no storage coordination; email
/// uniqueness is enforced authoritatively by the table store instead.
pub fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(new_user_id(), new_user_id());
    }

    #[test]
    fn test_id_is_canonical_uuid() {
        let id = new_user_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.to_string(), id);
    }
}
