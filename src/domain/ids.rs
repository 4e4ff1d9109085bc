//! Document identifiers
//!
//! Every row is keyed by a v4 UUID stored as hyphenated lowercase text.
//! Ids arriving from clients are normalized to that form before they reach
//! a query, so `{...}`-braced or uppercase input still matches.

use uuid::Uuid;

use super::DomainError;

/// Generate a fresh identifier for a new row.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a client-supplied id, failing with `message` when it is not a UUID.
pub fn parse_id(raw: &str, message: &str) -> Result<String, DomainError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| DomainError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let id = new_id();
        assert_eq!(parse_id(&id, "bad").unwrap(), id);
    }

    #[test]
    fn parse_normalizes_case() {
        let parsed = parse_id("6F9619FF-8B86-D011-B42D-00C04FC964FF", "bad").unwrap();
        assert_eq!(parsed, "6f9619ff-8b86-d011-b42d-00c04fc964ff");
    }

    #[test]
    fn rejects_garbage_with_given_message() {
        match parse_id("not-an-id", "Provide a valid id as videoId") {
            Err(DomainError::Validation { message, errors }) => {
                assert_eq!(message, "Provide a valid id as videoId");
                assert_eq!(errors, vec!["Provide a valid id as videoId".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_id("", "bad").is_err());
        assert!(parse_id("507f1f77bcf86cd799439011", "bad").is_err());
    }
}
