//! Request body schemas
//!
//! Bodies are trimmed before they are checked, so surrounding whitespace
//! never counts towards a length bound.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use super::repositories::{PlaylistChanges, PlaylistDraft};
use super::DomainError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 5, max = 60, message = "Name should be between 5 and 60 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(
            min = 20,
            max = 200,
            message = "Description should be between 20 and 200 characters"
        )
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 5, max = 60, message = "Name should be between 5 and 60 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 20,
        max = 200,
        message = "Description should be between 20 and 200 characters"
    ))]
    pub description: Option<String>,
}

impl CreatePlaylistRequest {
    pub fn into_draft(self) -> Result<PlaylistDraft, DomainError> {
        let trimmed = Self {
            name: trim(self.name),
            description: trim(self.description),
        };
        trimmed
            .validate()
            .map_err(|e| into_domain(&e, &["name", "description"]))?;

        match (trimmed.name, trimmed.description) {
            (Some(name), Some(description)) => Ok(PlaylistDraft { name, description }),
            _ => Err(DomainError::validation("Something went wrong")),
        }
    }
}

impl UpdatePlaylistRequest {
    pub fn into_changes(self) -> Result<PlaylistChanges, DomainError> {
        let trimmed = Self {
            name: trim(self.name),
            description: trim(self.description),
        };
        trimmed
            .validate()
            .map_err(|e| into_domain(&e, &["name", "description"]))?;

        if trimmed.name.is_none() && trimmed.description.is_none() {
            return Err(DomainError::validation("Nothing to update"));
        }

        Ok(PlaylistChanges {
            name: trimmed.name,
            description: trimmed.description,
        })
    }
}

fn trim(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Flatten validator output into a message list, ordered by `fields`.
fn into_domain(errors: &ValidationErrors, fields: &[&str]) -> DomainError {
    let by_field = errors.field_errors();
    let messages: Vec<String> = fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect();

    match messages.first() {
        Some(first) => DomainError::Validation {
            message: first.clone(),
            errors: messages,
        },
        None => DomainError::validation("Something went wrong"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_LENGTH: &str = "Name should be between 5 and 60 characters";
    const DESCRIPTION_LENGTH: &str = "Description should be between 20 and 200 characters";

    fn create(name: &str, description: &str) -> CreatePlaylistRequest {
        CreatePlaylistRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn create_trims_and_accepts() {
        let draft = create("  Road trip  ", "  Songs for the long drive north  ")
            .into_draft()
            .unwrap();
        assert_eq!(draft.name, "Road trip");
        assert_eq!(draft.description, "Songs for the long drive north");
    }

    #[test]
    fn create_reports_every_failure_in_field_order() {
        match create("ab", "short").into_draft() {
            Err(DomainError::Validation { message, errors }) => {
                assert_eq!(message, NAME_LENGTH);
                assert_eq!(errors, vec![NAME_LENGTH.to_string(), DESCRIPTION_LENGTH.to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn whitespace_does_not_count_towards_length() {
        assert!(create("  abc     ", "a description that is long enough").into_draft().is_err());
    }

    #[test]
    fn create_requires_both_fields() {
        let req = CreatePlaylistRequest {
            name: Some("Workout mix".to_string()),
            description: None,
        };
        match req.into_draft() {
            Err(DomainError::Validation { message, .. }) => {
                assert_eq!(message, "Description is required")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn update_needs_something_to_change() {
        match UpdatePlaylistRequest::default().into_changes() {
            Err(DomainError::Validation { message, .. }) => assert_eq!(message, "Nothing to update"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn update_validates_only_present_fields() {
        let changes = UpdatePlaylistRequest {
            name: Some(" Renamed list ".to_string()),
            description: None,
        }
        .into_changes()
        .unwrap();
        assert_eq!(changes.name.as_deref(), Some("Renamed list"));
        assert!(changes.description.is_none());

        let too_long = UpdatePlaylistRequest {
            name: None,
            description: Some("x".repeat(201)),
        };
        assert!(too_long.into_changes().is_err());
    }
}
