use crate::error::ValidationError;
use uuid::Uuid;

/// Identifiers end up as IRI fragments, so they are restricted to characters
/// that need no escaping there.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn validate_id(id: &str) -> Result<&str, ValidationError> {
    if is_valid_id(id) {
        Ok(id)
    } else {
        Err(ValidationError::InvalidId(id.to_owned()))
    }
}

/// Derives the identifier of a new entity.
///
/// A caller-supplied `id` wins but must be well formed. Otherwise the name is
/// slugified (spaces become underscores); names that do not slugify into a
/// valid identifier fall back to a random UUID.
pub fn derive_id(explicit: Option<&str>, name: Option<&str>) -> Result<String, ValidationError> {
    if let Some(id) = explicit {
        return validate_id(id).map(str::to_owned);
    }
    if let Some(name) = name {
        let slug = name.trim().replace(' ', "_");
        if is_valid_id(&slug) {
            return Ok(slug);
        }
    }
    Ok(Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_wins_over_name() {
        let id = derive_id(Some("paris-01"), Some("Lyon")).unwrap();
        assert_eq!(id, "paris-01");
    }

    #[test]
    fn bad_explicit_id_is_rejected() {
        assert!(derive_id(Some("a b"), None).is_err());
        assert!(derive_id(Some(""), None).is_err());
        assert!(derive_id(Some("x\"y"), None).is_err());
    }

    #[test]
    fn name_is_slugified() {
        let id = derive_id(None, Some("Mont Saint Michel")).unwrap();
        assert_eq!(id, "Mont_Saint_Michel");
    }

    #[test]
    fn unslugifiable_name_falls_back_to_uuid() {
        let id = derive_id(None, Some("Hôtel de l'Écluse")).unwrap();
        assert!(is_valid_id(&id));
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn missing_name_falls_back_to_uuid() {
        let id = derive_id(None, None).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
