use crate::error::ValidationError;
use crate::schema::EntitySchema;
use crate::value::FieldValue;
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

/// A flat, schema-validated set of field values for one entity.
///
/// This is the shape that travels between the HTTP layer and the store
/// layer: JSON objects decode into it on the way in, SPARQL bindings map
/// into it on the way out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON request body against a schema.
    ///
    /// Required fields must be present; optional fields may be absent.
    /// Unknown keys are ignored, as the original API did. JSON `null` counts
    /// as absent.
    pub fn from_json(schema: &'static EntitySchema, body: &Json) -> Result<Self, ValidationError> {
        let Json::Object(object) = body else {
            return Err(ValidationError::ExpectedObject);
        };
        let mut values = BTreeMap::new();
        for field in schema.fields {
            match object.get(field.name) {
                None | Some(Json::Null) => {
                    if field.required {
                        return Err(ValidationError::MissingField(field.name));
                    }
                }
                Some(value) => {
                    values.insert(
                        field.name,
                        FieldValue::from_json(field.kind, field.name, value)?,
                    );
                }
            }
        }
        Ok(Self { values })
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// The entity name, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get("nom").and_then(FieldValue::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serializes the record with the documented default substituted for
    /// every absent optional field.
    pub fn to_json(&self, schema: &EntitySchema) -> Json {
        let mut object = Map::new();
        for field in schema.fields {
            let value = self
                .values
                .get(field.name)
                .map_or_else(|| field.kind.default_json(), FieldValue::to_json);
            object.insert(field.name.to_owned(), value);
        }
        Json::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    #[test]
    fn missing_name_is_rejected() {
        let err = Record::from_json(&schema::DESTINATION, &json!({"localisation": "France"}));
        assert!(matches!(err, Err(ValidationError::MissingField("nom"))));
    }

    #[test]
    fn null_counts_as_absent() {
        let err = Record::from_json(&schema::DESTINATION, &json!({"nom": null}));
        assert!(matches!(err, Err(ValidationError::MissingField("nom"))));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = Record::from_json(&schema::USER, &json!([1, 2]));
        assert!(matches!(err, Err(ValidationError::ExpectedObject)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record =
            Record::from_json(&schema::USER, &json!({"nom": "Alice", "couleur": "bleu"})).unwrap();
        assert_eq!(record.name(), Some("Alice"));
        assert!(record.get("couleur").is_none());
    }

    #[test]
    fn absent_optionals_serialize_as_defaults() {
        let record = Record::from_json(&schema::HEBERGEMENT, &json!({"nom": "Gîte"})).unwrap();
        let out = record.to_json(&schema::HEBERGEMENT);
        assert_eq!(out["nom"], json!("Gîte"));
        assert_eq!(out["prix"], json!(0.0));
        assert_eq!(out["capacite"], json!(0));
        assert_eq!(out["certifie"], json!(false));
        assert_eq!(out["description"], json!(""));
    }

    #[test]
    fn price_round_trips_as_decimal() {
        let record =
            Record::from_json(&schema::HEBERGEMENT, &json!({"nom": "Gîte", "prix": "12"})).unwrap();
        assert_eq!(record.to_json(&schema::HEBERGEMENT)["prix"], json!(12.0));
    }
}
