//! SPARQL text construction.
//!
//! Every query and update the application sends is assembled here, and this
//! is the only place where values meet query text. String literals are
//! rendered through [`oxrdf::Literal`], which performs N-Triples escaping,
//! and subjects are built from identifiers that passed
//! [`sejour_model::validate_id`]. Raw request bytes never reach the query
//! string.

use oxrdf::vocab::xsd;
use oxrdf::Literal;
use sejour_model::{EntitySchema, FieldValue, Record, Vocabulary};
use std::fmt::Write;

const RDF_PREFIX: &str = "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>";
const XSD_PREFIX: &str = "PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>";

/// Optional constraints on a collection listing.
///
/// Each filter only applies when the schema actually carries the matching
/// field; unknown filters are ignored rather than rejected.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_capacity: Option<i64>,
    pub certified: Option<bool>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn prologue(vocabulary: &Vocabulary) -> String {
    format!(
        "{RDF_PREFIX}\n{XSD_PREFIX}\nPREFIX ns1: <{}>\n",
        vocabulary.namespace()
    )
}

fn projection(schema: &EntitySchema) -> String {
    let mut vars = String::from("?entity");
    for field in schema.fields {
        let _ = write!(vars, " ?{}", field.name);
    }
    vars
}

fn pattern_lines(schema: &EntitySchema, out: &mut String) {
    let _ = writeln!(out, "    ?entity rdf:type ns1:{} .", schema.class_name);
    for field in schema.fields {
        if field.required {
            let _ = writeln!(out, "    ?entity ns1:{0} ?{0} .", field.name);
        } else {
            let _ = writeln!(out, "    OPTIONAL {{ ?entity ns1:{0} ?{0} . }}", field.name);
        }
    }
}

/// SELECT over every instance of the entity class, one OPTIONAL clause per
/// nullable attribute.
pub fn select_all(
    vocabulary: &Vocabulary,
    schema: &EntitySchema,
    filters: &ListFilters,
) -> String {
    let mut query = prologue(vocabulary);
    let _ = writeln!(query, "SELECT {}", projection(schema));
    query.push_str("WHERE {\n");
    pattern_lines(schema, &mut query);
    if schema.has_field("prix") {
        if let Some(min) = filters.min_price {
            let _ = writeln!(query, "    FILTER(xsd:decimal(?prix) >= {min})");
        }
        if let Some(max) = filters.max_price {
            let _ = writeln!(query, "    FILTER(xsd:decimal(?prix) <= {max})");
        }
    }
    if schema.has_field("capacite") {
        if let Some(min) = filters.min_capacity {
            let _ = writeln!(query, "    FILTER(xsd:integer(?capacite) >= {min})");
        }
    }
    if schema.has_field("certifie") {
        if let Some(flag) = filters.certified {
            let _ = writeln!(query, "    FILTER(?certifie = {flag})");
        }
    }
    query.push('}');
    if schema.price_ordered {
        query.push_str("\nORDER BY ASC(xsd:decimal(?prix))");
    }
    query
}

/// SELECT scoped to a single subject IRI.
pub fn select_by_id(vocabulary: &Vocabulary, schema: &EntitySchema, id: &str) -> String {
    let mut query = prologue(vocabulary);
    let _ = writeln!(query, "SELECT {}", projection(schema));
    query.push_str("WHERE {\n");
    let _ = writeln!(query, "    BIND({} AS ?entity)", vocabulary.entity_iri(id));
    pattern_lines(schema, &mut query);
    query.push('}');
    query
}

/// INSERT DATA asserting `rdf:type` plus one literal triple per provided
/// field.
pub fn insert_data(
    vocabulary: &Vocabulary,
    schema: &EntitySchema,
    id: &str,
    record: &Record,
) -> String {
    let mut update = prologue(vocabulary);
    update.push_str("INSERT DATA {\n");
    let _ = write!(
        update,
        "    {} rdf:type ns1:{}",
        vocabulary.entity_iri(id),
        schema.class_name
    );
    for field in schema.fields {
        if let Some(value) = record.get(field.name) {
            let _ = write!(update, " ;\n        ns1:{} {}", field.name, literal(value));
        }
    }
    update.push_str(" .\n}");
    update
}

/// DELETE/INSERT pair keyed on the existing `nom` triple.
///
/// Old values of the other properties are matched optionally; values absent
/// from the store are simply not deleted. This keeps the original update
/// semantics, including its lack of isolation between the read and the write.
pub fn replace(
    vocabulary: &Vocabulary,
    schema: &EntitySchema,
    id: &str,
    record: &Record,
) -> String {
    let subject = vocabulary.entity_iri(id).to_string();
    let mut update = prologue(vocabulary);

    update.push_str("DELETE {\n");
    let mut first = true;
    for field in schema.fields {
        let lead = if first { format!("    {subject} ") } else { " ;\n        ".to_owned() };
        let _ = write!(update, "{lead}ns1:{0} ?old_{0}", field.name);
        first = false;
    }
    update.push_str(" .\n}\n");

    update.push_str("INSERT {\n");
    let mut first = true;
    for field in schema.fields {
        if let Some(value) = record.get(field.name) {
            let lead = if first { format!("    {subject} ") } else { " ;\n        ".to_owned() };
            let _ = write!(update, "{lead}ns1:{} {}", field.name, literal(value));
            first = false;
        }
    }
    update.push_str(" .\n}\n");

    update.push_str("WHERE {\n");
    for field in schema.fields {
        if field.required {
            let _ = writeln!(update, "    {subject} ns1:{0} ?old_{0} .", field.name);
        } else {
            let _ = writeln!(
                update,
                "    OPTIONAL {{ {subject} ns1:{0} ?old_{0} . }}",
                field.name
            );
        }
    }
    update.push('}');
    update
}

/// Removes every triple with the entity as subject. Matching zero triples is
/// not an error, which makes deletion idempotent.
pub fn delete_all(vocabulary: &Vocabulary, id: &str) -> String {
    let mut update = prologue(vocabulary);
    let _ = write!(
        update,
        "DELETE WHERE {{\n    {} ?p ?o .\n}}",
        vocabulary.entity_iri(id)
    );
    update
}

fn literal(value: &FieldValue) -> Literal {
    match value {
        FieldValue::Str(s) => Literal::new_simple_literal(s.as_str()),
        FieldValue::Decimal(v) => Literal::new_typed_literal(format!("{v}"), xsd::DECIMAL),
        FieldValue::Integer(v) => Literal::new_typed_literal(v.to_string(), xsd::INTEGER),
        FieldValue::Boolean(b) => Literal::new_typed_literal(b.to_string(), xsd::BOOLEAN),
        FieldValue::DateTime(s) => Literal::new_typed_literal(s.as_str(), xsd::DATE_TIME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sejour_model::schema;
    use serde_json::json;

    fn vocab() -> Vocabulary {
        Vocabulary::default()
    }

    #[test]
    fn select_all_has_optional_clauses_for_nullable_fields() {
        let query = select_all(&vocab(), &schema::USER, &ListFilters::default());
        assert!(query.contains("?entity rdf:type ns1:User ."));
        assert!(query.contains("?entity ns1:nom ?nom ."));
        assert!(query.contains("OPTIONAL { ?entity ns1:age ?age . }"));
        assert!(!query.contains("ORDER BY"));
    }

    #[test]
    fn hebergement_listing_is_price_ordered() {
        let query = select_all(&vocab(), &schema::HEBERGEMENT, &ListFilters::default());
        assert!(query.ends_with("ORDER BY ASC(xsd:decimal(?prix))"));
    }

    #[test]
    fn filters_become_filter_clauses() {
        let filters = ListFilters {
            min_price: Some(10.0),
            max_price: Some(99.5),
            min_capacity: Some(4),
            certified: Some(true),
        };
        let query = select_all(&vocab(), &schema::HEBERGEMENT, &filters);
        assert!(query.contains("FILTER(xsd:decimal(?prix) >= 10)"));
        assert!(query.contains("FILTER(xsd:decimal(?prix) <= 99.5)"));
        assert!(query.contains("FILTER(xsd:integer(?capacite) >= 4)"));
        assert!(query.contains("FILTER(?certifie = true)"));
    }

    #[test]
    fn filters_without_matching_fields_are_ignored() {
        let filters = ListFilters {
            min_price: Some(10.0),
            ..ListFilters::default()
        };
        let query = select_all(&vocab(), &schema::USER, &filters);
        assert!(!query.contains("FILTER"));
    }

    #[test]
    fn insert_escapes_embedded_quotes() {
        let record = Record::from_json(
            &schema::DESTINATION,
            &json!({"nom": "La \"Perle\"", "localisation": "Côte d'Azur"}),
        )
        .unwrap();
        let update = insert_data(&vocab(), &schema::DESTINATION, "La_Perle", &record);
        assert!(update.contains(r#"ns1:nom "La \"Perle\"""#));
        assert!(!update.contains("\"La \"Perle\"\""));
    }

    #[test]
    fn insert_escapes_newlines_and_backslashes() {
        let record = Record::from_json(
            &schema::DESTINATION,
            &json!({"nom": "X", "localisation": "a\\b\nc"}),
        )
        .unwrap();
        let update = insert_data(&vocab(), &schema::DESTINATION, "X", &record);
        assert!(update.contains(r#""a\\b\nc""#));
    }

    #[test]
    fn insert_only_asserts_provided_fields() {
        let record = Record::from_json(&schema::HEBERGEMENT, &json!({"nom": "Gîte"})).unwrap();
        let update = insert_data(&vocab(), &schema::HEBERGEMENT, "Gite", &record);
        assert!(update.contains("rdf:type ns1:Hébergement"));
        assert!(update.contains("ns1:nom"));
        assert!(!update.contains("ns1:prix"));
    }

    #[test]
    fn insert_types_numeric_literals() {
        let record = Record::from_json(
            &schema::HEBERGEMENT,
            &json!({"nom": "Gîte", "prix": 75.5, "capacite": "4", "certifie": true}),
        )
        .unwrap();
        let update = insert_data(&vocab(), &schema::HEBERGEMENT, "Gite", &record);
        assert!(update.contains(r#""75.5"^^<http://www.w3.org/2001/XMLSchema#decimal>"#));
        assert!(update.contains(r#""4"^^<http://www.w3.org/2001/XMLSchema#integer>"#));
        assert!(update.contains(r#""true"^^<http://www.w3.org/2001/XMLSchema#boolean>"#));
    }

    #[test]
    fn replace_matches_old_name_and_optional_old_values() {
        let record = Record::from_json(&schema::USER, &json!({"nom": "Alice", "age": 31})).unwrap();
        let update = replace(&vocab(), &schema::USER, "Alice", &record);
        let subject = "<http://www.semanticweb.org/user/ontologies/2025/9/novagrptourisme#Alice>";
        assert!(update.contains(&format!("{subject} ns1:nom ?old_nom .")));
        assert!(update.contains(&format!("OPTIONAL {{ {subject} ns1:age ?old_age . }}")));
        assert!(update.contains("ns1:age ?old_age"));
        assert!(update.contains(r#""31"^^<http://www.w3.org/2001/XMLSchema#integer>"#));
    }

    #[test]
    fn delete_removes_all_subject_triples() {
        let update = delete_all(&vocab(), "Alice");
        assert!(update.contains(
            "DELETE WHERE {\n    <http://www.semanticweb.org/user/ontologies/2025/9/novagrptourisme#Alice> ?p ?o .\n}"
        ));
    }
}
