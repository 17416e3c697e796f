use oxrdf::Term;
use sejour_model::{EntitySchema, FieldValue, Record, Vocabulary};
use serde_json::{Map, Value as Json};
use sparesults::QuerySolution;

/// One entity as read back from the store: its identity plus the flattened
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    pub id: String,
    pub uri: String,
    pub record: Record,
}

impl EntityRow {
    /// JSON shape of the row: `id`, `uri`, then every schema field with the
    /// documented default substituted when absent.
    pub fn to_json(&self, schema: &EntitySchema) -> Json {
        let mut object = Map::new();
        object.insert("id".to_owned(), Json::String(self.id.clone()));
        object.insert("uri".to_owned(), Json::String(self.uri.clone()));
        if let Json::Object(fields) = self.record.to_json(schema) {
            object.extend(fields);
        }
        Json::Object(object)
    }
}

/// Flattens one SPARQL solution into an [`EntityRow`].
///
/// Rows without a usable subject are dropped. A literal whose lexical form
/// does not decode as the field's datatype is treated like an absent value,
/// which surfaces as the field default, the behavior the API always had.
pub fn row_from_solution(
    vocabulary: &Vocabulary,
    schema: &'static EntitySchema,
    solution: &QuerySolution,
) -> Option<EntityRow> {
    let Some(Term::NamedNode(subject)) = solution.get("entity") else {
        return None;
    };
    let uri = subject.as_str().to_owned();
    let id = vocabulary.fragment(&uri).to_owned();

    let mut record = Record::new();
    for field in schema.fields {
        let Some(Term::Literal(literal)) = solution.get(field.name) else {
            continue;
        };
        match FieldValue::from_lexical(field.kind, literal.value()) {
            Ok(value) => record.insert(field.name, value),
            Err(error) => {
                tracing::debug!(
                    entity = schema.class_name,
                    field = field.name,
                    %error,
                    "dropping undecodable literal"
                );
            }
        }
    }
    Some(EntityRow { id, uri, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sejour_model::schema;
    use sparesults::{QueryResultsFormat, QueryResultsParser, ReaderQueryResultsParserOutput};

    fn solutions(json: &str) -> Vec<QuerySolution> {
        let parser = QueryResultsParser::from_format(QueryResultsFormat::Json);
        match parser.for_reader(json.as_bytes()).unwrap() {
            ReaderQueryResultsParserOutput::Solutions(s) => {
                s.collect::<Result<Vec<_>, _>>().unwrap()
            }
            ReaderQueryResultsParserOutput::Boolean(_) => panic!("expected solutions"),
        }
    }

    #[test]
    fn binding_row_flattens_to_record() {
        let rows = solutions(
            r#"{
              "head": {"vars": ["entity", "nom", "prix", "capacite"]},
              "results": {"bindings": [{
                "entity": {"type": "uri", "value": "http://www.semanticweb.org/user/ontologies/2025/9/novagrptourisme#Gite_Bleu"},
                "nom": {"type": "literal", "value": "Gîte Bleu"},
                "prix": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "value": "75.5"},
                "capacite": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer", "value": "500.0"}
              }]}
            }"#,
        );
        let vocabulary = Vocabulary::default();
        let row = row_from_solution(&vocabulary, &schema::HEBERGEMENT, &rows[0]).unwrap();
        assert_eq!(row.id, "Gite_Bleu");
        assert_eq!(row.record.get("prix"), Some(&FieldValue::Decimal(75.5)));
        assert_eq!(row.record.get("capacite"), Some(&FieldValue::Integer(500)));

        let json = row.to_json(&schema::HEBERGEMENT);
        assert_eq!(json["id"], "Gite_Bleu");
        assert_eq!(json["nom"], "Gîte Bleu");
        assert_eq!(json["note"], 0.0);
        assert_eq!(json["certifie"], false);
    }

    #[test]
    fn rows_without_subject_are_dropped() {
        let rows = solutions(
            r#"{
              "head": {"vars": ["entity", "nom"]},
              "results": {"bindings": [{
                "nom": {"type": "literal", "value": "orphan"}
              }]}
            }"#,
        );
        let vocabulary = Vocabulary::default();
        assert!(row_from_solution(&vocabulary, &schema::USER, &rows[0]).is_none());
    }

    #[test]
    fn undecodable_literal_falls_back_to_default() {
        let rows = solutions(
            r#"{
              "head": {"vars": ["entity", "nom", "age"]},
              "results": {"bindings": [{
                "entity": {"type": "uri", "value": "http://www.semanticweb.org/user/ontologies/2025/9/novagrptourisme#Alice"},
                "nom": {"type": "literal", "value": "Alice"},
                "age": {"type": "literal", "value": "quarante"}
              }]}
            }"#,
        );
        let vocabulary = Vocabulary::default();
        let row = row_from_solution(&vocabulary, &schema::USER, &rows[0]).unwrap();
        assert_eq!(row.record.get("age"), None);
        assert_eq!(row.to_json(&schema::USER)["age"], 0);
    }
}
