use crate::client::SparqlEndpoint;
use crate::error::StoreError;
use crate::mapper::{row_from_solution, EntityRow};
use crate::sparql::{self, ListFilters};
use sejour_model::{EntitySchema, Record, Vocabulary};

/// Schema-driven data access for one entity family.
///
/// All seven entity families go through this one implementation; the schema
/// carries everything that differs between them.
pub struct EntityRepository<'a> {
    endpoint: &'a dyn SparqlEndpoint,
    vocabulary: &'a Vocabulary,
    schema: &'static EntitySchema,
}

impl<'a> EntityRepository<'a> {
    pub fn new(
        endpoint: &'a dyn SparqlEndpoint,
        vocabulary: &'a Vocabulary,
        schema: &'static EntitySchema,
    ) -> Self {
        Self {
            endpoint,
            vocabulary,
            schema,
        }
    }

    pub async fn list(&self, filters: &ListFilters) -> Result<Vec<EntityRow>, StoreError> {
        let query = sparql::select_all(self.vocabulary, self.schema, filters);
        let solutions = self.endpoint.select(&query).await?;
        Ok(solutions
            .iter()
            .filter_map(|s| row_from_solution(self.vocabulary, self.schema, s))
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<EntityRow>, StoreError> {
        let query = sparql::select_by_id(self.vocabulary, self.schema, id);
        let solutions = self.endpoint.select(&query).await?;
        Ok(solutions
            .iter()
            .find_map(|s| row_from_solution(self.vocabulary, self.schema, s)))
    }

    /// Asserts all triples of a new entity in one INSERT DATA.
    pub async fn create(&self, id: &str, record: &Record) -> Result<(), StoreError> {
        let update = sparql::insert_data(self.vocabulary, self.schema, id, record);
        self.endpoint.update(&update).await
    }

    /// Replaces the entity's properties with a DELETE/INSERT pair keyed on
    /// the existing name triple. The subject IRI never changes.
    pub async fn replace(&self, id: &str, record: &Record) -> Result<(), StoreError> {
        let update = sparql::replace(self.vocabulary, self.schema, id, record);
        self.endpoint.update(&update).await
    }

    /// Removes the entity entirely. Idempotent.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let update = sparql::delete_all(self.vocabulary, id);
        self.endpoint.update(&update).await
    }
}
