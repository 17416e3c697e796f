use crate::error::StoreError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use sparesults::{
    QueryResultsFormat, QueryResultsParser, QuerySolution, ReaderQueryResultsParserOutput,
};
use std::time::Duration;

/// Timeout applied to every round trip to the store.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// The seam between the application and the triple store.
///
/// Implemented over HTTP by [`HttpSparqlEndpoint`]; tests substitute scripted
/// doubles. Always injected, never a global.
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    /// Evaluates a SELECT query and returns its solutions.
    async fn select(&self, query: &str) -> Result<Vec<QuerySolution>, StoreError>;

    /// Executes a SPARQL update.
    async fn update(&self, update: &str) -> Result<(), StoreError>;
}

/// SPARQL 1.1 protocol client for a remote store such as Apache Jena Fuseki.
///
/// Queries are POSTed to the query endpoint as `application/sparql-query`
/// asking for JSON bindings; updates are POSTed to the update endpoint as
/// `application/sparql-update`.
pub struct HttpSparqlEndpoint {
    http: reqwest::Client,
    query_url: String,
    update_url: String,
}

impl HttpSparqlEndpoint {
    pub fn new(
        query_url: impl Into<String>,
        update_url: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            http,
            query_url: query_url.into(),
            update_url: update_url.into(),
        })
    }
}

#[async_trait]
impl SparqlEndpoint for HttpSparqlEndpoint {
    async fn select(&self, query: &str) -> Result<Vec<QuerySolution>, StoreError> {
        tracing::debug!(url = %self.query_url, %query, "sending SELECT");
        let response = self
            .http
            .post(&self.query_url)
            .header(CONTENT_TYPE, "application/sparql-query")
            .header(ACCEPT, "application/sparql-results+json")
            .body(query.to_owned())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Endpoint {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.bytes().await?;
        let parser = QueryResultsParser::from_format(QueryResultsFormat::Json);
        match parser.for_reader(body.as_ref())? {
            ReaderQueryResultsParserOutput::Solutions(solutions) => {
                let rows = solutions.collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(rows = rows.len(), "SELECT returned");
                Ok(rows)
            }
            ReaderQueryResultsParserOutput::Boolean(_) => Err(StoreError::UnexpectedResultKind),
        }
    }

    async fn update(&self, update: &str) -> Result<(), StoreError> {
        tracing::debug!(url = %self.update_url, %update, "sending update");
        let response = self
            .http
            .post(&self.update_url)
            .header(CONTENT_TYPE, "application/sparql-update")
            .body(update.to_owned())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Endpoint {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
