use axum::routing::get;
use axum::Router;
use sejour_model::schema;
use sejour_model::{EntitySchema, Vocabulary};
use sejour_store::{EntityRepository, SparqlEndpoint};
use std::sync::Arc;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::ServerError;

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let cors = config.cors;
    let bind = config.bind.clone();
    let state = AppState::new(config.endpoint, config.vocabulary);

    let app = router(state);
    let app = if cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("listening on {bind}");
    Ok(axum::serve(listener, app).await?)
}

/// Assembles the `/api` router: one CRUD route family per entity schema plus
/// the health probe.
pub fn router(state: AppState) -> Router {
    let mut api = Router::new().route("/health", get(routes::health));
    for schema in schema::ENTITIES {
        api = api.merge(routes::entity_router(schema));
    }
    Router::new().nest("/api", api).with_state(state)
}

/// Shared state of the request handlers.
///
/// The store client is an injected trait object so that tests run against a
/// scripted endpoint and deployments can point anywhere.
#[derive(Clone)]
pub struct AppState {
    endpoint: Arc<dyn SparqlEndpoint>,
    vocabulary: Arc<Vocabulary>,
}

impl AppState {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>, vocabulary: Vocabulary) -> Self {
        Self {
            endpoint,
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub(crate) fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub(crate) fn repository(&self, schema: &'static EntitySchema) -> EntityRepository<'_> {
        EntityRepository::new(self.endpoint.as_ref(), &self.vocabulary, schema)
    }
}
