use sejour_model::Vocabulary;
use sejour_store::SparqlEndpoint;
use std::sync::Arc;

/// Holds the configuration for a Sejour web server.
pub struct ServerConfig {
    /// The store client the handlers talk to.
    pub endpoint: Arc<dyn SparqlEndpoint>,
    /// The ontology namespace entities live under.
    pub vocabulary: Vocabulary,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
}
