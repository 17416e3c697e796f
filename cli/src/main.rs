use crate::cli::{Args, Command};
use clap::Parser;
use sejour_model::Vocabulary;
use sejour_store::HttpSparqlEndpoint;
use sejour_web::ServerConfig;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Serve {
            bind,
            query_url,
            update_url,
            namespace,
            cors,
        } => {
            let vocabulary = Vocabulary::new(namespace)?;
            let endpoint = HttpSparqlEndpoint::new(query_url, update_url)?;
            let config = ServerConfig {
                endpoint: Arc::new(endpoint),
                vocabulary,
                bind,
                cors,
            };
            sejour_web::serve(config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
