use clap::{Parser, Subcommand, ValueHint};
use sejour_model::DEFAULT_NAMESPACE;

#[derive(Parser)]
#[command(about, version, name = "sejour")]
/// Sejour tourism backend command line tool and HTTP server
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Sejour HTTP API backed by a remote SPARQL store
    Serve {
        /// Host and port to listen to
        #[arg(
            short,
            long,
            default_value = "127.0.0.1:8000",
            env = "SEJOUR_BIND",
            value_hint = ValueHint::Hostname
        )]
        bind: String,
        /// SPARQL 1.1 query endpoint of the triple store
        #[arg(
            long,
            default_value = "http://localhost:3030/novagrptourisme/query",
            env = "SEJOUR_QUERY_URL",
            value_hint = ValueHint::Url
        )]
        query_url: String,
        /// SPARQL 1.1 update endpoint of the triple store
        #[arg(
            long,
            default_value = "http://localhost:3030/novagrptourisme/update",
            env = "SEJOUR_UPDATE_URL",
            value_hint = ValueHint::Url
        )]
        update_url: String,
        /// Ontology namespace entities are minted under
        ///
        /// Must end with '#' so that identifiers land in the IRI fragment.
        #[arg(
            long,
            default_value = DEFAULT_NAMESPACE,
            env = "SEJOUR_NAMESPACE",
            value_hint = ValueHint::Url
        )]
        namespace: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
}
