use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chirp")]
#[command(author, version, about = "A tiny in-memory GraphQL microblog server")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to .chirp.toml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "CHIRP_PORT")]
        port: Option<u16>,

        /// Start with an empty store instead of the fixture data
        #[arg(long)]
        empty: bool,
    },

    /// Execute a GraphQL query against an in-process schema
    #[command(visible_alias = "q")]
    Query {
        /// The query document, e.g. '{ allTweets { id text } }'
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against an in-process schema
    #[command(visible_alias = "m")]
    Mutate {
        /// The mutation document, without the outer `mutation { }` wrapper
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}
