//! GraphQL schema, resolvers and HTTP server for chirp.
//!
//! The schema declares the full typed surface of the API; async-graphql
//! rejects any operation document that does not match it (wrong argument
//! types, missing required arguments) before a resolver runs.
//!
//! ## Schema
//!
//! - **Queries**: `allTweets`, `tweet`, `allUsers`
//! - **Mutations**: `postTweet`, `deleteTweet`
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! chirp serve --port 4000
//!
//! # Execute a query from the CLI
//! chirp query '{ allTweets { id text author { username } } }'
//!
//! # Execute a mutation from the CLI
//! chirp mutate 'postTweet(text: "Hi", userId: "1") { id text }'
//! ```

mod schema;
mod server;
mod types;

pub use schema::{ChirpSchema, build_schema};
pub use server::run_server;
pub use types::*;
