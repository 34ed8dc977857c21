//! # Chirp - A tiny in-memory GraphQL microblog server
//!
//! Chirp exposes a small social-media data set (users and short text posts)
//! through a typed GraphQL API. Tweets live in an in-memory store for the
//! lifetime of the process; there is no persistence.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the GraphQL server with the seeded fixture data
//! chirp serve --port 4000
//!
//! # Execute a query from the CLI, no server needed
//! chirp query '{ allTweets { id text } }'
//!
//! # Post a tweet
//! chirp mutate 'postTweet(text: "Hi", userId: "1") { id }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Tweet, User)
//! - [`store`]: The in-memory tweet store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.chirp.toml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ChirpError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
///
/// Provides the async-graphql schema and the axum transport.
pub mod graphql;

/// Data models.
///
/// Includes `Tweet` and `User`.
pub mod model;

/// The in-memory store backing the resolvers.
pub mod store;

pub mod logging;
