//! Data models for chirp.
//!
//! This module defines the core data structures:
//!
//! - [`Tweet`]: A short text post
//! - [`User`]: The author a tweet may reference

mod tweet;
mod user;

pub use tweet::Tweet;
pub use user::User;
