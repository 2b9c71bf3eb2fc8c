//! Configuration module for the sprite565 build system
//!
//! Provides types and parsing for `sprites.toml` project manifests.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
