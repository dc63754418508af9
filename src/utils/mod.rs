//! Shared helpers.
//!
//! - [`id_generator`] - Random session and user identifiers

pub mod id_generator;
