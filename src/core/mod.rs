//! Core components of the `goldwire` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`GwClient`] and its builder.
//! - The primary [`GwError`] type.
//! - Internal networking and fixture-recording logic.

/// The main client (`GwClient`), builder, and configuration.
pub mod client;
/// The primary error type (`GwError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::GwClient`
pub use client::{GEMINI_API_KEY_VAR, GwClient, GwClientBuilder, NEWS_API_KEY_VAR};
pub use error::GwError;
