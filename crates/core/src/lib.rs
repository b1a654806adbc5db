//! Vivarium Core - Shared types library.
//!
//! This crate provides common types used across all Vivarium Supply components:
//! - `shipping` - Packing and carrier rate-quoting library
//! - `storefront` - Public-facing shipping API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, physical dimensions, boxes, packages, and quotes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
