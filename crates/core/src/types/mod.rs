//! Core types for Vivarium Supply.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod dimensions;
pub mod id;
pub mod item;
pub mod package;
pub mod product;
pub mod quote;
pub mod shipping_box;

pub use address::Address;
pub use dimensions::Dimensions;
pub use id::*;
pub use item::Item;
pub use package::{PackageDescriptor, PackageSummary, SummaryDimensions};
pub use product::ProductRecord;
pub use quote::{QuoteTag, ShippingQuote};
pub use shipping_box::ShippingBox;
