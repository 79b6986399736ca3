//! Data Transfer Objects for API responses.
//!
//! Pricing requests and results are served directly from the domain types in
//! `syndicate_pricing`; only the envelope types live here.

pub mod common;

pub use common::*;
