//! ForgetIt Core Library
//!
//! Managed-forgetting engine: relevance and preservation scoring, decay and
//! access dynamics, progressive condensation, and the resource store.

pub mod condensation;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod format;
pub mod logging;
pub mod metrics;
pub mod resource;
pub mod store;
pub mod text;
