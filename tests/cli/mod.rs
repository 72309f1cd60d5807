mod engine;
mod errors;
mod listing;
mod resources;
pub mod support;
