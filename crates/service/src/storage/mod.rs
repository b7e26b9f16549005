//! Storage primitives for the service layer.

pub mod json_map_store;
