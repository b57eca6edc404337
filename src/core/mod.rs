//! Core processing building blocks: the in-memory raster type, parameters,
//! and the resize/padding/letterbox/sampling primitives. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;
