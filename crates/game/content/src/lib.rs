//! Data-driven encounter content and loaders.
//!
//! This crate reads the files an encounter is bootstrapped from:
//! - Map layouts (`map.json`, the `{ width, height, grid }` layout)
//! - Character and monster sheets (`sheets.json`)
//! - Rule tuning (`config.toml`, optional)
//!
//! All loaders deserialize straight into game-core types.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapLoader, SheetsLoader};
