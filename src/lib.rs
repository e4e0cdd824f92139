//! # infogata-utils
//!
//! Small, stateless helpers shared by media plugins.
//!
//! ## Modules
//!
//! - `duration` - Clock-style duration formatting (`MM:SS` / `H:MM:SS`)
//! - `thumbnail` - Picking a thumbnail URL from image renditions
//! - `async_ops` - Concurrent, order-preserving map and filter
//! - `merge` - Merging record lists by string identifier
//! - `config` - Concurrency options for the async helpers
//! - `error` - Error type for the crate's own fallible operations
//! - `testing` - Tracing setup for tests
pub mod async_ops;
pub mod config;
pub mod duration;
pub mod error;
pub mod merge;
pub mod thumbnail;

pub mod testing;

pub use async_ops::{
    filter_async, filter_async_bounded, map_async, map_async_bounded, map_async_with,
};
pub use config::AsyncConfig;
pub use duration::{format_duration, format_seconds};
pub use error::{Error, Result};
pub use merge::{merge_items, Identifiable};
pub use thumbnail::{get_thumbnail_image, parse_images, Image};
