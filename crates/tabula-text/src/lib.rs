#![forbid(unsafe_code)]

//! Text measurement for tabula.
//!
//! This crate provides:
//! - [`FontStyle`] - weight, size and family of a table's single font
//! - [`TextMeasurer`] - the measurement contract layout depends on
//! - [`MonospaceMeasurer`] - a deterministic fixed-advance measurer
//! - [`CachedMeasurer`] - an LRU cache in front of any measurer
//!
//! # Example
//! ```
//! use tabula_text::{FontStyle, MonospaceMeasurer, TextMeasurer};
//!
//! let measurer = MonospaceMeasurer::new().advance_ratio(0.5);
//! let font = FontStyle::default().size(10.0);
//!
//! assert_eq!(measurer.measure("Alice", &font).width, 25.0);
//! assert_eq!(measurer.measure("Bob", &font).width, 15.0);
//! ```

pub mod cache;
pub mod font;
pub mod measure;
pub mod monospace;

pub use cache::{CacheStats, CachedMeasurer, DEFAULT_CACHE_CAPACITY};
pub use font::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FontStyle, FontWeight};
pub use measure::{FontExtents, TextExtents, TextMeasurer};
pub use monospace::MonospaceMeasurer;
