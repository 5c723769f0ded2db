//! Sorter - Card Classification & Routing Engine
//!
//! Scans the raw bytes of a card file for vendor marker sequences, reduces
//! the match stream to a product/category classification, and picks
//! collision-free destination names. File discovery and moving live in the
//! CLI layer.

pub mod classifier;
pub mod error;
pub mod matcher;
pub mod namer;
pub mod registry;
pub mod types;

// Re-exports for CLI usage
pub use classifier::Classifier;
pub use error::{Result, SortError};
pub use matcher::MarkerScanner;
pub use namer::resolve_destination_name;
pub use registry::{MarkerEntry, Registry};
pub use types::{Classification, MatchEvent, MatchPayload};
