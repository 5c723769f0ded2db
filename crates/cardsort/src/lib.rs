//! Cardsort - Core Library
//!
//! Shared functionality for the cardsort binary.

pub mod logging;
pub mod sorter;

pub use sorter::{Classification, Classifier, Registry};
