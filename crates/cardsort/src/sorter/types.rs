//! Core types for the sorter engine
//!
//! Everything here is transient: computed per file while it is being
//! classified, then discarded once the file has been routed.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Category assigned to character cards whose sex is encoded separately
/// in the metadata rather than in the marker itself.
pub const CATEGORY_CHARA: &str = "chara";

/// Category a "chara" card is remapped to when the sex sentinel is 0x00.
pub const CATEGORY_MALE: &str = "male";

/// Category a "chara" card is remapped to when the sex sentinel is 0x01.
pub const CATEGORY_FEMALE: &str = "female";

/// What a marker occurrence means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPayload {
    /// A product marker identifying the game and card category
    Product {
        product: &'static str,
        category: &'static str,
    },
    /// The sex marker; the byte immediately after it encodes male/female
    Sex,
}

/// One marker occurrence in a scanned buffer
///
/// `end` is the offset one past the last byte of the match. Events are
/// produced in ascending `end` order; the relative order of events sharing
/// an `end` offset is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub end: usize,
    pub payload: MatchPayload,
}

/// Final classification of a card file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub product: &'static str,
    pub category: &'static str,
}

impl Classification {
    /// Destination subdirectory relative to the output root
    pub fn subpath(&self) -> PathBuf {
        Path::new(self.product).join(self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subpath_joins_product_and_category() {
        let classification = Classification {
            product: "KK",
            category: "chara",
        };
        assert_eq!(classification.subpath(), Path::new("KK").join("chara"));
    }
}
