//! Classification of scanned marker streams
//!
//! Reduces the ordered match events for one file to a final
//! (product, category) pair. Product markers are last-match-wins: a card
//! may embed several (e.g. a base marker and a more specific variant) and
//! the last one in the file is authoritative. The sex flag is
//! first-match-wins: it appears once, early, and later occurrences are
//! noise.

use super::error::Result;
use super::matcher::MarkerScanner;
use super::registry::Registry;
use super::types::{
    Classification, MatchEvent, MatchPayload, CATEGORY_CHARA, CATEGORY_FEMALE, CATEGORY_MALE,
};

/// Sentinel byte written immediately after the sex marker for male cards.
const SEX_MALE: u8 = 0x00;

/// Sentinel byte written immediately after the sex marker for female cards.
const SEX_FEMALE: u8 = 0x01;

/// Matcher + reduction pipeline for classifying card files
pub struct Classifier {
    scanner: MarkerScanner,
}

impl Classifier {
    pub fn new(registry: &Registry) -> Result<Self> {
        Ok(Self {
            scanner: MarkerScanner::new(registry)?,
        })
    }

    /// Classify one file's raw bytes.
    ///
    /// Returns `None` when the buffer has no terminator or no product
    /// marker occurs in the searchable region. Pure: the same buffer
    /// always yields the same result.
    pub fn classify(&self, data: &[u8]) -> Option<Classification> {
        reduce(data, self.scanner.scan(data))
    }
}

/// Fold the ordered match stream into a classification.
///
/// `data` is the full buffer the events were scanned from; the sex
/// sentinel is the byte immediately after the sex marker, which may sit
/// past the end of the searchable region.
fn reduce(data: &[u8], events: Vec<MatchEvent>) -> Option<Classification> {
    let mut result: Option<Classification> = None;
    let mut sex: Option<u8> = None;

    for event in events {
        match event.payload {
            MatchPayload::Product { product, category } => {
                result = Some(Classification { product, category });
            }
            MatchPayload::Sex => {
                if sex.is_none() {
                    if let Some(&byte) = data.get(event.end) {
                        if byte == SEX_MALE || byte == SEX_FEMALE {
                            sex = Some(byte);
                        }
                    }
                }
            }
        }
    }

    let mut classification = result?;
    if classification.category == CATEGORY_CHARA {
        match sex {
            Some(SEX_MALE) => classification.category = CATEGORY_MALE,
            Some(SEX_FEMALE) => classification.category = CATEGORY_FEMALE,
            _ => {}
        }
    }
    Some(classification)
}
