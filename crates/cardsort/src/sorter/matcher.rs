//! Multi-pattern marker scanner
//!
//! One Aho-Corasick automaton over every registered marker plus the sex
//! marker, so a buffer is scanned in a single left-to-right pass no matter
//! how many markers are registered. Scanning is bounded by the first
//! occurrence of the terminator: only matches ending at or before it are
//! reported, and a buffer without the terminator has no searchable region
//! at all.

use super::error::{Result, SortError};
use super::registry::Registry;
use super::types::{MatchEvent, MatchPayload};
use aho_corasick::AhoCorasick;
use memchr::memmem;

/// Compiled marker automaton
pub struct MarkerScanner {
    automaton: AhoCorasick,
    payloads: Vec<MatchPayload>,
    terminator: memmem::Finder<'static>,
}

impl MarkerScanner {
    /// Compile the registry's markers into a single automaton.
    pub fn new(registry: &Registry) -> Result<Self> {
        let mut patterns: Vec<&[u8]> = Vec::with_capacity(registry.entries().len() + 1);
        let mut payloads = Vec::with_capacity(registry.entries().len() + 1);

        for entry in registry.entries() {
            patterns.push(entry.marker);
            payloads.push(MatchPayload::Product {
                product: entry.product,
                category: entry.category,
            });
        }
        patterns.push(Registry::SEX_MARKER);
        payloads.push(MatchPayload::Sex);

        let automaton = AhoCorasick::new(&patterns)
            .map_err(|e| SortError::Registry(format!("failed to build marker automaton: {}", e)))?;

        Ok(Self {
            automaton,
            payloads,
            terminator: memmem::Finder::new(Registry::TERMINATOR),
        })
    }

    /// Every marker occurrence ending at or before the first terminator,
    /// in ascending end-offset order. Overlapping occurrences are all
    /// reported. Empty when the terminator is absent.
    pub fn scan(&self, data: &[u8]) -> Vec<MatchEvent> {
        let Some(terminator_at) = self.terminator.find(data) else {
            return Vec::new();
        };

        self.automaton
            .find_overlapping_iter(&data[..terminator_at])
            .map(|m| MatchEvent {
                end: m.end(),
                payload: self.payloads[m.pattern().as_usize()],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::registry::MarkerEntry;

    fn test_registry() -> Registry {
        Registry::new(vec![
            MarkerEntry {
                product: "X",
                category: "one",
                marker: b"ab",
            },
            MarkerEntry {
                product: "Y",
                category: "two",
                marker: b"ba",
            },
        ])
        .expect("test registry")
    }

    #[test]
    fn no_terminator_yields_no_events() {
        let scanner = MarkerScanner::new(&test_registry()).unwrap();
        assert!(scanner.scan(b"abab no end marker here").is_empty());
    }

    #[test]
    fn events_are_ordered_and_overlapping() {
        let scanner = MarkerScanner::new(&test_registry()).unwrap();
        // "aba" contains "ab" ending at 2 and "ba" ending at 3
        let events = scanner.scan(b"abaIEND");
        let ends: Vec<usize> = events.iter().map(|e| e.end).collect();
        assert_eq!(ends, vec![2, 3]);
        assert_eq!(
            events[0].payload,
            MatchPayload::Product {
                product: "X",
                category: "one"
            }
        );
        assert_eq!(
            events[1].payload,
            MatchPayload::Product {
                product: "Y",
                category: "two"
            }
        );
    }

    #[test]
    fn matches_past_the_terminator_are_dropped() {
        let scanner = MarkerScanner::new(&test_registry()).unwrap();
        let events = scanner.scan(b"abIENDba");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].end, 2);
    }

    #[test]
    fn match_ending_where_terminator_starts_is_kept() {
        let scanner = MarkerScanner::new(&test_registry()).unwrap();
        let events = scanner.scan(b"xabIEND");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].end, 3);
    }

    #[test]
    fn sex_marker_is_reported() {
        let scanner = MarkerScanner::new(&test_registry()).unwrap();
        let events = scanner.scan(b"sex\x01IEND");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload, MatchPayload::Sex);
        assert_eq!(events[0].end, 3);
    }

    #[test]
    fn scan_preserves_raw_byte_values() {
        let registry = Registry::new(vec![MarkerEntry {
            product: "AA2",
            category: "studio",
            marker: b"\x00SCENE\x00",
        }])
        .expect("registry");
        let scanner = MarkerScanner::new(&registry).unwrap();
        let mut data = vec![0xFF, 0xFE];
        data.extend_from_slice(b"\x00SCENE\x00");
        data.extend_from_slice(b"IEND");
        assert_eq!(scanner.scan(&data).len(), 1);
    }
}
