//! Marker registry
//!
//! Static table of the marker byte sequences each supported game embeds in
//! its card files, keyed by (product, category). Built once at startup and
//! passed explicitly; never mutated afterwards.
//!
//! Markers are raw bytes, not text: the CJK bracket markers are the UTF-8
//! bytes the games write, and the AA2 markers are Shift-JIS / NUL-delimited
//! sequences that do not decode as UTF-8 at all.

use super::error::{Result, SortError};
use std::collections::HashMap;

/// One registered marker: the exact bytes and the (product, category) pair
/// a match resolves to.
#[derive(Debug, Clone, Copy)]
pub struct MarkerEntry {
    pub product: &'static str,
    pub category: &'static str,
    pub marker: &'static [u8],
}

const fn entry(
    product: &'static str,
    category: &'static str,
    marker: &'static [u8],
) -> MarkerEntry {
    MarkerEntry {
        product,
        category,
        marker,
    }
}

/// Markers for every supported game, in registration order.
///
/// Per-product lists are explicit rather than generated: which categories a
/// game gets depends on which markers reliably appear last in its files.
/// RG's RoomStudio marker is omitted for exactly that reason.
const BUILTIN_MARKERS: &[MarkerEntry] = &[
    entry("KK", "chara", "【KoiKatuChara】".as_bytes()),
    entry("KK", "chara", "【KoiKatuCharaS】".as_bytes()),
    entry("KK", "chara", "【KoiKatuCharaSP】".as_bytes()),
    entry("KK", "outfit", "【KoiKatuClothes】".as_bytes()),
    entry("KK", "studio", "【KStudio】".as_bytes()),
    entry("KKS", "chara", "【KoiKatuCharaSun】".as_bytes()),
    entry("AI", "chara", "【AIS_Chara】".as_bytes()),
    entry("AI", "outfit", "【AIS_Clothes】".as_bytes()),
    entry("AI", "studio", "【StudioNEOV2】".as_bytes()),
    entry("AI", "housing", "【AIS_Housing】".as_bytes()),
    entry("EC", "chara", b"EroMakeChara"),
    entry("EC", "hscene", b"EroMakeHScene"),
    entry("EC", "map", b"EroMakeMap"),
    entry("EC", "pose", b"EroMakePose"),
    entry("HS", "female", "【HoneySelectCharaFemale】".as_bytes()),
    entry("HS", "male", "【HoneySelectCharaMale】".as_bytes()),
    entry("HS", "studio", "【-neo-】".as_bytes()),
    entry("PH", "female", "【PlayHome_Female】".as_bytes()),
    entry("PH", "male", "【PlayHome_Male】".as_bytes()),
    entry("PH", "studio", "【PHStudio】".as_bytes()),
    entry("SBPR", "female", "【PremiumResortCharaFemale】".as_bytes()),
    entry("SBPR", "male", "【PremiumResortCharaMale】".as_bytes()),
    entry("HC", "chara", "【HCChara】".as_bytes()),
    // AA2 writes Shift-JIS 【エディット】
    entry(
        "AA2",
        "chara",
        b"\x81\x79\x83\x47\x83\x66\x83\x42\x83\x62\x83\x67\x81\x7A",
    ),
    entry("AA2", "studio", b"\x00SCENE\x00"),
    entry("RG", "chara", "【RG_Chara】".as_bytes()),
];

/// Immutable marker table
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<MarkerEntry>,
}

impl Registry {
    /// Marker whose following byte encodes the card's sex.
    pub const SEX_MARKER: &'static [u8] = b"sex";

    /// End of the searchable metadata region within a card file.
    pub const TERMINATOR: &'static [u8] = b"IEND";

    /// The standard marker table.
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_MARKERS.to_vec())
    }

    /// Build a registry, rejecting marker tables the automaton could not
    /// attribute unambiguously.
    pub fn new(entries: Vec<MarkerEntry>) -> Result<Self> {
        let mut seen: HashMap<&[u8], (&str, &str)> = HashMap::new();
        for entry in &entries {
            if entry.marker.is_empty() {
                return Err(SortError::Registry(format!(
                    "empty marker registered for {}/{}",
                    entry.product, entry.category
                )));
            }
            if entry.marker == Self::SEX_MARKER {
                return Err(SortError::Registry(format!(
                    "marker for {}/{} collides with the sex marker",
                    entry.product, entry.category
                )));
            }
            if let Some((product, category)) =
                seen.insert(entry.marker, (entry.product, entry.category))
            {
                return Err(SortError::Registry(format!(
                    "marker {:?} registered for both {}/{} and {}/{}",
                    String::from_utf8_lossy(entry.marker),
                    product,
                    category,
                    entry.product,
                    entry.category
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Registered markers in registration order
    pub fn entries(&self) -> &[MarkerEntry] {
        &self.entries
    }
}
