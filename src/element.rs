//! Closed element enumeration with CPK colors and display radii.
//!
//! Structural files in the wild carry a handful of elements that matter for
//! rendering; everything else falls into [`Element::Other`] so "unknown
//! element" is an explicit, testable branch rather than a missing map key.

use serde::{Deserialize, Serialize};

/// Chemical element of an atom record.
///
/// The set is closed over the elements the ingestion pipeline assigns
/// distinct colors/radii to. Anything else maps to [`Element::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Hydrogen. Excluded from bond inference.
    H,
    /// Carbon. The fallback when an element cannot be determined.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Sulfur.
    S,
    /// Phosphorus.
    P,
    /// Any element outside the recognized set.
    Other,
}

impl Element {
    /// Parse an element symbol as found in the explicit element column
    /// (e.g. `"C"`, `"FE"`). Case-insensitive. Unrecognized symbols map to
    /// [`Element::Other`]; an empty symbol yields `None` so the caller can
    /// fall back to name-based guessing.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return None;
        }
        Some(match symbol.to_ascii_uppercase().as_str() {
            "H" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "S" => Self::S,
            "P" => Self::P,
            _ => Self::Other,
        })
    }

    /// Guess the element from an atom name token (e.g. `"CA"` → carbon,
    /// `"N"` → nitrogen) by mapping the first non-space character through
    /// the single-character symbol table. Defaults to carbon.
    #[must_use]
    pub fn guess_from_name(name: &str) -> Self {
        match name.trim_start().chars().next() {
            Some('H' | 'h') => Self::H,
            Some('N' | 'n') => Self::N,
            Some('O' | 'o') => Self::O,
            Some('S' | 's') => Self::S,
            Some('P' | 'p') => Self::P,
            _ => Self::C,
        }
    }

    /// Canonical symbol string for downstream filtering and display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::S => "S",
            Self::P => "P",
            Self::Other => "X",
        }
    }

    /// Standard CPK color as linear RGB. Unknown elements render magenta
    /// so they stand out instead of silently blending in.
    #[must_use]
    pub const fn cpk_color(self) -> [f32; 3] {
        match self {
            Self::H => [1.0, 1.0, 1.0],
            Self::C => [0.5, 0.5, 0.5],
            Self::N => [0.2, 0.2, 1.0],
            Self::O => [1.0, 0.2, 0.2],
            Self::S => [1.0, 0.9, 0.2],
            Self::P => [1.0, 0.6, 0.1],
            Self::Other => [1.0, 0.0, 1.0],
        }
    }

    /// Nominal display radius (angstrom-like units) used to size rendered
    /// spheres. These are ball-and-stick display radii, not physical van
    /// der Waals radii; unknown elements get a conservative 0.4.
    #[must_use]
    pub const fn display_radius(self) -> f32 {
        match self {
            Self::H => 0.25,
            Self::C => 0.7,
            Self::N => 0.65,
            Self::O => 0.6,
            Self::S => 1.0,
            Self::P => 1.0,
            Self::Other => 0.4,
        }
    }

    /// Whether this element is hydrogen (excluded from bond inference and
    /// optionally filtered at render time).
    #[must_use]
    pub const fn is_hydrogen(self) -> bool {
        matches!(self, Self::H)
    }
}
