//! Distance-based covalent bond inference.
//!
//! Exhaustive pairwise comparison: O(N²) time, no additional space beyond
//! the output. This is an accepted scaling bound for the target molecule
//! sizes (hundreds to low thousands of atoms); spatial binning is a noted
//! future optimization, not something this module does implicitly.

use super::Atom;

/// Default maximum bond distance in angstrom-equivalent units.
pub const DEFAULT_BOND_DISTANCE: f32 = 1.8;

/// Inferred covalent-distance relationship between two atoms.
///
/// Indices point into the atom sequence the bond was inferred from, with
/// `a < b`; the relation is symmetric but stored once per pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// Index of the first atom (`a < b`).
    pub a: u32,
    /// Index of the second atom.
    pub b: u32,
    /// Euclidean distance between the two positions.
    pub distance: f32,
}

/// Infer bonds between every pair of non-hydrogen atoms strictly closer
/// than `threshold`.
///
/// Membership is a strict `<` test, so a pair at exactly the threshold
/// distance does not bond and no tie-break is needed.
#[must_use]
pub fn infer_bonds(atoms: &[Atom], threshold: f32) -> Vec<Bond> {
    let mut bonds = Vec::new();
    for (i, ai) in atoms.iter().enumerate() {
        if ai.element.is_hydrogen() {
            continue;
        }
        for (j, aj) in atoms.iter().enumerate().skip(i + 1) {
            if aj.element.is_hydrogen() {
                continue;
            }
            let distance = ai.position.distance(aj.position);
            if distance < threshold {
                bonds.push(Bond {
                    a: i as u32,
                    b: j as u32,
                    distance,
                });
            }
        }
    }
    log::debug!(
        "inferred {} bonds among {} atoms (threshold {threshold})",
        bonds.len(),
        atoms.len(),
    );
    bonds
}
