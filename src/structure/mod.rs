//! Molecular data model and load pipeline.
//!
//! [`Atom`] and [`Bond`] are immutable value records built once per load
//! and discarded wholesale on reload; there is no incremental update path.
//! [`load_molecule`] ties the per-stage transforms together in the order
//! parse → recenter → bond inference → backbone extraction.

pub mod backbone;
pub mod bond_inference;
pub mod normalize;

use glam::Vec3;

use crate::element::Element;
use crate::error::MolgeomError;
use crate::formats::pdb;
use crate::options::Options;

pub use backbone::{BackboneSegment, BackboneTrace};
pub use bond_inference::Bond;

/// One decoded structural record with identity, position, and element.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Source-assigned serial id; not necessarily contiguous.
    pub serial: i32,
    /// Trimmed atom name token (e.g. `"CA"`).
    pub name: String,
    /// Residue name (e.g. `"ALA"`).
    pub res_name: String,
    /// Chain identifier; `"A"` when the source column was blank.
    pub chain_id: String,
    /// Residue sequence number; may repeat across chains.
    pub res_seq: i32,
    /// Position in source coordinates (recentered after load).
    pub position: Vec3,
    /// Element, explicit or guessed from the name. Never empty.
    pub element: Element,
}

/// A fully loaded molecule: atoms plus everything derived from them.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Recentered atom records in file order.
    pub atoms: Vec<Atom>,
    /// Inferred bonds, one entry per unordered pair.
    pub bonds: Vec<Bond>,
    /// Backbone trace segments and chain inventory.
    pub backbone: BackboneTrace,
}

/// Run the full molecular load pipeline on raw structural text.
///
/// Atoms come out recentered at the molecule's (unweighted) center of
/// mass. Text with no atom records yields an empty but valid
/// [`Molecule`]. Each call allocates fresh output; nothing is shared
/// between loads.
///
/// # Errors
/// Returns [`MolgeomError::MalformedRecord`] when a required numeric
/// column of a record is unparsable; in that case no partial molecule is
/// produced.
pub fn load_molecule(text: &str, options: &Options) -> Result<Molecule, MolgeomError> {
    let mut atoms = pdb::parse_structure(text)?;
    let centroid = normalize::recenter(&mut atoms);
    let bonds = bond_inference::infer_bonds(&atoms, options.bonds.distance_threshold);
    let backbone = backbone::extract_backbone(&atoms);
    log::info!(
        "loaded molecule: {} atoms, {} bonds, {} backbone segments, {} chains (centroid was {centroid})",
        atoms.len(),
        bonds.len(),
        backbone.segments.len(),
        backbone.chain_ids.len(),
    );
    Ok(Molecule {
        atoms,
        bonds,
        backbone,
    })
}
