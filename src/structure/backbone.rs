//! Backbone trace extraction.
//!
//! Structural records are not guaranteed to arrive chain-sorted or
//! residue-ordered (multi-chain files and het-atom interleaving are
//! common), so the per-chain residue sort here is load-bearing, not
//! cosmetic.

use glam::Vec3;

use super::Atom;

/// Atom name token marking one backbone position per residue.
const BACKBONE_MARKER: &str = "CA";

/// Maximum residue-sequence gap between consecutive sorted backbone atoms
/// that still counts as a continuous chain. Tolerates minor numbering
/// gaps; anything larger is a chain break.
pub const MAX_RESIDUE_GAP: i32 = 2;

/// One straight segment of the backbone trace.
#[derive(Debug, Clone, PartialEq)]
pub struct BackboneSegment {
    /// Position of the earlier residue's marker atom.
    pub start: Vec3,
    /// Position of the later residue's marker atom.
    pub end: Vec3,
    /// Chain this segment belongs to.
    pub chain_id: String,
}

/// Backbone segments plus the distinct chains they were drawn from.
#[derive(Debug, Clone, Default)]
pub struct BackboneTrace {
    /// Segments linking adjacent-in-sequence marker atoms per chain.
    pub segments: Vec<BackboneSegment>,
    /// Distinct chain identifiers in first-seen order, for downstream
    /// color assignment.
    pub chain_ids: Vec<String>,
}

/// Extract the backbone trace from an atom sequence.
///
/// Selects alpha-carbon marker atoms, groups them by chain (first-seen
/// chain order is preserved), sorts each group ascending by residue
/// sequence number, and links adjacent pairs whose residue gap is at most
/// [`MAX_RESIDUE_GAP`]. Pairs across larger gaps are silently omitted.
#[must_use]
pub fn extract_backbone(atoms: &[Atom]) -> BackboneTrace {
    // Grouping keeps a Vec keyed by first appearance rather than a map so
    // chain order matches the file.
    let mut chains: Vec<(String, Vec<(i32, Vec3)>)> = Vec::new();
    for atom in atoms {
        if atom.name != BACKBONE_MARKER {
            continue;
        }
        if let Some((_, markers)) = chains.iter_mut().find(|(id, _)| *id == atom.chain_id) {
            markers.push((atom.res_seq, atom.position));
        } else {
            chains.push((atom.chain_id.clone(), vec![(atom.res_seq, atom.position)]));
        }
    }

    let mut trace = BackboneTrace::default();
    for (chain_id, mut markers) in chains {
        markers.sort_by_key(|&(res_seq, _)| res_seq);
        for pair in markers.windows(2) {
            let (prev_seq, prev_pos) = pair[0];
            let (next_seq, next_pos) = pair[1];
            if next_seq - prev_seq <= MAX_RESIDUE_GAP {
                trace.segments.push(BackboneSegment {
                    start: prev_pos,
                    end: next_pos,
                    chain_id: chain_id.clone(),
                });
            }
        }
        trace.chain_ids.push(chain_id);
    }
    log::debug!(
        "extracted {} backbone segments across {} chains",
        trace.segments.len(),
        trace.chain_ids.len(),
    );
    trace
}
