//! Molecular buffer assembly.
//!
//! Two output modes over the same loaded molecule: lightweight per-atom
//! "simple" arrays for instanced/impostor rendering, and a single merged
//! triangle mesh for hosts that want one vertex/index buffer pair.

use glam::Vec3;

use super::{primitives, MeshBuffer};
use crate::element::Element;
use crate::options::GeometryOptions;
use crate::structure::Molecule;

/// Flat gray used for every bond endpoint/segment.
const BOND_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Per-atom flat arrays for the simple rendering mode.
///
/// All four arrays are parallel: entry `i` describes atom `i` of the
/// originating molecule.
#[derive(Debug, Clone, Default)]
pub struct SimpleAtomBuffers {
    /// Scaled positions, `[x, y, z]` per atom.
    pub positions: Vec<f32>,
    /// CPK colors, `[r, g, b]` per atom (magenta for unknown elements).
    pub colors: Vec<f32>,
    /// Display radii, one per atom, already multiplied by the atom scale.
    pub radii: Vec<f32>,
    /// Element tags for render-time filtering (e.g. hydrogen exclusion).
    pub elements: Vec<Element>,
}

/// Flat bond-line arrays for the simple rendering mode.
///
/// Bonds are plain line segments here, not meshes: two endpoints per
/// bond, with a matching gray color per endpoint.
#[derive(Debug, Clone, Default)]
pub struct SimpleBondBuffers {
    /// Scaled endpoint pairs, `[x, y, z]` × 2 per bond.
    pub positions: Vec<f32>,
    /// Gray, `[r, g, b]` per endpoint.
    pub colors: Vec<f32>,
}

/// Output of [`assemble_simple`]: atom arrays plus bond-line arrays.
#[derive(Debug, Clone, Default)]
pub struct SimpleBuffers {
    /// Per-atom arrays.
    pub atoms: SimpleAtomBuffers,
    /// Per-bond line arrays.
    pub bonds: SimpleBondBuffers,
}

/// Assemble the simple per-atom/per-bond flat arrays.
///
/// `atom_scale` multiplies every coordinate and every atom radius. Bond
/// endpoints get the same coordinate scaling (a line segment carries no
/// radius). A molecule with zero atoms yields empty, valid buffers.
#[must_use]
pub fn assemble_simple(molecule: &Molecule, atom_scale: f32) -> SimpleBuffers {
    let mut atoms = SimpleAtomBuffers {
        positions: Vec::with_capacity(molecule.atoms.len() * 3),
        colors: Vec::with_capacity(molecule.atoms.len() * 3),
        radii: Vec::with_capacity(molecule.atoms.len()),
        elements: Vec::with_capacity(molecule.atoms.len()),
    };
    for atom in &molecule.atoms {
        let p = atom.position * atom_scale;
        atoms.positions.extend_from_slice(&[p.x, p.y, p.z]);
        atoms.colors.extend_from_slice(&atom.element.cpk_color());
        atoms.radii.push(atom.element.display_radius() * atom_scale);
        atoms.elements.push(atom.element);
    }

    let mut bonds = SimpleBondBuffers {
        positions: Vec::with_capacity(molecule.bonds.len() * 6),
        colors: Vec::with_capacity(molecule.bonds.len() * 6),
    };
    for bond in &molecule.bonds {
        for idx in [bond.a, bond.b] {
            let p = molecule.atoms[idx as usize].position * atom_scale;
            bonds.positions.extend_from_slice(&[p.x, p.y, p.z]);
            bonds.colors.extend_from_slice(&BOND_COLOR);
        }
    }

    log::debug!(
        "assembled simple buffers: {} atoms, {} bond endpoints",
        atoms.elements.len(),
        bonds.positions.len() / 3,
    );
    SimpleBuffers { atoms, bonds }
}

/// Translate every vertex of a submesh by `offset`.
fn translate(mesh: &mut MeshBuffer, offset: Vec3) {
    for vertex in mesh.positions.chunks_exact_mut(3) {
        vertex[0] += offset.x;
        vertex[1] += offset.y;
        vertex[2] += offset.z;
    }
}

/// Scale every vertex of a submesh uniformly about the origin.
///
/// Normals are direction-only and unaffected by uniform scaling.
fn scale_uniform(mesh: &mut MeshBuffer, factor: f32) {
    for value in &mut mesh.positions {
        *value *= factor;
    }
}

/// Assemble one merged triangle mesh: a UV-sphere submesh per atom and a
/// cylinder submesh per bond, all sharing one index space with indices
/// offset by a running vertex accumulator. Per-vertex colors are
/// broadcast from each atom's/bond's single color.
///
/// Bond cylinders are translated to the bond midpoint but deliberately
/// NOT rotated to the bond axis; the simple line-segment representation
/// is the reference behavior and oriented cylinders are an optional
/// enhancement, not a correctness requirement.
///
/// A molecule with zero atoms yields an empty but valid [`MeshBuffer`].
#[must_use]
pub fn assemble_mesh(molecule: &Molecule, geometry: &GeometryOptions) -> MeshBuffer {
    let mut merged = MeshBuffer {
        colors: Some(Vec::new()),
        ..MeshBuffer::default()
    };

    // One unit-sphere template, rescaled per atom, beats re-tessellating
    // the sphere for every atom.
    let template = primitives::sphere(1.0, geometry.sphere_lat_bands, geometry.sphere_long_bands);
    for atom in &molecule.atoms {
        let mut submesh = template.clone();
        scale_uniform(
            &mut submesh,
            atom.element.display_radius() * geometry.atom_scale,
        );
        translate(&mut submesh, atom.position * geometry.atom_scale);
        merged.append_colored(&submesh, atom.element.cpk_color());
    }

    for bond in &molecule.bonds {
        let start = molecule.atoms[bond.a as usize].position * geometry.atom_scale;
        let end = molecule.atoms[bond.b as usize].position * geometry.atom_scale;
        let mut submesh = primitives::cylinder(
            geometry.bond_radius,
            geometry.bond_radius,
            bond.distance * geometry.atom_scale,
            geometry.sphere_long_bands,
        );
        translate(&mut submesh, (start + end) / 2.0);
        merged.append_colored(&submesh, BOND_COLOR);
    }

    log::debug!(
        "assembled merged mesh: {} vertices, {} triangles",
        merged.vertex_count(),
        merged.triangle_count(),
    );
    merged
}
