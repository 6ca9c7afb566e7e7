//! Molecule recentering at the unweighted center of mass.

use glam::Vec3;

use super::Atom;

/// Arithmetic mean of all atom positions (unweighted by atomic mass).
/// Zero for an empty sequence.
#[must_use]
pub fn centroid(atoms: &[Atom]) -> Vec3 {
    if atoms.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = atoms.iter().map(|a| a.position).sum();
    sum / atoms.len() as f32
}

/// Subtract the centroid from every atom position in place, returning the
/// centroid that was removed.
///
/// No-op on an empty slice. Idempotent up to floating-point accumulation
/// error: after the first call the mean position sits within numerical
/// tolerance of the origin.
pub fn recenter(atoms: &mut [Atom]) -> Vec3 {
    let center = centroid(atoms);
    for atom in atoms.iter_mut() {
        atom.position -= center;
    }
    center
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::element::Element;

    fn atom_at(position: Vec3) -> Atom {
        Atom {
            serial: 0,
            name: "C".to_owned(),
            res_name: "LIG".to_owned(),
            chain_id: "A".to_owned(),
            res_seq: 1,
            position,
            element: Element::C,
        }
    }

    #[test]
    fn centroid_is_mean_position() {
        let atoms = vec![
            atom_at(Vec3::new(1.0, 0.0, 0.0)),
            atom_at(Vec3::new(3.0, 2.0, -4.0)),
        ];
        assert_eq!(centroid(&atoms), Vec3::new(2.0, 1.0, -2.0));
    }

    #[test]
    fn recenter_moves_mean_to_origin() {
        let mut atoms = vec![
            atom_at(Vec3::new(0.0, 0.0, 0.0)),
            atom_at(Vec3::new(0.0, 0.0, 1.5)),
        ];
        let removed = recenter(&mut atoms);
        assert!(removed.abs_diff_eq(Vec3::new(0.0, 0.0, 0.75), 1e-6));
        assert!(atoms[0].position.abs_diff_eq(Vec3::new(0.0, 0.0, -0.75), 1e-6));
        assert!(atoms[1].position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.75), 1e-6));
    }

    #[test]
    fn recenter_is_idempotent_within_tolerance() {
        let mut atoms = vec![
            atom_at(Vec3::new(10.0, -3.0, 7.5)),
            atom_at(Vec3::new(-2.0, 14.0, 0.25)),
            atom_at(Vec3::new(5.5, 5.5, 5.5)),
        ];
        let _ = recenter(&mut atoms);
        let second = recenter(&mut atoms);
        assert!(second.length() < 1e-4);
    }

    #[test]
    fn empty_slice_is_a_noop() {
        let mut atoms: Vec<Atom> = Vec::new();
        assert_eq!(recenter(&mut atoms), Vec3::ZERO);
    }
}
