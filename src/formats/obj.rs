//! Generic polygon-mesh text parser (OBJ-style).
//!
//! Decodes `v`/`vn`/`vt`/`f` records into a deduplicated [`MeshBuffer`].
//! The central invariant is vertex identity: each distinct
//! (position, texcoord, normal) index triple maps to exactly one output
//! vertex, so repeated use of the same combination across faces shares a
//! vertex — required for correct normal interpolation and memory use.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::MolgeomError;
use crate::geometry::MeshBuffer;

/// Sentinel for an absent texcoord/normal slot in a dedup key.
const NO_INDEX: u32 = u32::MAX;

/// Structural composite key for vertex deduplication: position index,
/// texcoord index or [`NO_INDEX`], normal index or [`NO_INDEX`]. Three
/// integers rather than a formatted string, so distinct triples can never
/// collide.
type VertexKey = (u32, u32, u32);

/// Working state while decoding one mesh.
#[derive(Default)]
struct MeshBuilder {
    src_positions: Vec<Vec3>,
    src_normals: Vec<Vec3>,
    dedup: FxHashMap<VertexKey, u32>,
    out: MeshBuffer,
}

/// Parse one float token of a `v`/`vn` record.
fn parse_component(
    token: Option<&str>,
    line_num: usize,
    field: &'static str,
) -> Result<f32, MolgeomError> {
    let token = token.ok_or_else(|| MolgeomError::MalformedRecord {
        line: line_num,
        field,
        value: String::new(),
    })?;
    token.parse().map_err(|_| MolgeomError::MalformedRecord {
        line: line_num,
        field,
        value: token.to_owned(),
    })
}

/// Parse a 1-based face reference into a 0-based index.
///
/// Zero and negative references are out of scope for this format family
/// and rejected; `limit` is the size of the referenced list.
fn parse_reference(
    token: &str,
    limit: usize,
    line_num: usize,
    what: &str,
) -> Result<u32, MolgeomError> {
    let raw: i64 = token
        .parse()
        .map_err(|_| MolgeomError::UnsupportedReference {
            line: line_num,
            detail: format!("unparsable {what} index {token:?}"),
        })?;
    if raw < 1 {
        return Err(MolgeomError::UnsupportedReference {
            line: line_num,
            detail: format!("{what} index {raw} is zero or negative"),
        });
    }
    let idx = (raw - 1) as u64;
    if idx >= limit as u64 {
        return Err(MolgeomError::UnsupportedReference {
            line: line_num,
            detail: format!("{what} index {raw} exceeds {limit} declared entries"),
        });
    }
    Ok(idx as u32)
}

impl MeshBuilder {
    /// Resolve one `a/b/c` face-vertex token to an output vertex index,
    /// deduplicating on the composite key.
    fn resolve_face_vertex(&mut self, token: &str, line_num: usize) -> Result<u32, MolgeomError> {
        let mut slots = token.split('/');
        let position = match slots.next() {
            Some(slot) if !slot.is_empty() => {
                parse_reference(slot, self.src_positions.len(), line_num, "position")?
            }
            _ => {
                return Err(MolgeomError::UnsupportedReference {
                    line: line_num,
                    detail: format!("face vertex {token:?} has no position index"),
                })
            }
        };
        // Texcoords are not retained in the output, so their references
        // are only rejected for zero/negative values, never range.
        let texcoord = match slots.next() {
            Some(slot) if !slot.is_empty() => {
                parse_reference(slot, usize::MAX, line_num, "texcoord")?
            }
            _ => NO_INDEX,
        };
        let normal = match slots.next() {
            Some(slot) if !slot.is_empty() => {
                parse_reference(slot, self.src_normals.len(), line_num, "normal")?
            }
            _ => NO_INDEX,
        };

        let key: VertexKey = (position, texcoord, normal);
        if let Some(&existing) = self.dedup.get(&key) {
            return Ok(existing);
        }

        let vertex_index = self.out.vertex_count();
        let p = self.src_positions[position as usize];
        self.out.positions.extend_from_slice(&[p.x, p.y, p.z]);
        // Absent normals stay zero; a later fallback pass fills them in
        // when the file declared none at all.
        let n = if normal == NO_INDEX {
            Vec3::ZERO
        } else {
            self.src_normals[normal as usize]
        };
        self.out.normals.extend_from_slice(&[n.x, n.y, n.z]);
        let _ = self.dedup.insert(key, vertex_index);
        Ok(vertex_index)
    }

    /// Decode an `f` record: resolve its vertices, then fan-triangulate.
    fn add_face(&mut self, tokens: &[&str], line_num: usize) -> Result<(), MolgeomError> {
        if tokens.len() < 3 {
            return Err(MolgeomError::UnsupportedReference {
                line: line_num,
                detail: format!("face has {} vertices, need at least 3", tokens.len()),
            });
        }
        let mut face = Vec::with_capacity(tokens.len());
        for token in tokens {
            face.push(self.resolve_face_vertex(token, line_num)?);
        }
        // Fan from vertex 0: exactly n-2 triangles, and for a quad this
        // is the 0-1-2 / 0-2-3 diagonal split.
        for window in face.windows(2).skip(1) {
            self.out
                .indices
                .extend_from_slice(&[face[0], window[0], window[1]]);
        }
        Ok(())
    }

    /// Synthesize per-vertex normals when the file declared none:
    /// accumulate each triangle's edge cross product at its three
    /// vertices, then normalize per vertex. Vertices with no incident
    /// triangle (zero accumulation) stay at the zero vector.
    fn synthesize_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.out.vertex_count() as usize];
        for triangle in self.out.indices.chunks_exact(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let read = |idx: usize| {
                Vec3::new(
                    self.out.positions[idx * 3],
                    self.out.positions[idx * 3 + 1],
                    self.out.positions[idx * 3 + 2],
                )
            };
            let (v0, v1, v2) = (read(i0), read(i1), read(i2));
            let face_normal = (v1 - v0).cross(v2 - v0);
            accumulated[i0] += face_normal;
            accumulated[i1] += face_normal;
            accumulated[i2] += face_normal;
        }
        for (idx, normal) in accumulated.iter().enumerate() {
            let unit = if normal.length_squared() > 0.0 {
                normal.normalize()
            } else {
                Vec3::ZERO
            };
            self.out.normals[idx * 3] = unit.x;
            self.out.normals[idx * 3 + 1] = unit.y;
            self.out.normals[idx * 3 + 2] = unit.z;
        }
    }
}

/// Parse polygon-mesh text into a deduplicated, triangulated
/// [`MeshBuffer`] without colors.
///
/// Position (`v`), normal (`vn`), and face (`f`) records are decoded;
/// texture coordinates (`vt`) are parsed for face-key purposes but not
/// retained in the output; unknown records are ignored. Text with no
/// records yields an empty buffer. Winding follows the source faces:
/// counter-clockwise front faces, so `v 0 0 0 / v 1 0 0 / v 0 1 0 /
/// f 1 2 3` synthesizes the normal `(0, 0, 1)`.
///
/// # Errors
/// [`MolgeomError::MalformedRecord`] for unparsable coordinate floats and
/// [`MolgeomError::UnsupportedReference`] for zero, negative, or
/// out-of-range face references; either aborts the whole parse.
pub fn parse_mesh(text: &str) -> Result<MeshBuffer, MolgeomError> {
    let mut builder = MeshBuilder::default();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let x = parse_component(tokens.next(), line_num, "position x")?;
                let y = parse_component(tokens.next(), line_num, "position y")?;
                let z = parse_component(tokens.next(), line_num, "position z")?;
                builder.src_positions.push(Vec3::new(x, y, z));
            }
            Some("vn") => {
                let x = parse_component(tokens.next(), line_num, "normal x")?;
                let y = parse_component(tokens.next(), line_num, "normal y")?;
                let z = parse_component(tokens.next(), line_num, "normal z")?;
                builder.src_normals.push(Vec3::new(x, y, z));
            }
            Some("vt") => {
                // Recognized but not retained: texcoord values never
                // reach the output buffer.
            }
            Some("f") => {
                let face: Vec<&str> = tokens.collect();
                builder.add_face(&face, line_num)?;
            }
            _ => {}
        }
    }

    if builder.src_normals.is_empty() && !builder.out.indices.is_empty() {
        builder.synthesize_normals();
    }
    log::debug!(
        "parsed mesh: {} vertices, {} triangles ({} source positions)",
        builder.out.vertex_count(),
        builder.out.triangle_count(),
        builder.src_positions.len(),
    );
    Ok(builder.out)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn vertex(mesh: &MeshBuffer, idx: usize) -> Vec3 {
        Vec3::new(
            mesh.positions[idx * 3],
            mesh.positions[idx * 3 + 1],
            mesh.positions[idx * 3 + 2],
        )
    }

    fn normal(mesh: &MeshBuffer, idx: usize) -> Vec3 {
        Vec3::new(
            mesh.normals[idx * 3],
            mesh.normals[idx * 3 + 1],
            mesh.normals[idx * 3 + 2],
        )
    }

    #[test]
    fn single_triangle_with_synthesized_normal() {
        let mesh = parse_mesh("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.is_consistent());
        for i in 0..3 {
            assert!(normal(&mesh, i).abs_diff_eq(Vec3::Z, 1e-6));
        }
    }

    #[test]
    fn declared_normals_pass_through() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 -1\nf 1//1 2//1 3//1\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        for i in 0..3 {
            assert_eq!(normal(&mesh, i), Vec3::NEG_Z);
        }
    }

    #[test]
    fn repeated_position_normal_pairs_share_one_vertex() {
        // Two triangles of a quad both reference vertices 1 and 3 with
        // the same normal: 4 output vertices, not 6.
        let text = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 1//1 3//1 4//1
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn same_position_different_normal_stays_distinct() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vn 0 0 -1
f 1//1 2//1 3//1
f 1//2 2//2 3//2
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn quad_splits_on_first_vertex_diagonal() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        // Both triangles share the 0-2 diagonal.
        assert_eq!(mesh.indices[0], mesh.indices[3]);
        assert_eq!(mesh.indices[2], mesh.indices[4]);
    }

    #[test]
    fn ngon_fans_into_n_minus_2_triangles() {
        // Regular pentagon → 3 triangles using only its own vertices.
        let text = "\
v 1 0 0
v 0.31 0.95 0
v -0.81 0.59 0
v -0.81 -0.59 0
v 0.31 -0.95 0
f 1 2 3 4 5
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn synthesized_normals_are_unit_at_used_vertices() {
        // Two faces meeting at an edge; all referenced vertices must end
        // up with unit normals.
        let text = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 1
f 1 2 3
f 1 3 4
";
        let mesh = parse_mesh(text).unwrap();
        for i in 0..mesh.vertex_count() as usize {
            assert!((normal(&mesh, i).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn degenerate_triangle_keeps_zero_normals() {
        // A collinear triangle accumulates a zero-length cross product at
        // each of its vertices; those stay zero instead of dividing by
        // zero during normalization.
        let text = "v 0 0 0\nv 1 0 0\nv 2 0 0\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        // Collinear triangle: all accumulations are zero-length.
        for i in 0..3 {
            assert_eq!(normal(&mesh, i), Vec3::ZERO);
        }
    }

    #[test]
    fn texcoords_are_parsed_but_dropped() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.colors.is_none());
    }

    #[test]
    fn texcoord_index_participates_in_dedup_key() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 1
vn 0 0 1
f 1/1/1 2/1/1 3/1/1
f 1/2/1 2/2/1 3/2/1
";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn zero_and_negative_references_are_rejected() {
        let base = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";
        for face in ["f 0 1 2", "f -1 2 3"] {
            let err = parse_mesh(&format!("{base}{face}\n")).unwrap_err();
            assert!(matches!(err, MolgeomError::UnsupportedReference { line: 4, .. }));
        }
    }

    #[test]
    fn out_of_range_reference_is_rejected() {
        let err = parse_mesh("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, MolgeomError::UnsupportedReference { line: 2, .. }));
    }

    #[test]
    fn out_of_range_normal_reference_is_rejected() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//2 2//1 3//1\n";
        let err = parse_mesh(text).unwrap_err();
        assert!(matches!(err, MolgeomError::UnsupportedReference { line: 5, .. }));
    }

    #[test]
    fn malformed_float_is_rejected() {
        let err = parse_mesh("v 0 zero 0\n").unwrap_err();
        match err {
            MolgeomError::MalformedRecord { line, field, value } => {
                assert_eq!(line, 1);
                assert_eq!(field, "position y");
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_component_is_rejected() {
        assert!(parse_mesh("v 1 2\n").is_err());
    }

    #[test]
    fn short_face_is_rejected() {
        let err = parse_mesh("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, MolgeomError::UnsupportedReference { line: 3, .. }));
    }

    #[test]
    fn unknown_records_and_comments_are_ignored() {
        let text = "# comment\no mesh\ns off\nusemtl none\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn empty_input_yields_empty_buffer() {
        let mesh = parse_mesh("").unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.is_consistent());
    }

    #[test]
    fn positions_preserve_file_order_values() {
        let mesh = parse_mesh("v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n").unwrap();
        assert_eq!(vertex(&mesh, 0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(vertex(&mesh, 1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(vertex(&mesh, 2), Vec3::new(7.0, 8.0, 9.0));
    }
}
