//! Parametric primitive meshes: cube, UV sphere, cylinder, plane.
//!
//! All generators are pure functions from shape parameters to an owned
//! [`MeshBuffer`] without colors. Degenerate segment counts are clamped
//! to a minimum of 1 rather than rejected, so every call succeeds.

use std::f32::consts::PI;

use super::MeshBuffer;

/// Axis-aligned cube centered at the origin.
///
/// Uses the fixed 24-vertex/6-face layout (no vertices shared across
/// faces) so each face carries a flat normal, with two CCW triangles per
/// face: 36 indices total.
#[must_use]
pub fn cube(size: f32) -> MeshBuffer {
    let h = size / 2.0;
    // Four corners + one normal per face, front/back/top/bottom/right/left.
    #[rustfmt::skip]
    let positions = vec![
        // Front (+z)
        -h, -h,  h,   h, -h,  h,   h,  h,  h,  -h,  h,  h,
        // Back (-z)
        -h, -h, -h,  -h,  h, -h,   h,  h, -h,   h, -h, -h,
        // Top (+y)
        -h,  h, -h,  -h,  h,  h,   h,  h,  h,   h,  h, -h,
        // Bottom (-y)
        -h, -h, -h,   h, -h, -h,   h, -h,  h,  -h, -h,  h,
        // Right (+x)
         h, -h, -h,   h,  h, -h,   h,  h,  h,   h, -h,  h,
        // Left (-x)
        -h, -h, -h,  -h, -h,  h,  -h,  h,  h,  -h,  h, -h,
    ];
    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
    ];
    let mut normals = Vec::with_capacity(positions.len());
    let mut indices = Vec::with_capacity(36);
    for (face, normal) in face_normals.iter().enumerate() {
        for _ in 0..4 {
            normals.extend_from_slice(normal);
        }
        let base = (face * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshBuffer {
        positions,
        normals,
        colors: None,
        indices,
    }
}

/// UV sphere centered at the origin.
///
/// Builds a `(lat_bands + 1) × (long_bands + 1)` vertex grid via
/// spherical parameterization (θ over `[0, π]`, φ over `[0, 2π]`);
/// normals are the normalized positions. Pole rows collapse to a single
/// point so the quads there degenerate into triangles naturally — no
/// special-case pole code. Band counts are clamped to at least 1.
#[must_use]
pub fn sphere(radius: f32, lat_bands: u32, long_bands: u32) -> MeshBuffer {
    let lat_bands = lat_bands.max(1);
    let long_bands = long_bands.max(1);
    let vertex_count = ((lat_bands + 1) * (long_bands + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);

    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for long in 0..=long_bands {
            let phi = long as f32 * 2.0 * PI / long_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            normals.extend_from_slice(&normal);
            positions.extend_from_slice(&[
                radius * normal[0],
                radius * normal[1],
                radius * normal[2],
            ]);
        }
    }

    let mut indices = Vec::with_capacity((lat_bands * long_bands * 6) as usize);
    for lat in 0..lat_bands {
        for long in 0..long_bands {
            let first = lat * (long_bands + 1) + long;
            let second = first + long_bands + 1;
            indices.extend_from_slice(&[
                first,
                first + 1,
                second + 1,
                first,
                second + 1,
                second,
            ]);
        }
    }
    MeshBuffer {
        positions,
        normals,
        colors: None,
        indices,
    }
}

/// Open-ended cylinder about the Y axis, centered at the origin.
///
/// Two rings of `radial_segments + 1` vertices at `±height / 2` with the
/// radius interpolated between `radius_top` and `radius_bottom`; side
/// faces only (no caps), normals pointing radially outward per ring.
/// The segment count is clamped to at least 1.
#[must_use]
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> MeshBuffer {
    let radial_segments = radial_segments.max(1);
    let ring = radial_segments + 1;
    let mut positions = Vec::with_capacity((ring * 2 * 3) as usize);
    let mut normals = Vec::with_capacity((ring * 2 * 3) as usize);

    for (y, radius) in [(height / 2.0, radius_top), (-height / 2.0, radius_bottom)] {
        for seg in 0..ring {
            let phi = seg as f32 * 2.0 * PI / radial_segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            positions.extend_from_slice(&[radius * cos_phi, y, radius * sin_phi]);
            normals.extend_from_slice(&[cos_phi, 0.0, sin_phi]);
        }
    }

    let mut indices = Vec::with_capacity((radial_segments * 6) as usize);
    for seg in 0..radial_segments {
        let top = seg;
        let bottom = ring + seg;
        indices.extend_from_slice(&[top, top + 1, bottom + 1, top, bottom + 1, bottom]);
    }
    MeshBuffer {
        positions,
        normals,
        colors: None,
        indices,
    }
}

/// Flat rectangle in the XY plane, centered at the origin.
///
/// A `(width_segments + 1) × (height_segments + 1)` grid with the uniform
/// normal `(0, 0, 1)` and standard quad-to-two-triangle indexing. Segment
/// counts are clamped to at least 1.
#[must_use]
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshBuffer {
    let width_segments = width_segments.max(1);
    let height_segments = height_segments.max(1);
    let cols = width_segments + 1;
    let rows = height_segments + 1;
    let mut positions = Vec::with_capacity((cols * rows * 3) as usize);
    let mut normals = Vec::with_capacity((cols * rows * 3) as usize);

    for row in 0..rows {
        let y = (row as f32 / height_segments as f32 - 0.5) * height;
        for col in 0..cols {
            let x = (col as f32 / width_segments as f32 - 0.5) * width;
            positions.extend_from_slice(&[x, y, 0.0]);
            normals.extend_from_slice(&[0.0, 0.0, 1.0]);
        }
    }

    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for row in 0..height_segments {
        for col in 0..width_segments {
            let first = row * cols + col;
            let second = first + cols;
            indices.extend_from_slice(&[
                first,
                first + 1,
                second + 1,
                first,
                second + 1,
                second,
            ]);
        }
    }
    MeshBuffer {
        positions,
        normals,
        colors: None,
        indices,
    }
}
