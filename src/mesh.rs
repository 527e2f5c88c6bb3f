use std::f32::consts::{PI, TAU};

/// Floats per vertex: position then normal.
pub const VERTEX_STRIDE: usize = 6;

/// Indexed unit sphere shared by every particle.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    /// Latitude/longitude sphere. `segments` wraps around Y, `rings` runs
    /// pole to pole. Both are clamped to the smallest closed shape.
    pub fn uv(segments: u16, rings: u16) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let vertex_count = (segments as usize + 1) * (rings as usize + 1);
        let mut vertices = Vec::with_capacity(vertex_count * VERTEX_STRIDE);
        for ring in 0..=rings {
            let theta = ring as f32 / rings as f32 * PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for seg in 0..=segments {
                let phi = seg as f32 / segments as f32 * TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                let n = [sin_t * cos_p, cos_t, sin_t * sin_p];
                // unit sphere: position == normal
                vertices.extend_from_slice(&n);
                vertices.extend_from_slice(&n);
            }
        }

        let row = segments + 1;
        let mut indices = Vec::with_capacity(segments as usize * rings as usize * 6);
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * row + seg;
                let b = a + row;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }
}
