//! Procedural star mesh for the debug/demo geometry tables.
//!
//! The mesh is a fan: vertex 0 is the centre, followed by `points` ring vertices that
//! alternate between the outer and inner radius, each rotated `360 / points` degrees
//! counter-clockwise from the previous, starting on +Y. Triangle `i` is
//! `(0, i + 1, (i + 1) % points + 1)`.

use fbgen_core::error::{FbgenError, Result};

/// Shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    /// Number of ring vertices (tips plus notches).
    pub points: u16,
    /// Base radius the ratios scale.
    pub radius: f64,
    /// Radius ratio of even ring slots.
    pub outer: f64,
    /// Radius ratio of odd ring slots.
    pub inner: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: 10,
            radius: 0.5,
            outer: 1.0,
            inner: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

/// Build the vertex and index tables.
pub fn generate(params: &StarParams) -> Result<StarMesh> {
    let n = params.points;
    if n < 3 || n == u16::MAX {
        return Err(FbgenError::InvalidArgument(format!(
            "star needs between 3 and {} ring points, got {n}",
            u16::MAX - 1
        )));
    }

    let step = 360.0 / f64::from(n);
    let mut vertices = Vec::with_capacity(usize::from(n) + 1);
    vertices.push([0.0, 0.0, 0.0]);
    for i in 0..n {
        let ratio = if i % 2 == 0 { params.outer } else { params.inner };
        let r = params.radius * ratio;
        let (sin, cos) = (step * f64::from(i)).to_radians().sin_cos();
        // (0, r) rotated counter-clockwise.
        vertices.push([(-r * sin) as f32, (r * cos) as f32, 0.0]);
    }

    let indices = (0..n)
        .flat_map(|i| [0, i + 1, (i + 1) % n + 1])
        .collect();

    Ok(StarMesh { vertices, indices })
}

impl StarMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Emit the mesh as shared C++/HLSL constant arrays.
    pub fn to_source(&self) -> String {
        let tris = self.triangle_count();
        let mut out = String::new();

        out.push_str(&format!(
            "FB_CONSTANT float3 STAR_VERTICES[{}] = {{\n",
            self.vertices.len()
        ));
        for [x, y, _] in &self.vertices {
            out.push_str(&format!(
                "  float3({}f, {}f, 0.0f),\n",
                component(*x),
                component(*y)
            ));
        }
        out.push_str("};\n");

        out.push_str(&format!(
            "FB_CONSTANT uint16_t STAR_INDICES[3 * {tris}] = {{\n"
        ));
        for tri in self.indices.chunks(3) {
            out.push_str(&format!("  {}, {}, {}, //\n", tri[0], tri[1], tri[2]));
        }
        out.push_str("};\n");

        out
    }
}

/// Three decimals, without a `-0.000`.
fn component(v: f32) -> String {
    let s = format!("{v:.3}");
    if s == "-0.000" {
        "0.000".into()
    } else {
        s
    }
}
