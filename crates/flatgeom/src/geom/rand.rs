//! Random rings (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for closed, simple, counter-clockwise polygon
//!   rings, used by tests and benches that need realistic per-row
//!   geometries of a given size.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular and radial
//!   jitter; jitter below half the base spacing keeps the angles strictly
//!   increasing, so the ring stays star-shaped around the origin and simple.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::vertex::Vertex;
use super::vertex_vec::{VertexVec, VERTEX_SIZE};

/// Radial-jitter ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// Distinct corners, clamped to at least 3. The closing vertex is added
    /// on top of this.
    pub vertices: u32,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude): radii are `base_radius * (1 + u)`
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius of the ring.
    pub base_radius: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Bytes a caller must provide for a ring drawn with `cfg` (corners plus
/// the explicit closing vertex).
pub fn ring_buffer_size(cfg: &RingCfg) -> usize {
    (cfg.vertices.max(3) as usize + 1) * VERTEX_SIZE
}

/// Draw a closed counter-clockwise ring into the caller's buffer and return
/// the populated view. The buffer must hold `ring_buffer_size(&cfg)` bytes.
pub fn draw_ring<'a>(buf: &'a mut [u8], cfg: RingCfg, tok: ReplayToken) -> VertexVec<'a> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;

    let mut ring = VertexVec::new(buf, n + 1);
    for k in 0..n {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let theta = k as f64 * delta + jitter;
        let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
        let r = r0 * (1.0 + u);
        ring.add(Vertex::new(r * theta.cos(), r * theta.sin()));
    }
    let first = ring.get(0);
    ring.add(first);
    ring
}
