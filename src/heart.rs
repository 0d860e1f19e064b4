// The heart itself: stationary point sets built once, then every animation
// frame precomputed from them.
// Visual expectation: `frame_particles(k)` for k = 0, 1, 2, ... is a heart that
// beats and a glow around it that swells and fades.

use crate::config::HeartConfig;
use crate::error::Error;
use crate::shape::{CURVE_HALF_HEIGHT, CURVE_HALF_WIDTH, heart_point, pulse, pulse_ratio, scatter_inside, shrink};
use crate::types::{Particle, Point};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::f64::consts::{PI, TAU};
use std::hash::Hash;

/// Radial nudge for raw curve samples (negative: toward the center), applied before anything else is built.
const CURVE_SPREAD: f64 = -1000.0;
/// Halo jitter per axis, in pixels.
const HALO_JITTER: i32 = 14;
/// Halo sizes are drawn from this bag, so 2 is twice as likely as 1.
const HALO_SIZES: [u8; 3] = [1, 2, 2];

/// Dedupes by key while the output Vec keeps insertion order, so a seeded run is reproducible.
struct OrderedSet<K> {
    seen: HashSet<K>,
}

impl<K: Hash + Eq> OrderedSet<K> {
    fn new() -> Self {
        Self { seen: HashSet::new() }
    }

    /// Push `p` into `out` unless its key was seen before.
    fn insert(&mut self, key: K, p: Point, out: &mut Vec<Point>) {
        if self.seen.insert(key) {
            out.push(p);
        }
    }
}

/// The three point clouds that never move. Frames are computed *from* them.
#[derive(Clone, Debug, PartialEq)]
pub struct StationaryPointSets {
    pub curve: Vec<Point>, // on the outline, one per distinct pixel
    pub edge: Vec<Point>,  // a soft border just inside the outline
    pub inner: Vec<Point>, // the fill
}

impl StationaryPointSets {
    pub fn build<R: Rng + ?Sized>(cfg: &HeartConfig, rng: &mut R) -> Self {
        let center = cfg.center();

        // 1) Outline: random parameters, nudged by the spread, deduped by pixel.
        let mut curve = Vec::with_capacity(cfg.curve_samples);
        let mut keys = OrderedSet::new();
        for _ in 0..cfg.curve_samples {
            let t = rng.gen_range(0.0..TAU);
            let p = shrink(heart_point(t, cfg.enlarge, center), CURVE_SPREAD, center);
            let (x, y) = p.pixel();
            keys.insert((x, y), Point::new(x as f64, y as f64), &mut curve);
        }

        // 2) Edge: a few tight scatters around every outline point.
        let mut edge = Vec::with_capacity(curve.len() * cfg.edge_scatter_per_point);
        let mut keys = OrderedSet::new();
        for &p in &curve {
            for _ in 0..cfg.edge_scatter_per_point {
                let q = scatter_inside(p, cfg.edge_beta, center, rng);
                keys.insert(q.exact_key(), q, &mut edge);
            }
        }

        // 3) Fill: deeper scatters from randomly picked outline points.
        let mut inner = Vec::with_capacity(cfg.inner_samples);
        let mut keys = OrderedSet::new();
        if !curve.is_empty() {
            for _ in 0..cfg.inner_samples {
                if let Some(&p) = curve.choose(rng) {
                    let q = scatter_inside(p, cfg.inner_beta, center, rng);
                    keys.insert(q.exact_key(), q, &mut inner);
                }
            }
        }

        debug!(
            "stationary sets: curve={} edge={} inner={}",
            curve.len(),
            edge.len(),
            inner.len()
        );
        Self { curve, edge, inner }
    }

    pub fn len(&self) -> usize {
        self.curve.len() + self.edge.len() + self.inner.len()
    }
}

/// Phase of the beat for a frame, in [-1, 1].
#[inline]
fn beat(frame: usize) -> f64 {
    (frame as f64 / 10.0 * PI).sin()
}

/// Halo ring offset for a frame: 4..=16.
pub fn halo_radius(frame: usize) -> f64 {
    (4.0 + 6.0 * (1.0 + beat(frame))).trunc()
}

/// How many halo samples to draw for a frame: 1500..=3500.
pub fn halo_count(frame: usize) -> usize {
    (1500.0 + 2000.0 * beat(frame).powi(2)) as usize
}

/// Fresh glow for one frame, sampled straight from the curve (not from the
/// stationary sets). Dedupe happens on the exact pre-jitter position, so
/// jittered particles may still land on the same pixel.
pub fn halo_particles<R: Rng + ?Sized>(cfg: &HeartConfig, frame: usize, rng: &mut R) -> Vec<Particle> {
    let center = cfg.center();
    let radius = halo_radius(frame);
    let count = halo_count(frame);

    let mut out = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);
    for _ in 0..count {
        let t = rng.gen_range(0.0..TAU);
        let p = shrink(heart_point(t, cfg.halo_enlarge, center), radius, center);
        if !seen.insert(p.exact_key()) {
            continue;
        }
        let x = p.x + rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64;
        let y = p.y + rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64;
        let size = HALO_SIZES[rng.gen_range(0..HALO_SIZES.len())];
        out.push(Particle::at(Point::new(x, y), size));
    }
    out
}

/// One full frame: halo first, then curve, edge and fill, each pulsed.
pub fn frame_particles_for<R: Rng + ?Sized>(
    cfg: &HeartConfig,
    points: &StationaryPointSets,
    frame: usize,
    rng: &mut R,
) -> Vec<Particle> {
    let center = cfg.center();
    let ratio = pulse_ratio(frame);

    let mut all = halo_particles(cfg, frame, rng);
    all.reserve(points.len());

    for &p in &points.curve {
        let q = pulse(p, ratio, center, rng);
        all.push(Particle::at(q, rng.gen_range(1..=3)));
    }
    for &p in points.edge.iter().chain(points.inner.iter()) {
        let q = pulse(p, ratio, center, rng);
        all.push(Particle::at(q, rng.gen_range(1..=2)));
    }
    all
}

/// Stationary sets + every precomputed frame. Read-only once built.
pub struct Heart {
    config: HeartConfig,
    points: StationaryPointSets,
    frames: Vec<Vec<Particle>>, // index = frame number
}

impl Heart {
    /// Build the point sets and precompute all `frame_count` frames.
    /// Blocks until done; call before the render loop starts.
    pub fn build<R: Rng + ?Sized>(config: HeartConfig, rng: &mut R) -> Result<Self, Error> {
        config.validate()?;
        let enlarge = config.halo_enlarge.max(config.enlarge);
        if enlarge * CURVE_HALF_WIDTH > config.width as f64 / 2.0
            || enlarge * CURVE_HALF_HEIGHT > config.height as f64 / 2.0
        {
            warn!("heart is larger than the canvas; edges will be clipped");
        }

        let points = StationaryPointSets::build(&config, rng);
        let frames: Vec<Vec<Particle>> = (0..config.frame_count)
            .map(|f| frame_particles_for(&config, &points, f, rng))
            .collect();

        info!(
            "precomputed {} frames from {} stationary points",
            frames.len(),
            points.len()
        );
        Ok(Self { config, points, frames })
    }

    /// Particles for any frame index; wraps around (negatives too), so the
    /// animation loops forever.
    pub fn frame_particles(&self, index: i64) -> &[Particle] {
        // frames.len() >= 1, checked by validate()
        let i = index.rem_euclid(self.frames.len() as i64) as usize;
        &self.frames[i]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn points(&self) -> &StationaryPointSets {
        &self.points
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }
}
