// Heart curve math + the radial moves we apply to points on it.
// Visual outcomes:
// - `heart_point` traces the outline.
// - `scatter_inside` softens it into an edge and a filled body.
// - `shrink` nudges points off the outline (curve spread, halo ring).
// - `pulse` is the per-frame "breathing".

use crate::types::Point;
use rand::Rng;
use std::f64::consts::PI;

/// Reach of the unit curve from its origin along each axis.
pub const CURVE_HALF_WIDTH: f64 = 16.0;
pub const CURVE_HALF_HEIGHT: f64 = 17.0;
/// Upper bound on the unit curve's distance from its origin.
#[cfg(test)]
pub const CURVE_EXTENT: f64 = 23.5;

/// Sample the heart outline at parameter `t`, scaled by `enlarge` and moved to `center`.
/// Coordinates come back truncated toward zero, like pixels.
pub fn heart_point(t: f64, enlarge: f64, center: Point) -> Point {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());

    Point::new(
        (x * enlarge + center.x).trunc(),
        (y * enlarge + center.y).trunc(),
    )
}

/// Pull a point toward `center` by a log-distributed amount per axis.
/// Most results stay close to `p`; a long tail reaches far inside.
pub fn scatter_inside<R: Rng + ?Sized>(p: Point, beta: f64, center: Point, rng: &mut R) -> Point {
    // 1 - [0,1) gives (0,1], so ln never sees zero
    let rx = -beta * (1.0 - rng.gen_range(0.0f64..1.0)).ln();
    let ry = -beta * (1.0 - rng.gen_range(0.0f64..1.0)).ln();
    Point::new(p.x - rx * (p.x - center.x), p.y - ry * (p.y - center.y))
}

#[inline]
fn dist_sq(p: Point, center: Point) -> f64 {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    dx * dx + dy * dy
}

/// Inverse-square radial move along the center ray, `ratio / d` pixels long.
/// Positive `ratio` moves the point away from `center`, negative toward it.
/// A point sitting exactly on `center` has no direction and is returned as is.
pub fn shrink(p: Point, ratio: f64, center: Point) -> Point {
    let d2 = dist_sq(p, center);
    if d2 == 0.0 {
        return p;
    }
    let range = -1.0 / d2;
    Point::new(
        p.x - ratio * range * (p.x - center.x),
        p.y - ratio * range * (p.y - center.y),
    )
}

/// Pulse strength for a frame; one full beat every 20 frames.
#[inline]
pub fn pulse_ratio(frame: usize) -> f64 {
    800.0 * (frame as f64 / 10.0 * PI).sin()
}

/// Move a stationary point for one frame: inverse-square radial displacement
/// by `ratio` plus a -1/0/+1 jitter on each axis.
pub fn pulse<R: Rng + ?Sized>(p: Point, ratio: f64, center: Point, rng: &mut R) -> Point {
    let d2 = dist_sq(p, center);
    let weight = if d2 == 0.0 { 0.0 } else { 1.0 / d2 };
    let dx = ratio * weight * (p.x - center.x) + rng.gen_range(-1..=1) as f64;
    let dy = ratio * weight * (p.y - center.y) + rng.gen_range(-1..=1) as f64;
    Point::new(p.x - dx, p.y - dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const CENTER: Point = Point::new(320.0, 240.0);

    #[test]
    fn curve_stays_within_extent() {
        let enlarge = 11.0;
        for i in 0..10_000 {
            let t = i as f64 / 10_000.0 * 2.0 * PI;
            let p = heart_point(t, enlarge, CENTER);
            let r = ((p.x - CENTER.x).powi(2) + (p.y - CENTER.y).powi(2)).sqrt();
            // +2 covers truncation on both axes
            assert!(r <= enlarge * CURVE_EXTENT + 2.0, "t={t} r={r}");
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }

    #[test]
    fn curve_known_points() {
        // t = 0: top cusp just above the center, t = pi: tip below it
        assert_eq!(heart_point(0.0, 1.0, CENTER), Point::new(320.0, 235.0));
        let tip = heart_point(PI, 1.0, CENTER);
        assert!((tip.y - 257.0).abs() <= 1.0);
        assert!((tip.x - 320.0).abs() <= 1.0);
    }

    #[test]
    fn scatter_moves_toward_center() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p = Point::new(420.0, 140.0);
        for _ in 0..1000 {
            let q = scatter_inside(p, 0.15, CENTER, &mut rng);
            assert!(q.x <= p.x);
            assert!(q.y >= p.y);
            assert!(q.x.is_finite() && q.y.is_finite());
        }
    }

    #[test]
    fn shrink_signs() {
        let p = Point::new(420.0, 240.0);
        // d = 100: ratio -1000 moves 10px in, ratio 500 moves 5px out
        let inward = shrink(p, -1000.0, CENTER);
        assert!((inward.x - 410.0).abs() < 1e-9);
        let outward = shrink(p, 500.0, CENTER);
        assert!((outward.x - 425.0).abs() < 1e-9);
        assert_eq!(outward.y, 240.0);
    }

    #[test]
    fn center_is_not_a_singularity() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(shrink(CENTER, 10.0, CENTER), CENTER);
        let q = pulse(CENTER, 800.0, CENTER, &mut rng);
        assert!((q.x - CENTER.x).abs() <= 1.0 && (q.y - CENTER.y).abs() <= 1.0);
    }

    #[test]
    fn pulse_ratio_period_is_twenty() {
        assert!(pulse_ratio(0).abs() < 1e-9);
        assert!((pulse_ratio(5) - 800.0).abs() < 1e-9);
        assert!((pulse_ratio(3) - pulse_ratio(23)).abs() < 1e-9);
    }

    #[test]
    fn pulse_moves_ratio_over_distance() {
        let mut rng = SmallRng::seed_from_u64(5);
        // d = 100: ratio 800 is an 8px move along the center ray, plus 1px jitter
        let p = Point::new(420.0, 240.0);
        for _ in 0..200 {
            let inward = pulse(p, 800.0, CENTER, &mut rng);
            assert!((inward.x - 412.0).abs() <= 1.0, "x={}", inward.x);
            assert!((inward.y - 240.0).abs() <= 1.0);

            let outward = pulse(p, -800.0, CENTER, &mut rng);
            assert!((outward.x - 428.0).abs() <= 1.0, "x={}", outward.x);
            assert!((outward.y - 240.0).abs() <= 1.0);
        }
        // same on the vertical axis, above the center
        let q = pulse(Point::new(320.0, 140.0), 800.0, CENTER, &mut rng);
        assert!((q.y - 148.0).abs() <= 1.0, "y={}", q.y);
    }

    #[test]
    fn pulse_without_ratio_is_only_jitter() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p = Point::new(400.0, 200.0);
        for _ in 0..200 {
            let q = pulse(p, 0.0, CENTER, &mut rng);
            assert!((q.x - p.x).abs() <= 1.0);
            assert!((q.y - p.y).abs() <= 1.0);
        }
    }
}
