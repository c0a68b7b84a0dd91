//! Internal Force Sampler
//!
//! Discretizes the beam into 100 uniformly spaced stations and evaluates the
//! internal shear force and bending moment at each by summing everything at
//! or left of the cut:
//!
//! - `V(x) = Σ R_v (non-fixed, position ≤ x) - Σ load force up to x`
//! - `M(x) = Σ R_v·(x - position) - Σ W_partial·(x - centroid_partial) + Σ ±M_applied`
//!
//! Fixed-support reactions are deliberately excluded from the running sums:
//! the wall is the external boundary of the free body, not an internal cut
//! condition, and including it would double-count the support. This is what
//! makes shear and moment vanish at the free end of a cantilever.
//!
//! Both samplers are pure functions of `(Beam, reactions)`; resampling an
//! unchanged beam reproduces the sequences bit for bit.

use serde::{Deserialize, Serialize};

use crate::analysis::reactions::Reaction;
use crate::model::{Beam, SupportKind};

/// Number of sample stations over `[0, length]`, inclusive of both ends
pub const SAMPLE_COUNT: usize = 100;

/// One sample of an internal force diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position along the beam
    pub position: f64,
    /// Shear force or bending moment at that position
    pub value: f64,
}

/// The uniformly spaced sample stations `x_i = i·L/99`
pub fn stations(length: f64) -> Vec<f64> {
    (0..SAMPLE_COUNT)
        .map(|i| length * i as f64 / (SAMPLE_COUNT - 1) as f64)
        .collect()
}

/// Internal shear force at a cut position
pub fn shear_at(beam: &Beam, reactions: &[Reaction], x: f64) -> f64 {
    let mut shear = 0.0;

    for reaction in qualifying_reactions(beam, reactions, x) {
        shear += reaction.vertical_force;
    }

    for load in &beam.loads {
        if let Some((force, _)) = load.resultant_up_to(x) {
            shear -= force;
        }
    }

    shear
}

/// Internal bending moment at a cut position
pub fn moment_at(beam: &Beam, reactions: &[Reaction], x: f64) -> f64 {
    let mut moment = 0.0;

    for reaction in qualifying_reactions(beam, reactions, x) {
        moment += reaction.vertical_force * (x - reaction.position);
    }

    for load in &beam.loads {
        if let Some((force, centroid)) = load.resultant_up_to(x) {
            moment -= force * (x - centroid);
        }
        // Applied moments step the diagram once the cut passes them
        if let crate::model::Load::Moment { position, .. } = load {
            if *position <= x {
                moment += load.signed_moment();
            }
        }
    }

    moment
}

/// Sample the shear diagram at the 100 standard stations
pub fn sample_shear(beam: &Beam, reactions: &[Reaction]) -> Vec<DiagramPoint> {
    stations(beam.length)
        .into_iter()
        .map(|x| DiagramPoint {
            position: x,
            value: shear_at(beam, reactions, x),
        })
        .collect()
}

/// Sample the moment diagram at the 100 standard stations
pub fn sample_moment(beam: &Beam, reactions: &[Reaction]) -> Vec<DiagramPoint> {
    stations(beam.length)
        .into_iter()
        .map(|x| DiagramPoint {
            position: x,
            value: moment_at(beam, reactions, x),
        })
        .collect()
}

/// Linearly interpolate a sampled diagram at an arbitrary position.
///
/// Positions outside the sampled range clamp to the nearest end value.
pub fn interpolate(points: &[DiagramPoint], x: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    if x <= points[0].position {
        return points[0].value;
    }
    if x >= points[points.len() - 1].position {
        return points[points.len() - 1].value;
    }

    for pair in points.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if x >= left.position && x <= right.position {
            let width = right.position - left.position;
            if width <= f64::EPSILON {
                return left.value;
            }
            let t = (x - left.position) / width;
            return left.value + t * (right.value - left.value);
        }
    }

    points[points.len() - 1].value
}

/// Non-fixed reactions at or left of the cut. The wall of a cantilever is
/// the free body boundary and never enters the internal sums.
fn qualifying_reactions<'a>(
    beam: &'a Beam,
    reactions: &'a [Reaction],
    x: f64,
) -> impl Iterator<Item = &'a Reaction> {
    reactions.iter().filter(move |r| {
        r.position <= x
            && beam
                .supports
                .iter()
                .find(|s| s.id == r.support_id)
                .map(|s| s.kind != SupportKind::Fixed)
                .unwrap_or(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::reactions::solve;
    use crate::model::{Beam, Load, MomentDirection, Support};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn diagrams(beam: &Beam) -> (Vec<DiagramPoint>, Vec<DiagramPoint>) {
        let reactions = solve(beam).unwrap();
        (
            sample_shear(beam, &reactions),
            sample_moment(beam, &reactions),
        )
    }

    #[test]
    fn test_station_grid() {
        let xs = stations(9.9);
        assert_eq!(xs.len(), SAMPLE_COUNT);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[99], 9.9);
        assert_relative_eq!(xs[1], 0.1);
    }

    #[test]
    fn test_cantilever_tip_load_diagrams() {
        // L=3 fixed at 3, P=5 at x=0: V = -5 everywhere, M = -5x
        let beam = Beam::new(3.0)
            .with_support(Support::fixed(3.0))
            .with_load(Load::point(5.0, 0.0));
        let (shear, moment) = diagrams(&beam);

        for point in &shear {
            assert_abs_diff_eq!(point.value, -5.0, epsilon = 1e-9);
        }
        for point in &moment {
            assert_abs_diff_eq!(point.value, -5.0 * point.position, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(moment[0].value, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moment[99].value, -15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_uniform_load_diagrams() {
        // L=5 fixed at 5, w=20: V = -20x, M = -10x^2
        let beam = Beam::new(5.0)
            .with_support(Support::fixed(5.0))
            .with_load(Load::uniform(20.0, 0.0, 5.0));
        let (shear, moment) = diagrams(&beam);
        let reactions = solve(&beam).unwrap();

        for point in &shear {
            assert_abs_diff_eq!(point.value, -20.0 * point.position, epsilon = 1e-9);
        }
        for point in &moment {
            assert_abs_diff_eq!(
                point.value,
                -10.0 * point.position * point.position,
                epsilon = 1e-9
            );
        }
        assert_abs_diff_eq!(moment_at(&beam, &reactions, 2.5), -62.5, epsilon = 1e-9);
    }

    #[test]
    fn test_simply_supported_point_load_diagrams() {
        // L=10, P=20 at midspan: V = +10 left of the load, -10 right of it,
        // M peaks at 50
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(20.0, 5.0));
        let (shear, moment) = diagrams(&beam);

        for point in &shear {
            if point.position < 5.0 {
                assert_abs_diff_eq!(point.value, 10.0, epsilon = 1e-9);
            } else if point.position < 10.0 {
                assert_abs_diff_eq!(point.value, -10.0, epsilon = 1e-9);
            }
        }
        // The far reaction closes the diagram at the right end
        assert_abs_diff_eq!(shear[99].value, 0.0, epsilon = 1e-9);
        let peak = moment
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        // Stations straddle x=5, so the sampled peak sits just off 50
        assert!(peak > 49.0 && peak <= 50.0 + 1e-9);
        assert_abs_diff_eq!(moment[0].value, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment[99].value, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_applied_moment_closes_at_far_support() {
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::moment(40.0, 4.0, MomentDirection::Counterclockwise));
        let (shear, moment) = diagrams(&beam);

        // Constant shear from the reaction couple, closing at the far support
        for point in &shear {
            if point.position < 10.0 {
                assert_abs_diff_eq!(point.value, -4.0, epsilon = 1e-9);
            }
        }
        assert_abs_diff_eq!(shear[99].value, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment[0].value, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment[99].value, 0.0, epsilon = 1e-9);

        // Step of +40 across the load position
        let reactions = solve(&beam).unwrap();
        let before = moment_at(&beam, &reactions, 3.999_999);
        let after = moment_at(&beam, &reactions, 4.0);
        assert_abs_diff_eq!(after - before, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_distributed_matches_point_sequences() {
        let point = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(20.0, 5.0));
        let degenerate = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::uniform(20.0, 5.0, 5.0));

        let (vs_p, ms_p) = diagrams(&point);
        let (vs_d, ms_d) = diagrams(&degenerate);
        for (a, b) in vs_p.iter().zip(&vs_d) {
            assert_abs_diff_eq!(a.value, b.value, epsilon = 1e-12);
        }
        for (a, b) in ms_p.iter().zip(&ms_d) {
            assert_abs_diff_eq!(a.value, b.value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sampling_is_idempotent() {
        let beam = Beam::new(8.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(8.0))
            .with_load(Load::trapezoidal(5.0, 15.0, 1.0, 7.0));
        let reactions = solve(&beam).unwrap();
        let first = sample_moment(&beam, &reactions);
        let second = sample_moment(&beam, &reactions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_interpolate() {
        let points = vec![
            DiagramPoint {
                position: 0.0,
                value: 0.0,
            },
            DiagramPoint {
                position: 2.0,
                value: 10.0,
            },
        ];
        assert_relative_eq!(interpolate(&points, 1.0), 5.0);
        assert_relative_eq!(interpolate(&points, -1.0), 0.0);
        assert_relative_eq!(interpolate(&points, 3.0), 10.0);
    }
}
