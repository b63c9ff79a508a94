use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on the number of grid points.
pub const DEFAULT_MAX_POINTS: usize = 5000;

/// Slack added to the end of the domain while stepping by repeated addition.
const STEP_SLACK: f64 = 1e-12;

/// Points closer than this to the domain end are replaced by the end itself.
const SNAP_TOL: f64 = 1e-8;

/// How grid points are generated between `t0` and `t_end`.
///
/// Both policies produce a strictly increasing grid that starts at `t0` and
/// ends exactly at `t_end`. A single grid is built per comparison, so every
/// integrator in that comparison always uses the same policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPolicy {
    /// Step by repeated addition of `h`, then snap or append `t_end`.
    ///
    /// The final interval may be shorter than `h`.
    #[default]
    SnapLast,

    /// Use `n = round((t_end - t0) / h)` steps at `t0 + i * h`, forcing the
    /// last point to `t_end`.
    ///
    /// The final interval may be shorter or longer than `h` by up to `h / 2`.
    ExactCount,
}

/// Configuration for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub max_points: usize,
    pub policy: GridPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            policy: GridPolicy::default(),
        }
    }
}

/// Errors that can occur while building a [`TimeGrid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("domain end {t_end} must be finite and greater than start {t0}")]
    InvalidDomain { t0: f64, t_end: f64 },

    #[error("estimated number of points ({estimated}) exceeds the maximum allowed ({max_points})")]
    TooLarge { estimated: f64, max_points: usize },
}

/// Ordered, strictly increasing evaluation points from `t0` to `t_end`.
///
/// A grid is never empty: the first point is `t0` and the last is exactly
/// `t_end`. Integrators use the actual spacing between consecutive points,
/// which need not be uniform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeGrid(Vec<f64>);

impl TimeGrid {
    /// Checks that `step` and `[t0, t_end]` describe a buildable grid.
    ///
    /// A step must be large enough to move every point of the domain, so
    /// steps at or below the floating-point spacing of `t0` or `t_end` are
    /// rejected along with non-positive ones.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidStep`] if `step` is not positive and finite, or
    ///   is too small to advance across the domain.
    /// - [`GridError::InvalidDomain`] if `t_end <= t0` or either is not finite.
    pub fn validate(t0: f64, t_end: f64, step: f64) -> Result<(), GridError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep { step });
        }
        if !t0.is_finite() || !t_end.is_finite() || t_end <= t0 {
            return Err(GridError::InvalidDomain { t0, t_end });
        }
        if step <= f64::EPSILON * t0.abs().max(t_end.abs()) {
            return Err(GridError::InvalidStep { step });
        }
        Ok(())
    }

    /// Builds a grid over `[t0, t_end]` with nominal step `step`.
    ///
    /// The point count is estimated as `floor((t_end - t0) / step) + 2`
    /// before any allocation happens, and no policy ever produces more points
    /// than that estimate.
    ///
    /// # Errors
    ///
    /// - Any error of [`TimeGrid::validate`].
    /// - [`GridError::TooLarge`] if the estimate exceeds `config.max_points`.
    pub fn build(t0: f64, t_end: f64, step: f64, config: &GridConfig) -> Result<Self, GridError> {
        Self::validate(t0, t_end, step)?;

        let estimated = ((t_end - t0) / step).floor() + 2.0;
        #[allow(clippy::cast_precision_loss)]
        let max_points = config.max_points as f64;
        if estimated > max_points {
            return Err(GridError::TooLarge {
                estimated,
                max_points: config.max_points,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let capacity = estimated as usize;

        let points = match config.policy {
            GridPolicy::SnapLast => snap_last(t0, t_end, step, capacity),
            GridPolicy::ExactCount => exact_count(t0, t_end, step),
        };

        Ok(Self(points))
    }

    /// Returns the grid points.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of points (always at least two).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first point, `t0`.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.0[0]
    }

    /// Returns the last point, `t_end`.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Returns the number of intervals between points.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.0.len() - 1
    }

    /// Iterates over `(t_n, h_n)` pairs, where `h_n = t_{n+1} - t_n`.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1] - w[0]))
    }

    /// Evaluates `f` at every grid point.
    pub fn sample<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.0.iter().map(|&t| f(t)).collect()
    }
}

fn snap_last(t0: f64, t_end: f64, step: f64, capacity: usize) -> Vec<f64> {
    let mut points = Vec::with_capacity(capacity);
    let limit = t_end + STEP_SLACK;

    // Leave one slot of the estimate for `t_end`.
    let mut t = t0;
    while t < limit && points.len() + 1 < capacity {
        points.push(t);
        t += step;
    }

    // Drop points that landed on (or just past) the end, keeping t0. The
    // tolerance shrinks with the step so short domains keep their interior.
    let tol = SNAP_TOL.min(0.5 * step);
    while points.len() > 1 && points[points.len() - 1] >= t_end - tol {
        points.pop();
    }
    points.push(t_end);
    points
}

fn exact_count(t0: f64, t_end: f64, step: f64) -> Vec<f64> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (((t_end - t0) / step).round() as usize).max(1);

    #[allow(clippy::cast_precision_loss)]
    let mut points: Vec<f64> = (0..=n).map(|i| t0 + i as f64 * step).collect();
    points[n] = t_end;
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn build(t0: f64, t_end: f64, step: f64) -> TimeGrid {
        TimeGrid::build(t0, t_end, step, &GridConfig::default()).expect("valid grid")
    }

    fn assert_well_formed(grid: &TimeGrid, t0: f64, t_end: f64) {
        assert_eq!(grid.start(), t0);
        assert_eq!(grid.end(), t_end);
        assert!(
            grid.points().windows(2).all(|w| w[0] < w[1]),
            "grid is not strictly increasing: {:?}",
            grid.points()
        );
    }

    #[test]
    fn uniform_grid_ends_exactly_at_t_end() {
        let grid = build(0.0, 1.0, 0.1);

        assert_eq!(grid.len(), 11);
        assert_eq!(grid.num_steps(), 10);
        assert_well_formed(&grid, 0.0, 1.0);
    }

    #[test]
    fn appends_short_final_interval() {
        let grid = build(0.0, 1.0, 0.3);

        assert_eq!(grid.len(), 5);
        assert_well_formed(&grid, 0.0, 1.0);

        let (_, last_h) = grid.intervals().last().unwrap();
        assert_relative_eq!(last_h, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn holds_for_many_domains() {
        let cases = [
            (0.0, 1.0, 0.1),
            (0.0, 5.0, 0.1),
            (-2.0, 3.0, 0.07),
            (1.5, 2.0, 0.5),
            (0.0, 1e-9, 1.0),
            (10.0, 10.3, 0.1),
            (0.0, 3.0, 1.0 / 3.0),
        ];

        for policy in [GridPolicy::SnapLast, GridPolicy::ExactCount] {
            let config = GridConfig {
                policy,
                ..GridConfig::default()
            };
            for (t0, t_end, step) in cases {
                let grid = TimeGrid::build(t0, t_end, step, &config).expect("valid grid");
                assert_well_formed(&grid, t0, t_end);
            }
        }
    }

    #[test]
    fn exact_count_rounds_the_step_count() {
        let config = GridConfig {
            policy: GridPolicy::ExactCount,
            ..GridConfig::default()
        };

        let grid = TimeGrid::build(0.0, 1.0, 0.4, &config).unwrap();
        assert_eq!(grid.points(), &[0.0, 0.4, 0.8, 1.0]);

        let grid = TimeGrid::build(0.0, 1.0, 0.1, &config).unwrap();
        assert_eq!(grid.len(), 11);
    }

    #[test]
    fn rejects_non_positive_step() {
        let config = GridConfig::default();

        assert!(matches!(
            TimeGrid::build(0.0, 1.0, 0.0, &config),
            Err(GridError::InvalidStep { .. })
        ));
        assert!(matches!(
            TimeGrid::build(0.0, 1.0, -0.1, &config),
            Err(GridError::InvalidStep { .. })
        ));
        assert!(matches!(
            TimeGrid::build(0.0, 1.0, f64::NAN, &config),
            Err(GridError::InvalidStep { .. })
        ));
    }

    #[test]
    fn rejects_empty_or_reversed_domain() {
        let config = GridConfig::default();

        assert!(matches!(
            TimeGrid::build(1.0, 1.0, 0.1, &config),
            Err(GridError::InvalidDomain { .. })
        ));
        assert!(matches!(
            TimeGrid::build(2.0, 1.0, 0.1, &config),
            Err(GridError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn rejects_steps_below_floating_point_resolution() {
        // Each estimate is far under the cap, but adding the step to a point
        // of the domain would leave it unchanged.
        let cases = [
            (1.0, 1.0 + f64::EPSILON, 1e-17),
            (1e17, 1e17 + 1024.0, 1.0),
            (-1e17, -1e17 + 1024.0, 1.0),
        ];

        for policy in [GridPolicy::SnapLast, GridPolicy::ExactCount] {
            let config = GridConfig {
                policy,
                ..GridConfig::default()
            };
            for (t0, t_end, step) in cases {
                assert!(
                    matches!(
                        TimeGrid::build(t0, t_end, step, &config),
                        Err(GridError::InvalidStep { .. })
                    ),
                    "{policy:?} accepted step {step} on [{t0}, {t_end}]"
                );
            }
        }
    }

    #[test]
    fn fine_steps_far_from_zero_stay_increasing() {
        let (t0, t_end, step) = (1e6, 1e6 + 1e-6, 1e-9);

        for policy in [GridPolicy::SnapLast, GridPolicy::ExactCount] {
            let config = GridConfig {
                policy,
                ..GridConfig::default()
            };
            let grid = TimeGrid::build(t0, t_end, step, &config).expect("valid grid");

            assert_well_formed(&grid, t0, t_end);
            assert!(grid.len() <= 1002);
        }
    }

    #[test]
    fn domains_shorter_than_the_snap_tolerance_keep_their_interior() {
        let grid = build(0.0, 5e-9, 1e-9);

        assert_eq!(grid.len(), 6);
        assert_well_formed(&grid, 0.0, 5e-9);
        for (_, h) in grid.intervals() {
            assert_relative_eq!(h, 1e-9, max_relative = 1e-6);
        }
    }

    #[test]
    fn snap_last_never_exceeds_the_estimate() {
        for (t0, t_end, step) in [(0.0, 1.0, 0.1), (0.0, 3.0, 1.0 / 3.0), (0.0, 0.7, 0.1)] {
            let grid = build(t0, t_end, step);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let estimated = (((t_end - t0) / step).floor() + 2.0) as usize;
            assert!(grid.len() <= estimated, "{} > {estimated}", grid.len());
        }
    }

    #[test]
    fn rejects_grids_over_the_cap() {
        let config = GridConfig {
            max_points: 5000,
            ..GridConfig::default()
        };

        let err = TimeGrid::build(0.0, 10_000.0, 0.001, &config).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { max_points: 5000, .. }));
    }

    #[test]
    fn cap_is_inclusive() {
        // floor(1 / 0.5) + 2 = 4 estimated points.
        let config = GridConfig {
            max_points: 4,
            ..GridConfig::default()
        };
        assert!(TimeGrid::build(0.0, 1.0, 0.5, &config).is_ok());

        let config = GridConfig {
            max_points: 3,
            ..GridConfig::default()
        };
        assert!(TimeGrid::build(0.0, 1.0, 0.5, &config).is_err());
    }

    #[test]
    fn samples_a_function_on_the_grid() {
        let grid = build(0.0, 1.0, 0.5);
        assert_eq!(grid.sample(|t| 2.0 * t), vec![0.0, 1.0, 2.0]);
    }
}
