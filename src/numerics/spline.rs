//! numerics::spline — 1-D interpolating splines with explicit extrapolation.
//!
//! Purpose
//! -------
//! Fit zero-smoothing (interpolating) splines through sampled data so that a
//! function known on an irregular grid can be resampled onto another grid.
//! This is the resampling step of the strain-correction pipeline, where the
//! amplitude and unwrapped phase of the correction kernel are moved from the
//! calibration frequencies onto FFT bin frequencies.
//!
//! Key behaviors
//! -------------
//! - [`SplineDegree::Linear`] (default) is piecewise linear through the
//!   knots; in-domain points go through `interp1d`. [`SplineDegree::Cubic`] is a C² cubic with not-a-knot end
//!   conditions, which is the interpolating cubic FITPACK produces with
//!   zero smoothing.
//! - Points outside `[x₀, x_{n−1}]` follow [`Extrapolation`]: continue the
//!   end segments (default), return zero, clamp to the boundary value, or
//!   fail with [`NumericsError::OutOfDomain`].
//! - [`InterpolatingSpline::evaluate`] reports how many evaluation points
//!   fell below and above the fitted domain via [`DomainCoverage`], so
//!   callers can warn about extrapolated values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Knot abscissae are finite and strictly increasing; ordinates are
//!   finite. Both are checked in [`InterpolatingSpline::fit`].
//! - Linear splines need ≥ 2 knots, cubic splines ≥ 4.
//!
//! Conventions
//! -----------
//! - Pieces are stored as knot values plus second derivatives `M_i`
//!   (all zero for the linear spline); evaluation uses the standard
//!   second-derivative form of the cubic on each interval.

use std::str::FromStr;

use interp1d::Interp1d;

use crate::numerics::errors::{NumericsError, NumericsResult};

/// Polynomial degree of the interpolating spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineDegree {
    #[default]
    Linear,
    Cubic,
}

impl SplineDegree {
    /// Polynomial order `k` (1 or 3).
    pub fn order(self) -> usize {
        match self {
            SplineDegree::Linear => 1,
            SplineDegree::Cubic => 3,
        }
    }

    /// Minimum number of knots required to fit this degree.
    pub fn min_points(self) -> usize {
        self.order() + 1
    }

    /// Map a numeric order to a supported degree.
    pub fn from_order(k: usize) -> NumericsResult<SplineDegree> {
        match k {
            1 => Ok(SplineDegree::Linear),
            3 => Ok(SplineDegree::Cubic),
            _ => Err(NumericsError::InvalidOption {
                name: k.to_string(),
                reason: "Supported spline orders are 1 (linear) and 3 (cubic).",
            }),
        }
    }
}

impl FromStr for SplineDegree {
    type Err = NumericsError;

    /// Parse a degree (case-insensitive): `"linear"`/`"1"` or `"cubic"`/`"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "1" => Ok(SplineDegree::Linear),
            "cubic" | "3" => Ok(SplineDegree::Cubic),
            _ => Err(NumericsError::InvalidOption {
                name: s.to_string(),
                reason: "Valid spline degrees are 'linear' (1) or 'cubic' (3).",
            }),
        }
    }
}

/// Behavior for evaluation points outside the fitted domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Continue the first/last polynomial piece.
    #[default]
    Extrapolate,
    /// Return 0.0.
    Zeros,
    /// Fail with [`NumericsError::OutOfDomain`].
    Raise,
    /// Return the boundary knot value.
    Const,
}

impl FromStr for Extrapolation {
    type Err = NumericsError;

    /// Parse an extrapolation mode (case-insensitive). Accepts the names
    /// `"extrapolate"`, `"zeros"`, `"raise"`, `"const"` (alias `"clamp"`)
    /// or the integer codes `"0"`–`"3"` in the same order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extrapolate" | "0" => Ok(Extrapolation::Extrapolate),
            "zeros" | "1" => Ok(Extrapolation::Zeros),
            "raise" | "2" => Ok(Extrapolation::Raise),
            "const" | "clamp" | "3" => Ok(Extrapolation::Const),
            _ => Err(NumericsError::InvalidOption {
                name: s.to_string(),
                reason: "Valid extrapolation modes are 'extrapolate', 'zeros', 'raise', or 'const'.",
            }),
        }
    }
}

/// Spline configuration: degree and out-of-domain policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplineOptions {
    pub degree: SplineDegree,
    pub extrapolation: Extrapolation,
}

impl SplineOptions {
    pub fn new(degree: SplineDegree, extrapolation: Extrapolation) -> SplineOptions {
        SplineOptions { degree, extrapolation }
    }
}

/// Count of evaluation points that fell outside the fitted domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainCoverage {
    /// Points strictly below the first knot.
    pub below: usize,
    /// Points strictly above the last knot.
    pub above: usize,
}

impl DomainCoverage {
    /// `true` when every evaluation point was inside the fitted domain.
    pub fn is_within(&self) -> bool {
        self.below == 0 && self.above == 0
    }
}

/// Values of a spline on an evaluation grid, plus domain coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineEvaluation {
    pub values: Vec<f64>,
    pub coverage: DomainCoverage,
}

/// InterpolatingSpline — zero-smoothing spline through `(x_i, y_i)`.
///
/// Fields
/// ------
/// - `x`, `y`: knots (strictly increasing `x`).
/// - `m`: second derivatives at the knots; identically zero for
///   [`SplineDegree::Linear`].
/// - `options`: degree and extrapolation policy used at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatingSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    m: Vec<f64>,
    options: SplineOptions,
}

impl InterpolatingSpline {
    /// Fit an interpolating spline through `(x, y)`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `&[f64]`
    ///   Strictly increasing, finite abscissae.
    /// - `y`: `&[f64]`
    ///   Finite ordinates, same length as `x`.
    /// - `options`: [`SplineOptions`]
    ///   Degree and extrapolation policy.
    ///
    /// Errors
    /// ------
    /// - `NumericsError::LengthMismatch` if `x.len() != y.len()`.
    /// - `NumericsError::InsufficientPoints` if fewer than
    ///   `degree.min_points()` knots are given.
    /// - `NumericsError::NonFinite` for NaN/±inf knots.
    /// - `NumericsError::NonMonotonic` if `x` is not strictly increasing;
    ///   checked before any coefficient is computed.
    /// - `NumericsError::SingularSystem` if the cubic system has a zero pivot.
    pub fn fit(x: &[f64], y: &[f64], options: SplineOptions) -> NumericsResult<InterpolatingSpline> {
        if x.len() != y.len() {
            return Err(NumericsError::LengthMismatch { expected: x.len(), actual: y.len() });
        }
        let needed = options.degree.min_points();
        if x.len() < needed {
            return Err(NumericsError::InsufficientPoints { needed, actual: x.len() });
        }
        for (index, &value) in x.iter().chain(y).enumerate() {
            if !value.is_finite() {
                return Err(NumericsError::NonFinite { index: index % x.len(), value });
            }
        }
        for (index, pair) in x.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(NumericsError::NonMonotonic {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        let m = match options.degree {
            SplineDegree::Linear => vec![0.0; x.len()],
            SplineDegree::Cubic => not_a_knot_second_derivatives(x, y)?,
        };

        Ok(InterpolatingSpline { x: x.to_vec(), y: y.to_vec(), m, options })
    }

    /// Fitted domain `[x₀, x_{n−1}]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn options(&self) -> SplineOptions {
        self.options
    }

    /// Evaluate at a single point, applying the extrapolation policy.
    pub fn value_at(&self, t: f64) -> NumericsResult<f64> {
        let eval = self.evaluate(&[t])?;
        Ok(eval.values[0])
    }

    /// Evaluate on a grid and count out-of-domain points.
    ///
    /// Errors
    /// ------
    /// - `NumericsError::OutOfDomain` for the first offending point when the
    ///   policy is [`Extrapolation::Raise`].
    /// - `NumericsError::Interpolator` if the linear table cannot be built.
    pub fn evaluate(&self, grid: &[f64]) -> NumericsResult<SplineEvaluation> {
        match self.options.degree {
            SplineDegree::Linear => {
                let table = Interp1d::new_unsorted(self.x.clone(), self.y.clone())
                    .map_err(|err| NumericsError::Interpolator { reason: format!("{err:?}") })?;
                self.evaluate_with(grid, |t| table.interpolate(t))
            }
            SplineDegree::Cubic => self.evaluate_with(grid, |t| self.piece_value(t)),
        }
    }

    /// Apply the extrapolation policy around `inside`, which is only called
    /// for points in `[x₀, x_{n−1}]`.
    fn evaluate_with<F>(&self, grid: &[f64], inside: F) -> NumericsResult<SplineEvaluation>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper) = self.domain();
        let mut coverage = DomainCoverage::default();
        let mut values = Vec::with_capacity(grid.len());
        for &t in grid {
            if t >= lower && t <= upper {
                values.push(inside(t));
                continue;
            }
            if t < lower {
                coverage.below += 1;
            } else {
                coverage.above += 1;
            }
            let value = match self.options.extrapolation {
                Extrapolation::Extrapolate => self.piece_value(t),
                Extrapolation::Zeros => 0.0,
                Extrapolation::Const => {
                    if t < lower {
                        self.y[0]
                    } else {
                        self.y[self.y.len() - 1]
                    }
                }
                Extrapolation::Raise => {
                    return Err(NumericsError::OutOfDomain { x: t, lower, upper });
                }
            };
            values.push(value);
        }
        Ok(SplineEvaluation { values, coverage })
    }

    /// Value of the polynomial piece that owns `t` (end pieces extend
    /// beyond the domain).
    fn piece_value(&self, t: f64) -> f64 {
        let n = self.x.len();
        let i = self.x.partition_point(|&v| v <= t).clamp(1, n - 1) - 1;
        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - t;
        let b = t - x0;
        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}

/// Second derivatives of the not-a-knot cubic through `(x, y)` (n ≥ 4).
///
/// The interior equations
///   h_{i−1} M_{i−1} + 2(h_{i−1} + h_i) M_i + h_i M_{i+1} = 6(d_i − d_{i−1})
/// are closed by continuity of the third derivative at x₁ and x_{n−2},
/// which eliminates M₀ and M_{n−1} and leaves a tridiagonal system in
/// M₁…M_{n−2}.
fn not_a_knot_second_derivatives(x: &[f64], y: &[f64]) -> NumericsResult<Vec<f64>> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let d: Vec<f64> = y.windows(2).zip(&h).map(|(w, hi)| (w[1] - w[0]) / hi).collect();

    let size = n - 2;
    let mut sub = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size];
    let mut rhs = vec![0.0; size];
    for k in 0..size {
        let i = k + 1;
        sub[k] = h[i - 1];
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        sup[k] = h[i];
        rhs[k] = 6.0 * (d[i] - d[i - 1]);
    }

    // M₀ = ((h₀ + h₁) M₁ − h₀ M₂) / h₁
    let (h0, h1) = (h[0], h[1]);
    diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
    sup[0] = (h1 * h1 - h0 * h0) / h1;

    // M_{n−1} = ((a + b) M_{n−2} − b M_{n−3}) / a, a = h_{n−3}, b = h_{n−2}
    let (a, b) = (h[n - 3], h[n - 2]);
    diag[size - 1] = (a + b) * (2.0 * a + b) / a;
    sub[size - 1] = (a * a - b * b) / a;

    let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * interior[0] - h0 * interior[1]) / h1);
    m.extend_from_slice(&interior);
    m.push(((a + b) * interior[size - 1] - b * interior[size - 2]) / a);
    Ok(m)
}

/// Thomas algorithm; `sub[0]` and `sup[last]` are ignored.
fn solve_tridiagonal(
    sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64],
) -> NumericsResult<Vec<f64>> {
    let size = diag.len();
    let mut c = vec![0.0; size];
    let mut r = vec![0.0; size];

    let mut pivot = diag[0];
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(NumericsError::SingularSystem { row: 0 });
    }
    c[0] = sup[0] / pivot;
    r[0] = rhs[0] / pivot;
    for k in 1..size {
        pivot = diag[k] - sub[k] * c[k - 1];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(NumericsError::SingularSystem { row: k });
        }
        c[k] = if k + 1 < size { sup[k] / pivot } else { 0.0 };
        r[k] = (rhs[k] - sub[k] * r[k - 1]) / pivot;
    }

    let mut out = r;
    for k in (0..size - 1).rev() {
        out[k] -= c[k] * out[k + 1];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Knot reproduction and linearity of the linear spline.
    // - Exact reproduction of cubic polynomials by the not-a-knot cubic,
    //   including extrapolation with the end pieces.
    // - Each `Extrapolation` policy and the `DomainCoverage` counts.
    // - Fit-time validation (length, count, finiteness, monotonicity).
    // - `FromStr` parsing of degrees and extrapolation modes.
    // -------------------------------------------------------------------------

    fn linear(extrapolation: Extrapolation) -> InterpolatingSpline {
        let opts = SplineOptions::new(SplineDegree::Linear, extrapolation);
        InterpolatingSpline::fit(&[1.0, 2.0, 4.0], &[10.0, 20.0, 0.0], opts)
            .expect("valid knots should fit")
    }

    #[test]
    // Purpose
    // -------
    // Verify the linear spline passes through every knot and is linear
    // between knots.
    //
    // Given
    // -----
    // - Knots (1, 10), (2, 20), (4, 0).
    //
    // Expect
    // ------
    // - Exact knot values; 15 at x = 1.5; 10 at x = 3.
    fn linear_spline_reproduces_knots_and_interpolates() {
        // Arrange
        let spline = linear(Extrapolation::Extrapolate);

        // Act
        let eval = spline.evaluate(&[1.0, 1.5, 2.0, 3.0, 4.0]).unwrap();

        // Assert
        assert_abs_diff_eq!(eval.values[0], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval.values[2], 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval.values[4], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval.values[1], 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval.values[3], 10.0, epsilon = 1e-12);
        assert!(eval.coverage.is_within());
    }

    #[test]
    // Purpose
    // -------
    // Verify the linear table and the extrapolated end segments agree on a
    // dense irregular grid, so the curve is continuous at the domain edges.
    //
    // Given
    // -----
    // - Knots (0, 1), (0.5, 3), (2, −1), (2.25, 0) and a grid on [−1, 3]
    //   with step 1/8 that hits both domain ends exactly.
    //
    // Expect
    // ------
    // - Every value equals the chord of the owning (or end) interval.
    // - `value_at` matches `evaluate` point by point.
    fn linear_spline_matches_chords_inside_and_outside_domain() {
        // Arrange
        let x = [0.0, 0.5, 2.0, 2.25];
        let y = [1.0, 3.0, -1.0, 0.0];
        let spline = InterpolatingSpline::fit(&x, &y, SplineOptions::default()).unwrap();
        let chord = |t: f64| {
            let i = x.partition_point(|&v| v <= t).clamp(1, x.len() - 1) - 1;
            y[i] + (y[i + 1] - y[i]) * (t - x[i]) / (x[i + 1] - x[i])
        };
        let grid: Vec<f64> = (0..=32).map(|k| -1.0 + k as f64 * 0.125).collect();

        // Act
        let eval = spline.evaluate(&grid).unwrap();

        // Assert
        for (t, v) in grid.iter().zip(&eval.values) {
            assert_abs_diff_eq!(*v, chord(*t), epsilon = 1e-12);
            assert_abs_diff_eq!(spline.value_at(*t).unwrap(), *v, epsilon = 1e-15);
        }
        assert_eq!(eval.coverage, DomainCoverage { below: 8, above: 6 });
    }

    #[test]
    // Purpose
    // -------
    // Verify each extrapolation policy outside the fitted domain.
    //
    // Given
    // -----
    // - Linear spline on [1, 4]; points 0 and 5.
    //
    // Expect
    // ------
    // - Extrapolate: 0 and −10 (end segments continued).
    // - Zeros: 0 and 0. Const: 10 and 0.
    // - Raise: OutOfDomain for x = 0.
    fn extrapolation_policies_behave_as_documented() {
        // Arrange
        let grid = [0.0, 5.0];

        // Act
        let ext = linear(Extrapolation::Extrapolate).evaluate(&grid).unwrap();
        let zeros = linear(Extrapolation::Zeros).evaluate(&grid).unwrap();
        let clamp = linear(Extrapolation::Const).evaluate(&grid).unwrap();
        let raise = linear(Extrapolation::Raise).evaluate(&grid);

        // Assert
        assert_abs_diff_eq!(ext.values[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ext.values[1], -10.0, epsilon = 1e-12);
        assert_eq!(zeros.values, vec![0.0, 0.0]);
        assert_eq!(clamp.values, vec![10.0, 0.0]);
        assert_eq!(ext.coverage, DomainCoverage { below: 1, above: 1 });
        match raise {
            Err(NumericsError::OutOfDomain { x, lower, upper }) => {
                assert_eq!((x, lower, upper), (0.0, 1.0, 4.0));
            }
            other => panic!("expected OutOfDomain, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the not-a-knot cubic reproduces a cubic polynomial exactly on
    // an irregular grid, inside and outside the domain.
    //
    // Given
    // -----
    // - p(x) = x³ − 2x² + 0.5x + 1 sampled at 6 irregular knots.
    //
    // Expect
    // ------
    // - Spline equals p at mid-points and at extrapolated points.
    fn cubic_spline_reproduces_cubic_polynomial() {
        // Arrange
        let p = |x: f64| x.powi(3) - 2.0 * x.powi(2) + 0.5 * x + 1.0;
        let x = [0.0, 0.5, 1.3, 2.0, 3.1, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| p(v)).collect();
        let opts = SplineOptions::new(SplineDegree::Cubic, Extrapolation::Extrapolate);
        let spline = InterpolatingSpline::fit(&x, &y, opts).unwrap();

        // Act
        let grid = [-0.5, 0.25, 0.9, 1.65, 2.55, 3.55, 4.5];
        let eval = spline.evaluate(&grid).unwrap();

        // Assert
        for (t, v) in grid.iter().zip(&eval.values) {
            assert_abs_diff_eq!(*v, p(*t), epsilon = 1e-9);
        }
        assert_eq!(eval.coverage, DomainCoverage { below: 1, above: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Verify the minimal cubic (4 knots) is the interpolating cubic.
    //
    // Given
    // -----
    // - p(x) = 2x³ − x sampled at x = 0, 1, 2, 3.
    //
    // Expect
    // ------
    // - Spline equals p at x = 2.5.
    fn cubic_spline_with_four_knots_is_the_interpolating_cubic() {
        // Arrange
        let p = |x: f64| 2.0 * x.powi(3) - x;
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|&v| p(v)).collect();
        let opts = SplineOptions::new(SplineDegree::Cubic, Extrapolation::Extrapolate);

        // Act
        let spline = InterpolatingSpline::fit(&x, &y, opts).unwrap();

        // Assert
        assert_abs_diff_eq!(spline.value_at(2.5).unwrap(), p(2.5), epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Ensure fitting rejects malformed knots before computing coefficients.
    //
    // Given
    // -----
    // - Mismatched lengths, one knot, a NaN, a repeated abscissa, and three
    //   knots for a cubic.
    //
    // Expect
    // ------
    // - LengthMismatch, InsufficientPoints, NonFinite, NonMonotonic, and
    //   InsufficientPoints respectively.
    fn fit_rejects_malformed_knots() {
        // Arrange
        let lin = SplineOptions::default();
        let cubic = SplineOptions::new(SplineDegree::Cubic, Extrapolation::Extrapolate);

        // Act / Assert
        assert!(matches!(
            InterpolatingSpline::fit(&[1.0, 2.0], &[1.0], lin),
            Err(NumericsError::LengthMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            InterpolatingSpline::fit(&[1.0], &[1.0], lin),
            Err(NumericsError::InsufficientPoints { needed: 2, actual: 1 })
        ));
        assert!(matches!(
            InterpolatingSpline::fit(&[1.0, 2.0], &[1.0, f64::NAN], lin),
            Err(NumericsError::NonFinite { index: 1, .. })
        ));
        assert!(matches!(
            InterpolatingSpline::fit(&[1.0, 2.0, 2.0], &[1.0, 2.0, 3.0], lin),
            Err(NumericsError::NonMonotonic { index: 2, .. })
        ));
        assert!(matches!(
            InterpolatingSpline::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], cubic),
            Err(NumericsError::InsufficientPoints { needed: 4, actual: 3 })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify string parsing of degrees and extrapolation modes.
    //
    // Given
    // -----
    // - "Cubic", "1", "clamp", "2", and "quintic".
    //
    // Expect
    // ------
    // - Cubic, Linear, Const, Raise, and an InvalidOption error.
    fn option_strings_parse_into_closed_enums() {
        assert_eq!("Cubic".parse::<SplineDegree>().unwrap(), SplineDegree::Cubic);
        assert_eq!("1".parse::<SplineDegree>().unwrap(), SplineDegree::Linear);
        assert_eq!("clamp".parse::<Extrapolation>().unwrap(), Extrapolation::Const);
        assert_eq!("2".parse::<Extrapolation>().unwrap(), Extrapolation::Raise);
        assert!(matches!(
            "quintic".parse::<SplineDegree>(),
            Err(NumericsError::InvalidOption { .. })
        ));
        assert!(SplineDegree::from_order(5).is_err());
    }
}
