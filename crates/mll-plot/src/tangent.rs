//! Tangent lines recovered from pointwise derivative data.
//!
//! A generated function is differentiated numerically elsewhere; all this
//! module needs is the function value and the derivative value at one
//! point. From those two numbers it rebuilds the touching line in
//! slope-intercept form so it can be sampled over any interval.

/// A straight line in slope-intercept form, `y(x) = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TangentLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The tangent of a function at `x0`, given the function value and the
    /// derivative value there.
    ///
    /// The line passes through `(x0, value)` with gradient `derivative`,
    /// so the intercept is `value - x0 * derivative`.
    pub fn at_point(derivative: f64, value: f64, x0: f64) -> Self {
        Self {
            slope: derivative,
            intercept: value - x0 * derivative,
        }
    }

    /// Evaluates the line at `x`.
    pub fn y(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluates the line over a whole sample grid.
    pub fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.y(x)).collect()
    }
}

/// Evaluates `slope * x + intercept` over a sample grid.
pub fn line(xs: &[f64], slope: f64, intercept: f64) -> Vec<f64> {
    TangentLine::new(slope, intercept).sample(xs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::samples;
    use pretty_assertions::assert_eq;

    #[test]
    fn recovers_intercept_from_point_data() {
        // f(3) = 5 with f'(3) = 2 gives y = 2x - 1.
        let tangent = TangentLine::at_point(2.0, 5.0, 3.0);
        assert_eq!(tangent.slope, 2.0);
        assert_eq!(tangent.intercept, -1.0);
        assert_eq!(tangent.sample(&[0.0, 3.0, 6.0]), vec![-1.0, 5.0, 11.0]);
    }

    #[test]
    fn passes_through_the_touch_point() {
        let tangent = TangentLine::at_point(-1.5, 4.0, 2.0);
        assert_eq!(tangent.y(2.0), 4.0);
    }

    #[test]
    fn samples_along_a_grid() {
        let tangent = TangentLine::at_point(2.0, 5.0, 3.0);
        let xs = samples(0.0, 6.0, 3);
        assert_eq!(xs, vec![0.0, 2.0, 6.0]);
        assert_eq!(tangent.sample(&xs), vec![-1.0, 3.0, 11.0]);
    }

    #[test]
    fn zero_derivative_gives_a_horizontal_line() {
        let tangent = TangentLine::at_point(0.0, 7.0, 123.0);
        assert_eq!(tangent.y(-40.0), 7.0);
        assert_eq!(tangent.y(40.0), 7.0);
    }

    #[test]
    fn line_matches_manual_evaluation() {
        let xs = [0.0, 1.0, 2.0];
        assert_eq!(line(&xs, 3.0, 1.0), vec![1.0, 4.0, 7.0]);
    }
}
