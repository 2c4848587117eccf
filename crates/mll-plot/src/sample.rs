//! Evenly spaced sample grids over an interval.

/// Returns `count` sample points covering `[min, max]`.
///
/// Points are spaced `(max - min) / count` apart starting at `min`. The
/// last point is forced to exactly `max` so repeated-addition rounding
/// never leaves the right edge of a plot short.
pub fn samples(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = (max - min) / count as f64;
    let mut xs: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
    xs[count - 1] = max;
    xs
}

/// Maps a scalar function over a sample grid.
pub fn evaluate<F>(xs: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    xs.iter().map(|&x| f(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_starts_at_min_and_ends_at_max() {
        let xs = samples(0.0, 1.0, 5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn interior_points_use_the_plain_step() {
        // step = (1 - 0) / 5; interior values accumulate rounding, the
        // endpoint does not.
        let xs = samples(0.0, 1.0, 5);
        let step = 1.0 / 5.0;
        for (i, &x) in xs.iter().take(4).enumerate() {
            assert!((x - step * i as f64).abs() < 1e-12, "point {i} was {x}");
        }
    }

    #[test]
    fn endpoint_is_exact_even_when_rounding_drifts() {
        // 0.2 * 3 lands on 0.6000000000000001 in f64; only the forced
        // endpoint is safe to compare exactly.
        let xs = samples(0.0, 1.0, 5);
        assert!((xs[3] - 0.6).abs() < 1e-12);
        assert!(xs[3] != 0.6);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn empty_grid_for_zero_count() {
        assert_eq!(samples(0.0, 1.0, 0), Vec::<f64>::new());
    }

    #[test]
    fn single_point_grid_is_just_max() {
        assert_eq!(samples(-2.0, 3.0, 1), vec![3.0]);
    }

    #[test]
    fn descending_interval_steps_downward() {
        let xs = samples(1.0, 0.0, 4);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[3], 0.0);
        assert!(xs[1] > xs[2]);
    }

    #[test]
    fn evaluate_maps_in_order() {
        let xs = samples(0.0, 3.0, 3);
        let ys = evaluate(&xs, |x| x * x);
        assert_eq!(ys.len(), 3);
        assert_eq!(ys[2], 9.0);
    }
}
