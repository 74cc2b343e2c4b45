//! Smooth curves through station coordinates.
//!
//! Used when no real track trace is wanted: a natural cubic spline is fitted
//! to latitude and longitude separately, both parameterised by cumulative
//! chord length, and sampled at evenly spaced parameter values.

use crate::domain::Coord;

/// Default number of samples per input point.
pub const DEFAULT_SAMPLES_PER_POINT: usize = 10;

/// Interpolate a smooth path through `coords`.
///
/// Consecutive duplicate points are dropped first. With fewer than two
/// distinct points the input is returned unchanged. Otherwise the result
/// has `distinct_points * samples_per_point` samples (at least two), its
/// first and last samples are the first and last input points, and with
/// exactly two points it is the straight line between them.
pub fn smooth_path(coords: &[Coord], samples_per_point: usize) -> Vec<Coord> {
    let mut points: Vec<Coord> = Vec::with_capacity(coords.len());
    for &c in coords {
        if points.last() != Some(&c) {
            points.push(c);
        }
    }
    if points.len() < 2 {
        return coords.to_vec();
    }

    let mut t = Vec::with_capacity(points.len());
    t.push(0.0);
    for pair in points.windows(2) {
        let last = t[t.len() - 1];
        t.push(last + pair[0].planar_distance(&pair[1]));
    }

    let lats: Vec<f64> = points.iter().map(|c| c.lat).collect();
    let lons: Vec<f64> = points.iter().map(|c| c.lon).collect();
    let lat_spline = NaturalSpline::fit(&t, &lats);
    let lon_spline = NaturalSpline::fit(&t, &lons);

    let total = t[t.len() - 1];
    let count = (points.len() * samples_per_point).max(2);
    (0..count)
        .map(|j| {
            let x = if j == count - 1 {
                total
            } else {
                total * j as f64 / (count - 1) as f64
            };
            Coord::new(lat_spline.eval(x), lon_spline.eval(x))
        })
        .collect()
}

/// Natural cubic spline through `(x[i], y[i])`, `x` strictly increasing.
struct NaturalSpline<'a> {
    x: &'a [f64],
    y: &'a [f64],
    /// Second derivative at each knot; zero at both ends.
    m: Vec<f64>,
}

impl<'a> NaturalSpline<'a> {
    fn fit(x: &'a [f64], y: &'a [f64]) -> Self {
        let n = x.len();
        let mut m = vec![0.0; n];

        if n > 2 {
            // Tridiagonal system for the interior second derivatives,
            // solved with the Thomas algorithm.
            let interior = n - 2;
            let mut diag = vec![0.0; interior];
            let mut upper = vec![0.0; interior];
            let mut rhs = vec![0.0; interior];

            for k in 0..interior {
                let i = k + 1;
                let h0 = x[i] - x[i - 1];
                let h1 = x[i + 1] - x[i];
                diag[k] = 2.0 * (h0 + h1);
                upper[k] = h1;
                rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);
            }

            for k in 1..interior {
                let lower = x[k + 1] - x[k];
                let w = lower / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }

            m[interior] = rhs[interior - 1] / diag[interior - 1];
            for k in (0..interior - 1).rev() {
                m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
            }
        }

        Self { x, y, m }
    }

    fn eval(&self, at: f64) -> f64 {
        let n = self.x.len();
        let k = self
            .x
            .partition_point(|&xi| xi <= at)
            .saturating_sub(1)
            .min(n - 2);

        let (x0, x1) = (self.x[k], self.x[k + 1]);
        let (y0, y1) = (self.y[k], self.y[k + 1]);
        let (m0, m1) = (self.m[k], self.m[k + 1]);
        let h = x1 - x0;
        let a = x1 - at;
        let b = at - x0;

        m0 * a * a * a / (6.0 * h)
            + m1 * b * b * b / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}
