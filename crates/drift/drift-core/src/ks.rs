//! Two-sample Kolmogorov-Smirnov test.

use drift_spi::{DistributionTest, FeatureType, Result, TestOutcome};

use crate::samples::check_samples;

/// Largest sample size for which the exact p-value is computed.
pub const EXACT_MAX_SAMPLE: usize = 10_000;

/// Two-sided two-sample Kolmogorov-Smirnov test.
///
/// @algorithm KolmogorovSmirnov
/// @complexity O((n + m) log(n + m)) statistic, O(n * m) exact p-value
/// @since 0.1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct KolmogorovSmirnov;

impl KolmogorovSmirnov {
    pub fn new() -> Self {
        Self
    }
}

impl DistributionTest for KolmogorovSmirnov {
    fn name(&self) -> &'static str {
        "Kolmogorov-Smirnov"
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Numerical
    }

    fn compare(&self, reference: &[f64], production: &[f64]) -> Result<TestOutcome> {
        check_samples(reference, production)?;
        let statistic = ks_statistic(reference, production);
        let (n, m) = (reference.len(), production.len());
        let p_value = if n.max(m) <= EXACT_MAX_SAMPLE {
            ks_exact_p_value(statistic, n, m)
        } else {
            ks_asymptotic_p_value(statistic, n, m)
        };
        Ok(TestOutcome::new(statistic, p_value))
    }
}

/// Maximum distance between the two empirical CDFs.
///
/// Tied values advance both samples together before the distance is taken.
/// Values are ordered with `f64::total_cmp`, so NaN sorts last and the scan
/// always terminates.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);

    let (n, m) = (a.len() as f64, b.len() as f64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut d = 0.0f64;

    while i < a.len() && j < b.len() {
        let v = if a[i].total_cmp(&b[j]).is_le() { a[i] } else { b[j] };
        while i < a.len() && a[i].total_cmp(&v).is_le() {
            i += 1;
        }
        while j < b.len() && b[j].total_cmp(&v).is_le() {
            j += 1;
        }
        d = d.max((i as f64 / n - j as f64 / m).abs());
    }
    d
}

/// Exact `P(D >= d)` under the null, by counting monotone lattice paths.
///
/// A path from (0, 0) to (n, m) picks each ordering of the pooled sample with
/// equal probability; the statistic is the largest `|i/n - j/m|` it visits.
pub fn ks_exact_p_value(d: f64, n: usize, m: usize) -> f64 {
    if n == 0 || m == 0 {
        return 1.0;
    }
    // Scaled to integers: |i*m - j*n| >= bound marks a point outside the band.
    let bound = (d * (n * m) as f64).round() as i64;
    if bound <= 0 {
        return 1.0;
    }
    let (ni, mi) = (n as i64, m as i64);
    let outside = |i: usize, j: usize| (i as i64 * mi - j as i64 * ni).abs() >= bound;

    // row[j] holds the probability of reaching (i, j) without leaving the band.
    let mut row = vec![0.0f64; m + 1];
    row[0] = 1.0;
    for j in 1..=m {
        let step = (m - j + 1) as f64 / (n + m - j + 1) as f64;
        row[j] = if outside(0, j) { 0.0 } else { row[j - 1] * step };
    }
    for i in 1..=n {
        let remaining = n + m - i + 1;
        row[0] = if outside(i, 0) {
            0.0
        } else {
            row[0] * (n - i + 1) as f64 / remaining as f64
        };
        for j in 1..=m {
            if outside(i, j) {
                row[j] = 0.0;
                continue;
            }
            let remaining = (n + m - i - j + 1) as f64;
            let from_below = row[j] * (n - i + 1) as f64 / remaining;
            let from_left = row[j - 1] * (m - j + 1) as f64 / remaining;
            row[j] = from_below + from_left;
        }
    }
    (1.0 - row[m]).clamp(0.0, 1.0)
}

/// Asymptotic p-value with Stephens' small-sample correction.
pub fn ks_asymptotic_p_value(d: f64, n: usize, m: usize) -> f64 {
    if d <= 0.0 {
        return 1.0;
    }
    let en = ((n * m) as f64 / (n + m) as f64).sqrt();
    kolmogorov_sf((en + 0.12 + 0.11 / en) * d)
}

/// Survival function of the Kolmogorov distribution.
pub fn kolmogorov_sf(lambda: f64) -> f64 {
    const EPS_TERM: f64 = 1e-3;
    const EPS_SUM: f64 = 1e-8;

    // Below this the tail differs from 1 by less than 1e-10.
    if lambda < 0.2 {
        return 1.0;
    }
    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut previous = 0.0f64;
    for k in 1..=100 {
        let kf = f64::from(k);
        let term = fac * (a2 * kf * kf).exp();
        sum += term;
        if term.abs() <= EPS_TERM * previous || term.abs() <= EPS_SUM * sum {
            return sum.clamp(0.0, 1.0);
        }
        fac = -fac;
        previous = term.abs();
    }
    // Series fails to converge only for tiny lambda, where the tail is 1.
    1.0
}
