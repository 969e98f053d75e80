//! Chi-square test of homogeneity for categorical columns.

use std::collections::BTreeMap;

use drift_spi::{DistributionTest, FeatureType, Result, TestOutcome};

use crate::samples::check_samples;

/// Chi-square test on the 2 x k contingency table of category counts.
///
/// Values are compared by exact equality, so categories are expected to be
/// integer codes such as one-hot indicators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquare;

impl ChiSquare {
    pub fn new() -> Self {
        Self
    }
}

impl DistributionTest for ChiSquare {
    fn name(&self) -> &'static str {
        "Chi-Square"
    }

    fn feature_type(&self) -> FeatureType {
        FeatureType::Categorical
    }

    fn compare(&self, reference: &[f64], production: &[f64]) -> Result<TestOutcome> {
        check_samples(reference, production)?;

        let mut table: BTreeMap<u64, [usize; 2]> = BTreeMap::new();
        for &v in reference {
            table.entry(category_key(v)).or_default()[0] += 1;
        }
        for &v in production {
            table.entry(category_key(v)).or_default()[1] += 1;
        }

        if table.len() < 2 {
            return Ok(TestOutcome::new(0.0, 1.0));
        }

        let totals = [reference.len() as f64, production.len() as f64];
        let grand = totals[0] + totals[1];
        let mut statistic = 0.0;
        for counts in table.values() {
            let column = (counts[0] + counts[1]) as f64;
            for (observed, total) in counts.iter().zip(totals) {
                let expected = total * column / grand;
                statistic += (*observed as f64 - expected).powi(2) / expected;
            }
        }

        let df = (table.len() - 1) as f64;
        Ok(TestOutcome::new(statistic, chi_square_sf(statistic, df)))
    }
}

fn category_key(v: f64) -> u64 {
    // -0.0 and 0.0 are the same category
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

/// Upper tail of the chi-square distribution with `df` degrees of freedom.
pub fn chi_square_sf(statistic: f64, df: f64) -> f64 {
    if statistic <= 0.0 || df <= 0.0 {
        return 1.0;
    }
    gamma_q(df / 2.0, statistic / 2.0)
}

/// Regularized upper incomplete gamma function `Q(a, x)`.
pub fn gamma_q(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    if x < a + 1.0 {
        1.0 - gamma_p_series(a, x)
    } else {
        gamma_q_continued_fraction(a, x)
    }
}

const MAX_ITER: usize = 500;
const EPS: f64 = 1e-14;
const TINY: f64 = 1e-300;

fn gamma_p_series(a: f64, x: f64) -> f64 {
    let mut ap = a;
    let mut term = 1.0 / a;
    let mut sum = term;
    for _ in 0..MAX_ITER {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * EPS {
            break;
        }
    }
    (sum.ln() - x + a * x.ln() - ln_gamma(a)).exp().clamp(0.0, 1.0)
}

// Modified Lentz evaluation.
fn gamma_q_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    (h.ln() - x + a * x.ln() - ln_gamma(a)).exp().clamp(0.0, 1.0)
}

/// Natural log of the gamma function (Lanczos approximation, g = 7).
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut acc = COEFFS[0];
    for (i, &c) in COEFFS.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + 7.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}
