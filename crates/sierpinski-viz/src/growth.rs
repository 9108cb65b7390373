//! Asymptotic growth functions and their dominance ratios.
//!
//! Data side of the growth plots: sampling grids, the classic complexity
//! classes, and the share each term of `9n^2 + 99n + 999 log n + 9999`
//! contributes to the whole.

/// Returns `num` values `10^e` with `e` evenly spaced over `[start, stop]`.
///
/// Both endpoints are included. `num == 1` yields `[10^start]`.
pub fn logspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![10f64.powf(start)],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    // Pin the last exponent so the endpoint is not off by an ulp.
                    let e = if i == num - 1 { stop } else { start + step * i as f64 };
                    10f64.powf(e)
                })
                .collect()
        }
    }
}

/// Common complexity classes, slowest-growing first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthFunction {
    Constant,
    Logarithmic,
    SquareRoot,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential2,
    Exponential3,
}

impl GrowthFunction {
    /// Every function, in legend order.
    pub const ALL: [GrowthFunction; 9] = [
        GrowthFunction::Constant,
        GrowthFunction::Logarithmic,
        GrowthFunction::SquareRoot,
        GrowthFunction::Linear,
        GrowthFunction::Linearithmic,
        GrowthFunction::Quadratic,
        GrowthFunction::Cubic,
        GrowthFunction::Exponential2,
        GrowthFunction::Exponential3,
    ];

    /// Evaluates the function at `n` (natural logarithm for `log`).
    pub fn eval(self, n: f64) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => n.ln(),
            Self::SquareRoot => n.sqrt(),
            Self::Linear => n,
            Self::Linearithmic => n * n.ln(),
            Self::Quadratic => n * n,
            Self::Cubic => n * n * n,
            Self::Exponential2 => 2f64.powf(n),
            Self::Exponential3 => 3f64.powf(n),
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "f1(n) = 1",
            Self::Logarithmic => "f2(n) = log(n)",
            Self::SquareRoot => "f3(n) = sqrt(n)",
            Self::Linear => "f4(n) = n",
            Self::Linearithmic => "f5(n) = n log(n)",
            Self::Quadratic => "f6(n) = n^2",
            Self::Cubic => "f7(n) = n^3",
            Self::Exponential2 => "f8(n) = 2^n",
            Self::Exponential3 => "f9(n) = 3^n",
        }
    }
}

/// One term of `9n^2 + 99n + 999 log n + 9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantTerm {
    Quadratic,
    Linear,
    Logarithmic,
    Constant,
}

impl DominantTerm {
    pub const ALL: [DominantTerm; 4] = [
        DominantTerm::Quadratic,
        DominantTerm::Linear,
        DominantTerm::Logarithmic,
        DominantTerm::Constant,
    ];

    /// Value of this term alone at `n`.
    pub fn term(self, n: f64) -> f64 {
        match self {
            Self::Quadratic => 9.0 * n * n,
            Self::Linear => 99.0 * n,
            Self::Logarithmic => 999.0 * n.ln(),
            Self::Constant => 9999.0,
        }
    }

    /// Whole polynomial at `n`.
    pub fn total(n: f64) -> f64 {
        Self::ALL.iter().map(|t| t.term(n)).sum()
    }

    /// Share of the total contributed by this term, in `[0, 1]` for `n >= 1`.
    pub fn ratio(self, n: f64) -> f64 {
        self.term(n) / Self::total(n)
    }

    /// Legend text for the term's share of the total.
    pub fn label(self) -> &'static str {
        match self {
            Self::Quadratic => "c1(n) = 9n^2 / total",
            Self::Linear => "c2(n) = 99n / total",
            Self::Logarithmic => "c3(n) = 999 log(n) / total",
            Self::Constant => "c4(n) = 9999 / total",
        }
    }
}

/// A labelled run of `(n, value)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Samples `f` at each of `ns`.
    pub fn sample<F>(label: &'static str, ns: &[f64], f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            label,
            points: ns.iter().map(|&n| (n, f(n))).collect(),
        }
    }

    /// Smallest and largest finite, positive value, if any.
    pub fn positive_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, v)| v)
            .filter(|v| v.is_finite() && *v > 0.0)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Samples every [`GrowthFunction`] over `n` in `[1, 100]`.
pub fn growth_series(samples: usize) -> Vec<Series> {
    let ns = logspace(0.0, 2.0, samples);
    GrowthFunction::ALL
        .iter()
        .map(|&f| Series::sample(f.label(), &ns, |n| f.eval(n)))
        .collect()
}

/// Samples every [`DominantTerm`] ratio over `n` in `[1, 10^6]`.
pub fn dominance_series(samples: usize) -> Vec<Series> {
    let ns = logspace(0.0, 6.0, samples);
    DominantTerm::ALL
        .iter()
        .map(|&t| Series::sample(t.label(), &ns, |n| t.ratio(n)))
        .collect()
}

/// Positive value range spanning all of `series`.
pub fn combined_positive_range(series: &[Series]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(Series::positive_range)
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
}

/// Formats a ratio as a percentage with three decimals.
pub fn to_percent(y: f64) -> String {
    format!("{:.3}%", 100.0 * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn logspace_includes_endpoints() {
        let ns = logspace(0.0, 6.0, 100);
        assert_eq!(ns.len(), 100);
        assert_eq!(ns[0], 1.0);
        assert_relative_eq!(ns[99], 1.0e6, max_relative = 1e-12);
        assert!(ns.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn logspace_small_counts() {
        assert!(logspace(0.0, 2.0, 0).is_empty());
        assert_eq!(logspace(2.0, 5.0, 1).len(), 1);
        assert_relative_eq!(logspace(2.0, 5.0, 1)[0], 100.0, max_relative = 1e-12);

        let ns = logspace(0.0, 2.0, 3);
        assert_relative_eq!(ns[1], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn growth_functions_are_ordered_at_large_n() {
        let n = 50.0;
        let values: Vec<f64> = GrowthFunction::ALL.iter().map(|f| f.eval(n)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
    }

    #[test]
    fn growth_functions_at_one() {
        assert_eq!(GrowthFunction::Logarithmic.eval(1.0), 0.0);
        assert_eq!(GrowthFunction::Linearithmic.eval(1.0), 0.0);
        assert_eq!(GrowthFunction::Exponential3.eval(1.0), 3.0);
    }

    #[test]
    fn dominance_ratios_sum_to_one() {
        for n in logspace(0.0, 6.0, 25) {
            let sum: f64 = DominantTerm::ALL.iter().map(|t| t.ratio(n)).sum();
            assert_relative_eq!(sum, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn constant_dominates_small_n_and_quadratic_large_n() {
        assert!(DominantTerm::Constant.ratio(1.0) > 0.9);
        assert!(DominantTerm::Quadratic.ratio(1.0e6) > 0.99);
        assert_eq!(DominantTerm::Logarithmic.ratio(1.0), 0.0);
    }

    #[test]
    fn series_positive_range_skips_zero() {
        let s = Series::sample("log", &[1.0, 10.0, 100.0], f64::ln);
        let (lo, hi) = s.positive_range().unwrap();
        assert_relative_eq!(lo, 10f64.ln());
        assert_relative_eq!(hi, 100f64.ln());

        let empty = Series::sample("zero", &[1.0], |_| 0.0);
        assert_eq!(empty.positive_range(), None);
    }

    #[test]
    fn growth_figure_spans_constant_to_three_to_the_hundred() {
        let series = growth_series(100);
        assert_eq!(series.len(), 9);
        assert!(series.iter().all(|s| s.points.len() == 100));

        // log(n) at the second sample is the smallest positive value.
        let (lo, hi) = combined_positive_range(&series).unwrap();
        assert_relative_eq!(lo, 2.0 / 99.0 * 10f64.ln(), max_relative = 1e-9);
        assert_relative_eq!(hi, 3f64.powi(100), max_relative = 1e-9);
    }

    #[test]
    fn dominance_figure_stays_within_unit_interval() {
        let series = dominance_series(50);
        assert_eq!(series.len(), 4);
        for s in &series {
            assert!(s.points.iter().all(|&(_, v)| (0.0..=1.0).contains(&v)));
        }
    }

    #[test]
    fn percent_has_three_decimals() {
        assert_eq!(to_percent(0.5), "50.000%");
        assert_eq!(to_percent(0.000_123_4), "0.012%");
    }
}
