//! Significance scoring of recurring spike patterns against a chance baseline.

use provenance_core::config::defaults;
use provenance_core::models::PatternAggregate;

/// Scores how unlikely a pattern's recurrence is under a null firing model.
/// Higher means less likely to be chance co-firing; never negative.
pub trait SignificanceModel: Send + Sync {
    fn significance(&self, aggregate: &PatternAggregate, total_events: u64) -> f64;
}

/// Independent-neuron Poisson null model.
///
/// Each spike event in the window matches a k-neuron pattern with probability `p^k`,
/// so the expected count is `λ = total_events · p^k`. The score is
/// `-log10 P(X ≥ count)` for `X ~ Poisson(λ)`.
#[derive(Debug, Clone, Copy)]
pub struct PoissonBaseline {
    firing_probability: f64,
}

impl PoissonBaseline {
    pub fn new(firing_probability: f64) -> Self {
        Self { firing_probability }
    }

    pub fn expected_count(&self, neurons: usize, total_events: u64) -> f64 {
        let k = i32::try_from(neurons).unwrap_or(i32::MAX);
        total_events as f64 * self.firing_probability.powi(k)
    }
}

impl Default for PoissonBaseline {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_BASELINE_FIRING_PROBABILITY)
    }
}

impl SignificanceModel for PoissonBaseline {
    fn significance(&self, aggregate: &PatternAggregate, total_events: u64) -> f64 {
        if aggregate.count == 0 {
            return 0.0;
        }
        let lambda = self
            .expected_count(aggregate.neuron_indices.len(), total_events)
            .max(f64::MIN_POSITIVE);
        let ln_tail = ln_upper_tail(aggregate.count, lambda);
        let score = -ln_tail / std::f64::consts::LN_10;
        if score.is_nan() {
            0.0
        } else {
            score.max(0.0)
        }
    }
}

/// `ln P(X ≥ n)` for `X ~ Poisson(λ)`, n ≥ 1.
fn ln_upper_tail(n: u64, lambda: f64) -> f64 {
    if n as f64 <= lambda {
        // Bulk of the mass: complement of the lower sum.
        let ln_lambda = lambda.ln();
        let mut ln_p = -lambda;
        let mut lower = 0.0;
        for i in 0..n {
            if i > 0 {
                ln_p += ln_lambda - (i as f64).ln();
            }
            lower += ln_p.exp();
        }
        return (1.0 - lower).max(f64::MIN_POSITIVE).ln();
    }

    // Tail: sum term_n · (1 + λ/(n+1) + λ²/((n+1)(n+2)) + ...). Ratios are < 1 here.
    let mut series = 1.0;
    let mut term = 1.0;
    let mut i = n;
    while term > series * 1e-16 && i < n + 100_000 {
        i += 1;
        term *= lambda / i as f64;
        series += term;
    }
    ln_pmf(n, lambda) + series.ln()
}

fn ln_pmf(i: u64, lambda: f64) -> f64 {
    i as f64 * lambda.ln() - lambda - ln_factorial(i)
}

fn ln_factorial(n: u64) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn aggregate(count: u64, neurons: usize) -> PatternAggregate {
        PatternAggregate {
            pattern_hash: "h".to_string(),
            count,
            first_seen: Utc::now(),
            last_seen: Utc::now(),
            population_id: "pop".to_string(),
            neuron_indices: (0..neurons as u32).collect(),
        }
    }

    #[test]
    fn matches_closed_form_for_count_one() {
        // P(X ≥ 1) = 1 - e^{-λ}; λ = 100 · 0.05² = 0.25.
        let model = PoissonBaseline::default();
        let expected = -(1.0 - (-0.25f64).exp()).log10();
        let got = model.significance(&aggregate(1, 2), 100);
        assert!((got - expected).abs() < 1e-9, "{got} vs {expected}");
    }

    #[test]
    fn grows_with_count_and_pattern_size() {
        let model = PoissonBaseline::default();
        let s5 = model.significance(&aggregate(5, 3), 1_000);
        let s10 = model.significance(&aggregate(10, 3), 1_000);
        let s10_wide = model.significance(&aggregate(10, 6), 1_000);
        assert!(s5 > 0.0);
        assert!(s10 > s5);
        assert!(s10_wide > s10);
    }

    #[test]
    fn chance_level_recurrence_scores_near_zero() {
        // One neuron at p = 0.5 over 1000 events: λ = 500, count 400 is unremarkable.
        let model = PoissonBaseline::new(0.5);
        let score = model.significance(&aggregate(400, 1), 1_000);
        assert!((0.0..0.01).contains(&score), "{score}");
    }

    #[test]
    fn extreme_patterns_stay_finite() {
        let model = PoissonBaseline::default();
        let score = model.significance(&aggregate(50, 400), 60);
        assert!(score.is_finite());
        assert!(score > 100.0);
    }
}
