/// Value producers — the sources a template placeholder is filled from.
///
/// A producer is a plain value, not a closure: building one never touches
/// a random source. Randomness is only drawn when `produce` is called.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::template::TemplateError;

/// Where a placeholder's candidate values come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueProducer {
    /// A fixed list copied out of a catalog table at assembly time.
    Catalog(Vec<String>),
    /// One integer drawn uniformly from `min..=max`.
    Range { min: i64, max: i64 },
    /// One integer from `min, min + step, ...` not exceeding `max`.
    SteppedRange { min: i64, max: i64, step: i64 },
}

impl ValueProducer {
    /// Build a catalog producer from a static table.
    pub fn catalog(items: &[&str]) -> Self {
        Self::Catalog(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self::Range { min, max }
    }

    pub fn stepped(min: i64, max: i64, step: i64) -> Self {
        Self::SteppedRange { min, max, step }
    }

    /// True for producers that consume randomness when invoked.
    pub fn is_random(&self) -> bool {
        !matches!(self, Self::Catalog(_))
    }

    /// Number of distinct values this producer can yield.
    pub fn cardinality(&self) -> u64 {
        match self {
            Self::Catalog(items) => items.len() as u64,
            // The full i64 span has 2^64 values, which saturates
            Self::Range { min, max } if min <= max => max.abs_diff(*min).saturating_add(1),
            Self::SteppedRange { min, max, step } if min <= max && *step > 0 => {
                (max.abs_diff(*min) / step.unsigned_abs()).saturating_add(1)
            }
            _ => 0,
        }
    }

    /// Check that the producer can yield at least one value.
    pub fn validate(&self, token: &str) -> Result<(), TemplateError> {
        match self {
            Self::Catalog(items) if items.is_empty() => {
                Err(TemplateError::EmptyProducer(token.to_string()))
            }
            Self::Catalog(_) => Ok(()),
            Self::Range { min, max } if min > max => Err(TemplateError::InvalidRange {
                min: *min,
                max: *max,
                step: 1,
            }),
            Self::Range { .. } => Ok(()),
            Self::SteppedRange { min, max, step } if min > max || *step <= 0 => {
                Err(TemplateError::InvalidRange {
                    min: *min,
                    max: *max,
                    step: *step,
                })
            }
            Self::SteppedRange { .. } => Ok(()),
        }
    }

    /// Invoke the producer.
    ///
    /// Catalog producers return a fresh copy of their whole list; numeric
    /// producers return a single stringified integer.
    pub fn produce<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>, TemplateError> {
        match self {
            Self::Catalog(items) => Ok(items.clone()),
            Self::Range { min, max } => {
                self.validate("range")?;
                Ok(vec![rng.gen_range(*min..=*max).to_string()])
            }
            Self::SteppedRange { min, max, step } => {
                self.validate("stepped range")?;
                let steps = max.abs_diff(*min) / step.unsigned_abs();
                let k = rng.gen_range(0..=steps);
                // min + k * step never exceeds max, so it fits back in i64
                let value = i128::from(*min) + i128::from(k) * i128::from(*step);
                Ok(vec![value.to_string()])
            }
        }
    }

    /// Draw `count` distinct values for one placeholder.
    ///
    /// Returns fewer than `count` values only if the producer cannot
    /// supply that many.
    pub fn pick<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, TemplateError> {
        let values = self.produce(rng)?;
        Ok(values.choose_multiple(rng, count).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn catalog_returns_full_copy() {
        let producer = ValueProducer::catalog(&["Kraken", "Megalodon"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut values = producer.produce(&mut rng).unwrap();
        assert_eq!(values, vec!["Kraken".to_string(), "Megalodon".to_string()]);

        // Mutating the returned list leaves the producer untouched
        values.push("Skeleton Sloop".to_string());
        assert_eq!(producer.cardinality(), 2);
    }

    #[test]
    fn range_stays_inclusive() {
        let producer = ValueProducer::range(2, 5);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let values = producer.produce(&mut rng).unwrap();
            assert_eq!(values.len(), 1);
            let n: i64 = values[0].parse().unwrap();
            assert!((2..=5).contains(&n), "out of range: {}", n);
            seen.insert(n);
        }
        // Both bounds are reachable
        assert!(seen.contains(&2));
        assert!(seen.contains(&5));
    }

    #[test]
    fn stepped_range_hits_only_steps() {
        let producer = ValueProducer::stepped(100_000, 1_000_000, 100_000);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let values = producer.produce(&mut rng).unwrap();
            let n: i64 = values[0].parse().unwrap();
            assert!((100_000..=1_000_000).contains(&n));
            assert_eq!(n % 100_000, 0);
        }
    }

    #[test]
    fn stepped_range_with_uneven_span_never_exceeds_max() {
        let producer = ValueProducer::stepped(1, 10, 4);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let n: i64 = producer.produce(&mut rng).unwrap()[0].parse().unwrap();
            assert!([1, 5, 9].contains(&n), "unexpected step value {}", n);
        }
        assert_eq!(producer.cardinality(), 3);
    }

    #[test]
    fn invalid_ranges_rejected() {
        assert!(ValueProducer::range(5, 2).validate("INT").is_err());
        assert!(ValueProducer::stepped(1, 10, 0).validate("INT").is_err());
        assert!(ValueProducer::stepped(1, 10, -2).validate("INT").is_err());
        assert!(ValueProducer::Catalog(Vec::new()).validate("FISH").is_err());

        let mut rng = StdRng::seed_from_u64(0);
        assert!(ValueProducer::range(5, 2).produce(&mut rng).is_err());
    }

    #[test]
    fn full_width_ranges_do_not_overflow() {
        let widest = ValueProducer::range(i64::MIN, i64::MAX);
        assert!(widest.validate("INT").is_ok());
        assert_eq!(widest.cardinality(), u64::MAX);

        let stepped = ValueProducer::stepped(-10, i64::MAX, 1);
        assert!(stepped.validate("INT").is_ok());
        assert_eq!(stepped.cardinality(), i64::MAX as u64 + 11);

        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..200 {
            let n: i64 = stepped.produce(&mut rng).unwrap()[0].parse().unwrap();
            assert!(n >= -10);
            assert!(widest.produce(&mut rng).unwrap()[0].parse::<i64>().is_ok());
        }

        let coarse = ValueProducer::stepped(i64::MIN, i64::MAX, i64::MAX);
        assert_eq!(coarse.cardinality(), 3);
        for _ in 0..50 {
            let n: i64 = coarse.produce(&mut rng).unwrap()[0].parse().unwrap();
            assert!([i64::MIN, -1, i64::MAX - 1].contains(&n), "unexpected {}", n);
        }
    }

    #[test]
    fn only_numeric_producers_are_random() {
        assert!(!ValueProducer::catalog(&["a"]).is_random());
        assert!(ValueProducer::range(1, 3).is_random());
        assert!(ValueProducer::stepped(5_000, 50_000, 5_000).is_random());
    }

    #[test]
    fn pick_single_from_catalog() {
        let producer = ValueProducer::catalog(&["Ritual", "Search"]);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = producer.pick(1, &mut rng).unwrap();
        assert_eq!(picked.len(), 1);
        assert!(picked[0] == "Ritual" || picked[0] == "Search");
    }
}
