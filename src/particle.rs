//! Particle state: position, velocity, and the personal-best record.

use rand::prelude::*;

use crate::benchmarks::Benchmark;

/// One candidate solution in the search space.
///
/// `position`, `velocity`, and `best_position` always share the same length,
/// the problem dimensionality. `best_value` starts at `f64::INFINITY` so the
/// first evaluation always records a personal best.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current candidate solution.
    pub position: Vec<f64>,
    /// Per-dimension rate of change of position.
    pub velocity: Vec<f64>,
    /// Best position this particle has occupied.
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`.
    pub best_value: f64,
}

impl Particle {
    /// Create a particle with state drawn from the benchmark's initialization
    /// ranges: a real-valued uniform position per dimension (the personal
    /// best starts there too) and an integer-valued uniform velocity per
    /// dimension.
    #[must_use]
    pub fn init(dimension: usize, benchmark: Benchmark, rng: &mut StdRng) -> Self {
        let (pos_lo, pos_hi) = benchmark.init_position_range();
        let (vel_lo, vel_hi) = benchmark.init_velocity_range();

        let position: Vec<f64> = (0..dimension)
            .map(|_| rng.gen_range(pos_lo..=pos_hi))
            .collect();
        let velocity: Vec<f64> = (0..dimension)
            .map(|_| f64::from(rng.gen_range(vel_lo..=vel_hi)))
            .collect();

        Particle {
            best_position: position.clone(),
            position,
            velocity,
            best_value: f64::INFINITY,
        }
    }

    /// Record `value` at the current position as the new personal best if it
    /// improves on the stored one. Returns whether it improved.
    pub fn update_best(&mut self, value: f64) -> bool {
        if value < self.best_value {
            self.best_value = value;
            self.best_position.copy_from_slice(&self.position);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_init_vector_lengths_match() {
        let p = Particle::init(12, Benchmark::Rastrigin, &mut rng());
        assert_eq!(p.position.len(), 12);
        assert_eq!(p.velocity.len(), 12);
        assert_eq!(p.best_position.len(), 12);
    }

    #[test]
    fn test_init_position_within_range() {
        for benchmark in Benchmark::ALL {
            let (lo, hi) = benchmark.init_position_range();
            let p = Particle::init(50, benchmark, &mut rng());
            for &x in &p.position {
                assert!((lo..=hi).contains(&x), "{}: {x} outside init range", benchmark.name());
            }
        }
    }

    #[test]
    fn test_init_velocity_is_integer_valued_within_range() {
        for benchmark in Benchmark::ALL {
            let (lo, hi) = benchmark.init_velocity_range();
            let p = Particle::init(50, benchmark, &mut rng());
            for &v in &p.velocity {
                assert!((v.fract()).abs() < 1e-12, "velocity {v} not integer-valued");
                assert!(v >= f64::from(lo) && v <= f64::from(hi));
            }
        }
    }

    #[test]
    fn test_init_best_starts_at_position_with_sentinel_value() {
        let p = Particle::init(4, Benchmark::Ackley, &mut rng());
        assert_eq!(p.best_position, p.position);
        assert_eq!(p.best_value, f64::INFINITY);
    }

    #[test]
    fn test_update_best_records_improvement() {
        let mut p = Particle::init(3, Benchmark::Rosenbrock, &mut rng());
        assert!(p.update_best(5.0));
        assert_eq!(p.best_value, 5.0);
        assert_eq!(p.best_position, p.position);

        p.position[0] += 1.0;
        assert!(!p.update_best(6.0), "worse value must not overwrite");
        assert_eq!(p.best_value, 5.0);
        assert_ne!(p.best_position, p.position);

        assert!(p.update_best(4.5));
        assert_eq!(p.best_position, p.position);
    }
}
