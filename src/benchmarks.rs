//! Benchmark objective functions for swarm evaluation.
//!
//! The three standard test functions the optimizer minimizes, plus the
//! [`Benchmark`] selector that carries each function's initialization
//! ranges. All functions are pure: a position vector in, one scalar out.
//!
//! Reference: Kennedy & Eberhart (1995) "Particle Swarm Optimization";
//! constants follow the common CEC formulations.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Rosenbrock function - unimodal, non-separable
///
/// Global minimum: f(1, 1, ..., 1) = 0
/// Search domain: [-30, 30]^D
/// A narrow curved valley; the minimum is easy to find, hard to refine.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rosenbrock;
/// let x = vec![1.0, 1.0, 1.0];
/// assert!((rosenbrock(&x) - 0.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = w[0] - 1.0;
            100.0 * a * a + b * b
        })
        .sum()
}

/// Ackley function - multimodal, non-separable
///
/// Standard form with a = 20, b = 0.2, c = 2π. Both means divide by the
/// real-valued dimensionality.
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-32, 32]^D
///
/// # Example
/// ```
/// use enjambre::benchmarks::ackley;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(ackley(&x).abs() < 1e-10);
/// ```
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}

/// Rastrigin function - multimodal, separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-5.12, 5.12]^D
/// Many local minima arranged in a regular lattice.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rastrigin;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!((rastrigin(&x) - 0.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Objective-function selector.
///
/// Each variant carries its own particle-initialization ranges: positions are
/// sampled uniformly from a skewed sub-interval of the search domain and
/// velocities from a small integer range, so the swarm has to travel to reach
/// the optimum. Particles are free to leave these ranges during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Benchmark {
    /// [`rosenbrock`]: valley-shaped, minimum at the unit point.
    Rosenbrock,
    /// [`ackley`]: nearly flat outer region, minimum at the origin.
    Ackley,
    /// [`rastrigin`]: lattice of local minima, minimum at the origin.
    Rastrigin,
}

impl Benchmark {
    /// All selectable benchmarks.
    pub const ALL: [Benchmark; 3] = [
        Benchmark::Rosenbrock,
        Benchmark::Ackley,
        Benchmark::Rastrigin,
    ];

    /// Evaluate the selected function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            Benchmark::Rosenbrock => rosenbrock(x),
            Benchmark::Ackley => ackley(x),
            Benchmark::Rastrigin => rastrigin(x),
        }
    }

    /// Function name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Rosenbrock => "Rosenbrock",
            Benchmark::Ackley => "Ackley",
            Benchmark::Rastrigin => "Rastrigin",
        }
    }

    /// Inclusive range initial positions are drawn from, per dimension.
    #[must_use]
    pub fn init_position_range(&self) -> (f64, f64) {
        match self {
            Benchmark::Rosenbrock => (15.0, 30.0),
            Benchmark::Ackley => (16.0, 32.0),
            Benchmark::Rastrigin => (2.56, 5.12),
        }
    }

    /// Inclusive integer range initial velocities are drawn from, per
    /// dimension.
    #[must_use]
    pub fn init_velocity_range(&self) -> (i32, i32) {
        match self {
            Benchmark::Rosenbrock => (-2, 2),
            Benchmark::Ackley | Benchmark::Rastrigin => (-2, 4),
        }
    }
}

#[cfg(test)]
#[path = "benchmarks_tests.rs"]
mod tests;
