//! Particle swarm optimizer with constriction.
//!
//! A population-based metaheuristic for continuous minimization. Each
//! particle remembers the best point it has visited and is attracted both to
//! that memory and to the best point found by its neighborhood, with the
//! neighborhood defined by a configurable [`Topology`].
//!
//! # Algorithm
//!
//! Per particle and dimension, with independent `U(0, 1)` draws:
//!
//! ```text
//! v[d] = χ·(v[d] + U(0,1)·φ₁·(pbest[d] - x[d]) + U(0,1)·φ₂·(nbest[d] - x[d]))
//! x[d] = x[d] + v[d]
//! ```
//!
//! With φ₁ = φ₂ = 2.05 and χ = 0.7298 the swarm provably contracts without
//! an explicit velocity clamp, so positions are never clipped to the
//! initialization range.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle Swarm Optimization"
//! - Clerc & Kennedy (2002): "The Particle Swarm - Explosion, Stability, and
//!   Convergence in a Multidimensional Complex Space"
//! - Kennedy & Mendes (2002): "Population Structure and Particle Swarm
//!   Performance"

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::benchmarks::Benchmark;
use crate::error::{EnjambreError, Result};
use crate::swarm::Swarm;
use crate::topology::Topology;

/// Particle swarm optimizer.
///
/// # Example
///
/// ```
/// use enjambre::{Benchmark, ParticleSwarm};
///
/// let mut pso = ParticleSwarm::with_params(20, 200).with_seed(42);
/// let result = pso.minimize(Benchmark::Rastrigin, 2).unwrap();
///
/// assert!(result.objective_value < 10.0);
/// assert_eq!(result.iterations, 201);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSwarm {
    /// Number of particles (default: 30)
    pub swarm_size: usize,

    /// Update passes after the first. A run always performs
    /// `iterations + 1` passes: the budget counts down from `iterations`
    /// inclusively, matching the classic formulation (default: 100)
    pub iterations: usize,

    /// Cognitive acceleration φ₁, pull toward the personal best
    /// (default: 2.05)
    pub phi_cognitive: f64,

    /// Social acceleration φ₂, pull toward the neighborhood best
    /// (default: 2.05)
    pub phi_social: f64,

    /// Constriction factor χ (default: 0.7298, the Clerc-Kennedy value for
    /// φ₁ + φ₂ = 4.1)
    pub constriction: f64,

    /// Information-flow topology (default: global)
    pub topology: Topology,

    /// Random seed for reproducibility
    #[serde(default)]
    seed: Option<u64>,

    // Internal state (not serialized)
    #[serde(skip)]
    best: Option<(Vec<f64>, f64)>,
    #[serde(skip)]
    history: Vec<f64>,
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best position found
    pub solution: Vec<f64>,
    /// Objective value at `solution`
    pub objective_value: f64,
    /// Total objective evaluations (swarm size × passes)
    pub evaluations: usize,
    /// Update passes performed
    pub iterations: usize,
    /// Best objective value after each pass
    pub history: Vec<f64>,
}

impl OptimizationResult {
    #[must_use]
    pub fn new(
        solution: Vec<f64>,
        objective_value: f64,
        evaluations: usize,
        iterations: usize,
        history: Vec<f64>,
    ) -> Self {
        Self {
            solution,
            objective_value,
            evaluations,
            iterations,
            history,
        }
    }
}

impl ParticleSwarm {
    /// Create an optimizer with default parameters.
    ///
    /// Default: 30 particles, 100 iterations, φ₁=φ₂=2.05, χ=0.7298,
    /// global topology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer with a custom swarm size and iteration budget.
    #[must_use]
    pub fn with_params(swarm_size: usize, iterations: usize) -> Self {
        Self {
            swarm_size,
            iterations,
            ..Default::default()
        }
    }

    /// Set the neighborhood topology.
    #[must_use]
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the acceleration coefficients and constriction factor.
    ///
    /// The defaults satisfy the convergence condition φ₁ + φ₂ > 4 with
    /// χ = 2 / (φ - 2 + sqrt(φ² - 4φ)); other settings may diverge.
    #[must_use]
    pub fn with_coefficients(
        mut self,
        phi_cognitive: f64,
        phi_social: f64,
        constriction: f64,
    ) -> Self {
        self.phi_cognitive = phi_cognitive;
        self.phi_social = phi_social;
        self.constriction = constriction;
        self
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create RNG from seed or entropy.
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Minimize `benchmark` over `dimension` search dimensions.
    ///
    /// Runs `iterations + 1` passes of motion, evaluation, and topology
    /// maintenance, then reports the best point seen by any particle.
    /// Initialization draws positions and velocities from the benchmark's
    /// function-specific ranges.
    ///
    /// # Errors
    ///
    /// Fails fast, before any evaluation, when `swarm_size` or `dimension`
    /// is zero or when the topology cannot serve `swarm_size` (non-square
    /// von Neumann grid, random `k` outside `1..=swarm_size`, rebuild
    /// probability outside `[0, 1]`).
    pub fn minimize(
        &mut self,
        benchmark: Benchmark,
        dimension: usize,
    ) -> Result<OptimizationResult> {
        if self.swarm_size == 0 {
            return Err(EnjambreError::invalid_config(
                "swarm_size",
                self.swarm_size,
                "at least 1",
            ));
        }
        if dimension == 0 {
            return Err(EnjambreError::invalid_config(
                "dimension",
                dimension,
                "at least 1",
            ));
        }

        // Reset state
        self.reset();

        // Create RNG for this optimization run
        let mut rng = self.make_rng();

        let mut swarm = Swarm::init(
            self.swarm_size,
            dimension,
            benchmark,
            self.topology,
            &mut rng,
        )?;

        let mut evaluations = 0;

        // Inclusive pass budget: `..=` runs the body `iterations + 1` times.
        for _ in 0..=self.iterations {
            swarm.advance(
                self.phi_cognitive,
                self.phi_social,
                self.constriction,
                &mut rng,
            );
            swarm.evaluate(benchmark);
            evaluations += self.swarm_size;
            swarm.refresh_neighborhood_bests();
            // Membership changes take effect at the next refresh.
            self.topology.rebuild(&mut swarm.neighborhoods, &mut rng);
            self.history.push(swarm.best_value);
        }

        self.best = Some((swarm.best_position.clone(), swarm.best_value));

        Ok(OptimizationResult::new(
            swarm.best_position,
            swarm.best_value,
            evaluations,
            self.history.len(),
            self.history.clone(),
        ))
    }

    /// Best position and value from the last run, if any.
    #[must_use]
    pub fn best(&self) -> Option<(&[f64], f64)> {
        self.best.as_ref().map(|(pos, val)| (pos.as_slice(), *val))
    }

    /// Per-pass best values from the last run.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Clear run state. Configuration is left untouched.
    pub fn reset(&mut self) {
        self.best = None;
        self.history.clear();
    }
}

impl Default for ParticleSwarm {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            iterations: 100,
            phi_cognitive: 2.05,
            phi_social: 2.05,
            constriction: 0.7298,
            topology: Topology::default(),
            seed: None,
            best: None,
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let pso = ParticleSwarm::new();
        assert_eq!(pso.swarm_size, 30);
        assert_eq!(pso.iterations, 100);
        assert_eq!(pso.phi_cognitive, 2.05);
        assert_eq!(pso.phi_social, 2.05);
        assert_eq!(pso.constriction, 0.7298);
        assert_eq!(pso.topology, Topology::Global);
    }

    #[test]
    fn test_builders_chain() {
        let pso = ParticleSwarm::with_params(25, 50)
            .with_topology(Topology::VonNeumann)
            .with_coefficients(1.5, 2.5, 0.6)
            .with_seed(7);
        assert_eq!(pso.swarm_size, 25);
        assert_eq!(pso.iterations, 50);
        assert_eq!(pso.topology, Topology::VonNeumann);
        assert_eq!(pso.phi_cognitive, 1.5);
        assert_eq!(pso.phi_social, 2.5);
        assert_eq!(pso.constriction, 0.6);
    }

    #[test]
    fn test_rejects_zero_swarm_size() {
        let err = ParticleSwarm::with_params(0, 10)
            .minimize(Benchmark::Ackley, 2)
            .unwrap_err();
        assert!(err.to_string().contains("swarm_size"));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = ParticleSwarm::with_params(10, 10)
            .minimize(Benchmark::Ackley, 0)
            .unwrap_err();
        assert!(err.to_string().contains("dimension"));
    }

    #[test]
    fn test_rejects_von_neumann_on_non_square_swarm() {
        let err = ParticleSwarm::with_params(20, 10)
            .with_topology(Topology::VonNeumann)
            .minimize(Benchmark::Rastrigin, 2)
            .unwrap_err();
        assert!(matches!(err, EnjambreError::NonSquareSwarm { swarm_size: 20 }));
    }

    #[test]
    fn test_rejects_oversized_random_k() {
        let err = ParticleSwarm::with_params(4, 10)
            .with_topology(Topology::Random {
                k: 5,
                rebuild_prob: 0.2,
            })
            .minimize(Benchmark::Rastrigin, 2)
            .unwrap_err();
        assert!(err.to_string().contains('k'));
    }

    #[test]
    fn test_pass_accounting() {
        let mut pso = ParticleSwarm::with_params(10, 50).with_seed(3);
        let result = pso.minimize(Benchmark::Rastrigin, 2).unwrap();
        assert_eq!(result.iterations, 51);
        assert_eq!(result.history.len(), 51);
        assert_eq!(result.evaluations, 10 * 51);
    }

    #[test]
    fn test_zero_iterations_runs_one_pass() {
        let mut pso = ParticleSwarm::with_params(10, 0).with_seed(3);
        let result = pso.minimize(Benchmark::Ackley, 3).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.evaluations, 10);
        assert!(result.objective_value.is_finite());
    }

    #[test]
    fn test_history_is_monotone_non_increasing() {
        let mut pso = ParticleSwarm::with_params(15, 80).with_seed(5);
        let result = pso.minimize(Benchmark::Ackley, 4).unwrap();
        for pair in result.history.windows(2) {
            assert!(pair[1] <= pair[0], "history worsened: {pair:?}");
        }
        assert_eq!(result.objective_value, *result.history.last().unwrap());
    }

    #[test]
    fn test_solution_matches_objective_value() {
        let mut pso = ParticleSwarm::with_params(20, 60).with_seed(8);
        let result = pso.minimize(Benchmark::Rosenbrock, 3).unwrap();
        let revalued = Benchmark::Rosenbrock.evaluate(&result.solution);
        assert!((result.objective_value - revalued).abs() < 1e-12);
        assert_eq!(result.solution.len(), 3);
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let run = |seed| {
            ParticleSwarm::with_params(12, 40)
                .with_topology(Topology::random())
                .with_seed(seed)
                .minimize(Benchmark::Rastrigin, 3)
                .unwrap()
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.history, b.history);

        let c = run(43);
        assert_ne!(a.history, c.history);
    }

    #[test]
    fn test_unseeded_runs_are_accepted() {
        let mut pso = ParticleSwarm::with_params(8, 5);
        let result = pso.minimize(Benchmark::Ackley, 2).unwrap();
        assert!(result.objective_value.is_finite());
    }

    #[test]
    fn test_accessors_track_last_run() {
        let mut pso = ParticleSwarm::with_params(10, 20).with_seed(1);
        assert!(pso.best().is_none());
        assert!(pso.history().is_empty());

        let result = pso.minimize(Benchmark::Rastrigin, 2).unwrap();
        let (pos, val) = pso.best().unwrap();
        assert_eq!(pos, result.solution.as_slice());
        assert_eq!(val, result.objective_value);
        assert_eq!(pso.history(), result.history.as_slice());

        pso.reset();
        assert!(pso.best().is_none());
        assert!(pso.history().is_empty());
    }

    #[test]
    fn test_minimize_twice_resets_run_state() {
        let mut pso = ParticleSwarm::with_params(10, 30).with_seed(2);
        let first = pso.minimize(Benchmark::Ackley, 2).unwrap();
        let second = pso.minimize(Benchmark::Ackley, 2).unwrap();
        // same seed, fresh RNG per run: identical history, not appended
        assert_eq!(first.history, second.history);
        assert_eq!(pso.history().len(), 31);
    }

    #[test]
    fn test_all_topologies_improve_on_first_pass() {
        let topologies = [
            Topology::Global,
            Topology::Ring,
            Topology::VonNeumann,
            Topology::random(),
        ];
        for topology in topologies {
            let mut pso = ParticleSwarm::with_params(25, 150)
                .with_topology(topology)
                .with_seed(11);
            let result = pso.minimize(Benchmark::Rastrigin, 2).unwrap();
            assert!(
                result.objective_value < result.history[0],
                "{} topology made no progress",
                topology.name()
            );
        }
    }
}
