//! Swarm state: the particle population, its neighborhood map, and the best
//! points found so far.

use rand::prelude::*;

use crate::benchmarks::Benchmark;
use crate::error::Result;
use crate::particle::Particle;
use crate::topology::Topology;

/// Particle population plus the bookkeeping the velocity update reads.
///
/// `neighborhood_best_value[i]` and `neighborhood_best_position[i]` hold the
/// best personal best among the current members of particle `i`'s
/// neighborhood. Until a neighborhood has seen a finite evaluation they hold
/// the initialization sentinel: `f64::INFINITY` paired with a uniform random
/// in-range position, so the first social pull is toward a random point
/// rather than the origin.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub particles: Vec<Particle>,
    pub neighborhoods: Vec<Vec<usize>>,
    pub neighborhood_best_value: Vec<f64>,
    pub neighborhood_best_position: Vec<Vec<f64>>,
    pub best_position: Vec<f64>,
    pub best_value: f64,
}

impl Swarm {
    /// Initialize `swarm_size` particles for `benchmark` and build the
    /// neighborhood map. Fails if `topology` cannot serve `swarm_size`.
    pub fn init(
        swarm_size: usize,
        dimension: usize,
        benchmark: Benchmark,
        topology: Topology,
        rng: &mut StdRng,
    ) -> Result<Self> {
        let particles: Vec<Particle> = (0..swarm_size)
            .map(|_| Particle::init(dimension, benchmark, rng))
            .collect();
        let neighborhoods = topology.build(swarm_size, rng)?;

        let (lo, hi) = benchmark.init_position_range();
        let neighborhood_best_position: Vec<Vec<f64>> = (0..swarm_size)
            .map(|_| (0..dimension).map(|_| rng.gen_range(lo..=hi)).collect())
            .collect();
        let best_position = (0..dimension).map(|_| rng.gen_range(lo..=hi)).collect();

        Ok(Self {
            particles,
            neighborhoods,
            neighborhood_best_value: vec![f64::INFINITY; swarm_size],
            neighborhood_best_position,
            best_position,
            best_value: f64::INFINITY,
        })
    }

    /// One motion step for every particle.
    ///
    /// Per dimension, the velocity is pulled toward the personal best and the
    /// neighborhood best, each scaled by its acceleration coefficient and a
    /// fresh `U(0, 1)` draw, then the sum is damped by the constriction
    /// factor and integrated into the position. Positions are not clamped;
    /// out-of-range points are evaluated as-is.
    pub fn advance(
        &mut self,
        phi_cognitive: f64,
        phi_social: f64,
        constriction: f64,
        rng: &mut StdRng,
    ) {
        for (particle, nbest) in self
            .particles
            .iter_mut()
            .zip(&self.neighborhood_best_position)
        {
            for d in 0..particle.position.len() {
                let cognitive =
                    rng.gen::<f64>() * phi_cognitive * (particle.best_position[d] - particle.position[d]);
                let social =
                    rng.gen::<f64>() * phi_social * (nbest[d] - particle.position[d]);
                particle.velocity[d] = constriction * (particle.velocity[d] + cognitive + social);
                particle.position[d] += particle.velocity[d];
            }
        }
    }

    /// Evaluate every particle at its current position, updating personal
    /// bests and the swarm best. The swarm best position is copied from the
    /// position that was just evaluated, so `best_value` always corresponds
    /// to `best_position`.
    pub fn evaluate(&mut self, benchmark: Benchmark) {
        for particle in &mut self.particles {
            let value = benchmark.evaluate(&particle.position);
            particle.update_best(value);
            if value < self.best_value {
                self.best_value = value;
                self.best_position.copy_from_slice(&particle.position);
            }
        }
    }

    /// Recompute each neighborhood's best from the personal bests of its
    /// current members. The stored best can rise as well as fall when
    /// membership changes, so this is a full recompute rather than a
    /// running minimum. A neighborhood with no finite member (only possible
    /// before the first evaluation) keeps its initialization sentinel.
    pub fn refresh_neighborhood_bests(&mut self) {
        for (i, members) in self.neighborhoods.iter().enumerate() {
            let mut best: Option<usize> = None;
            let mut best_value = f64::INFINITY;
            for &m in members {
                if self.particles[m].best_value < best_value {
                    best_value = self.particles[m].best_value;
                    best = Some(m);
                }
            }
            if let Some(m) = best {
                self.neighborhood_best_value[i] = best_value;
                self.neighborhood_best_position[i]
                    .copy_from_slice(&self.particles[m].best_position);
            }
        }
    }
}
