//! Neighborhood topologies: the rule defining which particles inform which.
//!
//! A neighborhood is identified by the index of the particle it informs, so
//! the map built here is indexed 0..swarm_size with one member list per
//! particle. Three of the strategies are static; the random topology also
//! re-randomizes member lists during the run.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EnjambreError, Result};

/// Default member count for [`Topology::Random`] neighborhoods.
pub const DEFAULT_RANDOM_K: usize = 5;

/// Default per-particle, per-pass rebuild probability for
/// [`Topology::Random`].
pub const DEFAULT_REBUILD_PROB: f64 = 0.2;

/// Information-flow strategy between particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Topology {
    /// Every particle is informed by the entire swarm. Strongest information
    /// sharing, fastest premature-convergence risk.
    #[default]
    Global,

    /// Cycle graph: particle `i` is informed by `{i-1, i, i+1}`, wrapping at
    /// both ends.
    Ring,

    /// Toroidal square grid: each particle is informed by itself plus the
    /// particles directly above, below, left, and right, wrapping at the grid
    /// edges. Only defined for perfect-square swarm sizes; anything else is
    /// rejected when the map is built.
    VonNeumann,

    /// `k` distinct particles drawn uniformly at random, independently per
    /// particle (self not guaranteed included). Each pass, every member list
    /// is independently re-randomized with probability `rebuild_prob`,
    /// otherwise left unchanged.
    Random {
        /// Members per neighborhood, `1..=swarm_size`.
        k: usize,
        /// Bernoulli rebuild probability per particle per pass, in `[0, 1]`.
        rebuild_prob: f64,
    },
}

impl Topology {
    /// The random topology with its reference parameters
    /// ([`DEFAULT_RANDOM_K`], [`DEFAULT_REBUILD_PROB`]).
    #[must_use]
    pub fn random() -> Self {
        Topology::Random {
            k: DEFAULT_RANDOM_K,
            rebuild_prob: DEFAULT_REBUILD_PROB,
        }
    }

    /// Topology name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Global => "global",
            Topology::Ring => "ring",
            Topology::VonNeumann => "von Neumann",
            Topology::Random { .. } => "random",
        }
    }

    /// Build the neighborhood map for a swarm of `swarm_size` particles.
    ///
    /// Fails fast on configurations the strategy cannot serve: a von Neumann
    /// grid over a non-square swarm, or random neighborhoods whose `k` or
    /// `rebuild_prob` fall outside their documented ranges.
    pub fn build(&self, swarm_size: usize, rng: &mut StdRng) -> Result<Vec<Vec<usize>>> {
        match *self {
            Topology::Global => Ok(global(swarm_size)),
            Topology::Ring => Ok(ring(swarm_size)),
            Topology::VonNeumann => {
                let side = square_side(swarm_size).ok_or(EnjambreError::NonSquareSwarm {
                    swarm_size,
                })?;
                Ok(von_neumann(swarm_size, side))
            }
            Topology::Random { k, rebuild_prob } => {
                if k == 0 || k > swarm_size {
                    return Err(EnjambreError::invalid_config(
                        "k",
                        k,
                        &format!("1..={swarm_size} (swarm size)"),
                    ));
                }
                if !(0.0..=1.0).contains(&rebuild_prob) {
                    return Err(EnjambreError::invalid_config(
                        "rebuild_prob",
                        rebuild_prob,
                        "within [0, 1]",
                    ));
                }
                Ok((0..swarm_size)
                    .map(|_| random_members(k, swarm_size, rng))
                    .collect())
            }
        }
    }

    /// Per-pass topology maintenance. For [`Topology::Random`], each
    /// particle's member list is independently replaced with a fresh draw
    /// with probability `rebuild_prob`; static topologies are left untouched.
    pub fn rebuild(&self, neighborhoods: &mut [Vec<usize>], rng: &mut StdRng) {
        if let Topology::Random { k, rebuild_prob } = *self {
            let swarm_size = neighborhoods.len();
            for members in neighborhoods.iter_mut() {
                if rng.gen::<f64>() < rebuild_prob {
                    *members = random_members(k, swarm_size, rng);
                }
            }
        }
    }
}

fn global(swarm_size: usize) -> Vec<Vec<usize>> {
    (0..swarm_size).map(|_| (0..swarm_size).collect()).collect()
}

fn ring(swarm_size: usize) -> Vec<Vec<usize>> {
    (0..swarm_size)
        .map(|i| {
            let before = (i + swarm_size - 1) % swarm_size;
            let after = (i + 1) % swarm_size;
            vec![before, i, after]
        })
        .collect()
}

fn von_neumann(swarm_size: usize, side: usize) -> Vec<Vec<usize>> {
    (0..swarm_size)
        .map(|index| {
            let row = index / side;
            let col = index % side;
            let up = ((row + side - 1) % side) * side + col;
            let down = ((row + 1) % side) * side + col;
            let left = row * side + (col + side - 1) % side;
            let right = row * side + (col + 1) % side;
            vec![index, up, down, left, right]
        })
        .collect()
}

/// Draw `k` distinct indices from `0..swarm_size`, rejecting and resampling
/// on collision.
fn random_members(k: usize, swarm_size: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut members = Vec::with_capacity(k);
    while members.len() < k {
        let idx = rng.gen_range(0..swarm_size);
        if !members.contains(&idx) {
            members.push(idx);
        }
    }
    members
}

/// Side length of the square grid holding `n` particles, if `n` is a perfect
/// square.
fn square_side(n: usize) -> Option<usize> {
    let side = (n as f64).sqrt().round() as usize;
    (side * side == n).then_some(side)
}
