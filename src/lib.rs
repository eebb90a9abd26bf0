//! Enjambre: particle swarm optimization in pure Rust.
//!
//! Enjambre minimizes continuous benchmark functions with a
//! constriction-coefficient particle swarm whose information flow is shaped
//! by pluggable neighborhood topologies.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//!
//! // Minimize 2-D Rastrigin with a ring-of-neighbors swarm
//! let mut pso = ParticleSwarm::with_params(20, 200)
//!     .with_topology(Topology::Ring)
//!     .with_seed(7);
//! let result = pso.minimize(Benchmark::Rastrigin, 2).unwrap();
//!
//! assert!(result.objective_value < 10.0);
//! assert_eq!(result.history.len(), 201);
//! ```
//!
//! # Modules
//!
//! - [`benchmarks`]: Objective functions (Rosenbrock, Ackley, Rastrigin)
//! - [`topology`]: Neighborhood topologies (global, ring, von Neumann, random)
//! - [`particle`]: Per-particle state and initialization
//! - [`swarm`]: Swarm state, evaluation, and neighborhood bookkeeping
//! - [`pso`]: The optimizer and its run loop
//! - [`error`]: Crate error type

pub mod benchmarks;
pub mod error;
pub mod particle;
pub mod prelude;
pub mod pso;
pub mod swarm;
pub mod topology;

pub use benchmarks::Benchmark;
pub use error::{EnjambreError, Result};
pub use pso::{OptimizationResult, ParticleSwarm};
pub use topology::Topology;
