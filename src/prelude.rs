//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use enjambre::prelude::*;
//! ```

pub use crate::benchmarks::{ackley, rastrigin, rosenbrock, Benchmark};
pub use crate::error::{EnjambreError, Result};
pub use crate::particle::Particle;
pub use crate::pso::{OptimizationResult, ParticleSwarm};
pub use crate::swarm::Swarm;
pub use crate::topology::Topology;
