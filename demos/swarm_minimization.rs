//! Swarm Minimization Example
//!
//! Demonstrates constriction-coefficient particle swarm optimization on the
//! three built-in benchmark functions, and compares neighborhood topologies
//! on Rastrigin.
//!
//! Run with: `cargo run --example swarm_minimization`

use enjambre::{Benchmark, ParticleSwarm, Topology};

fn main() {
    println!("=== Particle Swarm Optimization Demo ===\n");

    // ========== Benchmark Functions ==========
    println!("1. Benchmark functions (30 particles, 500 iterations, global topology)");
    for benchmark in Benchmark::ALL {
        let mut pso = ParticleSwarm::with_params(30, 500).with_seed(42);
        let result = pso.minimize(benchmark, 10).unwrap();
        println!(
            "   {:<11} f(x*) = {:>14.6}  ({} evaluations)",
            benchmark.name(),
            result.objective_value,
            result.evaluations
        );
    }
    println!();

    // ========== Topology Comparison ==========
    println!("2. Topologies on 10-D Rastrigin (25 particles, 500 iterations)");
    let topologies = [
        Topology::Global,
        Topology::Ring,
        Topology::VonNeumann,
        Topology::random(),
    ];
    for topology in topologies {
        let mut pso = ParticleSwarm::with_params(25, 500)
            .with_topology(topology)
            .with_seed(42);
        let result = pso.minimize(Benchmark::Rastrigin, 10).unwrap();
        println!(
            "   {:<12} f(x*) = {:>10.4}",
            topology.name(),
            result.objective_value
        );
    }
    println!();

    // ========== Convergence History ==========
    println!("3. Convergence on 2-D Ackley (ring topology)");
    let mut pso = ParticleSwarm::with_params(20, 200)
        .with_topology(Topology::Ring)
        .with_seed(7);
    let result = pso.minimize(Benchmark::Ackley, 2).unwrap();
    for (pass, value) in result.history.iter().enumerate().step_by(50) {
        println!("   pass {pass:>3}: best = {value:.6}");
    }
    println!(
        "   final:    best = {:.6} at [{:.4}, {:.4}]",
        result.objective_value, result.solution[0], result.solution[1]
    );
}
