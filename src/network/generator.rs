//! Watts-Strogatz network construction

use std::collections::HashSet;
use std::f64::consts::PI;

use rand::Rng;

use crate::config::{GeneratorParams, ParamError};
use crate::network::{Edge, Network, Node};

/// Retry budget for finding a valid rewiring target before giving up
/// and keeping the lattice edge.
const MAX_REWIRE_ATTEMPTS: usize = 50;

/// Generate a small-world network: ring lattice first, then per-edge rewiring.
///
/// The random source is injected so callers control determinism; a seeded
/// generator reproduces the exact same node/edge sets. When the rewiring
/// probability is zero the RNG is never touched and the pristine lattice
/// is returned.
pub fn generate<R: Rng>(params: &GeneratorParams, rng: &mut R) -> Result<Network, ParamError> {
    params.validate()?;

    let n = params.node_count;
    let half_k = params.k / 2;
    let p = params.rewire_probability;

    let mut nodes: Vec<Node> = (0..n)
        .map(|i| Node {
            id: i as u32,
            angle: i as f64 * 2.0 * PI / n as f64,
            degree: 0,
        })
        .collect();

    // Ring lattice: each node connects to the next k/2 nodes clockwise.
    // Both endpoint degrees are bumped here, so every node ends at exactly k
    // without a counter-clockwise pass.
    let mut edges: Vec<Edge> = Vec::with_capacity(n * half_k);
    for i in 0..n {
        for j in 1..=half_k {
            let target = (i + j) % n;
            edges.push(Edge {
                source: i as u32,
                target: target as u32,
                original: true,
            });
            nodes[i].degree += 1;
            nodes[target].degree += 1;
        }
    }

    if p == 0.0 {
        log::debug!("p = 0, returning pristine lattice with {} edges", edges.len());
        return Ok(Network {
            nodes,
            edges,
            rewires_exhausted: 0,
        });
    }

    // Unordered endpoint pairs taken so far. Pairs are never released within
    // a run: a rewired edge's old slot stays blocked, matching the original
    // in-place replacement semantics.
    let mut occupied: HashSet<(u32, u32)> = edges.iter().map(Edge::pair).collect();
    let mut exhausted = 0usize;

    for edge in edges.iter_mut() {
        if rng.gen::<f64>() >= p {
            continue;
        }

        match sample_new_target(edge.source, n, &occupied, rng) {
            Some(new_target) => {
                occupied.insert(normalized(edge.source, new_target));
                nodes[edge.target as usize].degree -= 1;
                nodes[new_target as usize].degree += 1;
                edge.target = new_target;
                edge.original = false;
            }
            None => {
                // Retry budget spent: keep the lattice edge untouched.
                exhausted += 1;
            }
        }
    }

    log::debug!(
        "rewired {} of {} edges ({} exhausted retries)",
        edges.iter().filter(|e| !e.original).count(),
        edges.len(),
        exhausted
    );

    Ok(Network {
        nodes,
        edges,
        rewires_exhausted: exhausted,
    })
}

/// Sample a replacement target uniformly from all node ids, rejecting
/// self-loops and endpoint pairs that already carry an edge.
fn sample_new_target<R: Rng>(
    source: u32,
    node_count: usize,
    occupied: &HashSet<(u32, u32)>,
    rng: &mut R,
) -> Option<u32> {
    for _ in 0..MAX_REWIRE_ATTEMPTS {
        let candidate = rng.gen_range(0..node_count) as u32;

        if candidate == source {
            continue;
        }
        if occupied.contains(&normalized(source, candidate)) {
            continue;
        }

        return Some(candidate);
    }

    None
}

fn normalized(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}
