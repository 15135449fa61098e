use graph_matrix_core::{EdgeSpec, Graph};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(48);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-matrix-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all       Run all generators and benchmark each (default)");
        println!("  chain     Undirected path (maximal diameter)");
        println!("  cycle     Directed ring (strongly connected, diameter N-1)");
        println!("  star      Hub with undirected spokes (diameter 2)");
        println!("  barbell   Two dense cliques joined by a thin bridge");
        println!("  random    Erdos-Renyi random directed edges");
        println!("  islands   Two disjoint chains plus isolated vertices");
        println!();
        println!("Default vertex_count: 48 (distance matrix is O(N^4))");
        return;
    }

    println!("graph-matrix-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Vec<EdgeSpec>)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "cycle" => vec![("Directed cycle", gen_cycle)],
        "star" => vec![("Star", gen_star)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "islands" => vec![("Islands", gen_islands)],
        "all" => vec![
            ("Chain", gen_chain as fn(usize) -> Vec<EdgeSpec>),
            ("Directed cycle", gen_cycle),
            ("Star", gen_star),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("Erdos-Renyi random", gen_random),
            ("Islands", gen_islands),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Vec<EdgeSpec>, vertex_count: usize) {
    println!("--- {} ---", name);

    let edges = generator(vertex_count);
    let t = Instant::now();
    let graph = match Graph::build(vertex_count, edges.iter().copied()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Generator produced an invalid graph: {}", e);
            return;
        }
    };
    println!(
        "Built in {:.3}ms: {} vertices, {} edges, {} matrix cells set",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.vertex_count(),
        edges.len(),
        graph.edge_count()
    );

    println!();
    println!("{:>12} {:>14} {:>10}", "operation", "result", "time");
    println!("{:->12} {:->14} {:->10}", "", "", "");

    let t = Instant::now();
    let matrix = graph_matrix_core::distance_matrix(&graph);
    let elapsed = t.elapsed();
    let connected = graph_matrix_core::is_connected(&matrix);
    println!(
        "{:>12} {:>14} {:>8.1}ms",
        "matrix",
        if connected { "connected" } else { "disconnected" },
        elapsed.as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let diameter = graph_matrix_core::diameter(&graph);
    let elapsed = t.elapsed();
    println!(
        "{:>12} {:>14} {:>8.1}ms",
        "diameter",
        diameter.map_or_else(|| "none".to_string(), |d| d.to_string()),
        elapsed.as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let partition = graph_matrix_core::components(&graph);
    let elapsed = t.elapsed();
    println!(
        "{:>12} {:>14} {:>8.1}ms",
        "components",
        format!("{} sets", partition.len()),
        elapsed.as_secs_f64() * 1000.0
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic edge lists over vertices 0..n
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// 0-1-2-...-(n-1), undirected.
fn gen_chain(n: usize) -> Vec<EdgeSpec> {
    (1..n).map(|i| EdgeSpec::undirected(i - 1, i)).collect()
}

/// 0->1->...->(n-1)->0. Every vertex reaches every other, one way round.
fn gen_cycle(n: usize) -> Vec<EdgeSpec> {
    (0..n).map(|i| EdgeSpec::directed(i, (i + 1) % n)).collect()
}

/// Vertex 0 joined to every other vertex.
fn gen_star(n: usize) -> Vec<EdgeSpec> {
    (1..n).map(|i| EdgeSpec::undirected(0, i)).collect()
}

/// Two dense cliques joined by a short undirected bridge.
///
/// Worst case for long shortest paths through a bottleneck.
fn gen_barbell(n: usize) -> Vec<EdgeSpec> {
    let bridge_len = (n / 8).max(1);
    let clique_size = n.saturating_sub(bridge_len) / 2;
    let mut edges = Vec::new();

    let mut clique = |start: usize| {
        for i in start..start + clique_size {
            for j in (i + 1)..start + clique_size {
                edges.push(EdgeSpec::undirected(i, j));
            }
        }
    };
    clique(0);
    clique(clique_size + bridge_len);

    // Bridge: last vertex of clique A through the bridge into clique B
    let b_start = clique_size + bridge_len;
    if clique_size > 0 && b_start < n {
        for id in clique_size - 1..b_start {
            edges.push(EdgeSpec::undirected(id, id + 1));
        }
    }

    edges
}

/// Uniform random directed edges, ~2 per vertex, with occasional
/// undirected ones.
fn gen_random(n: usize) -> Vec<EdgeSpec> {
    if n == 0 {
        return Vec::new();
    }
    let mut rng = FastRng::new(54321);

    (0..n * 2)
        .map(|_| {
            let source = rng.next(n);
            let target = rng.next(n);
            if rng.next_f64() < 0.2 {
                EdgeSpec::undirected(source, target)
            } else {
                EdgeSpec::directed(source, target)
            }
        })
        .collect()
}

/// Two disjoint undirected chains, with the last few vertices left isolated.
fn gen_islands(n: usize) -> Vec<EdgeSpec> {
    let isolated = (n / 10).max(1).min(n);
    let half = (n - isolated) / 2;

    (1..half)
        .map(|i| EdgeSpec::undirected(i - 1, i))
        .chain((half + 1..2 * half).map(|i| EdgeSpec::undirected(i - 1, i)))
        .collect()
}
