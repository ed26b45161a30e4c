//! Random graph generation for coloring problems.

use rand::Rng;

/// An undirected graph with vertices `1..=num_vertices`.
#[derive(Debug, Clone)]
pub struct Graph {
    pub num_vertices: u32,
    pub edges: Vec<(u32, u32)>,
}

impl Graph {
    /// DIMACS edge-format text: `p edge V E` followed by `e u v` lines.
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p edge {} {}", self.num_vertices, self.edges.len());
        for (u, v) in &self.edges {
            out.push_str(&format!("\ne {u} {v}"));
        }
        out
    }

    pub fn vertices(&self) -> impl Iterator<Item = u32> {
        1..=self.num_vertices
    }

    fn neighbors(&self, vertex: u32) -> Vec<u32> {
        self.edges
            .iter()
            .filter_map(|&(u, v)| {
                if u == vertex {
                    Some(v)
                } else if v == vertex {
                    Some(u)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Sample an Erdős–Rényi graph G(n, p).
///
/// # Panics
///
/// Panics when `edge_prob` is outside `[0, 1]`.
pub fn erdos_renyi(num_vertices: u32, edge_prob: f64, rng: &mut impl Rng) -> Graph {
    assert!(
        (0.0..=1.0).contains(&edge_prob),
        "edge_prob {edge_prob} is not in [0, 1]"
    );

    let mut edges = Vec::new();
    for u in 1..=num_vertices {
        for v in (u + 1)..=num_vertices {
            if rng.gen_bool(edge_prob) {
                edges.push((u, v));
            }
        }
    }
    Graph { num_vertices, edges }
}

/// Upper bound on the chromatic number via the DSATUR greedy heuristic.
///
/// Picks the uncolored vertex with the most distinctly-colored neighbors
/// (degree breaks ties) and gives it the smallest feasible color. The number
/// of colors used bounds the budget handed to the solver.
pub fn dsatur_color_count(graph: &Graph) -> u32 {
    if graph.num_vertices == 0 {
        return 0;
    }

    let n = graph.num_vertices as usize;
    let mut colors: Vec<Option<u32>> = vec![None; n + 1];
    let neighbors: Vec<Vec<u32>> = (0..=graph.num_vertices)
        .map(|v| graph.neighbors(v))
        .collect();

    for _ in 0..n {
        // Highest saturation first, then highest degree.
        let next = graph
            .vertices()
            .filter(|&v| colors[v as usize].is_none())
            .max_by_key(|&v| {
                let saturation = neighbors[v as usize]
                    .iter()
                    .filter_map(|&u| colors[u as usize])
                    .collect::<std::collections::BTreeSet<_>>()
                    .len();
                (saturation, neighbors[v as usize].len())
            })
            .expect("an uncolored vertex remains");

        let used: std::collections::BTreeSet<u32> = neighbors[next as usize]
            .iter()
            .filter_map(|&u| colors[u as usize])
            .collect();
        let color = (1..).find(|c| !used.contains(c)).expect("colors are unbounded");
        colors[next as usize] = Some(color);
    }

    colors.into_iter().flatten().max().unwrap_or(0)
}
