use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Small weighted digraph with Dijkstra single-source shortest paths.
///
/// Neighbours are relaxed in insertion order and a node's predecessor only
/// changes on a strictly cheaper path, so equal-cost ties resolve to the
/// first path discovered.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Vec<(usize, usize)>>,
}

impl Graph {
    pub fn new(nodes: usize) -> Self {
        Self {
            edges: vec![Vec::new(); nodes],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: usize) {
        self.edges[from].push((to, weight));
    }

    /// Node sequence of the cheapest path `start` -> `end`, both included
    pub fn shortest_path(&self, start: usize, end: usize) -> Option<Vec<usize>> {
        let n = self.edges.len();
        if start >= n || end >= n {
            return None;
        }
        let mut costs: Vec<Option<usize>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        // (cost, insertion sequence, node): ties pop in insertion order
        let mut open = BinaryHeap::new();
        let mut seq = 0usize;

        costs[start] = Some(0);
        open.push(Reverse((0usize, seq, start)));

        while let Some(Reverse((cost, _, u))) = open.pop() {
            if costs[u].is_some_and(|best| cost > best) {
                continue;
            }
            for &(v, weight) in &self.edges[u] {
                let candidate = cost + weight;
                if costs[v].is_none_or(|known| known > candidate) {
                    costs[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    seq += 1;
                    open.push(Reverse((candidate, seq, v)));
                }
            }
        }

        costs[end]?;
        let mut path = vec![end];
        let mut node = end;
        while node != start {
            node = predecessors[node]?;
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
}
