use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};

use graph_mask::prelude::*;

/// Small undirected graph owning its vertex set.
struct Graph {
    vertices: BTreeSet<u32>,
    edges: Vec<(u32, u32)>,
}

impl Graph {
    fn path(n: u32) -> Self {
        Self {
            vertices: (0..n).collect(),
            edges: (1..n).map(|v| (v - 1, v)).collect(),
        }
    }
}

/// "Graph minus these vertices", without copying the graph.
struct VertexSubgraph<'g> {
    graph: &'g Graph,
    mask: SetMask<'g, HashSet<u32>>,
}

impl<'g> VertexSubgraph<'g> {
    fn new(graph: &'g Graph, removed: &'g HashSet<u32>) -> Self {
        Self {
            graph,
            mask: SetMask::new(removed),
        }
    }

    fn vertex_set(&self) -> MaskedVertexSet<'_, u32, BTreeSet<u32>, SetMask<'g, HashSet<u32>>> {
        MaskedVertexSet::new(&self.graph.vertices, &self.mask)
    }

    fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let vs = self.vertex_set();
        self.graph
            .edges
            .iter()
            .copied()
            .filter(move |(a, b)| vs.contains(a) && vs.contains(b))
    }

    fn components(&self) -> Vec<Vec<u32>> {
        let vs = self.vertex_set();
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for root in &vs {
            if !seen.insert(root) {
                continue;
            }
            let mut comp = vec![root];
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for (a, b) in self.edges() {
                    let w = if a == u {
                        b
                    } else if b == u {
                        a
                    } else {
                        continue;
                    };
                    if seen.insert(w) {
                        comp.push(w);
                        stack.push(w);
                    }
                }
            }
            comp.sort_unstable();
            out.push(comp);
        }
        out
    }
}

#[test]
fn removing_a_cut_vertex_splits_the_path() {
    let g = Graph::path(6);
    let removed: HashSet<u32> = [2].into_iter().collect();
    let sub = VertexSubgraph::new(&g, &removed);

    assert_eq!(sub.vertex_set().size(), 5);
    assert_eq!(sub.vertex_set().to_vec(), vec![0, 1, 3, 4, 5]);
    assert_eq!(sub.edges().count(), 3);
    assert_eq!(sub.components(), vec![vec![0, 1], vec![3, 4, 5]]);
    // The parent graph is untouched.
    assert_eq!(g.vertices.len(), 6);
}

#[test]
fn empty_removal_is_the_whole_graph() {
    let g = Graph::path(4);
    let removed = HashSet::new();
    let sub = VertexSubgraph::new(&g, &removed);
    assert_eq!(sub.vertex_set().to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(sub.components(), vec![vec![0, 1, 2, 3]]);
}

#[test]
fn removing_everything_leaves_an_empty_view() {
    let g = Graph::path(3);
    let removed: HashSet<u32> = g.vertices.iter().copied().collect();
    let sub = VertexSubgraph::new(&g, &removed);
    let vs = sub.vertex_set();
    assert!(vs.is_empty());
    assert!(!vs.iter().has_next());
    assert_eq!(vs.iter().next_element(), Err(MaskError::IterationExhausted));
    assert!(sub.components().is_empty());
}

#[test]
fn shared_vertex_set_backs_several_views() {
    let g = Graph::path(10);
    let evens = |v: &u32| v % 2 == 0;
    let odds = Not(evens);
    let a = MaskedVertexSet::new(&g.vertices, &evens);
    let b = MaskedVertexSet::new(&g.vertices, &odds);
    assert_eq!(a.to_vec(), vec![1, 3, 5, 7, 9]);
    assert_eq!(b.to_vec(), vec![0, 2, 4, 6, 8]);
    assert_eq!(a.validate_invariants(), Ok(()));
    assert_eq!(b.validate_invariants(), Ok(()));
}

#[test]
fn growing_exclusion_set_shrinks_a_live_view() {
    let g = Graph::path(5);
    let removed = RefCell::new(HashSet::<u32>::new());
    let mask = |v: &u32| removed.borrow().contains(v);
    let vs = MaskedVertexSet::new(&g.vertices, &mask);

    let mut sizes = Vec::new();
    for v in 0..5 {
        sizes.push(vs.size());
        removed.borrow_mut().insert(v);
    }
    assert_eq!(sizes, vec![5, 4, 3, 2, 1]);
    assert!(vs.is_empty());
}
