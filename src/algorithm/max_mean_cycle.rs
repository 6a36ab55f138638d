use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;
use tracing::debug;

/// Errors from [MaxMeanCycle::max_mean_cycle].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeanCycleError {
    /// The graph has no vertices at all.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// No full-length walk exists anywhere in the graph, so the graph
    /// cannot contain a cycle.
    #[error("graph has no cycle")]
    NoCycle,
    /// An edge named a vertex the graph does not contain.
    #[error("edge references {0:?}, which is not a vertex of the graph")]
    DanglingEdge(VertexId),
}

/// A cycle together with the arithmetic mean of its edge weights.
///
/// `vertices` is closed: the first vertex is repeated as the last, and
/// the interior vertices are pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanCycle {
    pub vertices: Vec<VertexId>,
    pub mean_weight: f64,
}

impl MeanCycle {
    /// Number of edges on the cycle.
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Searches for a cycle whose mean edge weight is maximal.
///
/// This is Karp's algorithm. A table of the heaviest walk of each
/// exact length $k \le n$ ending at each vertex is filled bottom-up;
/// by Karp's theorem,
/// $\max_v \min_k (dp\[n\]\[v\] - dp\[k\]\[v\]) / (n - k)$
/// equals the maximum cycle mean of the whole graph, and replaying the
/// recorded predecessors from the maximizing vertex yields a walk
/// whose tail closes into such a cycle. Runs in $O(|V| \cdot |E|)$
/// time and $O(|V|^2)$ transient memory; the search never mutates the
/// graph and is a pure function of it.
///
/// Ties are broken deterministically towards whatever the graph
/// enumerates first; which of several equally good cycles is returned
/// is implementation-defined.
pub trait MaxMeanCycle
where
    Self: QueryableDigraph + Sized,
{
    fn max_mean_cycle(&self) -> Result<MeanCycle, MeanCycleError> {
        if self.vertex_size() == 0 {
            return Err(MeanCycleError::EmptyGraph);
        }
        debug!(
            vertices = self.vertex_size(),
            edges = self.edge_size(),
            "searching for a maximum mean cycle"
        );
        let index = DenseIndex::new(self);
        let rev = reverse_adjacency(self, &index)?;
        let paths = PathTable::fill(&rev);
        let closing = paths.best_closing().ok_or(MeanCycleError::NoCycle)?;
        debug!(
            vertex = ?index.vertex(closing.vertex),
            mean = closing.mean,
            "found the best closing vertex"
        );
        let mut walk = paths.walk_ending_at(closing.vertex);
        walk.reverse();
        let cycle = first_repetition(&walk[closing.prefix_len..])
            // the cut at prefix_len can land inside the walk's only
            // cycle; the full walk, n + 1 entries over n vertices,
            // always repeats one, at exactly the optimal mean
            .or_else(|| first_repetition(&walk))
            .ok_or(MeanCycleError::NoCycle)?;
        Ok(MeanCycle {
            vertices: cycle.into_iter().map(|i| index.vertex(i)).collect(),
            mean_weight: closing.mean,
        })
    }
}

impl<G: QueryableDigraph> MaxMeanCycle for G {}

impl<K, G> KeyedDigraph<K, G>
where
    K: Hash + Eq + Clone,
    G: QueryableDigraph,
{
    /// Like [MaxMeanCycle::max_mean_cycle], with the cycle translated
    /// back to the graph's vertex keys.
    pub fn max_mean_cycle_by_key(&self) -> Result<(Vec<K>, f64), MeanCycleError> {
        let found = self.max_mean_cycle()?;
        let keys = found
            .vertices
            .iter()
            // the cycle only visits vertices of this very graph
            .map(|vid| self.vertex_key_by_id(vid).unwrap().clone())
            .collect();
        Ok((keys, found.mean_weight))
    }
}

/// Bijection between the graph's vertices and dense positions `0..n`,
/// in the graph's own enumeration order.
struct DenseIndex {
    vertices: Vec<VertexId>,
    positions: HashMap<VertexId, usize, RandomState>,
}

impl DenseIndex {
    fn new<G: QueryableDigraph>(graph: &G) -> Self {
        let vertices: Vec<_> = graph.iter_vertices().collect();
        let mut positions =
            HashMap::with_capacity_and_hasher(vertices.len(), RandomState::new());
        for (i, v) in vertices.iter().enumerate() {
            positions.insert(*v, i);
        }
        Self { vertices, positions }
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn position(&self, v: &VertexId) -> Option<usize> {
        self.positions.get(v).copied()
    }

    fn vertex(&self, position: usize) -> VertexId {
        self.vertices[position]
    }
}

/// For every vertex, the edges entering it, as `(source position,
/// weight)` pairs.
///
/// List order follows `iter_edges`, which fixes which predecessor wins
/// a tie in the path table.
fn reverse_adjacency<G>(
    graph: &G,
    index: &DenseIndex,
) -> Result<Vec<Vec<(usize, f64)>>, MeanCycleError>
where
    G: QueryableDigraph,
{
    let mut rev = vec![Vec::new(); index.len()];
    for e in graph.iter_edges() {
        let source = index
            .position(&e.source)
            .ok_or(MeanCycleError::DanglingEdge(e.source))?;
        let sink = index
            .position(&e.sink)
            .ok_or(MeanCycleError::DanglingEdge(e.sink))?;
        rev[sink].push((source, e.weight));
    }
    Ok(rev)
}

/// Tables of the heaviest walk of each exact length ending at each
/// vertex.
///
/// `weights[k][i]` is the maximum total weight over walks of exactly
/// `k` edges ending at position `i`, `None` when no such walk exists;
/// `preds[k][i]` is the position that walk arrives from. Walks of
/// length zero have weight zero at every vertex.
struct PathTable {
    weights: Vec<Vec<Option<f64>>>,
    preds: Vec<Vec<Option<usize>>>,
}

impl PathTable {
    /// Fills the tables bottom-up; row `k` reads only row `k - 1`.
    fn fill(rev: &[Vec<(usize, f64)>]) -> Self {
        let n = rev.len();
        let mut weights = Vec::with_capacity(n + 1);
        let mut preds = Vec::with_capacity(n + 1);
        weights.push(vec![Some(0.0); n]);
        preds.push(vec![None; n]);
        for k in 1..=n {
            let previous = &weights[k - 1];
            let mut row = vec![None; n];
            let mut row_preds = vec![None; n];
            for (sink, enters) in rev.iter().enumerate() {
                for &(source, weight) in enters {
                    let Some(upstream) = previous[source] else {
                        continue;
                    };
                    let total = upstream + weight;
                    // strictly greater, so the earliest predecessor wins ties
                    if row[sink].map_or(true, |best| total > best) {
                        row[sink] = Some(total);
                        row_preds[sink] = Some(source);
                    }
                }
            }
            weights.push(row);
            preds.push(row_preds);
        }
        Self { weights, preds }
    }

    /// Karp's bound. For the returned vertex, cutting the full-length
    /// walk at `prefix_len` closes a cycle of mean `mean`, and no
    /// cycle anywhere in the graph has a larger mean. `None` when no
    /// vertex ends a full-length walk, which is exactly the cycle-free
    /// case.
    fn best_closing(&self) -> Option<BestClosing> {
        let n = self.weights.len() - 1;
        let mut best: Option<BestClosing> = None;
        for (j, full) in self.weights[n].iter().enumerate() {
            let Some(full) = *full else {
                continue;
            };
            // k = 0 always participates: zero-length walks have weight zero
            let mut mean = full / n as f64;
            let mut prefix_len = 0;
            for k in 1..n {
                let Some(partial) = self.weights[k][j] else {
                    continue;
                };
                let slope = (full - partial) / (n - k) as f64;
                if slope < mean {
                    mean = slope;
                    prefix_len = k;
                }
            }
            if best.as_ref().map_or(true, |b| mean > b.mean) {
                best = Some(BestClosing {
                    vertex: j,
                    prefix_len,
                    mean,
                });
            }
        }
        best
    }

    /// Replays predecessor links into the full-length walk ending at
    /// `last`, endpoint first.
    fn walk_ending_at(&self, last: usize) -> Vec<usize> {
        let n = self.weights.len() - 1;
        let mut walk = Vec::with_capacity(n + 1);
        walk.push(last);
        let mut current = last;
        for k in (1..=n).rev() {
            // a finite weight at row k always records its predecessor
            let previous = self.preds[k][current].unwrap();
            walk.push(previous);
            current = previous;
        }
        walk
    }
}

/// Where the optimal full-length walk closes into a cycle.
struct BestClosing {
    vertex: usize,
    prefix_len: usize,
    mean: f64,
}

/// The sub-sequence between the two occurrences of the first vertex to
/// repeat, repetition included, or `None` when all entries are
/// distinct.
fn first_repetition(walk: &[usize]) -> Option<Vec<usize>> {
    let mut first_seen: HashMap<usize, usize, RandomState> =
        HashMap::with_capacity_and_hasher(walk.len(), RandomState::new());
    for (i, &v) in walk.iter().enumerate() {
        if let Some(&start) = first_seen.get(&v) {
            return Some(walk[start..=i].to_vec());
        }
        first_seen.insert(v, i);
    }
    None
}
