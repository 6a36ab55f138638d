use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors raised while assembling a [KeyedDigraph].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyedGraphError<K> {
    /// An edge named a key that no vertex carries.
    #[error("edge references {0:?}, which is not a vertex of the graph")]
    UnknownVertex(K),
}

/// A directed weighted graph whose vertices carry caller-chosen keys.
///
/// Keys may be of any hashable, comparable type: strings, integers,
/// whatever the caller labels vertices with. Every key is bound to a
/// [VertexId] of a lower graph, so algorithms work on lightweight ids
/// and results are translated back to keys at the boundary.
pub struct KeyedDigraph<K, G = VecBackedGraph>
where
    K: Hash + Eq,
{
    lower_graph: G,
    vertex_keys: BiHashMap<VertexId, K, RandomState, RandomState>,
}

impl<K, G> KeyedDigraph<K, G>
where
    K: Hash + Eq + Clone,
    G: GrowableDigraph,
{
    pub fn new() -> Self {
        Self {
            lower_graph: G::new(),
            vertex_keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Returns the id bound to `key`, binding a fresh vertex if absent.
    pub fn insert_vertex(&mut self, key: &K) -> VertexId {
        if let Some(vid) = self.vertex_keys.get_by_right(key) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertex_keys.insert(vid, key.clone());
            vid
        }
    }

    /// Adds an edge between two existing keys.
    pub fn add_edge(&mut self, source: &K, sink: &K, weight: f64) -> Result<(), KeyedGraphError<K>> {
        let Some(src) = self.vertex_id_by_key(source) else {
            return Err(KeyedGraphError::UnknownVertex(source.clone()));
        };
        let Some(snk) = self.vertex_id_by_key(sink) else {
            return Err(KeyedGraphError::UnknownVertex(sink.clone()));
        };
        self.lower_graph.add_edge(src, snk, weight);
        Ok(())
    }

    /// Builds a graph from a vertex-to-neighbors adjacency mapping.
    ///
    /// Vertices are the mapping's keys, in mapping order; each entry
    /// lists the outgoing `(neighbor, weight)` pairs of its vertex.
    /// Every neighbor must itself be a key of the mapping, otherwise
    /// construction stops at the dangling edge.
    pub fn from_adjacency<I>(adjacency: I) -> Result<Self, KeyedGraphError<K>>
    where
        I: IntoIterator<Item = (K, Vec<(K, f64)>)>,
    {
        let adjacency: Vec<_> = adjacency.into_iter().collect();
        let mut graph = Self::new();
        for (key, _) in adjacency.iter() {
            graph.insert_vertex(key);
        }
        for (source, neighbors) in adjacency.iter() {
            for (sink, weight) in neighbors.iter() {
                graph.add_edge(source, sink, *weight)?;
            }
        }
        Ok(graph)
    }
}

impl<K, G> KeyedDigraph<K, G>
where
    K: Hash + Eq,
{
    pub fn vertex_key_by_id(&self, vid: &VertexId) -> Option<&K> {
        self.vertex_keys.get_by_left(vid)
    }

    pub fn vertex_id_by_key(&self, key: &K) -> Option<VertexId> {
        self.vertex_keys.get_by_right(key).copied()
    }

    pub fn contains_vertex_by_key(&self, key: &K) -> bool {
        self.vertex_keys.contains_right(key)
    }
}

impl<K, G> KeyedDigraph<K, G>
where
    K: Hash + Eq,
    G: QueryableDigraph,
{
    /// Outgoing `(neighbor key, weight)` pairs of `key`, in insertion
    /// order; empty for unknown keys.
    pub fn out_edges_by_key(&self, key: &K) -> Box<dyn Iterator<Item = (&K, f64)> + '_> {
        if let Some(vid) = self.vertex_id_by_key(key) {
            let it = self.lower_graph.out_edges(&vid).map(|e| {
                // edges only ever connect bound vertices
                (self.vertex_key_by_id(&e.sink).unwrap(), e.weight)
            });
            Box::new(it)
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<K, G> QueryableDigraph for KeyedDigraph<K, G>
where
    K: Hash + Eq,
    G: QueryableDigraph,
{
    fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.lower_graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        self.lower_graph.iter_edges()
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        self.lower_graph.in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        self.lower_graph.out_edges(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        let mut g = KeyedDigraph::<String>::new();
        let v0 = g.insert_vertex(&"a".to_string());
        let v1 = g.insert_vertex(&"b".to_string());
        assert_ne!(v0, v1);
        assert_eq!(g.insert_vertex(&"a".to_string()), v0);
        assert_eq!(g.vertex_id_by_key(&"b".to_string()), Some(v1));
        assert_eq!(g.vertex_key_by_id(&v0), Some(&"a".to_string()));
        assert!(g.contains_vertex_by_key(&"a".to_string()));
        assert!(!g.contains_vertex_by_key(&"c".to_string()));
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let mut g = KeyedDigraph::<&str>::new();
        g.insert_vertex(&"a");
        assert_eq!(
            g.add_edge(&"a", &"b", 1.0),
            Err(KeyedGraphError::UnknownVertex("b"))
        );
        assert_eq!(
            g.add_edge(&"c", &"a", 1.0),
            Err(KeyedGraphError::UnknownVertex("c"))
        );
        assert_eq!(g.add_edge(&"a", &"a", 1.0), Ok(()));
    }

    #[test]
    fn adjacency_with_dangling_edge_is_rejected() {
        match KeyedDigraph::<&str>::from_adjacency([("a", vec![("missing", 1.0)])]) {
            Err(e) => assert_eq!(e, KeyedGraphError::UnknownVertex("missing")),
            Ok(_) => panic!("dangling edge accepted"),
        }
    }

    #[test]
    fn adjacency_preserves_order_and_weights() {
        let g = KeyedDigraph::<&str>::from_adjacency([
            ("a", vec![("b", 1.0), ("c", 2.0)]),
            ("b", vec![("a", -1.0)]),
            ("c", vec![]),
        ])
        .unwrap();
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.edge_size(), 3);
        let outs: Vec<_> = g.out_edges_by_key(&"a").map(|(k, w)| (*k, w)).collect();
        assert_eq!(outs, vec![("b", 1.0), ("c", 2.0)]);
        let vertices: Vec<_> = g
            .iter_vertices()
            .map(|vid| *g.vertex_key_by_id(&vid).unwrap())
            .collect();
        assert_eq!(vertices, vec!["a", "b", "c"]);
    }
}
