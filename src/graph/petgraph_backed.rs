use crate::graph::*;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef, Direction};

/// A directed weighted graph backed by `petgraph`.
///
/// Functionally interchangeable with [VecBackedGraph]; it exists as an
/// independently implemented backing to cross-check against in tests
/// and benches.
#[derive(Clone)]
pub struct PetgraphBackedGraph(StableDiGraph<(), f64, usize>);

impl GrowableDigraph for PetgraphBackedGraph {
    fn new() -> Self {
        Self(StableDiGraph::<(), f64, usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        debug_assert!(self.0.contains_node(a));
        debug_assert!(self.0.contains_node(b));
        self.0.add_edge(a, b, weight);
    }
}

impl QueryableDigraph for PetgraphBackedGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let it = self.0.edge_indices().map(|x| {
            let (source, sink) = self.0.edge_endpoints(x).unwrap();
            let weight = self.0.edge_weight(x).unwrap();
            WeightedEdge {
                source: VertexId::new(source.index()),
                sink: VertexId::new(sink.index()),
                weight: *weight,
            }
        });
        Box::new(it)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self
            .0
            .edges_directed(nidx, Direction::Incoming)
            .map(|x| WeightedEdge {
                source: VertexId::new(x.source().index()),
                sink: VertexId::new(x.target().index()),
                weight: *x.weight(),
            });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self
            .0
            .edges_directed(nidx, Direction::Outgoing)
            .map(|x| WeightedEdge {
                source: VertexId::new(x.source().index()),
                sink: VertexId::new(x.target().index()),
                weight: *x.weight(),
            });
        Box::new(it)
    }
}
