use crate::graph::*;

/// A directed weighted graph over dense vectors.
///
/// Forward and reverse adjacency are both kept, so `out_edges` and
/// `in_edges` run in O(degree) without hashing. Vertices and edges
/// cannot be removed; ids are dense positions into the adjacency
/// vectors.
#[derive(Clone)]
pub struct VecBackedGraph {
    vid_factory: VertexIdFactory,
    outs: Vec<Vec<(VertexId, f64)>>,
    ins: Vec<Vec<(VertexId, f64)>>,
    edge_size: usize,
}

impl std::fmt::Debug for VecBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "VecBackedGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(&v) {
                writeln!(f, "  -> {:?} by {}", e.sink, e.weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableDigraph for VecBackedGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            outs: vec![],
            ins: vec![],
            edge_size: 0,
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.outs.push(vec![]);
        self.ins.push(vec![]);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        self.outs[source.to_raw()].push((sink, weight));
        self.ins[sink.to_raw()].push((source, weight));
        self.edge_size += 1;
    }
}

impl QueryableDigraph for VecBackedGraph {
    fn vertex_size(&self) -> usize {
        self.outs.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.outs.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.outs.len()
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let it = self.outs.iter().enumerate().flat_map(|(source, nbrs)| {
            let source = VertexId::new(source);
            nbrs.iter().map(move |(sink, weight)| WeightedEdge {
                source,
                sink: *sink,
                weight: *weight,
            })
        });
        Box::new(it)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let sink = *v;
        match self.ins.get(sink.to_raw()) {
            Some(enters) => Box::new(enters.iter().map(move |(source, weight)| WeightedEdge {
                source: *source,
                sink,
                weight: *weight,
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let source = *v;
        match self.outs.get(source.to_raw()) {
            Some(leaves) => Box::new(leaves.iter().map(move |(sink, weight)| WeightedEdge {
                source,
                sink: *sink,
                weight: *weight,
            })),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn vec_backed_gen(random: RandomAdjacency) {
        let trial: VecBackedGraph = random.build();
        let oracle: PetgraphBackedGraph = random.build();
        let trial_vertices: Vec<_> = trial.iter_vertices().collect();
        let oracle_vertices: Vec<_> = oracle.iter_vertices().collect();
        assert_eq!(trial_vertices, oracle_vertices);
        let trial_edges: Vec<_> = trial.iter_edges().collect();
        let oracle_edges: Vec<_> = oracle.iter_edges().collect();
        assert_eq!(trial_edges, oracle_edges);
        assert_eq!(trial.vertex_size(), oracle.vertex_size());
        assert_eq!(trial.edge_size(), oracle.edge_size());
    }

    #[test]
    fn degrees_and_self_loops() {
        let mut g = VecBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v0, v1, 2.5);
        g.add_edge(v1, v0, -1.0);
        g.add_edge(v0, v0, 0.0);
        assert_eq!(g.vertex_size(), 2);
        assert_eq!(g.edge_size(), 3);
        assert_eq!(g.out_edges(&v0).count(), 2);
        assert_eq!(g.in_edges(&v0).count(), 2);
        assert_eq!(g.out_edges(&v1).count(), 1);
        let loops: Vec<_> = g
            .iter_edges()
            .filter(|e| e.source == e.sink)
            .collect();
        assert_eq!(
            loops,
            vec![WeightedEdge {
                source: v0,
                sink: v0,
                weight: 0.0
            }]
        );
    }

    #[test]
    fn debug_lists_every_edge() {
        let mut g = VecBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        g.add_edge(v0, v1, 2.5);
        let rendered = format!("{:?}", g.debug().indent(0, 2));
        assert!(rendered.contains("VertexId(0)"));
        assert!(rendered.contains("--2.5-> VertexId(1)"));
    }
}
