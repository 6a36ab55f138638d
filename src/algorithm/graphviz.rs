//! Visualize keyed weighted digraphs in the graphviz format.
use crate::graph::*;
use std::hash::Hash;

/**
 * Dumps a directed weighted graph into the graphviz format, edge
 * weights as labels.
 *
 * # Examples
 *
 * ```rust
 * use meancycle::{algorithm::graphviz::*, graph::*};
 *
 * let graph = KeyedDigraph::<&str>::from_adjacency([
 *     ("X", vec![("Y", 10.0)]),
 *     ("Y", vec![("X", -5.0)]),
 * ])
 * .unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     graph.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   X ;
 *   Y ;
 *   X -> Y [label=10] ;
 *   Y -> X [label=-5] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz {
    /**
     * Dumps the graph to a `std::io::Write` object in the graphviz
     * format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write;
}

impl<K, G> DumpInGraphviz for KeyedDigraph<K, G>
where
    K: Hash + Eq + std::fmt::Display,
    G: QueryableDigraph,
{
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "digraph {} {{", graph_name)?;
        for vid in self.iter_vertices() {
            writeln!(out, "  {} ;", self.vertex_key_by_id(&vid).unwrap())?;
        }
        for e in self.iter_edges() {
            let source = self.vertex_key_by_id(&e.source).unwrap();
            let sink = self.vertex_key_by_id(&e.sink).unwrap();
            writeln!(out, "  {} -> {} [label={}] ;", source, sink, e.weight)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
