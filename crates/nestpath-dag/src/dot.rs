use std::fmt::Write;

use ahash::AHashSet;
use nestpath_core::VertexId;

use crate::Dag;

/// Renders the graph in Graphviz DOT format.
///
/// Vertices are labelled with their name and heuristic, edges with their weight. Consecutive
/// vertices of `highlight` have the edges between them drawn in bold red.
pub fn to_dot(dag: &Dag, highlight: Option<&[VertexId]>) -> String {
    let on_path: AHashSet<(VertexId, VertexId)> = highlight
        .map(|path| path.windows(2).map(|w| (w[0], w[1])).collect())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str("digraph dag {\n");
    out.push_str("    rankdir=LR;\n");
    for (id, vertex) in dag.vertices() {
        let _ = writeln!(
            out,
            "    {} [label=\"{}\\n(h={})\"];",
            id.index(),
            escape(&vertex.name),
            vertex.h
        );
    }
    for edge in dag.edges() {
        let style = if on_path.contains(&(edge.source, edge.target)) {
            ", color=red, penwidth=2"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "    {} -> {} [label=\"{}\"{style}];",
            edge.source.index(),
            edge.target.index(),
            edge.weight
        );
    }
    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
