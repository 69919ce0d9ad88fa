//! Graphviz rendering.

use std::io;

use crate::graph::{GraphDescription, VertexKind};

const ROOT_STYLE: &str =
    r#"[label="",style=filled,fillcolor=lightgrey,shape=circle,width=.1,height=.1];"#;
const INTERNAL_STYLE: &str =
    r#"[label="",style=filled,fillcolor=lightgrey,shape=circle,width=.07,height=.07]"#;
const LEAF_STYLE: &str = r#"[label="",shape=point]"#;

fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `desc` as a left-to-right digraph: filled circles for the root and
/// internal nodes, points for leaves, labelled solid edges, dotted suffix
/// links.
pub fn render_dot(desc: &GraphDescription) -> String {
    let mut out = String::new();
    out.push_str("digraph {\n");
    out.push_str("\trankdir = LR;\n");
    out.push_str("edge [arrowsize=0.4, fontsize=10]\n");
    out.push_str(&format!("{} {ROOT_STYLE}\n", desc.root().id));

    out.push_str("//----- nodes -----\n");
    for vertex in &desc.vertices {
        let style = match vertex.kind {
            VertexKind::Root => continue,
            VertexKind::Internal => INTERNAL_STYLE,
            VertexKind::Leaf => LEAF_STYLE,
        };
        out.push_str(&format!("\t{} {style}\n", vertex.id));
    }

    out.push_str("//----- edges -----\n");
    let mut edges = desc.edges.iter().peekable();
    for vertex in &desc.vertices {
        if let Some(link) = vertex.suffix_link {
            out.push_str(&format!(
                "\t{} -> {link} [label=\"\",weight=1,style=dotted]\n",
                vertex.id
            ));
        }
        while let Some(edge) = edges.next_if(|e| e.from == vertex.id) {
            out.push_str(&format!(
                "\t{} -> {} [label=\"{}\",weight=3]\n",
                edge.from,
                edge.to,
                escape_label(&edge.label)
            ));
        }
    }
    out.push_str("}\n");
    out
}

pub fn write_dot<W: io::Write>(desc: &GraphDescription, out: &mut W) -> io::Result<()> {
    out.write_all(render_dot(desc).as_bytes())
}
