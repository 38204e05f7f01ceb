//! JSON report rendering and output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use stallings::graph::Graph;
use stallings::{Element, Index, Subgroup};
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EdgeDump {
    target: usize,
    label: i32,
}

/// Adjacency dump of a graph, one list per vertex.
#[derive(Serialize)]
pub struct GraphDump {
    vertices: usize,
    adjacency: Vec<Vec<EdgeDump>>,
}

impl From<&Graph> for GraphDump {
    fn from(g: &Graph) -> Self {
        Self {
            vertices: g.size(),
            adjacency: (0..g.size())
                .map(|u| {
                    g.edges(u)
                        .iter()
                        .map(|e| EdgeDump {
                            target: e.target,
                            label: e.label,
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

pub fn words(elements: &[Element]) -> Value {
    json!(elements.iter().map(Element::factors).collect::<Vec<_>>())
}

pub fn index(idx: Index) -> Value {
    match idx {
        Index::Finite(n) => json!(n),
        Index::Infinite => json!("infinite"),
    }
}

/// Base, graph and basic invariants of a subgroup.
pub fn subgroup(sg: &Subgroup) -> Value {
    json!({
        "base": words(sg.base()),
        "rank": sg.rank(),
        "foldings": sg.foldings().len(),
        "index": index(sg.index_auto()),
        "graph": GraphDump::from(sg.graph()),
    })
}

/// Print `doc` to stdout, or write it to `out` (parent dirs are created).
pub fn emit(out: Option<&Path>, doc: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    match out {
        None => println!("{text}"),
        Some(path) => write_report(path, &text)?,
    }
    Ok(())
}

fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
