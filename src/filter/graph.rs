use std::collections::BTreeSet;
use std::fmt;

use crate::filter::expr::FilterExpression;
use crate::foundation::error::{CompileError, CompileResult};

/// A named pad (edge) in a filter graph, serialized as `[name]`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PadLabel(String);

impl PadLabel {
    /// Build a label; only ASCII alphanumerics, `_` and `:` are allowed.
    pub fn new(name: impl Into<String>) -> CompileResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CompileError::graph("pad label must be non-empty"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
        {
            return Err(CompileError::graph(format!(
                "pad label '{name}' contains unsupported characters"
            )));
        }
        Ok(Self(name))
    }

    /// First video stream of the first input (`0:v`).
    pub fn source_video() -> Self {
        Self("0:v".to_string())
    }

    /// Label text without brackets.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PadLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// One node of a filter graph: a linear chain between labeled input and output pads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    /// Consumed pads.
    pub inputs: Vec<PadLabel>,
    /// Filters applied in order.
    pub chain: FilterExpression,
    /// Produced pads.
    pub outputs: Vec<PadLabel>,
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pad in &self.inputs {
            write!(f, "{pad}")?;
        }
        write!(f, "{}", self.chain)?;
        for pad in &self.outputs {
            write!(f, "{pad}")?;
        }
        Ok(())
    }
}

/// Multi-node filter graph with a single unbound source pad.
///
/// Nodes are kept in topological order: a node may only consume the source pad or
/// pads produced by earlier nodes, and every pad is consumed at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGraph {
    source: PadLabel,
    nodes: Vec<GraphNode>,
}

impl FilterGraph {
    /// Empty graph reading from `source`.
    pub fn new(source: PadLabel) -> Self {
        Self {
            source,
            nodes: Vec::new(),
        }
    }

    /// Append a node.
    pub fn push(&mut self, inputs: Vec<PadLabel>, chain: FilterExpression, outputs: Vec<PadLabel>) {
        self.nodes.push(GraphNode {
            inputs,
            chain,
            outputs,
        });
    }

    /// The unbound input pad.
    pub fn source(&self) -> &PadLabel {
        &self.source
    }

    /// Nodes in order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Pads produced but never consumed, in production order.
    pub fn terminal_pads(&self) -> Vec<&PadLabel> {
        let consumed: BTreeSet<&PadLabel> = self.nodes.iter().flat_map(|n| &n.inputs).collect();
        self.nodes
            .iter()
            .flat_map(|n| &n.outputs)
            .filter(|p| !consumed.contains(p))
            .collect()
    }

    /// Check the structural invariants; `output` must be one of the terminal pads.
    pub fn validate(&self, output: &PadLabel) -> CompileResult<()> {
        if self.nodes.is_empty() {
            return Err(CompileError::graph("filter graph has no nodes"));
        }

        let mut produced = BTreeSet::<&PadLabel>::new();
        let mut consumed = BTreeSet::<&PadLabel>::new();
        let mut source_used = false;

        for (i, node) in self.nodes.iter().enumerate() {
            if node.chain.is_empty() {
                return Err(CompileError::graph(format!("graph node {i} has no filters")));
            }
            if node.inputs.is_empty() || node.outputs.is_empty() {
                return Err(CompileError::graph(format!(
                    "graph node {i} must have labeled inputs and outputs"
                )));
            }
            for pad in &node.inputs {
                if pad == &self.source {
                    if source_used {
                        return Err(CompileError::graph(format!(
                            "source pad {pad} consumed more than once"
                        )));
                    }
                    source_used = true;
                    continue;
                }
                if !produced.contains(pad) {
                    return Err(CompileError::graph(format!(
                        "graph node {i} consumes unbound pad {pad}"
                    )));
                }
                if !consumed.insert(pad) {
                    return Err(CompileError::graph(format!("pad {pad} consumed more than once")));
                }
            }
            for pad in &node.outputs {
                if pad == &self.source || !produced.insert(pad) {
                    return Err(CompileError::graph(format!("pad {pad} produced more than once")));
                }
            }
        }

        if !source_used {
            return Err(CompileError::graph(format!(
                "source pad {} is never consumed",
                self.source
            )));
        }
        if !produced.contains(output) || consumed.contains(output) {
            return Err(CompileError::graph(format!(
                "output pad {output} is not a terminal pad of the graph"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/graph.rs"]
mod tests;
