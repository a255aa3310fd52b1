//! Serialization of node records back to the line-oriented text layout
//!
//! The writers emit data lines only, with no comment prologue, matching the
//! layouts the decoders accept. Parsing a written record list back yields an
//! equal list.

use super::models::{CluNode, MetaCluNode, NodeFile, TreeNode};

/// Serialize cluster records as `<id> <moduleId> [<flow>]` lines.
pub fn clu_to_string(nodes: &[CluNode]) -> String {
    let mut out = String::new();

    for node in nodes {
        out.push_str(&format!("{} {}", node.id, node.module_id));
        if let Some(flow) = node.flow {
            out.push_str(&format!(" {}", flow));
        }
        out.push('\n');
    }

    out
}

/// Serialize meta-assignment records as `<id> <meta> [<flow>]` lines.
pub fn meta_clu_to_string(nodes: &[MetaCluNode]) -> String {
    let mut out = String::new();

    for node in nodes {
        out.push_str(&format!("{} {}", node.id, node.meta));
        if let Some(flow) = node.flow {
            out.push_str(&format!(" {}", flow));
        }
        out.push('\n');
    }

    out
}

/// Serialize tree records as
/// `<path> <flow> "<name>" [<stateId>] <id> [<layerId>]` lines.
///
/// A record without flow is written with a flow of `0` so that column
/// positions stay valid for the known layouts.
pub fn tree_to_string(nodes: &[TreeNode]) -> String {
    let mut out = String::new();

    for node in nodes {
        let path = node
            .path
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join(":");

        out.push_str(&format!(
            "{} {} \"{}\"",
            path,
            node.flow.unwrap_or(0.0),
            node.name
        ));
        if let Some(state_id) = node.state_id {
            out.push_str(&format!(" {}", state_id));
        }
        out.push_str(&format!(" {}", node.id));
        if let Some(layer_id) = node.layer_id {
            out.push_str(&format!(" {}", layer_id));
        }
        out.push('\n');
    }

    out
}

/// Serialize any node-record list, dispatching on its family.
pub fn file_to_string(file: &NodeFile) -> String {
    match file {
        NodeFile::Clu(nodes) => clu_to_string(nodes),
        NodeFile::MetaClu(nodes) => meta_clu_to_string(nodes),
        NodeFile::Tree(nodes) => tree_to_string(nodes),
    }
}
