//! Node record decoding for hierarchical tree files

use log::{debug, trace};

use super::models::TreeNode;
use super::schema::{Field, NodeSchema};
use super::tokenize::tokenize;

/// Decoded node records plus the position of the trailing module section.
#[derive(Debug)]
pub(crate) struct NodeSection {
    pub nodes: Vec<TreeNode>,
    /// Index of the first `*` line, if the file has a module section.
    pub section_start: Option<usize>,
}

/// Decode the node section of a tree file.
///
/// Rows are tokenized with the quote-aware scanner so names may contain
/// whitespace. A row with fewer fields than the schema, or with an
/// unconvertible value in the path, name or identifier column, is dropped.
pub(crate) fn decode(lines: &[&str], schema: &NodeSchema) -> NodeSection {
    let mut nodes = Vec::new();
    let mut section_start = None;

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if line.starts_with('*') {
            section_start = Some(index);
            break;
        }

        match decode_row(line, schema) {
            Some(node) => nodes.push(node),
            None => trace!("Skipping tree row: {}", line),
        }
    }

    debug!("Decoded {} tree nodes", nodes.len());

    NodeSection {
        nodes,
        section_start,
    }
}

fn decode_row(line: &str, schema: &NodeSchema) -> Option<TreeNode> {
    let tokens = tokenize(line);
    if tokens.len() < schema.fields.len() {
        return None;
    }

    let mut path = None;
    let mut flow = None;
    let mut name = None;
    let mut state_id = None;
    let mut id = None;
    let mut layer_id = None;

    for (field, token) in schema.fields.iter().zip(tokens) {
        match field {
            Field::Path => path = parse_path(token),
            Field::Flow => flow = token.parse().ok(),
            Field::Name => name = Some(unquote(token).to_string()),
            Field::StateId => state_id = token.parse().ok(),
            Field::NodeId => id = token.parse().ok(),
            Field::LayerId => layer_id = token.parse().ok(),
            _ => {}
        }
    }

    Some(TreeNode {
        path: path?,
        flow,
        name: name?,
        state_id,
        id: id?,
        layer_id,
    })
}

/// Split a `1:2:3` module address into its integer steps.
pub(crate) fn parse_path(token: &str) -> Option<Vec<u32>> {
    token.split(':').map(|step| step.parse().ok()).collect()
}

/// Strip one pair of enclosing double quotes, if present.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token)
}
