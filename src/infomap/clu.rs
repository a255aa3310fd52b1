//! Node record decoding for cluster-assignment files

use log::{debug, trace};

use super::models::CluNode;
use super::schema::{Field, NodeSchema};

/// Decode the node section of a cluster-assignment file.
///
/// Rows are split on whitespace and converted positionally through the
/// schema. A row with fewer columns than the schema, or with an
/// unconvertible value in an identifier or module column, is dropped.
/// Iteration stops at the first `*` line.
pub(crate) fn decode(lines: &[&str], schema: &NodeSchema) -> Vec<CluNode> {
    let mut nodes = Vec::new();

    for line in lines {
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if line.starts_with('*') {
            break;
        }

        match decode_row(line, schema) {
            Some(node) => nodes.push(node),
            None => trace!("Skipping clu row: {}", line),
        }
    }

    debug!("Decoded {} clu nodes", nodes.len());
    nodes
}

fn decode_row(line: &str, schema: &NodeSchema) -> Option<CluNode> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < schema.fields.len() {
        return None;
    }

    let mut id = None;
    let mut state_id = None;
    let mut module_id = None;
    let mut flow = None;
    let mut layer_id = None;

    for (field, token) in schema.fields.iter().zip(tokens) {
        match field {
            Field::NodeId => id = token.parse().ok(),
            Field::StateId => state_id = token.parse().ok(),
            Field::Module => module_id = token.parse().ok(),
            Field::Flow => flow = token.parse().ok(),
            Field::LayerId => layer_id = token.parse().ok(),
            _ => {}
        }
    }

    Some(CluNode {
        id: id?,
        state_id,
        module_id: module_id?,
        flow,
        layer_id,
    })
}
