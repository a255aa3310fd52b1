//! Column layout detection from the commented schema line

use log::debug;

use super::models::FileKind;

/// One column of a node-record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    NodeId,
    StateId,
    Module,
    Flow,
    Name,
    Path,
    LayerId,
    /// A token outside the known vocabulary; decoders skip the column.
    Unknown,
}

impl From<&str> for Field {
    fn from(token: &str) -> Self {
        match token {
            "node_id" => Field::NodeId,
            "state_id" => Field::StateId,
            "module" => Field::Module,
            "flow" => Field::Flow,
            "name" => Field::Name,
            "path" => Field::Path,
            "layer_id" => Field::LayerId,
            _ => Field::Unknown,
        }
    }
}

/// The ordered column layout of the node section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeSchema {
    pub fields: Vec<Field>,
    /// The schema line content as written, for diagnostics.
    pub raw: String,
}

impl NodeSchema {
    /// Which decoder family this layout belongs to, if any.
    ///
    /// Cluster layouts start with an identifier column and carry a module
    /// column; tree layouts start with the path column.
    pub fn family(&self) -> Option<FileKind> {
        match self.fields.first()? {
            Field::Path => Some(FileKind::Tree),
            Field::NodeId | Field::StateId => {
                let is_clu = self.fields.contains(&Field::Module)
                    && !self.fields.contains(&Field::Path);
                is_clu.then_some(FileKind::Clu)
            }
            _ => None,
        }
    }
}

/// Find the schema line in the comment prologue.
///
/// The schema line is the first comment line whose first token is `path`,
/// `node_id` or `state_id`. Tokens come from whitespace splitting, so any
/// spacing after the `# ` marker is accepted. Scanning stops at the first
/// non-comment line: the column layout must be declared before the data
/// section begins.
pub(crate) fn detect(lines: &[&str]) -> Option<NodeSchema> {
    for line in lines {
        if !line.starts_with('#') {
            break;
        }

        let rest = match line.strip_prefix("# ") {
            Some(rest) => rest,
            None => continue,
        };

        let first = match rest.split_whitespace().next() {
            Some(first) => first,
            None => continue,
        };

        if matches!(first, "path" | "node_id" | "state_id") {
            let fields = rest.split_whitespace().map(Field::from).collect();
            debug!("Schema line: {}", rest);
            return Some(NodeSchema {
                fields,
                raw: rest.to_string(),
            });
        }
    }

    None
}
