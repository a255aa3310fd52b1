//! Data structures representing parsed Infomap output

/// Run metadata from the comment prologue of a result file.
///
/// `version` and `args` are the two mandatory prologue lines; every other
/// field is present only when its annotation line exists in the file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Header {
    /// Engine version tag, e.g. `v2.4.0`. Pre-release suffixes are not kept.
    pub version: String,
    /// The invocation string, verbatim.
    pub args: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub started_at: Option<String>,
    /// Wall-clock runtime in seconds.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub completed_in: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub num_levels: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub num_top_modules: Option<u32>,
    /// Codelength of the partition in bits.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub codelength: Option<f64>,
    /// Stored as a fraction in `[0, 1]`, not as the percentage written in the file.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub relative_codelength_savings: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bipartite_start_id: Option<u32>,
}

/// One row of a cluster-assignment (clu) file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CluNode {
    /// Physical node id.
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub state_id: Option<u32>,
    pub module_id: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub flow: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub layer_id: Option<u32>,
}

/// One row of a meta-assignment clu file, mapping nodes to metadata
/// categories instead of modules.
///
/// Only produced by callers for serialization; `meta` is not a recognized
/// column token, so the parser never fills this variant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MetaCluNode {
    pub id: u32,
    pub meta: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub flow: Option<f64>,
}

/// One row of a hierarchical (tree or ftree) file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNode {
    /// Hierarchical module address, root-first. Never empty.
    pub path: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub flow: Option<f64>,
    /// Node name with the surrounding quotes stripped.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub state_id: Option<u32>,
    /// Physical node id.
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub layer_id: Option<u32>,
}

/// One edge inside a module's link section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub source: u32,
    pub target: u32,
    pub flow: f64,
}

/// Aggregate summary of one module, from the trailing link sections of an
/// ftree file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Module {
    /// Hierarchical address; the root module is the singleton `[0]`.
    pub path: Vec<u32>,
    pub enter_flow: f64,
    pub exit_flow: f64,
    pub num_edges: u32,
    pub num_children: u32,
    /// Present only when edge collection was requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub links: Option<Vec<Link>>,
}

/// A fully parsed cluster-assignment file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CluFile {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub header: Header,
    /// Node records in input order.
    pub nodes: Vec<CluNode>,
}

/// A fully parsed hierarchical file, including the trailing module section
/// when the file has one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeFile {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub header: Header,
    /// Node records in input order.
    pub nodes: Vec<TreeNode>,
    /// Link-section directedness; `None` when the file has no link section.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub directed: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub modules: Option<Vec<Module>>,
}

/// Result of the auto-detecting entry: a file of either family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OutputFile {
    Clu(CluFile),
    Tree(TreeFile),
}

impl OutputFile {
    /// The run metadata shared by both families.
    pub fn header(&self) -> &Header {
        match self {
            OutputFile::Clu(file) => &file.header,
            OutputFile::Tree(file) => &file.header,
        }
    }

    /// Which family this file belongs to.
    pub fn kind(&self) -> FileKind {
        match self {
            OutputFile::Clu(_) => FileKind::Clu,
            OutputFile::Tree(_) => FileKind::Tree,
        }
    }
}

/// Node-record lists accepted by the serializer in [`crate::infomap::writer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NodeFile {
    Clu(Vec<CluNode>),
    MetaClu(Vec<MetaCluNode>),
    Tree(Vec<TreeNode>),
}

/// The two result-file families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Clu,
    Tree,
}

impl FileKind {
    /// Classify a file by its extension.
    ///
    /// `tree` and `ftree` both map to [`FileKind::Tree`]; link sections are
    /// detected from the content, not from the name.
    pub fn from_filename(filename: &str) -> Option<FileKind> {
        match filename.rsplit('.').next() {
            Some("clu") => Some(FileKind::Clu),
            Some("tree") | Some("ftree") => Some(FileKind::Tree),
            _ => None,
        }
    }
}
