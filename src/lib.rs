//! # infomap-reader
//!
//! A reader and writer for [Infomap](https://www.mapequation.org/infomap/)
//! network clustering output files: `.clu` cluster assignments and
//! `.tree`/`.ftree` hierarchical partitions, including the state-node and
//! multilayer variants.
//!
//! The parser is a pure function over an in-memory string or line sequence;
//! reading the file is the caller's job.
//!
//! ```
//! use infomap_reader::{parse_lines, OutputFile};
//!
//! let lines = [
//!     "# v1.7.1",
//!     "# ./Infomap network.net . --tree",
//!     "# started at 2021-01-01 00:00:00",
//!     "# completed in 0.01 s",
//!     "# partitioned into 2 levels with 2 top modules",
//!     "# codelength 1.5 bits",
//!     "# relative codelength savings 10%",
//!     "# path flow name node_id",
//!     "1:1 0.5 \"a\" 1",
//!     "1:2 0.5 \"b\" 2",
//! ];
//!
//! let tree = match parse_lines(&lines)? {
//!     OutputFile::Tree(tree) => tree,
//!     OutputFile::Clu(_) => unreachable!(),
//! };
//!
//! assert_eq!(tree.header.num_levels, Some(2));
//! assert_eq!(tree.nodes.len(), 2);
//! assert_eq!(tree.nodes[0].path, vec![1, 1]);
//! assert_eq!(tree.nodes[0].name, "a");
//! # Ok::<(), infomap_reader::ParseError>(())
//! ```
pub mod infomap;

// Re-export the main types for convenience
pub use infomap::{
    error::{ParseError, Result},
    models::{
        CluFile, CluNode, FileKind, Header, Link, MetaCluNode, Module, NodeFile, OutputFile,
        TreeFile, TreeNode,
    },
    parse, parse_clu, parse_clu_lines, parse_lines, parse_tree, parse_tree_lines,
    writer::{clu_to_string, file_to_string, meta_clu_to_string, tree_to_string},
};
