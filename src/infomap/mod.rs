//! Core result-file parsing module

pub mod error;
pub mod models;
pub mod tokenize;
pub mod writer;

mod clu;
mod header;
mod links;
mod schema;
mod tree;

use log::debug;

use models::{CluFile, FileKind, OutputFile, TreeFile};
use schema::NodeSchema;

pub use error::{ParseError, Result};

/// Parse a result file of either family, detecting the layout from the
/// column header line.
///
/// Edge lines inside a trailing module section are scanned past but not
/// collected; use [`parse_tree`] to collect them.
///
/// # Errors
/// Fails when the input is shorter than a result file can be, when the
/// version or invocation line is malformed, or when no recognizable column
/// header line precedes the data section.
pub fn parse(input: &str) -> Result<OutputFile> {
    let lines: Vec<&str> = input.lines().collect();
    parse_lines(&lines)
}

/// [`parse`] over a pre-split line sequence.
pub fn parse_lines(lines: &[&str]) -> Result<OutputFile> {
    let schema = detect_schema(lines)?;

    match schema.family() {
        Some(FileKind::Clu) => {
            debug!("Dispatching to the cluster decoder");
            Ok(OutputFile::Clu(parse_clu_with(lines, &schema)?))
        }
        Some(FileKind::Tree) => {
            debug!("Dispatching to the tree decoder");
            Ok(OutputFile::Tree(parse_tree_with(lines, &schema, false)?))
        }
        None => Err(ParseError::UnrecognizedSchema(schema.raw)),
    }
}

/// Parse a cluster-assignment (clu) file.
///
/// # Errors
/// Fails on a malformed prologue or when the column header line is missing
/// or does not describe a cluster layout.
pub fn parse_clu(input: &str) -> Result<CluFile> {
    let lines: Vec<&str> = input.lines().collect();
    parse_clu_lines(&lines)
}

/// [`parse_clu`] over a pre-split line sequence.
pub fn parse_clu_lines(lines: &[&str]) -> Result<CluFile> {
    let schema = detect_schema(lines)?;
    if schema.family() != Some(FileKind::Clu) {
        return Err(ParseError::UnrecognizedSchema(schema.raw));
    }
    parse_clu_with(lines, &schema)
}

/// Parse a hierarchical (tree or ftree) file.
///
/// With `collect_links` set, edge lines in a trailing module section are
/// collected into each module's link list; otherwise the modules are still
/// parsed but their edges are dropped.
///
/// # Errors
/// Fails on a malformed prologue or when the column header line is missing
/// or does not describe a tree layout.
pub fn parse_tree(input: &str, collect_links: bool) -> Result<TreeFile> {
    let lines: Vec<&str> = input.lines().collect();
    parse_tree_lines(&lines, collect_links)
}

/// [`parse_tree`] over a pre-split line sequence.
pub fn parse_tree_lines(lines: &[&str], collect_links: bool) -> Result<TreeFile> {
    let schema = detect_schema(lines)?;
    if schema.family() != Some(FileKind::Tree) {
        return Err(ParseError::UnrecognizedSchema(schema.raw));
    }
    parse_tree_with(lines, &schema, collect_links)
}

/// Length gate plus schema detection, shared by all entries.
fn detect_schema(lines: &[&str]) -> Result<NodeSchema> {
    if lines.len() < header::MIN_LINES {
        return Err(ParseError::TooShort { found: lines.len() });
    }
    schema::detect(lines).ok_or(ParseError::MissingSchema)
}

fn parse_clu_with(lines: &[&str], schema: &NodeSchema) -> Result<CluFile> {
    let header = header::parse(lines)?;
    let nodes = clu::decode(lines, schema);
    Ok(CluFile { header, nodes })
}

fn parse_tree_with(lines: &[&str], schema: &NodeSchema, collect_links: bool) -> Result<TreeFile> {
    let header = header::parse(lines)?;
    let section = tree::decode(lines, schema);

    let (directed, modules) = match section.section_start {
        Some(start) => {
            let links = links::parse(&lines[start..], collect_links);
            (Some(links.directed), Some(links.modules))
        }
        None => (None, None),
    };

    Ok(TreeFile {
        header,
        nodes: section.nodes,
        directed,
        modules,
    })
}
