//! Trailing module and link section parsing for ftree files

use log::{debug, trace, warn};

use super::models::{Link, Module};
use super::tree::parse_path;

/// Parsed trailing section: directedness plus one summary per module.
#[derive(Debug)]
pub(crate) struct LinkSection {
    pub directed: bool,
    pub modules: Vec<Module>,
}

/// Parse the module sections that follow the node section.
///
/// Section structure:
/// - `*Links directed` or `*Links undirected` direction header
/// - one `*Links <address> <enterFlow> <exitFlow> <numEdges> <numChildren>`
///   line per module, where `<address>` is `root` or a `1:2`-style path
/// - `<source> <target> <flow>` edge lines under each module line
///
/// A missing or malformed direction header degrades to undirected. Edge
/// lines are collected only when `collect_links` is set; they are scanned
/// past either way so section boundaries stay correct.
pub(crate) fn parse(lines: &[&str], collect_links: bool) -> LinkSection {
    let mut directed = false;
    let mut modules: Vec<Module> = Vec::new();
    let mut header_seen = false;

    for line in lines {
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if line.starts_with('*') {
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if !header_seen {
                header_seen = true;
                if tokens.len() == 2 && tokens[0] == "*Links" {
                    directed = tokens[1] == "directed";
                    continue;
                }
                warn!("Link section has no direction header, assuming undirected");
            }

            match parse_module(&tokens[1..], collect_links) {
                Some(module) => modules.push(module),
                None => trace!("Skipping module line: {}", line),
            }
            continue;
        }

        if !collect_links {
            continue;
        }

        // An edge of the most recently opened module.
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let Some(Module {
            links: Some(links), ..
        }) = modules.last_mut()
        {
            match parse_link(&tokens) {
                Some(link) => links.push(link),
                None => trace!("Skipping edge line: {}", line),
            }
        }
    }

    debug!(
        "Parsed {} modules (directed: {})",
        modules.len(),
        directed
    );

    LinkSection { directed, modules }
}

/// Decode the `<address> <enterFlow> <exitFlow> <numEdges> <numChildren>`
/// payload of a module line. The `root` address maps to the path `[0]`.
fn parse_module(tokens: &[&str], collect_links: bool) -> Option<Module> {
    if tokens.len() < 5 {
        return None;
    }

    let path = if tokens[0] == "root" {
        vec![0]
    } else {
        parse_path(tokens[0])?
    };

    Some(Module {
        path,
        enter_flow: tokens[1].parse().ok()?,
        exit_flow: tokens[2].parse().ok()?,
        num_edges: tokens[3].parse().ok()?,
        num_children: tokens[4].parse().ok()?,
        links: collect_links.then(Vec::new),
    })
}

fn parse_link(tokens: &[&str]) -> Option<Link> {
    if tokens.len() < 3 {
        return None;
    }

    Some(Link {
        source: tokens[0].parse().ok()?,
        target: tokens[1].parse().ok()?,
        flow: tokens[2].parse().ok()?,
    })
}
