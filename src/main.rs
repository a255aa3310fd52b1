use infomap_reader::{parse, parse_clu, parse_tree, FileKind, OutputFile};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-clu-tree-or-ftree-file> [--links]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let collect_links = args.iter().any(|arg| arg == "--links");

    println!("Reading result file: {}", path);
    if collect_links {
        println!("Collecting module edge lists.");
    }
    println!("{}", "=".repeat(60));

    let input = match fs::read_to_string(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("\nERROR: Failed to read {}", path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    // Route by extension when possible; fall back to schema detection.
    let result = match FileKind::from_filename(path) {
        Some(FileKind::Clu) => parse_clu(&input).map(OutputFile::Clu),
        Some(FileKind::Tree) => parse_tree(&input, collect_links).map(OutputFile::Tree),
        None => parse(&input),
    };

    match result {
        Ok(file) => report(&file),
        Err(e) => {
            eprintln!("\nERROR: Failed to parse result file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn report(file: &OutputFile) {
    let header = file.header();

    println!("\n{}", "=".repeat(60));
    println!("SUCCESS! Parsing completed.");
    println!("{}", "=".repeat(60));

    println!("\nRun Information:");
    println!("  Version: {}", header.version);
    println!("  Arguments: {}", header.args);
    if let Some(started_at) = &header.started_at {
        println!("  Started at: {}", started_at);
    }
    if let Some(completed_in) = header.completed_in {
        println!("  Completed in: {} s", completed_in);
    }
    if let (Some(levels), Some(top_modules)) = (header.num_levels, header.num_top_modules) {
        println!("  Partition: {} levels, {} top modules", levels, top_modules);
    }
    if let Some(codelength) = header.codelength {
        println!("  Codelength: {} bits", codelength);
    }
    if let Some(savings) = header.relative_codelength_savings {
        println!("  Relative codelength savings: {}%", savings * 100.0);
    }

    match file {
        OutputFile::Clu(clu) => {
            println!("\nStatistics:");
            println!("  Node records: {}", clu.nodes.len());

            println!("\nSample Nodes (first 10):");
            for (i, node) in clu.nodes.iter().take(10).enumerate() {
                println!("  {}. node {} -> module {}", i + 1, node.id, node.module_id);
            }
            if clu.nodes.len() > 10 {
                println!("  ... and {} more", clu.nodes.len() - 10);
            }
        }
        OutputFile::Tree(tree) => {
            println!("\nStatistics:");
            println!("  Node records: {}", tree.nodes.len());
            if let Some(modules) = &tree.modules {
                println!("  Modules: {}", modules.len());
            }
            if let Some(directed) = tree.directed {
                println!(
                    "  Links: {}",
                    if directed { "directed" } else { "undirected" }
                );
            }

            println!("\nSample Nodes (first 10):");
            for (i, node) in tree.nodes.iter().take(10).enumerate() {
                let path = node
                    .path
                    .iter()
                    .map(|step| step.to_string())
                    .collect::<Vec<_>>()
                    .join(":");
                println!("  {}. {} \"{}\" ({})", i + 1, path, node.name, node.id);
            }
            if tree.nodes.len() > 10 {
                println!("  ... and {} more", tree.nodes.len() - 10);
            }

            if let Some(modules) = &tree.modules {
                println!("\nTop Modules (first 5):");
                for (i, module) in modules.iter().take(5).enumerate() {
                    let path = module
                        .path
                        .iter()
                        .map(|step| step.to_string())
                        .collect::<Vec<_>>()
                        .join(":");
                    let edges = module
                        .links
                        .as_ref()
                        .map(|links| links.len().to_string())
                        .unwrap_or_else(|| format!("{} (not collected)", module.num_edges));
                    println!(
                        "  {}. module {}: {} children, {} edges",
                        i + 1,
                        path,
                        module.num_children,
                        edges
                    );
                }
            }
        }
    }
}
