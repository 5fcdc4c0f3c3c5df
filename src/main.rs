use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use treesearch::{find_shallowest_duplicate, tree, Node};

#[derive(Parser, Debug)]
#[command(name = "treesearch", about = "Find the shallowest duplicate identifier in a tree")]
struct Cli {
    /// Log search progress to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report the shallowest duplicate identifier and its depth.
    Check {
        /// Tree file (one identifier per line, two spaces per level).
        tree: PathBuf,
        /// Exit with an error status if a duplicate is found.
        #[arg(long)]
        fail_on_duplicate: bool,
    },
    /// Print the identifiers of each level, root first.
    Levels {
        /// Tree file (one identifier per line, two spaces per level).
        tree: PathBuf,
    },
    /// Re-emit the tree in normalised form.
    Render {
        /// Tree file (one identifier per line, two spaces per level).
        tree: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            tree,
            fail_on_duplicate,
        } => run_check(&tree, fail_on_duplicate)?,
        Commands::Levels { tree } => run_levels(&tree)?,
        Commands::Render { tree } => run_render(&tree)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(path: &Path, fail_on_duplicate: bool) -> Result<()> {
    let root = read_tree_file(path)?;

    match find_shallowest_duplicate(root.as_ref()) {
        Some(found) => {
            println!("duplicate\t{}\tdepth={}", found.id, found.depth);
            if fail_on_duplicate {
                bail!(
                    "duplicate identifier '{}' at depth {} in {}",
                    found.id,
                    found.depth,
                    path.display()
                );
            }
        }
        None => println!("no duplicate found"),
    }

    Ok(())
}

fn run_levels(path: &Path) -> Result<()> {
    let root = read_tree_file(path)?;

    for (depth, level) in tree::Levels::from(root.as_ref()).enumerate() {
        let ids: Vec<&str> = level.iter().map(|node| node.id.as_str()).collect();
        println!("{}\t{}", depth, ids.join(" "));
    }

    Ok(())
}

fn run_render(path: &Path) -> Result<()> {
    if let Some(root) = read_tree_file(path)? {
        print!("{}", root);
    }
    Ok(())
}

fn read_tree_file(path: &Path) -> Result<Option<Node<String>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tree from {}", path.display()))?;
    let root = tree::parse(&contents)
        .with_context(|| format!("failed to parse tree in {}", path.display()))?;

    tracing::debug!(
        nodes = root.as_ref().map_or(0, Node::size),
        path = %path.display(),
        "loaded tree"
    );
    Ok(root)
}
