use std::fs;
use std::io::Read as _;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use treelink_core::{NodeSelection, TreeVersion, decode_link, encode_link};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a pasted tree URL or bare code and print the allocation.
    Decode {
        #[arg(value_name = "URL_OR_CODE")]
        input: String,
        #[arg(long)]
        json: bool,
        /// Tree version assumed when the link does not pin one, e.g. "3.25".
        #[arg(long = "tree-version", value_name = "3.NN", value_parser = parse_tree_version)]
        tree_version: Option<TreeVersion>,
    },
    /// Encode a JSON selection (file path, or "-" for stdin) as an official URL.
    Encode {
        #[arg(value_name = "SELECTION.json")]
        input: PathBuf,
    },
}

fn parse_tree_version(raw: &str) -> Result<TreeVersion, String> {
    TreeVersion::from_url_segment(raw).ok_or_else(|| format!("unknown tree version {raw:?}"))
}

const DEFAULT_TREE_VERSION: TreeVersion = TreeVersion::V3_25;

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            input,
            json,
            tree_version,
        } => run_decode(&input, json, tree_version.unwrap_or(DEFAULT_TREE_VERSION)),
        Command::Encode { input } => run_encode(&input),
    }
}

fn run_decode(input: &str, json: bool, default_version: TreeVersion) {
    let imported = match decode_link(input, default_version) {
        Ok(imported) => imported,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    for issue in &imported.issues {
        eprintln!("notice: {issue}; assuming tree version {default_version}");
    }

    if json {
        println!("{}", treelink_render::render_json(&imported));
    } else {
        print!("{}", treelink_render::render_text(&imported));
    }
}

fn run_encode(input: &PathBuf) {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("error: failed to read stdin: {e}");
            process::exit(1);
        }
        buf
    } else {
        match fs::read_to_string(input) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", input.display());
                process::exit(1);
            }
        }
    };

    let selection: NodeSelection = match serde_json::from_str(&raw) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("error: invalid selection JSON: {e}");
            process::exit(1);
        }
    };

    match encode_link(&selection) {
        Ok(url) => println!("{url}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
