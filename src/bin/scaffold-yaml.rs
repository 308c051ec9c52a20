//! CLI tool to convert a saved scaffold document to annotated YAML.

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use zome_scaffold::{read_document_file, to_yaml};

/// Convert a scaffold document (JSON or YAML) to annotated YAML.
///
/// Produces the same output the browser tool offers for download,
/// including the per-key explanation comments.
#[derive(Parser)]
#[command(name = "scaffold-yaml")]
struct Cli {
    /// Document file (JSON or YAML)
    input: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show paths and zome counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let doc = match read_document_file(&cli.input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error loading document '{}': {e}", cli.input.display());
            process::exit(1);
        }
    };

    let yaml = match to_yaml(&doc) {
        Ok(yaml) => yaml,
        Err(e) => {
            eprintln!("Error serializing document: {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Input:  {}", cli.input.display());
        eprintln!(
            "Output: {}",
            cli.output
                .as_deref()
                .map(Path::display)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "(stdout)".to_string())
        );
        eprintln!("Zomes:  {}", doc.zomes.len());
    }

    if let Some(out_path) = &cli.output {
        if let Some(parent) = out_path.parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!(
                "Error creating output directory for '{}'",
                out_path.display()
            );
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &yaml) {
            eprintln!("Error writing output file '{}': {e}", out_path.display());
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(yaml.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}
