use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sitegraft_core::{ImportConfig, Pipeline};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Import a mirrored legacy HTML site into clean Astro pages
#[derive(Parser, Debug)]
#[command(name = "sitegraft")]
#[command(author = "Sitegraft Contributors")]
#[command(version = VERSION)]
#[command(about = "Import a mirrored legacy HTML site into Astro pages", long_about = None)]
struct Args {
    /// Mirror root directory (default: the configured mirror location)
    #[arg(long, value_name = "DIR")]
    mirror_root: Option<PathBuf>,

    /// Output directory for generated pages
    #[arg(long, value_name = "DIR")]
    output_root: Option<PathBuf>,

    /// Base path prefix for rewritten internal links
    #[arg(long, value_name = "PATH")]
    base_path: Option<String>,

    /// Site title appended to every page title
    #[arg(long, value_name = "TITLE")]
    site_title: Option<String>,

    /// Enable step-by-step progress logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let mut config = ImportConfig::default();
    if let Some(root) = args.mirror_root {
        config.mirror_root = root;
    }
    if let Some(root) = args.output_root {
        config.output_root = root;
    }
    if let Some(base) = args.base_path {
        config.base_path = base;
    }
    if let Some(title) = args.site_title {
        config.site_title = title;
    }

    if args.verbose {
        echo::print_step(1, 2, &format!("Importing mirror from {}", config.mirror_root.display()));
    }

    let pipeline = Pipeline::new(config);
    let summary = pipeline.run().context("Import run failed")?;

    if args.verbose {
        echo::print_step(2, 2, "Writing summary");
    }

    for skip in &summary.skipped {
        echo::print_warning(&format!("no readable content for {} ({})", skip.source_path, skip.reason));
    }

    println!("Generated/updated {} pages from site mirror.", summary.pages.len());
    for page in &summary.pages {
        println!("{} -> {}", page.route, page.output_path.display());
    }

    if args.verbose {
        echo::print_success(&format!(
            "{} pages generated, {} documents skipped",
            summary.pages.len(),
            summary.skipped.len()
        ));
    }

    Ok(())
}
