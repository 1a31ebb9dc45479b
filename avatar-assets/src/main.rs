use std::path::PathBuf;

use anyhow::Result;
use avatar_assets::ShapeKeyPaths;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Project root to use instead of the one this tool was built in
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over --verbose.
    let default_filter = if args.verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp_secs()
    .try_init();

    let paths = match args.root {
        Some(root) => ShapeKeyPaths::from_root(root)?,
        None => ShapeKeyPaths::resolve()?,
    };

    // Shape-key generation writes to this path once it exists.
    log::info!(
        "Reserved {} (served at {})",
        paths.output_path().display(),
        paths.public_url()
    );

    Ok(())
}
