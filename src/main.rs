//! winthrop's main application entry point.
//! Parses and validates options, builds the in-memory artifacts, and hands
//! them to the scaffolding pipeline.

use winthrop::{
    artifacts,
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    pipeline,
    renderer::MiniJinjaRenderer,
    workspace::{GitWorkspace, Workspace},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the parsed arguments into a `Config`
/// 2. Builds the manifest, publish script and readme in memory
/// 3. Runs the pipeline against a git-backed workspace rooted at the
///    repository name, relative to the current directory
fn run(args: Args) -> Result<()> {
    let config = Config::from_args(&args)?;
    let artifacts = artifacts::build(&config);

    let renderer = MiniJinjaRenderer::new();
    let mut workspace = GitWorkspace::new(&config.reponame);
    pipeline::run(&mut workspace, &renderer, &config, &artifacts)?;

    println!("Scaffolded '{}' in {}.", config.reponame, workspace.root().display());
    Ok(())
}
