//! Command-line interface implementation for winthrop.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};

/// Command-line arguments structure for winthrop.
///
/// Flags that default to true are exposed as `--no-*` switches; the plain
/// boolean flags default to false. Enum-valued options are parsed as raw
/// strings here and validated into [`crate::config::Config`] before the
/// pipeline starts.
#[derive(Parser, Debug)]
#[command(author, version, about = "winthrop: one-shot scaffolding for npm module repositories", long_about = None)]
pub struct Args {
    /// Name of the repository to create
    #[arg(value_name = "REPONAME")]
    pub reponame: String,

    /// Run the module through browserify before minification
    #[arg(short, long)]
    pub browserify: bool,

    /// Skip source code coverage tooling
    #[arg(long = "no-coverage", action = ArgAction::SetFalse)]
    pub coverage: bool,

    /// Documentation style used to analyze source code
    #[arg(short, long, value_name = "STYLE", default_value = "docco")]
    pub doc: String,

    /// Mark the module as executable
    #[arg(short, long)]
    pub executable: bool,

    /// Prefer a global npm installation
    #[arg(short, long)]
    pub global: bool,

    /// Skip Halstead complexity reporting
    #[arg(long = "no-halstead", action = ArgAction::SetFalse)]
    pub halstead: bool,

    /// License to use
    #[arg(short, long, value_name = "NAME", default_value = "MIT")]
    pub license: String,

    /// Skip minification of the main module
    #[arg(long = "no-minify", action = ArgAction::SetFalse)]
    pub minify: bool,

    /// Mark the module as closed source
    #[arg(long = "no-open", action = ArgAction::SetFalse)]
    pub open: bool,

    /// Scaffold a standalone blog: the site scaffold lands on the main branch
    #[arg(long)]
    pub blog: bool,

    /// Skip the site-build section of the publish script
    #[arg(long = "no-site", action = ArgAction::SetFalse)]
    pub site: bool,

    /// Test framework to use
    #[arg(short, long, value_name = "SUITE", default_value = "nodeunit")]
    pub test: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the repository name is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
