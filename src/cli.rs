//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: project scaffolding from named templates", long_about = None)]
pub struct Args {
    /// Name of the template to instantiate
    #[arg(value_name = "TEMPLATE", required_unless_present = "list")]
    pub template: Option<String>,

    /// Directory where the generated project will be created; must not exist
    #[arg(value_name = "OUTPUT_DIR", required_unless_present = "list")]
    pub output_dir: Option<PathBuf>,

    /// Directory containing the available templates, one per subdirectory
    #[arg(short, long, value_name = "DIR")]
    pub templates_root: PathBuf,

    /// Path to a JSON file with substitution rules
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// List the available templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
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
