//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, coordinates the template
//! repository and instancer, and presents the scaffold result.

use stencil::{
    cli::{get_args, Args},
    config::load_rules,
    error::{default_error_handler, Error, Result},
    instancer::{Instancer, ScaffoldRequest},
    logger::init_logger,
    repository::TemplateRepository,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Opens the template repository over the explicit templates root
/// 2. In list mode, prints the available template names and returns
/// 3. Loads substitution rules if a rules file was given
/// 4. Runs the instancer and prints the result summary
///
/// Exits with status code 1 when the result is not a full success; per-file
/// errors are printed as part of the summary rather than raised.
fn run(args: Args) -> Result<()> {
    let repository = TemplateRepository::new(&args.templates_root);

    if args.list {
        for template in repository.list()? {
            println!("{}", template.name);
        }
        return Ok(());
    }

    // Clap guarantees both positionals outside of list mode.
    let template_name = args.template.ok_or_else(|| {
        Error::ConfigError("a template name is required".to_string())
    })?;
    let target_dir = args.output_dir.ok_or_else(|| {
        Error::ConfigError("an output directory is required".to_string())
    })?;

    let rules = match &args.rules {
        Some(rules_path) => load_rules(rules_path)?,
        None => Vec::new(),
    };

    let request = ScaffoldRequest { template_name, target_dir, rules };
    let result = Instancer::new(&repository).instance(&request)?;

    for line in result.summary_lines() {
        println!("{}", line);
    }

    if !result.is_full_success() {
        std::process::exit(1);
    }

    println!(
        "Project scaffolded successfully in {}.",
        request.target_dir.display()
    );
    Ok(())
}
