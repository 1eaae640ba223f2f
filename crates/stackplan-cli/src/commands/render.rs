//! `stackplan render`: render the stack template for a description.
//!
//! Responsibility: merge CLI path overrides over the configured paths, call
//! the stack service, and route the result to stdout or a file.

use tracing::{debug, instrument};

use stackplan_core::application::StackTemplateOptions;

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let opts = template_options(&args, &config);
    debug!(?opts, "Render inputs resolved");

    let service = super::stack_service();

    match &args.output {
        Some(path) => {
            if args.force && path.exists() {
                output.warning(&format!("Overwriting {}", path.display()))?;
            }
            let written = service
                .export_stack(&args.file, &opts, path, args.force)
                .with_cli_context(|| "exporting stack")?;
            output.success(&format!(
                "Stack template written to {} ({written} bytes)",
                path.display()
            ))?;
        }
        None => {
            let stack = service
                .render_stack(&args.file, &opts)
                .with_cli_context(|| "rendering stack")?;
            output.raw(&stack)?;
        }
    }

    Ok(())
}

/// Flags win over the `paths` section of the configuration. `--ami`
/// replaces the description's image.
fn template_options(args: &RenderArgs, config: &AppConfig) -> StackTemplateOptions {
    let defaults = config.template_options();
    StackTemplateOptions {
        assets_dir: args.assets_dir.clone().unwrap_or(defaults.assets_dir),
        controller_template: args
            .controller_template
            .clone()
            .unwrap_or(defaults.controller_template),
        worker_template: args
            .worker_template
            .clone()
            .unwrap_or(defaults.worker_template),
        stack_template: args
            .stack_template
            .clone()
            .unwrap_or(defaults.stack_template),
        ami: args.ami.clone(),
    }
}
