//! `stackplan init`: write the default cluster description.

use std::path::Path;

use stackplan_core::{
    domain::{ClusterDescription, ClusterOverrides},
    error::StackplanError,
};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# Cluster description for stackplan.
#
# externalDNSName, keyName, region and availabilityZone must be set before
# 'stackplan validate' will accept this file. Every other key may be removed
# to fall back to its default.
";

/// Write the default description to `args.output`.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = args.output.as_path();

    if path.exists() && !args.force {
        return Err(CliError::FileExists {
            path: path.to_path_buf(),
        });
    }

    let document = default_document()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, document)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    output.success(&format!("Cluster description written to {}", path.display()))?;
    output.info(&next_step(path))?;
    Ok(())
}

/// The default description as a commented YAML document.
fn default_document() -> CliResult<String> {
    let overrides = ClusterOverrides::from(&ClusterDescription::default());
    let yaml = serde_yaml::to_string(&overrides).map_err(|e| StackplanError::Internal {
        message: format!("Failed to serialise default description: {e}"),
    })?;
    Ok(format!("{HEADER}{yaml}"))
}

fn next_step(path: &Path) -> String {
    format!(
        "Fill in the required keys, then run: stackplan validate {}",
        path.display()
    )
}
