//! Check command implementation.
//!
//! Validates the assembled configuration without rendering it.

use kiln_config::{ConfigValidator, FsValidator, SAMPLE_FILES, SchemaValidator, assemble};

use crate::cli::CheckArgs;
use crate::commands::load_project;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Schema validation (plugin order, patterns, extraction targets)
/// 2. Filesystem validation, with `--fs`
/// 3. Shadowed-rule report over one sample file per supported type
pub fn execute(args: CheckArgs) -> Result<()> {
    let project = load_project(&args.project)?;
    let config = assemble(project.mode, &project.context);

    ui::info(&format!(
        "Checking {} configuration for {}",
        project.mode,
        project.context.display()
    ));

    if args.fs {
        FsValidator::new(&project.cwd).validate(&config)?;
    } else {
        SchemaValidator.validate(&config)?;
    }

    let matcher = config.module.loaders.matcher()?;
    for sample in matcher.overlaps(SAMPLE_FILES) {
        ui::warning(&format!(
            "{sample} matches more than one rule; the first one wins"
        ));
    }

    ui::success(&format!(
        "Configuration is valid ({} plugins, {} rules)",
        config.plugins.len(),
        config.module.loaders.len() + config.module.pre_loaders.len()
    ));
    Ok(())
}
