//! Print command implementation.
//!
//! Assembles the configuration and writes it as JSON to stdout or a file.

use std::fs;

use kiln_config::assemble;

use crate::cli::PrintArgs;
use crate::commands::load_project;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the print command.
///
/// `--output` wins over the `output` setting; `--compact` wins over `pretty`.
pub fn execute(args: PrintArgs) -> Result<()> {
    let project = load_project(&args.project)?;
    let config = assemble(project.mode, &project.context);

    let pretty = project.settings.pretty && !args.compact;
    let json = config
        .to_json(pretty)
        .context("Failed to render configuration")?;

    match args.output.or(project.settings.output) {
        Some(path) => {
            let path = project.cwd.join(path);
            fs::write(&path, format!("{json}\n")).with_path(&path)?;
            ui::success(&format!(
                "Wrote {} configuration to {}",
                project.mode,
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
