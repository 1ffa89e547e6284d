//! Route command implementation.
//!
//! Reports which rule handles a file, and for assets whether it is inlined.
//! Relative paths are resolved against the context directory, the same base
//! the lint rule's include directory is built from.

use std::fs;
use std::path::Path;

use kiln_config::{AssetRoute, Rule, assemble};

use crate::cli::RouteArgs;
use crate::commands::load_project;
use crate::error::{CliError, Result, ResultExt};

/// Execute the route command.
pub fn execute(args: RouteArgs) -> Result<()> {
    let project = load_project(&args.project)?;
    let config = assemble(project.mode, &project.context);
    let path = project.context.join(&args.file);

    let loaders = config.module.loaders.matcher()?;
    let rule = loaders
        .find(&path)
        .ok_or_else(|| CliError::NoMatchingRule(args.file.clone()))?;

    let pre_loaders = config.module.pre_loaders.matcher()?;
    for pre in pre_loaders.find_all(&path) {
        println!("pre:     {}", pre.request());
    }

    println!("rule:    {}", rule.test);
    println!("loaders: {}", rule.request());

    if let Some(target) = rule.extract_target() {
        println!("extract: {}", config.output.public_url(target));
    }

    // Size only matters for asset rules
    if rule.route(0).is_some() {
        let size = match args.size {
            Some(size) => size,
            None => file_size(&path)?,
        };
        println!("route:   {}", describe_route(rule, size));
    }

    Ok(())
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path).with_path(path)?.len())
}

pub(crate) fn describe_route(rule: &Rule, size: u64) -> String {
    match (rule.route(size), rule.inline_limit()) {
        (Some(AssetRoute::Inline), Some(limit)) => {
            format!("inline ({size} bytes < {limit} byte limit)")
        }
        (Some(AssetRoute::Emit), Some(limit)) => {
            format!("emit ({size} bytes >= {limit} byte limit)")
        }
        (Some(route), None) => format!("{} ({size} bytes)", route.as_str()),
        (None, _) => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::build_rule_set;

    #[test]
    fn describes_threshold_decisions() {
        let rules = build_rule_set();
        let matcher = rules.matcher().unwrap();
        let png = matcher.find("logo.png").unwrap();
        assert_eq!(
            describe_route(png, 9_999),
            "inline (9999 bytes < 10000 byte limit)"
        );
        assert_eq!(
            describe_route(png, 10_000),
            "emit (10000 bytes >= 10000 byte limit)"
        );

        let eot = matcher.find("font.eot").unwrap();
        assert_eq!(describe_route(eot, 42), "emit (42 bytes)");
    }
}
