use crate::checks::content::check_content;
use crate::checks::exists::{check_exists, check_optional};
use crate::config::VerifyConfig;
use crate::reporter;
use std::io::{self, Write};

/// Existence pass over every target, then one content pass per target with
/// patterns. Stops before reading anything if a required file is missing.
pub fn run<W: Write>(writer: &mut W, config: &VerifyConfig) -> io::Result<bool> {
    reporter::print_header(writer)?;

    let mut all_required_exist = true;
    for target in &config.targets {
        let path = config.resolve(target);
        if target.required {
            if !check_exists(writer, &path, &target.label)? {
                all_required_exist = false;
            }
        } else {
            check_optional(writer, &path, &target.label)?;
        }
    }

    if !all_required_exist {
        reporter::print_critical_missing(writer)?;
        return Ok(false);
    }

    reporter::print_section(writer, "Verifying File Content...")?;

    let mut failed: Vec<&str> = Vec::new();
    for target in config.targets.iter().filter(|t| !t.patterns.is_empty()) {
        let path = config.resolve(target);
        // An optional target that is absent has nothing to check.
        if !target.required && !path.exists() {
            continue;
        }
        let label = format!("{} Content", target.label);
        if !check_content(writer, &path, &target.patterns, &label)? {
            failed.push(&target.label);
        }
    }

    reporter::print_structural_summary(writer, &config.summary, &failed)?;
    Ok(failed.is_empty())
}
