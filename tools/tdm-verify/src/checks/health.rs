use crate::checks::HealthReport;
use crate::config::{HealthRule, VerifyConfig};
use crate::reporter;
use std::fs;
use std::io::{self, Write};

/// Plain substring test; no tokenizing, so matches inside comments count too.
pub fn rule_fires(rule: &HealthRule, content: &str) -> bool {
    let present = if rule.ignore_case {
        content.to_lowercase().contains(&rule.needle.to_lowercase())
    } else {
        content.contains(&rule.needle)
    };
    let compensated = rule
        .unless
        .as_deref()
        .is_some_and(|marker| content.contains(marker));
    present && !compensated
}

/// Each target's text is read once and only when a rule refers to it.
/// Missing targets are skipped silently; unreadable ones are recorded.
pub fn evaluate(config: &VerifyConfig) -> HealthReport {
    let mut report = HealthReport::default();

    for target in &config.targets {
        let mut rules = config.rules_for(&target.id).peekable();
        if rules.peek().is_none() {
            continue;
        }

        let path = config.resolve(target);
        if !path.exists() {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                report.unreadable.push((target.label.clone(), e.to_string()));
                continue;
            }
        };

        for rule in rules {
            if rule_fires(rule, &content) {
                report.issues.push(rule.issue.clone());
            }
        }
    }

    report
}

pub fn run<W: Write>(writer: &mut W, config: &VerifyConfig) -> io::Result<bool> {
    reporter::print_section(writer, "Additional Integration Health Checks...")?;
    let report = evaluate(config);
    reporter::print_health(writer, &report)?;
    Ok(report.healthy())
}
