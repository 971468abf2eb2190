use crate::checks::ContentOutcome;
use crate::config::Pattern;
use crate::reporter;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Compile with `^`/`$` anchoring per line and `.` matching newlines, so a
/// pattern can span several declarations.
pub fn compile(pattern: &Pattern) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&pattern.regex)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
}

/// Names of the patterns that do not match anywhere in `content`.
pub fn missing_patterns(content: &str, patterns: &[Pattern]) -> Vec<String> {
    let mut missing = Vec::new();
    for pattern in patterns {
        match compile(pattern) {
            Ok(re) => {
                if !re.is_match(content) {
                    missing.push(pattern.name.clone());
                }
            }
            Err(e) => missing.push(format!("{} (invalid regex: {e})", pattern.name)),
        }
    }
    missing
}

/// Read `path` once and evaluate every pattern against it.
pub fn evaluate(path: &Path, patterns: &[Pattern]) -> ContentOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return ContentOutcome::Unreadable(e.to_string()),
    };

    let missing = missing_patterns(&content, patterns);
    if missing.is_empty() {
        ContentOutcome::AllFound
    } else {
        ContentOutcome::Missing(missing)
    }
}

pub fn check_content<W: Write>(
    writer: &mut W,
    path: &Path,
    patterns: &[Pattern],
    label: &str,
) -> io::Result<bool> {
    let outcome = evaluate(path, patterns);
    reporter::print_content(writer, label, &outcome)?;
    Ok(outcome.passed())
}
