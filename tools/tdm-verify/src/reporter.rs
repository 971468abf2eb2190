use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};
use std::path::Path;

use crate::checks::{ContentOutcome, HealthReport};
use crate::config::SummaryText;

pub fn print_start<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Starting CTFBot + TDM Integration Verification...")?;
    writeln!(w)
}

pub fn print_header<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        "CTFBot + TDM Integration Verification".if_supports_color(Stdout, |s| s.bold())
    )?;
    writeln!(w, "{}", "=".repeat(50))
}

pub fn print_section<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", title.if_supports_color(Stdout, |s| s.bold()))
}

pub fn print_exists<W: Write>(w: &mut W, ok: bool, label: &str, path: &Path) -> io::Result<()> {
    if ok {
        writeln!(
            w,
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            label,
            path.display().if_supports_color(Stdout, |s| s.dimmed()),
        )
    } else {
        writeln!(
            w,
            "{} {}: {} {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            label,
            path.display(),
            "NOT FOUND".if_supports_color(Stdout, |s| s.red()),
        )
    }
}

pub fn print_optional_missing<W: Write>(w: &mut W, label: &str, path: &Path) -> io::Result<()> {
    writeln!(
        w,
        "{} {}: {} {}",
        "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
        label,
        path.display(),
        "not found (optional)".if_supports_color(Stdout, |s| s.yellow()),
    )
}

pub fn print_critical_missing<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{} {}",
        "\u{2717}".if_supports_color(Stdout, |s| s.red()),
        "CRITICAL: Required files missing. Cannot proceed with verification."
            .if_supports_color(Stdout, |s| s.red()),
    )
}

pub fn print_content<W: Write>(
    w: &mut W,
    label: &str,
    outcome: &ContentOutcome,
) -> io::Result<()> {
    match outcome {
        ContentOutcome::AllFound => writeln!(
            w,
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            label,
            "All required patterns found".if_supports_color(Stdout, |s| s.green()),
        ),
        ContentOutcome::Missing(names) => writeln!(
            w,
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            label,
            format!("Missing patterns: {}", names.join(", "))
                .if_supports_color(Stdout, |s| s.red()),
        ),
        ContentOutcome::Unreadable(err) => writeln!(
            w,
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            label,
            format!("Error reading file - {err}")
                .if_supports_color(Stdout, |s| s.red()),
        ),
    }
}

/// `failed` holds the labels of files whose content checks did not pass.
pub fn print_structural_summary<W: Write>(
    w: &mut W,
    summary: &SummaryText,
    failed: &[&str],
) -> io::Result<()> {
    print_section(w, "Verification Summary")?;
    writeln!(w, "{}", "=".repeat(30))?;

    if failed.is_empty() {
        writeln!(
            w,
            "{}",
            "ALL CHECKS PASSED!".if_supports_color(Stdout, |s| s.green())
        )?;
        if !summary.confirmations.is_empty() {
            writeln!(w)?;
            for line in &summary.confirmations {
                writeln!(w, "{} {}", "\u{2713}".if_supports_color(Stdout, |s| s.green()), line)?;
            }
        }
        if !summary.next_steps.is_empty() {
            writeln!(w)?;
            writeln!(w, "{}", "Next Steps:".if_supports_color(Stdout, |s| s.bold()))?;
            for (i, step) in summary.next_steps.iter().enumerate() {
                writeln!(w, "{}. {}", i + 1, step)?;
            }
        }
        return Ok(());
    }

    writeln!(w, "{}", "ISSUES FOUND!".if_supports_color(Stdout, |s| s.red()))?;
    writeln!(w)?;
    writeln!(w, "{}", "Fix Required:".if_supports_color(Stdout, |s| s.bold()))?;
    for label in failed {
        writeln!(w, "- {label} needs attention")?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "{}",
        "Refer to error messages above for specific issues"
            .if_supports_color(Stdout, |s| s.dimmed())
    )
}

pub fn print_health<W: Write>(w: &mut W, report: &HealthReport) -> io::Result<()> {
    for (label, err) in &report.unreadable {
        writeln!(
            w,
            "{} {}: {}",
            "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
            label,
            format!("could not read file - {err}")
                .if_supports_color(Stdout, |s| s.yellow()),
        )?;
    }

    if report.healthy() {
        return writeln!(
            w,
            "{} {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            "No additional issues detected".if_supports_color(Stdout, |s| s.green()),
        );
    }

    if report.issues.is_empty() {
        return writeln!(
            w,
            "{} {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            "Health checks incomplete: unreadable files above"
                .if_supports_color(Stdout, |s| s.red()),
        );
    }

    writeln!(
        w,
        "{} {}",
        "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
        "Potential Issues Found:".if_supports_color(Stdout, |s| s.yellow()),
    )?;
    for issue in &report.issues {
        writeln!(w, "   - {}", issue.if_supports_color(Stdout, |s| s.dimmed()))?;
    }
    Ok(())
}

pub fn print_final<W: Write>(w: &mut W, passed: bool) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(50))?;
    if passed {
        writeln!(
            w,
            "{}",
            "VERIFICATION COMPLETE: Ready for testing!"
                .if_supports_color(Stdout, |s| s.green().bold().to_string())
        )
    } else {
        writeln!(
            w,
            "{}",
            "VERIFICATION FAILED: Fix issues before testing"
                .if_supports_color(Stdout, |s| s.red().bold().to_string())
        )
    }
}
