use clap::Parser;
use std::path::PathBuf;
use std::process;

use tdm_verify::config::VerifyConfig;

/// Sanity-check the CTFBot + TDM integration before manual testing.
#[derive(Debug, Parser)]
#[command(name = "tdm-verify", version)]
struct Cli {
    /// Game-mode directory; the bot module is looked up in ../Bots.
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// JSON file replacing the built-in target, pattern and health tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable ANSI colours even on a terminal.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let root_dir = match cli.root_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("Error: Could not determine current directory: {err}");
                process::exit(1);
            }
        },
    };

    let config = match cli.config {
        Some(path) => match VerifyConfig::load(&root_dir, &path) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => VerifyConfig::from_root(&root_dir),
    };

    let debug_timing = std::env::var("TDM_VERIFY_TIMING").is_ok();
    let mut stdout = std::io::stdout();
    let code = match tdm_verify::run_all(&mut stdout, &config) {
        Ok(outcome) => {
            if debug_timing {
                for timing in &outcome.timings {
                    eprintln!("  [{:>6.0?}] {}", timing.elapsed, timing.name);
                }
            }
            outcome.verdict.exit_code()
        }
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    };

    process::exit(code);
}
