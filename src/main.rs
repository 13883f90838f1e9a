use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use exec_params_fix::rewrite;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "exec-params-fix")]
#[command(about = "Wrap tx.exec arguments in pqxx::params, in place", long_about = None)]
#[command(version)]
struct Cli {
    /// Source file to rewrite
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cmd_fix(&cli.file)
}

fn cmd_fix(file: &Path) -> Result<()> {
    match rewrite(file) {
        Ok(report) => {
            println!(
                "{} Fixed {} ({} calls)",
                "✓".green(),
                report.file.display(),
                report.calls_rewritten
            );
            Ok(())
        }
        Err(e) => {
            // RewriteError already names the path
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    }
}
