use clap::{CommandFactory, Parser};
use miette::{miette, Result};
use std::path::PathBuf;

use autorun_inf_deobfuscator::cli;

#[derive(Parser)]
#[command(name = "deobfuscate-autorun-inf")]
#[command(about = "Deobfuscates autorun.inf files corrupted by the Conficker / Downadup malware family")]
#[command(version)]
struct Cli {
    /// Input autorun.inf file (required)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip every cleanup pass and emit the filtered content verbatim
    #[arg(long)]
    no_deobfuscation: bool,

    /// Remove comment lines
    #[arg(long)]
    remove_comments: bool,

    /// Remove empty lines
    #[arg(long)]
    remove_empty_lines: bool,

    /// Fix section headers missing their closing bracket
    #[arg(long)]
    fix_missing_brackets: bool,

    /// Drop sections Windows Autorun does not recognize
    #[arg(long)]
    remove_junk_sections: bool,

    /// Print the section names instead of the cleaned content
    #[arg(long)]
    show_sections: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    // A missing input file is a usage error, not a crash.
    let Some(input) = cli.input else {
        eprintln!("warning: no input file specified");
        Cli::command().print_help().map_err(|e| miette!("{}", e))?;
        return Ok(());
    };

    let args = cli::deobfuscate::DeobfuscateArgs {
        input_path: input,
        output_path: cli.output,
        no_deobfuscation: cli.no_deobfuscation,
        remove_comments: cli.remove_comments,
        remove_empty_lines: cli.remove_empty_lines,
        fix_missing_brackets: cli.fix_missing_brackets,
        remove_junk_sections: cli.remove_junk_sections,
        show_sections: cli.show_sections,
    };
    cli::deobfuscate::deobfuscate(&args).map_err(|e| miette!("{}", e))
}
