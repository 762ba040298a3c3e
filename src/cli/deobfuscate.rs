use crate::cli::utils;
use crate::deobfuscator::Deobfuscator;
use crate::error::Result as DeobfuscatorResult;

/// Arguments for the deobfuscate command
#[derive(Debug, Clone)]
pub struct DeobfuscateArgs {
    pub input_path: std::path::PathBuf,
    pub output_path: Option<std::path::PathBuf>,
    pub no_deobfuscation: bool,
    pub remove_comments: bool,
    pub remove_empty_lines: bool,
    pub fix_missing_brackets: bool,
    pub remove_junk_sections: bool,
    pub show_sections: bool,
}

impl DeobfuscateArgs {
    /// With no pass selected the tool runs the full pipeline. The
    /// no-deobfuscation flag counts as a selection and suppresses it.
    fn run_all_passes(&self) -> bool {
        !(self.no_deobfuscation
            || self.remove_comments
            || self.remove_empty_lines
            || self.fix_missing_brackets
            || self.remove_junk_sections)
    }
}

/// Run the deobfuscate command
pub fn deobfuscate(args: &DeobfuscateArgs) -> DeobfuscatorResult<()> {
    let run_all = args.run_all_passes();

    let mut deobfuscator = Deobfuscator::load(&args.input_path)?;

    // Passes apply in a fixed order, independent of flag order on the
    // command line.
    if run_all || args.remove_empty_lines {
        deobfuscator.remove_empty_lines();
    }
    if run_all || args.remove_comments {
        deobfuscator.remove_comments();
    }
    if run_all || args.fix_missing_brackets {
        deobfuscator.fix_missing_section_brackets();
    }
    if run_all || args.remove_junk_sections {
        deobfuscator.remove_junk_sections()?;
    }

    if args.show_sections {
        let sections = deobfuscator.sections()?;
        println!("inf-file contains {} sections", sections.len());
        for section in &sections {
            println!("- {}", section);
        }
        return Ok(());
    }

    utils::write_output(&deobfuscator.content(), args.output_path.as_deref())
}
