//! Command-line interface module
//!
//! This module contains the implementation of the deobfuscate command.

pub mod deobfuscate;

/// Common CLI utilities
pub mod utils {
    use crate::error::{Error as DeobfuscatorError, Result as DeobfuscatorResult};

    /// Write output to file or stdout
    pub fn write_output(
        content: &str,
        output_path: Option<&std::path::Path>,
    ) -> DeobfuscatorResult<()> {
        match output_path {
            Some(path) => {
                std::fs::write(path, content).map_err(DeobfuscatorError::from)?;
                println!(
                    "wrote {} lines to {}",
                    content.split('\n').count(),
                    path.display()
                );
                Ok(())
            }
            None => {
                println!("{}", content);
                Ok(())
            }
        }
    }
}
