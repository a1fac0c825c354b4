//! # Reading and writing of linear programs
//!
//! Problems are read from JSON files; solved problems can be written back out for plotting.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::LinearProgram;
use crate::io::error::ImportError;

pub mod error;
pub mod json;

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(file_path: &Path) -> Result<LinearProgram<f64>, ImportError> {
    // Choose the right parser before touching the file
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => {
                let mut program = String::new();
                File::open(file_path)?.read_to_string(&mut program)?;
                json::parse(&program)
            },
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::io::error::ImportError;
    use crate::io::import;

    #[test]
    fn unknown_extension() {
        assert!(matches!(import(Path::new("problem.mps")), Err(ImportError::FileExtension(_))));
        assert!(matches!(import(Path::new("problem")), Err(ImportError::FileExtension(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(import(Path::new("does/not/exist.json")), Err(ImportError::Io(_))));
    }
}
