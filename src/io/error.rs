//! # Error reporting for reading of linear program files
//!
//! Problems encountered while reading a file, parsing its contents, or validating the linear
//! program it describes.
use std::io;

use thiserror::Error;

use crate::data::linear_program::MalformedInput;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file could not be parsed into a problem description.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    #[error("could not parse the problem description: {0}")]
    Parse(#[from] serde_json::Error),
    /// The description is well formed, but doesn't describe a consistent linear program.
    ///
    /// For example, a constraint might have more coefficients than the objective function.
    #[error("inconsistent linear program: {0}")]
    LinearProgram(#[from] MalformedInput),
}
