use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a bad command line, as used by clap
pub const EXIT_USAGE: u8 = 2;
/// Exit status when the input cannot be read or decoded
pub const EXIT_DECODE: u8 = 3;
/// Exit status when the output cannot be encoded or written
pub const EXIT_ENCODE: u8 = 4;

/// Failure while processing one image
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Error processing {}: could not decode input", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Error processing {}: could not write {}", input.display(), output.display())]
    Encode {
        input: PathBuf,
        output: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl KeyError {
    /// Process exit status for this kind of failure
    pub fn exit_status(&self) -> u8 {
        match self {
            KeyError::Decode { .. } => EXIT_DECODE,
            KeyError::Encode { .. } => EXIT_ENCODE,
        }
    }
}
