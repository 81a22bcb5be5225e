use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions the engine refuses to continue from. Copy so the scheduler can
/// hold on to the reason it stopped stepping.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid opcode {opcode:#06x} at {address:#05x}")]
    InvalidOpcode { opcode: u16, address: u16 },

    #[error("call stack overflow at {address:#05x}")]
    StackOverflow { address: u16 },

    #[error("return with empty call stack at {address:#05x}")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at {address:#06x}")]
    OutOfBounds { address: usize },

    #[error("program is too large ({size} bytes), at most {max} bytes fit")]
    ProgramTooLarge { size: usize, max: usize },
}

/// Everything the driver surfaces to its host.
#[derive(Error, Debug)]
pub enum Error {
    #[error("engine halted: {0}")]
    Step(#[source] EngineError),

    #[error("could not install program: {0}")]
    Install(#[source] EngineError),

    #[error("could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("program read was cancelled")]
    ReadCancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
