//! Program loading happens in two stages. Reading the image is slow and may
//! block, so it runs on a worker thread and only hands back bytes. Installing
//! the bytes touches the engine, so it only ever happens on the control
//! thread, between ticks, when the host polls for a finished read.

use crate::engine::Engine;
use crate::error::{EngineError, Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// a finished read
#[derive(Debug)]
pub struct Program {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Program {
    /// file name, for showing to the user
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

struct PendingRead {
    path: PathBuf,
    rx: Receiver<io::Result<Vec<u8>>>,
}

/// Background program reads. At most one read is outstanding; asking for
/// another drops the first, and its result is never seen.
#[derive(Default)]
pub struct ProgramLoader {
    pending: Option<PendingRead>,
}

impl ProgramLoader {
    pub fn new() -> Self {
        Default::default()
    }

    /// start reading a program file
    pub fn read_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let worker_path = path.clone();
        self.read_with(path, move || fs::read(worker_path));
    }

    /// start a read from any source
    pub fn read_with<F>(&mut self, path: PathBuf, read: F)
    where
        F: FnOnce() -> io::Result<Vec<u8>> + Send + 'static,
    {
        if let Some(old) = self.pending.take() {
            log::debug!("dropping read of {}", old.path.display());
        }
        log::info!("reading {}", path.display());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // nobody listening means the read was superseded
            let _ = tx.send(read());
        });
        self.pending = Some(PendingRead { path, rx });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// A finished read, if there is one. Never blocks.
    pub fn poll(&mut self) -> Option<Result<Program>> {
        let pending = self.pending.as_ref()?;
        let result = match pending.rx.try_recv() {
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(Error::ReadCancelled),
            Ok(Err(source)) => Err(Error::FileRead {
                path: pending.path.clone(),
                source,
            }),
            Ok(Ok(bytes)) => Ok(Program {
                path: pending.path.clone(),
                bytes,
            }),
        };
        self.pending = None;
        if let Err(e) = &result {
            log::error!("{}", e);
        }
        Some(result)
    }
}

/// Reset the engine, then install `bytes` at its program origin. If the
/// engine refuses the image it is left in its reset state.
pub fn load_rom(engine: &mut impl Engine, bytes: &[u8]) -> Result<(), EngineError> {
    engine.reset();
    engine.load_program(bytes)
}
