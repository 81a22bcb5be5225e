use crate::display::{DisplayDecoder, Surface};
use crate::engine::Engine;
use crate::error::{EngineError, Error, Result};
use crate::loader;

/// engine steps per tick
pub const DEFAULT_SPEED: usize = 8;

/// surface pixels per engine pixel
pub const DEFAULT_SCALE: usize = 5;

/// Drives the engine one presentation frame at a time. The host calls
/// `tick` whenever `is_scheduled` says a frame was asked for; every tick
/// asks for the next one, so once started the chain never breaks.
///
/// Everything here takes `&mut self`, so a key, load or play/pause from
/// the host can only land between ticks, never inside one.
pub struct Scheduler<E: Engine, S: Surface> {
    engine: E,
    surface: S,
    decoder: DisplayDecoder,
    speed: usize,
    paused: bool,
    scheduled: bool,
    halted: Option<EngineError>,
}

impl<E: Engine, S: Surface> Scheduler<E, S> {
    /// Starts paused, with the first frame already requested so the screen
    /// is drawn before anything runs.
    pub fn new(engine: E, surface: S, scale: usize, speed: usize) -> Self {
        let decoder = DisplayDecoder::new(&engine, scale);
        Scheduler {
            engine,
            surface,
            decoder,
            speed,
            paused: true,
            scheduled: true,
            halted: None,
        }
    }

    /// One frame: unless paused (or halted), `speed` steps then one timer
    /// update; then, always, one decode; then request the next frame.
    ///
    /// A step fault stops stepping until the next `load_rom`. The tick it
    /// happens on still decodes and is the only one to report it, even if
    /// the decode fails.
    pub fn tick(&mut self) -> Result<()> {
        self.scheduled = false;
        let fault = if self.paused || self.halted.is_some() {
            None
        } else {
            self.run_frame().err()
        };
        let decoded = self.decoder.decode(&self.engine, &mut self.surface);
        self.scheduled = true;
        match (fault, decoded) {
            (Some(e), Err(io)) => {
                log::error!("could not present halted frame: {}", io);
                Err(Error::Step(e))
            }
            (Some(e), Ok(())) => Err(Error::Step(e)),
            (None, decoded) => decoded.map_err(Error::from),
        }
    }

    fn run_frame(&mut self) -> Result<(), EngineError> {
        for _ in 0..self.speed {
            if let Err(e) = self.engine.execute_next() {
                log::error!("engine halted: {}", e);
                self.halted = Some(e);
                return Err(e);
            }
        }
        self.engine.update_timer();
        Ok(())
    }

    pub fn play(&mut self) {
        self.paused = false;
        if !self.scheduled {
            self.scheduled = true;
        }
    }

    /// Stops stepping from the next tick on. Frames keep coming, so the last
    /// picture stays up, and one more is requested straight away.
    pub fn pause(&mut self) {
        self.paused = true;
        self.scheduled = true;
    }

    pub fn toggle(&mut self) {
        if self.paused {
            self.play();
        } else {
            self.pause();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// whether a frame has been requested and not yet run
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// why stepping stopped, if it has
    pub fn halted(&self) -> Option<EngineError> {
        self.halted
    }

    /// Reset the engine and install a new program, then draw the (blank)
    /// screen once. Doesn't start or stop execution.
    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<()> {
        let installed = loader::load_rom(&mut self.engine, bytes);
        // the reset happened either way
        self.halted = None;
        self.decoder.decode(&self.engine, &mut self.surface)?;
        installed.map_err(|e| {
            log::error!("could not install program: {}", e);
            Error::Install(e)
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
