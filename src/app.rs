use crate::config::Settings;
use crate::display::{Status, Surface};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::input::{HostEvent, Input, InputMapper};
use crate::loader::{Program, ProgramLoader};
use crate::scheduler::Scheduler;
use crate::sound::Buzzer;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The host side: feeds events, finished reads and frame opportunities to
/// the scheduler, all from the one thread that owns the engine.
pub struct App<E: Engine, S: Surface, I: Input> {
    scheduler: Scheduler<E, S>,
    mapper: InputMapper,
    loader: ProgramLoader,
    input: I,
    buzzer: Buzzer,
    rom: Option<PathBuf>,
    autoplay: bool,
    running: bool,
    status: Status,
}

impl<E: Engine, S: Surface, I: Input> App<E, S, I> {
    pub fn new(scheduler: Scheduler<E, S>, input: I, buzzer: Buzzer, settings: &Settings) -> Self {
        let mut app = App {
            scheduler,
            mapper: InputMapper::default(),
            loader: ProgramLoader::new(),
            input,
            buzzer,
            rom: settings.rom.clone(),
            autoplay: settings.play,
            running: true,
            status: Status {
                paused: true,
                ..Default::default()
            },
        };
        app.reload();
        app
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scheduler(&self) -> &Scheduler<E, S> {
        &self.scheduler
    }

    /// Run frames at a fixed rate until asked to quit.
    pub fn run(&mut self, interval: Duration) -> Result<()> {
        let mut deadline = Instant::now();
        while self.running {
            self.frame()?;
            deadline += interval;
            let now = Instant::now();
            if deadline > now {
                spin_sleep::sleep(deadline - now);
            } else {
                // fell behind; don't try to catch up
                deadline = now;
            }
        }
        Ok(())
    }

    /// One presentation opportunity. Only terminal I/O failures end the run;
    /// everything else goes on the status line.
    pub fn frame(&mut self) -> Result<()> {
        for event in self.input.poll_events()? {
            self.handle(event);
        }
        if let Some(done) = self.loader.poll() {
            let installed = done.and_then(|program| self.install(program));
            self.report(installed)?;
        }
        if self.scheduler.is_scheduled() {
            let ticked = self.scheduler.tick();
            self.report(ticked)?;
        }
        self.buzzer.update(self.scheduler.engine().sound_active());
        self.status.paused = self.scheduler.is_paused();
        self.scheduler.surface_mut().set_status(&self.status);
        Ok(())
    }

    fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::KeyDown(code) => {
                self.mapper.on_key_down(code, self.scheduler.engine_mut());
            }
            HostEvent::KeyUp(code) => {
                self.mapper.on_key_up(code, self.scheduler.engine_mut());
            }
            HostEvent::TogglePlay => self.scheduler.toggle(),
            HostEvent::Reload => self.reload(),
            HostEvent::Quit => self.running = false,
        }
    }

    fn reload(&mut self) {
        match &self.rom {
            Some(path) => self.loader.read_file(path),
            None => log::warn!("no program to load"),
        }
    }

    fn install(&mut self, program: Program) -> Result<()> {
        self.status.program = Some(program.name());
        self.rom = Some(program.path.clone());
        self.scheduler.load_rom(&program.bytes)?;
        log::info!("loaded {} ({} bytes)", program.name(), program.bytes.len());
        self.status.message = None;
        if self.autoplay {
            self.autoplay = false;
            self.scheduler.play();
        }
        Ok(())
    }

    fn report(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(Error::Io(e)) => Err(Error::Io(e)),
            Err(e) => {
                self.status.message = Some(e.to_string());
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }
}
