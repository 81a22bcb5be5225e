use crate::scheduler::{DEFAULT_SCALE, DEFAULT_SPEED};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FRAME_RATE: u64 = 60;
pub const DEFAULT_HOLD_MS: u64 = 500;

const SPEED: u64 = DEFAULT_SPEED as u64;
const SCALE: u64 = DEFAULT_SCALE as u64;

/// Play CHIP-8 programs in the terminal.
///
/// Keys 1-4, Q-R, A-F and Z-V are the hex keypad. Space plays and pauses,
/// F5 or Backspace reloads the program, Esc quits.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Settings {
    /// Program image to load
    pub rom: Option<PathBuf>,

    /// Engine steps per frame
    #[arg(
        short,
        long,
        default_value_t = SPEED,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub speed: u64,

    /// Surface pixels per CHIP-8 pixel
    #[arg(long, default_value_t = SCALE, value_parser = clap::value_parser!(u64).range(1..=32))]
    pub scale: u64,

    /// Frames per second
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FRAME_RATE,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub fps: u64,

    /// How long a key counts as held after the terminal last reported it, in ms
    #[arg(long, default_value_t = DEFAULT_HOLD_MS)]
    pub hold_ms: u64,

    /// Beep on the PC speaker while the sound timer runs
    #[arg(long)]
    pub sound: bool,

    /// Start running as soon as the first program is loaded
    #[arg(short, long)]
    pub play: bool,
}

impl Settings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rom: None,
            speed: SPEED,
            scale: SCALE,
            fps: DEFAULT_FRAME_RATE,
            hold_ms: DEFAULT_HOLD_MS,
            sound: false,
            play: false,
        }
    }
}
