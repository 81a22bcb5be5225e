//! # chip8
//!
//! A terminal player for CHIP-8 programs.
//!
//! ## Design
//!
//! * the virtual machine sits behind the `Engine` trait; the player only
//!   steps it, ticks its timers, pokes its keypad, resets it and reads its
//!   framebuffer
//! * one thread owns the engine. Key presses, program loads and play/pause
//!   all land between frames, never inside one
//! * reading a program file is the only thing that waits, so it happens on a
//!   worker thread and the bytes come back over a channel
//! * display, input and sound are traits so other front-ends can plug in;
//!   the terminal versions use tui and crossterm
//!
//! Model
//!
//! App
//!  |-- input (host events), loader (background reads), buzzer
//!  |-- scheduler(engine, surface, decoder)
//!  `-- each frame
//!       |-- drain host events -> keypad / play-pause / reload
//!       |-- finished read?   -> reset, install, decode once
//!       |-- scheduler.tick() -> unless paused: SPEED steps + 1 timer tick;
//!       |                       then always: decode
//!       `-- sleep until the next frame
pub mod app;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod keypad;
pub mod loader;
pub mod memory;
pub mod scheduler;
pub mod sound;

pub use engine::Engine;
pub use error::{EngineError, Error, Result};
pub use scheduler::Scheduler;
