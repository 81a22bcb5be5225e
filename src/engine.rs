use crate::error::EngineError;

/// The virtual machine as seen by the driver. The driver never looks past
/// this interface, so anything that can step, tick its timers and expose a
/// byte-per-pixel framebuffer can be driven.
pub trait Engine {
    /// fixed at construction
    fn width(&self) -> usize;

    /// fixed at construction
    fn height(&self) -> usize;

    /// current framebuffer, `width * height` cells, row-major, 0 = off
    fn screen_memory(&self) -> &[u8];

    /// run a single instruction
    fn execute_next(&mut self) -> Result<(), EngineError>;

    /// advance the delay and sound timers by one tick
    fn update_timer(&mut self);

    fn key_down(&mut self, key: u8);

    fn key_up(&mut self, key: u8);

    /// back to power-on defaults: memory, registers, timers, keypad, screen
    fn reset(&mut self);

    /// install a program image at the program origin
    fn load_program(&mut self, program: &[u8]) -> Result<(), EngineError>;

    /// whether the buzzer should be sounding
    fn sound_active(&self) -> bool {
        false
    }
}

/// engine fake that records every call, for checking ordering in tests
#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Step,
        UpdateTimer,
        KeyDown(u8),
        KeyUp(u8),
        Reset,
        LoadProgram(Vec<u8>),
        // logged by the surface side
        Clear,
        Present,
    }

    pub type CallLog = Rc<RefCell<Vec<Call>>>;

    pub struct RecordingEngine {
        pub width: usize,
        pub height: usize,
        pub screen: Vec<u8>,
        pub calls: CallLog,
        /// step number (counting from 1) that reports a fault
        pub fail_on_step: Option<usize>,
        pub capacity: usize,
        steps: usize,
    }

    impl RecordingEngine {
        pub fn new(width: usize, height: usize) -> Self {
            RecordingEngine {
                width,
                height,
                screen: vec![0; width * height],
                calls: Rc::new(RefCell::new(Vec::new())),
                fail_on_step: None,
                capacity: 3584,
                steps: 0,
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, call: &Call) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }

        fn log(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl Engine for RecordingEngine {
        fn width(&self) -> usize {
            self.width
        }

        fn height(&self) -> usize {
            self.height
        }

        fn screen_memory(&self) -> &[u8] {
            &self.screen
        }

        fn execute_next(&mut self) -> Result<(), EngineError> {
            self.log(Call::Step);
            self.steps += 1;
            match self.fail_on_step {
                Some(n) if n == self.steps => Err(EngineError::InvalidOpcode {
                    opcode: 0xffff,
                    address: 0x200,
                }),
                _ => Ok(()),
            }
        }

        fn update_timer(&mut self) {
            self.log(Call::UpdateTimer);
        }

        fn key_down(&mut self, key: u8) {
            self.log(Call::KeyDown(key));
        }

        fn key_up(&mut self, key: u8) {
            self.log(Call::KeyUp(key));
        }

        fn reset(&mut self) {
            self.log(Call::Reset);
            self.screen.iter_mut().for_each(|px| *px = 0);
            self.steps = 0;
            self.fail_on_step = None;
        }

        fn load_program(&mut self, program: &[u8]) -> Result<(), EngineError> {
            self.log(Call::LoadProgram(program.to_vec()));
            if program.len() > self.capacity {
                return Err(EngineError::ProgramTooLarge {
                    size: program.len(),
                    max: self.capacity,
                });
            }
            Ok(())
        }
    }
}
