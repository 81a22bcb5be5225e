//! # interpreter
//!
//! The classic CHIP-8 machine:
//!  * 4K RAM, programs at 0x200, hex font in the interpreter area
//!  * V0-VF 8-bit registers; VF doubles as the carry/borrow/collision flag
//!  * I 16-bit address register
//!  * 16-level return stack
//!  * delay and sound timers, decremented once per `update_timer`
//!  * 64x32 monochrome framebuffer, one byte per pixel
//!
//! Faults (unknown opcode, stack over/underflow, stray memory accesses) are
//! returned as `EngineError` rather than panicking, so a host can stop
//! stepping and keep showing the last good frame.

use crate::engine::Engine;
use crate::error::EngineError;
use crate::keypad::Keypad;
use crate::memory::{
    Chip8MemoryMap, MemoryMap, CHIP8_FONT_ADDR, CHIP8_FONT_GLYPH_BYTES, CHIP8_PROGRAM_ADDR,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

const STACK_DEPTH: usize = 16;
const SPRITE_WIDTH: usize = 8;

pub struct Chip8Interpreter {
    memory: Chip8MemoryMap,
    v: [u8; 16],
    i: u16,
    program_counter: u16,
    stack: [u16; STACK_DEPTH],
    stack_pointer: usize,
    delay_timer: u8,
    sound_timer: u8,
    screen: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],
    keypad: Keypad,
    rng: StdRng,
}

impl Chip8Interpreter {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// deterministic CXNN, for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8Interpreter {
            memory: Chip8MemoryMap::new(),
            v: [0; 16],
            i: 0,
            program_counter: CHIP8_PROGRAM_ADDR,
            stack: [0; STACK_DEPTH],
            stack_pointer: 0,
            delay_timer: 0,
            sound_timer: 0,
            screen: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            keypad: Keypad::new(),
            rng,
        }
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.program_counter += 2;
        }
    }

    /// XOR a sprite onto the screen; pixels that run off an edge wrap round
    fn draw_sprite(&mut self, x: usize, y: usize, rows: usize) -> Result<(), EngineError> {
        let sprite = self.memory.get_ro_slice(self.i, rows)?;
        let mut collision = false;
        for (row, bits) in sprite.iter().enumerate() {
            for col in 0..SPRITE_WIDTH {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let px = (x + col) % SCREEN_WIDTH;
                let py = (y + row) % SCREEN_HEIGHT;
                let cell = &mut self.screen[py * SCREEN_WIDTH + px];
                collision |= *cell != 0;
                *cell ^= 1;
            }
        }
        self.v[0xF] = collision as u8;
        Ok(())
    }

    fn execute(&mut self, opcode: u16) -> Result<(), EngineError> {
        let address = self.program_counter;
        self.program_counter += 2;

        let nibbles = (
            (opcode & 0xF000) >> 12,
            (opcode & 0x0F00) >> 8,
            (opcode & 0x00F0) >> 4,
            opcode & 0x000F,
        );
        let nnn = opcode & 0x0FFF;
        let nn = (opcode & 0x00FF) as u8;
        let n = nibbles.3 as usize;
        let x = nibbles.1 as usize;
        let y = nibbles.2 as usize;

        match nibbles {
            (0x0, 0x0, 0xE, 0x0) => self.screen = [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            (0x0, 0x0, 0xE, 0xE) => {
                if self.stack_pointer == 0 {
                    return Err(EngineError::StackUnderflow { address });
                }
                self.stack_pointer -= 1;
                self.program_counter = self.stack[self.stack_pointer];
            }
            (0x1, _, _, _) => self.program_counter = nnn,
            (0x2, _, _, _) => {
                if self.stack_pointer == STACK_DEPTH {
                    return Err(EngineError::StackOverflow { address });
                }
                self.stack[self.stack_pointer] = self.program_counter;
                self.stack_pointer += 1;
                self.program_counter = nnn;
            }
            (0x3, _, _, _) => self.skip_if(self.v[x] == nn),
            (0x4, _, _, _) => self.skip_if(self.v[x] != nn),
            (0x5, _, _, 0x0) => self.skip_if(self.v[x] == self.v[y]),
            (0x6, _, _, _) => self.v[x] = nn,
            (0x7, _, _, _) => self.v[x] = self.v[x].wrapping_add(nn),
            (0x8, _, _, 0x0) => self.v[x] = self.v[y],
            (0x8, _, _, 0x1) => self.v[x] |= self.v[y],
            (0x8, _, _, 0x2) => self.v[x] &= self.v[y],
            (0x8, _, _, 0x3) => self.v[x] ^= self.v[y],
            (0x8, _, _, 0x4) => {
                let (res, carry) = self.v[x].overflowing_add(self.v[y]);
                self.v[x] = res;
                self.v[0xF] = carry as u8;
            }
            (0x8, _, _, 0x5) => {
                let (res, borrow) = self.v[x].overflowing_sub(self.v[y]);
                self.v[x] = res;
                self.v[0xF] = !borrow as u8;
            }
            (0x8, _, _, 0x6) => {
                let bit = self.v[x] & 0x1;
                self.v[x] >>= 1;
                self.v[0xF] = bit;
            }
            (0x8, _, _, 0x7) => {
                let (res, borrow) = self.v[y].overflowing_sub(self.v[x]);
                self.v[x] = res;
                self.v[0xF] = !borrow as u8;
            }
            (0x8, _, _, 0xE) => {
                let bit = (self.v[x] & 0x80) >> 7;
                self.v[x] <<= 1;
                self.v[0xF] = bit;
            }
            (0x9, _, _, 0x0) => self.skip_if(self.v[x] != self.v[y]),
            (0xA, _, _, _) => self.i = nnn,
            (0xB, _, _, _) => self.program_counter = nnn + self.v[0] as u16,
            (0xC, _, _, _) => self.v[x] = self.rng.gen::<u8>() & nn,
            (0xD, _, _, _) => self.draw_sprite(self.v[x] as usize, self.v[y] as usize, n)?,
            (0xE, _, 0x9, 0xE) => self.skip_if(self.keypad.is_pressed(self.v[x])),
            (0xE, _, 0xA, 0x1) => self.skip_if(!self.keypad.is_pressed(self.v[x])),
            (0xF, _, 0x0, 0x7) => self.v[x] = self.delay_timer,
            (0xF, _, 0x0, 0xA) => match self.keypad.first_pressed() {
                Some(key) => self.v[x] = key,
                // spin on this instruction until something is held
                None => self.program_counter = address,
            },
            (0xF, _, 0x1, 0x5) => self.delay_timer = self.v[x],
            (0xF, _, 0x1, 0x8) => self.sound_timer = self.v[x],
            (0xF, _, 0x1, 0xE) => {
                self.i = self.i.wrapping_add(self.v[x] as u16);
                self.v[0xF] = (self.i > 0x0FFF) as u8;
            }
            (0xF, _, 0x2, 0x9) => {
                self.i = CHIP8_FONT_ADDR + (self.v[x] & 0xF) as u16 * CHIP8_FONT_GLYPH_BYTES
            }
            (0xF, _, 0x3, 0x3) => {
                let value = self.v[x];
                self.memory
                    .write(&[value / 100, (value % 100) / 10, value % 10], self.i)?;
            }
            (0xF, _, 0x5, 0x5) => {
                let registers = self.v;
                self.memory.write(&registers[..=x], self.i)?;
            }
            (0xF, _, 0x6, 0x5) => {
                let values = self.memory.get_ro_slice(self.i, x + 1)?;
                self.v[..=x].copy_from_slice(values);
            }
            _ => return Err(EngineError::InvalidOpcode { opcode, address }),
        }
        Ok(())
    }
}

impl Default for Chip8Interpreter {
    fn default() -> Self {
        Chip8Interpreter::new()
    }
}

impl Engine for Chip8Interpreter {
    fn width(&self) -> usize {
        SCREEN_WIDTH
    }

    fn height(&self) -> usize {
        SCREEN_HEIGHT
    }

    fn screen_memory(&self) -> &[u8] {
        &self.screen
    }

    fn execute_next(&mut self) -> Result<(), EngineError> {
        let opcode = self.memory.get_word(self.program_counter)?;
        self.execute(opcode)
    }

    fn update_timer(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    fn key_down(&mut self, key: u8) {
        self.keypad.key_down(key);
    }

    fn key_up(&mut self, key: u8) {
        self.keypad.key_up(key);
    }

    fn reset(&mut self) {
        self.memory.clear();
        self.v = [0; 16];
        self.i = 0;
        self.program_counter = CHIP8_PROGRAM_ADDR;
        self.stack = [0; STACK_DEPTH];
        self.stack_pointer = 0;
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.screen = [0; SCREEN_WIDTH * SCREEN_HEIGHT];
        self.keypad.clear();
    }

    fn load_program(&mut self, program: &[u8]) -> Result<(), EngineError> {
        self.memory.load_program(program)
    }

    fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: u16 = CHIP8_PROGRAM_ADDR;

    fn pixel(cpu: &Chip8Interpreter, row: usize, col: usize) -> bool {
        cpu.screen_memory()[row * SCREEN_WIDTH + col] != 0
    }

    #[test]
    fn test_program_load_ok() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.load_program(&[0x00, 0xe0])?; // clear screen
        assert_eq!(cpu.memory.get_ro_slice(0x200, 2)?, &[0x00, 0xe0]);
        Ok(())
    }

    #[test]
    fn test_execute_next_fetches_from_pc() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.load_program(&[0x60, 0x2a, 0x12, 0x00])?; // v0 = 0x2a; jp 0x200
        cpu.execute_next()?;
        assert_eq!(cpu.v[0], 0x2a);
        assert_eq!(cpu.program_counter(), START + 2);
        cpu.execute_next()?;
        assert_eq!(cpu.program_counter(), START);
        Ok(())
    }

    #[test]
    fn test_execute_00e0() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.screen[5] = 1;
        cpu.execute(0x00E0)?;
        assert!(cpu.screen_memory().iter().all(|&px| px == 0));
        Ok(())
    }

    #[test]
    fn test_execute_2nnn_00ee() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.program_counter = 0x20;
        cpu.execute(0x2123)?;
        assert_eq!(cpu.program_counter, 0x0123);
        assert_eq!(cpu.stack_pointer, 1);
        assert_eq!(cpu.stack[0], 0x22);
        cpu.execute(0x00EE)?;
        assert_eq!(cpu.program_counter, 0x22);
        assert_eq!(cpu.stack_pointer, 0);
        Ok(())
    }

    #[test]
    fn test_return_with_empty_stack() {
        let mut cpu = Chip8Interpreter::with_seed(0);
        assert_eq!(
            cpu.execute(0x00EE),
            Err(EngineError::StackUnderflow { address: START })
        );
    }

    #[test]
    fn test_call_stack_overflow() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        for _ in 0..STACK_DEPTH {
            cpu.execute(0x2300)?;
        }
        assert_eq!(
            cpu.execute(0x2300),
            Err(EngineError::StackOverflow { address: 0x300 })
        );
        Ok(())
    }

    #[test]
    fn test_execute_3xnn_4xnn() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[0] = 0xEE;
        cpu.execute(0x30EE)?; // equal, skip
        assert_eq!(cpu.program_counter, START + 4);
        cpu.execute(0x30EF)?;
        assert_eq!(cpu.program_counter, START + 6);
        cpu.execute(0x40EE)?;
        assert_eq!(cpu.program_counter, START + 8);
        cpu.execute(0x40EF)?; // not equal, skip
        assert_eq!(cpu.program_counter, START + 12);
        Ok(())
    }

    #[test]
    fn test_execute_5xy0_9xy0() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[0] = 1;
        cpu.v[1] = 1;
        cpu.execute(0x5010)?;
        assert_eq!(cpu.program_counter, START + 4);
        cpu.execute(0x9010)?;
        assert_eq!(cpu.program_counter, START + 6);
        cpu.v[1] = 2;
        cpu.execute(0x9010)?;
        assert_eq!(cpu.program_counter, START + 10);
        Ok(())
    }

    #[test]
    fn test_execute_6xnn_7xnn() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.execute(0x60EF)?;
        assert_eq!(cpu.v[0], 0xEF);
        cpu.execute(0x7012)?;
        assert_eq!(cpu.v[0], 0x01); // wraps, VF untouched
        assert_eq!(cpu.v[0xF], 0);
        Ok(())
    }

    #[test]
    fn test_execute_8xy_logic() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[1] = 0b1100;
        cpu.v[0] = 0b1010;
        cpu.execute(0x8011)?;
        assert_eq!(cpu.v[0], 0b1110);
        cpu.v[0] = 0b1010;
        cpu.execute(0x8012)?;
        assert_eq!(cpu.v[0], 0b1000);
        cpu.v[0] = 0b1010;
        cpu.execute(0x8013)?;
        assert_eq!(cpu.v[0], 0b0110);
        cpu.execute(0x8010)?;
        assert_eq!(cpu.v[0], 0b1100);
        Ok(())
    }

    #[test]
    fn test_execute_8xy4_carry() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[0] = 0xFF;
        cpu.v[1] = 0x02;
        cpu.execute(0x8014)?;
        assert_eq!(cpu.v[0], 0x01);
        assert_eq!(cpu.v[0xF], 1);
        cpu.execute(0x8014)?;
        assert_eq!(cpu.v[0], 0x03);
        assert_eq!(cpu.v[0xF], 0);
        Ok(())
    }

    #[test]
    fn test_execute_8xy5_8xy7_borrow() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[0] = 5;
        cpu.v[1] = 3;
        cpu.execute(0x8015)?;
        assert_eq!(cpu.v[0], 2);
        assert_eq!(cpu.v[0xF], 1);
        cpu.execute(0x8017)?; // 3 - 2
        assert_eq!(cpu.v[0], 1);
        assert_eq!(cpu.v[0xF], 1);
        cpu.v[1] = 0;
        cpu.execute(0x8017)?; // 0 - 1
        assert_eq!(cpu.v[0], 0xFF);
        assert_eq!(cpu.v[0xF], 0);
        Ok(())
    }

    #[test]
    fn test_execute_8xy6_8xye_shifts() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[0] = 0b1000_0011;
        cpu.execute(0x8006)?;
        assert_eq!(cpu.v[0], 0b0100_0001);
        assert_eq!(cpu.v[0xF], 1);
        cpu.v[0] = 0b1000_0010;
        cpu.execute(0x800E)?;
        assert_eq!(cpu.v[0], 0b0000_0100);
        assert_eq!(cpu.v[0xF], 1);
        Ok(())
    }

    #[test]
    fn test_execute_annn_bnnn() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.execute(0xA1EF)?;
        assert_eq!(cpu.i, 0x1EF);
        cpu.v[0] = 2;
        cpu.execute(0xBEF3)?;
        assert_eq!(cpu.program_counter, 0xEF5);
        Ok(())
    }

    #[test]
    fn test_execute_cxnn_masks() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(7);
        cpu.execute(0xC000)?;
        assert_eq!(cpu.v[0], 0);
        for _ in 0..32 {
            cpu.execute(0xC00F)?;
            assert_eq!(cpu.v[0] & 0xF0, 0);
        }
        Ok(())
    }

    #[test]
    fn test_execute_dxyn() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.i = 0x300;
        cpu.memory.write(&[0b11110011, 0b11001110], 0x300)?;
        cpu.execute(0xD002)?;
        let row0 = [true, true, true, true, false, false, true, true];
        let row1 = [true, true, false, false, true, true, true, false];
        for col in 0..8 {
            assert_eq!(pixel(&cpu, 0, col), row0[col]);
            assert_eq!(pixel(&cpu, 1, col), row1[col]);
        }
        assert_eq!(cpu.v[0xF], 0);

        // collision
        cpu.memory.write(&[0b11110100], 0x300)?;
        cpu.execute(0xD001)?;
        let row0 = [false, false, false, false, false, true, true, true];
        for col in 0..8 {
            assert_eq!(pixel(&cpu, 0, col), row0[col]);
        }
        assert_eq!(cpu.v[0xF], 1);
        Ok(())
    }

    #[test]
    fn test_dxyn_wraps_at_edges() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.i = 0x300;
        cpu.memory.write(&[0b1100_0000, 0b1100_0000], 0x300)?;
        cpu.v[0] = 63;
        cpu.v[1] = 31;
        cpu.execute(0xD012)?;
        assert!(pixel(&cpu, 31, 63));
        assert!(pixel(&cpu, 31, 0));
        assert!(pixel(&cpu, 0, 63));
        assert!(pixel(&cpu, 0, 0));
        Ok(())
    }

    #[test]
    fn test_execute_ex9e_exa1() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.key_down(9);
        cpu.v[0] = 9;
        cpu.execute(0xE09E)?;
        assert_eq!(cpu.program_counter, START + 4);
        cpu.execute(0xE0A1)?;
        assert_eq!(cpu.program_counter, START + 6);
        cpu.key_up(9);
        cpu.execute(0xE09E)?;
        assert_eq!(cpu.program_counter, START + 8);
        cpu.execute(0xE0A1)?;
        assert_eq!(cpu.program_counter, START + 12);
        Ok(())
    }

    #[test]
    fn test_execute_fx0a_waits_for_key() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.execute(0xF30A)?;
        assert_eq!(cpu.program_counter, START);
        cpu.key_down(3);
        cpu.execute(0xF30A)?;
        assert_eq!(cpu.v[3], 3);
        assert_eq!(cpu.program_counter, START + 2);
        Ok(())
    }

    #[test]
    fn test_timers() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[5] = 2;
        cpu.execute(0xF515)?;
        cpu.execute(0xF518)?;
        assert_eq!(cpu.delay_timer, 2);
        assert!(cpu.sound_active());
        cpu.update_timer();
        cpu.execute(0xF607)?;
        assert_eq!(cpu.v[6], 1);
        cpu.update_timer();
        cpu.update_timer();
        assert_eq!(cpu.delay_timer, 0);
        assert!(!cpu.sound_active());
        Ok(())
    }

    #[test]
    fn test_execute_fx1e() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[5] = 9;
        cpu.i = 9;
        cpu.execute(0xF51E)?;
        assert_eq!(cpu.i, 18);
        assert_eq!(cpu.v[0xF], 0);
        cpu.i = 0x0FFF;
        cpu.execute(0xF51E)?;
        assert_eq!(cpu.v[0xF], 1);
        Ok(())
    }

    #[test]
    fn test_execute_fx29_points_at_glyph() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[5] = 0xA;
        cpu.execute(0xF529)?;
        assert_eq!(cpu.i, CHIP8_FONT_ADDR + 50);
        assert_eq!(cpu.memory.get_ro_slice(cpu.i, 5)?, &[0xF0, 0x90, 0xF0, 0x90, 0x90]);
        Ok(())
    }

    #[test]
    fn test_execute_fx33() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.v[5] = 123;
        cpu.i = 1000;
        cpu.execute(0xF533)?;
        assert_eq!(cpu.memory.get_ro_slice(1000, 3)?, &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_execute_fx55_fx65() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        for idx in 0..16 {
            cpu.v[idx] = idx as u8 * 3;
        }
        cpu.i = 1000;
        cpu.execute(0xFF55)?;
        assert_eq!(cpu.i, 1000);
        cpu.v = [0; 16];
        cpu.execute(0xF365)?;
        assert_eq!(&cpu.v[..5], &[0, 3, 6, 9, 0]);
        Ok(())
    }

    #[test]
    fn test_fx55_past_end_of_ram() {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.i = 0x0FFE;
        assert_eq!(
            cpu.execute(0xF355),
            Err(EngineError::OutOfBounds { address: 0x1001 })
        );
    }

    #[test]
    fn test_invalid_opcode() {
        let mut cpu = Chip8Interpreter::with_seed(0);
        assert_eq!(
            cpu.execute(0xF0FF),
            Err(EngineError::InvalidOpcode {
                opcode: 0xF0FF,
                address: START
            })
        );
    }

    #[test]
    fn test_fetch_past_end_of_ram() {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.program_counter = 0x0FFF;
        assert!(matches!(
            cpu.execute_next(),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_reset_restores_power_on_state() -> Result<(), EngineError> {
        let mut cpu = Chip8Interpreter::with_seed(0);
        cpu.load_program(&[0x60, 0x01, 0xF0, 0x18])?;
        cpu.execute_next()?;
        cpu.execute_next()?;
        cpu.key_down(4);
        cpu.screen[0] = 1;
        cpu.reset();
        assert_eq!(cpu.program_counter(), START);
        assert_eq!(cpu.v, [0; 16]);
        assert!(!cpu.sound_active());
        assert!(!cpu.keypad.is_pressed(4));
        assert!(cpu.screen_memory().iter().all(|&px| px == 0));
        assert_eq!(cpu.memory.get_ro_slice(0x200, 4)?, &[0; 4]);
        assert_eq!(cpu.memory.get_ro_slice(CHIP8_FONT_ADDR, 1)?, &[0xF0]);
        Ok(())
    }

    #[test]
    fn test_dimensions() {
        let cpu = Chip8Interpreter::with_seed(0);
        assert_eq!(cpu.width(), 64);
        assert_eq!(cpu.height(), 32);
        assert_eq!(cpu.screen_memory().len(), 64 * 32);
    }
}
