use crate::error::EngineError;

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// Represents the addressable RAM of the engine. Every access is bounds
/// checked; a bad address is an engine fault, not a panic.
pub trait MemoryMap {
    /// write a chunk of bytes into "RAM"
    fn write(&mut self, data: &[u8], addr: u16) -> Result<(), EngineError> {
        self.get_rw_slice(addr, data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// get a two-byte big-endian word (opcodes)
    fn get_word(&self, addr: u16) -> Result<u16, EngineError> {
        let word = self.get_ro_slice(addr, 2)?;
        Ok(((word[0] as u16) << 8) | (word[1] as u16))
    }

    /// get a r/w slice of the underlying memory
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8], EngineError>;

    /// get a r/o slice of the underlying memory
    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8], EngineError>;
}

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where the program is loaded
pub const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// where the hex digit glyphs live; each glyph is 5 bytes
pub const CHIP8_FONT_ADDR: u16 = 0x050;
pub const CHIP8_FONT_GLYPH_BYTES: u16 = 5;

/// largest program image that fits between the origin and the top of RAM
pub const CHIP8_MAX_PROGRAM_BYTES: usize = CHIP8_RAM_SIZE_BYTES - CHIP8_PROGRAM_ADDR as usize;

/// CHIP-8 memory map, 4K configuration:
///   0x0000-0x01ff  interpreter (font at 0x050)
///   0x0200-0x0fff  program
pub struct Chip8MemoryMap {
    bytes: Box<[u8]>,
}

impl MemoryMap for Chip8MemoryMap {
    fn get_rw_slice(&mut self, addr: u16, len: usize) -> Result<&mut [u8], EngineError> {
        let a = addr as usize;
        self.bytes
            .get_mut(a..a + len)
            .ok_or_else(|| EngineError::OutOfBounds {
                address: (a + len).saturating_sub(1),
            })
    }

    fn get_ro_slice(&self, addr: u16, len: usize) -> Result<&[u8], EngineError> {
        let a = addr as usize;
        self.bytes
            .get(a..a + len)
            .ok_or_else(|| EngineError::OutOfBounds {
                address: (a + len).saturating_sub(1),
            })
    }
}

impl Chip8MemoryMap {
    /// zeroed RAM with the font baked in
    pub fn new() -> Self {
        let mut bytes = vec![0u8; CHIP8_RAM_SIZE_BYTES].into_boxed_slice();
        let font = CHIP8_FONT_ADDR as usize;
        bytes[font..font + CHIP8_FONT.len()].copy_from_slice(&CHIP8_FONT);
        Chip8MemoryMap { bytes }
    }

    /// put RAM back to its power-on contents
    pub fn clear(&mut self) {
        *self = Chip8MemoryMap::new();
    }

    /// load a CHIP-8 program at 0x200; an image that doesn't fit is refused
    /// before anything is written
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), EngineError> {
        if program.len() > CHIP8_MAX_PROGRAM_BYTES {
            return Err(EngineError::ProgramTooLarge {
                size: program.len(),
                max: CHIP8_MAX_PROGRAM_BYTES,
            });
        }
        self.write(program, CHIP8_PROGRAM_ADDR)
    }
}

impl Default for Chip8MemoryMap {
    fn default() -> Self {
        Chip8MemoryMap::new()
    }
}

const CHIP8_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
