/// number of lines on the hex keypad
pub const KEYPAD_SIZE: usize = 16;

/// COSMAC VIP hex keypad latch, one line per key 0x0-0xF. Codes outside the
/// keypad are ignored rather than trusted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEYPAD_SIZE],
}

impl Keypad {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn key_down(&mut self, key: u8) {
        if let Some(line) = self.pressed.get_mut(key as usize) {
            *line = true;
        }
    }

    pub fn key_up(&mut self, key: u8) {
        if let Some(line) = self.pressed.get_mut(key as usize) {
            *line = false;
        }
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    /// lowest numbered key currently held
    pub fn first_pressed(&self) -> Option<u8> {
        self.pressed.iter().position(|&p| p).map(|k| k as u8)
    }

    pub fn clear(&mut self) {
        self.pressed = [false; KEYPAD_SIZE];
    }
}
