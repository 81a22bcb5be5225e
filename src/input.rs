use crate::engine::Engine;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::{Duration, Instant};

/// host key codes are upper-case ASCII, so '1' => 49 and 'q' => 81
pub type HostCode = u32;

/// left-hand side of a qwerty keyboard laid over the COSMAC hex keypad
///   1 2 3 C      1 2 3 4
///   4 5 6 D      Q W E R
///   7 8 9 E      A S D F
///   A 0 B F      Z X C V
const CHIP8_CONVENTIONAL_KEYMAP: [(HostCode, u8); 16] = [
    (49, 0x1), // 1
    (50, 0x2), // 2
    (51, 0x3), // 3
    (52, 0xc), // 4
    (81, 0x4), // Q
    (87, 0x5), // W
    (69, 0x6), // E
    (82, 0xd), // R
    (65, 0x7), // A
    (83, 0x8), // S
    (68, 0x9), // D
    (70, 0xe), // F
    (90, 0xa), // Z
    (88, 0x0), // X
    (67, 0xb), // C
    (86, 0xf), // V
];

/// host key code to keypad index; fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    keys: HashMap<HostCode, u8>,
}

impl KeyMap {
    pub fn conventional() -> Self {
        KeyMap {
            keys: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
        }
    }

    pub fn get(&self, code: HostCode) -> Option<u8> {
        self.keys.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap::conventional()
    }
}

/// Forwards mapped key presses and releases to the engine. Unmapped keys go
/// nowhere. No debouncing: every down is forwarded, the engine latch copes.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    keymap: KeyMap,
}

impl InputMapper {
    pub fn new(keymap: KeyMap) -> Self {
        InputMapper { keymap }
    }

    /// returns the keypad index forwarded, if any
    pub fn on_key_down(&self, code: HostCode, engine: &mut impl Engine) -> Option<u8> {
        let key = self.lookup(code)?;
        engine.key_down(key);
        Some(key)
    }

    /// returns the keypad index forwarded, if any
    pub fn on_key_up(&self, code: HostCode, engine: &mut impl Engine) -> Option<u8> {
        let key = self.lookup(code)?;
        engine.key_up(key);
        Some(key)
    }

    fn lookup(&self, code: HostCode) -> Option<u8> {
        let key = self.keymap.get(code);
        if key.is_none() {
            log::trace!("ignoring unmapped key {}", code);
        }
        key
    }
}

/// things the host can ask of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    KeyDown(HostCode),
    KeyUp(HostCode),
    TogglePlay,
    Reload,
    Quit,
}

/// reads host events
pub trait Input {
    /// everything that has happened since the last call, oldest first
    fn poll_events(&mut self) -> Result<Vec<HostEvent>, io::Error>;
}

/// upper-case ASCII code for a character key
pub fn host_code(code: KeyCode) -> Option<HostCode> {
    match code {
        KeyCode::Char(c) if c.is_ascii() => Some(c.to_ascii_uppercase() as HostCode),
        _ => None,
    }
}

/// Keyboard input from a raw-mode terminal. Terminals only report presses
/// (repeating while held), so a key that hasn't repeated within `hold` is
/// reported as released.
pub struct TermInput {
    hold: Duration,
    held: HashMap<HostCode, Instant>,
}

impl TermInput {
    pub fn new(hold: Duration) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput {
            hold,
            held: HashMap::new(),
        })
    }

    fn translate(&mut self, evt: KeyEvent, now: Instant) -> Option<HostEvent> {
        match evt.code {
            KeyCode::Esc => Some(HostEvent::Quit),
            KeyCode::Char('c') if evt.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(HostEvent::Quit)
            }
            KeyCode::Char(' ') => Some(HostEvent::TogglePlay),
            KeyCode::F(5) | KeyCode::Backspace => Some(HostEvent::Reload),
            code => {
                let code = host_code(code)?;
                self.held.insert(code, now);
                Some(HostEvent::KeyDown(code))
            }
        }
    }

    fn expire(&mut self, now: Instant, events: &mut Vec<HostEvent>) {
        let hold = self.hold;
        let mut released: Vec<HostCode> = self
            .held
            .iter()
            .filter(|(_, &last)| now.duration_since(last) >= hold)
            .map(|(&code, _)| code)
            .collect();
        released.sort_unstable();
        for code in released {
            self.held.remove(&code);
            events.push(HostEvent::KeyUp(code));
        }
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for TermInput {
    fn poll_events(&mut self) -> Result<Vec<HostEvent>, io::Error> {
        let mut events = Vec::new();
        while poll(Duration::from_millis(0))? {
            let now = Instant::now();
            match read()? {
                Event::Key(evt) => match self.translate(evt, now) {
                    Some(event) => events.push(event),
                    None => log::debug!("no mapping for {:?}", evt.code),
                },
                other => log::trace!("ignoring terminal event {:?}", other),
            }
        }
        self.expire(Instant::now(), &mut events);
        Ok(events)
    }
}

/// dummy Input implementation for testing; hands out one batch per poll
pub struct DummyInput {
    batches: VecDeque<Vec<HostEvent>>,
}

impl DummyInput {
    pub fn new(batches: Vec<Vec<HostEvent>>) -> Self {
        DummyInput {
            batches: batches.into(),
        }
    }
}

impl Input for DummyInput {
    fn poll_events(&mut self) -> Result<Vec<HostEvent>, io::Error> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
