use beep::beep;
use std::error::Error;

pub trait Sound {
    fn beep(&mut self) -> Result<(), Box<dyn Error>>;
    fn stop(&mut self) -> Result<(), Box<dyn Error>>;
}

const SIMPLEBEEP_PITCH: u16 = 2093; // C

/// PC speaker tone; needs access to the console device
pub struct SimpleBeep;

impl SimpleBeep {
    pub fn new() -> Self {
        SimpleBeep
    }
}

impl Default for SimpleBeep {
    fn default() -> Self {
        SimpleBeep::new()
    }
}

impl Sound for SimpleBeep {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        beep(SIMPLEBEEP_PITCH)?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        beep(0)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct Mute;

impl Mute {
    pub fn new() -> Self {
        Mute
    }
}

impl Sound for Mute {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// Follows the engine's sound timer, only touching the device when the tone
/// should start or stop. A device that errors is switched off for good.
pub struct Buzzer {
    sound: Box<dyn Sound>,
    sounding: bool,
    broken: bool,
}

impl Buzzer {
    pub fn new(sound: Box<dyn Sound>) -> Self {
        Buzzer {
            sound,
            sounding: false,
            broken: false,
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn update(&mut self, active: bool) {
        if self.broken || active == self.sounding {
            return;
        }
        let result = if active {
            self.sound.beep()
        } else {
            self.sound.stop()
        };
        match result {
            Ok(()) => self.sounding = active,
            Err(e) => {
                log::warn!("sound disabled: {}", e);
                self.broken = true;
            }
        }
    }
}

impl Drop for Buzzer {
    fn drop(&mut self) {
        if self.sounding {
            let _ = self.sound.stop();
        }
    }
}
