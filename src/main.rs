use std::error::Error;

use clap::Parser;
use env_logger::Env;

use chip8::app::App;
use chip8::config::Settings;
use chip8::display::TermDisplay;
use chip8::input::TermInput;
use chip8::interpreter::Chip8Interpreter;
use chip8::sound::{Buzzer, Mute, SimpleBeep, Sound};
use chip8::{Engine, Scheduler};

fn main() -> Result<(), Box<dyn Error>> {
    // NB. the screen owns stdout, so send logs elsewhere with 2>
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let settings = Settings::parse();

    // initialise
    let engine = Chip8Interpreter::new();
    let scale = settings.scale as usize;
    let display = TermDisplay::new(engine.width() * scale, engine.height() * scale)?;
    let input = TermInput::new(settings.hold())?;
    let sound: Box<dyn Sound> = if settings.sound {
        Box::new(SimpleBeep::new())
    } else {
        Box::new(Mute::new())
    };

    let scheduler = Scheduler::new(engine, display, scale, settings.speed as usize);
    let mut app = App::new(scheduler, input, Buzzer::new(sound), &settings);
    app.run(settings.frame_interval())?;
    Ok(())
}
