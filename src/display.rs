use crate::engine::Engine;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use std::io::{self, Stdout};
use tui::backend::CrosstermBackend;
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;

/// Surface is what the decoder paints on. It should abstract the
/// implementation details, so a variety of kinds of screen would work.
pub trait Surface {
    /// wipe everything back to the background
    fn clear(&mut self);

    /// paint a solid rectangle in the foreground colour
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize);

    /// push the finished frame out, if the surface has somewhere to push it
    fn present(&mut self) -> Result<(), io::Error> {
        Ok(())
    }

    /// surfaces with room for a status line show it from the next present
    fn set_status(&mut self, _status: &Status) {}
}

/// Rasterises the engine framebuffer. Dimensions are taken from the engine
/// once, when the decoder is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDecoder {
    width: usize,
    height: usize,
    scale: usize,
}

impl DisplayDecoder {
    pub fn new(engine: &impl Engine, scale: usize) -> Self {
        DisplayDecoder {
            width: engine.width(),
            height: engine.height(),
            scale,
        }
    }

    /// size of the surface this decoder paints, in surface pixels
    pub fn surface_size(&self) -> (usize, usize) {
        (self.width * self.scale, self.height * self.scale)
    }

    /// Clear the surface, then paint one `scale` sized block per lit cell.
    /// Every cell is visited; the engine gives no hint about what changed.
    pub fn decode(
        &self,
        engine: &impl Engine,
        surface: &mut impl Surface,
    ) -> Result<(), io::Error> {
        let pixels = engine.screen_memory();
        surface.clear();
        for row in 0..self.height {
            for col in 0..self.width {
                if pixels[self.index(row, col)] != 0 {
                    surface.fill_rect(col * self.scale, row * self.scale, self.scale, self.scale);
                }
            }
        }
        surface.present()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

/// plain in-memory surface; `true` is foreground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// a buffer the right size for what `decoder` paints
    pub fn for_decoder(decoder: &DisplayDecoder) -> Self {
        let (w, h) = decoder.surface_size();
        FrameBuffer::new(w, h)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// coordinates of every lit pixel, row by row
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(move |(i, _)| (i % w, i / w))
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = false);
    }

    // clipped to the buffer
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = py * self.width;
            self.pixels[row + x.min(x_end)..row + x_end]
                .iter_mut()
                .for_each(|p| *p = true);
        }
    }
}

/// what the status line under the screen says
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Status {
    pub paused: bool,
    pub program: Option<String>,
    pub message: Option<String>,
}

impl Status {
    /// the play/pause control shows the action it would take
    pub fn label(&self) -> &'static str {
        if self.paused {
            "▶"
        } else {
            "||"
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            " {}  {}",
            self.label(),
            self.program.as_deref().unwrap_or("no program")
        );
        if let Some(message) = &self.message {
            line.push_str("  ");
            line.push_str(message);
        }
        line
    }
}

const FOREGROUND: Color = Color::White;
const BACKGROUND: Color = Color::Black;

/// monochrome display in a terminal, rendered using TUI and crossterm. The
/// decoder paints into an in-memory frame which is drawn on `present`.
pub struct TermDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    frame: FrameBuffer,
    status: Status,
}

impl TermDisplay {
    pub fn new(width: usize, height: usize) -> Result<TermDisplay, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        Ok(TermDisplay {
            terminal,
            frame: FrameBuffer::new(width, height),
            status: Status {
                paused: true,
                ..Default::default()
            },
        })
    }
}

impl Surface for TermDisplay {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        self.frame.fill_rect(x, y, w, h);
    }

    fn set_status(&mut self, status: &Status) {
        self.status = status.clone();
    }

    fn present(&mut self) -> Result<(), io::Error> {
        let frame = &self.frame;
        let status = self.status.line();
        // canvas y grows upward, so rows are flipped
        let coords: Vec<(f64, f64)> = frame
            .lit_pixels()
            .map(|(x, y)| (x as f64, -(y as f64)))
            .collect();
        let x_bounds = [0.0, (frame.width() - 1) as f64];
        let y_bounds = [-((frame.height() - 1) as f64), 0.0];

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
                .split(f.size());

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(BACKGROUND)),
                )
                .x_bounds(x_bounds)
                .y_bounds(y_bounds)
                .marker(Marker::Braille)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &coords,
                        color: FOREGROUND,
                    });
                });
            f.render_widget(canvas, chunks[0]);
            f.render_widget(Paragraph::new(status.as_str()), chunks[1]);
        })?;
        Ok(())
    }
}

impl Drop for TermDisplay {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
