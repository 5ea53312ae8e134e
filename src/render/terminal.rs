// src/render/terminal.rs

//! Putting the figure on screen, or into plain text.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::debug;

use crate::errors::Result;
use crate::render::figure::Figure;

/// Show `figure` full-screen until the user presses `q`, `Esc` or `Ctrl-C`.
///
/// The terminal is restored even when drawing fails.
pub fn show(figure: &Figure<'_>) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = run_view(&mut terminal, figure);
    ratatui::restore();
    result
}

fn run_view(terminal: &mut DefaultTerminal, figure: &Figure<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| frame.render_widget(figure, frame.area()))?;

        match event::read()? {
            Event::Key(key) if is_quit(&key) => {
                debug!("closing figure");
                return Ok(());
            }
            // Resizes and any other input just redraw.
            _ => {}
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Render `figure` off-screen at the given size and return it as text.
pub fn render_to_text(figure: &Figure<'_>, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    figure.render(area, &mut buf);
    buffer_to_text(&buf)
}

/// Cell symbols of `buf`, one line per row, trailing blanks trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(usize::from(area.width));
        for x in area.left()..area.right() {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
