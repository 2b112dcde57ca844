use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::engine::{Screen, Surface};

const BG: Color = Color::Black;
const FG: Color = Color::White;

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
        .title(" Asteroids ")
        .title_style(Style::default().fg(Color::Rgb(130, 220, 255)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BG));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let w = inner.width as usize;
    let h = inner.height as usize;
    if w > 0 && h > 0 {
        frame.render_widget(Paragraph::new(screen_lines(&app.screen, w, h)), inner);
    }
}

// ── Braille rendering helpers ──────────────────────────────────────

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Scale the logical screen onto a `w`×`h` cell grid, two by four braille dots
/// per cell, then lay the screen's text on top at the matching cells.
fn screen_lines(screen: &Screen, w: usize, h: usize) -> Vec<Line<'static>> {
    let sw = screen.width().max(1) as usize;
    let sh = screen.height().max(1) as usize;
    let bw = w * 2;
    let bh = h * 4;

    let mut dots = vec![0u8; w * h];
    for (x, y) in screen.lit_pixels() {
        let bx = x as usize * bw / sw;
        let by = y as usize * bh / sh;
        dots[(by / 4) * w + bx / 2] |= braille_bit(bx % 2, by % 4);
    }

    let dot_style = Style::default().fg(FG).bg(BG);
    let mut grid: Vec<Vec<(char, Style)>> = dots
        .chunks(w)
        .map(|row| {
            row.iter()
                .map(|&bits| {
                    let ch = if bits == 0 {
                        ' '
                    } else {
                        char::from_u32(0x2800 + bits as u32).unwrap_or(' ')
                    };
                    (ch, dot_style)
                })
                .collect()
        })
        .collect();

    let text_style = Style::default().fg(FG).bg(BG).add_modifier(Modifier::BOLD);
    for overlay in screen.texts() {
        if overlay.x < 0 || overlay.y < 0 {
            continue;
        }
        let cx = overlay.x as usize * w / sw;
        let cy = overlay.y as usize * h / sh;
        let Some(row) = grid.get_mut(cy) else { continue };
        for (cell, ch) in row.iter_mut().skip(cx).zip(overlay.text.chars()) {
            *cell = (ch, text_style);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
