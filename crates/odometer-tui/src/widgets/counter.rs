use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Glyph rows per digit
const GLYPH_HEIGHT: u16 = 5;
/// Glyph columns per digit
const GLYPH_WIDTH: u16 = 3;
/// Cell size including border and one column of padding on each side
const CELL_WIDTH: u16 = GLYPH_WIDTH + 4;
const CELL_HEIGHT: u16 = GLYPH_HEIGHT + 2;

/// 3x5 block font, one row per string
const GLYPHS: [[&str; GLYPH_HEIGHT as usize]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

pub struct CounterWidget;

impl CounterWidget {
    /// Render every digit element, large when the area allows it
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let count = app.counter.elements().len() as u16;
        if area.height >= CELL_HEIGHT && area.width >= count.saturating_mul(CELL_WIDTH) {
            Self::render_cells(frame, area, app);
        } else {
            Self::render_compact(frame, area, app);
        }
    }

    fn digit_style(app: &App, index: usize) -> Style {
        let color = if app.changed_since_last_frame(index) {
            app.theme.changed
        } else {
            app.theme.steady
        };
        Style::default().fg(color).bg(app.theme.bg0)
    }

    fn render_cells(frame: &mut Frame, area: Rect, app: &App) {
        let count = app.counter.elements().len() as u16;
        let total_width = count * CELL_WIDTH;
        let x0 = area.x + (area.width - total_width) / 2;
        let y0 = area.y + (area.height - CELL_HEIGHT) / 2;

        let border_color = if app.counter.is_reeling() {
            app.theme.reeling
        } else {
            app.theme.grey0
        };

        for (i, element) in app.counter.elements().iter().enumerate() {
            let cell = Rect::new(x0 + i as u16 * CELL_WIDTH, y0, CELL_WIDTH, CELL_HEIGHT);
            let style = Self::digit_style(app, i);

            let lines: Vec<Line> = GLYPHS[element.value() as usize]
                .iter()
                .map(|row| Line::from(Span::styled(*row, style)))
                .collect();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(app.theme.bg0));

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, cell);
        }
    }

    fn render_compact(frame: &mut Frame, area: Rect, app: &App) {
        let spans: Vec<Span> = app
            .counter
            .elements()
            .iter()
            .enumerate()
            .map(|(i, element)| {
                Span::styled(
                    format!(" {} ", element.text()),
                    Self::digit_style(app, i).add_modifier(Modifier::BOLD),
                )
            })
            .collect();

        let y = area.y + area.height.saturating_sub(1) / 2;
        let row = Rect::new(area.x, y, area.width, area.height.min(1));
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), row);
    }
}
