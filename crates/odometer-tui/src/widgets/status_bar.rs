use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn status_text(app: &App) -> String {
        if let Some(msg) = &app.status_message {
            return format!(" {}", msg);
        }

        let mode = match app.counter.target() {
            Some(target) => format!("REELING -> {}", target),
            None => "IDLE".to_string(),
        };

        let mut text = format!(" {} | Value: {}", mode, app.counter.value());
        if let (Some(skip), Some(interval)) = (app.counter.skip(), app.counter.interval()) {
            text.push_str(&format!(" | Skip: {} | Every: {}ms", skip, interval.as_millis()));
        }
        if !app.input.is_empty() {
            text.push_str(&format!(" | Target: {}_", app.input));
        }
        text
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = Self::status_text(app);
        let status_color = if app.counter.is_reeling() {
            theme.reeling
        } else {
            theme.fg0
        };

        let help_hint = " 0-9:target Enter:reel Esc:clear q:quit ";
        let padding_len = area.width.saturating_sub(
            status_text.chars().count() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_color).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use odometer_core::{Counter, Skip};

    use crate::theme::Theme;

    #[test]
    fn test_idle_status() {
        let app = App::new(Counter::new(), Theme::default());
        assert_eq!(StatusBarWidget::status_text(&app), " IDLE | Value: 0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reeling_status() {
        let mut app = App::new(
            Counter::with_animation(Duration::from_millis(40), Skip::new(2)),
            Theme::default(),
        );
        app.reel_to(9);
        app.input.push('5');
        assert_eq!(
            StatusBarWidget::status_text(&app),
            " REELING -> 9 | Value: 2 | Skip: 2 | Every: 40ms | Target: 5_"
        );
    }

    #[test]
    fn test_message_overrides_status() {
        let mut app = App::new(Counter::new(), Theme::default());
        app.status_message = Some("Reached 12".to_string());
        assert_eq!(StatusBarWidget::status_text(&app), " Reached 12");
    }
}
