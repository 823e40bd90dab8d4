use odometer_core::{AppConfig, Counter, ReelOutcome};
use tokio::sync::mpsc;
use tracing::debug;

use crate::input::Action;
use crate::theme::Theme;

/// Longest target that fits in a u64
const MAX_INPUT_LEN: usize = 20;

/// A finished reel run reported back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelReport {
    pub target: u64,
    pub outcome: ReelOutcome,
}

pub struct App {
    pub counter: Counter,
    /// Target being typed
    pub input: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
    /// Exit as soon as a reel run completes
    pub quit_on_complete: bool,
    /// Per-element render counts at the previous frame
    frame_renders: Vec<usize>,
    report_tx: mpsc::UnboundedSender<ReelReport>,
    report_rx: mpsc::UnboundedReceiver<ReelReport>,
}

impl App {
    pub fn new(counter: Counter, theme: Theme) -> Self {
        let (report_tx, report_rx) = mpsc::unbounded_channel();
        Self {
            counter,
            input: String::new(),
            status_message: None,
            should_quit: false,
            theme,
            quit_on_complete: false,
            frame_renders: Vec::new(),
            report_tx,
            report_rx,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Counter::from_config(&config.counter), Theme::default())
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InputDigit(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            Action::Backspace => {
                self.input.pop();
            }
            Action::Clear => {
                self.input.clear();
                self.status_message = None;
            }
            Action::Submit => {
                if self.input.is_empty() {
                    return;
                }
                match self.input.parse::<u64>() {
                    Ok(target) => {
                        self.reel_to(target);
                        self.input.clear();
                    }
                    Err(e) => self.status_message = Some(format!("Invalid target: {}", e)),
                }
            }
            Action::None => {}
        }
    }

    /// Start reeling to `target`, or jump there when the counter is static
    pub fn reel_to(&mut self, target: u64) {
        if !self.counter.is_animated() {
            self.counter.update(target);
            self.status_message = Some(format!("Set to {}", target));
            return;
        }

        let tx = self.report_tx.clone();
        let result = self.counter.reel_to(target, move |outcome| {
            let _ = tx.send(ReelReport { target, outcome });
        });
        match result {
            Ok(()) => {
                debug!("App started reel to {}", target);
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Consume finished reel reports and update the status line
    pub fn drain_reports(&mut self) {
        while let Ok(report) = self.report_rx.try_recv() {
            self.status_message = Some(match report.outcome {
                ReelOutcome::Completed => format!("Reached {}", report.target),
                ReelOutcome::Aborted => format!("Reel to {} aborted", report.target),
            });
            if report.outcome == ReelOutcome::Completed && self.quit_on_complete {
                self.should_quit = true;
            }
        }
    }

    /// Whether element `index` was rendered since the previous frame
    pub fn changed_since_last_frame(&self, index: usize) -> bool {
        let current = self.counter.elements().get(index).map(|e| e.renders());
        current != self.frame_renders.get(index).copied()
    }

    /// Remember render counts after a frame has been drawn
    pub fn commit_frame(&mut self) {
        self.frame_renders = self.counter.elements().iter().map(|e| e.renders()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use odometer_core::Skip;

    fn animated_app() -> App {
        App::new(
            Counter::with_animation(Duration::from_millis(10), Skip::new(3)),
            Theme::default(),
        )
    }

    fn type_target(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InputDigit(c));
        }
        app.handle_action(Action::Submit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_reels_and_reports_completion() {
        let mut app = animated_app();
        type_target(&mut app, "7");
        assert!(app.input.is_empty());
        assert_eq!(app.counter.value(), 3);

        while app.counter.is_reeling() {
            app.counter.tick().await;
        }
        app.drain_reports();
        assert_eq!(app.counter.value(), 7);
        assert_eq!(app.status_message.as_deref(), Some("Reached 7"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_reports_abort() {
        let mut app = animated_app();
        type_target(&mut app, "50");
        type_target(&mut app, "90");
        app.drain_reports();
        assert_eq!(app.status_message.as_deref(), Some("Reel to 50 aborted"));
        assert_eq!(app.counter.target(), Some(90));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_on_complete() {
        let mut app = animated_app();
        app.quit_on_complete = true;
        app.reel_to(2);
        app.drain_reports();
        assert!(app.should_quit);
    }

    #[test]
    fn test_static_counter_jumps() {
        let mut app = App::new(Counter::new(), Theme::default());
        type_target(&mut app, "42");
        assert_eq!(app.counter.to_string(), "42");
        assert_eq!(app.status_message.as_deref(), Some("Set to 42"));
    }

    #[test]
    fn test_input_editing() {
        let mut app = App::new(Counter::new(), Theme::default());
        app.handle_action(Action::InputDigit('1'));
        app.handle_action(Action::InputDigit('2'));
        app.handle_action(Action::Backspace);
        assert_eq!(app.input, "1");
        app.handle_action(Action::Clear);
        assert!(app.input.is_empty());
        // Empty submit is ignored
        app.handle_action(Action::Submit);
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn test_overlong_target_is_rejected() {
        let mut app = App::new(Counter::new(), Theme::default());
        type_target(&mut app, "99999999999999999999");
        assert!(app.status_message.unwrap().starts_with("Invalid target"));
    }

    #[test]
    fn test_changed_tracking() {
        let mut app = App::new(Counter::new(), Theme::default());
        assert!(app.changed_since_last_frame(0));
        app.commit_frame();
        assert!(!app.changed_since_last_frame(1));
        app.counter.update(9);
        assert!(app.changed_since_last_frame(1));
        assert!(!app.changed_since_last_frame(0));
    }
}
