use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    style::Style,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use odometer_core::AppConfig;
use odometer_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{CounterWidget, StatusBarWidget},
    App,
};

pub async fn run(config: &AppConfig) -> Result<()> {
    let app = App::from_config(config);
    run_app(app, config.ui.tick_rate_ms).await?;
    Ok(())
}

/// Drive `app` in the terminal until it quits, then hand it back
pub async fn run_app(mut app: App, tick_rate_ms: u64) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Odometer"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, tick_rate_ms).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app)
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate_ms: u64,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let _pump = EventHandler::new(tick_rate_ms).spawn(event_tx);

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        app.commit_frame();

        app.drain_reports();
        if app.should_quit {
            break;
        }

        tokio::select! {
            event = event_rx.recv() => match event {
                Some(AppEvent::Key(key)) => app.handle_action(handle_key_event(key)),
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
                None => break,
            },
            _ = app.counter.tick(), if app.counter.is_reeling() => {}
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    // Main layout: counter + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    CounterWidget::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
