//! Demo host: one selector on an otherwise empty screen

use crate::config::Config;
use crate::picker::ChangeEvent;
use crate::ui::components::{DateTimeSelector, StatusBar};
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crate::ui::layout::LayoutManager;
use crate::ui::terminal::TerminalSession;
use crate::ui::theme::Theme;
use anyhow::Context;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

/// Application state
pub struct App {
    pub selector: DateTimeSelector,
    pub changes: Vec<ChangeEvent>,
    pub should_quit: bool,
    title: String,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let props = config.picker_props().context("Invalid picker configuration")?;
        let theme = Theme::for_bootstrap(props.use_bootstrap).with_class(&props.custom_class_name, &config.theme.classes);
        let title = format!("datetime-selector ({} mode)", props.mode);

        let mut selector = DateTimeSelector::new(props)?.with_theme(theme);
        selector.init()?;

        Ok(Self {
            selector,
            changes: Vec::new(),
            should_quit: false,
            title,
        })
    }

    /// Route one event through the selector, then handle app-level keys
    pub fn handle_event(&mut self, event: EventType) -> Action {
        let action = match event {
            EventType::Key(key) if self.is_quit_key(key) => Action::Quit,
            EventType::Key(key) => self.selector.handle_events(Some(Event::Key(key))),
            EventType::Mouse(mouse) => self.selector.handle_events(Some(Event::Mouse(mouse))),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        match self.selector.update(action) {
            Action::ValueChanged(event) => {
                self.changes.push(event.clone());
                Action::ValueChanged(event)
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            other => other,
        }
    }

    fn is_quit_key(&self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        // 'q' only quits while the popover is closed so it never steals picker input
        !self.selector.is_open() && key.code == KeyCode::Char('q')
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let [title_area, body_area, status_area] = LayoutManager::main_layout(area);

        let title = Paragraph::new(Line::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(title, title_area);

        self.selector.render(f, LayoutManager::picker_area(body_area));
        StatusBar::render(f, status_area, self.changes.last());
    }

    /// Unmount the selector and hand back everything it emitted
    pub fn finish(mut self) -> Vec<ChangeEvent> {
        self.selector.unmount();
        self.changes
    }
}

/// Run the demo until the user quits; returns every emitted change
pub async fn run_app(config: &Config) -> anyhow::Result<Vec<ChangeEvent>> {
    let mut app = App::new(config)?;
    let mut session = TerminalSession::start(config.ui.mouse_enabled)?;
    let mut event_handler = EventHandler::new();

    run_app_loop(&mut session.terminal, &mut app, &mut event_handler).await?;

    drop(session);
    Ok(app.finish())
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed, at most once per frame interval
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
