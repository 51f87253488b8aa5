use super::{
    course_list::render_course_list, footer::render_footer, header::render_header,
    search::render_search,
};
use anyhow::Result;
use course_core::{
    browser::Browser,
    theme::{Element, Theme},
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    prelude::{Constraint, Direction, Frame, Layout, Terminal},
    widgets::{Block, Borders},
};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Moving through cards
    #[default]
    Browse,
    /// Typing into the search field
    Search,
}

pub struct App {
    should_quit: bool,
    mode: AppMode,
    browser: Browser,
    tick_rate: Duration,
}

impl App {
    pub fn new(browser: Browser, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::default(),
            browser,
            tick_rate,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let theme = self.theme();
        let background = Block::new()
            .borders(Borders::NONE)
            .style(theme.ratatui_style(Element::Background));

        let area = frame.size();
        frame.render_widget(background, area);

        let app_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(
            frame,
            app_chunks[0],
            &theme,
            self.browser.visible().len(),
            self.browser.catalog().len(),
        );
        render_search(
            frame,
            app_chunks[1],
            &theme,
            self.browser.query(),
            self.mode == AppMode::Search,
        );
        render_course_list(frame, app_chunks[2], &theme, &self.browser);
        render_footer(frame, app_chunks[3], &theme, self.mode);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('/') | KeyCode::Char('s') => self.mode = AppMode::Search,
                KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
                KeyCode::Up | KeyCode::Char('k') => self.browser.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.browser.select_next(),
                KeyCode::Home | KeyCode::Char('g') => self.browser.select_first(),
                KeyCode::End | KeyCode::Char('G') => self.browser.select_last(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.browser.toggle_selected();
                }
                KeyCode::Esc => self.browser.clear_query(),
                _ => {}
            },
            AppMode::Search => match key.code {
                KeyCode::Char('u') if ctrl => self.browser.clear_query(),
                KeyCode::Char(c) if !ctrl => self.browser.push_char(c),
                KeyCode::Backspace => self.browser.pop_char(),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Down | KeyCode::Tab => {
                    self.mode = AppMode::Browse;
                }
                _ => {}
            },
        }
    }

    fn toggle_theme(&mut self) {
        self.browser.toggle_dark_mode();
        tracing::info!(variant = %self.theme().variant(), "palette switched");
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// The palette always follows the browser's dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.browser.is_dark_mode())
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }
}
