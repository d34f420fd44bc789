// src/viewer/terminal.rs
//! Full-screen pager that shows each surface of a [`Session`] as a
//! horizontal split. Nothing typed here reaches the buffers.

use crate::config::ViewerConfig;
use crate::editor::{Cursor, ScratchBuffer, SyntaxHighlighter};
use crate::host::Session;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{prelude::*, widgets::*};
use std::io;

struct Pane<'a> {
    buffer: &'a ScratchBuffer,
    lines: Vec<Line<'static>>,
    cursor: Cursor,
}

impl Pane<'_> {
    fn title(&self, index: usize, label: &str) -> String {
        let flags = self.buffer.flags();
        let mut title = format!(" {label} #{}", index + 1);
        if let Some(filetype) = &flags.filetype {
            title.push_str(&format!(" [{filetype}]"));
        }
        if flags.readonly {
            title.push_str(" [RO]");
        }
        if !flags.modifiable {
            title.push_str(" [-]");
        }
        title.push(' ');
        title
    }
}

pub struct Pager<'a> {
    panes: Vec<Pane<'a>>,
    label: String,
    focus: usize,
    wrap: bool,
    page_height: usize,
    quit: bool,
}

impl<'a> Pager<'a> {
    pub fn new(session: &'a Session, config: &ViewerConfig, label: impl Into<String>) -> Self {
        let highlighter = SyntaxHighlighter::new(config.highlight);
        let panes = session
            .buffers()
            .iter()
            .map(|buffer| Pane {
                buffer,
                lines: highlighter.highlight(buffer.lines(), buffer.flags().filetype.as_deref()),
                cursor: Cursor::default(),
            })
            .collect();

        Pager {
            panes,
            label: label.into(),
            focus: 0,
            wrap: config.wrap,
            page_height: 20,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit || self.panes.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn top_line(&self, pane: usize) -> Option<usize> {
        self.panes.get(pane).map(|p| p.cursor.line)
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let page = self.page_height.max(1) as isize;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Tab => {
                if !self.panes.is_empty() {
                    self.focus = (self.focus + 1) % self.panes.len();
                }
            }
            KeyCode::Char('w') => self.wrap = !self.wrap,
            KeyCode::Char('j') | KeyCode::Down => self.scroll(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll(page),
            KeyCode::PageUp => self.scroll(-page),
            KeyCode::Char('g') | KeyCode::Home => {
                if let Some(pane) = self.panes.get_mut(self.focus) {
                    pane.cursor.to_top();
                }
            }
            KeyCode::Char('G') | KeyCode::End => {
                if let Some(pane) = self.panes.get_mut(self.focus) {
                    pane.cursor.to_bottom(pane.buffer);
                }
            }
            _ => {}
        }
    }

    fn scroll(&mut self, delta: isize) {
        if let Some(pane) = self.panes.get_mut(self.focus) {
            pane.cursor.scroll_by(pane.buffer, delta);
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        if self.panes.is_empty() {
            return;
        }

        let count = self.panes.len() as u32;
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, count); self.panes.len()])
            .split(f.size());

        for (i, (pane, area)) in self.panes.iter().zip(areas.iter()).enumerate() {
            let border = if i == self.focus {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(pane.title(i, &self.label));
            // Scrolling is by logical line; wrapped rows start from the top line.
            let top = pane.cursor.line.min(pane.lines.len());
            let mut paragraph = Paragraph::new(pane.lines[top..].to_vec()).block(block);
            if self.wrap {
                paragraph = paragraph.wrap(Wrap { trim: false });
            }
            f.render_widget(paragraph, *area);
        }

        if let Some(area) = areas.get(self.focus) {
            self.page_height = area.height.saturating_sub(2) as usize;
        }
    }

    /// Takes over the terminal until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let result = self.event_loop();

        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;

        while !self.should_quit() {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }
}
