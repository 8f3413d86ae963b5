use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ecode_highlight_config::Config;
use ecode_highlight_engine::{EditSurface, Highlighter, ViewState, ViewSynchronizer, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

use crate::{
    editor::TuiEditor,
    text::{self, Motion},
    viewer::TuiViewer,
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Rows taken by the pane borders and the status line.
const CHROME_ROWS: u16 = 3;

pub struct App<'h> {
    path: PathBuf,
    sync: ViewSynchronizer<'h, TuiEditor, TuiViewer>,
    saved: String,
    auto_save: bool,
    status: String,
    quit: bool,
}

impl<'h> App<'h> {
    pub fn new(path: PathBuf, document: &str, highlighter: &'h Highlighter, config: &Config) -> Self {
        let editor = TuiEditor::new("");
        let viewer = TuiViewer::new(highlighter.palette().clone());
        let mut sync = ViewSynchronizer::new(highlighter, editor, viewer);
        sync.load_document(document);
        sync.edit_mut().focus();

        Self {
            path,
            sync,
            saved: document.to_string(),
            auto_save: config.auto_save,
            status: String::new(),
            quit: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.document() != self.saved
    }

    pub fn state(&self) -> ViewState {
        self.sync.state()
    }

    pub fn document(&self) -> &str {
        self.sync.document()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn save(&mut self) -> Result<()> {
        io::write_output(&self.path, self.document())?;
        self.saved = self.document().to_string();
        self.status = format!("Saved {}", self.path.display());
        Ok(())
    }

    /// Saves on exit when auto-save is on and there are unsaved changes.
    pub fn finish(&mut self) -> Result<()> {
        if self.auto_save && self.is_dirty() {
            self.save()?;
        }
        Ok(())
    }

    fn resize(&mut self, rows: usize) {
        self.sync.edit_mut().resize(rows);
        self.sync.render_mut().resize(rows);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save()?,
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return Ok(());
        }

        match self.sync.state() {
            ViewState::Editing => self.handle_editing_key(key.code),
            ViewState::Highlighted => self.handle_highlighted_key(key.code),
        }
        Ok(())
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        let editor = self.sync.edit_mut();
        match code {
            KeyCode::Esc => {
                self.sync.show_highlighted();
            }
            KeyCode::Char(c) => editor.insert_char(c),
            KeyCode::Enter => editor.insert_char('\n'),
            KeyCode::Tab => editor.insert_str("    "),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => editor.move_caret(Motion::Left),
            KeyCode::Right => editor.move_caret(Motion::Right),
            KeyCode::Up => editor.move_caret(Motion::Up),
            KeyCode::Down => editor.move_caret(Motion::Down),
            KeyCode::Home => editor.move_caret(Motion::Home),
            KeyCode::End => editor.move_caret(Motion::End),
            KeyCode::PageUp => editor.page(false),
            KeyCode::PageDown => editor.page(true),
            _ => {}
        }
    }

    fn handle_highlighted_key(&mut self, code: KeyCode) {
        let viewer = self.sync.render_mut();
        match code {
            KeyCode::Char('i') | KeyCode::Enter => {
                self.sync.show_editing();
            }
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => viewer.clear_caret(),
            KeyCode::Left => viewer.move_caret(Motion::Left),
            KeyCode::Right => viewer.move_caret(Motion::Right),
            KeyCode::Up => viewer.move_caret(Motion::Up),
            KeyCode::Down => viewer.move_caret(Motion::Down),
            KeyCode::Home => viewer.move_caret(Motion::Home),
            KeyCode::End => viewer.move_caret(Motion::End),
            KeyCode::PageUp => viewer.page(false),
            KeyCode::PageDown => viewer.page(true),
            _ => {}
        }
    }
}

pub fn run(path: PathBuf, highlighter: &Highlighter, config: &Config) -> Result<()> {
    let document = if path.exists() {
        io::read_source(&path)?
    } else {
        String::new()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, &document, highlighter, config);

    // Main loop
    let res = run_app(&mut terminal, &mut app).and_then(|()| app.finish());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let size = terminal.size()?;
        app.resize(size.height.saturating_sub(CHROME_ROWS) as usize);

        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Err(err) = app.handle_key(key)
        {
            app.status = format!("Error: {err}");
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let dirty = if app.is_dirty() { " *" } else { "" };
    let (mode, help) = match app.state() {
        ViewState::Editing => ("Edit", "Esc: Highlight | Ctrl+S: Save | Ctrl+Q: Quit"),
        ViewState::Highlighted => (
            "Highlight",
            "i/Enter: Edit | Arrows: Caret | q: Quit | Ctrl+S: Save",
        ),
    };
    let title = format!("{}{dirty} [{mode}]", app.path.display());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(chunks[0]);

    if app.sync.edit().is_visible() {
        draw_editor(f, app, block, chunks[0], inner);
    } else if app.sync.render().is_visible() {
        draw_viewer(f, app, block, chunks[0], inner);
    }

    let status = if app.status.is_empty() {
        help.to_string()
    } else {
        format!("{} | {help}", app.status)
    };
    let status = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, chunks[1]);
}

fn draw_editor(f: &mut Frame, app: &App, block: Block, area: Rect, inner: Rect) {
    let editor = app.sync.edit();
    let lines: Vec<Line> = editor.visible_lines().map(Line::raw).collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
    if !editor.is_focused() {
        return;
    }

    let (line, col) = editor.caret_position();
    let Some(row) = editor.row_of(line) else {
        return;
    };
    let column = text::display_column(text::nth_line(editor.text(), line), col);
    f.set_cursor_position((inner.x + column as u16, inner.y + row as u16));
}

fn draw_viewer(f: &mut Frame, app: &App, block: Block, area: Rect, inner: Rect) {
    let viewer = app.sync.render();
    f.render_widget(Paragraph::new(viewer.visible_lines()).block(block), area);

    if let Some((line, col)) = viewer.caret_position()
        && let Some(row) = viewer.row_of(line)
    {
        let column = text::display_column(viewer.line_text(line), col);
        f.set_cursor_position((inner.x + column as u16, inner.y + row as u16));
    }
}
