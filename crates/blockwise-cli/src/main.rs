use anyhow::Result;
use blockwise_config::Config;
use blockwise_engine::{Document, ExpandState, LineOffsets, SelectionExpander};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env, fs,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

struct App {
    path: PathBuf,
    doc: Document,
    lines: Vec<String>,
    cursor_line: usize,
    scroll: usize,
    expander: SelectionExpander,
    state: ExpandState,
}

impl App {
    fn new(path: PathBuf, window: Duration) -> Result<Self> {
        let bytes = fs::read(&path)?;
        let mut doc = Document::from_bytes(&bytes)?;
        doc.set_cursor(0);
        let lines: Vec<String> = doc.text().lines().map(str::to_string).collect();

        Ok(Self {
            path,
            doc,
            lines,
            cursor_line: 0,
            scroll: 0,
            expander: SelectionExpander::new(window),
            state: ExpandState::default(),
        })
    }

    fn move_cursor(&mut self, delta: isize) {
        let max = self.lines.len().saturating_sub(1);
        let line = self.cursor_line.saturating_add_signed(delta).min(max);
        self.cursor_line = line;
        // Moving the caret changes the selection, which implicitly breaks
        // any running expansion sequence.
        self.doc.set_cursor(self.doc.line_start(line));
    }

    fn expand(&mut self) {
        let range = self
            .doc
            .expand_selection(&self.expander, &mut self.state, Instant::now());
        // Request the start of the new selection scrolled into view.
        self.scroll = self.scroll.min(self.doc.line_of_offset(range.start));
    }

    fn collapse(&mut self) {
        self.doc.set_cursor(self.doc.line_start(self.cursor_line));
    }

    fn level_name(&self) -> &'static str {
        match self.state.level {
            0 => "block",
            1 => "siblings",
            2 => "parent level",
            _ => "document",
        }
    }

    /// Keeps the cursor line inside the viewport of `height` rows.
    fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor_line < self.scroll {
            self.scroll = self.cursor_line;
        } else if self.cursor_line >= self.scroll + height {
            self.scroll = self.cursor_line + 1 - height;
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let file_path = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match &config.default_file {
            Some(path) => path.clone(),
            None => {
                eprintln!("Error: No file provided and no default_file configured");
                eprintln!("Usage: {} <markdown-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [markdown-file]", args[0]);
        process::exit(1);
    };

    if !file_path.exists() {
        eprintln!("Error: File '{}' not found", file_path.display());
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let window = Duration::from_millis(config.select_window_ms);
    let mut app = App::new(file_path, window)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.expand();
                }
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
                KeyCode::Esc => app.collapse(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let height = chunks[0].height.saturating_sub(2) as usize;
    app.ensure_visible(height);

    let selection = app.doc.selection();
    let selected = Style::default().bg(Color::Yellow).fg(Color::Black);

    let text_lines: Vec<Line> = (app.scroll..(app.scroll + height).min(app.lines.len()))
        .map(|idx| {
            let gutter_style = if idx == app.cursor_line {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut spans = vec![Span::styled(format!("{:>4} ", idx + 1), gutter_style)];
            spans.extend(line_spans(app, idx, &selection, selected));
            Line::from(spans)
        })
        .collect();

    let title = format!(
        " {} - selection: {} ",
        app.path.display(),
        app.level_name()
    );
    let content =
        Paragraph::new(text_lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("Ctrl-A: Expand selection | "),
        Span::raw("Esc: Collapse"),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}

/// Splits one source line into plain and selection-highlighted spans.
fn line_spans<'a>(
    app: &'a App,
    idx: usize,
    selection: &std::ops::Range<usize>,
    selected: Style,
) -> Vec<Span<'a>> {
    let line = app.lines[idx].as_str();
    let start = app.doc.line_start(idx);
    let end = app.doc.line_end(idx);

    if selection.is_empty() || selection.end <= start || selection.start >= end {
        return vec![Span::raw(line)];
    }

    let from = selection.start.max(start) - start;
    let to = selection.end.min(end) - start;
    let mut spans = vec![];
    if from > 0 {
        spans.push(Span::raw(&line[..from]));
    }
    spans.push(Span::styled(&line[from..to], selected));
    if to < line.len() {
        spans.push(Span::raw(&line[to..]));
    }
    spans
}
