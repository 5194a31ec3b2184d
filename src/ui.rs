use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use numerology::{
    breakdown, validation, Calculator, CompatibilityReport, InputValidator, NumerologyNumber,
    Reading,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io;

const FIELD_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Reading,
    Compatibility,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Reading => Page::Compatibility,
            Page::Compatibility => Page::Reading,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Reading => Page::Compatibility,
            Page::Compatibility => Page::Reading,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Reading => "Reading",
            Page::Compatibility => "Compatibility",
        }
    }

    /// Input field labels shown on this page
    pub fn fields(&self) -> [&'static str; FIELD_COUNT] {
        match self {
            Page::Reading => ["Name (Latin letters, e.g. TARO YAMADA)", "Birth date (YYYY-MM-DD)"],
            Page::Compatibility => ["First birth date (YYYY-MM-DD)", "Second birth date (YYYY-MM-DD)"],
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    None,
    Reading(Reading),
    Compatibility(CompatibilityReport),
    Invalid(String),
}

pub struct App {
    pub current_page: Page,
    /// [name, birthdate] on the reading page
    pub reading_inputs: [String; FIELD_COUNT],
    /// [first, second] on the compatibility page
    pub pair_inputs: [String; FIELD_COUNT],
    pub focused: usize,
    pub outcome: Outcome,
    validator: InputValidator,
    calculator: Calculator,
}

impl App {
    pub fn new(validator: InputValidator, calculator: Calculator) -> Self {
        Self {
            current_page: Page::Reading,
            reading_inputs: [String::new(), String::new()],
            pair_inputs: [String::new(), String::new()],
            focused: 0,
            outcome: Outcome::None,
            validator,
            calculator,
        }
    }

    fn inputs_mut(&mut self) -> &mut [String; FIELD_COUNT] {
        match self.current_page {
            Page::Reading => &mut self.reading_inputs,
            Page::Compatibility => &mut self.pair_inputs,
        }
    }

    pub fn inputs(&self) -> &[String; FIELD_COUNT] {
        match self.current_page {
            Page::Reading => &self.reading_inputs,
            Page::Compatibility => &self.pair_inputs,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.focused = 0;
        self.outcome = Outcome::None;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.focused = 0;
        self.outcome = Outcome::None;
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    pub fn previous_field(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn push_char(&mut self, c: char) {
        let focused = self.focused;
        self.inputs_mut()[focused].push(c);
    }

    pub fn pop_char(&mut self) {
        let focused = self.focused;
        self.inputs_mut()[focused].pop();
    }

    pub fn clear_inputs(&mut self) {
        *self.inputs_mut() = [String::new(), String::new()];
        self.focused = 0;
        self.outcome = Outcome::None;
    }

    /// Apply one key press. Returns true when the UI should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('l') if ctrl => self.clear_inputs(),
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_page();
                } else {
                    self.next_page();
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Down => self.next_field(),
            KeyCode::Up => self.previous_field(),
            KeyCode::Backspace => self.pop_char(),
            // Ctrl/Alt chords are shortcuts, never text
            KeyCode::Char(c) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => self.push_char(c),
            _ => {}
        }

        false
    }

    /// Validate the current page's inputs and compute its result
    pub fn submit(&mut self) {
        self.outcome = match self.current_page {
            Page::Reading => {
                let [name, date] = &self.reading_inputs;
                match self.validator.person(name, date) {
                    Ok((name, date)) => Outcome::Reading(Reading::compute(&self.calculator, &name, date)),
                    Err(errors) => Outcome::Invalid(validation::describe(&errors)),
                }
            }
            Page::Compatibility => {
                let [first, second] = &self.pair_inputs;
                match self.validator.pair(first, second) {
                    Ok((first, second)) => {
                        Outcome::Compatibility(CompatibilityReport::compute(&self.calculator, first, second))
                    }
                    Err(errors) => Outcome::Invalid(validation::describe(&errors)),
                }
            }
        };
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Input form
            Constraint::Percentage(55), // Results
        ])
        .split(chunks[1]);

    render_form(f, content_chunks[0], app);
    render_results(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Reading, Page::Compatibility];

    let mut tab_spans = vec![Span::styled(
        "🔢 Numerology  ",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    for (i, label) in app.current_page.fields().iter().enumerate() {
        let focused = i == app.focused;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut text = app.inputs()[i].clone();
        if focused {
            text.push('▏');
        }

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(*label)
                .border_style(border_style),
        );
        f.render_widget(input, rows[i]);
    }
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("🔮 Result")
        .border_style(Style::default().fg(Color::Cyan));

    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    match &app.outcome {
        Outcome::None => {
            let hint = Paragraph::new("Fill in the form and press Enter")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(hint, area);
        }
        Outcome::Invalid(message) => {
            let warning = Paragraph::new(format!("⚠️  {}", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(warning, area);
        }
        Outcome::Reading(reading) => {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(7), Constraint::Min(0)])
                .split(area);

            let rows = reading.rows().into_iter().map(|(label, value)| {
                Row::new(vec![
                    Cell::from(label),
                    Cell::from(value.to_string()).style(number_style(value)),
                ])
            });
            let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(4)])
                .header(Row::new(vec!["Number", "Value"]).style(header_style))
                .block(block);
            f.render_widget(table, sections[0]);

            let letters: Vec<Span> = breakdown(&reading.name)
                .into_iter()
                .map(|l| {
                    let style = if l.vowel {
                        Style::default().fg(Color::Magenta)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!("{}={} ", l.letter, l.value), style)
                })
                .collect();
            let letter_panel = Paragraph::new(Line::from(letters))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Letters (vowels in magenta)"));
            f.render_widget(letter_panel, sections[1]);
        }
        Outcome::Compatibility(report) => {
            let rows = report.rows().into_iter().map(|(label, value)| {
                Row::new(vec![Cell::from(label), Cell::from(value)])
            });
            let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(10)])
                .header(Row::new(vec!["", "Value"]).style(header_style))
                .block(block);
            f.render_widget(table, area);
        }
    }
}

fn number_style(value: u32) -> Style {
    if NumerologyNumber::new(value).map_or(false, |n| n.is_master()) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let status_text = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", app.current_page.title()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw("  Tab: switch page  ↑/↓: switch field  Enter: calculate  Ctrl-L: clear  Esc: quit"),
    ])];

    let status_bar = Paragraph::new(status_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(status_bar, area);
}
