use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use laakarihaku::{
    build_vocabulary, Catalog, Entry, FacetCategory, FacetVocabulary, FilterEngine, FilterState,
    LabelAliases,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    },
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Filters,
    Results,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Search => Focus::Filters,
            Focus::Filters => Focus::Results,
            Focus::Results => Focus::Search,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Filters => Focus::Search,
            Focus::Results => Focus::Filters,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Focus::Search => "Haku",
            Focus::Filters => "Suodattimet",
            Focus::Results => "Tulokset",
        }
    }
}

/// One row of the filter sidebar: either a section title or a
/// toggleable facet value under it
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarRow {
    Section(FacetCategory),
    Value(FacetCategory, String),
}

pub struct App {
    pub catalog: Catalog,
    pub engine: FilterEngine,
    pub aliases: LabelAliases,
    pub filter: FilterState,
    pub results: Vec<Entry>,
    pub table_state: TableState,
    pub sidebar: Vec<SidebarRow>,
    pub sidebar_state: ListState,
    pub focus: Focus,
    pub show_booking: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let engine = FilterEngine::with_defaults();
        let aliases = LabelAliases::with_defaults();
        let vocabulary = build_vocabulary(catalog.entries());
        let sidebar = build_sidebar(&vocabulary, &engine);

        let filter = FilterState::new();
        let results = engine.run(&catalog, &filter);

        let mut table_state = TableState::default();
        if !results.is_empty() {
            table_state.select(Some(0));
        }

        let mut sidebar_state = ListState::default();
        let first_value = sidebar
            .iter()
            .position(|row| matches!(row, SidebarRow::Value(..)));
        sidebar_state.select(first_value);

        Self {
            catalog,
            engine,
            aliases,
            filter,
            results,
            table_state,
            sidebar,
            sidebar_state,
            focus: Focus::Results,
            show_booking: false,
        }
    }

    /// Re-run the filter and reset the result cursor to the first row
    pub fn refresh(&mut self) {
        self.results = self.engine.run(&self.catalog, &self.filter);

        if !self.results.is_empty() {
            self.table_state.select(Some(0));
        } else {
            self.table_state.select(None);
            self.show_booking = false;
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.filter.query.clone();
        query.push(c);
        self.filter = self.filter.with_query(&query);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.filter.query.clone();
        query.pop();
        self.filter = self.filter.with_query(&query);
        self.refresh();
    }

    /// Toggle the facet value under the sidebar cursor. Section titles
    /// are not toggleable, landing on one does nothing.
    pub fn toggle_at_cursor(&mut self) {
        let row = self
            .sidebar_state
            .selected()
            .and_then(|i| self.sidebar.get(i))
            .cloned();

        if let Some(SidebarRow::Value(facet, label)) = row {
            self.filter = self.filter.toggle_label(&self.aliases, facet, &label);
            self.refresh();
        }
    }

    pub fn clear_filters(&mut self) {
        self.filter = self.filter.clear_all();
        self.refresh();
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.table_state
            .selected()
            .and_then(|i| self.results.get(i))
    }

    pub fn active_filter_count(&self) -> usize {
        self.filter.selected.active_count()
    }

    pub fn toggle_booking(&mut self) {
        if self.selected_entry().is_some() {
            self.show_booking = !self.show_booking;
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn next(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                let next = i + 10;
                if next >= len {
                    len - 1
                } else {
                    next
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) => {
                if i < 10 {
                    0
                } else {
                    i - 10
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn sidebar_next(&mut self) {
        let len = self.sidebar.len();
        if len == 0 {
            return;
        }
        let i = match self.sidebar_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.sidebar_state.select(Some(i));
    }

    pub fn sidebar_previous(&mut self) {
        let len = self.sidebar.len();
        if len == 0 {
            return;
        }
        let i = match self.sidebar_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.sidebar_state.select(Some(i));
    }
}

fn build_sidebar(vocabulary: &FacetVocabulary, engine: &FilterEngine) -> Vec<SidebarRow> {
    let mut rows = Vec::new();

    for facet in FacetCategory::ALL {
        // Location options come from the region table, every other facet
        // offers the values the catalog actually carries
        let values: Vec<String> = match facet {
            FacetCategory::Location => engine
                .regions()
                .labels()
                .iter()
                .map(|label| label.to_string())
                .collect(),
            _ => vocabulary.values(facet).to_vec(),
        };

        if values.is_empty() {
            continue;
        }

        rows.push(SidebarRow::Section(facet));
        for value in values {
            rows.push(SidebarRow::Value(facet, value));
        }
    }

    rows
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
            match key.code {
                KeyCode::Esc => {
                    if app.show_booking {
                        app.show_booking = false;
                    } else {
                        return Ok(());
                    }
                }
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_focus();
                    } else {
                        app.next_focus();
                    }
                }
                KeyCode::BackTab => app.previous_focus(),

                // While the search box has focus, printable keys are input
                KeyCode::Backspace if app.focus == Focus::Search => app.pop_query_char(),
                KeyCode::Enter if app.focus == Focus::Search => app.focus = Focus::Results,
                KeyCode::Char(c) if app.focus == Focus::Search => app.push_query_char(c),

                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('c') => app.clear_filters(),
                KeyCode::Char(' ') if app.focus == Focus::Filters => app.toggle_at_cursor(),
                KeyCode::Enter if app.focus == Focus::Filters => app.toggle_at_cursor(),
                KeyCode::Enter if app.focus == Focus::Results => app.toggle_booking(),

                KeyCode::Down | KeyCode::Char('j') if app.focus == Focus::Filters => {
                    app.sidebar_next()
                }
                KeyCode::Up | KeyCode::Char('k') if app.focus == Focus::Filters => {
                    app.sidebar_previous()
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home if app.focus == Focus::Results => {
                    if !app.results.is_empty() {
                        app.table_state.select(Some(0));
                    }
                }
                KeyCode::End if app.focus == Focus::Results => {
                    if !app.results.is_empty() {
                        app.table_state.select(Some(app.results.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and result count
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Sidebar and results
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_search(f, chunks[1], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Filter sidebar
            Constraint::Min(0),     // Result table
        ])
        .split(chunks[2]);

    render_sidebar(f, content_chunks[0], app);

    if app.show_booking {
        let result_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Result table
                Constraint::Percentage(40), // Booking panel
            ])
            .split(content_chunks[1]);

        render_results(f, result_chunks[0], app);
        render_booking(f, result_chunks[1], app);
    } else {
        render_results(f, content_chunks[1], app);
    }

    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let sections = [Focus::Search, Focus::Filters, Focus::Results];

    let mut spans = vec![
        Span::styled(
            "🩺 Lääkärihaku",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
    ];

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }

        let style = if *section == app.focus {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(section.title(), style));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("{} lääkäriä löytyi", app.results.len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let border = if focused { Color::Yellow } else { Color::White };

    let line = if app.filter.query.is_empty() && !focused {
        Line::from(Span::styled(
            "Etsi lääkäriä tai palvelua...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::raw(app.filter.query.clone())];
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };

    let search = Paragraph::new(vec![line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" 🔍 Haku "),
    );

    f.render_widget(search, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Filters;
    let border = if focused { Color::Yellow } else { Color::White };

    let items: Vec<ListItem> = app
        .sidebar
        .iter()
        .map(|row| match row {
            SidebarRow::Section(facet) => ListItem::new(Line::from(Span::styled(
                facet.title().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))),
            SidebarRow::Value(facet, label) => {
                let active = app.filter.selected.contains(*facet, label);
                let mark = if active { "[x]" } else { "[ ]" };
                let style = if active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(
                    format!(" {} {}", mark, truncate(label, 21)),
                    style,
                )))
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Suodattimet "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.sidebar_state);
}

fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Results;
    let border = if focused { Color::Yellow } else { Color::White };

    if app.results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Ei tuloksia hakuehdoillasi",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Kokeile muuttaa hakusanaa tai poistaa suodattimia",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Tulokset "),
        );
        f.render_widget(empty, area);
        return;
    }

    let header_cells = [
        "Nimi",
        "Erikoisala",
        "Palveluntarjoaja",
        "Sijainti",
        "Saatavuus",
        "Kielet",
    ]
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.results.iter().map(|entry| {
        let cells = vec![
            Cell::from(truncate(&entry.name, 24)),
            Cell::from(truncate(&entry.specialty, 18)),
            Cell::from(truncate(&entry.chain, 16)),
            Cell::from(truncate(&entry.location, 22)),
            Cell::from(entry.availability.clone())
                .style(Style::default().fg(availability_color(&entry.availability))),
            Cell::from(entry.languages_joined()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(18),
            Constraint::Length(16),
            Constraint::Length(22),
            Constraint::Length(16),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Tulokset "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_booking(f: &mut Frame, area: Rect, app: &App) {
    let entry = match app.selected_entry() {
        Some(e) => e,
        None => {
            let no_selection = Paragraph::new("Ei valittua lääkäriä").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Varaa aika "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(chain_badge(&entry.chain)),
            Span::raw(" "),
            Span::styled(
                &entry.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Erikoisala: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(&entry.specialty),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Palveluntarjoaja: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(&entry.chain),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Sijainti: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(&entry.location),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Saatavuus: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                &entry.availability,
                Style::default().fg(availability_color(&entry.availability)),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Kielet: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(entry.languages_joined()),
        ]),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Demo: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("Siirryt {}:n ajanvaraukseen", entry.chain)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Paina Enter sulkeaksesi",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let booking_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Varaa aika "),
    );

    f.render_widget(booking_panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.table_state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.results.len();

    let mut status_spans = vec![Span::styled(
        format!(" Rivi: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    let active = app.active_filter_count();
    if active > 0 {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Suodattimia: {}", active),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" tyhjentää)"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Osio | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Liiku | "));
    status_spans.push(Span::styled(
        "Välilyönti",
        Style::default().fg(Color::Yellow),
    ));
    status_spans.push(Span::raw(" Valitse | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Varaa | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Lopeta"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn chain_badge(chain: &str) -> &'static str {
    match chain.trim().to_lowercase().as_str() {
        "mehiläinen" => "🟩",
        "terveystalo" => "🟦",
        "aava" => "🟪",
        "pihlajalinna" => "🟨",
        _ => "🏥",
    }
}

fn availability_color(availability: &str) -> Color {
    let lower = availability.to_lowercase();
    if lower.contains("tänään") {
        Color::Green
    } else if lower.contains("huomenna") {
        Color::Cyan
    } else if lower.contains("viikolla") {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

// Char-based so Finnish umlauts never get cut mid-character
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laakarihaku::sample_catalog;

    fn test_app() -> App {
        App::new(sample_catalog())
    }

    #[test]
    fn test_app_starts_with_full_catalog() {
        let app = test_app();

        assert_eq!(app.results.len(), 12);
        assert_eq!(app.table_state.selected(), Some(0));
        assert!(app.filter.is_neutral());
    }

    #[test]
    fn test_sidebar_has_a_section_per_facet() {
        let app = test_app();

        let sections: Vec<FacetCategory> = app
            .sidebar
            .iter()
            .filter_map(|row| match row {
                SidebarRow::Section(facet) => Some(*facet),
                SidebarRow::Value(..) => None,
            })
            .collect();

        assert_eq!(sections, FacetCategory::ALL.to_vec());
        // Cursor starts on the first toggleable value, not the title
        assert_eq!(app.sidebar_state.selected(), Some(1));
    }

    #[test]
    fn test_query_typing_narrows_results() {
        let mut app = test_app();

        for c in "kallio".chars() {
            app.push_query_char(c);
        }
        assert_eq!(app.results.len(), 2);
        assert!(app
            .results
            .iter()
            .all(|e| e.location.to_lowercase().contains("kallio")));

        for _ in 0.."kallio".len() {
            app.pop_query_char();
        }
        assert_eq!(app.results.len(), 12);
    }

    #[test]
    fn test_toggle_at_cursor_activates_the_value() {
        let mut app = test_app();

        // First value row is the first chain the catalog carries
        assert_eq!(
            app.sidebar.get(1),
            Some(&SidebarRow::Value(
                FacetCategory::Chain,
                "Mehiläinen".to_string()
            ))
        );

        app.toggle_at_cursor();
        assert_eq!(app.active_filter_count(), 1);
        assert!(app.results.iter().all(|e| e.chain == "Mehiläinen"));

        app.toggle_at_cursor();
        assert_eq!(app.active_filter_count(), 0);
        assert_eq!(app.results.len(), 12);
    }

    #[test]
    fn test_toggle_on_section_row_does_nothing() {
        let mut app = test_app();
        app.sidebar_state.select(Some(0));

        app.toggle_at_cursor();

        assert!(app.filter.is_neutral());
        assert_eq!(app.results.len(), 12);
    }

    #[test]
    fn test_clear_filters_restores_everything() {
        let mut app = test_app();
        app.push_query_char('x');
        app.toggle_at_cursor();

        app.clear_filters();

        assert!(app.filter.is_neutral());
        assert_eq!(app.results.len(), 12);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_result_navigation_wraps_around() {
        let mut app = test_app();

        app.previous();
        assert_eq!(app.table_state.selected(), Some(11));

        app.next();
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_results_drop_selection_and_booking() {
        let mut app = test_app();
        app.toggle_booking();
        assert!(app.show_booking);

        for c in "zzz".chars() {
            app.push_query_char(c);
        }

        assert!(app.results.is_empty());
        assert_eq!(app.table_state.selected(), None);
        assert!(!app.show_booking);
        assert!(app.selected_entry().is_none());
    }

    #[test]
    fn test_booking_needs_a_selected_row() {
        let mut app = App::new(Catalog::new());

        app.toggle_booking();

        assert!(!app.show_booking);
    }

    #[test]
    fn test_truncate_is_umlaut_safe() {
        assert_eq!(truncate("Lääkäri", 10), "Lääkäri");
        assert_eq!(truncate("Lääkärikeskus Mehiläinen", 10), "Lääkäri...");
    }
}
