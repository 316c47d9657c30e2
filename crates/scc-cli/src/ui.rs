use std::io;
use std::sync::mpsc;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{
    Block, Borders, Clear, Gauge, LineGauge, List, ListItem, ListState, Paragraph, Sparkline,
    Tabs, Wrap,
};
use ratatui::Terminal;

use scc_core::actions::{ConsoleAction, UserAction, KEY_HINTS};
use scc_core::config::{Config, RelayConfig};
use scc_core::contact::{ContactStatus, CONTACT_FIELDS};
use scc_core::content::{
    linked_indices, network_layout, proficiency_label, Profile, FEATURED_PROJECTS,
    NETWORK_PROJECTS, SKILL_CATEGORIES, SYSTEM_CARDS,
};
use scc_core::notifications::NotificationKind;
use scc_core::reducer::ConsoleEffect;
use scc_core::state::{ConsoleOverlay, ConsoleState, DashboardView, Section, SECTIONS};
use scc_core::store::ConsoleStore;
use scc_core::telemetry::Severity;
use scc_core::terminal::{TerminalEntry, TerminalOutput, Tone};
use scc_exec::{delivery_for, open_url, spawn_delivery, DeliveryReport};

const FRAME_POLL: Duration = Duration::from_millis(16);

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableBracketedPaste,
            crossterm::cursor::Show
        );
    }
}

pub fn run(
    state: ConsoleState,
    config: &Config,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut store = ConsoleStore::new(state, seed, Instant::now());
    let result = run_app(&mut terminal, &mut store, &config.contact.relay);
    store.dispose();
    result.map_err(|e| e.into())
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    success: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    selected_bg: Color,
}

fn palette() -> UiPalette {
    UiPalette {
        accent: Color::Green,
        accent_alt: Color::Cyan,
        success: Color::LightGreen,
        warning: Color::Yellow,
        danger: Color::LightRed,
        muted: Color::DarkGray,
        border: Color::Rgb(0, 110, 60),
        selected_bg: Color::Rgb(8, 40, 20),
    }
}

fn severity_color(severity: Severity, palette: UiPalette) -> Color {
    match severity {
        Severity::Nominal => palette.success,
        Severity::Elevated => palette.warning,
        Severity::Critical => palette.danger,
    }
}

fn kind_color(kind: NotificationKind, palette: UiPalette) -> Color {
    match kind {
        NotificationKind::Info => palette.accent_alt,
        NotificationKind::Warning => palette.warning,
        NotificationKind::Error => palette.danger,
        NotificationKind::Success => palette.success,
    }
}

fn tone_style(tone: Tone, palette: UiPalette) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Accent => Style::default().fg(palette.accent),
        Tone::Heading => Style::default()
            .fg(palette.accent_alt)
            .add_modifier(Modifier::BOLD),
        Tone::Muted => Style::default().fg(palette.muted),
    }
}

fn panel(title: &str, palette: UiPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
}

enum KeyHandlerResult {
    Continue(Vec<ConsoleEffect>),
    Exit,
}

fn user(store: &mut ConsoleStore, action: UserAction) -> Vec<ConsoleEffect> {
    store.dispatch(ConsoleAction::User(action))
}

fn handle_notification_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
            user(store, UserAction::CloseOverlay)
        }
        KeyCode::Up | KeyCode::Char('k') => user(store, UserAction::OverlayMoveUp),
        KeyCode::Down | KeyCode::Char('j') => user(store, UserAction::OverlayMoveDown),
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('x') => {
            user(store, UserAction::DismissSelectedNotification)
        }
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_help_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            user(store, UserAction::CloseOverlay)
        }
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_terminal_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Tab => user(store, UserAction::NextSection),
        KeyCode::BackTab => user(store, UserAction::PrevSection),
        KeyCode::Enter => user(store, UserAction::TerminalSubmit),
        KeyCode::Backspace => user(store, UserAction::TerminalBackspace),
        KeyCode::Up | KeyCode::PageUp => user(store, UserAction::TerminalScrollUp),
        KeyCode::Down | KeyCode::PageDown => user(store, UserAction::TerminalScrollDown),
        KeyCode::Char(c) => user(store, UserAction::TerminalInput(c)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_contact_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return KeyHandlerResult::Continue(user(store, UserAction::ContactSubmit));
    }
    let effects = match key.code {
        KeyCode::Tab => user(store, UserAction::NextSection),
        KeyCode::BackTab => user(store, UserAction::PrevSection),
        KeyCode::Up => user(store, UserAction::ContactFocusPrev),
        KeyCode::Down => user(store, UserAction::ContactFocusNext),
        KeyCode::Enter => user(store, UserAction::ContactNewline),
        KeyCode::Backspace => user(store, UserAction::ContactBackspace),
        KeyCode::Esc => user(store, UserAction::DismissContactStatus),
        KeyCode::Char(c) => user(store, UserAction::ContactInput(c)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_section_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> Vec<ConsoleEffect> {
    let action = match (store.state().active_section(), key.code) {
        (Section::Dashboard, KeyCode::Up | KeyCode::Char('k')) => UserAction::DashboardMoveUp,
        (Section::Dashboard, KeyCode::Down | KeyCode::Char('j')) => UserAction::DashboardMoveDown,
        (Section::Dashboard, KeyCode::Enter) => UserAction::DashboardActivate,
        (Section::Skills, KeyCode::Left | KeyCode::Char('h')) => UserAction::SkillsPrevCategory,
        (Section::Skills, KeyCode::Right | KeyCode::Char('l')) => UserAction::SkillsNextCategory,
        (Section::Skills, KeyCode::Up | KeyCode::Char('k')) => UserAction::SkillsMoveUp,
        (Section::Skills, KeyCode::Down | KeyCode::Char('j')) => UserAction::SkillsMoveDown,
        (Section::Skills, KeyCode::Enter) => UserAction::SelectSkill,
        (Section::Skills, KeyCode::Esc) => UserAction::ClearSkillSelection,
        (Section::Projects, KeyCode::Left | KeyCode::Up) => UserAction::NetworkSelectPrev,
        (Section::Projects, KeyCode::Right | KeyCode::Down) => UserAction::NetworkSelectNext,
        (Section::Projects, KeyCode::Esc) => UserAction::NetworkClearSelection,
        (Section::ProjectsList, KeyCode::Up | KeyCode::Char('k')) => UserAction::ProjectsMoveUp,
        (Section::ProjectsList, KeyCode::Down | KeyCode::Char('j')) => {
            UserAction::ProjectsMoveDown
        }
        (Section::ProjectsList, KeyCode::Enter) => UserAction::OpenLiveDemo,
        (Section::ProjectsList, KeyCode::Char('d')) => UserAction::ViewProjectDetails,
        _ => return Vec::new(),
    };
    user(store, action)
}

fn handle_global_keys(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    let effects = match key.code {
        KeyCode::Char('q') => user(store, UserAction::Quit),
        KeyCode::Tab => user(store, UserAction::NextSection),
        KeyCode::BackTab => user(store, UserAction::PrevSection),
        KeyCode::Char('n') => user(store, UserAction::ToggleNotifications),
        KeyCode::Char('?') => user(store, UserAction::ToggleHelp),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            match SECTIONS.get(index) {
                Some(section) => user(store, UserAction::Navigate(*section)),
                None => Vec::new(),
            }
        }
        _ => handle_section_keys(key, store),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_key_event(key: event::KeyEvent, store: &mut ConsoleStore) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }

    let state = store.state();
    let online = state.boot.is_online();
    let overlay = state.overlay;
    let section = state.active_section();
    if !online {
        let effects = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => user(store, UserAction::Quit),
            _ => Vec::new(),
        };
        return KeyHandlerResult::Continue(effects);
    }

    match overlay {
        ConsoleOverlay::Notifications { .. } => handle_notification_keys(key, store),
        ConsoleOverlay::Help => handle_help_keys(key, store),
        ConsoleOverlay::None => match section {
            Section::Terminal => handle_terminal_keys(key, store),
            Section::Contact => handle_contact_keys(key, store),
            _ => handle_global_keys(key, store),
        },
    }
}

fn handle_paste(text: String, store: &mut ConsoleStore) -> Vec<ConsoleEffect> {
    if !store.state().text_input_focused() {
        return Vec::new();
    }
    match store.state().active_section() {
        Section::Terminal => user(store, UserAction::TerminalPaste(text)),
        Section::Contact => user(store, UserAction::ContactPaste(text)),
        _ => Vec::new(),
    }
}

fn execute_effects(
    effects: Vec<ConsoleEffect>,
    store: &mut ConsoleStore,
    relay: &RelayConfig,
    tx: &mpsc::Sender<DeliveryReport>,
) -> bool {
    for effect in effects {
        match effect {
            ConsoleEffect::RequestFrame => {}
            ConsoleEffect::OpenUrl(url) => {
                if let Err(err) = open_url(&url) {
                    log::warn!("event=url_open_failed url={url} error={err}");
                    store.add_notification(format!("Could not open {url}"), NotificationKind::Error);
                }
            }
            ConsoleEffect::SubmitContact {
                submission_id,
                message,
                mode,
                recipient,
            } => {
                log::info!(
                    "event=contact_submitted submission_id={submission_id} mode={}",
                    mode.label()
                );
                spawn_delivery(
                    delivery_for(mode, relay),
                    submission_id,
                    message,
                    recipient,
                    tx.clone(),
                );
            }
            ConsoleEffect::Mount(_)
            | ConsoleEffect::Unmount(_)
            | ConsoleEffect::CommandCenterReady => {}
            ConsoleEffect::Quit => return true,
        }
    }
    false
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    store: &mut ConsoleStore,
    relay: &RelayConfig,
) -> io::Result<()> {
    let (tx, rx) = mpsc::channel::<DeliveryReport>();
    let palette = palette();
    let mut last_section = store.state().active_section();

    loop {
        while let Ok(report) = rx.try_recv() {
            store.resolve_contact(report.submission_id, report.outcome);
        }

        let effects = store.advance(Instant::now());
        if execute_effects(effects, store, relay, &tx) {
            return Ok(());
        }

        let section = store.state().active_section();
        if section != last_section {
            log::info!(
                "event=section_changed from={} to={}",
                last_section.id(),
                section.id()
            );
            last_section = section;
        }

        terminal.draw(|f| ui(f, store.state(), palette))?;

        let timeout = store
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(FRAME_POLL, |until| until.min(FRAME_POLL));
        if event::poll(timeout)? {
            let effects = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key, store) {
                        KeyHandlerResult::Continue(effects) => effects,
                        KeyHandlerResult::Exit => return Ok(()),
                    }
                }
                Event::Paste(text) => handle_paste(text, store),
                _ => Vec::new(),
            };
            if execute_effects(effects, store, relay, &tx) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut ratatui::Frame, state: &ConsoleState, palette: UiPalette) {
    if !state.boot.is_online() {
        render_boot(f, f.area(), state, palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(f.area());
    render_header(f, chunks[0], state, palette);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(chunks[1]);
    render_sidebar(f, body[0], state, palette);

    let main = body[1];
    match state.active_section() {
        Section::Dashboard => render_dashboard(f, main, state, palette),
        Section::Skills => render_skills(f, main, state, palette),
        Section::Projects => render_network(f, main, state, palette),
        Section::ProjectsList => render_projects_list(f, main, state, palette),
        Section::Terminal => render_terminal(f, main, state, palette),
        Section::Contact => render_contact(f, main, state, palette),
    }
    render_footer(f, chunks[2], state, palette);

    match state.overlay {
        ConsoleOverlay::None => {}
        ConsoleOverlay::Notifications { .. } => render_notifications(
            f,
            centered_rect(60, 50, f.area()),
            state,
            state.selected_notification_index(),
            palette,
        ),
        ConsoleOverlay::Help => render_help(f, centered_rect(50, 60, f.area()), palette),
    }
}

fn render_boot(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let area = centered_rect(70, 70, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = state
        .boot
        .visible_messages()
        .iter()
        .map(|message| {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(palette.accent_alt)),
                Span::styled(*message, Style::default().fg(palette.accent)),
            ])
        })
        .collect();
    let log = Paragraph::new(lines).block(panel("SYSTEM BOOT", palette));
    f.render_widget(log, rows[0]);

    let progress = state.boot.progress();
    let gauge = Gauge::default()
        .block(panel("Progress", palette))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(u16::from(progress))
        .label(format!("{progress}%"));
    f.render_widget(gauge, rows[1]);
}

fn render_header(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let line = Line::from(vec![
        Span::styled(
            "SERVER CONTROL CENTER",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            state.header.clock.format("%Y-%m-%d %H:%M:%S").to_string(),
            Style::default().fg(palette.accent_alt),
        ),
        Span::raw("   "),
        Span::styled("● ONLINE", Style::default().fg(palette.success)),
        Span::raw("   "),
        Span::styled(
            format!("alerts: {}", state.notifications.len()),
            Style::default().fg(palette.warning),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SECTIONS.len() as u16 + 2),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    let items: Vec<ListItem> = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let active = *section == state.active_section();
            let marker = if active { "▶ " } else { "  " };
            let style = if active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), Style::default().fg(palette.muted)),
                Span::styled(format!("{marker}{}", section.label()), style),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Navigation", palette)), rows[0]);

    let gauge_block = panel("System Status", palette);
    let inner = gauge_block.inner(rows[1]);
    f.render_widget(gauge_block, rows[1]);
    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(inner);
    for (gauge, row) in state.telemetry.gauges().iter().zip(gauge_rows.iter()) {
        let color = severity_color(gauge.severity(), palette);
        let widget = Gauge::default()
            .block(Block::default().title(gauge.kind.label()))
            .gauge_style(Style::default().fg(color))
            .percent(gauge.percent())
            .label(format!("{}%", gauge.percent()));
        f.render_widget(widget, *row);
    }

    let cpu = state
        .telemetry
        .gauge(scc_core::telemetry::GaugeKind::Cpu)
        .history();
    let spark = Sparkline::default()
        .block(panel("CPU Trend", palette))
        .data(&cpu)
        .max(100)
        .style(Style::default().fg(palette.accent_alt));
    f.render_widget(spark, rows[2]);
}

fn render_footer(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let hint = match state.active_section() {
        Section::Dashboard => "↑/↓ select  Enter open",
        Section::Skills => "←/→ category  ↑/↓ skill  Enter select  Esc clear",
        Section::Projects => "←/→ cycle nodes  Esc deselect",
        Section::ProjectsList => "↑/↓ select  Enter live demo  d details",
        Section::Terminal => "type a command  Enter run  ↑/↓ scroll",
        Section::Contact => "↑/↓ field  Ctrl-S send  Esc dismiss",
    };
    let global = if state.active_section().captures_text() {
        "Tab sections  Ctrl-C quit"
    } else {
        "Tab sections  1-6 jump  n alerts  ? help  q quit"
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hint, Style::default().fg(palette.accent_alt)),
        Span::raw("  │  "),
        Span::styled(global, Style::default().fg(palette.muted)),
    ]));
    f.render_widget(footer, area);
}

fn render_dashboard(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    for (row_index, cards) in SYSTEM_CARDS.chunks(3).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[row_index]);
        for (card, column) in cards.iter().zip(columns.iter()) {
            let body = vec![
                Line::from(Span::styled(
                    format!("● {}", card.status.label()),
                    Style::default().fg(palette.success),
                )),
                Line::from(Span::styled(
                    card.description,
                    Style::default().fg(palette.muted),
                )),
            ];
            let widget = Paragraph::new(body)
                .block(panel(card.title, palette))
                .wrap(Wrap { trim: true });
            f.render_widget(widget, *column);
        }
    }

    let mut items: Vec<ListItem> = FEATURED_PROJECTS
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        project.name,
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(project.live_host, Style::default().fg(palette.accent_alt)),
                ]),
                Line::from(Span::styled(
                    project.summary,
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();
    items.push(ListItem::new(Line::from(Span::styled(
        "View all projects →",
        Style::default().fg(palette.warning),
    ))));

    let mut list_state = ListState::default();
    list_state.select(Some(state.dashboard.cursor.min(DashboardView::VIEW_ALL)));
    let list = List::new(items)
        .block(panel("Featured Projects", palette))
        .highlight_style(Style::default().bg(palette.selected_bg))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, rows[2], &mut list_state);
}

fn render_skills(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = SKILL_CATEGORIES
        .iter()
        .map(|category| Line::from(category.name))
        .collect();
    let tabs = Tabs::new(titles)
        .block(panel("Skills Matrix", palette))
        .select(state.skills.category)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    let Some(category) = SKILL_CATEGORIES.get(state.skills.category).copied() else {
        return;
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let bars_block = panel(category.name, palette);
    let inner = bars_block.inner(columns[0]);
    f.render_widget(bars_block, columns[0]);
    let bar_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 5])
        .split(inner);
    for (index, (skill, row)) in category.skills.iter().zip(bar_rows.iter()).enumerate() {
        let focused = index == state.skills.cursor;
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let gauge = LineGauge::default()
            .label(Span::styled(
                format!("{}{:<16}", if focused { "▶ " } else { "  " }, skill.name),
                label_style,
            ))
            .filled_style(Style::default().fg(palette.accent))
            .unfilled_style(Style::default().fg(palette.muted))
            .ratio(f64::from(skill.level) / 100.0);
        f.render_widget(gauge, *row);
    }

    let detail = match state.skills.selected.and_then(|(category, skill)| {
        SKILL_CATEGORIES
            .get(category)
            .and_then(|category| category.skills.get(skill).copied())
    }) {
        Some(skill) => vec![
            Line::from(Span::styled(
                skill.name,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Proficiency: {}%", skill.level)),
            Line::from(format!("Experience:  {} years", skill.years)),
            Line::from(format!("Level:       {}", proficiency_label(skill.level))),
        ],
        None => vec![Line::from(Span::styled(
            "Press Enter on a skill to inspect it.",
            Style::default().fg(palette.muted),
        ))],
    };
    f.render_widget(
        Paragraph::new(detail)
            .block(panel("Skill Details", palette))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

fn render_network(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let positions = network_layout(1.0);
    let selected = state.network.selected;
    let highlighted: Vec<usize> = selected.map(linked_indices).unwrap_or_default();

    let canvas = Canvas::default()
        .block(panel("Projects Network", palette))
        .marker(Marker::Braille)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.4, 1.4])
        .paint(|ctx| {
            for (from, &(x1, y1)) in positions.iter().enumerate() {
                for to in linked_indices(from) {
                    let Some(&(x2, y2)) = positions.get(to) else {
                        continue;
                    };
                    let lit = selected == Some(from) || selected == Some(to);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: if lit { palette.accent } else { palette.muted },
                    });
                }
            }
            ctx.layer();
            for (index, &(x, y)) in positions.iter().enumerate() {
                let color = if selected == Some(index) {
                    palette.warning
                } else if highlighted.contains(&index) {
                    palette.accent_alt
                } else {
                    palette.accent
                };
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: 0.08,
                    color,
                });
                if let Some(project) = NETWORK_PROJECTS.get(index) {
                    ctx.print(
                        x + 0.12,
                        y,
                        Span::styled(project.name, Style::default().fg(color)),
                    );
                }
            }
        });
    f.render_widget(canvas, columns[0]);

    let detail = match selected.and_then(|index| NETWORK_PROJECTS.get(index).copied()) {
        Some(project) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    project.name,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    project.kind.label(),
                    Style::default().fg(palette.accent_alt),
                )),
                Line::from(""),
                Line::from(project.description),
                Line::from(""),
                Line::from(format!("Stack: {}", project.technologies.join(", "))),
                Line::from(""),
                Line::from(Span::styled(
                    "Connected projects:",
                    Style::default().fg(palette.muted),
                )),
            ];
            lines.extend(highlighted.iter().filter_map(|index| {
                NETWORK_PROJECTS
                    .get(*index)
                    .map(|linked| Line::from(format!("  • {}", linked.name)))
            }));
            if state.network.auto_selected {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "(auto-selected)",
                    Style::default().fg(palette.muted),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Scanning network... use ←/→ to inspect a node.",
            Style::default().fg(palette.muted),
        ))],
    };
    f.render_widget(
        Paragraph::new(detail)
            .block(panel("Node Details", palette))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

fn render_projects_list(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    palette: UiPalette,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = FEATURED_PROJECTS
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    project.name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(project.kind.label(), Style::default().fg(palette.accent_alt)),
                    Span::raw(" · "),
                    Span::styled(project.status.label(), Style::default().fg(palette.success)),
                ]),
            ])
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(state.featured_under_cursor());
    let list = List::new(items)
        .block(panel("Projects List", palette))
        .highlight_style(Style::default().bg(palette.selected_bg))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, columns[0], &mut list_state);

    let Some(project) = state
        .featured_under_cursor()
        .and_then(|index| FEATURED_PROJECTS.get(index).copied())
    else {
        return;
    };
    let expanded = state.projects_list.details == state.featured_under_cursor();
    let mut lines = vec![
        Line::from(Span::styled(
            project.name,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.live_url(),
            Style::default().fg(palette.accent_alt),
        )),
        Line::from(""),
        Line::from(if expanded {
            project.description
        } else {
            project.summary
        }),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        "Technologies:",
        Style::default().fg(palette.muted),
    )));
    lines.extend(
        project
            .technologies
            .iter()
            .map(|tech| Line::from(format!("  • {tech}"))),
    );
    f.render_widget(
        Paragraph::new(lines)
            .block(panel("Project", palette))
            .wrap(Wrap { trim: true }),
        columns[1],
    );
}

fn prompt(profile: &Profile) -> String {
    format!("{}@portfolio:~$ ", profile.shell_user)
}

fn entry_lines(entry: &TerminalEntry, profile: &Profile, palette: UiPalette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(input) = &entry.input {
        lines.push(Line::from(vec![
            Span::styled(prompt(profile), Style::default().fg(palette.accent)),
            Span::raw(input.clone()),
        ]));
    }
    let Some(output) = &entry.output else {
        return lines;
    };
    let base = if entry.is_error {
        Style::default().fg(palette.danger)
    } else if entry.is_system {
        Style::default().fg(palette.muted)
    } else {
        Style::default()
    };
    match output {
        TerminalOutput::Text(text) => {
            lines.push(Line::from(Span::styled(text.clone(), base)));
        }
        TerminalOutput::Block(block) => {
            lines.extend(block.iter().map(|line| {
                Line::from(
                    line.segments
                        .iter()
                        .map(|segment| {
                            Span::styled(
                                segment.text.clone(),
                                base.patch(tone_style(segment.tone, palette)),
                            )
                        })
                        .collect::<Vec<_>>(),
                )
            }));
        }
    }
    lines
}

fn render_terminal(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let block = panel("Terminal", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let entries = state.transcript.entries();
    let visible = entries.len().saturating_sub(state.terminal.scroll_back);
    let lines: Vec<Line> = entries[..visible]
        .iter()
        .flat_map(|entry| entry_lines(entry, &state.profile, palette))
        .collect();
    let height = rows[0].height as usize;
    let offset = lines.len().saturating_sub(height) as u16;
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), rows[0]);

    let input = Line::from(vec![
        Span::styled(prompt(&state.profile), Style::default().fg(palette.accent)),
        Span::raw(state.terminal.input.clone()),
        Span::styled("█", Style::default().fg(palette.accent)),
    ]);
    f.render_widget(Paragraph::new(input), rows[1]);
}

fn render_contact(f: &mut ratatui::Frame, area: Rect, state: &ConsoleState, palette: UiPalette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let profile = &state.profile;
    let info = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(format!("Email:    {}", profile.email)),
        Line::from(format!("Phone:    {}", profile.phone)),
        Line::from(format!("Location: {}", profile.location)),
        Line::from(format!("GitHub:   {}", Profile::display_link(&profile.github_url))),
        Line::from(format!(
            "LinkedIn: {}",
            Profile::display_link(&profile.linkedin_url)
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Delivery: {}", state.delivery.label()),
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(info)
            .block(panel("Contact Information", palette))
            .wrap(Wrap { trim: true }),
        columns[0],
    );

    let form_block = panel("Send a Message", palette);
    let inner = form_block.inner(columns[1]);
    f.render_widget(form_block, columns[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(inner);

    let contact = &state.contact;
    for (field, row) in CONTACT_FIELDS.iter().zip(rows.iter()) {
        let focused = contact.focus == *field;
        let border = if focused { palette.accent } else { palette.muted };
        let mut text = contact.field(*field).to_string();
        if focused {
            text.push('█');
        }
        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(field.label()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(widget, *row);
    }

    let status = match &contact.status {
        ContactStatus::Idle => Line::from(Span::styled(
            "Ctrl-S to send",
            Style::default().fg(palette.muted),
        )),
        ContactStatus::Sending { .. } => Line::from(Span::styled(
            "Sending...",
            Style::default().fg(palette.warning),
        )),
        ContactStatus::Sent => Line::from(Span::styled(
            "Message sent successfully! I'll get back to you soon.",
            Style::default().fg(palette.success),
        )),
        ContactStatus::Failed { reason } => Line::from(vec![
            Span::styled(reason.clone(), Style::default().fg(palette.danger)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(palette.muted)),
        ]),
    };
    f.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), rows[4]);
}

fn render_notifications(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ConsoleState,
    selected: Option<usize>,
    palette: UiPalette,
) {
    f.render_widget(Clear, area);
    let items: Vec<ListItem> = state
        .notifications
        .iter()
        .map(|notification| {
            let color = kind_color(notification.kind, palette);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", notification.kind.icon()),
                    Style::default().fg(color),
                ),
                Span::styled(
                    notification.created_at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(palette.muted),
                ),
                Span::raw(notification.message.clone()),
            ]))
        })
        .collect();

    let block = panel("Notifications", palette).title_bottom(Line::from(" x dismiss · Esc close "));
    if items.is_empty() {
        let empty = Paragraph::new("No notifications")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(selected);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.selected_bg))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_help(f: &mut ratatui::Frame, area: Rect, palette: UiPalette) {
    f.render_widget(Clear, area);
    let lines: Vec<Line> = KEY_HINTS
        .iter()
        .map(|hint| {
            Line::from(vec![
                Span::styled(
                    format!("{:<18}", hint.keys),
                    Style::default().fg(palette.accent),
                ),
                Span::raw(hint.description),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(panel("Keys", palette)),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use scc_core::config::Config;

    use super::*;

    fn online_store() -> ConsoleStore {
        let mut config = Config::default();
        config.boot.skip = true;
        ConsoleStore::new(ConsoleState::new(&config), Some(1), Instant::now())
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn draw(state: &ConsoleState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| ui(f, state, palette())).unwrap();
        buffer_text(&terminal)
    }

    fn key(code: KeyCode) -> event::KeyEvent {
        event::KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn every_section_renders() {
        let mut store = online_store();
        let markers = [
            (Section::Dashboard, "Featured Projects"),
            (Section::Skills, "Skill Details"),
            (Section::Projects, "Node Details"),
            (Section::ProjectsList, "Technologies:"),
            (Section::Terminal, "@portfolio:~$"),
            (Section::Contact, "Send a Message"),
        ];
        for (section, marker) in markers {
            store.set_active_section(section.id());
            let text = draw(store.state());
            assert!(text.contains(marker), "{} view missing {marker}", section.id());
        }
    }

    #[test]
    fn boot_screen_shows_progress() {
        let store = ConsoleStore::new(
            ConsoleState::new(&Config::default()),
            Some(1),
            Instant::now(),
        );
        let booting = draw(store.state());
        assert!(booting.contains("SYSTEM BOOT"));
        assert!(!booting.contains("ONLINE"));

        assert!(draw(online_store().state()).contains("● ONLINE"));
    }

    #[test]
    fn digit_keys_jump_between_sections() {
        let mut store = online_store();
        handle_key_event(key(KeyCode::Char('5')), &mut store);
        assert_eq!(store.state().active_section(), Section::Terminal);

        handle_key_event(key(KeyCode::Char('h')), &mut store);
        handle_key_event(key(KeyCode::Char('i')), &mut store);
        assert_eq!(store.state().terminal.input, "hi");

        handle_key_event(key(KeyCode::Tab), &mut store);
        assert_eq!(store.state().active_section(), Section::Contact);
    }

    #[test]
    fn q_quits_outside_text_views_only() {
        let mut store = online_store();
        match handle_key_event(key(KeyCode::Char('q')), &mut store) {
            KeyHandlerResult::Continue(effects) => assert_eq!(effects, vec![ConsoleEffect::Quit]),
            KeyHandlerResult::Exit => panic!("q should quit through the reducer"),
        }
        store.set_active_section("terminal");
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('q')), &mut store),
            KeyHandlerResult::Continue(_)
        ));
        assert_eq!(store.state().terminal.input, "q");
    }

    #[test]
    fn notifications_panel_lists_queue() {
        let mut store = online_store();
        handle_key_event(key(KeyCode::Char('n')), &mut store);
        let text = draw(store.state());
        assert!(text.contains("Notifications"));
        assert!(text.contains("Command Center interface loaded"));
    }

    #[test]
    fn quit_effect_stops_the_loop() {
        let mut store = online_store();
        let (tx, _rx) = mpsc::channel();
        assert!(execute_effects(
            vec![ConsoleEffect::RequestFrame, ConsoleEffect::Quit],
            &mut store,
            &RelayConfig::default(),
            &tx,
        ));
    }
}
