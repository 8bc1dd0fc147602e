//! Interactive playground creator
//!
//! A small wizard: Name -> Template -> Tags -> Confirm -> Creating.
//! [`CreatorState`] holds the wizard state and key handling with no
//! terminal access; [`ProjectCreator`] drives it with crossterm events,
//! renders it with ratatui and runs the actual creation off the UI thread.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::config::defaults::DEFAULT_TEMPLATE;
use crate::core::project::{parse_tags, validate_name, NewProject, Project};
use crate::core::registry::Registry;
use crate::core::template;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Wizard stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Typing the playground name
    Name,
    /// Picking a template
    Template,
    /// Typing comma-separated tags
    Tags,
    /// Reviewing the choices
    Confirm,
    /// Waiting for the creation task
    Creating,
}

/// What the driver should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Keep going
    None,
    /// Leave the wizard
    Quit,
    /// Start creating this playground
    Create(NewProject),
}

/// Wizard state
#[derive(Debug)]
pub struct CreatorState {
    stage: Stage,
    name: String,
    templates: Vec<&'static str>,
    selected: usize,
    tags: String,
    show_help: bool,
    show_preview: bool,
    error: Option<String>,
    created: Option<Project>,
    tick: usize,
}

impl Default for CreatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatorState {
    /// Start at the name prompt with the default template preselected
    pub fn new() -> Self {
        let templates: Vec<&'static str> = template::list().keys().copied().collect();
        let selected = templates
            .iter()
            .position(|t| *t == DEFAULT_TEMPLATE)
            .unwrap_or(0);
        Self {
            stage: Stage::Name,
            name: String::new(),
            templates,
            selected,
            tags: String::new(),
            show_help: false,
            show_preview: false,
            error: None,
            created: None,
            tick: 0,
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Currently selected template identifier
    pub fn template(&self) -> &'static str {
        self.templates
            .get(self.selected)
            .copied()
            .unwrap_or(DEFAULT_TEMPLATE)
    }

    /// Last error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The playground created by this session
    pub fn created(&self) -> Option<&Project> {
        self.created.as_ref()
    }

    /// Whether the help panel is shown
    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// The creation request described by the current inputs
    pub fn request(&self) -> NewProject {
        NewProject::new(self.name.trim(), self.template(), parse_tags(&self.tags))
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.stage == Stage::Creating {
            return Action::None;
        }

        if key.code == KeyCode::Char('?') && !self.is_typing() {
            self.show_help = !self.show_help;
            return Action::None;
        }
        if key.code == KeyCode::Esc {
            if self.show_help {
                self.show_help = false;
                return Action::None;
            }
            return self.back();
        }

        match self.stage {
            Stage::Name => self.handle_name(key.code),
            Stage::Template => self.handle_template(key.code),
            Stage::Tags => self.handle_tags(key.code),
            Stage::Confirm => self.handle_confirm(key.code),
            Stage::Creating => Action::None,
        }
    }

    /// Record the outcome of the creation task
    ///
    /// Success ends the wizard; a failure is shown and the wizard returns
    /// to the confirmation step.
    pub fn creation_finished(&mut self, result: Result<Project, String>) -> Action {
        match result {
            Ok(project) => {
                self.created = Some(project);
                Action::Quit
            }
            Err(e) => {
                self.error = Some(e);
                self.stage = Stage::Confirm;
                Action::None
            }
        }
    }

    // A text prompt with content swallows '?' as input
    fn is_typing(&self) -> bool {
        match self.stage {
            Stage::Name => !self.name.is_empty(),
            Stage::Tags => !self.tags.is_empty(),
            _ => false,
        }
    }

    fn back(&mut self) -> Action {
        self.error = None;
        self.stage = match self.stage {
            Stage::Name => return Action::Quit,
            Stage::Template => Stage::Name,
            Stage::Tags => Stage::Template,
            Stage::Confirm => Stage::Tags,
            Stage::Creating => Stage::Creating,
        };
        Action::None
    }

    fn handle_name(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(c) => {
                self.name.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.name.pop();
            }
            KeyCode::Enter => match validate_name(self.name.trim()) {
                Ok(()) => {
                    self.error = None;
                    self.stage = Stage::Template;
                }
                Err(reason) => self.error = Some(reason),
            },
            _ => {}
        }
        Action::None
    }

    fn handle_template(&mut self, code: KeyCode) -> Action {
        let count = self.templates.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Tab => self.show_preview = !self.show_preview,
            KeyCode::Enter => self.stage = Stage::Tags,
            _ => {}
        }
        Action::None
    }

    fn handle_tags(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(c) => self.tags.push(c),
            KeyCode::Backspace => {
                self.tags.pop();
            }
            KeyCode::Enter => self.stage = Stage::Confirm,
            _ => {}
        }
        Action::None
    }

    fn handle_confirm(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.error = None;
                self.stage = Stage::Creating;
                Action::Create(self.request())
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.stage = Stage::Tags;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn preview(&self) -> String {
        let Ok(template) = template::get(self.template()) else {
            return String::new();
        };
        template
            .files
            .iter()
            .map(|(path, content)| format!("── {path} ──\n{content}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The single in-flight creation, if any
enum CreateTask {
    Idle,
    Pending(oneshot::Receiver<Result<Project, String>>),
}

/// Terminal driver for [`CreatorState`]
pub struct ProjectCreator {
    state: CreatorState,
    registry: Registry,
    runtime: Handle,
    task: CreateTask,
}

impl ProjectCreator {
    /// Create a driver that creates playgrounds in `registry`
    ///
    /// Creation runs on `runtime`'s blocking pool.
    pub fn new(registry: Registry, runtime: Handle) -> Self {
        Self {
            state: CreatorState::new(),
            registry,
            runtime,
            task: CreateTask::Idle,
        }
    }

    /// Run the wizard until it finishes or is cancelled
    ///
    /// Returns the created playground, or `None` when cancelled.
    pub fn run(mut self) -> anyhow::Result<Option<Project>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| self.state.created)
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            self.state.tick = self.state.tick.wrapping_add(1);
            terminal.draw(|f| draw(f, &self.state))?;

            if self.poll_task() == Action::Quit {
                return Ok(());
            }

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.state.handle_key(key) {
                    Action::None => {}
                    Action::Quit => return Ok(()),
                    Action::Create(request) => self.start(request),
                }
            }
        }
    }

    fn start(&mut self, request: NewProject) {
        if matches!(self.task, CreateTask::Pending(_)) {
            return;
        }
        let (tx, rx) = oneshot::channel();
        let registry = self.registry.clone();
        self.runtime.spawn_blocking(move || {
            let result = registry.create(&request).map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.task = CreateTask::Pending(rx);
    }

    fn poll_task(&mut self) -> Action {
        let CreateTask::Pending(rx) = &mut self.task else {
            return Action::None;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return Action::None,
            Err(TryRecvError::Closed) => Err("creation task stopped unexpectedly".to_string()),
        };
        self.task = CreateTask::Idle;
        self.state.creation_finished(result)
    }
}

fn draw(f: &mut Frame, state: &CreatorState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Stage content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new(format!("rshed · new playground · {}", stage_title(state.stage)))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Cyan)));
    f.render_widget(title, chunks[0]);

    if state.show_help {
        draw_help(f, chunks[1]);
    } else {
        match state.stage {
            Stage::Name => draw_input(f, chunks[1], "Playground name", &state.name),
            Stage::Template => draw_templates(f, chunks[1], state),
            Stage::Tags => draw_input(f, chunks[1], "Tags (comma separated)", &state.tags),
            Stage::Confirm => draw_summary(f, chunks[1], state),
            Stage::Creating => {
                let frame = SPINNER[state.tick % SPINNER.len()];
                let text = format!("{frame} Creating '{}'...", state.name.trim());
                f.render_widget(
                    Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
                    chunks[1],
                );
            }
        }
    }

    draw_status_bar(f, chunks[2], state);
}

fn stage_title(stage: Stage) -> &'static str {
    match stage {
        Stage::Name => "name",
        Stage::Template => "template",
        Stage::Tags => "tags",
        Stage::Confirm => "confirm",
        Stage::Creating => "creating",
    }
}

fn draw_input(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let line = Line::from(vec![
        Span::raw(value.to_string()),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ]);
    let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(label.to_string()));
    f.render_widget(input, area);
}

fn draw_templates(f: &mut Frame, area: Rect, state: &CreatorState) {
    let constraints = if state.show_preview {
        [Constraint::Percentage(40), Constraint::Percentage(60)]
    } else {
        [Constraint::Percentage(100), Constraint::Percentage(0)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let items: Vec<ListItem> = state
        .templates
        .iter()
        .map(|name| {
            let description = template::get(name).map(|t| t.description).unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{name:<8}"), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(description, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Template"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    if state.show_preview {
        let preview = Paragraph::new(state.preview())
            .block(Block::default().borders(Borders::ALL).title("Preview"));
        f.render_widget(preview, chunks[1]);
    }
}

fn draw_summary(f: &mut Frame, area: Rect, state: &CreatorState) {
    let request = state.request();
    let tags = if request.tags.is_empty() {
        "(none)".to_string()
    } else {
        request.tags.join(", ")
    };
    let text = format!(
        "Name:     {}\nTemplate: {}\nTags:     {}\n\nCreate this playground? (y/n)",
        request.name, request.template, tags
    );
    let summary = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Confirm"));
    f.render_widget(summary, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let text = "\
Enter      next step
Esc        previous step (quit from the name prompt)
↑/↓ j/k    choose a template
Tab        toggle template file preview
y / n      create / go back on the confirmation step
?          toggle this help
Ctrl+C     quit";
    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &CreatorState) {
    let line = match &state.error {
        Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "Enter: next  Esc: back  ?: help  Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}
