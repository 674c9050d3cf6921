//! Workbench application state and logic

use crate::exercises::Exercise;
use crate::prompt::Prompter;
use crate::transcript::Transcript;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io::{self, Cursor};
use std::time::Duration;
use tracing::{info, warn};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Menu,
    Input,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (menu -> input -> terminal)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Menu,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Terminal,
            FocusedPane::Input => FocusedPane::Menu,
            FocusedPane::Terminal => FocusedPane::Input,
        }
    }
}

/// Result of the most recent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Succeeded,
    Failed(String),
}

/// The main application state
pub struct App {
    pub exercises: Vec<Exercise>,

    /// Index of the highlighted exercise
    pub selected: usize,

    pub focused_pane: FocusedPane,

    /// Committed input lines, fed to the exercise in order
    pub input_lines: Vec<String>,

    /// Line being typed
    pub input_buffer: String,

    /// Output of the last run
    pub transcript: Transcript,

    pub terminal_scroll: usize,

    pub run_state: RunState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        App {
            exercises,
            selected: 0,
            focused_pane: FocusedPane::Menu,
            input_lines: Vec::new(),
            input_buffer: String::new(),
            transcript: Transcript::new(),
            terminal_scroll: 0,
            run_state: RunState::Idle,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    pub fn selected_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.selected)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        // Right column: Terminal (top) | Input (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        super::panes::render_menu_pane(
            frame,
            columns[0],
            &self.exercises,
            self.selected,
            self.focused_pane == FocusedPane::Menu,
        );

        super::panes::render_terminal_pane(
            frame,
            right_rows[0],
            &self.transcript,
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        super::panes::render_input_pane(
            frame,
            right_rows[1],
            &self.input_lines,
            &self.input_buffer,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.run_state,
            self.focused_pane,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(5) => {
                self.run_selected();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            _ => match self.focused_pane {
                FocusedPane::Menu => self.handle_menu_key(key.code),
                FocusedPane::Input => self.handle_input_key(key.code),
                FocusedPane::Terminal => self.handle_terminal_key(key.code),
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.describe_selection();
            }
            KeyCode::Down => {
                if self.selected + 1 < self.exercises.len() {
                    self.selected += 1;
                }
                self.describe_selection();
            }
            KeyCode::Enter => {
                self.run_selected();
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                if self.input_buffer.pop().is_none() {
                    // Reopen the previous line for editing
                    if let Some(last) = self.input_lines.pop() {
                        self.input_buffer = last;
                    }
                }
            }
            KeyCode::Enter => {
                self.input_lines.push(std::mem::take(&mut self.input_buffer));
            }
            KeyCode::Delete => {
                self.input_lines.clear();
                self.input_buffer.clear();
                self.status_message = "Input cleared".to_string();
            }
            _ => {}
        }
    }

    fn handle_terminal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.terminal_scroll = self.terminal_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn describe_selection(&mut self) {
        if let Some(exercise) = self.selected_exercise() {
            self.status_message = exercise.summary().to_string();
        }
    }

    /// Lines fed to the exercise: the committed lines plus any partial line
    fn script(&self) -> Vec<String> {
        let mut lines = self.input_lines.clone();
        if !self.input_buffer.is_empty() {
            lines.push(self.input_buffer.clone());
        }
        lines
    }

    /// Run the selected exercise against the queued input, replacing the
    /// transcript with what it printed
    pub fn run_selected(&mut self) {
        let Some(exercise) = self.selected_exercise().cloned() else {
            return;
        };

        let lines = self.script();
        let mut transcript = Transcript::new();
        for line in &lines {
            transcript.echo_input(line);
        }

        let mut input = lines.join("\n");
        input.push('\n');
        let mut prompter = Prompter::new(Cursor::new(input.into_bytes()), transcript);
        let result = exercise.run(&mut prompter);
        let mut transcript = prompter.into_writer();

        match result {
            Ok(()) => {
                info!(exercise = exercise.name(), "workbench run finished");
                self.run_state = RunState::Succeeded;
                self.status_message = format!("{} finished", exercise.name());
            }
            Err(e) => {
                warn!(exercise = exercise.name(), error = %e, "workbench run failed");
                transcript.print(&format!("\nerror: {}\n", e));
                self.run_state = RunState::Failed(e.to_string());
                self.status_message = format!("{} failed: {}", exercise.name(), e);
            }
        }

        self.transcript = transcript;
        // Auto-scroll terminal to bottom
        self.terminal_scroll = usize::MAX;
    }
}
