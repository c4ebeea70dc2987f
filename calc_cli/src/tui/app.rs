use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::Result;
use calc_core::catalog::{self, CalculatorInfo};
use calc_core::form::{Field, FieldKind};
use calc_core::settings::Settings;
use calc_core::template::Notice;
use calc_core::Screen;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{key_to_action, Action};
use super::view;

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Picker,
    Calculator,
}

/// Application state
pub struct App {
    settings: Settings,
    pub mode: Mode,
    /// Highlighted catalogue entry
    pub picker: usize,
    pub screen: Option<Box<dyn Screen>>,
    /// Highlighted field on the calculator screen
    pub selected: usize,
    /// Uncommitted text for the highlighted field
    pub edit: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings, slug: Option<&str>) -> Result<Self> {
        let mut app = App {
            settings,
            mode: Mode::Picker,
            picker: 0,
            screen: None,
            selected: 0,
            edit: None,
            should_quit: false,
        };
        if let Some(slug) = slug {
            let info = catalog::find(slug)?;
            app.picker = info.kind as usize;
            app.open_selected();
        }
        Ok(app)
    }

    pub fn entries(&self) -> &'static [CalculatorInfo] {
        &catalog::CATALOG
    }

    pub fn fields(&self) -> Vec<Field> {
        self.screen.as_ref().map(|s| s.fields()).unwrap_or_default()
    }

    fn selected_field(&self) -> Option<Field> {
        self.fields().into_iter().nth(self.selected)
    }

    pub fn handle_action(&mut self, action: Action) {
        match self.mode {
            Mode::Picker => self.handle_picker(action),
            Mode::Calculator => self.handle_calculator(action),
        }
    }

    fn handle_picker(&mut self, action: Action) {
        let count = self.entries().len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::Up => self.picker = (self.picker + count - 1) % count,
            Action::Down => self.picker = (self.picker + 1) % count,
            Action::Open => self.open_selected(),
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        let info = &self.entries()[self.picker];
        self.screen = Some(catalog::screen(info.kind, &self.settings));
        self.selected = 0;
        self.edit = None;
        self.mode = Mode::Calculator;
    }

    fn handle_calculator(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => {
                if self.edit.take().is_none() {
                    self.screen = None;
                    self.mode = Mode::Picker;
                }
            }
            Action::Up => self.move_selection(-1),
            Action::Down => self.move_selection(1),
            Action::Next => {
                let is_choice = matches!(
                    self.selected_field().map(|f| f.kind),
                    Some(FieldKind::Choice(_))
                );
                if is_choice {
                    self.cycle_choice();
                } else {
                    self.move_selection(1);
                }
            }
            Action::Char(c) => self.type_char(c),
            Action::Backspace => self.backspace(),
            Action::ClearField => self.edit = Some(String::new()),
            Action::Calculate => {
                self.commit_edit();
                if let Some(screen) = self.screen.as_mut() {
                    // A rejected calculation is reported through the screen's notice.
                    let _ = screen.calculate();
                }
            }
            Action::Reset => {
                self.edit = None;
                self.selected = 0;
                if let Some(screen) = self.screen.as_mut() {
                    screen.reset();
                    screen.set_notice(Some(Notice::info("Inputs reset to defaults")));
                }
            }
            Action::Export => {
                self.commit_edit();
                let dir = self.settings.export_dir.clone();
                if let Some(screen) = self.screen.as_mut() {
                    let _ = screen.export_pdf(&dir);
                }
            }
            Action::Open | Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        self.commit_edit();
        let count = self.fields().len();
        if count == 0 {
            return;
        }
        let next = (self.selected as isize + delta).rem_euclid(count as isize);
        self.selected = next as usize;
    }

    fn type_char(&mut self, c: char) {
        let Some(field) = self.selected_field() else {
            return;
        };
        if let FieldKind::Choice(_) = field.kind {
            if c == ' ' {
                self.cycle_choice();
            }
            return;
        }
        // The first keystroke replaces the shown value.
        self.edit.get_or_insert_with(String::new).push(c);
    }

    fn backspace(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        if let FieldKind::Choice(_) = field.kind {
            return;
        }
        let buffer = self.edit.get_or_insert(field.value);
        buffer.pop();
    }

    fn cycle_choice(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        if let Some(next) = field.cycle_choice() {
            self.apply(field.key, next);
        }
    }

    fn commit_edit(&mut self) {
        let Some(text) = self.edit.take() else {
            return;
        };
        if let Some(field) = self.selected_field() {
            self.apply(field.key, &text);
        }
    }

    fn apply(&mut self, key: &str, text: &str) {
        if let Some(screen) = self.screen.as_mut() {
            if let Err(e) = screen.set_field(key, text) {
                screen.set_notice(Some(Notice::error(e.to_string())));
            }
        }
        // Changing a mode field can change how many fields there are.
        let count = self.fields().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

/// Run the TUI application
pub fn run(settings: Settings, slug: Option<&str>) -> Result<()> {
    // Resolve the slug before touching the terminal so errors print normally.
    let mut app = App::new(settings, slug)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| view::render(app, f))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let action = key_to_action(key, app.mode);
                    app.handle_action(action);
                }
            }
        }
    }
    Ok(())
}
