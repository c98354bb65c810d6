//! Main TUI application state and logic

use crate::catalog::Catalog;
use crate::enrollment::errors::RegistrationError;
use crate::enrollment::ledger;
use crate::enrollment::student::Student;
use crate::session::ActivityLog;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;

/// Menu options, in the order they are numbered on screen
pub const MENU_ITEMS: [&str; 4] = [
    "Register for available courses",
    "View registration info",
    "Drop a registered course",
    "Exit",
];

/// Which screen the session is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome prompt for the student's name
    NamePrompt,
    /// Welcome prompt for the student's ID
    IdPrompt,
    /// The four-option main menu
    Menu,
    /// Catalog listing plus course-code entry
    Register,
    /// Registration summary
    ViewInfo,
    /// Current registrations plus course-code entry
    Drop,
}

/// The main application state
pub struct App {
    /// The course catalog, seeded at startup
    pub catalog: Catalog,

    /// The session's student; absent until the welcome prompts complete
    pub student: Option<Student>,

    /// Current screen
    pub screen: Screen,

    /// Text entry buffer for the current prompt or code field
    pub input: String,

    /// Name captured on the first prompt, held until the ID arrives
    pending_name: String,

    /// Highlighted row on the menu screen
    pub menu_cursor: usize,

    /// Scroll offset for the catalog listing
    pub catalog_scroll: usize,

    /// Scroll offset for the activity log pane
    pub log_scroll: usize,

    /// Status message shown in the bottom bar
    pub status_message: String,

    /// Transcript of the session's registration activity
    pub log: ActivityLog,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app over a seeded catalog
    pub fn new(catalog: Catalog) -> Self {
        App {
            catalog,
            student: None,
            screen: Screen::NamePrompt,
            input: String::new(),
            pending_name: String::new(),
            menu_cursor: 0,
            catalog_scroll: 0,
            log_scroll: 0,
            status_message: String::from("Enter your name to begin"),
            log: ActivityLog::new(),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Body area plus a one-row status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let body = main_chunks[0];
        let status_area = main_chunks[1];

        match self.screen {
            Screen::NamePrompt => {
                super::panes::render_prompt_pane(frame, body, "Enter your name:", &self.input);
            }
            Screen::IdPrompt => {
                super::panes::render_prompt_pane(
                    frame,
                    body,
                    "Enter your student ID:",
                    &self.input,
                );
            }
            _ => {
                // Main content on the left, activity log on the right
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .split(body);

                super::panes::render_log_pane(
                    frame,
                    columns[1],
                    &self.log,
                    &mut self.log_scroll,
                );

                match self.screen {
                    Screen::Menu => {
                        super::panes::render_menu_pane(
                            frame,
                            columns[0],
                            self.menu_cursor,
                            self.student.as_ref(),
                        );
                    }
                    Screen::Register => {
                        let rows = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([Constraint::Min(0), Constraint::Length(3)])
                            .split(columns[0]);

                        super::panes::render_catalog_pane(
                            frame,
                            rows[0],
                            &self.catalog,
                            &mut self.catalog_scroll,
                        );
                        super::panes::render_input_pane(
                            frame,
                            rows[1],
                            " Course Code ",
                            &self.input,
                        );
                    }
                    Screen::ViewInfo => {
                        if let Some(student) = &self.student {
                            let info = ledger::registration_info(&self.catalog, student);
                            super::panes::render_summary_pane(
                                frame,
                                columns[0],
                                " Registration Info ",
                                &info,
                            );
                        }
                    }
                    Screen::Drop => {
                        let rows = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([Constraint::Min(0), Constraint::Length(3)])
                            .split(columns[0]);

                        if let Some(student) = &self.student {
                            let info = ledger::registration_info(&self.catalog, student);
                            super::panes::render_summary_pane(
                                frame,
                                rows[0],
                                " Registered Courses ",
                                &info,
                            );
                        }
                        super::panes::render_input_pane(
                            frame,
                            rows[1],
                            " Course Code to Drop ",
                            &self.input,
                        );
                    }
                    _ => {}
                }
            }
        }

        super::panes::render_status_bar(frame, status_area, &self.status_message, self.screen);
    }

    /// Handle keyboard events, dispatched per screen
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::NamePrompt => self.handle_name_key(key),
            Screen::IdPrompt => self.handle_id_key(key),
            Screen::Menu => self.handle_menu_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::ViewInfo => self.handle_view_key(key),
            Screen::Drop => self.handle_drop_key(key),
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let name = self.input.trim().to_string();
                if name.is_empty() {
                    self.status_message = String::from("Please enter your name");
                } else {
                    self.pending_name = name;
                    self.input.clear();
                    self.screen = Screen::IdPrompt;
                    self.status_message = String::from("Enter your student ID");
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_id_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let id = self.input.trim().to_string();
                if id.is_empty() {
                    self.status_message = String::from("Please enter your student ID");
                } else {
                    let student = Student::new(id, self.pending_name.clone());
                    self.log
                        .info(format!("Welcome, {} ({})", student.name(), student.id()));
                    self.student = Some(student);
                    self.input.clear();
                    self.screen = Screen::Menu;
                    self.status_message = String::from("Choose an option");
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let choice = c.to_digit(10).unwrap_or(1) as usize;
                self.activate_menu_item(choice - 1);
            }
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => {
                self.activate_menu_item(self.menu_cursor);
            }
            KeyCode::Char(_) => {
                // Anything else re-prompts with no state change
                self.status_message = String::from("Invalid choice. Please try again.");
            }
            _ => {}
        }
    }

    fn activate_menu_item(&mut self, index: usize) {
        self.menu_cursor = index;
        match index {
            0 => {
                self.screen = Screen::Register;
                self.input.clear();
                self.catalog_scroll = 0;
                self.status_message = String::from("Select a course to register (enter course code)");
            }
            1 => {
                self.screen = Screen::ViewInfo;
                self.status_message = String::from("Registration information");
            }
            2 => {
                self.screen = Screen::Drop;
                self.input.clear();
                self.status_message = String::from("Enter course code to drop");
            }
            3 => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.back_to_menu();
            }
            KeyCode::Up => {
                self.catalog_scroll = self.catalog_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.catalog_scroll = self.catalog_scroll.saturating_add(1);
            }
            KeyCode::Enter => {
                self.submit_register();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.back_to_menu();
            }
            _ => {}
        }
    }

    fn handle_drop_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.back_to_menu();
            }
            KeyCode::Enter => {
                self.submit_drop();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.input.clear();
        self.status_message = String::from("Choose an option");
    }

    fn submit_register(&mut self) {
        let code = self.input.trim().to_string();
        if code.is_empty() {
            self.status_message = String::from("Enter a course code");
            return;
        }

        let student = match self.student.as_mut() {
            Some(student) => student,
            None => return,
        };

        let outcome = ledger::register(&mut self.catalog, student, &code);
        let message = match outcome {
            Ok(title) => {
                let text = format!("Successfully registered for {}", title);
                self.log.success(text.clone());
                text
            }
            Err(err) => {
                let text = failure_message(&err);
                self.log.error(text.clone());
                text
            }
        };

        self.status_message = message;
        self.input.clear();
        // Keep the newest log line in view
        self.log_scroll = usize::MAX;
    }

    fn submit_drop(&mut self) {
        let code = self.input.trim().to_string();
        if code.is_empty() {
            self.status_message = String::from("Enter a course code");
            return;
        }

        let student = match self.student.as_mut() {
            Some(student) => student,
            None => return,
        };

        let outcome = ledger::drop(&mut self.catalog, student, &code);
        let message = match outcome {
            Ok(title) => {
                let text = format!("Successfully dropped {}", title);
                self.log.success(text.clone());
                text
            }
            Err(err) => {
                let text = failure_message(&err);
                self.log.error(text.clone());
                text
            }
        };

        self.status_message = message;
        self.input.clear();
        self.log_scroll = usize::MAX;
    }
}

/// User-facing wording for each recoverable failure
fn failure_message(err: &RegistrationError) -> String {
    match err {
        RegistrationError::UnknownCourse { .. } => {
            String::from("Invalid course code. Please try again.")
        }
        RegistrationError::CourseFull { .. } => {
            String::from("Course is full. Please select another course.")
        }
        RegistrationError::AlreadyRegistered { code } => {
            format!("You are already registered for {}.", code)
        }
        RegistrationError::NotRegistered { .. } => {
            String::from("You are not registered for this course.")
        }
    }
}
