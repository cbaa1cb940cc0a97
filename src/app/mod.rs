//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::api::{
    ApiClient, ApiError, ProgressEntry, RecommendationResponse, ScheduleEntry, Student, Token,
};
use crate::config::Config;
use crate::config::session::Session;
use crate::quiz::{QuizEvent, QuizStage, QuizTab, Transition};
use crate::ui;
use input::Action;
use state::{AppState, Screen, user_error_message};

/// Messages sent back to the UI loop by spawned fetch tasks
#[derive(Debug)]
pub enum AppEvent {
    /// Login request settled
    LoggedIn {
        token: Token,
        result: Result<Student, ApiError>,
    },
    /// Dashboard progress feed settled
    ProgressLoaded {
        token: Token,
        result: Result<Vec<ProgressEntry>, ApiError>,
    },
    /// Recommendation feed settled
    RecommendationLoaded {
        token: Token,
        result: Result<RecommendationResponse, ApiError>,
    },
    /// Schedule feed settled
    ScheduleLoaded {
        token: Token,
        result: Result<Vec<ScheduleEntry>, ApiError>,
    },
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Backend API client, shared with fetch tasks
    api: Arc<ApiClient>,

    /// Sender cloned into fetch tasks
    tx: mpsc::UnboundedSender<AppEvent>,

    /// Receiver drained by the UI loop
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let api = Arc::new(ApiClient::new(config.api_base_url.clone()));
        let (tx, rx) = mpsc::unbounded_channel();

        let mut state = AppState::default();

        // Re-read identity stored by a previous run, like the browser
        // front end re-reads localStorage.
        match Session::load() {
            Ok(session) => {
                if let Some(student) = session.student {
                    tracing::info!(student_id = %student.student_id, "Restored stored sign-in");
                    state.sign_in(student);
                }
            }
            Err(e) => tracing::warn!("Could not load stored session: {e}"),
        }

        Ok(Self { config, state, terminal, api, tx, rx })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        if self.state.student.is_some() {
            self.refresh_screen(false);
        }

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.config);
            })?;

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Err(e) = self.handle_key(key) {
                            tracing::error!("Error handling key: {e}");
                        }
                    }
                }
            }

            while let Ok(event) = self.rx.try_recv() {
                self.handle_app_event(event);
            }

            if self.state.should_quit {
                break;
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.screen == Screen::Login {
            self.handle_login_key(key);
            return Ok(());
        }

        let Some(action) = input::key_with_modifier_to_action(key.code, key.modifiers) else {
            return Ok(());
        };

        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Logout => {
                if let Err(e) = Session::clear() {
                    tracing::warn!("Could not clear stored session: {e}");
                }
                self.state.sign_out();
            }
            Action::Goto(screen) => self.goto_screen(screen),
            Action::NextScreen => self.goto_screen(self.state.screen.next_tab()),
            Action::PrevScreen => self.goto_screen(self.state.screen.prev_tab()),
            Action::Refresh => self.refresh_screen(true),
            Action::Up | Action::Down | Action::Select | Action::Back
            | Action::TabLeft | Action::TabRight => {
                if self.state.screen == Screen::Quiz {
                    self.handle_quiz_action(action)?;
                }
            }
        }

        Ok(())
    }

    /// Handle a key press on the login form
    fn handle_login_key(&mut self, key: KeyEvent) {
        use crossterm::event::KeyModifiers;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.should_quit = true,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.state.login.toggle_focus(),
            KeyCode::Backspace => self.state.login.delete_char(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char(c) => self.state.login.insert_char(c),
            _ => {}
        }
    }

    /// Fire the login request for the current form contents
    fn submit_login(&mut self) {
        let login = &mut self.state.login;
        if login.submitting || !login.is_complete() {
            return;
        }

        login.error = None;
        login.submitting = true;
        let token = login.latest.begin();

        let api = self.api.clone();
        let tx = self.tx.clone();
        let student_id = login.student_id.clone();
        let password = login.password.clone();

        tokio::spawn(async move {
            let result = api.login(&student_id, &password).await;
            let _ = tx.send(AppEvent::LoggedIn { token, result });
        });
    }

    /// Switch screens, fetching the new screen's feed on first visit
    fn goto_screen(&mut self, screen: Screen) {
        self.state.screen = screen;
        self.refresh_screen(false);
    }

    /// Fetch the current screen's feed; `force` refetches existing data
    fn refresh_screen(&mut self, force: bool) {
        let Some(student_id) = self.state.student_id().map(String::from) else {
            return;
        };

        match self.state.screen {
            Screen::Dashboard => {
                if force || self.state.dashboard.is_idle() {
                    let token = self.state.dashboard.start();
                    let api = self.api.clone();
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let result = api.progress(&student_id).await;
                        let _ = tx.send(AppEvent::ProgressLoaded { token, result });
                    });
                }
            }
            Screen::Recommendation => {
                if force || self.state.recommendation.is_idle() {
                    let token = self.state.recommendation.start();
                    let api = self.api.clone();
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let result = api.recommendations(&student_id).await;
                        let _ = tx.send(AppEvent::RecommendationLoaded { token, result });
                    });
                }
            }
            Screen::Schedule => {
                if force || self.state.schedule.is_idle() {
                    let token = self.state.schedule.start();
                    let api = self.api.clone();
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let result = api.schedule(&student_id).await;
                        let _ = tx.send(AppEvent::ScheduleLoaded { token, result });
                    });
                }
            }
            Screen::Login | Screen::Quiz => {}
        }
    }

    /// Apply a settled fetch to the state
    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoggedIn { token, result } => {
                if !self.state.login.latest.is_current(token) {
                    tracing::debug!("Dropping stale login response");
                    return;
                }
                self.state.login.submitting = false;
                match result {
                    Ok(student) => {
                        let session = Session { student: Some(student.clone()) };
                        if let Err(e) = session.save() {
                            tracing::warn!("Could not store session: {e}");
                        }
                        tracing::info!(student_id = %student.student_id, "Signed in");
                        self.state.sign_in(student);
                        self.refresh_screen(false);
                    }
                    Err(e) => {
                        self.state.login.error =
                            Some(user_error_message(Screen::Login, &e));
                    }
                }
            }
            AppEvent::ProgressLoaded { token, result } => {
                let result = result.map_err(|e| user_error_message(Screen::Dashboard, &e));
                self.state.dashboard.resolve(token, result);
            }
            AppEvent::RecommendationLoaded { token, result } => {
                let result = result.map_err(|e| user_error_message(Screen::Recommendation, &e));
                self.state.recommendation.resolve(token, result);
            }
            AppEvent::ScheduleLoaded { token, result } => {
                let result = result.map_err(|e| user_error_message(Screen::Schedule, &e));
                self.state.schedule.resolve(token, result);
            }
        }
    }

    /// Drive the quiz page state machine
    fn handle_quiz_action(&mut self, action: Action) -> Result<()> {
        let event = match action {
            Action::Up => {
                self.state.quiz_view.cursor_up();
                return Ok(());
            }
            Action::Down => {
                let len = self.quiz_list_len();
                self.state.quiz_view.cursor_down(len);
                return Ok(());
            }
            Action::TabLeft | Action::TabRight => {
                if matches!(self.state.quiz.stage(), QuizStage::InSession { .. }) {
                    return Ok(());
                }
                let tab = switch_tab(self.state.quiz.tab(), action == Action::TabRight);
                QuizEvent::SwitchTab(tab)
            }
            Action::Back => QuizEvent::Back,
            Action::Select => match self.quiz_select_event() {
                Some(event) => event,
                None => return Ok(()),
            },
            _ => return Ok(()),
        };

        // Controller errors here are invariant violations (the UI only
        // offers valid selections); fail loudly in the log.
        let transition = self.state.quiz.handle(event)?;
        self.apply_quiz_transition(transition);
        Ok(())
    }

    /// Number of rows in the list the quiz cursor moves over
    fn quiz_list_len(&self) -> usize {
        let quiz = &self.state.quiz;
        match quiz.stage() {
            QuizStage::InSession { session, .. } => {
                session.current_question().map_or(0, |q| q.choices.len())
            }
            QuizStage::SelectingSubject if quiz.tab() == QuizTab::Quiz => {
                quiz.bank().subjects().len()
            }
            QuizStage::SelectingChapter { subject_id } if quiz.tab() == QuizTab::Quiz => quiz
                .bank()
                .subject(subject_id)
                .map_or(0, |s| s.chapters.len()),
            _ => 0,
        }
    }

    /// The event Enter produces at the current cursor position
    fn quiz_select_event(&self) -> Option<QuizEvent> {
        let quiz = &self.state.quiz;
        let cursor = self.state.quiz_view.cursor;

        match quiz.stage() {
            QuizStage::InSession { session, .. } => {
                let question = session.current_question()?;
                let choice = question.choices.get(cursor)?;
                Some(QuizEvent::Answer(choice.clone()))
            }
            QuizStage::SelectingSubject if quiz.tab() == QuizTab::Quiz => {
                let subject = quiz.bank().subjects().get(cursor)?;
                Some(QuizEvent::ChooseSubject(subject.id.clone()))
            }
            QuizStage::SelectingChapter { subject_id } if quiz.tab() == QuizTab::Quiz => {
                let subject = quiz.bank().subject(subject_id).ok()?;
                let chapter = subject.chapters.get(cursor)?;
                Some(QuizEvent::ChooseChapter(chapter.id))
            }
            _ => None,
        }
    }

    /// React to what the controller did
    fn apply_quiz_transition(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Moved | Transition::Advanced => {
                self.state.quiz_view.reset_cursor();
                self.state.quiz_view.status = None;
            }
            Transition::Abandoned => {
                self.state.quiz_view.reset_cursor();
                self.state.quiz_view.status = None;
            }
            Transition::Completed { score, total, passed, .. } => {
                self.state.quiz_view.reset_cursor();
                let feedback =
                    if passed { "Tốt lắm!" } else { "Khá ổn! Cần ôn thêm chút nữa." };
                self.state.quiz_view.status =
                    Some(format!("✅ Bạn đúng {score}/{total} câu! {feedback}"));
            }
        }
    }
}

/// The tab to the left or right of `tab`
fn switch_tab(tab: QuizTab, right: bool) -> QuizTab {
    const ORDER: [QuizTab; 3] = [QuizTab::Quiz, QuizTab::History, QuizTab::Stats];
    let index = ORDER.iter().position(|t| *t == tab).unwrap_or(0);
    let next = if right {
        (index + 1) % ORDER.len()
    } else {
        (index + ORDER.len() - 1) % ORDER.len()
    };
    ORDER[next]
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_switching_wraps_both_ways() {
        assert_eq!(switch_tab(QuizTab::Quiz, true), QuizTab::History);
        assert_eq!(switch_tab(QuizTab::Stats, true), QuizTab::Quiz);
        assert_eq!(switch_tab(QuizTab::Quiz, false), QuizTab::Stats);
        assert_eq!(switch_tab(QuizTab::History, false), QuizTab::Quiz);
    }
}
