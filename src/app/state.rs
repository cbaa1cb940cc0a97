//! Application state definitions

use crate::api::{
    ApiError, Latest, ProgressEntry, RecommendationResponse, ScheduleEntry, Student, Token,
};
use crate::quiz::QuizFlow;

/// Which screen is currently displayed
///
/// While no student is signed in, every route renders [`Screen::Login`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
    Recommendation,
    Quiz,
    Schedule,
}

impl Screen {
    /// Navbar order of the signed-in screens
    pub const TABS: [Screen; 4] =
        [Screen::Dashboard, Screen::Recommendation, Screen::Quiz, Screen::Schedule];

    /// Navbar label for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Đăng nhập",
            Screen::Dashboard => "Tổng quan",
            Screen::Recommendation => "Gợi ý học tập",
            Screen::Quiz => "Trắc nghiệm",
            Screen::Schedule => "Lịch học",
        }
    }

    /// The next navbar tab, wrapping around
    pub fn next_tab(&self) -> Screen {
        let tabs = Self::TABS;
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(index + 1) % tabs.len()]
    }

    /// The previous navbar tab, wrapping around
    pub fn prev_tab(&self) -> Screen {
        let tabs = Self::TABS;
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(index + tabs.len() - 1) % tabs.len()]
    }
}

/// One remote feed: payload, loading flag, error text and staleness guard
#[derive(Debug, Clone, Default)]
pub struct Remote<T> {
    /// Last applied payload
    pub data: Option<T>,
    /// Whether a request is in flight
    pub loading: bool,
    /// User-facing error from the last settled request
    pub error: Option<String>,
    latest: Latest,
}

impl<T> Remote<T> {
    /// Begin a new request, superseding any in-flight one
    pub fn start(&mut self) -> Token {
        self.error = None;
        self.loading = true;
        self.latest.begin()
    }

    /// Apply a settled request if it is still the newest one
    ///
    /// Returns `false` when the response was stale and dropped.
    pub fn resolve(&mut self, token: Token, result: Result<T, String>) -> bool {
        if !self.latest.is_current(token) {
            tracing::debug!("Dropping stale response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Whether nothing has been fetched or is being fetched yet
    pub fn is_idle(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }
}

/// Which login form field has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    StudentId,
    Password,
}

/// State for the login form
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    /// Student id input buffer
    pub student_id: String,
    /// Password input buffer
    pub password: String,
    /// Focused field
    pub focus: LoginField,
    /// Rejection/network error to display
    pub error: Option<String>,
    /// Whether a login request is in flight
    pub submitting: bool,
    /// Staleness guard for overlapping submits
    pub latest: Latest,
}

impl LoginState {
    /// Toggle focus between the two fields
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::StudentId => LoginField::Password,
            LoginField::Password => LoginField::StudentId,
        };
    }

    /// Append a typed character to the focused field
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            LoginField::StudentId => self.student_id.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    /// Delete the last character of the focused field
    pub fn delete_char(&mut self) {
        match self.focus {
            LoginField::StudentId => self.student_id.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    /// Whether both fields are filled
    pub fn is_complete(&self) -> bool {
        !self.student_id.is_empty() && !self.password.is_empty()
    }
}

/// Cursor and status line for the quiz page
#[derive(Debug, Clone, Default)]
pub struct QuizViewState {
    /// Selected row in the current list (subjects, chapters or choices)
    pub cursor: usize,
    /// Result/feedback line from the last completed or abandoned attempt
    pub status: Option<String>,
}

impl QuizViewState {
    /// Move the cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down within a list of `len` rows
    pub fn cursor_down(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Reset the cursor after a stage change
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Signed-in student, if any
    pub student: Option<Student>,

    /// Login form state
    pub login: LoginState,

    /// Dashboard progress feed
    pub dashboard: Remote<Vec<ProgressEntry>>,

    /// Recommendation feed
    pub recommendation: Remote<RecommendationResponse>,

    /// Schedule feed
    pub schedule: Remote<Vec<ScheduleEntry>>,

    /// Quiz page state machine
    pub quiz: QuizFlow,

    /// Quiz page cursor/status
    pub quiz_view: QuizViewState,

    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Record a successful sign-in and land on the dashboard
    pub fn sign_in(&mut self, student: Student) {
        self.student = Some(student);
        self.login = LoginState::default();
        self.screen = Screen::Dashboard;
    }

    /// Drop identity and all fetched state, returning to the login form
    pub fn sign_out(&mut self) {
        *self = AppState { should_quit: self.should_quit, ..AppState::default() };
    }

    /// Id of the signed-in student
    pub fn student_id(&self) -> Option<&str> {
        self.student.as_ref().map(|s| s.student_id.as_str())
    }
}

/// Map an [`ApiError`] to the static Vietnamese copy each screen shows
pub fn user_error_message(screen: Screen, error: &ApiError) -> String {
    match screen {
        Screen::Login => match error {
            ApiError::LoginRejected(message) => message.clone(),
            _ => "Lỗi kết nối server!".to_string(),
        },
        Screen::Recommendation => "⚠️ Không thể tải dữ liệu gợi ý học tập.".to_string(),
        Screen::Dashboard => "⚠️ Không thể tải dữ liệu tiến độ học tập.".to_string(),
        Screen::Schedule => "⚠️ Không thể tải lịch học.".to_string(),
        Screen::Quiz => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tabs_cycle_in_navbar_order() {
        assert_eq!(Screen::Dashboard.next_tab(), Screen::Recommendation);
        assert_eq!(Screen::Schedule.next_tab(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.prev_tab(), Screen::Schedule);
    }

    #[test]
    fn remote_resolves_only_the_newest_request() {
        let mut remote: Remote<u32> = Remote::default();
        let stale = remote.start();
        let fresh = remote.start();

        assert!(remote.resolve(fresh, Ok(2)));
        assert!(!remote.resolve(stale, Ok(1)));
        assert_eq!(remote.data, Some(2));
        assert!(!remote.loading);
    }

    #[test]
    fn stale_error_cannot_clobber_fresh_data() {
        let mut remote: Remote<u32> = Remote::default();
        let stale = remote.start();
        let fresh = remote.start();

        assert!(remote.resolve(fresh, Ok(7)));
        assert!(!remote.resolve(stale, Err("lỗi".into())));
        assert_eq!(remote.data, Some(7));
        assert!(remote.error.is_none());
    }

    #[test]
    fn remote_error_is_kept_for_display() {
        let mut remote: Remote<u32> = Remote::default();
        let token = remote.start();
        remote.resolve(token, Err("lỗi".into()));
        assert_eq!(remote.error.as_deref(), Some("lỗi"));
        assert!(!remote.is_idle());
    }

    #[test]
    fn login_form_edits_the_focused_field() {
        let mut login = LoginState::default();
        login.insert_char('2');
        login.insert_char('2');
        login.toggle_focus();
        login.insert_char('x');
        login.delete_char();
        login.insert_char('m');

        assert_eq!(login.student_id, "22");
        assert_eq!(login.password, "m");
        assert!(login.is_complete());
    }

    #[test]
    fn sign_out_forgets_everything_fetched() {
        let mut state = AppState::default();
        state.sign_in(Student {
            student_id: "2251162036".into(),
            name: "Nguyễn Văn A".into(),
            major: None,
        });
        let token = state.dashboard.start();
        state.dashboard.resolve(
            token,
            Ok(vec![ProgressEntry { course: "Cơ sở dữ liệu".into(), progress: 80.0 }]),
        );

        state.sign_out();
        assert!(state.student.is_none());
        assert_eq!(state.screen, Screen::Login);
        assert!(state.dashboard.is_idle());
    }

    #[test]
    fn quiz_cursor_stays_in_bounds() {
        let mut view = QuizViewState::default();
        view.cursor_down(3);
        view.cursor_down(3);
        view.cursor_down(3);
        assert_eq!(view.cursor, 2);
        view.cursor_up();
        assert_eq!(view.cursor, 1);
        view.reset_cursor();
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn login_errors_keep_the_server_message() {
        let err = ApiError::LoginRejected("Không tìm thấy sinh viên!".into());
        assert_eq!(user_error_message(Screen::Login, &err), "Không tìm thấy sinh viên!");

        let err = ApiError::ServerError { status: 500, message: String::new() };
        assert_eq!(user_error_message(Screen::Login, &err), "Lỗi kết nối server!");
    }
}
