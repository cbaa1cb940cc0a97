//! Quiz mini-game
//!
//! Question catalog, single-attempt session, completed-attempt history and
//! the page state machine tying them together. Everything here is pure
//! state-transition logic with no UI dependency.

pub mod bank;
pub mod controller;
pub mod error;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use bank::{Chapter, Question, QuestionBank, Subject};
pub use controller::{QuizEvent, QuizFlow, QuizStage, QuizTab, Transition};
pub use error::QuizError;
pub use history::{HistoryRecord, QuizHistory};
pub use session::{Outcome, QuizSession, percent_score};
