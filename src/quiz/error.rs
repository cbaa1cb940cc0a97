//! Error types for the quiz subsystem

use thiserror::Error;

/// Errors that can occur in the quiz bank, session or controller
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Subject id is not in the catalog
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    /// Chapter id is not in the subject's chapter list
    #[error("Unknown chapter {chapter} in subject {subject}")]
    UnknownChapter {
        /// Subject the lookup ran against
        subject: String,
        /// Missing chapter id
        chapter: u32,
    },

    /// A session cannot be started without questions
    #[error("Cannot start a quiz with no questions")]
    EmptyQuiz,

    /// An answer was submitted to an already finished session
    #[error("Quiz session is already finished")]
    SessionFinished,
}

impl QuizError {
    /// Whether this error is a catalog lookup miss
    ///
    /// Given the static catalog these indicate a programming error in the
    /// caller, not a user-recoverable condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::UnknownSubject(_) | QuizError::UnknownChapter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_classify_as_not_found() {
        assert!(QuizError::UnknownSubject("x".into()).is_not_found());
        assert!(QuizError::UnknownChapter { subject: "x".into(), chapter: 9 }.is_not_found());
        assert!(!QuizError::EmptyQuiz.is_not_found());
        assert!(!QuizError::SessionFinished.is_not_found());
    }

    #[test]
    fn messages_name_the_missing_ids() {
        let err = QuizError::UnknownChapter { subject: "csdl".into(), chapter: 7 };
        assert_eq!(err.to_string(), "Unknown chapter 7 in subject csdl");
    }
}
