//! A single quiz attempt
//!
//! A session owns its question sequence for the lifetime of one attempt.
//! Answers are matched by exact, case-sensitive text comparison; the index
//! always advances, so `score <= current_index` holds throughout.

use super::bank::Question;
use super::error::QuizError;

/// Result of submitting one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// More questions remain; `next` is the question now current
    Continue {
        /// The next question to present
        next: Question,
    },
    /// The session just finished
    Completed {
        /// Number of correct answers
        score: u32,
        /// Number of questions asked
        total: usize,
    },
}

/// State of one run-through of a question sequence
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    finished: bool,
}

impl QuizSession {
    /// Start a session over a non-empty question sequence
    pub fn start(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(Self { questions, current_index: 0, score: 0, finished: false })
    }

    /// The question awaiting an answer, or `None` once finished
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished { None } else { self.questions.get(self.current_index) }
    }

    /// Submit an answer for the current question
    ///
    /// Fails with [`QuizError::SessionFinished`] after completion; the
    /// failed call mutates nothing.
    pub fn submit_answer(&mut self, choice: &str) -> Result<Outcome, QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }

        if choice == self.questions[self.current_index].answer {
            self.score += 1;
        }
        self.current_index += 1;

        if self.current_index == self.questions.len() {
            self.finished = true;
            Ok(Outcome::Completed { score: self.score, total: self.questions.len() })
        } else {
            Ok(Outcome::Continue { next: self.questions[self.current_index].clone() })
        }
    }

    /// Correct answers so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this attempt
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the last question has been answered
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Integer percentage for a final tally, rounded half away from zero
pub fn percent_score(score: u32, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn question(prompt: &str, answer: &str, wrong: &str) -> Question {
        Question {
            prompt: prompt.into(),
            choices: vec![answer.into(), wrong.into()],
            answer: answer.into(),
        }
    }

    fn demo_questions() -> Vec<Question> {
        vec![
            question("q1", "List", "Tuple"),
            question("q2", "print()", "input()"),
            question("q3", "bool", "int"),
        ]
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert_eq!(QuizSession::start(Vec::new()).unwrap_err(), QuizError::EmptyQuiz);
    }

    #[test]
    fn two_of_three_correct() {
        let mut session = QuizSession::start(demo_questions()).unwrap();

        assert!(matches!(session.submit_answer("List").unwrap(), Outcome::Continue { .. }));
        assert!(matches!(session.submit_answer("input()").unwrap(), Outcome::Continue { .. }));

        let outcome = session.submit_answer("bool").unwrap();
        assert_eq!(outcome, Outcome::Completed { score: 2, total: 3 });
        assert!(session.is_finished());
        assert_eq!(percent_score(2, 3), 67);
    }

    #[test]
    fn continue_carries_the_next_question() {
        let mut session = QuizSession::start(demo_questions()).unwrap();
        match session.submit_answer("Tuple").unwrap() {
            Outcome::Continue { next } => assert_eq!(next.prompt, "q2"),
            other => panic!("expected Continue, got {other:?}"),
        }
        assert_eq!(session.current_question().unwrap().prompt, "q2");
    }

    #[test]
    fn answer_matching_is_case_sensitive() {
        let mut session = QuizSession::start(demo_questions()).unwrap();
        session.submit_answer("list").unwrap();
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn submit_after_finish_fails_without_mutation() {
        let mut session = QuizSession::start(vec![question("q", "a", "b")]).unwrap();
        session.submit_answer("a").unwrap();

        let err = session.submit_answer("a").unwrap_err();
        assert_eq!(err, QuizError::SessionFinished);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn current_question_is_none_after_finish() {
        let mut session = QuizSession::start(vec![question("q", "a", "b")]).unwrap();
        assert!(session.current_question().is_some());
        session.submit_answer("b").unwrap();
        assert!(session.current_question().is_none());
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(percent_score(0, 3), 0);
        assert_eq!(percent_score(1, 3), 33);
        assert_eq!(percent_score(2, 3), 67);
        assert_eq!(percent_score(1, 2), 50);
        assert_eq!(percent_score(3, 3), 100);
        assert_eq!(percent_score(1, 8), 13);
    }

    proptest! {
        /// Final score equals the number of exact matches, and the session
        /// finishes exactly on the last submission.
        #[test]
        fn score_counts_exact_matches(answers in prop::collection::vec(prop::bool::ANY, 1..20)) {
            let questions: Vec<Question> =
                (0..answers.len()).map(|i| question(&format!("q{i}"), "yes", "no")).collect();
            let mut session = QuizSession::start(questions).unwrap();

            let mut expected = 0u32;
            for (i, correct) in answers.iter().enumerate() {
                prop_assert!(!session.is_finished());
                let choice = if *correct { "yes" } else { "no" };
                if *correct {
                    expected += 1;
                }
                let outcome = session.submit_answer(choice).unwrap();
                if i + 1 == answers.len() {
                    prop_assert_eq!(
                        outcome,
                        Outcome::Completed { score: expected, total: answers.len() }
                    );
                } else {
                    prop_assert!(matches!(outcome, Outcome::Continue { .. }), "expected Continue outcome");
                }
            }

            prop_assert!(session.is_finished());
            prop_assert_eq!(session.score(), expected);
        }

        /// Score never exceeds the number of submissions made.
        #[test]
        fn score_bounded_by_index(answers in prop::collection::vec("[a-c]", 1..10)) {
            let questions: Vec<Question> =
                (0..answers.len()).map(|i| question(&format!("q{i}"), "a", "b")).collect();
            let mut session = QuizSession::start(questions).unwrap();
            for answer in &answers {
                session.submit_answer(answer).unwrap();
                prop_assert!(session.score() as usize <= session.current_index());
            }
        }
    }
}
