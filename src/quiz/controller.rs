//! Quiz page state machine
//!
//! The flow is a pure reducer: current state plus one event yields the next
//! state and a [`Transition`] describing what happened, with no rendering
//! dependency. The shell feeds it events and draws whatever `stage()` and
//! `tab()` say.

use chrono::{DateTime, Local};

use super::bank::QuestionBank;
use super::error::QuizError;
use super::history::{HistoryRecord, QuizHistory};
use super::session::{Outcome, QuizSession, percent_score};

/// Display tab shown while no session is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizTab {
    /// Subject/chapter selection
    #[default]
    Quiz,
    /// Completed-attempt log
    History,
    /// Aggregate statistics
    Stats,
}

/// Where the student is in the quiz flow
#[derive(Debug, Clone)]
pub enum QuizStage {
    /// Picking a subject from the catalog
    SelectingSubject,
    /// Picking a chapter within `subject_id`
    SelectingChapter {
        /// Selected subject id
        subject_id: String,
    },
    /// Answering questions
    InSession {
        /// Selected subject id
        subject_id: String,
        /// Selected chapter id
        chapter_id: u32,
        /// The running attempt
        session: QuizSession,
    },
}

/// Events the shell can feed into the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A subject was chosen from the list
    ChooseSubject(String),
    /// A chapter was chosen; starts a fresh session
    ChooseChapter(u32),
    /// One step back (abandons a running session without recording it)
    Back,
    /// An answer was submitted for the current question
    Answer(String),
    /// Switch the non-session display tab
    SwitchTab(QuizTab),
}

/// What a handled event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing observable changed (event did not apply to the stage)
    None,
    /// State moved; nothing to announce
    Moved,
    /// An answer was accepted and more questions remain
    Advanced,
    /// A running session was discarded via the back path
    Abandoned,
    /// The session finished and was recorded
    Completed {
        /// Correct answers
        score: u32,
        /// Questions asked
        total: usize,
        /// Recorded integer percentage
        percent: u8,
        /// Advisory pass flag (score/total >= 0.7)
        passed: bool,
    },
}

/// The quiz page controller
///
/// Owns the only live session and the history log. Lives for the page's
/// mount lifetime; there is no terminal state.
#[derive(Debug)]
pub struct QuizFlow {
    bank: &'static QuestionBank,
    stage: QuizStage,
    tab: QuizTab,
    history: QuizHistory,
}

impl QuizFlow {
    /// Advisory pass threshold for the feedback copy
    const PASS_RATIO: f64 = 0.7;

    /// Create a flow over the process-wide catalog
    pub fn new() -> Self {
        Self::with_bank(QuestionBank::global())
    }

    /// Create a flow over a specific catalog
    pub fn with_bank(bank: &'static QuestionBank) -> Self {
        Self { bank, stage: QuizStage::SelectingSubject, tab: QuizTab::default(), history: QuizHistory::new() }
    }

    /// Apply one event, stamping completions with the current local time
    pub fn handle(&mut self, event: QuizEvent) -> Result<Transition, QuizError> {
        self.handle_at(event, Local::now())
    }

    /// Apply one event at an explicit instant
    pub fn handle_at(
        &mut self,
        event: QuizEvent,
        now: DateTime<Local>,
    ) -> Result<Transition, QuizError> {
        match event {
            QuizEvent::SwitchTab(tab) => {
                // Tabs only gate which read-only view renders; they never
                // touch session or history state.
                self.tab = tab;
                Ok(Transition::Moved)
            }
            QuizEvent::ChooseSubject(subject_id) => {
                if !matches!(self.stage, QuizStage::SelectingSubject) {
                    return Ok(Transition::None);
                }
                self.bank.subject(&subject_id)?;
                self.stage = QuizStage::SelectingChapter { subject_id };
                Ok(Transition::Moved)
            }
            QuizEvent::ChooseChapter(chapter_id) => {
                let QuizStage::SelectingChapter { subject_id } = &self.stage else {
                    return Ok(Transition::None);
                };
                let subject_id = subject_id.clone();
                let questions = self.bank.questions_for(&subject_id, chapter_id)?.to_vec();
                // Any prior session is dropped here.
                let session = QuizSession::start(questions)?;
                self.stage = QuizStage::InSession { subject_id, chapter_id, session };
                Ok(Transition::Moved)
            }
            QuizEvent::Back => match &self.stage {
                QuizStage::SelectingSubject => Ok(Transition::None),
                QuizStage::SelectingChapter { .. } => {
                    self.stage = QuizStage::SelectingSubject;
                    Ok(Transition::Moved)
                }
                QuizStage::InSession { subject_id, .. } => {
                    // Explicit abandon path: nothing is recorded.
                    let subject_id = subject_id.clone();
                    self.stage = QuizStage::SelectingChapter { subject_id };
                    Ok(Transition::Abandoned)
                }
            },
            QuizEvent::Answer(choice) => {
                let QuizStage::InSession { subject_id, chapter_id, session } = &mut self.stage
                else {
                    return Ok(Transition::None);
                };

                match session.submit_answer(&choice)? {
                    Outcome::Continue { .. } => Ok(Transition::Advanced),
                    Outcome::Completed { score, total } => {
                        let subject_id = subject_id.clone();
                        let chapter_id = *chapter_id;
                        let percent = percent_score(score, total);
                        let record =
                            build_record(self.bank, &subject_id, chapter_id, percent, now);
                        self.history.append(record);
                        self.stage = QuizStage::SelectingChapter { subject_id };
                        Ok(Transition::Completed {
                            score,
                            total,
                            percent,
                            passed: score as f64 / total as f64 >= Self::PASS_RATIO,
                        })
                    }
                }
            }
        }
    }

    /// The catalog this flow selects from
    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    /// Current position in the flow
    pub fn stage(&self) -> &QuizStage {
        &self.stage
    }

    /// Active display tab
    pub fn tab(&self) -> QuizTab {
        self.tab
    }

    /// Completed-attempt log
    pub fn history(&self) -> &QuizHistory {
        &self.history
    }
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// The history record for a finished session
///
/// The ids were validated when the session started.
fn build_record(
    bank: &QuestionBank,
    subject_id: &str,
    chapter_id: u32,
    percent: u8,
    now: DateTime<Local>,
) -> HistoryRecord {
    let (subject_name, chapter_title) = bank
        .subject(subject_id)
        .ok()
        .map(|s| {
            let title = s
                .chapters
                .iter()
                .find(|c| c.id == chapter_id)
                .map(|c| c.title.clone())
                .unwrap_or_default();
            (s.name.clone(), title)
        })
        .unwrap_or_default();

    HistoryRecord {
        subject: subject_name,
        chapter: chapter_title,
        percent,
        completed_at: now.format("%d/%m/%Y %H:%M:%S").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 11, 1, 10, 30, 0).unwrap()
    }

    fn flow_in_chapter_list() -> QuizFlow {
        let mut flow = QuizFlow::new();
        flow.handle(QuizEvent::ChooseSubject("python".into())).unwrap();
        flow
    }

    #[test]
    fn starts_selecting_subject_on_quiz_tab() {
        let flow = QuizFlow::new();
        assert!(matches!(flow.stage(), QuizStage::SelectingSubject));
        assert_eq!(flow.tab(), QuizTab::Quiz);
        assert!(flow.history().is_empty());
    }

    #[test]
    fn choose_subject_then_chapter_starts_a_session() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();

        match flow.stage() {
            QuizStage::InSession { subject_id, chapter_id, session } => {
                assert_eq!(subject_id, "python");
                assert_eq!(*chapter_id, 1);
                assert_eq!(session.total(), 3);
            }
            other => panic!("expected InSession, got {other:?}"),
        }
    }

    #[test]
    fn unknown_subject_propagates_not_found() {
        let mut flow = QuizFlow::new();
        let err = flow.handle(QuizEvent::ChooseSubject("nosuch".into())).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(flow.stage(), QuizStage::SelectingSubject));
    }

    #[test]
    fn completing_a_session_records_history_and_returns_to_chapters() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();

        flow.handle_at(QuizEvent::Answer("List".into()), fixed_now()).unwrap();
        flow.handle_at(QuizEvent::Answer("input()".into()), fixed_now()).unwrap();
        let transition =
            flow.handle_at(QuizEvent::Answer("bool".into()), fixed_now()).unwrap();

        assert_eq!(
            transition,
            Transition::Completed { score: 2, total: 3, percent: 67, passed: false }
        );
        assert!(matches!(flow.stage(), QuizStage::SelectingChapter { .. }));

        let records = flow.history().all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "Lập trình Python");
        assert_eq!(records[0].chapter, "Chương 1: Biến và kiểu dữ liệu");
        assert_eq!(records[0].percent, 67);
        assert_eq!(records[0].completed_at, "01/11/2025 10:30:00");
    }

    #[test]
    fn perfect_run_passes() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(2)).unwrap();

        flow.handle(QuizEvent::Answer("List".into())).unwrap();
        flow.handle(QuizEvent::Answer("print()".into())).unwrap();
        let transition = flow.handle(QuizEvent::Answer("bool".into())).unwrap();

        assert_eq!(
            transition,
            Transition::Completed { score: 3, total: 3, percent: 100, passed: true }
        );
    }

    #[test]
    fn back_from_session_abandons_without_recording() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();
        flow.handle(QuizEvent::Answer("List".into())).unwrap();

        let transition = flow.handle(QuizEvent::Back).unwrap();
        assert_eq!(transition, Transition::Abandoned);
        assert!(matches!(flow.stage(), QuizStage::SelectingChapter { .. }));
        assert!(flow.history().is_empty());
    }

    #[test]
    fn back_walks_to_subject_selection_and_stops() {
        let mut flow = flow_in_chapter_list();
        assert_eq!(flow.handle(QuizEvent::Back).unwrap(), Transition::Moved);
        assert!(matches!(flow.stage(), QuizStage::SelectingSubject));
        assert_eq!(flow.handle(QuizEvent::Back).unwrap(), Transition::None);
    }

    #[test]
    fn starting_a_new_session_discards_the_previous_one() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();
        flow.handle(QuizEvent::Answer("List".into())).unwrap();
        flow.handle(QuizEvent::Back).unwrap();
        flow.handle(QuizEvent::ChooseChapter(2)).unwrap();

        match flow.stage() {
            QuizStage::InSession { chapter_id, session, .. } => {
                assert_eq!(*chapter_id, 2);
                assert_eq!(session.current_index(), 0);
                assert_eq!(session.score(), 0);
            }
            other => panic!("expected InSession, got {other:?}"),
        }
    }

    #[test]
    fn tab_switching_never_touches_session_or_history() {
        let mut flow = flow_in_chapter_list();
        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();
        flow.handle(QuizEvent::Answer("List".into())).unwrap();

        flow.handle(QuizEvent::SwitchTab(QuizTab::Stats)).unwrap();
        assert_eq!(flow.tab(), QuizTab::Stats);
        match flow.stage() {
            QuizStage::InSession { session, .. } => assert_eq!(session.current_index(), 1),
            other => panic!("expected InSession, got {other:?}"),
        }
        assert!(flow.history().is_empty());
    }

    #[test]
    fn events_outside_their_stage_are_ignored() {
        let mut flow = QuizFlow::new();
        assert_eq!(flow.handle(QuizEvent::ChooseChapter(1)).unwrap(), Transition::None);
        assert_eq!(flow.handle(QuizEvent::Answer("List".into())).unwrap(), Transition::None);

        let mut flow = flow_in_chapter_list();
        assert_eq!(
            flow.handle(QuizEvent::ChooseSubject("csdl".into())).unwrap(),
            Transition::None
        );
    }

    #[test]
    fn consecutive_completions_are_logged_newest_first() {
        let mut flow = flow_in_chapter_list();

        flow.handle(QuizEvent::ChooseChapter(1)).unwrap();
        for answer in ["List", "print()", "bool"] {
            flow.handle(QuizEvent::Answer(answer.into())).unwrap();
        }
        flow.handle(QuizEvent::ChooseChapter(2)).unwrap();
        for answer in ["List", "input()", "int"] {
            flow.handle(QuizEvent::Answer(answer.into())).unwrap();
        }

        let records = flow.history().all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].chapter, "Chương 2: Cấu trúc điều khiển");
        assert_eq!(records[0].percent, 33);
        assert_eq!(records[1].percent, 100);
    }
}
