//! Static question catalog
//!
//! The catalog is built once at process start and never mutated. Subjects
//! and chapters mirror the university course list; every chapter currently
//! resolves to the shared demonstration question set because the backend
//! defines no chapter-specific banks yet.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::QuizError;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown to the student
    pub prompt: String,
    /// Answer options in display order
    pub choices: Vec<String>,
    /// The correct option; always one of `choices`
    pub answer: String,
}

impl Question {
    fn new(prompt: &str, choices: &[&str], answer: &str) -> Self {
        debug_assert!(choices.contains(&answer));
        Self {
            prompt: prompt.into(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            answer: answer.into(),
        }
    }
}

/// A gradable unit within a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter id, unique within its subject
    pub id: u32,
    /// Display title
    pub title: String,
}

impl Chapter {
    fn new(id: u32, title: &str) -> Self {
        Self { id, title: title.into() }
    }
}

/// A course/topic category containing chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Short subject id (e.g. "csdl")
    pub id: String,
    /// Display name
    pub name: String,
    /// Chapters in order
    pub chapters: Vec<Chapter>,
}

/// The read-only question catalog
#[derive(Debug)]
pub struct QuestionBank {
    subjects: Vec<Subject>,
    /// Demonstration question set served for every chapter
    demo_questions: Vec<Question>,
}

static BANK: Lazy<QuestionBank> = Lazy::new(QuestionBank::build);

impl QuestionBank {
    /// The process-wide catalog
    pub fn global() -> &'static QuestionBank {
        &BANK
    }

    fn build() -> Self {
        let subjects = vec![
            Subject {
                id: "httt".into(),
                name: "Phân tích hệ thống thông tin".into(),
                chapters: vec![
                    Chapter::new(1, "Chương 1: Tổng quan về hệ thống thông tin"),
                    Chapter::new(2, "Chương 2: Mô hình hóa nghiệp vụ"),
                    Chapter::new(3, "Chương 3: Thiết kế hệ thống"),
                ],
            },
            Subject {
                id: "csdl".into(),
                name: "Cơ sở dữ liệu".into(),
                chapters: vec![
                    Chapter::new(1, "Chương 1: Mô hình ER"),
                    Chapter::new(2, "Chương 2: SQL nâng cao"),
                    Chapter::new(3, "Chương 3: Tối ưu truy vấn"),
                ],
            },
            Subject {
                id: "python".into(),
                name: "Lập trình Python".into(),
                chapters: vec![
                    Chapter::new(1, "Chương 1: Biến và kiểu dữ liệu"),
                    Chapter::new(2, "Chương 2: Cấu trúc điều khiển"),
                    Chapter::new(3, "Chương 3: Hàm và mô-đun"),
                ],
            },
        ];

        let demo_questions = vec![
            Question::new(
                "Python dùng kiểu dữ liệu nào để lưu danh sách?",
                &["List", "Tuple", "Dict", "Set"],
                "List",
            ),
            Question::new(
                "Hàm nào dùng để in ra màn hình trong Python?",
                &["input()", "print()", "echo()", "display()"],
                "print()",
            ),
            Question::new(
                "Kiểu dữ liệu của giá trị True trong Python là?",
                &["int", "bool", "string", "float"],
                "bool",
            ),
        ];

        Self { subjects, demo_questions }
    }

    /// All subjects in catalog order
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Look up a subject by id
    pub fn subject(&self, subject_id: &str) -> Result<&Subject, QuizError> {
        self.subjects
            .iter()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| QuizError::UnknownSubject(subject_id.to_string()))
    }

    /// The question sequence for a chapter
    ///
    /// Both ids are validated against the catalog even though every chapter
    /// currently maps to the shared demonstration set.
    pub fn questions_for(
        &self,
        subject_id: &str,
        chapter_id: u32,
    ) -> Result<&[Question], QuizError> {
        let subject = self.subject(subject_id)?;

        if !subject.chapters.iter().any(|c| c.id == chapter_id) {
            return Err(QuizError::UnknownChapter {
                subject: subject_id.to_string(),
                chapter: chapter_id,
            });
        }

        Ok(&self.demo_questions)
    }
}
