//! Stored sign-in state
//!
//! The authenticated student record is kept on disk between runs so every
//! screen can re-read identity without logging in again, the same role the
//! browser front end gives `localStorage`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;
use crate::api::Student;

/// Persisted sign-in state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in student, if any
    pub student: Option<Student>,
}

impl Session {
    /// Load session from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::session_path()?)
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::session_path()?)
    }

    /// Forget the stored student
    pub fn clear() -> Result<()> {
        Session::default().save()
    }

    /// Whether a student is signed in
    pub fn is_signed_in(&self) -> bool {
        self.student.is_some()
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read session from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse session.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize session")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the session file
    fn session_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student() -> Student {
        Student {
            student_id: "2251162036".into(),
            name: "Nguyễn Văn A".into(),
            major: Some("Hệ thống thông tin".into()),
        }
    }

    #[test]
    fn default_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn missing_file_loads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load_from(&dir.path().join("session.json")).unwrap();
        assert!(session.student.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session { student: Some(student()) };
        session.save_to(&path).unwrap();

        let loaded = Session::load_from(&path).unwrap();
        assert_eq!(loaded.student.unwrap(), student());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        Session { student: Some(student()) }.save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn session_serializes_the_student_record() {
        let session = Session { student: Some(student()) };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("2251162036"));
    }
}
