// 🎓 Student Entity + letter grading

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score onto inclusive bands: 80-100 A, 70-79 B, 60-69 C, 50-59 D.
/// Anything else (including scores above 100 or below 0) is an F.
pub fn letter_grade(score: i32) -> Grade {
    match score {
        80..=100 => Grade::A,
        70..=79 => Grade::B,
        60..=69 => Grade::C,
        50..=59 => Grade::D,
        _ => Grade::F,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: u32, full_name: impl Into<String>, score: i32) -> Self {
        Student {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        letter_grade(self.score)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}
