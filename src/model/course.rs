use serde::{Deserialize, Serialize};

use crate::model::quiz::QuizItem;

/// Top-level course document, written as `course.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub modules: Vec<Module>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Lesson {
    /// Unique across the whole course
    pub id: String,
    pub title: String,
    /// Markdown
    pub content: String,
    pub quiz: Vec<QuizItem>,
}

impl Course {
    /// All lessons in reading order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(|module| module.lessons.iter())
    }

    pub fn find_lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons().find(|lesson| lesson.id == id)
    }

    /// Lesson a reader starts on.
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.modules.first()?.lessons.first()
    }
}
