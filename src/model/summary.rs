use serde::Serialize;
use std::fmt;

use crate::model::course::Course;
use crate::model::quiz::QuizKind;

/// Counts reported after an export.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSummary {
    pub modules: usize,
    pub lessons: usize,
    pub multiple_choice: usize,
    pub fill_in_the_blanks: usize,
    pub code_writing: usize,
    pub matching: usize,
}

impl CourseSummary {
    pub fn of(course: &Course) -> Self {
        let mut summary = CourseSummary {
            modules: course.modules.len(),
            ..Default::default()
        };
        for lesson in course.lessons() {
            summary.lessons += 1;
            for item in &lesson.quiz {
                match item.kind() {
                    QuizKind::MultipleChoice => summary.multiple_choice += 1,
                    QuizKind::FillInTheBlanks => summary.fill_in_the_blanks += 1,
                    QuizKind::CodeWriting => summary.code_writing += 1,
                    QuizKind::Matching => summary.matching += 1,
                }
            }
        }
        summary
    }

    pub fn quiz_items(&self) -> usize {
        self.multiple_choice + self.fill_in_the_blanks + self.code_writing + self.matching
    }
}

impl fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} modules, {} lessons, {} quiz items ({} {}, {} {}, {} {}, {} {})",
            self.modules,
            self.lessons,
            self.quiz_items(),
            self.multiple_choice,
            QuizKind::MultipleChoice,
            self.fill_in_the_blanks,
            QuizKind::FillInTheBlanks,
            self.code_writing,
            QuizKind::CodeWriting,
            self.matching,
            QuizKind::Matching,
        )
    }
}
