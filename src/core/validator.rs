use std::collections::{HashMap, HashSet};

use crate::error::validation::ValidationError;
use crate::model::course::{Course, Lesson};
use crate::model::quiz::QuizItem;

/// Checks the course rules, stopping at the first violation.
pub fn validate(course: &Course) -> Result<(), ValidationError> {
    let mut module_ids = HashSet::new();
    // lesson id -> owning module id
    let mut lesson_owners: HashMap<&str, &str> = HashMap::new();

    for module in &course.modules {
        if module.id.is_empty() {
            return Err(ValidationError::EmptyId("module"));
        }
        if !module_ids.insert(module.id.as_str()) {
            return Err(ValidationError::DuplicateModuleId(module.id.clone()));
        }

        for lesson in &module.lessons {
            if lesson.id.is_empty() {
                return Err(ValidationError::EmptyId("lesson"));
            }
            if let Some(first_module) = lesson_owners.insert(&lesson.id, &module.id) {
                return Err(ValidationError::DuplicateLessonId {
                    id: lesson.id.clone(),
                    first_module: first_module.to_string(),
                    second_module: module.id.clone(),
                });
            }
            validate_quiz(lesson)?;
        }
    }
    Ok(())
}

fn validate_quiz(lesson: &Lesson) -> Result<(), ValidationError> {
    let id = || lesson.id.clone();

    for (item, quiz_item) in lesson.quiz.iter().enumerate() {
        match quiz_item {
            QuizItem::MultipleChoice(mc) => {
                if mc.options.len() < 2 {
                    return Err(ValidationError::TooFewOptions {
                        lesson: id(),
                        item,
                        count: mc.options.len(),
                    });
                }
                if mc.answer >= mc.options.len() {
                    return Err(ValidationError::AnswerOutOfRange {
                        lesson: id(),
                        item,
                        answer: mc.answer,
                        options: mc.options.len(),
                    });
                }
            }
            QuizItem::FillInTheBlanks(blanks) => match blanks.blank_count() {
                0 => return Err(ValidationError::MissingBlank { lesson: id(), item }),
                1 => {}
                n => log::debug!(
                    "lesson {}, item {} ({:?}): {} blanks share the single answer {:?}",
                    lesson.id,
                    item,
                    quiz_item.question(),
                    n,
                    blanks.answer
                ),
            },
            QuizItem::CodeWriting(code) => {
                if code.test_case.trim().is_empty() {
                    return Err(ValidationError::EmptyTestCase { lesson: id(), item });
                }
            }
            QuizItem::Matching(matching) => {
                if matching.pairs.is_empty() {
                    return Err(ValidationError::EmptyMatching { lesson: id(), item });
                }
            }
        }
    }
    Ok(())
}
