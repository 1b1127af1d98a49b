use thiserror::Error;

/// A course rule broken by the content. `item` is the 0-based position in the lesson quiz.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty {0} id")]
    EmptyId(&'static str),
    #[error("duplicate module id: {0}")]
    DuplicateModuleId(String),
    #[error("duplicate lesson id: {id} (in {first_module} and {second_module})")]
    DuplicateLessonId {
        id: String,
        first_module: String,
        second_module: String,
    },
    #[error("lesson {lesson}, item {item}: multiple-choice needs at least 2 options, got {count}")]
    TooFewOptions { lesson: String, item: usize, count: usize },
    #[error("lesson {lesson}, item {item}: answer {answer} out of range for {options} options")]
    AnswerOutOfRange {
        lesson: String,
        item: usize,
        answer: usize,
        options: usize,
    },
    #[error("lesson {lesson}, item {item}: fill-in-the-blanks text has no [BLANK] marker")]
    MissingBlank { lesson: String, item: usize },
    #[error("lesson {lesson}, item {item}: code-writing test case is empty")]
    EmptyTestCase { lesson: String, item: usize },
    #[error("lesson {lesson}, item {item}: matching has no pairs")]
    EmptyMatching { lesson: String, item: usize },
}
