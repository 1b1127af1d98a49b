use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder a learner fills in for a fill-in-the-blanks item.
pub const BLANK_MARKER: &str = "[BLANK]";

/// One question of a lesson quiz.
///
/// Multiple-choice items carry no `type` key on disk; the other kinds are
/// tagged with `"type"` as the first key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizItem {
    MultipleChoice(MultipleChoice),
    FillInTheBlanks(FillInTheBlanks),
    CodeWriting(CodeWriting),
    Matching(Matching),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizKind {
    MultipleChoice,
    FillInTheBlanks,
    CodeWriting,
    Matching,
}

impl QuizKind {
    /// Tag used in the `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            QuizKind::MultipleChoice => "multiple-choice",
            QuizKind::FillInTheBlanks => "fill-in-the-blanks",
            QuizKind::CodeWriting => "code-writing",
            QuizKind::Matching => "matching",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MultipleChoice {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub answer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FillInTheBlanks {
    pub question: String,
    /// Sentence containing one or more `[BLANK]` markers
    pub text: String,
    pub answer: String,
}

impl FillInTheBlanks {
    pub fn blank_count(&self) -> usize {
        self.text.matches(BLANK_MARKER).count()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodeWriting {
    pub question: String,

    #[serde(rename = "starterCode")]
    pub starter_code: String,

    /// Boolean expression evaluated against the submitted code
    #[serde(rename = "testCase")]
    pub test_case: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Matching {
    pub question: String,
    pub pairs: Vec<MatchPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

impl QuizItem {
    pub fn kind(&self) -> QuizKind {
        match self {
            QuizItem::MultipleChoice(_) => QuizKind::MultipleChoice,
            QuizItem::FillInTheBlanks(_) => QuizKind::FillInTheBlanks,
            QuizItem::CodeWriting(_) => QuizKind::CodeWriting,
            QuizItem::Matching(_) => QuizKind::Matching,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            QuizItem::MultipleChoice(item) => &item.question,
            QuizItem::FillInTheBlanks(item) => &item.question,
            QuizItem::CodeWriting(item) => &item.question,
            QuizItem::Matching(item) => &item.question,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum TaggedRef<'a> {
    FillInTheBlanks(&'a FillInTheBlanks),
    CodeWriting(&'a CodeWriting),
    Matching(&'a Matching),
}

// An explicit "multiple-choice" tag is accepted on input but never written.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum Tagged {
    MultipleChoice(MultipleChoice),
    FillInTheBlanks(FillInTheBlanks),
    CodeWriting(CodeWriting),
    Matching(Matching),
}

impl From<Tagged> for QuizItem {
    fn from(tagged: Tagged) -> Self {
        match tagged {
            Tagged::MultipleChoice(item) => QuizItem::MultipleChoice(item),
            Tagged::FillInTheBlanks(item) => QuizItem::FillInTheBlanks(item),
            Tagged::CodeWriting(item) => QuizItem::CodeWriting(item),
            Tagged::Matching(item) => QuizItem::Matching(item),
        }
    }
}

impl Serialize for QuizItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuizItem::MultipleChoice(item) => item.serialize(serializer),
            QuizItem::FillInTheBlanks(item) => TaggedRef::FillInTheBlanks(item).serialize(serializer),
            QuizItem::CodeWriting(item) => TaggedRef::CodeWriting(item).serialize(serializer),
            QuizItem::Matching(item) => TaggedRef::Matching(item).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for QuizItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.get("type").is_some() {
            Tagged::deserialize(value)
                .map(QuizItem::from)
                .map_err(D::Error::custom)
        } else {
            MultipleChoice::deserialize(value)
                .map(QuizItem::MultipleChoice)
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multiple_choice_has_no_type_key() {
        let item = QuizItem::MultipleChoice(MultipleChoice {
            question: "Q".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            answer: 1,
        });
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"question": "Q", "options": ["A", "B"], "answer": 1}));
    }

    #[test]
    fn test_tagged_items_write_type_first() {
        let item = QuizItem::CodeWriting(CodeWriting {
            question: "Declare x".to_string(),
            starter_code: "// here".to_string(),
            test_case: "x === 10".to_string(),
        });
        let text = serde_json::to_string(&item).unwrap();
        assert_eq!(
            text,
            r#"{"type":"code-writing","question":"Declare x","starterCode":"// here","testCase":"x === 10"}"#
        );
    }

    #[test]
    fn test_parse_each_kind() {
        let items: Vec<QuizItem> = serde_json::from_value(json!([
            {"question": "Q", "options": ["A", "B"], "answer": 0},
            {"type": "fill-in-the-blanks", "question": "Q", "text": "JSON.[BLANK]()", "answer": "parse"},
            {"type": "code-writing", "question": "Q", "starterCode": "", "testCase": "true"},
            {"type": "matching", "question": "Q", "pairs": [{"left": "map", "right": "Transform"}]}
        ]))
        .unwrap();
        let kinds: Vec<QuizKind> = items.iter().map(QuizItem::kind).collect();
        assert_eq!(
            kinds,
            vec![
                QuizKind::MultipleChoice,
                QuizKind::FillInTheBlanks,
                QuizKind::CodeWriting,
                QuizKind::Matching
            ]
        );
    }

    #[test]
    fn test_explicit_multiple_choice_tag_is_accepted() {
        let item: QuizItem = serde_json::from_value(json!({
            "type": "multiple-choice", "question": "Q", "options": ["A", "B"], "answer": 1
        }))
        .unwrap();
        assert_eq!(item.kind(), QuizKind::MultipleChoice);
        // written back without the tag
        assert!(serde_json::to_value(&item).unwrap().get("type").is_none());
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = serde_json::from_value::<QuizItem>(json!({"type": "essay", "question": "Q"})).unwrap_err();
        assert!(err.to_string().contains("essay"));
    }

    #[test]
    fn test_foreign_field_is_rejected() {
        let err = serde_json::from_value::<QuizItem>(json!({
            "question": "Q", "options": ["A", "B"], "answer": 0, "pairs": []
        }))
        .unwrap_err();
        assert!(err.to_string().contains("pairs"));
    }

    #[test]
    fn test_foreign_field_on_tagged_item_is_rejected() {
        let err = serde_json::from_value::<QuizItem>(json!({
            "type": "matching", "question": "Q", "pairs": [], "answer": 1
        }))
        .unwrap_err();
        assert!(err.to_string().contains("answer"));

        let err = serde_json::from_value::<QuizItem>(json!({
            "type": "code-writing", "question": "Q", "starterCode": "", "testCase": "true", "options": []
        }))
        .unwrap_err();
        assert!(err.to_string().contains("options"));
    }

    #[test]
    fn test_question_of_each_kind() {
        let items: Vec<QuizItem> = serde_json::from_value(json!([
            {"question": "Who created JavaScript?", "options": ["A", "B"], "answer": 1},
            {"type": "fill-in-the-blanks", "question": "JIT", "text": "Just-In-[BLANK]", "answer": "Time"},
            {"type": "code-writing", "question": "isEven", "starterCode": "", "testCase": "true"},
            {"type": "matching", "question": "Match", "pairs": [{"left": "a", "right": "b"}]}
        ]))
        .unwrap();
        let questions: Vec<&str> = items.iter().map(QuizItem::question).collect();
        assert_eq!(questions, vec!["Who created JavaScript?", "JIT", "isEven", "Match"]);
    }

    #[test]
    fn test_negative_answer_is_rejected() {
        let result = serde_json::from_value::<QuizItem>(json!({
            "question": "Q", "options": ["A", "B"], "answer": -1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_count() {
        let item = FillInTheBlanks {
            question: "Q".to_string(),
            text: "Strict: [BLANK], Loose: [BLANK]".to_string(),
            answer: "===".to_string(),
        };
        assert_eq!(item.blank_count(), 2);
        assert_eq!(QuizKind::FillInTheBlanks.to_string(), "fill-in-the-blanks");
    }
}
