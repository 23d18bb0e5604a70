use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

pub const TITLE_PLACEHOLDER: &str = "No title";
pub const DIFFICULTY_PLACEHOLDER: &str = "N/A";

const TITLE_FIELD: &str = "title";
const DIFFICULTY_FIELD: &str = "difficulty";
const TAGS_FIELD: &str = "tags";
const COMPANIES_FIELD: &str = "askedByCompanies";
const TEST_CASES_FIELD: &str = "codingProblemTestCases";

/// Facts derived from a single document. Every field has a defined default,
/// so collection is total over arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DocumentFacts {
    pub has_title: bool,
    pub title: String,
    pub difficulty: String,
    pub tag_count: usize,
    pub company_count: usize,
    pub test_case_count: usize,
}

impl DocumentFacts {
    pub fn collect(doc: &Value) -> Self {
        let title = str_field(doc, TITLE_FIELD);
        Self {
            has_title: title.is_some(),
            title: title.unwrap_or(TITLE_PLACEHOLDER).to_string(),
            difficulty: str_field(doc, DIFFICULTY_FIELD)
                .unwrap_or(DIFFICULTY_PLACEHOLDER)
                .to_string(),
            tag_count: list_len(doc, TAGS_FIELD),
            company_count: list_len(doc, COMPANIES_FIELD),
            test_case_count: list_len(doc, TEST_CASES_FIELD),
        }
    }
}

/// Comparison facts over both documents.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SummaryFacts {
    pub left: DocumentFacts,
    pub right: DocumentFacts,
    pub titles_match: bool,
}

/// Derive `SummaryFacts` from two documents of arbitrary shape.
///
/// Pure and deterministic: the same inputs always yield the same facts.
/// Titles compare by exact string equality, placeholders included, so two
/// documents that both omit a title still match.
pub fn summarize(left: &Value, right: &Value) -> SummaryFacts {
    let left = DocumentFacts::collect(left);
    let right = DocumentFacts::collect(right);
    let titles_match = left.title == right.title;
    SummaryFacts {
        left,
        right,
        titles_match,
    }
}

// Response payloads wrap the interesting fields in a `data` envelope; bare
// documents carry them at the root. Summarize both the same way.
fn payload_root(doc: &Value) -> &Value {
    match doc.get("data") {
        Some(data @ Value::Object(_)) => data,
        _ => doc,
    }
}

fn str_field<'a>(doc: &'a Value, field: &str) -> Option<&'a str> {
    payload_root(doc).get(field).and_then(Value::as_str)
}

fn list_len(doc: &Value, field: &str) -> usize {
    payload_root(doc)
        .get(field)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
