//! Question corpus loader — scans the data directory for question JSON files.
//!
//! Files are expected to look like
//! `{"questions": [{"question": "..."}, ...]}`. Anything that deviates is
//! skipped and reported as a `CorpusIssue` so the caller can surface it;
//! the loader itself never fails and never touches the response layer.

pub mod handlers;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// A non-fatal problem found while loading the corpus. Rendered to the user
/// verbatim via `Display` and included in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusIssue {
    #[error("the folder '{dir}' does not exist")]
    MissingDirectory { dir: String },

    #[error("the folder '{dir}' could not be read")]
    UnreadableDirectory { dir: String },

    #[error("the folder '{dir}' is empty")]
    EmptyDirectory { dir: String },

    #[error("could not read file: {file}")]
    UnreadableFile { file: String },

    #[error("error decoding JSON from file: {file}")]
    InvalidJson { file: String },

    #[error("no 'questions' key found in file: {file}")]
    MissingQuestionsKey { file: String },

    #[error("no 'question' key found in one of the items in {file}")]
    ItemMissingQuestion { file: String },
}

/// One load of the data directory. Rebuilt on every request — the corpus is
/// small and never cached, so edits to the data files take effect immediately.
#[derive(Debug, Default, Serialize)]
pub struct Corpus {
    pub questions: Vec<String>,
    pub issues: Vec<CorpusIssue>,
}

/// Scans `dir` for `*.json` files and extracts every `question` string.
///
/// Malformed files degrade gracefully: each problem becomes one
/// `CorpusIssue` and loading continues with the remaining files. Non-JSON
/// files are silently ignored. Entries are visited in file-name order so
/// the corpus is deterministic across platforms.
pub fn load(dir: &Path) -> Corpus {
    let mut corpus = Corpus::default();
    let dir_display = dir.display().to_string();

    if !dir.exists() {
        error!("corpus: the folder '{dir_display}' does not exist");
        corpus
            .issues
            .push(CorpusIssue::MissingDirectory { dir: dir_display });
        return corpus;
    }

    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read) => read.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(e) => {
            error!("corpus: could not read folder '{dir_display}': {e}");
            corpus
                .issues
                .push(CorpusIssue::UnreadableDirectory { dir: dir_display });
            return corpus;
        }
    };
    entries.sort();

    if entries.is_empty() {
        error!("corpus: the folder '{dir_display}' is empty");
        corpus
            .issues
            .push(CorpusIssue::EmptyDirectory { dir: dir_display });
        return corpus;
    }

    for path in entries {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        load_file(&path, &mut corpus);
    }

    corpus
}

/// Extracts questions from a single JSON file, appending issues for every
/// shape problem encountered.
fn load_file(path: &Path, corpus: &mut Corpus) {
    let file = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) => {
            error!("corpus: could not read '{file}': {e}");
            corpus.issues.push(CorpusIssue::UnreadableFile { file });
            return;
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("corpus: error decoding JSON from '{file}': {e}");
            corpus.issues.push(CorpusIssue::InvalidJson { file });
            return;
        }
    };

    let Some(items) = value.get("questions").and_then(|v| v.as_array()) else {
        warn!("corpus: no 'questions' key found in '{file}'");
        corpus
            .issues
            .push(CorpusIssue::MissingQuestionsKey { file });
        return;
    };

    for item in items {
        match item.get("question").and_then(|q| q.as_str()) {
            Some(question) => corpus.questions.push(question.to_string()),
            None => {
                warn!("corpus: no 'question' key found in one of the items in '{file}'");
                corpus.issues.push(CorpusIssue::ItemMissingQuestion {
                    file: file.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_loads_every_question_across_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "a.json",
            r#"{"questions": [{"question": "q1"}, {"question": "q2", "topic": "economy"}]}"#,
        );
        write(tmp.path(), "b.json", r#"{"questions": [{"question": "q3"}]}"#);

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["q1", "q2", "q3"]);
        assert!(corpus.issues.is_empty());
    }

    #[test]
    fn test_missing_directory_yields_exactly_one_issue() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");

        let corpus = load(&missing);
        assert!(corpus.questions.is_empty());
        assert_eq!(corpus.issues.len(), 1);
        assert!(matches!(
            corpus.issues[0],
            CorpusIssue::MissingDirectory { .. }
        ));
    }

    #[test]
    fn test_empty_directory_yields_exactly_one_issue() {
        let tmp = tempfile::tempdir().unwrap();

        let corpus = load(tmp.path());
        assert!(corpus.questions.is_empty());
        assert_eq!(corpus.issues.len(), 1);
        assert!(matches!(corpus.issues[0], CorpusIssue::EmptyDirectory { .. }));
    }

    #[test]
    fn test_invalid_json_file_is_skipped_but_others_load() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "bad.json", "{not json");
        write(tmp.path(), "good.json", r#"{"questions": [{"question": "q1"}]}"#);

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["q1"]);
        assert_eq!(corpus.issues.len(), 1);
        assert!(matches!(corpus.issues[0], CorpusIssue::InvalidJson { .. }));
    }

    #[test]
    fn test_file_without_questions_key_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "odd.json", r#"{"answers": []}"#);

        let corpus = load(tmp.path());
        assert!(corpus.questions.is_empty());
        assert_eq!(
            corpus.issues,
            vec![CorpusIssue::MissingQuestionsKey {
                file: "odd.json".to_string()
            }]
        );
    }

    #[test]
    fn test_item_without_question_key_is_reported_and_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "mixed.json",
            r#"{"questions": [{"question": "q1"}, {"answer": "a1"}, "bare string"]}"#,
        );

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["q1"]);
        assert_eq!(corpus.issues.len(), 2);
        assert!(corpus
            .issues
            .iter()
            .all(|i| matches!(i, CorpusIssue::ItemMissingQuestion { .. })));
    }

    #[test]
    fn test_non_json_files_are_silently_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "notes.txt", "not relevant");
        write(tmp.path(), "q.json", r#"{"questions": [{"question": "q1"}]}"#);

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["q1"]);
        assert!(corpus.issues.is_empty());
    }

    #[test]
    fn test_questions_follow_file_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "z.json", r#"{"questions": [{"question": "last"}]}"#);
        write(tmp.path(), "a.json", r#"{"questions": [{"question": "first"}]}"#);

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["first", "last"]);
    }

    #[test]
    fn test_manifesto_fixture_loads_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "q1.json",
            r#"{"questions":[{"question":"What is the manifesto of Party A?"}]}"#,
        );

        let corpus = load(tmp.path());
        assert_eq!(corpus.questions, vec!["What is the manifesto of Party A?"]);
    }
}
