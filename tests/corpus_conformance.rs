//! Corpus-driven conformance suite.
//!
//! Vectors live in `tests/corpus.json`. Each names an input document and
//! one expected outcome: the canonical rendering for well-formed input, or
//! the error classification for invalid input. Keeping the cases as data
//! makes the accepted dialect easy to audit and extend in one place.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use json_lite::{canonicalize, parse};

#[derive(Debug, Deserialize)]
struct Corpus {
    manifest: Manifest,
    vectors: Vec<TestVector>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    format_version: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct TestVector {
    id: String,
    input: String,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    #[serde(default)]
    ok: Option<ExpectedOk>,
    #[serde(default)]
    err: Option<ExpectedErr>,
}

#[derive(Debug, Deserialize)]
struct ExpectedOk {
    canonical: String,
}

#[derive(Debug, Deserialize)]
struct ExpectedErr {
    name: String,
}

fn load_corpus() -> Corpus {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/corpus.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("failed to parse corpus: {}", e))
}

fn run_vector(vector: &TestVector) -> Result<(), String> {
    let outcome = parse(&vector.input);
    match (&vector.expected.ok, &vector.expected.err, outcome) {
        (Some(ok), None, Ok(obj)) => {
            let actual = canonicalize(&obj);
            if actual == ok.canonical {
                Ok(())
            } else {
                Err(format!(
                    "expected canonical {:?}, got {:?}",
                    ok.canonical, actual
                ))
            }
        }
        (Some(_), None, Err(e)) => Err(format!("expected success, got error: {}", e)),
        (None, Some(err), Err(e)) => {
            if e.name() == err.name {
                Ok(())
            } else {
                Err(format!("expected {}, got {}", err.name, e.name()))
            }
        }
        (None, Some(err), Ok(obj)) => Err(format!(
            "expected {}, parse succeeded with {:?}",
            err.name,
            canonicalize(&obj)
        )),
        _ => Err("vector must carry exactly one of ok/err".to_string()),
    }
}

#[test]
fn corpus_manifest_is_well_formed() {
    let corpus = load_corpus();
    assert_eq!(corpus.manifest.format_version, "1");
    assert!(!corpus.manifest.description.is_empty());
    assert!(!corpus.vectors.is_empty());
}

#[test]
fn corpus_vector_ids_are_unique() {
    let corpus = load_corpus();
    let mut seen = std::collections::BTreeSet::new();
    for vector in &corpus.vectors {
        assert!(seen.insert(&vector.id), "duplicate vector id: {}", vector.id);
    }
}

#[test]
fn corpus_vectors_all_pass() {
    let corpus = load_corpus();
    let mut failures = Vec::new();
    for vector in &corpus.vectors {
        if let Err(reason) = run_vector(vector) {
            failures.push(format!("  {}: {}", vector.id, reason));
        }
    }
    assert!(
        failures.is_empty(),
        "{} of {} vectors failed:\n{}",
        failures.len(),
        corpus.vectors.len(),
        failures.join("\n")
    );
}
