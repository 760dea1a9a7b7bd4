#![allow(dead_code)]
use async_trait::async_trait;
use headphones_import::{
    Catalog, CatalogCandidate, Confirmer, ImportError, Reporter, Result, Severity,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory catalog that records every call made to it.
#[derive(Default)]
pub struct FakeCatalog {
    pub results: HashMap<String, Vec<CatalogCandidate>>,
    pub failing_searches: HashSet<String>,
    pub failing_adds: HashSet<String>,
    pub failing_queues: HashSet<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_result(mut self, query: &str, candidates: Vec<CatalogCandidate>) -> Self {
        self.results.insert(query.to_string(), candidates);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Catalog for FakeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>> {
        self.calls.borrow_mut().push(format!("search {query}"));
        if self.failing_searches.contains(query) {
            return Err(ImportError::Transport("connection reset".to_string()));
        }
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }

    async fn add(&self, catalog_id: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("add {catalog_id}"));
        if self.failing_adds.contains(catalog_id) {
            return Err(ImportError::Transport("500 Internal Server Error".to_string()));
        }
        Ok(())
    }

    async fn queue(&self, catalog_id: &str, prefer_lossless: bool) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("queue {catalog_id} lossless={prefer_lossless}"));
        if self.failing_queues.contains(catalog_id) {
            return Err(ImportError::Transport("timeout".to_string()));
        }
        Ok(())
    }
}

// Mirrors `RecordingReporter` in src/test_support.rs, which is not visible
// to integration tests. Keep the two in step.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: RefCell<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.lines.borrow_mut().push((severity, message.to_string()));
    }
}

/// Says yes to everything and never supplies values.
pub struct AlwaysYes;

impl Confirmer for AlwaysYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }

    fn prompt_value(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
        Err(ImportError::MissingValue(prompt.to_string()))
    }
}

pub const HEADER: &str = "Track URI,Track Name,Artist Name(s),Album URI,Album Name,Album Artist URI(s),Album Artist Name(s),Album Release Date,Disc Number,Track Number";

pub fn playlist_csv(rows: &[&str]) -> String {
    let mut csv = HEADER.to_string();
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}
