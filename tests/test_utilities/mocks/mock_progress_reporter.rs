use sbom_trend::prelude::*;
use std::sync::{Arc, Mutex};

/// One call received by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        document: Option<String>,
    },
    Error(String),
    Completed(String),
}

impl ReportedEvent {
    fn render(&self) -> String {
        match self {
            ReportedEvent::Message(text) => text.clone(),
            ReportedEvent::Progress {
                current,
                total,
                document: Some(document),
            } => format!("Progress: {}/{} - {}", current, total, document),
            ReportedEvent::Progress { current, total, .. } => {
                format!("Progress: {}/{}", current, total)
            }
            ReportedEvent::Error(text) => format!("Error: {}", text),
            ReportedEvent::Completed(text) => format!("Completed: {}", text),
        }
    }
}

/// Records every reporter call; clones share the same log
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events rendered as single lines, e.g. `Progress: 1/2 - bom-001.json`
    pub fn get_messages(&self) -> Vec<String> {
        self.events().iter().map(ReportedEvent::render).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Error(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_progress(&self) -> Option<(usize, usize)> {
        self.events().iter().rev().find_map(|event| match event {
            ReportedEvent::Progress { current, total, .. } => Some((*current, *total)),
            _ => None,
        })
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ReportedEvent::Progress {
            current,
            total,
            document: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ReportedEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ReportedEvent::Completed(message.to_string()));
    }
}
