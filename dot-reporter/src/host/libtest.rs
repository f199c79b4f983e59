use super::error::HostError;
use crate::events::prelude::{FailEvent, TestEvent};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// One line of `cargo test -- -Z unstable-options --format json` output.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LibtestRecord {
    Suite(SuiteRecord),
    Test(TestRecord),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SuiteRecord {
    pub event: SuiteOutcome,
    #[serde(default)]
    pub test_count: Option<usize>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SuiteOutcome {
    Started,
    Ok,
    Failed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct TestRecord {
    pub name: String,
    pub event: TestOutcome,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Started,
    Ok,
    Failed,
    Ignored,
    Timeout,
    #[serde(other)]
    Other,
}

/// Parse a single line of the stream. Anything that is not a JSON object is
/// noise from the test binaries and yields `None`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<LibtestRecord>, HostError> {
    let trimmed = line.trim();
    if !trimmed.starts_with('{') {
        debug!("Skipping non-event line {}: {}", line_number, trimmed);
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| HostError::InvalidEvent {
            line: line_number,
            source,
        })
}

/// Turns libtest records into reporter events. Failure details are held
/// back until the suite finishes, then replayed as fail-print events.
#[derive(Debug, Default)]
pub struct LibtestTranslator {
    pending_failures: Vec<FailEvent>,
    failures_seen: usize,
    in_suite: bool,
}

impl LibtestTranslator {
    pub fn failures_seen(&self) -> usize {
        self.failures_seen
    }

    /// Close a suite the stream never finished, e.g. when a test binary aborted.
    pub fn finish(&mut self) -> Vec<TestEvent> {
        if !self.in_suite {
            return Vec::new();
        }

        warn!("Event stream ended in the middle of a suite");
        self.end_suite()
    }

    pub fn translate(&mut self, record: LibtestRecord) -> Vec<TestEvent> {
        match record {
            LibtestRecord::Suite(suite) => self.translate_suite(suite),
            LibtestRecord::Test(test) => self.translate_test(test),
            LibtestRecord::Other => Vec::new(),
        }
    }

    fn translate_suite(&mut self, suite: SuiteRecord) -> Vec<TestEvent> {
        match suite.event {
            SuiteOutcome::Started => {
                self.in_suite = true;
                self.pending_failures.clear();
                vec![TestEvent::SuiteBefore {
                    total_tests: suite.test_count.unwrap_or_default(),
                }]
            }
            SuiteOutcome::Ok | SuiteOutcome::Failed => self.end_suite(),
            SuiteOutcome::Other => Vec::new(),
        }
    }

    fn end_suite(&mut self) -> Vec<TestEvent> {
        self.in_suite = false;
        let mut events = vec![TestEvent::SuiteAfter];
        events.extend(self.pending_failures.drain(..).map(TestEvent::FailPrint));
        events
    }

    fn translate_test(&mut self, test: TestRecord) -> Vec<TestEvent> {
        match test.event {
            TestOutcome::Ok => vec![TestEvent::Success],
            TestOutcome::Ignored => vec![TestEvent::Skipped],
            TestOutcome::Failed => {
                self.failures_seen += 1;
                let failure = FailEvent {
                    name: test.name,
                    output: test.stdout.or(test.message).unwrap_or_default(),
                    count: self.pending_failures.len() + 1,
                };
                self.pending_failures.push(failure.clone());
                vec![TestEvent::Fail(failure)]
            }
            TestOutcome::Timeout => {
                info!("{} has been running for over 60 seconds", test.name);
                Vec::new()
            }
            TestOutcome::Started | TestOutcome::Other => Vec::new(),
        }
    }
}
