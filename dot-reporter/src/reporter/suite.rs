use super::failure::FailurePrinter;
use super::glyph::TestStatus;
use super::progress::format_progress;
use crate::events::prelude::{EventKind, FailEvent, Subscriber, TestEvent};
use crate::shared::prelude::{ReporterConfig, TerminalGeometry};
use std::io::Write;
use tracing::{debug, trace, warn};

/// Layout state of the suite currently being displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SuiteRun {
    pub total_tests: usize,
    pub tests_done: usize,
    /// Glyphs written on the current line since the last wrap.
    pub cursor: usize,
    pub max_width: usize,
}

impl SuiteRun {
    pub fn start(total_tests: usize, geometry: &TerminalGeometry) -> Self {
        let suffix_len = format_progress(total_tests, total_tests).len();

        Self {
            total_tests,
            tests_done: 0,
            cursor: 0,
            max_width: geometry.max_width(suffix_len),
        }
    }

    pub fn progress(&self) -> String {
        format_progress(self.tests_done, self.total_tests)
    }

    /// Account for one more glyph. Returns `true` when the line is full and must wrap.
    pub fn advance(&mut self) -> bool {
        self.tests_done += 1;
        self.cursor += 1;
        self.cursor >= self.max_width
    }

    pub fn wrap(&mut self) {
        self.cursor = 0;
    }

    /// Spaces needed to line the final progress up with the wrapped ones.
    pub fn padding(&self) -> usize {
        self.max_width.saturating_sub(self.cursor)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SuiteState {
    Idle,
    InSuite(SuiteRun),
}

/// Renders one status character per test and wraps lines with an aligned progress suffix.
///
/// ```text
///
/// .......... 10 / 25 ( 40%)
/// ..F....... 20 / 25 ( 80%)
/// .....      25 / 25 (100%)
/// ```
pub struct SuiteReporter<W: Write> {
    geometry: TerminalGeometry,
    config: ReporterConfig,
    target: W,
    failure_printer: Box<dyn FailurePrinter>,
    state: SuiteState,
}

impl<W: Write> SuiteReporter<W> {
    pub fn new(
        geometry: TerminalGeometry,
        config: ReporterConfig,
        target: W,
        failure_printer: Box<dyn FailurePrinter>,
    ) -> Self {
        // `columns` from the config wins over whatever the geometry was built with.
        let geometry = if config.columns > 0 {
            TerminalGeometry::new(geometry.detected_width, config.columns)
        } else {
            geometry
        };

        Self {
            geometry,
            config,
            target,
            failure_printer,
            state: SuiteState::Idle,
        }
    }

    pub fn geometry(&self) -> &TerminalGeometry {
        &self.geometry
    }

    pub fn current_run(&self) -> Option<&SuiteRun> {
        match &self.state {
            SuiteState::Idle => None,
            SuiteState::InSuite(run) => Some(run),
        }
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn suite_started(&mut self, total_tests: usize) {
        if let SuiteState::InSuite(run) = &self.state {
            warn!(
                "Suite started before the previous one finished ({} of {} tests reported)",
                run.tests_done, run.total_tests
            );
        }

        let run = SuiteRun::start(total_tests, &self.geometry);
        debug!(
            total_tests,
            max_width = run.max_width,
            "Starting suite display"
        );
        self.state = SuiteState::InSuite(run);

        self.write("\n");
    }

    pub fn test_finished(&mut self, status: TestStatus) {
        let SuiteState::InSuite(mut run) = self.state else {
            warn!("Test reported `{}` outside of a suite, ignoring", status);
            return;
        };

        self.write(&status.glyph().render());

        if run.advance() {
            let line_end = format!("{}\n", run.progress());
            self.write(&line_end);
            run.wrap();
        }

        trace!(?run, "Test finished");
        self.state = SuiteState::InSuite(run);
    }

    pub fn suite_finished(&mut self) {
        let SuiteState::InSuite(run) = self.state else {
            warn!("Suite finished without being started, ignoring");
            return;
        };

        let summary = format!("{}{}\n", " ".repeat(run.padding()), run.progress());
        self.write(&summary);

        debug!(
            tests_done = run.tests_done,
            total_tests = run.total_tests,
            "Finished suite display"
        );
        self.state = SuiteState::Idle;
    }

    pub fn print_failed(&mut self, event: &FailEvent) {
        self.failure_printer.print_fail(event);
    }

    fn write(&mut self, text: &str) {
        if self.config.silent {
            return;
        }

        let result = self
            .target
            .write_all(text.as_bytes())
            .and_then(|_| self.target.flush());

        if let Err(e) = result {
            debug!("Unable to write progress output: {:?}", e);
        }
    }
}

const SUBSCRIBED_EVENTS: &[EventKind] = &[
    EventKind::SuiteBefore,
    EventKind::SuiteAfter,
    EventKind::TestSuccess,
    EventKind::TestFail,
    EventKind::TestError,
    EventKind::TestSkipped,
    EventKind::TestIncomplete,
    EventKind::TestWarning,
    EventKind::TestFailPrint,
];

impl<W: Write> Subscriber for SuiteReporter<W> {
    fn subscribed_events(&self) -> &'static [EventKind] {
        SUBSCRIBED_EVENTS
    }

    fn on_event(&mut self, event: &TestEvent) {
        match event {
            TestEvent::SuiteBefore { total_tests } => self.suite_started(*total_tests),
            TestEvent::SuiteAfter => self.suite_finished(),
            TestEvent::FailPrint(fail) => self.print_failed(fail),
            other => {
                if let Some(status) = other.status() {
                    self.test_finished(status);
                }
            }
        }
    }
}
