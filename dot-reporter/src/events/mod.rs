mod dispatcher;

use crate::reporter::prelude::TestStatus;
use derive_builder::Builder;
use strum::{Display, EnumIter};

pub mod prelude {
    pub use super::dispatcher::{EventDispatcher, Subscriber};
    pub use super::{EventKind, FailEvent, FailEventBuilder, TestEvent};
}

/// Every lifecycle event a reporter can subscribe to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum EventKind {
    SuiteBefore,
    SuiteAfter,
    TestSuccess,
    TestFail,
    TestError,
    TestSkipped,
    TestIncomplete,
    TestWarning,
    TestFailPrint,
}

/// Details of a non-successful test, handed over verbatim to whoever prints failures.
#[derive(Clone, Default, Builder, Debug, PartialEq, Eq)]
#[builder(setter(into))]
pub struct FailEvent {
    pub name: String,
    #[builder(default)]
    pub output: String,
    /// Position of the failure within its suite, starting at 1.
    #[builder(default)]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestEvent {
    SuiteBefore { total_tests: usize },
    SuiteAfter,
    Success,
    Fail(FailEvent),
    Error(FailEvent),
    Skipped,
    Incomplete(FailEvent),
    Warning(FailEvent),
    FailPrint(FailEvent),
}

impl TestEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TestEvent::SuiteBefore { .. } => EventKind::SuiteBefore,
            TestEvent::SuiteAfter => EventKind::SuiteAfter,
            TestEvent::Success => EventKind::TestSuccess,
            TestEvent::Fail(_) => EventKind::TestFail,
            TestEvent::Error(_) => EventKind::TestError,
            TestEvent::Skipped => EventKind::TestSkipped,
            TestEvent::Incomplete(_) => EventKind::TestIncomplete,
            TestEvent::Warning(_) => EventKind::TestWarning,
            TestEvent::FailPrint(_) => EventKind::TestFailPrint,
        }
    }

    /// The per-test outcome carried by this event, if it is one.
    pub fn status(&self) -> Option<TestStatus> {
        match self {
            TestEvent::Success => Some(TestStatus::Success),
            TestEvent::Fail(_) => Some(TestStatus::Fail),
            TestEvent::Error(_) => Some(TestStatus::Error),
            TestEvent::Skipped => Some(TestStatus::Skipped),
            TestEvent::Incomplete(_) => Some(TestStatus::Incomplete),
            TestEvent::Warning(_) => Some(TestStatus::Warning),
            TestEvent::SuiteBefore { .. } | TestEvent::SuiteAfter | TestEvent::FailPrint(_) => {
                None
            }
        }
    }
}
