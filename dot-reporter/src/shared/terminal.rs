use mockall::automock;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

#[automock]
pub trait WidthDetector {
    /// Width of the attached terminal in columns, when it can be determined.
    fn detect_width(&self) -> Option<usize>;
}

/// Asks the terminal behind stdout, then falls back to `COLUMNS`.
#[derive(Default, Debug)]
pub struct TerminalWidthDetector {}

impl WidthDetector for TerminalWidthDetector {
    fn detect_width(&self) -> Option<usize> {
        if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() {
            return Some(width as usize);
        }

        std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
    }
}

/// Terminal dimensions, fixed for the lifetime of a reporter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub detected_width: usize,
    /// Upper bound on glyphs per line. `0` means "use the detected width".
    pub configured_columns: usize,
}

impl TerminalGeometry {
    pub fn new(detected_width: usize, configured_columns: usize) -> Self {
        Self {
            detected_width: detected_width.max(1),
            configured_columns,
        }
    }

    pub fn detect<D>(detector: &D, configured_columns: usize) -> Self
    where
        D: WidthDetector + ?Sized,
    {
        let detected_width = match detector.detect_width() {
            Some(width) if width > 0 => width,
            _ => {
                debug!(
                    "Unable to detect terminal width, using {}",
                    DEFAULT_TERMINAL_WIDTH
                );
                DEFAULT_TERMINAL_WIDTH
            }
        };

        Self::new(detected_width, configured_columns)
    }

    pub fn columns(&self) -> usize {
        if self.configured_columns == 0 {
            self.detected_width
        } else {
            self.configured_columns
        }
    }

    /// Number of glyphs that fit on a line next to a progress suffix of `suffix_len` characters.
    /// Never less than one.
    pub fn max_width(&self, suffix_len: usize) -> usize {
        self.detected_width
            .saturating_sub(suffix_len)
            .min(self.columns())
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_width_is_used() {
        let mut detector = MockWidthDetector::new();
        detector.expect_detect_width().times(1).returning(|| Some(120));

        let geometry = TerminalGeometry::detect(&detector, 0);

        assert_eq!(TerminalGeometry::new(120, 0), geometry);
        assert_eq!(120, geometry.columns());
    }

    #[test]
    fn test_falls_back_to_default_width() {
        let mut detector = MockWidthDetector::new();
        detector.expect_detect_width().returning(|| None);
        assert_eq!(
            DEFAULT_TERMINAL_WIDTH,
            TerminalGeometry::detect(&detector, 0).detected_width
        );

        let mut detector = MockWidthDetector::new();
        detector.expect_detect_width().returning(|| Some(0));
        assert_eq!(
            DEFAULT_TERMINAL_WIDTH,
            TerminalGeometry::detect(&detector, 0).detected_width
        );
    }

    #[test]
    fn test_max_width_leaves_room_for_suffix() {
        let geometry = TerminalGeometry::new(80, 0);
        assert_eq!(65, geometry.max_width(15));
    }

    #[test]
    fn test_max_width_respects_configured_columns() {
        let geometry = TerminalGeometry::new(80, 10);
        assert_eq!(10, geometry.columns());
        assert_eq!(10, geometry.max_width(15));
    }

    #[test]
    fn test_columns_wider_than_terminal_are_ignored() {
        let geometry = TerminalGeometry::new(40, 200);
        assert_eq!(25, geometry.max_width(15));
    }

    #[test]
    fn test_max_width_is_at_least_one() {
        let geometry = TerminalGeometry::new(10, 0);
        assert_eq!(1, geometry.max_width(15));
        assert_eq!(1, geometry.max_width(10));
        assert_eq!(1, TerminalGeometry::new(0, 0).max_width(0));
    }
}
