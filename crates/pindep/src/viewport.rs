use console::Term;

const DEFAULT_WIDTH: u16 = 80;
const COLUMNS_ENV: &str = "COLUMNS";

/// Named width thresholds, in terminal columns.
///
/// The usual web screen sizes (640 and 1024 pixels) at eight pixels per
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Lg,
}

impl Breakpoint {
    #[must_use]
    pub fn min_width(self) -> u16 {
        match self {
            Self::Sm => 80,
            Self::Lg => 128,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
}

impl Viewport {
    #[must_use]
    pub fn is_below(self, breakpoint: Breakpoint) -> bool {
        self.width < breakpoint.min_width()
    }

    /// Number of result cells per line.
    #[must_use]
    pub fn grid_columns(self) -> usize {
        if self.is_below(Breakpoint::Sm) {
            1
        } else if self.is_below(Breakpoint::Lg) {
            2
        } else {
            4
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSource {
    Fixed(u16),
    Terminal,
}

impl WidthSource {
    #[must_use]
    pub fn from_flag(width: Option<u16>) -> Self {
        width.map_or(Self::Terminal, Self::Fixed)
    }

    fn measure(self) -> Viewport {
        match self {
            Self::Fixed(width) => Viewport { width },
            Self::Terminal => {
                let columns = std::env::var(COLUMNS_ENV).ok();
                Viewport {
                    width: terminal_width(Term::stdout().size_checked(), columns.as_deref()),
                }
            }
        }
    }
}

fn terminal_width(size: Option<(u16, u16)>, columns_env: Option<&str>) -> u16 {
    size.map(|(_rows, cols)| cols)
        .filter(|cols| *cols > 0)
        .or_else(|| columns_env.and_then(|value| value.trim().parse().ok()))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Whether the viewport is narrower than a breakpoint, recomputed on resize.
#[derive(Debug)]
pub struct BreakpointSignal {
    breakpoint: Breakpoint,
    source: WidthSource,
    viewport: Viewport,
}

impl BreakpointSignal {
    #[must_use]
    pub fn new(breakpoint: Breakpoint, source: WidthSource) -> Self {
        Self {
            breakpoint,
            source,
            viewport: source.measure(),
        }
    }

    #[must_use]
    pub fn is_below(&self) -> bool {
        self.viewport.is_below(self.breakpoint)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Re-measures the width. Returns whether the signal flipped.
    pub fn refresh(&mut self) -> bool {
        let was_below = self.is_below();
        self.viewport = self.source.measure();

        let changed = was_below != self.is_below();
        if changed {
            tracing::debug!(width = self.viewport.width, below = !was_below, "breakpoint crossed");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_ordered_by_width() {
        assert!(Breakpoint::Sm < Breakpoint::Lg);
        assert!(Breakpoint::Sm.min_width() < Breakpoint::Lg.min_width());
    }

    #[test]
    fn grid_columns_follow_breakpoints() {
        assert_eq!(Viewport { width: 40 }.grid_columns(), 1);
        assert_eq!(Viewport { width: 79 }.grid_columns(), 1);
        assert_eq!(Viewport { width: 80 }.grid_columns(), 2);
        assert_eq!(Viewport { width: 127 }.grid_columns(), 2);
        assert_eq!(Viewport { width: 128 }.grid_columns(), 4);
    }

    #[test]
    fn terminal_size_wins_over_columns_env() {
        assert_eq!(terminal_width(Some((24, 132)), Some("60")), 132);
    }

    #[test]
    fn columns_env_used_without_terminal() {
        assert_eq!(terminal_width(None, Some(" 100 ")), 100);
    }

    #[test]
    fn zero_sized_terminal_is_ignored() {
        assert_eq!(terminal_width(Some((0, 0)), Some("90")), 90);
    }

    #[test]
    fn default_width_when_nothing_is_known() {
        assert_eq!(terminal_width(None, Some("wide")), DEFAULT_WIDTH);
        assert_eq!(terminal_width(None, None), DEFAULT_WIDTH);
    }

    #[test]
    fn fixed_width_signal() {
        let narrow = BreakpointSignal::new(Breakpoint::Sm, WidthSource::Fixed(60));
        let wide = BreakpointSignal::new(Breakpoint::Sm, WidthSource::Fixed(120));

        assert!(narrow.is_below());
        assert!(!wide.is_below());
    }

    #[test]
    fn refresh_with_stable_width_reports_no_change() {
        let mut signal = BreakpointSignal::new(Breakpoint::Sm, WidthSource::Fixed(60));

        assert!(!signal.refresh());
        assert_eq!(signal.viewport(), Viewport { width: 60 });
    }

    #[test]
    fn width_flag_selects_source() {
        assert_eq!(WidthSource::from_flag(Some(90)), WidthSource::Fixed(90));
        assert_eq!(WidthSource::from_flag(None), WidthSource::Terminal);
    }
}
