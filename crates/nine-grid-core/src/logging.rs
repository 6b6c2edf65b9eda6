//! Logging and debugging facilities for Nine Grid.
//!
//! Nine Grid uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("nine_grid=debug")
//!     .init();
//! ```
//!
//! [`SlotTreeDebug`] renders the slots a grid currently owns, which is handy
//! when a cell lands somewhere unexpected:
//!
//! ```ignore
//! let debug = SlotTreeDebug::new();
//! println!("{}", debug.format(grid.slots()));
//! ```

use std::fmt::Write as FmtWrite;

use crate::slot::SlotArena;

/// Span names used for tracing.
pub mod span_names {
    /// Provider attach and slot creation.
    pub const ATTACH: &str = "nine_grid::attach";
    /// Measurement pass.
    pub const MEASURE: &str = "nine_grid::measure";
    /// Layout and bind pass.
    pub const LAYOUT: &str = "nine_grid::layout";
}

/// Target names for log filtering.
pub mod targets {
    /// Root target.
    pub const ROOT: &str = "nine_grid";
    /// Engine state transitions.
    pub const ENGINE: &str = "nine_grid::engine";
    /// Provider capability queries and optional-feature fallbacks.
    pub const PROVIDER: &str = "nine_grid::provider";
    /// Configuration loading.
    pub const CONFIG: &str = "nine_grid::config";
    /// Image request queue.
    pub const IMAGE: &str = "nine_grid::image";
    /// Timing spans around attach, measure and layout.
    pub const PERF: &str = "nine_grid::perf";
}

/// Style options for slot dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// One slot per line, no branches.
    Compact,
}

/// Configuration for slot dumps.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    /// Whether to show raw slot ids.
    pub show_ids: bool,
    /// Whether to show measured sizes next to rectangles.
    pub show_measured: bool,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_measured: false,
        }
    }
}

impl TreeFormatOptions {
    /// Everything on.
    pub fn detailed() -> Self {
        Self {
            show_measured: true,
            ..Default::default()
        }
    }

    /// Kinds and rectangles only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_measured: false,
            ..Default::default()
        }
    }
}

/// Renders the contents of a [`SlotArena`] as a small tree.
#[derive(Debug, Clone, Default)]
pub struct SlotTreeDebug {
    options: TreeFormatOptions,
}

impl SlotTreeDebug {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every slot in child order.
    pub fn format<V>(&self, slots: &SlotArena<V>) -> String {
        let mut output = String::new();
        writeln!(output, "Slots ({} total):", slots.len()).expect("write to String");

        if slots.is_empty() {
            output.push_str("  (empty)\n");
            return output;
        }

        let count = slots.len();
        for (index, (id, slot)) in slots.iter().enumerate() {
            output.push_str(self.prefix(index + 1 == count));
            write!(output, "#{index} {}", slot.kind().name()).expect("write to String");

            if self.options.show_ids {
                write!(output, " [{}]", id.as_raw()).expect("write to String");
            }

            match slot.rect() {
                Some(rect) => write!(output, " {rect}").expect("write to String"),
                None => output.push_str(" (unplaced)"),
            }

            if self.options.show_measured {
                let measured = slot.measured_size();
                write!(output, " measured {}x{}", measured.width, measured.height)
                    .expect("write to String");
            }

            output.push('\n');
        }

        output
    }

    fn prefix(&self, is_last: bool) -> &'static str {
        match (self.options.style, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
            (TreeStyle::Compact, _) => "- ",
        }
    }
}

/// A guard that keeps a tracing span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new span for `name`; it closes when the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::slot::SlotKind;

    fn sample() -> SlotArena<()> {
        let mut arena = SlotArena::new();
        let first = arena.push(SlotKind::Item, ());
        arena.push(SlotKind::Overlay, ());
        arena
            .get_mut(first)
            .unwrap()
            .set_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        arena
    }

    #[test]
    fn test_format_empty() {
        let output = SlotTreeDebug::new().format(&SlotArena::<()>::new());
        assert!(output.contains("Slots (0 total)"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_slots() {
        let output = SlotTreeDebug::new().format(&sample());
        assert!(output.contains("#0 item"));
        assert!(output.contains("(0, 0) 10x10"));
        assert!(output.contains("#1 overlay"));
        assert!(output.contains("(unplaced)"));
    }

    #[test]
    fn test_format_minimal_ascii() {
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        };
        let output = SlotTreeDebug::with_options(options).format(&sample());
        assert!(output.contains("+-- #0 item"));
        assert!(output.contains("`-- #1 overlay"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
        grid_debug!(slots = 2, "inside perf span");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_macros_log_under_root_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            grid_warn!("overlay missing");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains(&format!("{}: overlay missing", targets::ROOT)));
        assert!(output.contains("WARN"));
    }
}
