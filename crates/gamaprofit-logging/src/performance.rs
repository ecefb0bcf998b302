// ABOUTME: Wall-clock timing of named operations as tracing spans
// ABOUTME: PerfTimer records elapsed_ms on drop and can flag slow operations

use std::time::{Duration, Instant};
use tracing::{Level, Span, debug, field, span, warn};

/// Drop guard timing one operation.
///
/// The `perf` span gets an `elapsed_ms` field when the guard drops. With a
/// budget set, overrunning it logs a warning instead of a debug line.
pub struct PerfTimer {
    span: Span,
    operation: &'static str,
    started: Instant,
    budget: Option<Duration>,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            span: span!(Level::DEBUG, "perf", operation, elapsed_ms = field::Empty),
            operation,
            started: Instant::now(),
            budget: None,
        }
    }

    pub fn warn_after(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.span.record("elapsed_ms", elapsed_ms);

        let _entered = self.span.enter();
        match self.budget {
            Some(budget) if elapsed > budget => warn!(
                operation = self.operation,
                elapsed_ms,
                budget_ms = budget.as_secs_f64() * 1000.0,
                "Slow operation"
            ),
            _ => debug!(operation = self.operation, elapsed_ms, "Operation finished"),
        }
    }
}

/// Evaluate a block under a [`PerfTimer`].
///
/// `timed!("render", { ... })` or `timed!("render", budget: d, { ... })`.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:block) => {{
        let _timer = $crate::performance::PerfTimer::new($name);
        $body
    }};
    ($name:expr, budget: $budget:expr, $body:block) => {{
        let _timer = $crate::performance::PerfTimer::new($name).warn_after($budget);
        $body
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_elapsed_grows() {
        let timer = PerfTimer::new("render_page");
        thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_timed_returns_block_value() {
        assert_eq!(timed!("write_stylesheet", { 6 * 7 }), 42);
        let css = timed!("render_css", budget: Duration::from_secs(60), { String::from(":root {}") });
        assert_eq!(css, ":root {}");
    }

    #[test]
    fn test_within_budget_logs_debug() {
        let span = expect::span().named("perf");
        let (subscriber, handle) = subscriber::mock()
            .new_span(
                span.clone()
                    .with_fields(expect::field("operation").with_value(&"self_check")),
            )
            .enter(span.clone())
            .event(expect::event().at_level(Level::DEBUG))
            .exit(span.clone())
            .drop_span(span)
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            drop(PerfTimer::new("self_check"));
        });

        handle.assert_finished();
    }

    #[test]
    fn test_over_budget_warns() {
        let span = expect::span().named("perf");
        let (subscriber, handle) = subscriber::mock()
            .new_span(span.clone())
            .enter(span.clone())
            .event(
                expect::event()
                    .at_level(Level::WARN)
                    .with_fields(expect::msg("Slow operation")),
            )
            .exit(span.clone())
            .drop_span(span)
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("build").warn_after(Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
            drop(timer);
        });

        handle.assert_finished();
    }
}
