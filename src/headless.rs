// Headless host - prints rotated log content to stdout
//
// With no screen there is nothing to scroll or cover, so the panel is always
// visible and every tick produces. Each produced block is written as plain
// text; the printer remembers the sink's append count so it only prints lines
// it hasn't seen.

use crate::config::Config;
use crate::rotator::render::{plain_text, LogLine, StyledRenderer};
use crate::rotator::scheduler::{self, AlwaysVisible, IntervalTicks};
use crate::rotator::sink::BoundedSink;
use crate::rotator::{Rotator, GREETING};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::ops::ControlFlow;
use tokio::sync::oneshot;

/// Writes lines appended to a sink since the previous call
pub struct FencePrinter<W: Write> {
    out: W,
    fence: u64,
}

impl<W: Write> FencePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, fence: 0 }
    }

    /// Sink append count at the last print
    pub fn fence(&self) -> u64 {
        self.fence
    }

    /// Print everything appended since the last call. Lines evicted in
    /// between are skipped. Returns the number of lines written.
    pub fn print_new(&mut self, sink: &BoundedSink<LogLine>) -> io::Result<usize> {
        let mut written = 0;
        for line in sink.since(self.fence) {
            writeln!(self.out, "{}", plain_text(line))?;
            written += 1;
        }
        self.fence = sink.appended();
        self.out.flush()?;
        Ok(written)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run the rotator against stdout until Ctrl-C, the tick limit, or a closed
/// stdout
pub async fn run_headless(config: &Config) -> Result<()> {
    let mut rotator = Rotator::new(config.capacity, StyledRenderer::default());
    let mut printer = FencePrinter::new(io::stdout());

    rotator.write(GREETING);
    if let Err(e) = printer.print_new(rotator.sink()) {
        return finish_output(Some(e));
    }

    let mut ticks = IntervalTicks::every(config.period);
    if let Some(limit) = config.tick_limit {
        ticks = ticks.with_limit(limit);
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                // Keep the sender alive; a dropped sender would stop the loop
                tracing::warn!("Could not listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    });

    tracing::info!(
        period_ms = ticks.period().as_millis() as u64,
        capacity = rotator.sink().capacity(),
        limit = ?config.tick_limit,
        "Running headless"
    );

    let mut write_error = None;
    let seen = scheduler::run(
        &mut ticks,
        &mut rotator,
        &AlwaysVisible,
        shutdown_rx,
        |rotator, produced| match printer.print_new(rotator.sink()) {
            Ok(printed) => {
                tracing::trace!(
                    tick = produced.tick,
                    selected = produced.kind.as_str(),
                    appended = produced.block_kind.as_str(),
                    lines = produced.lines,
                    printed,
                    "Printed block"
                );
                ControlFlow::Continue(())
            }
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        },
    )
    .await;

    tracing::info!(
        ticks = seen,
        produced = rotator.counter(),
        printed = printer.fence(),
        "Headless run finished"
    );

    finish_output(write_error)
}

/// Map the write error that stopped output, if any, to the run's result
fn finish_output(write_error: Option<io::Error>) -> Result<()> {
    match write_error {
        // Downstream closed the pipe (e.g. `| head`): a normal way to stop
        Some(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed");
            Ok(())
        }
        Some(e) => Err(e).context("Failed to write to stdout"),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .expect("utf-8 output")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_prints_only_new_lines() {
        let mut rotator = Rotator::new(100, StyledRenderer::default());
        let mut printer = FencePrinter::new(Vec::new());

        rotator.write(GREETING);
        assert_eq!(printer.print_new(rotator.sink()).unwrap(), 1);

        rotator.tick(&AlwaysVisible);
        assert_eq!(printer.print_new(rotator.sink()).unwrap(), 13);
        assert_eq!(printer.print_new(rotator.sink()).unwrap(), 0);
        assert_eq!(printer.fence(), 14);

        let lines = printed(printer.into_inner());
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], GREETING);
        assert_eq!(lines[1], "A Rich Table");
    }

    #[test]
    fn test_evicted_lines_are_skipped() {
        let mut rotator = Rotator::new(5, StyledRenderer::default());
        let mut printer = FencePrinter::new(Vec::new());

        // Table tick appends 13 lines into a sink of 5
        rotator.tick(&AlwaysVisible);
        assert_eq!(printer.print_new(rotator.sink()).unwrap(), 5);
        assert_eq!(printer.fence(), 13);

        let lines = printed(printer.into_inner());
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn test_trace_block_prints_as_text() {
        let mut rotator = Rotator::new(100, StyledRenderer::default());
        rotator.produce();
        let mut printer = FencePrinter::new(Vec::new());
        printer.print_new(rotator.sink()).unwrap();

        rotator.produce();
        printer.print_new(rotator.sink()).unwrap();

        let lines = printed(printer.into_inner());
        let trace: Vec<_> = lines.iter().skip(13).collect();
        assert_eq!(trace[0], "A Rich Traceback");
        assert_eq!(trace[1], "Traceback (most recent call last):");
        assert!(trace.last().unwrap().starts_with("GenerationFault: "));
    }

    /// Writer whose every write fails with `kind`
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_pipe_on_greeting_is_clean_exit() {
        let mut rotator = Rotator::new(10, StyledRenderer::default());
        rotator.write(GREETING);
        let mut printer = FencePrinter::new(FailingWriter(io::ErrorKind::BrokenPipe));

        let err = printer
            .print_new(rotator.sink())
            .expect_err("write should fail");
        assert!(finish_output(Some(err)).is_ok());
    }

    #[test]
    fn test_other_write_errors_are_reported() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let result = finish_output(Some(err));

        let message = format!("{:#}", result.expect_err("should fail"));
        assert!(message.contains("Failed to write to stdout"), "{message}");
        assert!(finish_output(None).is_ok());
    }
}
