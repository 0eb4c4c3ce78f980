//! Content selection for the rotating log panel
//!
//! Each produced tick maps to one of three content kinds, cycling with period
//! three. Generators return `Result<ContentBlock, GenerationFault>`; the
//! selector turns any fault into an error-trace block, so selection itself
//! never fails.

use super::samples::{CODE, CODE_LANGUAGE, FAULT_DEMO_LAPS, SWIMMERS_CSV, WINNING_TIME_CENTIS};
use anyhow::{anyhow, bail, Context};
use std::fmt;

/// `"<file>:<line> in <name>"`, used as a context layer so fault chains read
/// like a call stack.
macro_rules! frame {
    ($name:literal) => {
        concat!(file!(), ":", line!(), " in ", $name)
    };
}

/// The three kinds of demonstration content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    CodeSample,
    Table,
    ErrorTrace,
}

impl ContentKind {
    /// Pick the kind for a tick counter value: `n % 3` indexes
    /// `[CodeSample, Table, ErrorTrace]`, so tick 1 is a table.
    pub fn for_tick(tick: u64) -> Self {
        match tick % 3 {
            0 => Self::CodeSample,
            1 => Self::Table,
            _ => Self::ErrorTrace,
        }
    }

    /// Caption line written above the block
    pub fn caption(self) -> &'static str {
        match self {
            Self::CodeSample => "Syntax highlighted code",
            Self::Table => "A Rich Table",
            Self::ErrorTrace => "A Rich Traceback",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CodeSample => "code",
            Self::Table => "table",
            Self::ErrorTrace => "trace",
        }
    }
}

/// One rendered-once unit of demo content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    CodeSample {
        text: String,
        language: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    ErrorTrace {
        message: String,
        /// Call frames, outermost first (most recent call last)
        frames: Vec<String>,
    },
}

impl ContentBlock {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::CodeSample { .. } => ContentKind::CodeSample,
            Self::Table { .. } => ContentKind::Table,
            Self::ErrorTrace { .. } => ContentKind::ErrorTrace,
        }
    }

    pub fn caption(&self) -> &'static str {
        self.kind().caption()
    }
}

/// A fault raised while building a content block, captured as a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFault {
    /// Root cause
    pub message: String,
    /// Context layers around the root cause, outermost first
    pub frames: Vec<String>,
}

impl GenerationFault {
    /// Convert into the block that is shown in place of the failed content
    pub fn into_block(self) -> ContentBlock {
        ContentBlock::ErrorTrace {
            message: self.message,
            frames: self.frames,
        }
    }
}

impl From<anyhow::Error> for GenerationFault {
    fn from(err: anyhow::Error) -> Self {
        // chain() yields outermost context first and the root cause last
        let mut frames: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
        let message = frames.pop().unwrap_or_default();
        Self { message, frames }
    }
}

impl fmt::Display for GenerationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(innermost) = self.frames.last() {
            write!(f, " (at {})", innermost)?;
        }
        Ok(())
    }
}

impl std::error::Error for GenerationFault {}

/// Output of the selector for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Kind chosen by the counter
    pub kind: ContentKind,
    /// Block to append; an `ErrorTrace` if the chosen generator faulted
    pub block: ContentBlock,
}

/// Choose and build the content for a tick. Never fails.
pub fn select(tick: u64) -> Selection {
    let kind = ContentKind::for_tick(tick);
    let block = generate(kind).unwrap_or_else(|fault| {
        if kind != ContentKind::ErrorTrace {
            tracing::warn!(kind = kind.as_str(), %fault, "Content generator faulted");
        }
        fault.into_block()
    });

    Selection { kind, block }
}

/// Run the generator for `kind`
pub fn generate(kind: ContentKind) -> Result<ContentBlock, GenerationFault> {
    match kind {
        ContentKind::CodeSample => code_sample(),
        ContentKind::Table => swimmer_table(),
        ContentKind::ErrorTrace => error_trace(),
    }
}

/// Fixed source snippet tagged with its language
pub fn code_sample() -> Result<ContentBlock, GenerationFault> {
    Ok(ContentBlock::CodeSample {
        text: CODE.to_string(),
        language: CODE_LANGUAGE.to_string(),
    })
}

/// The embedded swimmer results as a table
pub fn swimmer_table() -> Result<ContentBlock, GenerationFault> {
    let (header, rows) = parse_csv(SWIMMERS_CSV).context(frame!("swimmer_table"))?;
    Ok(ContentBlock::Table { header, rows })
}

/// Deliberately divide by zero and hand back the captured fault
///
/// The lap count is fixed at zero, so this always returns `Err`; the selector
/// renders that fault as the trace block.
pub fn error_trace() -> Result<ContentBlock, GenerationFault> {
    Err(pace_fault(FAULT_DEMO_LAPS))
}

/// Fault from computing the pace over `laps`. A pace that computes is itself
/// reported as a fault, so the trace generator only ever yields traces.
fn pace_fault(laps: u32) -> GenerationFault {
    let err = match pace_report(WINNING_TIME_CENTIS, laps) {
        Err(e) => e,
        Ok(report) => anyhow!("expected a fault, computed {report}"),
    };
    err.context(frame!("error_trace")).into()
}

fn pace_report(total_centis: u32, laps: u32) -> anyhow::Result<String> {
    let pace = lap_pace(total_centis, laps).context(frame!("pace_report"))?;
    Ok(format!("{}.{:02}s per lap", pace / 100, pace % 100))
}

fn lap_pace(total_centis: u32, laps: u32) -> anyhow::Result<u32> {
    total_centis
        .checked_div(laps)
        .ok_or_else(|| anyhow!("division by zero"))
        .context(frame!("lap_pace"))
}

/// Parse comma-separated text into a header and data rows
///
/// Fields are trimmed and blank lines skipped. Every row must have as many
/// fields as the header. No quoting support: the embedded sample needs none.
pub fn parse_csv(text: &str) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut records = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let fields = line.split(',').map(|field| field.trim().to_string());
            (idx + 1, fields.collect::<Vec<_>>())
        });

    let Some((_, header)) = records.next() else {
        bail!("table has no header row");
    };

    let mut rows = Vec::new();
    for (line, fields) in records {
        if fields.len() != header.len() {
            bail!(
                "row {} has {} fields, expected {}",
                line,
                fields.len(),
                header.len()
            );
        }
        rows.push(fields);
    }

    Ok((header, rows))
}
