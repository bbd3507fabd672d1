use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use taskaudit_domain::RunnerEvent;

use crate::context::RunContext;
use crate::error::CallbackError;
use crate::reporter::{Reporter, RunStats};

/// Drive `reporter` from a stream of newline-delimited JSON events.
///
/// Events are handled strictly in order; the next line is not read until
/// the previous event is fully reported. Blank lines are skipped. Stops at
/// end of input or when `token` is cancelled, whichever comes first.
///
/// # Errors
/// Returns the first read, decode, or report error. Nothing after the
/// failing line is processed.
pub async fn run_event_stream<R>(
    reader: R,
    reporter: &mut Reporter,
    token: CancellationToken,
) -> Result<RunStats, CallbackError>
where
    R: AsyncBufRead + Unpin,
{
    let mut ctx = RunContext::new();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    loop {
        let line = tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::warn!(line = line_no, "event stream cancelled");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };
        line_no += 1;

        if line.trim().is_empty() {
            continue;
        }

        let event: RunnerEvent = serde_json::from_str(&line).map_err(|source| {
            CallbackError::Decode {
                line: line_no,
                source,
            }
        })?;
        reporter.handle(&mut ctx, &event).await?;
    }

    let stats = reporter.stats();
    tracing::info!(
        events = stats.events,
        reported = stats.reported,
        dropped = stats.dropped,
        "event stream finished"
    );
    Ok(stats)
}
