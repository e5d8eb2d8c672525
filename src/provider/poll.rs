use anyhow::{Context, Result};
use aws_sdk_cloudformation::primitives::DateTime;
use aws_sdk_cloudformation::types::StackEvent;
use std::time::Duration;
use tracing::debug;

use crate::output;

use super::{status, StackClient};

/// Orders events without comparing provider timestamps directly.
pub type EventMarker = (i64, u32);

pub fn marker(timestamp: &DateTime) -> EventMarker {
    (timestamp.secs(), timestamp.subsec_nanos())
}

// One page per poll; a burst of more than this many events within a single
// interval is truncated to the newest ones.
const EVENT_PAGE: usize = 25;

/// Polls describe-stacks until the stack reaches a terminal status, streaming
/// events newer than `since` as they appear. One call in flight at a time,
/// fixed sleep between polls, no retries.
///
/// Returns the terminal status, or None when the stack no longer exists
/// (normal end state for a delete).
pub async fn until_terminal(
    client: &StackClient,
    since: Option<EventMarker>,
    interval: Duration,
) -> Result<Option<String>> {
    let spinner = output::create_spinner(&format!("Waiting for {}...", client.stack_name()));
    let mut last_seen = since;

    loop {
        let Some(stack) = client.describe().await? else {
            spinner.finish_and_clear();
            return Ok(None);
        };

        let current = stack
            .stack_status()
            .map(|s| s.as_str().to_string())
            .context("Provider returned a stack without a status")?;

        // The stack can vanish between describe and the event fetch while a
        // delete is finishing; that counts as gone, not as an error.
        let Some(events) = client.try_events(EVENT_PAGE).await? else {
            spinner.finish_and_clear();
            return Ok(None);
        };
        let mut fresh: Vec<&StackEvent> = events
            .iter()
            .filter(|event| match (event.timestamp(), last_seen) {
                (Some(ts), Some(seen)) => marker(ts) > seen,
                (Some(_), None) => true,
                (None, _) => false,
            })
            .collect();
        fresh.reverse();

        for event in fresh {
            if let Some(ts) = event.timestamp() {
                last_seen = Some(last_seen.map_or(marker(ts), |seen| seen.max(marker(ts))));
            }
            let line = format_event(event);
            spinner.suspend(|| println!("  {}", line));
        }

        spinner.set_message(format!(
            "{}: {}",
            client.stack_name(),
            output::styled_status(&current)
        ));

        if status::is_terminal(&current) {
            spinner.finish_and_clear();
            return Ok(Some(current));
        }

        debug!(status = %current, "stack not yet terminal");
        tokio::time::sleep(interval).await;
    }
}

pub fn format_event(event: &StackEvent) -> String {
    let time = event
        .timestamp()
        .map(format_time)
        .unwrap_or_else(|| "--:--:--".to_string());
    let resource_status = event
        .resource_status()
        .map(|s| s.as_str())
        .unwrap_or("UNKNOWN");
    let logical_id = event.logical_resource_id().unwrap_or("-");
    let resource_type = event.resource_type().unwrap_or("-");

    let mut line = format!(
        "{} {:<24} {} ({})",
        output::dim(&time),
        output::styled_status(resource_status),
        logical_id,
        resource_type
    );
    if let Some(reason) = event.resource_status_reason() {
        line.push_str(&format!(" {}", output::dim(reason)));
    }
    line
}

fn format_time(timestamp: &DateTime) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::{format_event, format_time, marker};
    use aws_sdk_cloudformation::primitives::DateTime;
    use aws_sdk_cloudformation::types::{ResourceStatus, StackEvent};

    #[test]
    fn markers_order_by_seconds_then_nanos() {
        let earlier = marker(&DateTime::from_secs_and_nanos(100, 5));
        let later_nanos = marker(&DateTime::from_secs_and_nanos(100, 6));
        let later_secs = marker(&DateTime::from_secs_and_nanos(101, 0));

        assert!(earlier < later_nanos);
        assert!(later_nanos < later_secs);
    }

    #[test]
    fn formats_epoch_timestamp_as_utc_clock() {
        // 2021-01-01T12:30:45Z
        let ts = DateTime::from_secs_and_nanos(1_609_504_245, 0);
        assert_eq!(format_time(&ts), "12:30:45");
    }

    #[test]
    fn event_line_includes_resource_and_reason() {
        let event = StackEvent::builder()
            .timestamp(DateTime::from_secs_and_nanos(1_609_504_245, 0))
            .resource_status(ResourceStatus::CreateFailed)
            .logical_resource_id("Bucket")
            .resource_type("AWS::S3::Bucket")
            .resource_status_reason("Access Denied")
            .build();

        let line = format_event(&event);
        assert!(line.contains("CREATE_FAILED"));
        assert!(line.contains("Bucket"));
        assert!(line.contains("AWS::S3::Bucket"));
        assert!(line.contains("Access Denied"));
    }
}
