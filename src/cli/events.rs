use anyhow::Result;

use crate::output;
use crate::provider::{poll, StackClient};
use crate::template::StackDefinition;

pub async fn run(definition: StackDefinition, limit: usize) -> Result<()> {
    let client = StackClient::connect(&definition).await?;

    output::header(&format!(
        "Events for {} in {}",
        definition.name, definition.region
    ));

    if client.describe().await?.is_none() {
        output::warning("Stack does not exist");
        return Ok(());
    }

    let mut events = client.events(limit).await?;
    if events.is_empty() {
        output::warning("No events recorded");
        return Ok(());
    }

    // Provider returns newest first; show oldest first for reading order.
    events.reverse();
    for event in &events {
        println!("  {}", poll::format_event(event));
    }

    Ok(())
}
