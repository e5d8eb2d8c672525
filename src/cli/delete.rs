use anyhow::Result;
use std::time::Duration;

use crate::error::StackDeployError;
use crate::output;
use crate::provider::{poll, status, StackClient};
use crate::template::StackDefinition;

pub async fn run(definition: StackDefinition, interval: u64) -> Result<()> {
    output::header(&format!(
        "Deleting {} in {}",
        definition.name, definition.region
    ));

    let client = StackClient::connect(&definition).await?;

    if client.describe().await?.is_none() {
        output::success("Stack does not exist. Nothing to delete.");
        return Ok(());
    }

    let since = client.latest_event_marker().await?;
    client.delete().await?;
    output::success("Delete request accepted");

    match poll::until_terminal(&client, since, Duration::from_secs(interval)).await? {
        // Gone entirely, which is what a completed delete looks like.
        None => {}
        Some(terminal) if status::delete_succeeded(&terminal) => {}
        Some(terminal) => {
            output::error(&format!("Delete ended in {}", terminal));
            return Err(StackDeployError::provider(format!(
                "delete of '{}' ended in status {}",
                definition.name, terminal
            ))
            .into());
        }
    }

    println!();
    output::success(&format!("Stack {} deleted.", definition.name));
    Ok(())
}
