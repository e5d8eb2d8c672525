use anyhow::{Context, Result};
use std::time::Duration;

use crate::error::StackDeployError;
use crate::output;
use crate::provider::{poll, status, DeployAction, StackClient};
use crate::template::StackDefinition;

pub async fn run(definition: StackDefinition, interval: u64) -> Result<()> {
    output::header(&format!(
        "Deploying {} to {}",
        definition.name, definition.region
    ));

    let client = StackClient::connect(&definition).await?;

    output::step(1, 3, "Submitting change request");
    let since = client.latest_event_marker().await?;
    let action = client.deploy(&definition).await?;

    match action {
        DeployAction::NoChanges => {
            output::success("No updates to perform. Stack is already up to date.");
            return Ok(());
        }
        DeployAction::Created => output::success("Create request accepted"),
        DeployAction::Updated => output::success("Update request accepted"),
    }

    output::step(2, 3, "Waiting for completion");
    let terminal = poll::until_terminal(&client, since, Duration::from_secs(interval))
        .await?
        .with_context(|| format!("Stack '{}' disappeared during deploy", definition.name))?;

    if !status::deploy_succeeded(&terminal) {
        output::error(&format!("Deploy ended in {}", terminal));
        return Err(StackDeployError::provider(format!(
            "deploy of '{}' ended in status {}",
            definition.name, terminal
        ))
        .into());
    }

    output::step(3, 3, "Collecting outputs");
    let stack = client
        .describe()
        .await?
        .with_context(|| format!("Stack '{}' not found after deploy", definition.name))?;

    let outputs = stack.outputs();
    if outputs.is_empty() {
        output::info("Stack has no outputs");
    } else {
        for entry in outputs {
            output::kv(
                entry.output_key().unwrap_or("-"),
                entry.output_value().unwrap_or("-"),
            );
        }
    }

    println!();
    output::success(&format!(
        "Deploy complete! {} is {}",
        definition.name,
        output::styled_status(&terminal)
    ));
    Ok(())
}
