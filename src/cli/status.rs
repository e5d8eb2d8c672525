use anyhow::{Context, Result};

use crate::output;
use crate::provider::StackClient;
use crate::template::StackDefinition;

pub async fn run(definition: StackDefinition) -> Result<()> {
    let client = StackClient::connect(&definition).await?;

    output::header(&format!(
        "Status of {} in {}",
        definition.name, definition.region
    ));

    let Some(stack) = client.describe().await? else {
        output::warning("Stack does not exist");
        return Ok(());
    };

    let current = stack
        .stack_status()
        .map(|s| s.as_str().to_string())
        .context("Provider returned a stack without a status")?;

    println!("  Status: {}", output::styled_status(&current));
    if let Some(reason) = stack.stack_status_reason() {
        println!("  Reason: {}", reason);
    }

    let parameters = stack.parameters();
    if !parameters.is_empty() {
        output::info("Parameters");
        for parameter in parameters {
            output::kv(
                parameter.parameter_key().unwrap_or("-"),
                parameter.parameter_value().unwrap_or("-"),
            );
        }
    }

    let outputs = stack.outputs();
    if !outputs.is_empty() {
        output::info("Outputs");
        for entry in outputs {
            output::kv(
                entry.output_key().unwrap_or("-"),
                entry.output_value().unwrap_or("-"),
            );
        }
    }

    Ok(())
}
