use anyhow::Result;

use crate::output;
use crate::provider::StackClient;
use crate::template::StackDefinition;

pub async fn run(definition: StackDefinition) -> Result<()> {
    output::header(&format!("Validating template for {}", definition.name));

    let client = StackClient::connect(&definition).await?;
    let result = client.validate(&definition).await?;

    if let Some(description) = result.description() {
        output::info(description);
    }

    let parameters = result.parameters();
    if !parameters.is_empty() {
        output::info("Declared parameters");
        for parameter in parameters {
            output::kv(
                parameter.parameter_key().unwrap_or("-"),
                parameter.default_value().unwrap_or("(no default)"),
            );
        }
    }

    output::success("Template is valid");
    Ok(())
}
