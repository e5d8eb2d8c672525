use anyhow::Result;

use crate::error::StackDeployError;

use super::StackDefinition;

const KNOWN_CAPABILITIES: &[&str] = &[
    "CAPABILITY_IAM",
    "CAPABILITY_NAMED_IAM",
    "CAPABILITY_AUTO_EXPAND",
];

pub fn validate(definition: &StackDefinition) -> Result<()> {
    if definition.name.trim().is_empty() {
        return Err(StackDeployError::parse("name cannot be empty").into());
    }

    if definition.region.trim().is_empty() {
        return Err(StackDeployError::parse("region cannot be empty").into());
    }

    if definition.resources.is_empty() {
        return Err(StackDeployError::parse(format!(
            "stack '{}' declares no resources",
            definition.name
        ))
        .into());
    }

    for capability in &definition.capabilities {
        if !KNOWN_CAPABILITIES.contains(&capability.as_str()) {
            return Err(StackDeployError::parse(format!(
                "unknown capability '{}'. Supported: {}",
                capability,
                KNOWN_CAPABILITIES.join(", ")
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::template::StackDefinition;

    fn definition(input: &str) -> StackDefinition {
        serde_yaml::from_str(input).expect("fixture should deserialize")
    }

    #[test]
    fn accepts_valid_definition() {
        let def = definition(
            r#"
name: demo
region: us-east-1
capabilities: [CAPABILITY_IAM]
resources:
  Bucket:
    Type: AWS::S3::Bucket
"#,
        );
        assert!(validate(&def).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let def = definition(
            r#"
name: "  "
region: us-east-1
resources:
  Bucket:
    Type: AWS::S3::Bucket
"#,
        );
        let err = validate(&def).expect_err("should fail");
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_empty_resources() {
        let def = definition(
            r#"
name: demo
region: us-east-1
resources: {}
"#,
        );
        let err = validate(&def).expect_err("should fail");
        assert!(err.to_string().contains("no resources"));
    }

    #[test]
    fn rejects_unknown_capability() {
        let def = definition(
            r#"
name: demo
region: us-east-1
capabilities: [CAPABILITY_ROOT]
resources:
  Bucket:
    Type: AWS::S3::Bucket
"#,
        );
        let err = validate(&def).expect_err("should fail");
        assert!(err.to_string().contains("CAPABILITY_ROOT"));
    }
}
