use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StackDeployError;

mod validate;

/// A stack definition as authored in YAML: identity (name, region) plus the
/// CloudFormation template sections the tool sends to the provider.
/// Read-only at runtime.
#[derive(Debug, Deserialize, Serialize)]
pub struct StackDefinition {
    pub name: String,
    pub region: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub resources: serde_yaml::Mapping,
    pub outputs: Option<serde_yaml::Mapping>,
}

impl StackDefinition {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StackDeployError::usage(format!(
                "template file not found: {}",
                path.display()
            ))
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path.display()))?;

        let definition: Self = serde_yaml::from_str(&content)
            .map_err(StackDeployError::from)
            .with_context(|| format!("Failed to parse template file: {}", path.display()))?;

        validate::validate(&definition)?;

        Ok(definition)
    }

    /// Renders the provider-facing template document back to YAML for the
    /// create/update/validate API calls. Each parameter key is declared as a
    /// String parameter; values travel in the API request, not the body.
    pub fn template_body(&self) -> Result<String> {
        let mut doc = serde_yaml::Mapping::new();
        doc.insert(
            Value::from("AWSTemplateFormatVersion"),
            Value::from("2010-09-09"),
        );
        if let Some(description) = &self.description {
            doc.insert(Value::from("Description"), Value::from(description.clone()));
        }
        if !self.parameters.is_empty() {
            let mut declared = serde_yaml::Mapping::new();
            for key in self.parameters.keys() {
                let mut decl = serde_yaml::Mapping::new();
                decl.insert(Value::from("Type"), Value::from("String"));
                declared.insert(Value::from(key.clone()), Value::Mapping(decl));
            }
            doc.insert(Value::from("Parameters"), Value::Mapping(declared));
        }
        doc.insert(
            Value::from("Resources"),
            Value::Mapping(self.resources.clone()),
        );
        if let Some(outputs) = &self.outputs {
            doc.insert(Value::from("Outputs"), Value::Mapping(outputs.clone()));
        }

        serde_yaml::to_string(&doc).context("Failed to serialize template body")
    }
}
