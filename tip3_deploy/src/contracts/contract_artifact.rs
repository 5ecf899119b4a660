use crate::errors::{DeployError, DeployResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Parsed once, shared between all messages to the same contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAbi {
    name: String,
    json: String,
    functions: HashSet<String>,
}

impl ContractAbi {
    pub fn new<N: Into<String>>(name: N, json: &str) -> DeployResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Some(functions) = value.get("functions").and_then(Value::as_array) else {
            return Err(DeployError::Config("ABI has no 'functions' array".to_string()));
        };
        let functions = functions
            .iter()
            .filter_map(|func| func.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        Ok(Self {
            name: name.into(),
            json: json.to_string(),
            functions,
        })
    }

    pub fn from_path<N: Into<String>, P: AsRef<Path>>(name: N, path: P) -> DeployResult<Self> {
        Self::new(name, &read_artifact_file(path.as_ref())?)
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn json(&self) -> &str { &self.json }

    pub fn has_function(&self, function: &str) -> bool { self.functions.contains(function) }

    pub fn ensure_function(&self, function: &str) -> DeployResult<()> {
        if self.has_function(function) {
            return Ok(());
        }
        Err(DeployError::UnknownAbiFunction {
            contract: self.name.clone(),
            function: function.to_string(),
        })
    }
}

/// ABI plus contract image. Image is required only to deploy.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: Arc<ContractAbi>,
    pub tvc: Option<String>,
}

impl ContractArtifact {
    pub fn new(abi: ContractAbi, tvc: Option<String>) -> Self { Self { abi: Arc::new(abi), tvc } }

    pub fn name(&self) -> &str { self.abi.name() }

    /// `tvc_path` file may hold either raw image bytes or its base64 form
    pub fn from_paths<N: Into<String>>(name: N, abi_path: &Path, tvc_path: Option<&Path>) -> DeployResult<Self> {
        let abi = ContractAbi::from_path(name, abi_path)?;
        let tvc = match tvc_path {
            Some(path) => Some(read_base64_file(path)?),
            None => None,
        };
        Ok(Self::new(abi, tvc))
    }

    pub fn tvc(&self) -> DeployResult<&str> {
        match &self.tvc {
            Some(tvc) => Ok(tvc),
            None => Err(DeployError::MissingContractImage(self.name().to_string())),
        }
    }
}

/// Reads a base64 text file, or base64-encodes a binary one
pub fn read_base64_file(path: &Path) -> DeployResult<String> {
    let bytes = std::fs::read(path).map_err(|err| DeployError::ArtifactRead {
        path: path.to_path_buf(),
        err,
    })?;
    if let Ok(text) = std::str::from_utf8(&bytes) {
        let text = text.trim();
        if !text.is_empty() && STANDARD.decode(text).is_ok() {
            return Ok(text.to_string());
        }
    }
    Ok(STANDARD.encode(bytes))
}

fn read_artifact_file(path: &Path) -> DeployResult<String> {
    std::fs::read_to_string(path).map_err(|err| DeployError::ArtifactRead {
        path: path.to_path_buf(),
        err,
    })
}
