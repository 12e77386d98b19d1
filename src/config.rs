//! Approval configuration loading
//!
//! The approve subcommand reads a JSON document naming the authors whose
//! pull requests may be auto-approved. The file lives in the repository
//! (conventionally `.github/auto-approve-config.json`) and is loaded once
//! per run. A missing or malformed file terminates the run; the invoking
//! scheduler surfaces the failure.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Review author used by GitHub Actions workflows
const DEFAULT_BOT_LOGIN: &str = "github-actions[bot]";

/// Configuration for the approval policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalConfig {
    /// Authors whose pull requests may be auto-approved
    pub authorized_users: BTreeSet<String>,
    /// Login the automation's own reviews appear under
    #[serde(default = "default_bot_login")]
    pub bot_login: String,
}

fn default_bot_login() -> String {
    DEFAULT_BOT_LOGIN.to_string()
}

/// Load the approval configuration from a JSON file
pub fn load_approval_config(path: &Path) -> Result<ApprovalConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: ApprovalConfig = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}
