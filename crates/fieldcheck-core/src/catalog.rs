//! Custom message catalogs loaded from JSON or YAML
//!
//! A catalog keeps custom messages outside the code, e.g. one file per
//! locale. Its shape is the same as [`Messages`]: a field key mapped to an
//! ordered list of messages, where an empty string keeps the default message.
//!
//! ```yaml
//! name:
//!   - "用户名必须存在"
//!   - ""
//! age:
//!   - "年龄不能小于 10"
//! ```
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConfigError, ConfigResult};
use crate::rules::Messages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: Messages,
}

impl MessageCatalog {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load a catalog file, picking the format from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&source)?;
        debug!(path = %path.display(), fields = catalog.len(), "loaded message catalog");
        Ok(catalog)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.messages.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Overlay another catalog; its entries replace ours key by key
    pub fn extend(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    pub fn into_messages(self) -> Messages {
        self.messages
    }
}

impl From<Messages> for MessageCatalog {
    fn from(messages: Messages) -> Self {
        Self::new(messages)
    }
}

impl From<MessageCatalog> for Messages {
    fn from(catalog: MessageCatalog) -> Self {
        catalog.messages
    }
}
