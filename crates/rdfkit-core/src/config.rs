//! # Factory Configuration
//!
//! Policies a [`crate::Factory`] applies where RDF leaves a choice to the
//! implementation. The CORE never reads configuration from disk; the app
//! layer deserializes this struct and hands it over.

use serde::{Deserialize, Serialize};

/// Term construction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Accept relative IRI references such as `../relative` and `<>`.
    pub allow_relative_iris: bool,

    /// Reject blank node names containing `:` instead of accepting them.
    ///
    /// Accepted names never reach the canonical label either way.
    pub reject_colon_in_blank_node_names: bool,
}

impl FactoryConfig {
    /// Policies that only admit absolute IRIs and colon-free blank node names.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_relative_iris: false,
            reject_colon_in_blank_node_names: true,
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            allow_relative_iris: true,
            reject_colon_in_blank_node_names: false,
        }
    }
}
