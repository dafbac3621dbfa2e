//! Configuration layer for ddnss.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Host configuration file parsing ([`HostsFile`], [`HostEntry`])
//! - The resolved update request ([`UpdateRequest`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Config file** - The `["<host>"]` section matching the CLI host
//! 3. **Built-in defaults**
//!
//! The update key has no built-in default: if neither the CLI nor the
//! host's config section provides one, resolution fails before any
//! request is made.
//!
//! # Boolean Flag Semantics
//!
//! The `--ipv4` flag uses OR semantics: if set `true` in either CLI or
//! the host's config section, the result is `true`. The flag only
//! enables; it cannot override a config `ipv4 = true` back to `false`.
//!
//! # Config File
//!
//! The file is optional. A missing file resolves to an empty mapping,
//! while an unreadable or malformed file is a reported error - absence
//! and corruption are distinct conditions.

mod cli;
pub mod defaults;
mod error;
mod hosts;
mod resolved;


pub use cli::Cli;
pub use error::ConfigError;
pub use hosts::{HostEntry, HostsFile};
pub use resolved::UpdateRequest;
