// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the player core and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player store consumes the ports, never the adapters
//!
//! # Example
//!
//! ```ignore
//! use vidlens::application::port::MetadataAnalyzer;
//! use vidlens::infrastructure::MediaInfoCli;
//!
//! // Infrastructure implements the port trait
//! let analyzer: Box<dyn MetadataAnalyzer> = Box::new(MediaInfoCli::default());
//! ```

pub mod port;
