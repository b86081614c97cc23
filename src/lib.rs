//! # Virtmap Architecture
//!
//! Virtmap is a **UI-agnostic library** for editing Postfix-style virtual
//! alias tables: line-oriented files that mix `from to` mapping entries with
//! free-form comments and blank lines. Comment and blank lines are preserved
//! byte-for-byte across an edit; only the entries a caller explicitly mutates
//! change on disk.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - VirtualFile<G>: one handle per mapping file              │
//! │  - Wires load/save through the gateway, mutations through   │
//! │    the store; returns structured Result types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (store.rs, parse.rs, serialize.rs)                  │
//! │  - Pure logic: text ⇄ records, append/update/delete         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway (gateway/)                                         │
//! │  - Abstract FileGateway trait                               │
//! │  - FsGateway (production), InMemoryGateway (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Engine
//!
//! [`parse::parse`] and [`serialize::serialize`] are total pure functions,
//! and [`store::RecordStore`] is a plain in-memory state machine. The only
//! code that touches the filesystem is the gateway, which keeps the engine
//! trivially testable and lets the same core back any surface.
//!
//! ## The Index System
//!
//! Records are addressed by their 0-based line position. Indices are
//! positional only: a delete renumbers everything after it, so a previously
//! fetched index may point at a different record afterwards. Re-fetch after
//! any structural mutation.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::VirtualFile`] facade—entry point for all operations
//! - [`store`]: The mutation engine owning the ordered record sequence
//! - [`parse`] / [`serialize`]: Text format, as inverse pure functions
//! - [`model`]: Core data types ([`model::Record`], [`model::RecordKind`])
//! - [`gateway`]: File access abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod gateway;
pub mod model;
pub mod parse;
pub mod serialize;
pub mod store;
