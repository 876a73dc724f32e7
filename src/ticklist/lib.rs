//! # Ticklist Architecture
//!
//! Ticklist is a **UI-agnostic checklist core**. It keeps two lists, the todo
//! list and the pass list of completed items, and tells a UI exactly which
//! rows to draw and what a click on any of them means. The bundled binary is
//! one such UI; a desktop window would be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (cli/, wired by main.rs)                          │
//! │  - Draws rows, shows prompts, turns input into clicks       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, click.rs, session.rs)                   │
//! │  - Resolves clicks into prompt requests                     │
//! │  - Applies prompt responses                                 │
//! │  - Keeps filters and the last view in a Session             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, lists.rs, view.rs)           │
//! │  - Add, edit, complete, reopen, refresh, filter             │
//! │  - Sorting, filtering and row projection                    │
//! │  - Every change is saved before the command returns        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, config.rs)                          │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rows, Positions and Ids
//!
//! A UI only ever sees *visible rows*. The view keeps an
//! [`view::IndexMapping`] per list that maps each visible row back to a
//! storage position, and every item carries an [`model::ItemId`] for the
//! session. Clicks are answered with prompts that carry the id, so the
//! eventual change reaches the intended item even if the lists were re-sorted
//! in between.
//!
//! ## Failure Model
//!
//! Nothing in the library panics or exits. Bad filter patterns are rejected
//! and the previous one kept; stale clicks are no-ops. A data file that is
//! not valid JSON means starting from seed data, while one that cannot be
//! read at all fails the open so it is never overwritten. A failed save is
//! reported in the command's messages while memory stays authoritative.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`click`]: Click resolution and the prompt request/response types
//! - [`commands`]: Business logic for each operation
//! - [`lists`]: The in-memory list store
//! - [`view`]: Sorting, filtering and row projection
//! - [`session`]: Filters and the last rendered view
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `ItemId`, `ListKind`)
//! - [`config`]: Configuration file
//! - [`init`]: Startup wiring from a config path to a ready API
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod click;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod lists;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
