//! # Core Application Logic
//!
//! This module contains Muse's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • preview sizing       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Mobile   │      │  Backend   │
//!     │  Adapter   │      │  Adapter   │      │  (noop)    │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the serializable `ComposerState` record
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`ratio`]: The fixed set of aspect-ratio presets
//! - [`layout`]: The pure preview-sizing function
//! - [`platform`]: The keyboard-inset table keyed by platform identity
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod layout;
pub mod platform;
pub mod ratio;
pub mod state;
