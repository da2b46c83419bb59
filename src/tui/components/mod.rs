//! # TUI Components
//!
//! All UI components for the composer screen.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Header`: badge, title, subtitle, status readout
//! - `Preview`: the square placeholder block, sized by the caller
//! - `GenerateButton`: the call to action with its press flash
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local presentation state and emit events:
//! - `PromptInput`: multiline text field with caret and scroll state
//! - `RatioChipsState`: chip row keyboard cursor (persistent state +
//!   transient `RatioChips` render wrapper)
//!
//! Each component file co-locates its state types, event types, rendering,
//! event handling, and tests, so one file tells the whole story.

pub mod generate_button;
pub mod header;
pub mod preview;
pub mod prompt_input;
pub mod ratio_chips;

pub use generate_button::GenerateButton;
pub use header::Header;
pub use preview::Preview;
pub use prompt_input::{InputEvent, PromptInput};
pub use ratio_chips::{ChipEvent, RatioChips, RatioChipsState};
