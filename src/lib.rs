//! # Eat-'n-Split
//!
//! A small terminal app for splitting bills with friends.
//!
//! ## Features
//! - Friend list with running balances
//! - Add Friend form
//! - Split Bill form with the payer's choice
//! - Settlement of a split onto the friend's balance
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)

pub mod config;
pub mod constants;
pub mod error;
pub mod forms;
pub mod models;
pub mod registry;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{Friend, FriendId, Payer, Standing};
pub use registry::{FriendRegistry, Settlement};
pub use forms::{IntakeDraft, SplitDraft};
pub use error::{FormError, RegistryError, SplitError};
pub use config::{Config, SettlementMode};
pub use messages::{UiEvent, RenderState};
pub use app::{AppState, AppActor};
