//! Form drafts - transient, uncommitted input state
//!
//! The Add Friend form produces new registry entries. The Split Bill form
//! derives each side's share of a bill for the selected friend.

pub mod intake;
pub mod split;

pub use intake::IntakeDraft;
pub use split::{exceeds, is_amount_char, parse_amount, SplitDraft};
