//! Error types for form and registry operations
//!
//! None of these are fatal. A rejected operation leaves state untouched and
//! the app layer reports the reason in the status bar.

use thiserror::Error;

use crate::models::FriendId;

/// Rejections raised while editing or submitting a form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("friend name is empty")]
    EmptyName,

    #[error("image URL is empty")]
    EmptyImage,

    #[error("your expense cannot exceed the bill value")]
    ExpenseExceedsBill,

    #[error("enter a bill value before splitting")]
    MissingBillTotal,

    #[error("no friend is selected")]
    NoSelection,
}

/// Failures looking up or updating friends in the registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("unknown friend: {0}")]
    UnknownFriend(FriendId),
}

/// Any rejection surfaced to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
