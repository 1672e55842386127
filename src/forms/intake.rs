//! Add Friend form

use crate::error::FormError;
use crate::models::{avatar_with_id, Friend, FriendId};
use crate::registry::FriendRegistry;

/// Draft of a friend not yet added to the registry
#[derive(Clone, Debug, PartialEq)]
pub struct IntakeDraft {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl IntakeDraft {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        IntakeDraft {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn update_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn update_image(&mut self, text: impl Into<String>) {
        self.image = text.into();
    }

    /// Both fields must be non-empty. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if self.image.is_empty() {
            return Err(FormError::EmptyImage);
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build a friend from the draft, append it and reset the draft.
    ///
    /// On rejection neither the draft nor the registry change.
    pub fn submit(&mut self, registry: &mut FriendRegistry) -> Result<FriendId, FormError> {
        self.validate()?;

        let id = FriendId::generate();
        let image = avatar_with_id(&self.image, &id);
        registry.add_friend(Friend::new(id.clone(), self.name.clone(), image));

        self.reset();
        Ok(id)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }
}
