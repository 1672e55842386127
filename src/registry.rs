use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::error::RegistryError;
use crate::models::{Friend, FriendId, Payer};

const MAX_LEDGER: usize = 50;

/// An applied bill split
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub friend_id: FriendId,
    pub friend_name: String,
    pub payer: Payer,
    pub delta: f64,
    pub at: DateTime<Utc>,
}

/// Ordered, append-only collection of friends plus the current selection
#[derive(Debug, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    ledger: VecDeque<Settlement>,
}

impl FriendRegistry {
    pub fn new(friends: Vec<Friend>) -> Self {
        FriendRegistry {
            friends,
            selected: None,
            ledger: VecDeque::with_capacity(MAX_LEDGER),
        }
    }

    /// Append a friend. Uniqueness of the id is the caller's job.
    pub fn add_friend(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Replace the selection. Selecting the selected friend again keeps it selected.
    pub fn select(&mut self, id: &FriendId) -> Result<(), RegistryError> {
        if self.get(id).is_none() {
            return Err(RegistryError::UnknownFriend(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Add `delta` to a friend's balance and record it in the ledger
    pub fn settle_balance(
        &mut self,
        id: &FriendId,
        delta: f64,
        payer: Payer,
    ) -> Result<f64, RegistryError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| RegistryError::UnknownFriend(id.clone()))?;
        friend.balance += delta;

        let settlement = Settlement {
            friend_id: friend.id.clone(),
            friend_name: friend.name.clone(),
            payer,
            delta,
            at: Utc::now(),
        };
        let balance = friend.balance;

        if self.ledger.len() >= MAX_LEDGER {
            self.ledger.pop_back();
        }
        self.ledger.push_front(settlement);
        Ok(balance)
    }

    /// Most recent settlement first
    pub fn ledger(&self) -> impl Iterator<Item = &Settlement> {
        self.ledger.iter()
    }

    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.ledger.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_friends;

    fn seeded() -> FriendRegistry {
        FriendRegistry::new(seed_friends())
    }

    #[test]
    fn test_select_overwrites() {
        let mut reg = seeded();
        let clark = reg.friends()[0].id.clone();
        let sarah = reg.friends()[1].id.clone();

        reg.select(&clark).unwrap();
        reg.select(&sarah).unwrap();

        assert_eq!(reg.selected_id(), Some(&sarah));
        assert!(!reg.is_selected(&clark));
    }

    #[test]
    fn test_reselect_does_not_toggle() {
        let mut reg = seeded();
        let clark = reg.friends()[0].id.clone();

        reg.select(&clark).unwrap();
        reg.select(&clark).unwrap();

        assert!(reg.is_selected(&clark));
    }

    #[test]
    fn test_selection_compares_ids() {
        let mut reg = seeded();
        reg.select(&FriendId::from("933372")).unwrap();
        assert_eq!(reg.selected().map(|f| f.name.as_str()), Some("Sarah"));
    }

    #[test]
    fn test_select_unknown_friend() {
        let mut reg = seeded();
        let err = reg.select(&FriendId::from("nope")).unwrap_err();
        assert_eq!(err, RegistryError::UnknownFriend(FriendId::from("nope")));
        assert!(reg.selected().is_none());
    }

    #[test]
    fn test_settle_balance_records_ledger() {
        let mut reg = seeded();
        let sarah = FriendId::from("933372");

        let balance = reg.settle_balance(&sarah, 70.0, Payer::User).unwrap();

        assert_eq!(balance, 90.0);
        assert_eq!(reg.get(&sarah).unwrap().balance, 90.0);
        let last = reg.last_settlement().unwrap();
        assert_eq!(last.friend_name, "Sarah");
        assert_eq!(last.delta, 70.0);
    }

    #[test]
    fn test_ledger_is_bounded() {
        let mut reg = seeded();
        let anthony = FriendId::from("499476");
        for _ in 0..(MAX_LEDGER + 5) {
            reg.settle_balance(&anthony, 1.0, Payer::User).unwrap();
        }
        assert_eq!(reg.ledger().count(), MAX_LEDGER);
        assert_eq!(reg.get(&anthony).unwrap().balance, (MAX_LEDGER + 5) as f64);
    }
}
