use std::fmt;

use uuid::Uuid;

use crate::constants::AVATAR_ID_PARAM;

/// Opaque friend identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Fresh collision-resistant identifier
    pub fn generate() -> Self {
        FriendId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        FriendId(value.to_string())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked person with a running balance relative to the user.
///
/// Negative balance: the user owes this friend.
/// Positive balance: this friend owes the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Friend {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn standing(&self) -> Standing {
        Standing::of(self.balance)
    }

    /// Line shown under the friend's name in the list
    pub fn standing_text(&self) -> String {
        let amount = format_amount(self.balance.abs());
        match self.standing() {
            Standing::Owes => format!("You owe {} ${}", self.name, amount),
            Standing::Owed => format!("{} owes you ${}", self.name, amount),
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Sign of a balance from the user's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    /// The user owes the friend
    Owes,
    /// The friend owes the user
    Owed,
    Even,
}

impl Standing {
    pub fn of(balance: f64) -> Standing {
        if balance < 0.0 {
            Standing::Owes
        } else if balance > 0.0 {
            Standing::Owed
        } else {
            Standing::Even
        }
    }
}

/// Who paid the bill being split
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(&self) -> Payer {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }

    /// Option label as shown in the split form
    pub fn label<'a>(&self, friend_name: &'a str) -> &'a str {
        match self {
            Payer::User => "You",
            Payer::Friend => friend_name,
        }
    }
}

/// Builds a per-friend avatar reference by appending the id as a query parameter
pub fn avatar_with_id(image: &str, id: &FriendId) -> String {
    let sep = if image.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", image, sep, AVATAR_ID_PARAM, id)
}

/// Formats an amount without a trailing ".00" for whole values
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Friends every fresh session starts with
pub fn seed_friends() -> Vec<Friend> {
    [("118836", "Clark", -7.0), ("933372", "Sarah", 20.0), ("499476", "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            let id = FriendId::from(id);
            let image = avatar_with_id(crate::constants::DEFAULT_AVATAR_URL, &id);
            Friend::new(id, name, image).with_balance(balance)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_text() {
        let friends = seed_friends();
        assert_eq!(friends[0].standing_text(), "You owe Clark $7");
        assert_eq!(friends[1].standing_text(), "Sarah owes you $20");
        assert_eq!(friends[2].standing_text(), "You and Anthony are even");
    }

    #[test]
    fn test_fractional_amounts_keep_cents() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(3.0), "3");
    }

    #[test]
    fn test_avatar_with_id() {
        let id = FriendId::from("42");
        assert_eq!(avatar_with_id("http://x/y", &id), "http://x/y?u=42");
        assert_eq!(avatar_with_id("http://x/y?size=48", &id), "http://x/y?size=48&u=42");
    }

    #[test]
    fn test_seed_images_match_pravatar_scheme() {
        let friends = seed_friends();
        assert_eq!(friends[0].image, "https://i.pravatar.cc/48?u=118836");
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(FriendId::generate(), FriendId::generate());
    }

    #[test]
    fn test_payer_toggle() {
        assert_eq!(Payer::User.toggle(), Payer::Friend);
        assert_eq!(Payer::Friend.toggle(), Payer::User);
        assert_eq!(Payer::Friend.label("Sarah"), "Sarah");
    }
}
