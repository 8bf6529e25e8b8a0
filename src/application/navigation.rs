//! Navigation requests between screens.
//!
//! An [`Intent`] names a destination and carries keyed [`Extras`]. Payloads
//! are always encoded [`TransferMessage`]s, so the receiving screen builds
//! its own copy of anything it is handed.

use std::collections::BTreeMap;

use crate::domain::Pet;
use crate::infrastructure::transfer::{self, TransferMessage};

/// Extras key under which the selected pet travels.
pub const PET_DETAILS: &str = "petDetails";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    PetList,
    PetDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
    entries: BTreeMap<String, TransferMessage>,
}

impl Extras {
    pub fn put(&mut self, key: impl Into<String>, message: TransferMessage) {
        self.entries.insert(key.into(), message);
    }

    pub fn get(&self, key: &str) -> Option<&TransferMessage> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub destination: Destination,
    pub extras: Extras,
}

impl Intent {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            extras: Extras::default(),
        }
    }

    pub fn with_pet(mut self, pet: &Pet) -> Self {
        self.extras.put(PET_DETAILS, transfer::encode(pet));
        self
    }

    pub fn pet_message(&self) -> Option<&TransferMessage> {
        self.extras.get(PET_DETAILS)
    }
}

/// Builds the request that shows `pet` on the detail screen.
pub fn open_detail(pet: &Pet) -> Intent {
    tracing::debug!(id = pet.id(), name = pet.name(), "opening pet details");
    Intent::new(Destination::PetDetails).with_pet(pet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_pet;

    #[test]
    fn test_open_detail_carries_encoded_pet() {
        let pet = find_pet(4).unwrap();
        let intent = open_detail(pet);

        assert_eq!(intent.destination, Destination::PetDetails);
        assert_eq!(intent.pet_message(), Some(&transfer::encode(pet)));
    }

    #[test]
    fn test_plain_intent_has_no_pet() {
        let intent = Intent::new(Destination::PetDetails);
        assert!(intent.extras.is_empty());
        assert!(intent.pet_message().is_none());
    }

    #[test]
    fn test_extras_replace_existing_key() {
        let mut extras = Extras::default();
        extras.put(PET_DETAILS, TransferMessage::from_bytes(vec![1]));
        extras.put(PET_DETAILS, TransferMessage::from_bytes(vec![2]));
        assert_eq!(extras.get(PET_DETAILS).map(TransferMessage::as_bytes), Some(&[2u8][..]));
    }
}
