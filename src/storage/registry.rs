use std::collections::{BTreeMap, HashMap};

use crate::domain::{Room, RoomNumber, RoomType, User};

/// In-memory store for the room catalog and the account registry. State
/// lives for the process lifetime only; there is no persistence layer.
///
/// Rooms are keyed in a `BTreeMap` so listings come out in ascending
/// room-number order. Usernames are matched case-sensitively.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: BTreeMap<RoomNumber, Room>,
    users: HashMap<String, User>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the preset catalog: rooms 1-3 are deluxe,
    /// rooms 4-5 are suites, all initially available.
    pub fn with_preset_rooms() -> Self {
        let mut registry = Self::new();
        for number in 1..=3 {
            registry.add_room(Room::new(number, RoomType::Deluxe));
        }
        for number in 4..=5 {
            registry.add_room(Room::new(number, RoomType::Suite));
        }
        registry
    }

    // ========================
    // Room catalog
    // ========================

    /// Add a room to the catalog. A later room with the same number
    /// replaces the earlier one, so seeding must use unique numbers.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.number, room);
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    pub fn room_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.get_mut(&number)
    }

    /// Available rooms in ascending room-number order.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.values().filter(|room| room.available).collect()
    }

    // ========================
    // Account registry
    // ========================

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    /// Store a new account. Callers check for duplicates first; a duplicate
    /// insert would replace the existing account.
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_catalog_layout() {
        let registry = Registry::with_preset_rooms();
        for number in 1..=3 {
            assert_eq!(registry.room(number).unwrap().room_type, RoomType::Deluxe);
        }
        for number in 4..=5 {
            assert_eq!(registry.room(number).unwrap().room_type, RoomType::Suite);
        }
        assert!(registry.room(6).is_none());
    }

    #[test]
    fn test_available_rooms_sorted_by_number() {
        let mut registry = Registry::new();
        registry.add_room(Room::new(9, RoomType::Suite));
        registry.add_room(Room::new(2, RoomType::Deluxe));
        registry.add_room(Room::new(5, RoomType::Deluxe));

        let numbers: Vec<_> = registry
            .available_rooms()
            .iter()
            .map(|room| room.number)
            .collect();
        assert_eq!(numbers, vec![2, 5, 9]);
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut registry = Registry::new();
        registry.insert_user(User::new("Alice", "pw"));
        assert!(registry.user("Alice").is_some());
        assert!(registry.user("alice").is_none());
    }
}
