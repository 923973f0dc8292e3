//! Builders for domain primitives used across tests.

use crate::domain::{FavoriteRecord, Game, GameId};

/// Create a [`Game`] with the given id and name and fixed filler fields.
pub fn game(id: &str, name: &str) -> Game {
    Game {
        id: GameId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        developer: "Nintendo EAD".to_string(),
        publisher: "Nintendo".to_string(),
        released_date: "November 21, 1998".to_string(),
        image: String::new(),
    }
}

/// Create a [`FavoriteRecord`] named after its id.
pub fn record(id: &str) -> FavoriteRecord {
    FavoriteRecord::from(game(id, id))
}

/// Create a [`FavoriteRecord`] with an explicit name.
pub fn named_record(id: &str, name: &str) -> FavoriteRecord {
    FavoriteRecord::from(game(id, name))
}
