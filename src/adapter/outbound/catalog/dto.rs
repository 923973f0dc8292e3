//! Catalog REST response types.

use serde::Deserialize;

use crate::domain::{Game, GameId};

/// Envelope for `GET /games`.
#[derive(Debug, Deserialize)]
pub struct GamesResponse {
    pub success: bool,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Vec<GameDto>,
}

/// Envelope for `GET /games/{id}`. `data` is absent or null on misses.
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub success: bool,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Option<GameDto>,
}

/// A catalog item on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct GameDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub released_date: String,
    #[serde(default)]
    pub image: String,
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        Self {
            id: GameId::new(dto.id),
            name: dto.name,
            description: dto.description,
            developer: dto.developer,
            publisher: dto.publisher,
            released_date: dto.released_date,
            image: dto.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_envelope() {
        let json = r#"{
            "success": true,
            "count": 1,
            "data": [{
                "name": "The Legend of Zelda: Ocarina of Time",
                "description": "Link travels through time.",
                "developer": "Nintendo EAD",
                "publisher": "Nintendo",
                "released_date": " November 21, 1998",
                "id": "5f6ce9d805615a85623ec2b8"
            }]
        }"#;
        let response: GamesResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.count, 1);

        let game = Game::from(response.data[0].clone());
        assert_eq!(game.id.as_str(), "5f6ce9d805615a85623ec2b8");
        assert_eq!(game.developer, "Nintendo EAD");
        assert!(game.image.is_empty());
    }

    #[test]
    fn parses_single_miss_without_data() {
        let response: GameResponse =
            serde_json::from_str(r#"{"success": false, "count": 0}"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }
}
