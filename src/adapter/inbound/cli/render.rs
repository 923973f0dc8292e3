//! Shared card rendering for games and favorites.

use serde_json::json;

use super::output;
use crate::domain::{AssetTable, FavoriteRecord, Game, GameId, MembershipState};

/// Display fields common to catalog games and favorite snapshots.
pub struct Card<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub developer: &'a str,
    pub publisher: &'a str,
    pub released_date: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a Game> for Card<'a> {
    fn from(game: &'a Game) -> Self {
        Self {
            id: game.id.as_str(),
            name: &game.name,
            developer: &game.developer,
            publisher: &game.publisher,
            released_date: &game.released_date,
            description: None,
        }
    }
}

impl<'a> From<&'a FavoriteRecord> for Card<'a> {
    fn from(record: &'a FavoriteRecord) -> Self {
        Self {
            id: record.id.as_str(),
            name: &record.name,
            developer: &record.developer,
            publisher: &record.publisher,
            released_date: &record.released_date,
            description: None,
        }
    }
}

impl<'a> Card<'a> {
    #[must_use]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Print one card, or its JSON payload under `kind`.
pub fn card(kind: &str, card: &Card<'_>, assets: &AssetTable, membership: Option<MembershipState>) {
    let image = assets.resolve(&GameId::from(card.id));

    if output::is_json() {
        let mut payload = json!({
            "id": card.id,
            "name": card.name,
            "developer": card.developer,
            "publisher": card.publisher,
            "released_date": card.released_date,
            "image": image,
        });
        if let Some(description) = card.description {
            payload["description"] = json!(description);
        }
        if let Some(state) = membership {
            payload["membership"] = json!(state);
        }
        output::data(kind, payload);
        return;
    }

    output::title(card.name);
    output::field("Id", output::muted(card.id));
    output::field("Developer", card.developer);
    output::field("Publisher", card.publisher);
    output::field("Release Date", card.released_date.trim());
    if !image.is_empty() {
        output::field("Image", image);
    }
    if let Some(description) = card.description {
        output::field("Description", description);
    }
    if let Some(state) = membership {
        output::field("Favorite", output::highlight(state));
    }
}
