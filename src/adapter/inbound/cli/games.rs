//! Handlers for the `games` command group.

use serde_json::json;

use super::output;
use super::render::{self, Card};
use crate::application::DetailView;
use crate::domain::GameId;
use crate::infrastructure::bootstrap::AppContext;

const LOADING: &str = "Please Wait... Loading...";

/// Execute `games list`.
pub async fn execute_list(ctx: &AppContext, search: Option<&str>) {
    let pb = output::spinner(LOADING);
    let games = ctx.catalog.search(search.unwrap_or("")).await;
    output::spinner_clear(&pb);

    if games.is_empty() {
        output::warning("No data");
        return;
    }

    for game in &games {
        render::card("game", &Card::from(game), &ctx.assets, None);
    }
    output::data("summary", json!({ "count": games.len() }));
}

/// Execute `games show`.
pub async fn execute_show(ctx: &AppContext, id: &str) {
    let id = GameId::new(id);
    let pb = output::spinner(LOADING);
    let game = ctx.catalog.game(&id).await;
    output::spinner_clear(&pb);

    let Some(game) = game else {
        output::warning("No data");
        return;
    };

    let view = DetailView::open(ctx.favorites.clone(), game.id.clone()).await;
    let card = Card::from(&game).with_description(&game.description);
    render::card("game", &card, &ctx.assets, Some(view.state()));
}
