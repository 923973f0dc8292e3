//! Handlers for the `favorites` command group.

use serde_json::json;

use super::output;
use super::render::{self, Card};
use crate::application::DetailView;
use crate::domain::{FavoriteRecord, Feedback, GameId};
use crate::error::Result;
use crate::infrastructure::bootstrap::AppContext;

/// Execute `favorites list`.
pub async fn execute_list(ctx: &AppContext) {
    let favorites = ctx.favorites.get_all_or_empty().await;

    if favorites.is_empty() {
        output::note("No items added to favorites yet.");
        output::data("summary", json!({ "count": 0 }));
        return;
    }

    for record in &favorites {
        render::card("favorite", &Card::from(record), &ctx.assets, None);
    }
    output::data("summary", json!({ "count": favorites.len() }));
}

/// Execute `favorites add`: fetch the item, then store a snapshot of it.
pub async fn execute_add(ctx: &AppContext, id: &str) -> Result<()> {
    let id = GameId::new(id);
    let pb = output::spinner("Please Wait... Loading...");
    let game = ctx.catalog.game(&id).await;
    output::spinner_clear(&pb);

    let Some(game) = game else {
        output::warning("No data");
        return Ok(());
    };

    let mut view = DetailView::open(ctx.favorites.clone(), game.id.clone()).await;
    let feedback = view.add(FavoriteRecord::from(game)).await?;
    report(&id, feedback);
    Ok(())
}

/// Execute `favorites remove`.
pub async fn execute_remove(ctx: &AppContext, id: &str) -> Result<()> {
    let id = GameId::new(id);
    let mut view = DetailView::open(ctx.favorites.clone(), id.clone()).await;
    let feedback = view.remove().await?;
    report(&id, feedback);
    Ok(())
}

/// Execute `favorites clear`.
pub async fn execute_clear(ctx: &AppContext) -> Result<()> {
    ctx.favorites.clear().await?;
    output::success("Cleared all favorites");
    Ok(())
}

fn report(id: &GameId, feedback: Feedback) {
    let message = format!("{}: {}", id, feedback);
    match feedback {
        Feedback::Added | Feedback::Removed => output::success(&message),
        Feedback::AlreadyPresent | Feedback::NotPresent => output::warning(&message),
    }
}
