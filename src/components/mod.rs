//! yew components for the recipe list, plus server-side rendering to markup

mod card;
mod list;

use yew::ServerRenderer;

use crate::model::Recipe;

pub use card::{
    author_initials, avatar_color, RecipeCard, RecipeCardProps, AUTO_IMPORT_BADGE,
    DEFAULT_AVATAR_COLOR,
};
pub use list::{
    ListEvent, ListState, RecipeList, RecipeListProps, RecipePage, APP_TITLE, EMPTY_MESSAGE,
    LOADING_MESSAGE, LOAD_ERROR_MESSAGE, RETRY_LABEL,
};

/// Render a single [`RecipeCard`] to HTML
pub async fn render_card(recipe: Recipe) -> String {
    ServerRenderer::<RecipeCard>::with_props(move || RecipeCardProps {
        recipe,
        on_select: None,
    })
    .hydratable(false)
    .render()
    .await
}

/// Render [`RecipeList`] for a given state to HTML
///
/// Callbacks cannot cross into the renderer, so the markup carries no handlers.
pub async fn render_list(state: ListState) -> String {
    ServerRenderer::<RecipeList>::with_props(move || RecipeListProps {
        state,
        on_retry: None,
        on_select: None,
    })
    .hydratable(false)
    .render()
    .await
}
