use yew::prelude::*;

use crate::format::{self, Star};
use crate::model::Recipe;

/// Avatar background when the author has no color of their own
pub const DEFAULT_AVATAR_COLOR: &str = "#FFB6C1";

/// Badge shown on auto-imported recipes
pub const AUTO_IMPORT_BADGE: &str = "🌍 TheMealDB";

#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
    /// Called with the recipe when the card is clicked. Hosts without
    /// selection leave it out and clicks do nothing.
    #[prop_or_default]
    pub on_select: Option<Callback<Recipe>>,
}

/// Author initials; empty when the recipe has no author name
pub fn author_initials(recipe: &Recipe) -> String {
    recipe
        .user_name
        .as_deref()
        .map(format::initials)
        .unwrap_or_default()
}

pub fn avatar_color(recipe: &Recipe) -> &str {
    non_empty(&recipe.user_avatar_color).unwrap_or(DEFAULT_AVATAR_COLOR)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn rating_row(rating: Option<i64>) -> Html {
    let Some(slots) = format::star_slots(rating) else {
        return Html::default();
    };

    html! {
        <div class="recipe-rating">
            { for slots.iter().map(|star| {
                let class = match star {
                    Star::Filled => "star filled",
                    Star::Empty => "star",
                };
                html! { <span class={class}>{ "★" }</span> }
            }) }
        </div>
    }
}

/// One recipe as a card. Holds no state of its own.
#[function_component]
pub fn RecipeCard(props: &RecipeCardProps) -> Html {
    let recipe = &props.recipe;
    let auto_imported = recipe.is_auto_imported();

    let onclick = props.on_select.as_ref().map(|on_select| {
        let recipe = recipe.clone();
        on_select.reform(move |_: MouseEvent| recipe.clone())
    });

    let image = match non_empty(&recipe.image) {
        Some(src) => html! {
            <div class="recipe-image">
                <img src={src.to_string()} alt={recipe.title.clone()} />
            </div>
        },
        None => Html::default(),
    };

    let notes = match non_empty(&recipe.notes) {
        Some(notes) => html! { <div class="recipe-notes">{ notes.to_string() }</div> },
        None => Html::default(),
    };

    let duration = match format::duration_label(recipe.duration) {
        Some(label) => html! { <div class="recipe-duration">{ format!("⏱️ {label}") }</div> },
        None => Html::default(),
    };

    let badge = if auto_imported {
        html! { <div class="recipe-badge">{ AUTO_IMPORT_BADGE }</div> }
    } else {
        Html::default()
    };

    let meta = format!(
        "{} • {}",
        recipe.user_name.as_deref().unwrap_or_default(),
        format::format_date(&recipe.created_at)
    );

    html! {
        <div
            class={classes!("recipe-card", auto_imported.then_some("auto-imported"))}
            data-recipe-id={recipe.id.to_string()}
            {onclick}
        >
            <div class="recipe-header">
                <div
                    class="recipe-author-avatar"
                    style={format!("background-color: {}", avatar_color(recipe))}
                >
                    { author_initials(recipe) }
                </div>
                <div class="recipe-info">
                    <div class="recipe-title">{ recipe.title.clone() }</div>
                    <div class="recipe-meta">{ meta }</div>
                </div>
            </div>
            { image }
            { notes }
            <div class="recipe-footer">
                { duration }
                { rating_row(recipe.rating) }
            </div>
            { badge }
        </div>
    }
}
