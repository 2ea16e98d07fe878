use log::{error, info};
use yew::prelude::*;

use crate::api::RecipeSource;
use crate::components::card::RecipeCard;
use crate::components::render_list;
use crate::error::ApiError;
use crate::model::Recipe;

pub const APP_TITLE: &str = "@rezept-tagebuch";
pub const LOADING_MESSAGE: &str = "Lade Rezepte...";
pub const LOAD_ERROR_MESSAGE: &str = "Fehler beim Laden der Rezepte";
pub const RETRY_LABEL: &str = "Erneut versuchen";
pub const EMPTY_MESSAGE: &str = "Noch keine Rezepte vorhanden";

/// What the list view is currently showing
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    /// A user-facing message; the underlying failure is only logged
    Error(String),
    Loaded(Vec<Recipe>),
}

#[derive(Debug)]
pub enum ListEvent {
    FetchStarted,
    FetchSucceeded(Vec<Recipe>),
    FetchFailed(ApiError),
}

impl ListState {
    /// Apply an event. Events are applied in arrival order with no staleness
    /// check, so the last fetch to resolve wins.
    pub fn reduce(self, event: ListEvent) -> ListState {
        match event {
            ListEvent::FetchStarted => ListState::Loading,
            ListEvent::FetchSucceeded(recipes) => ListState::Loaded(recipes),
            ListEvent::FetchFailed(err) => {
                error!("Failed to load recipes: {}", err);
                ListState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RecipeListProps {
    pub state: ListState,
    /// Wired to the retry button of the error panel
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_select: Option<Callback<Recipe>>,
}

/// Loading panel, error panel with retry, or the header plus one card per recipe
#[function_component]
pub fn RecipeList(props: &RecipeListProps) -> Html {
    let body = match &props.state {
        ListState::Loading => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ LOADING_MESSAGE }</p>
            </div>
        },
        ListState::Error(message) => {
            let onclick = props
                .on_retry
                .as_ref()
                .map(|on_retry| on_retry.reform(|_: MouseEvent| ()));
            html! {
                <div class="error">
                    <p>{ format!("❌ {message}") }</p>
                    <button class="retry" {onclick}>{ RETRY_LABEL }</button>
                </div>
            }
        }
        ListState::Loaded(recipes) => {
            let cards = if recipes.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{ EMPTY_MESSAGE }</p>
                    </div>
                }
            } else {
                recipes
                    .iter()
                    .map(|recipe| {
                        html! {
                            <RecipeCard
                                key={recipe.id.to_string()}
                                recipe={recipe.clone()}
                                on_select={props.on_select.clone()}
                            />
                        }
                    })
                    .collect::<Html>()
            };

            html! {
                <>
                    <header class="recipe-list-header">
                        <h1 class="app-title">{ APP_TITLE }</h1>
                        <p class="recipe-count">{ format!("{} Rezepte", recipes.len()) }</p>
                    </header>
                    <div class="recipe-list">{ cards }</div>
                </>
            }
        }
    };

    html! {
        <div class="recipe-list-container">{ body }</div>
    }
}

/// Owns the list state and drives it through [`ListState::reduce`]
///
/// This is the host side of [`RecipeList`]: it performs the fetches, applies
/// their outcome, and renders the component for the current state.
pub struct RecipePage {
    state: ListState,
    on_select: Callback<Recipe>,
}

impl Default for RecipePage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipePage {
    /// Navigation is not wired up, so selecting a card only logs it
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            on_select: Callback::from(|recipe: Recipe| {
                info!("Clicked recipe {}: {}", recipe.id, recipe.title);
            }),
        }
    }

    pub fn with_on_select(mut self, on_select: Callback<Recipe>) -> Self {
        self.on_select = on_select;
        self
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn dispatch(&mut self, event: ListEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event);
    }

    /// Enter `Loading` before a fetch is issued
    pub fn begin_load(&mut self) {
        self.dispatch(ListEvent::FetchStarted);
    }

    /// Apply the outcome of a fetch, replacing whatever was loaded before
    pub fn finish_load(&mut self, result: Result<Vec<Recipe>, ApiError>) {
        let event = match result {
            Ok(recipes) => ListEvent::FetchSucceeded(recipes),
            Err(err) => ListEvent::FetchFailed(err),
        };
        self.dispatch(event);
    }

    /// Load the list, as on mount
    pub async fn load(&mut self, source: &dyn RecipeSource) {
        self.begin_load();
        let result = source.list_recipes().await;
        self.finish_load(result);
    }

    /// Whether the retry control is currently offered
    pub fn can_retry(&self) -> bool {
        matches!(self.state, ListState::Error(_))
    }

    /// Retry from the error state. Returns `false` without fetching otherwise.
    pub async fn retry(&mut self, source: &dyn RecipeSource) -> bool {
        if !self.can_retry() {
            return false;
        }
        self.load(source).await;
        true
    }

    /// Number of loaded recipes, shown in the header
    pub fn count(&self) -> usize {
        match &self.state {
            ListState::Loaded(recipes) => recipes.len(),
            _ => 0,
        }
    }

    /// Click the card with the given id. Returns `false` if no such card is shown.
    pub fn select(&self, id: i64) -> bool {
        let ListState::Loaded(recipes) = &self.state else {
            return false;
        };
        match recipes.iter().find(|recipe| recipe.id == id) {
            Some(recipe) => {
                self.on_select.emit(recipe.clone());
                true
            }
            None => false,
        }
    }

    /// HTML markup of [`RecipeList`] for the current state
    pub async fn render(&self) -> String {
        render_list(self.state.clone()).await
    }

    /// A standalone HTML document wrapping [`RecipePage::render`]
    pub async fn render_document(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n<title>{APP_TITLE}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            self.render().await
        )
    }
}
