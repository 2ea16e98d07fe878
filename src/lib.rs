//! Client for the recipe journal API.
//!
//! [`RecipeApi`] wraps the REST endpoints. [`RecipePage`] drives the
//! loading/error/loaded state of the [`RecipeList`] component, which shows
//! every recipe as a [`RecipeCard`].
//!
//! ```no_run
//! # use rezept_tagebuch::{ClientConfig, RecipeApi, RecipePage};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = RecipeApi::new(ClientConfig::load()?)?;
//! let mut page = RecipePage::new();
//! page.load(&api).await;
//! println!("{}", page.render().await);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod model;

pub use api::{RecipeApi, RecipeSource};
pub use components::{
    render_card, render_list, ListEvent, ListState, RecipeCard, RecipeList, RecipePage,
};
pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use model::{Recipe, RecipeDraft, RecipeStats, SystemFlag, User};
