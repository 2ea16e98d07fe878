use serde::{Deserialize, Serialize};

/// A recipe journal entry as served by `/api/recipes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Cooking time in minutes. The backend stores it as a float.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Intended range 0-5, not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<SystemFlag>,
}

/// The `is_system` column, sent as an integer by older backends and as a
/// boolean by newer ones. The two forms are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SystemFlag {
    Int(i64),
    Bool(bool),
}

impl Recipe {
    /// Entries seeded from TheMealDB carry the integer flag `1`; nothing
    /// else, not even `true`, counts.
    pub fn is_auto_imported(&self) -> bool {
        self.is_system == Some(SystemFlag::Int(1))
    }

    /// Copy every field into a draft, e.g. to send it back through create/update
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            id: Some(self.id),
            title: Some(self.title.clone()),
            image: self.image.clone(),
            notes: self.notes.clone(),
            duration: self.duration,
            rating: self.rating,
            created_at: Some(self.created_at.clone()),
            updated_at: Some(self.updated_at.clone()),
            user_id: Some(self.user_id),
            user_name: self.user_name.clone(),
            user_email: self.user_email.clone(),
            user_avatar_color: self.user_avatar_color.clone(),
            is_system: self.is_system,
        }
    }
}

/// A recipe with every field optional, used as the body of create and update
///
/// Absent fields are left out of the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<SystemFlag>,
}

/// An author. Recipes carry a denormalized copy of the author fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar_color: String,
    pub created_at: String,
}

/// Collection counters returned by `/api/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStats {
    pub total_recipes: u64,
    pub recipes_with_images: u64,
}
