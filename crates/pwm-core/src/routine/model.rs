//! Routine and material domain models.
//!
//! A routine is a catalog entry for a single magic trick; materials are
//! the props it uses. Both are attribute bags with no behavior beyond
//! construction.

use serde::{Deserialize, Serialize};

/// A prop or item used by a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Whether the audience may inspect the item
    #[serde(default)]
    pub is_inspectable: bool,
    /// Whether the item is given away during the routine
    #[serde(default)]
    pub is_given_away: bool,
    /// Whether the item is consumed over the course of the routine
    #[serde(default)]
    pub is_consumed: bool,
    /// Price in whole currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Material {
    /// Creates a material with the given name and no flags set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_inspectable: false,
            is_given_away: false,
            is_consumed: false,
            price: None,
            purchase_url: None,
            image_url: None,
            description: None,
        }
    }
}

/// A catalog entry for a magic trick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Store-assigned identifier (0 = not yet persisted)
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Average performance time in minutes
    pub duration_minutes: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub you_tube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<String>,

    /// Props used by this routine, owned by the record
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl Routine {
    /// Creates a routine with the required fields only.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            duration_minutes,
            method: None,
            handling: None,
            reset_duration_minutes: None,
            reset_description: None,
            you_tube_url: None,
            image_url: None,
            review_url: None,
            inspiration: None,
            placement: None,
            choices: None,
            materials: Vec::new(),
        }
    }
}
