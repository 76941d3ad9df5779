//! Routine form binding.

use serde::{Deserialize, Serialize};

use super::model::Routine;
use crate::error::{PwmError, Result};

/// Longest performance time, in minutes, the catalog form accepts.
const MAX_DURATION_MINUTES: u32 = 120;

/// Form data for adding or editing a routine.
///
/// Materials are managed on the record itself, not through this form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineRequest {
    /// Target record id; 0 creates a new routine
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub description: String,
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
}

impl RoutineRequest {
    /// Validate the request and return the first rejected field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PwmError::validation("Name is required and cannot be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(PwmError::validation(
                "Description is required and cannot be empty",
            ));
        }
        if self.duration_minutes == 0 || self.duration_minutes > MAX_DURATION_MINUTES {
            return Err(PwmError::validation(format!(
                "Duration must be between 1 and {} minutes",
                MAX_DURATION_MINUTES
            )));
        }
        Ok(())
    }

    /// Pre-fills an edit form from an existing record.
    pub fn from_routine(routine: &Routine) -> Self {
        Self {
            id: routine.id,
            name: routine.name.clone(),
            description: routine.description.clone(),
            duration_minutes: routine.duration_minutes,
            method: routine.method.clone(),
            handling: routine.handling.clone(),
            reset_duration_minutes: routine.reset_duration_minutes,
            reset_description: routine.reset_description.clone(),
            you_tube_url: routine.you_tube_url.clone(),
            image_url: routine.image_url.clone(),
            review_url: routine.review_url.clone(),
            inspiration: routine.inspiration.clone(),
            placement: routine.placement.clone(),
            choices: routine.choices.clone(),
        }
    }

    /// Copies every form field onto the record, leaving materials alone.
    pub fn apply_to(&self, routine: &mut Routine) {
        routine.name = self.name.clone();
        routine.description = self.description.clone();
        routine.duration_minutes = self.duration_minutes;
        routine.method = self.method.clone();
        routine.handling = self.handling.clone();
        routine.reset_duration_minutes = self.reset_duration_minutes;
        routine.reset_description = self.reset_description.clone();
        routine.you_tube_url = self.you_tube_url.clone();
        routine.image_url = self.image_url.clone();
        routine.review_url = self.review_url.clone();
        routine.inspiration = self.inspiration.clone();
        routine.placement = self.placement.clone();
        routine.choices = self.choices.clone();
    }

    /// Builds a fresh record from the form.
    pub fn into_routine(self) -> Routine {
        let mut routine = Routine::new(
            self.name.clone(),
            self.description.clone(),
            self.duration_minutes,
        );
        self.apply_to(&mut routine);
        routine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RoutineRequest {
        RoutineRequest {
            id: 0,
            name: "Ambitious Card".to_string(),
            description: "A chosen card repeatedly rises to the top".to_string(),
            duration_minutes: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_success() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_duration_bounds() {
        let mut bad = request();
        bad.duration_minutes = 0;
        assert!(bad.validate().unwrap_err().is_validation());

        bad.duration_minutes = 121;
        assert!(bad.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_into_routine_keeps_optionals() {
        let mut form = request();
        form.method = Some("Double lift".to_string());
        let routine = form.into_routine();
        assert_eq!(routine.id, 0);
        assert_eq!(routine.method.as_deref(), Some("Double lift"));
        assert!(routine.materials.is_empty());
    }

    #[test]
    fn test_apply_to_preserves_materials() {
        let mut routine = request().into_routine();
        routine
            .materials
            .push(crate::routine::Material::new("Deck of cards"));

        let mut form = RoutineRequest::from_routine(&routine);
        form.name = "Very Ambitious Card".to_string();
        form.apply_to(&mut routine);

        assert_eq!(routine.name, "Very Ambitious Card");
        assert_eq!(routine.materials.len(), 1);
    }
}
