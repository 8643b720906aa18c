use crate::{Coord, CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub paths: Vec<Coord>,

    // Display style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

/// Optional style fields supplied alongside a location write.
/// Only the fields that are `Some` overwrite the stored values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStyle {
    pub stroke_color: Option<String>,
    pub stroke_opacity: Option<f64>,
    pub stroke_weight: Option<f64>,
    pub fill_color: Option<String>,
    pub fill_opacity: Option<f64>,
}

impl Location {
    pub fn new(name: String, paths: Vec<Coord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            paths,
            stroke_color: None,
            stroke_opacity: None,
            stroke_weight: None,
            fill_color: None,
            fill_opacity: None,
        }
    }

    pub fn apply_style(&mut self, style: &LocationStyle) {
        if let Some(color) = &style.stroke_color {
            self.stroke_color = Some(color.clone());
        }
        if let Some(opacity) = style.stroke_opacity {
            self.stroke_opacity = Some(opacity);
        }
        if let Some(weight) = style.stroke_weight {
            self.stroke_weight = Some(weight);
        }
        if let Some(color) = &style.fill_color {
            self.fill_color = Some(color.clone());
        }
        if let Some(opacity) = style.fill_opacity {
            self.fill_opacity = Some(opacity);
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "location name cannot be empty"));
        }
        if self.paths.is_empty() {
            return Err(CoreError::validation(
                "paths",
                "location requires at least one coordinate",
            ));
        }
        Ok(())
    }
}
