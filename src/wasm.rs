//! WebAssembly bindings for Farmstead.
//!
//! This module provides JavaScript-accessible functions that build a farm
//! from CSV text and return the report as JSON.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data::{parse_animals, parse_crops};
use crate::display::format_report;
use crate::farm::Farm;
use crate::models::{Animal, Field};

/// JavaScript-friendly input: the raw contents of both files.
#[derive(Debug, Clone, Deserialize)]
pub struct JsFarmInput {
    #[serde(default)]
    pub crops: String,
    #[serde(default)]
    pub animals: String,
}

/// JavaScript-friendly field output.
#[derive(Debug, Clone, Serialize)]
pub struct JsField {
    pub crop_name: String,
    pub harvest_time: i32,
    pub yield_per_acre: f64,
    pub price_per_unit: f64,
    pub size_in_acres: f64,
    pub total_yield: f64,
    pub total_value: f64,
}

/// JavaScript-friendly animal output.
#[derive(Debug, Clone, Serialize)]
pub struct JsAnimal {
    pub species: String,
    pub name: String,
    pub weight: f64,
    pub feed_required: f64,
    pub feed_name: String,
}

/// JavaScript-friendly report result.
#[derive(Debug, Clone, Serialize)]
pub struct JsFarmReport {
    pub success: bool,
    pub error: Option<String>,
    pub report: String,
    pub total_farm_yield: f64,
    pub fields: Vec<JsField>,
    pub animals: Vec<JsAnimal>,
}

impl From<&Field> for JsField {
    fn from(field: &Field) -> Self {
        let crop = field.crop();
        JsField {
            crop_name: crop.name().to_string(),
            harvest_time: crop.harvest_time(),
            yield_per_acre: crop.yield_per_acre(),
            price_per_unit: crop.price_per_unit(),
            size_in_acres: field.size_in_acres(),
            total_yield: field.total_yield(),
            total_value: field.total_value(),
        }
    }
}

impl From<&Animal> for JsAnimal {
    fn from(animal: &Animal) -> Self {
        JsAnimal {
            species: animal.species.label().to_string(),
            name: animal.name.clone(),
            weight: animal.weight,
            feed_required: animal.feed_required(),
            feed_name: animal.species.feed_name().to_string(),
        }
    }
}

impl JsFarmReport {
    fn failure(message: String) -> Self {
        JsFarmReport {
            success: false,
            error: Some(message),
            report: String::new(),
            total_farm_yield: 0.0,
            fields: Vec::new(),
            animals: Vec::new(),
        }
    }
}

/// Builds the report for the given CSV contents.
fn build_report(crops_csv: &str, animals_csv: &str) -> JsFarmReport {
    let fields = parse_crops(crops_csv.as_bytes());
    let animals = parse_animals(animals_csv.as_bytes());

    let mut farm = Farm::new();
    for field in fields {
        farm.add_field(field);
    }
    farm.add_animals(&animals);

    JsFarmReport {
        success: true,
        error: None,
        report: format_report(&farm),
        total_farm_yield: farm.total_farm_yield(),
        fields: farm.fields().iter().map(JsField::from).collect(),
        animals: farm.animals().iter().map(|a| JsAnimal::from(*a)).collect(),
    }
}

fn to_json(result: &JsFarmReport) -> String {
    serde_json::to_string(result).unwrap_or_default()
}

/// Renders a farm report from `{"crops": "...", "animals": "..."}` JSON input.
#[wasm_bindgen]
pub fn farm_report(input_json: &str) -> String {
    let input: JsFarmInput = match serde_json::from_str(input_json) {
        Ok(input) => input,
        Err(e) => {
            let message = format!("Invalid input: {}", e);
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&JsValue::from_str(&message));
            return to_json(&JsFarmReport::failure(message));
        }
    };

    to_json(&build_report(&input.crops, &input.animals))
}

/// Renders the report for the sample data bundled into the binary.
#[wasm_bindgen]
pub fn sample_farm_report() -> String {
    let crops = include_str!("../data/crops.csv");
    let animals = include_str!("../data/animals.csv");
    to_json(&build_report(crops, animals))
}

/// Get the version of the crate.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
