//! # Farmstead
//!
//! A command-line tool and library for summarizing a small farm.
//!
//! The farm is described by two comma-delimited files:
//!
//! - a crop file, one field per line: `crop_name,harvest_time,yield_per_acre,price_per_unit,size_in_acres`
//! - an animal file, one animal per line: `animal_type,name,weight`
//!
//! From these the crate builds a [`farm::Farm`] and renders a report with
//! the economics of every field, the dietary needs of every animal and the
//! total yield across all fields.
//!
//! ## Modules
//!
//! - [`models`] - Crops, fields, species and animals
//! - [`farm`] - The farm aggregate and its report
//! - [`data`] - CSV data loading functionality
//! - [`display`] - Number formatting and report output
//! - [`wasm`] - JSON bindings for browser use
//!
//! ## Example Usage
//!
//! ```no_run
//! use farmstead::{
//!     data::{load_animals, load_crops},
//!     display::display_report,
//!     farm::Farm,
//! };
//! use std::path::Path;
//!
//! let fields = load_crops(Path::new("data/crops.csv")).unwrap();
//! let animals = load_animals(Path::new("data/animals.csv")).unwrap();
//!
//! let mut farm = Farm::new();
//! for field in fields {
//!     farm.add_field(field);
//! }
//! farm.add_animals(&animals);
//!
//! display_report(&farm);
//! ```
//!
//! ## Ownership
//!
//! The farm owns its fields but only borrows its animals. The collection the
//! animals were loaded into must outlive the farm, and it is released once,
//! by its owner, after the report has been produced.

pub mod data;
pub mod display;
pub mod farm;
pub mod models;
pub mod wasm;
