//! Data models and structures for Farmstead.
//!
//! This module contains the core records of the farm: crops and the fields
//! that grow them, plus the animals kept on the farm and their feed needs.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::display::format_number;

/// A crop variety with its growing and market figures.
///
/// Crops are immutable once built. Numeric values are taken as given;
/// negative figures are accepted and simply flow through the arithmetic.
///
/// # Example
///
/// ```
/// use farmstead::models::Crop;
///
/// let corn = Crop::new("Corn", 120, 150.0, 2.5);
/// assert_eq!(
///     corn.describe(),
///     "Crop: Corn, Harvest Time: 120 days, Yield: 150 units per acre, Price: $2.5 per unit"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    name: String,
    harvest_time: i32,
    yield_per_acre: f64,
    price_per_unit: f64,
}

impl Crop {
    /// Creates a new crop.
    ///
    /// # Arguments
    ///
    /// * `name` - Crop name (e.g., "Corn")
    /// * `harvest_time` - Days from planting to harvest
    /// * `yield_per_acre` - Units produced per acre
    /// * `price_per_unit` - Sale price of a single unit
    pub fn new(
        name: impl Into<String>,
        harvest_time: i32,
        yield_per_acre: f64,
        price_per_unit: f64,
    ) -> Self {
        Crop {
            name: name.into(),
            harvest_time,
            yield_per_acre,
            price_per_unit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn harvest_time(&self) -> i32 {
        self.harvest_time
    }

    pub fn yield_per_acre(&self) -> f64 {
        self.yield_per_acre
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    /// Returns a one-line summary of the crop (no trailing newline).
    pub fn describe(&self) -> String {
        format!(
            "Crop: {}, Harvest Time: {} days, Yield: {} units per acre, Price: ${} per unit",
            self.name,
            self.harvest_time,
            format_number(self.yield_per_acre),
            format_number(self.price_per_unit)
        )
    }
}

/// A plot of farmland growing exactly one crop.
///
/// The field owns its crop by value. Cloning a field produces an independent
/// copy, which is what [`Farm::add_field`](crate::farm::Farm::add_field) stores.
///
/// # Example
///
/// ```
/// use farmstead::models::Field;
///
/// let field = Field::new("Corn", 120, 150.0, 2.5, 10.0);
/// assert_eq!(field.total_yield(), 1500.0);
/// assert_eq!(field.total_value(), 3750.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    crop: Crop,
    size_in_acres: f64,
}

impl Field {
    /// Creates a field, building its crop from the given figures.
    pub fn new(
        crop_name: impl Into<String>,
        harvest_time: i32,
        yield_per_acre: f64,
        price_per_unit: f64,
        size_in_acres: f64,
    ) -> Self {
        Field {
            crop: Crop::new(crop_name, harvest_time, yield_per_acre, price_per_unit),
            size_in_acres,
        }
    }

    pub fn crop(&self) -> &Crop {
        &self.crop
    }

    pub fn size_in_acres(&self) -> f64 {
        self.size_in_acres
    }

    /// Units harvested from the whole field: yield per acre times acreage.
    pub fn total_yield(&self) -> f64 {
        self.crop.yield_per_acre() * self.size_in_acres
    }

    /// Market value of the whole harvest: price per unit times total yield.
    pub fn total_value(&self) -> f64 {
        self.crop.price_per_unit() * self.total_yield()
    }

    /// Returns the three-line field summary, ending with a newline.
    pub fn describe(&self) -> String {
        format!(
            "Field size: {} acres\n{}\nTotal Value: $ {}\n",
            format_number(self.size_in_acres),
            self.crop.describe(),
            format_number(self.total_value())
        )
    }
}

/// The animal species kept on the farm.
///
/// The set is closed; each species carries its own report label, feed type
/// and feed ratio (kilograms of feed per kilogram of body weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cow,
    Chicken,
    Pig,
}

impl Species {
    /// All species, in declaration order.
    pub const ALL: [Species; 3] = [Species::Cow, Species::Chicken, Species::Pig];

    /// Label used in reports and in the animal input file.
    pub fn label(self) -> &'static str {
        match self {
            Species::Cow => "Cow",
            Species::Chicken => "Chicken",
            Species::Pig => "Pig",
        }
    }

    /// Kilograms of feed required per kilogram of body weight.
    pub fn feed_ratio(self) -> f64 {
        match self {
            Species::Cow => 2.5,
            Species::Chicken => 0.1,
            Species::Pig => 0.05,
        }
    }

    pub fn feed_name(self) -> &'static str {
        match self {
            Species::Cow => "grass",
            Species::Chicken => "grain",
            Species::Pig => "mixed feed",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an animal type token is not a known species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpecies(pub String);

impl fmt::Display for UnknownSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown animal type '{}'", self.0)
    }
}

impl std::error::Error for UnknownSpecies {}

impl FromStr for Species {
    type Err = UnknownSpecies;

    /// Matches the exact, case-sensitive species label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.label() == s)
            .ok_or_else(|| UnknownSpecies(s.to_string()))
    }
}

/// An animal living on the farm.
///
/// # Example
///
/// ```
/// use farmstead::models::{Animal, Species};
///
/// let pig = Animal::pig("Snorty", 186.4);
/// assert_eq!(pig.species, Species::Pig);
/// assert_eq!(pig.describe(), "Pig: Snorty, Weight: 186.4 kg\n");
/// assert_eq!(pig.dietary_requirement(), "Requires 9.32 kg of mixed feed\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    /// Species of the animal
    pub species: Species,
    /// Name of the animal (duplicates are allowed)
    pub name: String,
    /// Body weight in kilograms
    pub weight: f64,
}

impl Animal {
    pub fn new(species: Species, name: impl Into<String>, weight: f64) -> Self {
        Animal {
            species,
            name: name.into(),
            weight,
        }
    }

    pub fn cow(name: impl Into<String>, weight: f64) -> Self {
        Animal::new(Species::Cow, name, weight)
    }

    pub fn chicken(name: impl Into<String>, weight: f64) -> Self {
        Animal::new(Species::Chicken, name, weight)
    }

    pub fn pig(name: impl Into<String>, weight: f64) -> Self {
        Animal::new(Species::Pig, name, weight)
    }

    /// Kilograms of feed this animal needs.
    pub fn feed_required(&self) -> f64 {
        self.species.feed_ratio() * self.weight
    }

    /// Returns "{label}: {name}, Weight: {weight} kg" followed by a newline.
    pub fn describe(&self) -> String {
        format!(
            "{}: {}, Weight: {} kg\n",
            self.species.label(),
            self.name,
            format_number(self.weight)
        )
    }

    /// Returns "Requires {amount} kg of {feed}" followed by a newline.
    pub fn dietary_requirement(&self) -> String {
        format!(
            "Requires {} kg of {}\n",
            format_number(self.feed_required()),
            self.species.feed_name()
        )
    }
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for the crop file.
///
/// Columns: `crop_name, harvest_time, yield_per_acre, price_per_unit, size_in_acres`
#[derive(Debug, Deserialize)]
pub struct CropRow {
    /// Crop name
    pub crop_name: String,
    /// Days until harvest
    pub harvest_time: i32,
    /// Units per acre
    pub yield_per_acre: f64,
    /// Price per unit
    pub price_per_unit: f64,
    /// Field size in acres
    pub size_in_acres: f64,
}

/// Error returned when a parsed CSV row cannot become a domain record.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    /// The animal type is not a known species
    UnknownSpecies(UnknownSpecies),
    /// A numeric column held `nan` or an infinity
    NonFinite(&'static str),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::UnknownSpecies(err) => fmt::Display::fmt(err, f),
            RowError::NonFinite(column) => write!(f, "column '{}' is not a finite number", column),
        }
    }
}

impl std::error::Error for RowError {}

impl From<UnknownSpecies> for RowError {
    fn from(err: UnknownSpecies) -> Self {
        RowError::UnknownSpecies(err)
    }
}

fn finite(value: f64, column: &'static str) -> Result<f64, RowError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RowError::NonFinite(column))
    }
}

impl TryFrom<CropRow> for Field {
    type Error = RowError;

    fn try_from(row: CropRow) -> Result<Self, Self::Error> {
        Ok(Field::new(
            row.crop_name,
            row.harvest_time,
            finite(row.yield_per_acre, "yield_per_acre")?,
            finite(row.price_per_unit, "price_per_unit")?,
            finite(row.size_in_acres, "size_in_acres")?,
        ))
    }
}

/// CSV row structure for the animal file.
///
/// Columns: `animal_type, name, weight`
#[derive(Debug, Deserialize)]
pub struct AnimalRow {
    /// Species label, matched exactly ("Cow", "Chicken", "Pig")
    pub animal_type: String,
    /// Animal name
    pub name: String,
    /// Weight in kilograms
    pub weight: f64,
}

impl TryFrom<AnimalRow> for Animal {
    type Error = RowError;

    fn try_from(row: AnimalRow) -> Result<Self, Self::Error> {
        let species: Species = row.animal_type.parse()?;
        Ok(Animal::new(species, row.name, finite(row.weight, "weight")?))
    }
}
