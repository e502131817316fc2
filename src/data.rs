//! Data loading functionality for Farmstead.
//!
//! This module reads crop fields and animals from comma-delimited files
//! without a header row. Every physical line is one record: quotes carry no
//! meaning. Lines that cannot be parsed are skipped silently, so a header
//! line, a blank line or a damaged record never stops a load.

use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::{Animal, AnimalRow, CropRow, Field};

/// Number of columns read from each crop record.
const CROP_COLUMNS: usize = 5;

/// Number of columns read from each animal record.
const ANIMAL_COLUMNS: usize = 3;

/// Deserializes every well-formed record of `reader` into `T`.
///
/// Only the first `columns` fields of a record are considered; anything after
/// them is ignored. Invalid UTF-8 is replaced rather than rejected. Records
/// that are too short or fail to deserialize are dropped.
fn read_rows<T, R>(reader: R, columns: usize) -> Vec<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        if let Ok(record) = result {
            let record: StringRecord = record
                .iter()
                .take(columns)
                .map(String::from_utf8_lossy)
                .collect();
            let parsed: Result<T, csv::Error> = record.deserialize(None);
            if let Ok(row) = parsed {
                rows.push(row);
            }
        }
    }
    rows
}

/// Parses crop records into fields.
///
/// # CSV Format
///
/// Expected columns: `crop_name, harvest_time, yield_per_acre, price_per_unit, size_in_acres`
///
/// # Example
///
/// ```
/// use farmstead::data::parse_crops;
///
/// let fields = parse_crops("Corn,120,150.0,2.5,10.0\nCorn,120,abc,2.5,10.0\n".as_bytes());
/// assert_eq!(fields.len(), 1);
/// assert_eq!(fields[0].total_yield(), 1500.0);
/// ```
pub fn parse_crops<R: Read>(reader: R) -> Vec<Field> {
    read_rows::<CropRow, R>(reader, CROP_COLUMNS)
        .into_iter()
        .filter_map(|row| Field::try_from(row).ok())
        .collect()
}

/// Parses animal records.
///
/// Records whose type is not exactly `Cow`, `Chicken` or `Pig` are dropped,
/// as are records that fail to parse or carry a non-finite weight.
///
/// # CSV Format
///
/// Expected columns: `animal_type, name, weight`
pub fn parse_animals<R: Read>(reader: R) -> Vec<Animal> {
    read_rows::<AnimalRow, R>(reader, ANIMAL_COLUMNS)
        .into_iter()
        .filter_map(|row| Animal::try_from(row).ok())
        .collect()
}

/// Loads crop fields from a file.
///
/// # Arguments
///
/// * `path` - Path to the crop CSV file
///
/// # Returns
///
/// The fields parsed from every well-formed line, or an error if the file
/// cannot be opened.
pub fn load_crops(path: &Path) -> Result<Vec<Field>, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(parse_crops(file))
}

/// Loads animals from a file.
///
/// # Arguments
///
/// * `path` - Path to the animal CSV file
///
/// # Returns
///
/// The animals parsed from every well-formed line with a known species, or
/// an error if the file cannot be opened.
pub fn load_animals(path: &Path) -> Result<Vec<Animal>, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(parse_animals(file))
}
