//! Farmstead - Command Line Interface
//!
//! Loads the crop and animal files, then prints the farm report.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use farmstead::{
    data::{load_animals, load_crops},
    display::display_report,
    farm::Farm,
};

/// Command-line arguments for Farmstead.
#[derive(Parser, Debug)]
#[command(name = "farmstead")]
#[command(author, version, about = "Summarize the fields and animals of a farm", long_about = None)]
struct Args {
    /// Crop file: crop_name,harvest_time,yield_per_acre,price_per_unit,size_in_acres
    #[arg(long, default_value = "data/crops.csv")]
    crops: PathBuf,

    /// Animal file: animal_type,name,weight
    #[arg(long, default_value = "data/animals.csv")]
    animals: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let fields = load_crops(&args.crops).unwrap_or_else(|_| {
        eprintln!("Could not open file {}", args.crops.display());
        Vec::new()
    });

    // Owns the animals for the whole run; the farm only borrows them.
    let animals = load_animals(&args.animals).unwrap_or_else(|_| {
        eprintln!("Could not open file {}", args.animals.display());
        Vec::new()
    });

    let mut farm = Farm::new();
    for field in fields {
        farm.add_field(field);
    }
    farm.add_animals(&animals);

    display_report(&farm);

    Ok(())
}
