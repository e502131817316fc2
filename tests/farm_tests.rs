//! Tests for the farm aggregate and its report.

use farmstead::farm::Farm;
use farmstead::models::{Animal, Field};

fn sample_fields() -> Vec<Field> {
    vec![
        Field::new("Corn", 120, 150.0, 2.5, 10.0),
        Field::new("Wheat", 90, 100.0, 1.8, 5.0),
        Field::new("Barley", 100, 110.0, 2.0, 8.0),
    ]
}

#[test]
fn test_empty_farm_render() {
    let farm = Farm::new();

    assert!(farm.is_empty());
    assert_eq!(farm.render(), "Farm Details:\nThe farm is empty!\n");
    assert_eq!(farm.total_farm_yield(), 0.0);
}

#[test]
fn test_fields_without_animals() {
    let mut farm = Farm::new();
    farm.add_field(Field::new("Corn", 120, 150.0, 2.5, 10.0));

    assert_eq!(
        farm.render(),
        "Farm Details:\n\
         Field size: 10 acres\n\
         Crop: Corn, Harvest Time: 120 days, Yield: 150 units per acre, Price: $2.5 per unit\n\
         Total Value: $ 3750\n\
         \n\
         \n\
         Animals:\n\
         No animals on the farm!\n"
    );
}

#[test]
fn test_animals_without_fields() {
    let herd = vec![Animal::pig("Snorty", 186.4), Animal::chicken("Coco", 3.1)];
    let mut farm = Farm::new();
    farm.add_animals(&herd);

    assert!(!farm.is_empty());
    assert_eq!(
        farm.render(),
        "Farm Details:\n\
         \n\
         Animals:\n\
         Pig: Snorty, Weight: 186.4 kg\n\
         Dietary Requirements: Requires 9.32 kg of mixed feed\n\
         \n\
         Chicken: Coco, Weight: 3.1 kg\n\
         Dietary Requirements: Requires 0.31 kg of grain\n\
         \n"
    );
}

#[test]
fn test_render_preserves_insertion_order() {
    let herd = vec![
        Animal::cow("Rosie", 735.1),
        Animal::pig("Porky", 171.1),
        Animal::cow("Rosie", 708.8),
    ];
    let mut farm = Farm::new();
    for field in sample_fields() {
        farm.add_field(field);
    }
    farm.add_animals(&herd);

    let report = farm.render();
    let corn = report.find("Crop: Corn").expect("Corn listed");
    let wheat = report.find("Crop: Wheat").expect("Wheat listed");
    let barley = report.find("Crop: Barley").expect("Barley listed");
    assert!(corn < wheat && wheat < barley);

    let first_rosie = report.find("Cow: Rosie, Weight: 735.1 kg").expect("first Rosie");
    let porky = report.find("Pig: Porky").expect("Porky listed");
    let second_rosie = report.find("Cow: Rosie, Weight: 708.8 kg").expect("second Rosie");
    assert!(first_rosie < porky && porky < second_rosie);
}

#[test]
fn test_duplicates_are_kept() {
    let herd = vec![Animal::pig("Porky", 171.1), Animal::pig("Porky", 171.1)];
    let mut farm = Farm::new();
    let field = Field::new("Corn", 120, 150.0, 2.5, 10.0);
    farm.add_field(field.clone());
    farm.add_field(field);
    farm.add_animals(&herd);

    assert_eq!(farm.fields().len(), 2);
    assert_eq!(farm.animals().len(), 2);
    assert_eq!(farm.total_farm_yield(), 3000.0);
}

#[test]
fn test_add_field_stores_a_copy() {
    let mut farm = Farm::new();
    let mut field = Field::new("Corn", 120, 150.0, 2.5, 10.0);
    farm.add_field(field.clone());

    field = Field::new("Wheat", 90, 100.0, 1.8, 5.0);

    assert_eq!(field.crop().name(), "Wheat");
    assert_eq!(farm.fields()[0].crop().name(), "Corn");
    assert_eq!(farm.fields()[0].total_yield(), 1500.0);
}

#[test]
fn test_total_farm_yield_is_order_independent() {
    let fields = sample_fields();

    let mut forward = Farm::new();
    for field in fields.iter().cloned() {
        forward.add_field(field);
    }

    let mut backward = Farm::new();
    for field in fields.iter().rev().cloned() {
        backward.add_field(field);
    }

    let expected: f64 = fields.iter().map(Field::total_yield).sum();
    assert_eq!(forward.total_farm_yield(), expected);
    assert_eq!(backward.total_farm_yield(), 1500.0 + 500.0 + 880.0);
    assert_eq!(forward.total_farm_yield(), backward.total_farm_yield());
}

#[test]
fn test_animals_are_borrowed_from_owner() {
    let herd = vec![Animal::cow("Daisy", 630.3), Animal::chicken("Polly", 2.3)];
    let mut farm = Farm::new();
    farm.add_animal(&herd[1]);
    farm.add_animal(&herd[0]);

    assert!(std::ptr::eq(farm.animals()[0], &herd[1]));
    assert!(std::ptr::eq(farm.animals()[1], &herd[0]));

    drop(farm);
    // The owner still holds every animal after the farm is gone.
    assert_eq!(herd.len(), 2);
}

#[test]
fn test_display_matches_render() {
    let herd = vec![Animal::cow("Ginger", 674.2)];
    let mut farm = Farm::new();
    farm.add_field(Field::new("Tea", 240, 45.0, 8.0, 7.0));
    farm.add_animals(&herd);

    assert_eq!(farm.to_string(), farm.render());
}
