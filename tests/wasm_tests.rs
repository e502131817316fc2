//! Tests for the JSON bindings.

use farmstead::wasm::{farm_report, get_version, sample_farm_report};
use serde_json::{json, Value};

fn parse(output: &str) -> Value {
    serde_json::from_str(output).expect("bindings should return valid JSON")
}

#[test]
fn test_farm_report_from_csv_text() {
    let input = json!({
        "crops": "Corn,120,150.0,2.5,10.0\nCorn,120,abc,2.5,10.0\n",
        "animals": "Pig,Snorty,186.4\nGoat,Billy,50.0\n",
    });

    let result = parse(&farm_report(&input.to_string()));

    assert_eq!(result["success"], true);
    assert!(result["error"].is_null());
    assert_eq!(result["total_farm_yield"], 1500.0);

    let fields = result["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["crop_name"], "Corn");
    assert_eq!(fields[0]["total_value"], 3750.0);

    let animals = result["animals"].as_array().expect("animals array");
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0]["species"], "Pig");
    assert_eq!(animals[0]["name"], "Snorty");
    assert_eq!(animals[0]["feed_name"], "mixed feed");

    let report = result["report"].as_str().expect("report text");
    assert!(report.starts_with("Farm Details:\nField size: 10 acres\n"));
    assert!(report.contains("Dietary Requirements: Requires 9.32 kg of mixed feed\n"));
    assert!(report.ends_with("\nTotal Farm Yield: 1500 units\n"));
}

#[test]
fn test_farm_report_missing_inputs_default_to_empty() {
    let result = parse(&farm_report("{}"));

    assert_eq!(result["success"], true);
    assert_eq!(
        result["report"],
        "Farm Details:\nThe farm is empty!\n\nTotal Farm Yield: 0 units\n"
    );
}

#[test]
fn test_farm_report_invalid_json() {
    let result = parse(&farm_report("not json"));

    assert_eq!(result["success"], false);
    let error = result["error"].as_str().expect("error message");
    assert!(error.starts_with("Invalid input:"));
    assert_eq!(result["report"], "");
}

#[test]
fn test_sample_farm_report() {
    let result = parse(&sample_farm_report());

    assert_eq!(result["success"], true);
    assert_eq!(result["total_farm_yield"], 31290.0);
    assert_eq!(result["fields"].as_array().map(Vec::len), Some(20));
    assert_eq!(result["animals"].as_array().map(Vec::len), Some(34));
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}
