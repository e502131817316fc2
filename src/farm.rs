//! The farm aggregate.
//!
//! A [`Farm`] owns its fields and borrows its animals. Whoever builds the
//! animals keeps them (usually the `Vec<Animal>` returned by the loader) and
//! must keep them alive for as long as the farm is in use.

use std::fmt;

use crate::models::{Animal, Field};

/// A farm made of fields and animals, kept in insertion order.
///
/// # Example
///
/// ```
/// use farmstead::farm::Farm;
/// use farmstead::models::{Animal, Field};
///
/// let herd = vec![Animal::cow("Daisy", 630.3)];
///
/// let mut farm = Farm::new();
/// farm.add_field(Field::new("Corn", 120, 150.0, 2.5, 10.0));
/// farm.add_animals(&herd);
///
/// assert_eq!(farm.total_farm_yield(), 1500.0);
/// assert_eq!(farm.animals().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Farm<'a> {
    fields: Vec<Field>,
    animals: Vec<&'a Animal>,
}

impl<'a> Farm<'a> {
    /// Creates an empty farm.
    pub fn new() -> Self {
        Farm {
            fields: Vec::new(),
            animals: Vec::new(),
        }
    }

    /// Appends a field. The farm keeps its own copy.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Appends a reference to an animal owned elsewhere.
    pub fn add_animal(&mut self, animal: &'a Animal) {
        self.animals.push(animal);
    }

    /// Appends a reference to each animal in `animals`, in order.
    pub fn add_animals(&mut self, animals: &'a [Animal]) {
        self.animals.extend(animals.iter());
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The animals on the farm, in the order they were added.
    pub fn animals(&self) -> &[&'a Animal] {
        &self.animals
    }

    /// Returns `true` when the farm has neither fields nor animals.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.animals.is_empty()
    }

    /// Sum of the total yield of every field.
    pub fn total_farm_yield(&self) -> f64 {
        self.fields.iter().map(Field::total_yield).sum()
    }

    /// Renders the full farm report.
    ///
    /// An empty farm renders as `"Farm Details:\nThe farm is empty!\n"`.
    /// Otherwise every field summary is followed by a blank line, then the
    /// animal section lists each animal with its dietary requirement.
    pub fn render(&self) -> String {
        let mut out = String::from("Farm Details:\n");

        if self.is_empty() {
            out.push_str("The farm is empty!\n");
            return out;
        }

        for field in &self.fields {
            out.push_str(&field.describe());
            out.push('\n');
        }

        out.push_str("\nAnimals:\n");

        if self.animals.is_empty() {
            out.push_str("No animals on the farm!\n");
        } else {
            for animal in &self.animals {
                out.push_str(&animal.describe());
                out.push_str("Dietary Requirements: ");
                out.push_str(&animal.dietary_requirement());
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for Farm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
