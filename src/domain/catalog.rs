//! The fixed catalog of adoptable pets.
//!
//! Built once on first access and shared read-only for the rest of the
//! process. Row order is display order.

use std::sync::LazyLock;

use crate::domain::{ImageRef, Pet};

struct CatalogRow {
    id: u32,
    name: &'static str,
    age: u32,
    weight: u32,
    location: &'static str,
    image: &'static str,
}

const fn row(
    id: u32,
    name: &'static str,
    age: u32,
    weight: u32,
    location: &'static str,
    image: &'static str,
) -> CatalogRow {
    CatalogRow { id, name, age, weight, location, image }
}

const CATALOG_ROWS: [CatalogRow; 10] = [
    row(1, "American Bulldog", 1, 5, "San Francisco", "american_bulldog"),
    row(2, "Borador", 2, 4, "Maharashtra", "borador"),
    row(3, "Bulldog", 3, 6, "Ahmednagar", "bulldog"),
    row(4, "Chinook", 4, 7, "Sangali", "chinook"),
    row(5, "Eurasier", 5, 9, "Satara", "eurasier"),
    row(6, "Frenchton", 6, 4, "Nashik", "frenchton"),
    row(7, "German Shepherd", 7, 11, "Jalgao", "german_shepherd"),
    row(8, "Jack Chi", 8, 11, "Pune", "jack_chi"),
    row(9, "Whoodle", 9, 9, "Mumbai", "whoodle"),
    row(10, "Yorkipoo", 6, 5, "Ratnagiri", "yorkipoo"),
];

static CATALOG: LazyLock<Vec<Pet>> = LazyLock::new(|| {
    CATALOG_ROWS
        .iter()
        .filter_map(|row| {
            Pet::new(row.id, row.name, row.age, row.weight, row.location, ImageRef::new(row.image))
                .inspect_err(|err| tracing::error!(id = row.id, %err, "skipping invalid catalog row"))
                .ok()
        })
        .collect()
});

/// Returns every pet in the catalog, in display order.
///
/// The same slice is returned on every call.
pub fn list_pets() -> &'static [Pet] {
    &CATALOG
}

pub fn find_pet(id: u32) -> Option<&'static Pet> {
    list_pets().iter().find(|pet| pet.id() == id)
}
