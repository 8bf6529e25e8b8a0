use crate::domain::{DomainError, DomainResult};

/// Opaque reference to a bundled image asset.
///
/// The key is carried through navigation untouched; only the presentation
/// layer turns it into something displayable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn asset_path(&self) -> String {
        format!("assets/{}.png", self.0)
    }
}

/// A pet listed for adoption.
///
/// Fields are fixed at construction. `name` and `location` are guaranteed
/// to contain at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use pawlist::domain::{ImageRef, Pet};
///
/// let pet = Pet::new(6, "Frenchton", 6, 10, "Nashik", ImageRef::new("frenchton")).unwrap();
/// assert_eq!(pet.name(), "Frenchton");
/// assert_eq!(pet.weight(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    id: u32,
    name: String,
    age: u32,
    weight: u32,
    location: String,
    image: ImageRef,
}

impl Pet {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        age: u32,
        weight: u32,
        location: impl Into<String>,
        image: ImageRef,
    ) -> DomainResult<Self> {
        let name = name.into();
        let location = location.into();

        if name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        if location.trim().is_empty() {
            return Err(DomainError::EmptyField("location"));
        }

        Ok(Self {
            id,
            name,
            age,
            weight,
            location,
            image,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}
