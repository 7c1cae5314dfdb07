use crate::{neighborhoods::NeighborhoodRecord, unit::UnitType};

/// Placeholder id the model was trained with; every request uses it.
pub const PLACEHOLDER_ID: i64 = 0;

/// Names of the numeric columns of a [`FeatureRow`], in schema order.
pub const NUMERIC_FEATURES: [&str; 7] = [
    "id",
    "latitude",
    "longitude",
    "size_in_sqft",
    "no_of_bedrooms",
    "no_of_bathrooms",
    "quality",
];

/// Names of the categorical columns of a [`FeatureRow`].
pub const CATEGORICAL_FEATURES: [&str; 1] = ["neighborhood"];

/// The property attributes collected from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInput {
    pub size_in_sqft: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub unit_type: UnitType,
    pub neighborhood: String,
}

/// One row shaped exactly like the model's training schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub id: i64,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size_in_sqft: f64,
    pub no_of_bedrooms: u32,
    pub no_of_bathrooms: u32,
    pub quality: u8,
}

impl FeatureRow {
    /// Merges the user input with the looked-up coordinates.
    ///
    /// The neighborhood string is passed through unchanged; encoding it is the
    /// model's concern.
    pub fn assemble(input: &PropertyInput, location: &NeighborhoodRecord) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            neighborhood: input.neighborhood.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            size_in_sqft: f64::from(input.size_in_sqft),
            no_of_bedrooms: u32::from(input.bedrooms),
            no_of_bathrooms: u32::from(input.bathrooms),
            quality: input.unit_type.quality(),
        }
    }

    /// Returns a numeric column by name.
    pub fn numeric(&self, name: &str) -> Option<f64> {
        let v = match name {
            "id" => self.id as f64,
            "latitude" => self.latitude,
            "longitude" => self.longitude,
            "size_in_sqft" => self.size_in_sqft,
            "no_of_bedrooms" => f64::from(self.no_of_bedrooms),
            "no_of_bathrooms" => f64::from(self.no_of_bathrooms),
            "quality" => f64::from(self.quality),
            _ => return None,
        };
        Some(v)
    }

    /// Returns a categorical column by name.
    pub fn categorical(&self, name: &str) -> Option<&str> {
        match name {
            "neighborhood" => Some(&self.neighborhood),
            _ => None,
        }
    }
}
