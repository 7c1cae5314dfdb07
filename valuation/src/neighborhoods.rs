use std::{collections::HashSet, fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::error::{Result, ValuationError};

/// A named zone with its coordinates.
///
/// Read from the `neighborhood, latitude, longitude` columns of the reference
/// table; any other columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeighborhoodRecord {
    #[serde(rename = "neighborhood")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The reference table of known neighborhoods, in file order.
#[derive(Debug, Clone, Default)]
pub struct Neighborhoods {
    records: Vec<NeighborhoodRecord>,
}

impl Neighborhoods {
    /// Loads the reference table from a CSV file.
    ///
    /// # Errors
    /// Returns a `ValuationError` if the file is missing, a row is malformed
    /// or the table has no rows.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ValuationError::Io {
            path: path.into(),
            source,
        })?;

        let table = Self::from_reader(file).map_err(|source| ValuationError::Csv {
            path: path.into(),
            source,
        })?;

        if table.is_empty() {
            return Err(ValuationError::EmptyReference { path: path.into() });
        }

        log::info!(
            "loaded {} neighborhood rows ({} distinct) from {}",
            table.len(),
            table.distinct_neighborhoods().len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses a reference table from any CSV source with a header row.
    ///
    /// # Errors
    /// Returns the underlying `csv::Error` on the first malformed row.
    pub fn from_reader<R: Read>(rdr: R) -> std::result::Result<Self, csv::Error> {
        let records = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr)
            .deserialize()
            .collect::<std::result::Result<Vec<NeighborhoodRecord>, _>>()?;

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<NeighborhoodRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns each neighborhood name once, in order of first appearance.
    pub fn distinct_neighborhoods(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Returns the first row whose name matches exactly.
    pub fn lookup(&self, name: &str) -> Option<&NeighborhoodRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
id,neighborhood,latitude,longitude,price
1,Dubai Marina,25.0805,55.1403,1200000
2,Downtown Dubai,25.1972,55.2744,2500000
3,Dubai Marina,25.0900,55.1500,900000
4,Jumeirah Village Circle,25.0550,55.2090,650000
";

    #[test]
    fn distinct_keeps_first_appearance_order() {
        let table = Neighborhoods::from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.distinct_neighborhoods(),
            vec!["Dubai Marina", "Downtown Dubai", "Jumeirah Village Circle"]
        );
    }

    #[test]
    fn lookup_returns_first_match() {
        let table = Neighborhoods::from_reader(TABLE.as_bytes()).unwrap();
        let marina = table.lookup("Dubai Marina").unwrap();
        assert_eq!(marina.latitude, 25.0805);
        assert_eq!(marina.longitude, 55.1403);
        assert!(table.lookup("dubai marina").is_none());
        assert!(table.lookup("Atlantis").is_none());
    }

    #[test]
    fn missing_column_is_rejected() {
        let csv = "neighborhood,latitude\nDubai Marina,25.08\n";
        assert!(Neighborhoods::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn bad_coordinate_is_rejected() {
        let csv = "neighborhood,latitude,longitude\nDubai Marina,north,55.14\n";
        assert!(Neighborhoods::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn load_fails_on_missing_and_empty_files() {
        let err = Neighborhoods::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ValuationError::Io { .. }));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "neighborhood,latitude,longitude\n").unwrap();
        let err = Neighborhoods::load(&path).unwrap_err();
        assert!(matches!(err, ValuationError::EmptyReference { .. }));
    }
}
