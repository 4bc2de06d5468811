//! Loading of the race catalog file.
//!
//! The catalog is a JSON array in the Ergast schedule shape. Only the fields
//! the bot displays are read; everything else in an entry is ignored.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Date format used by the `date` field of every catalog entry.
pub const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// The catalog could not be turned into race records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File is missing or unreadable
    #[error("failed to read race catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File is not a JSON array of race entries
    #[error("failed to parse race catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("race '{race}' has invalid date '{date}'")]
    InvalidDate { race: String, date: String },
}

#[derive(Debug, Deserialize)]
struct RawRace {
    #[serde(rename = "raceName")]
    race_name: String,
    date: String,
    time: String,
    #[serde(rename = "Circuit")]
    circuit: RawCircuit,
}

#[derive(Debug, Deserialize)]
struct RawCircuit {
    #[serde(rename = "circuitName")]
    circuit_name: String,
    #[serde(rename = "Location")]
    location: RawLocation,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    locality: String,
    country: String,
}

/// A single race as read from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRecord {
    pub name: String,
    pub date: NaiveDate,
    /// The date exactly as written in the catalog, used for display.
    pub date_str: String,
    /// Display-only; never parsed.
    pub time: String,
    pub circuit_name: String,
    pub locality: String,
    pub country: String,
}

impl RaceRecord {
    /// Locality and country joined for display, e.g. `Monza, Italy`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.locality, self.country)
    }
}

impl TryFrom<RawRace> for RaceRecord {
    type Error = CatalogError;

    fn try_from(raw: RawRace) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&raw.date, CATALOG_DATE_FORMAT).map_err(|_| {
            CatalogError::InvalidDate {
                race: raw.race_name.clone(),
                date: raw.date.clone(),
            }
        })?;

        Ok(Self {
            name: raw.race_name,
            date,
            date_str: raw.date,
            time: raw.time,
            circuit_name: raw.circuit.circuit_name,
            locality: raw.circuit.location.locality,
            country: raw.circuit.location.country,
        })
    }
}

/// Parses catalog JSON into records sorted ascending by date.
///
/// The sort is stable, so races sharing a date keep their file order. Both
/// resolvers take the first qualifying record, which after sorting is the
/// earliest one.
pub fn parse_catalog(json: &str, path: &Path) -> Result<Vec<RaceRecord>, CatalogError> {
    let raw: Vec<RawRace> = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut races = raw
        .into_iter()
        .map(RaceRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    races.sort_by_key(|race| race.date);

    Ok(races)
}

/// Reads the whole catalog file. Nothing is cached; every call hits the disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<RaceRecord>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&json, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RACES: &str = r#"[
        {
            "season": "2024",
            "round": "7",
            "raceName": "Emilia Romagna Grand Prix",
            "date": "2024-05-19",
            "time": "13:00:00Z",
            "Circuit": {
                "circuitId": "imola",
                "circuitName": "Autodromo Enzo e Dino Ferrari",
                "Location": { "lat": "44.3439", "long": "11.7167", "locality": "Imola", "country": "Italy" }
            }
        },
        {
            "raceName": "Miami Grand Prix",
            "date": "2024-05-05",
            "time": "20:00:00Z",
            "Circuit": {
                "circuitName": "Miami International Autodrome",
                "Location": { "locality": "Miami", "country": "USA" }
            }
        }
    ]"#;

    #[test]
    fn test_parse_sorts_by_date() {
        let races = parse_catalog(TWO_RACES, Path::new("races.json")).unwrap();

        assert_eq!(races.len(), 2);
        assert_eq!(races[0].name, "Miami Grand Prix");
        assert_eq!(races[1].name, "Emilia Romagna Grand Prix");
    }

    #[test]
    fn test_parse_keeps_display_fields() {
        let races = parse_catalog(TWO_RACES, Path::new("races.json")).unwrap();
        let imola = &races[1];

        assert_eq!(imola.date, NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());
        assert_eq!(imola.date_str, "2024-05-19");
        assert_eq!(imola.time, "13:00:00Z");
        assert_eq!(imola.circuit_name, "Autodromo Enzo e Dino Ferrari");
        assert_eq!(imola.location(), "Imola, Italy");
    }

    #[test]
    fn test_parse_invalid_date() {
        let json = r#"[{
            "raceName": "Broken GP",
            "date": "19/05/2024",
            "time": "13:00:00Z",
            "Circuit": { "circuitName": "Nowhere", "Location": { "locality": "X", "country": "Y" } }
        }]"#;

        let err = parse_catalog(json, Path::new("races.json")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { ref date, .. } if date == "19/05/2024"));
    }

    #[test]
    fn test_parse_missing_circuit() {
        let json = r#"[{ "raceName": "Broken GP", "date": "2024-05-19", "time": "13:00:00Z" }]"#;

        let err = parse_catalog(json, Path::new("races.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_parse_empty_array() {
        let races = parse_catalog("[]", Path::new("races.json")).unwrap();
        assert!(races.is_empty());
    }
}
