//! JSON dataset loading.
//!
//! The dataset uses the field names of the city's published stop file
//! (`duraklar`, `nextStops`, `sure`, `mesafe`, `ucret`, ...). English aliases
//! are accepted for every field so hand-written fixtures stay readable.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{Coord, StopId, StopKind};

use super::{ModeEdge, NetworkError, NetworkModel, Stop, TaxiPricing, TransferEdge};

/// Top-level dataset document.
#[derive(Debug, Deserialize)]
struct DatasetDto {
    #[serde(default)]
    city: Option<String>,
    taxi: TaxiDto,
    #[serde(rename = "duraklar", alias = "stops")]
    stops: Vec<StopDto>,
}

#[derive(Debug, Deserialize)]
struct TaxiDto {
    #[serde(rename = "openingFee", alias = "opening_fee")]
    opening_fee: f64,
    #[serde(rename = "costPerKm", alias = "cost_per_km")]
    cost_per_km: f64,
}

#[derive(Debug, Deserialize)]
struct StopDto {
    id: StopId,
    name: String,
    #[serde(rename = "type", alias = "kind")]
    kind: StopKind,
    lat: f64,
    lon: f64,
    #[serde(rename = "sonDurak", alias = "terminal", default)]
    terminal: bool,
    #[serde(rename = "nextStops", alias = "next_stops", default)]
    next_stops: Vec<NextStopDto>,
    #[serde(default)]
    transfer: Option<TransferDto>,
}

#[derive(Debug, Deserialize)]
struct NextStopDto {
    #[serde(rename = "stopId", alias = "stop_id")]
    stop_id: StopId,
    #[serde(rename = "sure", alias = "time")]
    time: f64,
    #[serde(rename = "mesafe", alias = "distance")]
    distance: f64,
    #[serde(rename = "ucret", alias = "fare")]
    fare: f64,
}

#[derive(Debug, Deserialize)]
struct TransferDto {
    #[serde(rename = "transferStopId", alias = "stop_id")]
    stop_id: StopId,
    #[serde(rename = "transferSure", alias = "time")]
    time: f64,
    #[serde(rename = "transferUcret", alias = "fare")]
    fare: f64,
}

impl From<StopDto> for Stop {
    fn from(dto: StopDto) -> Self {
        Stop {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
            coord: Coord::new(dto.lat, dto.lon),
            terminal: dto.terminal,
            edges: dto
                .next_stops
                .into_iter()
                .map(|n| ModeEdge {
                    to: n.stop_id,
                    time: n.time,
                    distance: n.distance,
                    fare: n.fare,
                })
                .collect(),
            transfer: dto.transfer.map(|t| TransferEdge {
                to: t.stop_id,
                time: t.time,
                fare: t.fare,
            }),
        }
    }
}

impl NetworkModel {
    /// Parse and validate a network from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the document is malformed, the taxi record is
    /// missing, or the network fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let dto: DatasetDto = serde_json::from_str(json)?;
        let taxi = TaxiPricing::new(dto.taxi.opening_fee, dto.taxi.cost_per_km)?;
        let stops = dto.stops.into_iter().map(Stop::from).collect();
        NetworkModel::new(dto.city, stops, taxi)
    }

    /// Load and validate a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let network = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            stops = network.len(),
            city = network.city().unwrap_or("unknown"),
            "Loaded transit network"
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TravelMode;
    use std::io::Write;

    const DATASET: &str = r#"{
        "city": "Izmit",
        "taxi": { "openingFee": 10.0, "costPerKm": 4.0 },
        "duraklar": [
            {
                "id": "bus_otogar", "name": "Otogar (Bus)", "type": "bus",
                "lat": 40.78259, "lon": 29.94628, "sonDurak": false,
                "nextStops": [
                    { "stopId": "bus_sekapark", "mesafe": 3.5, "sure": 10, "ucret": 3.0 }
                ],
                "transfer": null
            },
            {
                "id": "bus_sekapark", "name": "Sekapark (Bus)", "type": "bus",
                "lat": 40.76520, "lon": 29.96190, "sonDurak": true,
                "nextStops": [],
                "transfer": {
                    "transferStopId": "tram_sekapark", "transferSure": 3, "transferUcret": 0.5
                }
            },
            {
                "id": "tram_sekapark", "name": "Sekapark (Tram)", "type": "tram",
                "lat": 40.76400, "lon": 29.96300, "sonDurak": true,
                "nextStops": []
            }
        ]
    }"#;

    #[test]
    fn parses_published_field_names() {
        let net = NetworkModel::from_json_str(DATASET).unwrap();
        assert_eq!(net.len(), 3);
        assert_eq!(net.city(), Some("Izmit"));
        assert_eq!(net.taxi().opening_fee, 10.0);

        let otogar = net.stop(&StopId::parse("bus_otogar").unwrap()).unwrap();
        assert_eq!(otogar.kind, StopKind::Bus);
        assert!(!otogar.terminal);
        assert_eq!(otogar.edges.len(), 1);
        assert_eq!(otogar.edges[0].time, 10.0);
        assert_eq!(otogar.edges[0].distance, 3.5);

        let edges = net.edges_from(&StopId::parse("bus_sekapark").unwrap());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].mode, TravelMode::Transfer);
        assert_eq!(edges[0].time, 3.0);
    }

    #[test]
    fn parses_english_aliases() {
        let json = r#"{
            "taxi": { "opening_fee": 12.0, "cost_per_km": 5.0 },
            "stops": [
                { "id": "t1", "name": "One", "kind": "tram", "lat": 1.0, "lon": 1.0,
                  "terminal": true,
                  "next_stops": [
                      { "stop_id": "t2", "time": 2, "distance": 0.5, "fare": 1.5 }
                  ] },
                { "id": "t2", "name": "Two", "kind": "tram", "lat": 1.01, "lon": 1.0,
                  "transfer": { "stop_id": "t1", "time": 1, "fare": 0 } }
            ]
        }"#;
        let net = NetworkModel::from_json_str(json).unwrap();
        assert_eq!(net.len(), 2);
        assert!(net.city().is_none());
        assert_eq!(net.taxi().cost_per_km, 5.0);
        assert!(net.stop(&StopId::parse("t1").unwrap()).unwrap().terminal);
    }

    #[test]
    fn missing_taxi_is_fatal() {
        let json = r#"{ "duraklar": [] }"#;
        assert!(matches!(
            NetworkModel::from_json_str(json),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn incomplete_taxi_is_fatal() {
        let json = r#"{ "taxi": { "openingFee": 10.0 }, "duraklar": [] }"#;
        assert!(matches!(
            NetworkModel::from_json_str(json),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn unknown_target_is_fatal() {
        let json = r#"{
            "taxi": { "openingFee": 10.0, "costPerKm": 4.0 },
            "duraklar": [
                { "id": "bus_a", "name": "A", "type": "bus", "lat": 1.0, "lon": 1.0,
                  "nextStops": [ { "stopId": "bus_ghost", "mesafe": 1, "sure": 1, "ucret": 1 } ] }
            ]
        }"#;
        assert!(matches!(
            NetworkModel::from_json_str(json),
            Err(NetworkError::UnknownStop { .. })
        ));
    }

    #[test]
    fn unknown_stop_type_is_fatal() {
        let json = r#"{
            "taxi": { "openingFee": 10.0, "costPerKm": 4.0 },
            "duraklar": [
                { "id": "f1", "name": "Ferry", "type": "ferry", "lat": 1.0, "lon": 1.0 }
            ]
        }"#;
        assert!(NetworkModel::from_json_str(json).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let net = NetworkModel::load(file.path()).unwrap();
        assert_eq!(net.len(), 3);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NetworkModel::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }

    #[test]
    fn bundled_dataset_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/stops.json");
        let net = NetworkModel::load(path).unwrap();

        assert_eq!(net.city(), Some("Izmit"));
        assert_eq!(net.len(), 10);
        let sekapark = StopId::parse("bus_sekapark").unwrap();
        let modes: Vec<_> = net.edges_from(&sekapark).iter().map(|e| e.mode).collect();
        assert_eq!(modes, vec![TravelMode::Bus, TravelMode::Transfer]);
    }
}
