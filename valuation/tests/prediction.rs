use std::path::PathBuf;

use valuation::{
    AppConfig, Artifacts, FeatureRow, HandlerError, Neighborhoods, Phase, PredictError, Predictor,
    PropertyInput, Session, UnitType, ValuationError,
};

fn assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

fn config() -> AppConfig {
    AppConfig {
        model_path: assets().join("model.json"),
        neighborhoods_path: assets().join("neighborhoods.csv"),
        background_path: assets().join("background.txt"),
        ..AppConfig::default()
    }
}

fn input(unit_type: UnitType, neighborhood: &str) -> PropertyInput {
    PropertyInput {
        size_in_sqft: 1079,
        bedrooms: 2,
        bathrooms: 2,
        unit_type,
        neighborhood: neighborhood.into(),
    }
}

struct Broken;

impl Predictor for Broken {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, PredictError> {
        Err(PredictError::Other(
            "columns are missing: {'quality'}".into(),
        ))
    }
}

#[test]
fn lookup_matches_every_source_row() {
    let table = Neighborhoods::load(assets().join("neighborhoods.csv")).unwrap();
    let raw = std::fs::read_to_string(assets().join("neighborhoods.csv")).unwrap();

    for name in table.distinct_neighborhoods() {
        let first = raw
            .lines()
            .skip(1)
            .map(|l| l.split(',').collect::<Vec<_>>())
            .find(|cols| cols[1] == name)
            .unwrap();

        let record = table.lookup(name).unwrap();
        assert_eq!(record.latitude, first[2].parse::<f64>().unwrap());
        assert_eq!(record.longitude, first[3].parse::<f64>().unwrap());
    }
}

#[test]
fn bundled_artifacts_price_every_neighborhood() {
    let config = config();
    let artifacts = Artifacts::load(&config).unwrap();
    assert!(artifacts.background.height() > 0);

    let mut session = artifacts.session(&config.currency);
    let names: Vec<String> = artifacts
        .neighborhoods
        .distinct_neighborhoods()
        .into_iter()
        .map(str::to_owned)
        .collect();

    for name in names {
        for unit in UnitType::ALL {
            let estimate = session.submit(&input(unit, &name)).unwrap();
            assert!(estimate.amount >= 0.0);
            assert!(estimate.display.starts_with("AED "));
            assert_eq!(session.phase(), &Phase::ResultDisplayed(estimate));
        }
    }
}

#[test]
fn reference_apartment_in_dubai_marina() {
    let config = config();
    let artifacts = Artifacts::load(&config).unwrap();
    let mut session = artifacts.session("AED");

    let estimate = session
        .submit(&input(UnitType::Apartment, "Dubai Marina"))
        .unwrap();

    // -300000 + 12000*25.0805 - 8000*55.1403 + 1450*1079
    //   + 45000*2 + 30000*2 + 90000*2 + 350000
    let expected = -300_000.0 + 12_000.0 * 25.0805 - 8_000.0 * 55.1403
        + 1_450.0 * 1079.0
        + 90_000.0
        + 60_000.0
        + 180_000.0
        + 350_000.0;
    assert!((estimate.raw - expected).abs() < 1e-6);
    assert_eq!(estimate.map.latitude, 25.0805);
    assert_eq!(estimate.map.longitude, 55.1403);
}

#[test]
fn failing_predictor_reports_message_and_session_survives() {
    let table = Neighborhoods::load(assets().join("neighborhoods.csv")).unwrap();
    let mut session = Session::new(&table, &Broken, "AED");

    let err = session
        .submit(&input(UnitType::Villa, "Palm Jumeirah"))
        .unwrap_err();

    assert!(matches!(err, HandlerError::Prediction(_)));
    let msg = err.to_string();
    assert!(msg.starts_with("Prediction error: "));
    assert!(msg.contains("columns are missing"));
    assert_eq!(session.phase(), &Phase::AwaitingInput);

    let err = session
        .submit(&input(UnitType::Villa, "Nowhere"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Location not found in the dataset.");
}

#[test]
fn missing_artifact_is_fatal() {
    let mut config = config();
    config.background_path = assets().join("missing.txt");

    match Artifacts::load(&config) {
        Err(ValuationError::Io { path, .. }) => assert!(path.ends_with("missing.txt")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("loading should fail"),
    }
}
