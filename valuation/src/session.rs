use crate::{
    error::{HandlerError, PredictError},
    features::{FeatureRow, PropertyInput},
    format::format_currency,
    map::MapView,
    model::Predictor,
    neighborhoods::Neighborhoods,
};

/// A priced property, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// The model output as returned.
    pub raw: f64,
    /// The amount shown to the user. Never negative.
    pub amount: f64,
    /// `amount` formatted as currency.
    pub display: String,
    pub map: MapView,
}

/// Where the interaction currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    AwaitingInput,
    ResultDisplayed(Estimate),
}

/// Turns form submissions into estimates.
///
/// Borrows the once-loaded reference data and model; a session holds no other
/// state than its current [`Phase`].
pub struct Session<'a> {
    neighborhoods: &'a Neighborhoods,
    predictor: &'a dyn Predictor,
    currency: String,
    phase: Phase,
}

impl<'a> Session<'a> {
    /// Creates a new `Session` in [`Phase::AwaitingInput`].
    ///
    /// # Args
    /// * `neighborhoods` - Reference table used for coordinate lookups.
    /// * `predictor` - The fitted model.
    /// * `currency` - Currency code prefixed to displayed prices.
    pub fn new(
        neighborhoods: &'a Neighborhoods,
        predictor: &'a dyn Predictor,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            neighborhoods,
            predictor,
            currency: currency.into(),
            phase: Phase::AwaitingInput,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn neighborhoods(&self) -> &'a Neighborhoods {
        self.neighborhoods
    }

    /// Drops a displayed result once the input it was computed from changes.
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingInput;
    }

    /// Prices the given input.
    ///
    /// On success the session moves to [`Phase::ResultDisplayed`]; on any
    /// failure it returns to [`Phase::AwaitingInput`].
    ///
    /// # Errors
    /// * `HandlerError::LocationNotFound` if the neighborhood is not in the
    ///   reference data. The predictor is not called.
    /// * `HandlerError::Prediction` if the predictor fails or returns a
    ///   non-finite value.
    pub fn submit(&mut self, input: &PropertyInput) -> Result<Estimate, HandlerError> {
        self.phase = Phase::AwaitingInput;

        let Some(location) = self.neighborhoods.lookup(&input.neighborhood) else {
            log::warn!("neighborhood '{}' not in reference data", input.neighborhood);
            return Err(HandlerError::LocationNotFound {
                neighborhood: input.neighborhood.clone(),
            });
        };

        let row = FeatureRow::assemble(input, location);
        log::debug!("feature row: {row:?}");

        let raw = self.predictor.predict(&row).map_err(|e| {
            log::error!("prediction failed for '{}': {e}", row.neighborhood);
            HandlerError::from(e)
        })?;

        if !raw.is_finite() {
            log::error!("prediction for '{}' is not finite: {raw}", row.neighborhood);
            return Err(PredictError::NonFinite(raw).into());
        }

        if raw < 0.0 {
            log::warn!("model returned a negative price ({raw}); displaying its magnitude");
        }

        let amount = raw.abs();
        let estimate = Estimate {
            raw,
            amount,
            display: format_currency(amount, &self.currency),
            map: MapView::centered(location.latitude, location.longitude),
        };
        log::info!("estimated {} for {}", estimate.display, row.neighborhood);

        self.phase = Phase::ResultDisplayed(estimate.clone());
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{neighborhoods::NeighborhoodRecord, unit::UnitType};

    struct Fixed {
        value: f64,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(value: f64) -> Self {
            Self {
                value,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Predictor for Fixed {
        fn predict(&self, _row: &FeatureRow) -> Result<f64, PredictError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.value)
        }
    }

    fn table() -> Neighborhoods {
        Neighborhoods::from_records(vec![NeighborhoodRecord {
            name: "Dubai Marina".into(),
            latitude: 25.0805,
            longitude: 55.1403,
        }])
    }

    fn input(neighborhood: &str) -> PropertyInput {
        PropertyInput {
            size_in_sqft: 1079,
            bedrooms: 2,
            bathrooms: 2,
            unit_type: UnitType::Apartment,
            neighborhood: neighborhood.into(),
        }
    }

    #[test]
    fn starts_awaiting_input() {
        let table = table();
        let model = Fixed::new(1.0);
        let session = Session::new(&table, &model, "AED");
        assert_eq!(session.phase(), &Phase::AwaitingInput);
    }

    #[test]
    fn negative_output_is_displayed_as_magnitude() {
        let table = table();
        let model = Fixed::new(-1_500_000.0);
        let mut session = Session::new(&table, &model, "AED");

        let estimate = session.submit(&input("Dubai Marina")).unwrap();
        assert_eq!(estimate.raw, -1_500_000.0);
        assert_eq!(estimate.amount, 1_500_000.0);
        assert_eq!(estimate.display, "AED 1,500,000.00");
        assert_eq!(estimate.map, MapView::centered(25.0805, 55.1403));
        assert_eq!(session.phase(), &Phase::ResultDisplayed(estimate));

        session.reset();
        assert_eq!(session.phase(), &Phase::AwaitingInput);
    }

    #[test]
    fn miss_resets_phase_without_predicting() {
        let table = table();
        let model = Fixed::new(10.0);
        let mut session = Session::new(&table, &model, "AED");

        session.submit(&input("Dubai Marina")).unwrap();
        let err = session.submit(&input("Atlantis")).unwrap_err();

        assert!(matches!(err, HandlerError::LocationNotFound { .. }));
        assert_eq!(session.phase(), &Phase::AwaitingInput);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn non_finite_output_is_a_prediction_error() {
        let table = table();

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let model = Fixed::new(value);
            let mut session = Session::new(&table, &model, "AED");

            let err = session.submit(&input("Dubai Marina")).unwrap_err();
            assert!(matches!(
                err,
                HandlerError::Prediction(PredictError::NonFinite(_))
            ));
            assert!(err.to_string().starts_with("Prediction error: "));
            assert_eq!(session.phase(), &Phase::AwaitingInput);
        }
    }
}
