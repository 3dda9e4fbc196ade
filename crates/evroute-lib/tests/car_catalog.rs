use evroute_lib::{plan_route, CarCatalog, Error, RouteRequest, Station};

mod common;

use common::{FixedPredictor, BANGALORE, CHENNAI};

#[test]
fn catalog_range_feeds_the_planner() {
    let model = CarCatalog::builtin().find("ioniq5").expect("known model");
    let range_km = model.effective_range_km(80.0);
    assert_eq!(range_km, 390.0);

    // Bangalore to Chennai (~290 km) fits a 80% IONIQ 5 charge with no
    // stops at all.
    let request = RouteRequest::new(BANGALORE, CHENNAI, range_km);
    let stations = vec![Station::new(1, "Chennai Central", CHENNAI)];
    let plan = plan_route(&request, &stations, &FixedPredictor(0.5)).expect("valid request");

    assert!(plan.outcome.is_complete());
    assert_eq!(plan.stop_count(), 0);
}

#[test]
fn unknown_model_error_is_actionable() {
    let error = CarCatalog::builtin().find("ionq5").unwrap_err();
    let message = format!("{error}");
    assert!(message.contains("unknown car model: ionq5"));
    assert!(message.contains("ioniq5"), "message: {message}");
}

#[test]
fn every_builtin_model_has_positive_range() {
    for model in CarCatalog::builtin().models() {
        assert!(model.base_range_km > 0.0, "{}", model.id);
        assert!(model.battery_capacity_kwh > 0.0, "{}", model.id);
    }
}

#[test]
fn find_error_matches_variant() {
    assert!(matches!(
        CarCatalog::builtin().find("does-not-exist"),
        Err(Error::UnknownCarModel { .. })
    ));
}
