use criterion::{criterion_group, criterion_main, Criterion};
use evroute_lib::{
    find_nearest, plan_route, AvailabilityFeatures, AvailabilityPredictor, Coordinate,
    PredictorError, RouteRequest, Station,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

struct FixedPredictor(f64);

impl AvailabilityPredictor for FixedPredictor {
    fn predict(&self, _: &AvailabilityFeatures) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
}

/// Grid of stations covering roughly the Indian subcontinent.
static STATIONS: Lazy<Vec<Station>> = Lazy::new(|| {
    let mut stations = Vec::new();
    let mut id = 0;
    for lat_step in 0..25 {
        for lon_step in 0..25 {
            let latitude = 8.0 + lat_step as f64 * 0.9;
            let longitude = 70.0 + lon_step as f64 * 0.5;
            stations.push(Station::new(
                id,
                format!("grid-{lat_step}-{lon_step}"),
                Coordinate::new(latitude, longitude),
            ));
            id += 1;
        }
    }
    stations
});

/// North-south corridor between Bangalore and Delhi latitudes.
static CORRIDOR: Lazy<Vec<Station>> = Lazy::new(|| {
    (0..60)
        .map(|step| {
            Station::new(
                step,
                format!("corridor-{step}"),
                Coordinate::new(13.0 + step as f64 * 0.26, 77.4),
            )
        })
        .collect()
});

fn benchmark_planning(c: &mut Criterion) {
    let start = Coordinate::new(12.9716, 77.5946);
    let end = Coordinate::new(28.6139, 77.209);

    c.bench_function("find_nearest_625_stations", |b| {
        let stations = &*STATIONS;
        b.iter(|| {
            let found = find_nearest(black_box(start), stations).expect("grid is non-empty");
            black_box(found.distance_km)
        });
    });

    c.bench_function("plan_route_bangalore_delhi", |b| {
        let stations = &*CORRIDOR;
        let predictor = FixedPredictor(0.7);
        let request = RouteRequest::new(start, end, 300.0);
        b.iter(|| {
            let plan = plan_route(&request, stations, &predictor).expect("valid request");
            black_box(plan.stop_count())
        });
    });
}

criterion_group!(benches, benchmark_planning);
criterion_main!(benches);
