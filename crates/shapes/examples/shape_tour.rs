//! Small tour of the shape API with logging enabled.
//!
//! Logs at TRACE so cache fills and rejected constructions are visible:
//!   cargo run -p shapes --example shape_tour

use shapes::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    let circle = match Circle::new(5.0) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(%err, "circle");
            return;
        }
    };
    // Second read hits the cache; only one "computed" event is logged.
    tracing::info!(area = circle.area(), "circle r=5");
    tracing::info!(area = circle.area(), "circle r=5 (cached)");

    if let Err(err) = Circle::new(0.0) {
        tracing::info!(%err, "circle r=0");
    }

    let (a, b, c) = (
        Point::new(-2.5, -1.0),
        Point::new(2.5, -1.0),
        Point::new(-2.5, 5.0),
    );
    match Triangle::new(a, b, c) {
        Ok(t) => {
            tracing::info!(%a, %b, %c, area = t.area(), is_right = t.is_right(), "triangle");
            let shapes: [&dyn Shape; 2] = [&circle, &t];
            let total: f64 = shapes.iter().map(|s| s.area()).sum();
            tracing::info!(total, "total area");
        }
        Err(err) => tracing::error!(%err, "triangle"),
    }

    if let Err(err) = Triangle::with_tolerance(
        Point::new(1.0, 0.0),
        Point::new(1.0, 5.0),
        Point::new(1.5, 1.0),
        1.0,
    ) {
        tracing::info!(%err, default_tolerance = DEFAULT_TOLERANCE, "clockwise triangle");
    }
}
