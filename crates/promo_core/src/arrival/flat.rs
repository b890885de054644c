use crate::error::EngineError;
use crate::window::TimeWindow;

use super::{ArrivalDensity, InvertibleCdf};

/// Uniform arrivals: the density does not depend on the time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatArrival;

impl ArrivalDensity for FlatArrival {
    fn density(&self, window: &TimeWindow, _t: f64) -> f64 {
        1.0 / window.duration()
    }

    fn max_density(&self, window: &TimeWindow) -> Option<f64> {
        // Constant density is its own upper bound.
        Some(1.0 / window.duration())
    }
}

impl InvertibleCdf for FlatArrival {
    fn cumulative(&self, window: &TimeWindow) -> f64 {
        (window.current() - window.start()) / window.duration()
    }

    fn inverse_cumulative(&self, window: &TimeWindow, p: f64) -> Result<f64, EngineError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(EngineError::CdfValueOutOfBounds(p));
        }
        Ok(window.start() + p * window.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_the_reciprocal_window_length() {
        let window = TimeWindow::new(0.0, 500.0).expect("valid window");
        assert_eq!(FlatArrival.density(&window, 0.0), 1.0 / 500.0);
        assert_eq!(FlatArrival.density(&window, 499.0), 1.0 / 500.0);
        assert_eq!(FlatArrival.max_density(&window), Some(1.0 / 500.0));
    }

    #[test]
    fn cumulative_is_linear_in_the_current_instant() {
        let mut window = TimeWindow::new(100.0, 300.0).expect("valid window");
        window.set_current(150.0).expect("in bounds");
        assert_eq!(FlatArrival.cumulative(&window), 0.25);
        window.set_current(300.0).expect("in bounds");
        assert_eq!(FlatArrival.cumulative(&window), 1.0);
    }

    #[test]
    fn inverse_cumulative_round_trips() {
        let mut window = TimeWindow::new(100.0, 300.0).expect("valid window");
        for i in 0..=20 {
            let p = f64::from(i) / 20.0;
            let t = FlatArrival
                .inverse_cumulative(&window, p)
                .expect("p in range");
            window.set_current(t).expect("inverse lands in window");
            assert!((FlatArrival.cumulative(&window) - p).abs() < 1e-12);
        }
    }

    #[test]
    fn inverse_cumulative_rejects_out_of_range_values() {
        let window = TimeWindow::new(0.0, 100.0).expect("valid window");
        assert_eq!(
            FlatArrival.inverse_cumulative(&window, -0.1),
            Err(EngineError::CdfValueOutOfBounds(-0.1))
        );
        assert_eq!(
            FlatArrival.inverse_cumulative(&window, 1.1),
            Err(EngineError::CdfValueOutOfBounds(1.1))
        );
    }
}
