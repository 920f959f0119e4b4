//! Measurement oracles.
//!
//! The packer never renders anything itself. It asks a [`MeasurementOracle`]
//! how tall a candidate line would be at the target width and compares that
//! against a threshold derived from a single-line placeholder.
//!
//! An oracle is the scratch surface of one wrapping operation: it takes
//! `&mut self` and is never shared between elements.

pub mod metrics;

use markup::Element;

use crate::error::MeasurementError;

pub use metrics::TextMetrics;

/// Content measured to establish the height of a single line.
pub const PLACEHOLDER: &str = "42";

/// Reports rendered sizes of markup fragments.
pub trait MeasurementOracle {
    /// Rendered height of `fragment` laid out at `width`.
    fn measure_height(&mut self, fragment: &str, width: f32) -> Result<f32, MeasurementError>;

    /// Rendered width of the target element, used to resolve `auto` widths.
    fn element_width(&mut self, element: &Element) -> Result<f32, MeasurementError>;

    /// Height of a single placeholder line at `width`.
    fn baseline_height(&mut self, width: f32) -> Result<f32, MeasurementError> {
        self.measure_height(PLACEHOLDER, width)
    }
}

impl<T: MeasurementOracle + ?Sized> MeasurementOracle for &mut T {
    fn measure_height(&mut self, fragment: &str, width: f32) -> Result<f32, MeasurementError> {
        (**self).measure_height(fragment, width)
    }

    fn element_width(&mut self, element: &Element) -> Result<f32, MeasurementError> {
        (**self).element_width(element)
    }

    fn baseline_height(&mut self, width: f32) -> Result<f32, MeasurementError> {
        (**self).baseline_height(width)
    }
}

impl<T: MeasurementOracle + ?Sized> MeasurementOracle for Box<T> {
    fn measure_height(&mut self, fragment: &str, width: f32) -> Result<f32, MeasurementError> {
        (**self).measure_height(fragment, width)
    }

    fn element_width(&mut self, element: &Element) -> Result<f32, MeasurementError> {
        (**self).element_width(element)
    }

    fn baseline_height(&mut self, width: f32) -> Result<f32, MeasurementError> {
        (**self).baseline_height(width)
    }
}

/// Reject heights the packer cannot compare against a threshold.
pub(crate) fn checked_height(height: f32) -> Result<f32, MeasurementError> {
    if height.is_finite() && height >= 0.0 {
        Ok(height)
    } else {
        Err(MeasurementError::InvalidHeight(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f32);

    impl MeasurementOracle for Fixed {
        fn measure_height(&mut self, _: &str, _: f32) -> Result<f32, MeasurementError> {
            Ok(self.0)
        }

        fn element_width(&mut self, _: &Element) -> Result<f32, MeasurementError> {
            Err(MeasurementError::NoElementWidth)
        }
    }

    #[test]
    fn baseline_defaults_to_placeholder_measurement() {
        let mut oracle = Fixed(12.5);
        assert_eq!(oracle.baseline_height(100.0), Ok(12.5));
    }

    fn baseline_of<O: MeasurementOracle>(mut oracle: O) -> Result<f32, MeasurementError> {
        oracle.baseline_height(10.0)
    }

    #[test]
    fn boxed_and_borrowed_oracles_delegate() {
        let boxed: Box<dyn MeasurementOracle> = Box::new(Fixed(3.0));
        assert_eq!(baseline_of(boxed), Ok(3.0));

        let mut fixed = Fixed(4.0);
        assert_eq!(baseline_of(&mut fixed), Ok(4.0));
    }

    #[test]
    fn checked_height_rejects_nan_and_negative() {
        assert!(checked_height(f32::NAN).is_err());
        assert!(checked_height(f32::INFINITY).is_err());
        assert!(checked_height(-1.0).is_err());
        assert_eq!(checked_height(0.0), Ok(0.0));
    }
}
