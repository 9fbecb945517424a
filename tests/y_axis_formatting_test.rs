// tests/y_axis_formatting_test.rs

use report_plotter::plot_framework::format_axis_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_fractional_values_keep_decimals() {
        // Directions live in -pi/2..pi/2, so ticks must not collapse to integers
        assert_eq!(format_axis_value(0.25), "0.25");
        assert_eq!(format_axis_value(-1.57), "-1.57");
        assert_eq!(format_axis_value(5.5), "5.50");
        assert_eq!(format_axis_value(0.5), "0.50");
        assert_eq!(format_axis_value(9.999), "10.00");
    }

    #[test]
    fn test_integers_and_medium_values() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(10.0), "10");
        assert_eq!(format_axis_value(-250.0), "-250");
        assert_eq!(format_axis_value(12.6), "13");
    }

    #[test]
    fn test_large_values_use_suffixes() {
        assert_eq!(format_axis_value(1000.0), "1k");
        assert_eq!(format_axis_value(-5000.0), "-5k");
        assert_eq!(format_axis_value(12500.0), "12k"); // 12.5 rounds to even with {:.0}
        assert_eq!(format_axis_value(1_000_000.0), "1.0M");
        assert_eq!(format_axis_value(2_500_000.0), "2.5M");
    }
}
