use super::*;

#[test]
fn effective_dpi_takes_the_weaker_axis() {
    // 3000x1500 px printed at 10"x10" (720pt).
    assert_eq!(effective_dpi(3000, 1500, 720.0, 720.0), 150.0);
    assert_eq!(effective_dpi(100, 100, 0.0, 10.0), 0.0);
}

#[test]
fn thresholds() {
    assert_eq!(classify_dpi(300.0), Resolution::Good);
    assert_eq!(classify_dpi(200.0), Resolution::Good);
    assert_eq!(classify_dpi(199.9), Resolution::Low);
    assert_eq!(classify_dpi(149.0), Resolution::VeryLow);
}

#[test]
fn required_pixels_rounds_up() {
    assert_eq!(required_pixels(576.0, 288.0, PRINT_DPI), (2400, 1200));
    assert_eq!(required_pixels(1.0, 1.0, PRINT_DPI), (5, 5));
}
