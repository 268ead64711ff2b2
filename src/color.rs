use smart_leds::RGB8;

/// One pixel: 8-bit red, green and blue, no alpha and no gamma
pub type Rgb = RGB8;

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// Dim neutral gray used as a "keyboard is alive" baseline
pub const DIM_GRAY: Rgb = Rgb {
    r: 16,
    g: 16,
    b: 16,
};
