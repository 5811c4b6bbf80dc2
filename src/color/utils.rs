use crate::color::Rgb;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Keep the red channel and pin green and blue to zero
pub const fn with_red_only(color: Rgb) -> Rgb {
    Rgb {
        r: color.r,
        g: 0,
        b: 0,
    }
}
