//! Helpers for packed `0xAARRGGBB` pixels.
//!
//! Desktop hosts commonly hand pixels over as one `u32` per pixel. These
//! accessors split and build that representation.

/// Red channel of a packed pixel.
#[inline]
pub fn red(argb: u32) -> u8 {
    ((argb >> 16) & 0xFF) as u8
}

/// Green channel of a packed pixel.
#[inline]
pub fn green(argb: u32) -> u8 {
    ((argb >> 8) & 0xFF) as u8
}

/// Blue channel of a packed pixel.
#[inline]
pub fn blue(argb: u32) -> u8 {
    (argb & 0xFF) as u8
}

/// Pack RGB channels into an opaque `0xFFRRGGBB` pixel.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_channels() {
        let argb = 0x80_12_34_56;
        assert_eq!(red(argb), 0x12);
        assert_eq!(green(argb), 0x34);
        assert_eq!(blue(argb), 0x56);
    }

    #[test]
    fn test_pack_is_opaque() {
        assert_eq!(pack_rgb(0, 0, 0), 0xFF00_0000);
        assert_eq!(pack_rgb(255, 255, 255), 0xFFFF_FFFF);
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0xFF12_3456);
    }

    #[test]
    fn test_pack_unpack_consistency() {
        for (r, g, b) in [(0u8, 0u8, 0u8), (255, 0, 0), (1, 2, 3), (200, 100, 50)] {
            let packed = pack_rgb(r, g, b);
            assert_eq!((red(packed), green(packed), blue(packed)), (r, g, b));
        }
    }
}
