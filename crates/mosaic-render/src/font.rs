//! 5x7 bitmap font for text boxes

pub const GLYPH_WIDTH: i64 = 5;
pub const GLYPH_HEIGHT: i64 = 7;
/// Horizontal advance per glyph, in font pixels (glyph plus one column spacing)
pub const GLYPH_ADVANCE: i64 = 6;

/// Bitmap for one character. Each u8 is a row; bit 4 is the leftmost pixel.
/// Lowercase maps to uppercase; unknown characters have no glyph.
pub fn glyph(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),
        '?' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100),
        ':' => g!(0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000),
        '|' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),

        _ => None,
    }
}

/// Width in font pixels of a rendered string, without trailing spacing
pub fn text_width(text: &str) -> i64 {
    let n = text.chars().count() as i64;
    if n == 0 {
        0
    } else {
        n * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('s'), glyph('S'));
        assert!(glyph('s').is_some());
    }

    #[test]
    fn test_unknown_glyph() {
        assert!(glyph('~').is_none());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), 5);
        assert_eq!(text_width("AB"), 11);
    }

    #[test]
    fn test_messages_fully_covered() {
        for text in ["Start!", "GAME OVER", "Score: 0123456789"] {
            assert!(text.chars().all(|c| glyph(c).is_some()), "{text}");
        }
    }
}
