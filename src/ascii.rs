//! Luminance-to-glyph rendering of decoded cover art.

/// Glyphs ordered dark to light.
const GLYPH_RAMP: &[u8; 10] = b"@%#*+=-:. ";

/// A finished character grid. Every row has char length exactly `width`.
/// Built fresh per render call and dropped after drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArtwork {
    rows: Vec<String>,
    width: usize,
}

impl AsciiArtwork {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Map a grayscale value to an index into the ramp.
fn glyph_index(pixel: u8) -> usize {
    (pixel as usize * (GLYPH_RAMP.len() - 1)) / 255
}

/// Render a row-major grayscale buffer into a character grid of width
/// `target_w`.
///
/// The output height follows the source aspect ratio, halved because
/// terminal cells are roughly twice as tall as wide, then clamped to
/// `[1, max_h]`. Source pixels are sampled nearest-neighbour, no
/// interpolation. Callers must pass `target_w >= 1` and `max_h >= 1`.
pub fn render(
    pixels: &[u8],
    src_w: usize,
    src_h: usize,
    target_w: usize,
    max_h: usize,
) -> AsciiArtwork {
    debug_assert!(src_w >= 1 && src_h >= 1);
    debug_assert!(target_w >= 1 && max_h >= 1);
    debug_assert!(pixels.len() >= src_w * src_h);

    let aspect = src_h as f64 / src_w as f64;
    let ascii_h = ((target_w as f64 * aspect / 2.0) + 0.5) as usize;
    let ascii_h = ascii_h.clamp(1, max_h);

    let mut rows = Vec::with_capacity(ascii_h);
    for r in 0..ascii_h {
        let mut row = String::with_capacity(target_w);
        let y = (r * src_h) / ascii_h;
        for c in 0..target_w {
            let x = (c * src_w) / target_w;
            let pixel = pixels[y * src_w + x];
            row.push(GLYPH_RAMP[glyph_index(pixel)] as char);
        }
        rows.push(row);
    }

    AsciiArtwork {
        rows,
        width: target_w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: u8, w: usize, h: usize) -> Vec<u8> {
        vec![value; w * h]
    }

    #[test]
    fn every_row_has_exactly_target_width() {
        for (src_w, src_h, target_w, max_h) in
            [(1, 1, 1, 1), (640, 480, 40, 12), (3, 1000, 7, 5), (31, 17, 80, 200)]
        {
            let art = render(&uniform(128, src_w, src_h), src_w, src_h, target_w, max_h);
            assert!(art.height() >= 1 && art.height() <= max_h);
            assert_eq!(art.width(), target_w);
            for row in art.rows() {
                assert_eq!(row.chars().count(), target_w);
            }
        }
    }

    #[test]
    fn height_follows_halved_aspect_ratio() {
        // square source: height = round(width / 2)
        let art = render(&uniform(0, 100, 100), 100, 100, 40, 100);
        assert_eq!(art.height(), 20);

        // 2:1 tall source doubles that
        let art = render(&uniform(0, 100, 200), 100, 200, 40, 100);
        assert_eq!(art.height(), 40);

        // clamped when the cap is lower
        let art = render(&uniform(0, 100, 200), 100, 200, 40, 10);
        assert_eq!(art.height(), 10);
    }

    #[test]
    fn very_wide_sources_still_render_one_row() {
        let art = render(&uniform(90, 1000, 1), 1000, 1, 10, 5);
        assert_eq!(art.height(), 1);
    }

    #[test]
    fn glyph_mapping_is_monotonic() {
        let mut last = 0;
        for p in 0..=255u8 {
            let idx = glyph_index(p);
            assert!(idx >= last, "index decreased at pixel {p}");
            last = idx;
        }
        assert_eq!(glyph_index(0), 0);
        assert_eq!(glyph_index(255), 9);
    }

    #[test]
    fn white_buffer_renders_only_blanks() {
        let art = render(&uniform(255, 16, 16), 16, 16, 8, 8);
        for row in art.rows() {
            assert!(row.chars().all(|c| c == ' '), "unexpected glyph in {row:?}");
        }
    }

    #[test]
    fn black_buffer_renders_only_densest_glyph() {
        let art = render(&uniform(0, 16, 16), 16, 16, 8, 8);
        for row in art.rows() {
            assert!(row.chars().all(|c| c == '@'), "unexpected glyph in {row:?}");
        }
    }

    #[test]
    fn half_split_image_maps_to_two_glyph_columns() {
        // left half black, right half white
        let (w, h) = (8usize, 8usize);
        let mut pixels = vec![0u8; w * h];
        for row in pixels.chunks_mut(w) {
            row[w / 2..].fill(255);
        }
        let art = render(&pixels, w, h, 4, 4);
        for row in art.rows() {
            assert_eq!(row, "@@  ");
        }
    }
}
