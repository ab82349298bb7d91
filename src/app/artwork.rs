use mpd_client::{Client, commands};

use crate::ascii::{self, AsciiArtwork};

/// Fetch, decode and render the current track's cover image into a glyph
/// grid bounded by `target_w` columns and `max_h` rows.
///
/// Every failure short-circuits to `None` and the caller draws a fallback
/// message instead. Nothing is retained between calls: the byte store and
/// decoded pixels live only for the duration of one render.
pub async fn render_current_artwork(
    client: &Client,
    target_w: usize,
    max_h: usize,
) -> Option<AsciiArtwork> {
    if target_w == 0 || max_h == 0 {
        return None;
    }

    let playing = client.command(commands::CurrentSong).await.ok()??;
    let uri = playing.song.file_path().to_string_lossy().into_owned();

    let blob = fetch_cover(client, &uri).await?;
    let art = decode_and_render(&blob, target_w, max_h);
    drop(blob);
    art
}

/// Read the complete cover byte stream for `uri`. The protocol client
/// consumes the chunked binary responses up to the end-of-stream marker;
/// a read error or an empty blob yields nothing.
async fn fetch_cover(client: &Client, uri: &str) -> Option<Vec<u8>> {
    match client.album_art(uri).await {
        Ok(Some((data, _mime))) if !data.is_empty() => Some(data.to_vec()),
        Ok(_) => None,
        Err(e) => {
            log::debug!("cover fetch failed for \"{uri}\": {e}");
            None
        }
    }
}

/// Decode a compressed image to grayscale and hand it to the glyph
/// renderer. Undecodable or degenerate images yield nothing.
fn decode_and_render(blob: &[u8], target_w: usize, max_h: usize) -> Option<AsciiArtwork> {
    let decoded = match image::load_from_memory(blob) {
        Ok(img) => img,
        Err(e) => {
            log::debug!("cover decode failed: {e}");
            return None;
        }
    };

    let gray = decoded.to_luma8();
    let (src_w, src_h) = gray.dimensions();
    if src_w == 0 || src_h == 0 {
        return None;
    }

    Some(ascii::render(
        gray.as_raw(),
        src_w as usize,
        src_h as usize,
        target_w,
        max_h,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(image: &image::GrayImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn white_png_renders_to_blank_grid() {
        let blob = encode_png(&image::GrayImage::from_pixel(8, 8, image::Luma([255u8])));

        let art = decode_and_render(&blob, 4, 4).unwrap();

        assert_eq!(art.width(), 4);
        assert!(art.height() <= 4);
        for row in art.rows() {
            assert_eq!(row, "    ");
        }
    }

    #[test]
    fn black_png_renders_to_dense_grid() {
        let blob = encode_png(&image::GrayImage::from_pixel(8, 8, image::Luma([0u8])));

        let art = decode_and_render(&blob, 4, 4).unwrap();

        for row in art.rows() {
            assert_eq!(row, "@@@@");
        }
    }

    #[test]
    fn garbage_bytes_decode_to_nothing() {
        assert!(decode_and_render(&[0xde, 0xad, 0xbe, 0xef], 10, 10).is_none());
    }
}
