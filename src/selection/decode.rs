// SPDX-License-Identifier: MPL-2.0
//! Turns a selected file into something the previews can display.
//!
//! The file bytes are read once and owned by an iced image handle. The base64
//! data URI (the portable inline representation) is derived from those bytes
//! on first request. Only the header is inspected here; pixel decoding is left
//! to the renderer.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image;
use image_rs::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// A selected image ready for display.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    data_uri: OnceLock<Arc<str>>,
    mime: &'static str,
    width: u32,
    height: u32,
    handle: image::Handle,
}

impl DecodedImage {
    /// `data:<mime>;base64,<payload>` form of the file, encoded on first call.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        self.data_uri.get_or_init(|| {
            format!("data:{};base64,{}", self.mime, STANDARD.encode(self.bytes())).into()
        })
    }

    /// Raw file contents, as held by the image handle.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match &self.handle {
            image::Handle::Bytes(_, bytes) => &bytes[..],
            _ => &[],
        }
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Natural width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// Height over width; 1.0 for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            1.0
        } else {
            self.height as f32 / self.width as f32
        }
    }
}

/// Reads `path` and builds its [`DecodedImage`].
pub async fn decode_file(path: PathBuf) -> Result<DecodedImage> {
    let bytes = tokio::fs::read(&path).await?;
    decode_bytes(bytes)
}

/// Builds a [`DecodedImage`] from raw file contents.
///
/// Fails when the bytes are not a recognised image format or the header
/// cannot be read.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(Error::Decode("empty file".to_string()));
    }

    let format = image_rs::guess_format(&bytes)?;
    let (width, height) = ImageReader::with_format(Cursor::new(&bytes), format).into_dimensions()?;

    Ok(DecodedImage {
        data_uri: OnceLock::new(),
        mime: mime_type(format),
        width,
        height,
        handle: image::Handle::from_bytes(bytes),
    })
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Tiff => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn png_bytes_produce_png_data_uri() {
        let decoded = decode_bytes(png_bytes(4, 2)).expect("decode png");

        assert_eq!(decoded.mime(), "image/png");
        assert!(decoded.data_uri().starts_with("data:image/png;base64,"));
        assert_eq!((decoded.width(), decoded.height()), (4, 2));
        assert!((decoded.aspect_ratio() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn data_uri_payload_is_the_file_content() {
        let bytes = png_bytes(3, 3);
        let decoded = decode_bytes(bytes.clone()).expect("decode png");

        let payload = decoded
            .data_uri()
            .split_once(',')
            .map(|(_, payload)| payload)
            .expect("payload separator");
        assert_eq!(STANDARD.decode(payload).expect("valid base64"), bytes);
    }

    #[test]
    fn data_uri_is_encoded_on_first_request_only() {
        let bytes = png_bytes(2, 2);
        let decoded = decode_bytes(bytes.clone()).expect("decode png");

        assert!(decoded.data_uri.get().is_none());
        assert_eq!(decoded.bytes(), bytes.as_slice());

        let first = decoded.data_uri().as_ptr();
        assert!(decoded.data_uri.get().is_some());
        assert_eq!(decoded.data_uri().as_ptr(), first);
    }

    #[test]
    fn non_image_bytes_fail_to_decode() {
        let result = decode_bytes(b"definitely not an image".to_vec());
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn empty_bytes_fail_to_decode() {
        assert!(matches!(decode_bytes(Vec::new()), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn decode_file_reads_from_disk() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("photo.png");
        std::fs::write(&path, png_bytes(8, 6)).expect("write png");

        let decoded = decode_file(path).await.expect("decode file");
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[tokio::test]
    async fn decode_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let result = decode_file(temp_dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
