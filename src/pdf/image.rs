//! JPEG logo embedding.
//!
//! The JPEG bytes go straight into a DCTDecode image XObject; only the
//! header is decoded, to pick up dimensions and color space.

use std::fs;
use std::path::Path;

use jpeg_decoder::{Decoder as JpegDecoder, PixelFormat};
use lopdf::{Object, Stream, dictionary};

use crate::core::InvoiceError;

/// Upper bound on logo size; anything larger is a mistake, not a logo.
const MAX_LOGO_BYTES: usize = 10_000_000;

/// A decoded logo ready to be added to the document as /Im1.
#[derive(Debug)]
pub(crate) struct Logo {
    pub stream: Stream,
}

/// Read and validate a JPEG logo. A missing or unreadable file is fatal
/// (`InvoiceError::MissingAsset`), surfaced before any page is laid out.
pub(crate) fn load_logo(path: &Path) -> Result<Logo, InvoiceError> {
    let data = fs::read(path).map_err(|source| InvoiceError::MissingAsset {
        path: path.to_owned(),
        source,
    })?;

    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return Err(InvoiceError::Render(format!(
            "{} is not a valid JPEG (missing SOI marker)",
            path.display()
        )));
    }
    if data.len() > MAX_LOGO_BYTES {
        return Err(InvoiceError::Render(format!(
            "logo {} too large ({} bytes)",
            path.display(),
            data.len()
        )));
    }

    let mut decoder = JpegDecoder::new(&data[..]);
    decoder
        .read_info()
        .map_err(|e| InvoiceError::Render(format!("failed to read JPEG info from {}: {e}", path.display())))?;
    let info = decoder
        .info()
        .ok_or_else(|| InvoiceError::Render(format!("no JPEG info in {}", path.display())))?;

    let color_space = match info.pixel_format {
        PixelFormat::L8 => "DeviceGray",
        PixelFormat::RGB24 => "DeviceRGB",
        other => {
            return Err(InvoiceError::Render(format!(
                "unsupported JPEG pixel format in {}: {other:?}",
                path.display()
            )));
        }
    };

    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(info.width as i64),
            "Height" => Object::Integer(info.height as i64),
            "ColorSpace" => color_space,
            "BitsPerComponent" => Object::Integer(8),
            "Filter" => "DCTDecode",
        },
        data,
    );

    Ok(Logo { stream })
}
