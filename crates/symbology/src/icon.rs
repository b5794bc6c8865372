//! Icon files extracted from picture marker symbols.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use tracing::info;

use ags_common::AgsResult;

const SVG_FORMAT: &str = "image/svg+xml";

/// How picture marker images are written next to the SLD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconFormat {
    /// An SVG wrapper embedding the raster as a data URI
    #[default]
    Svg,
    /// The decoded raster bytes as-is
    Img,
}

impl FromStr for IconFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(IconFormat::Svg),
            "img" => Ok(IconFormat::Img),
            other => Err(format!("unknown icon format '{}', expected svg or img", other)),
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconFormat::Svg => write!(f, "svg"),
            IconFormat::Img => write!(f, "img"),
        }
    }
}

impl IconFormat {
    /// File extension and SLD `Format` for an icon of `content_type`.
    pub fn resolve(&self, content_type: Option<&str>) -> (String, String) {
        match self {
            IconFormat::Svg => ("svg".to_string(), SVG_FORMAT.to_string()),
            IconFormat::Img => {
                let ext = image_subtype(content_type);
                (ext.to_string(), format!("image/{}", ext))
            }
        }
    }
}

/// Subtype of an `image/*` content type, or `png` when it is missing or not
/// a plain token. The result ends up in file names and hrefs.
fn image_subtype(content_type: Option<&str>) -> &str {
    content_type
        .and_then(|content_type| content_type.split_once('/'))
        .map(|(_, subtype)| subtype.trim())
        .filter(|subtype| {
            !subtype.is_empty()
                && subtype
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
        })
        .unwrap_or("png")
}

/// SVG document showing a base64 raster on a fixed 240x240 canvas.
pub fn svg_document(image_data: &str, content_type: Option<&str>) -> String {
    let content_type = format!("image/{}", image_subtype(content_type));
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="240px" height="240px" viewBox="0 0 240 240">
  <image xlink:href="data:{};base64,{}" width="240" height="240" x="0" y="0" />
</svg>
"#,
        content_type, image_data
    )
}

/// Write an icon to `path`, creating its folder on demand.
pub fn write_icon(
    path: &Path,
    image_data: &str,
    content_type: Option<&str>,
    format: IconFormat,
) -> AgsResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match format {
        IconFormat::Svg => fs::write(path, svg_document(image_data, content_type))?,
        IconFormat::Img => fs::write(path, general_purpose::STANDARD.decode(image_data)?)?,
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(icon = %file_name, "Wrote icon");
    Ok(())
}
