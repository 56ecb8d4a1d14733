// SPDX-License-Identifier: MIT OR Apache-2.0
//! Asset export: persisting referenced images beside the generated script.
//!
//! Images land in a fixed `imgs/` sub-directory next to the script. The
//! first write for a filename wins; a later asset with the same name is
//! assumed identical (no content hashing). Safe because the pipeline is
//! single-threaded start to finish.

use crate::emit_tree::ScriptWriter;
use crate::encode::py_enum;
use crate::error::ExportError;
use crate::sanitize::NameRegistry;
use nodescribe_graph::{Image, ImageFileFormat};
use std::path::Path;

/// Name of the asset sub-directory, sibling to the generated script
pub const IMAGE_DIR_NAME: &str = "imgs";

/// Derive the on-disk filename for an image asset
///
/// The asset name is truncated at the first `'.'` to strip any extension
/// the host kept around, then the recorded format's extension is appended.
pub fn image_filename(img: &Image) -> String {
    let base = img.name.split('.').next().unwrap_or(&img.name);
    format!("{base}.{}", img.file_format.extension())
}

fn encoder_format(format: ImageFileFormat) -> image::ImageFormat {
    match format {
        ImageFileFormat::Png => image::ImageFormat::Png,
        ImageFileFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFileFormat::Bmp => image::ImageFormat::Bmp,
        ImageFileFormat::Targa => image::ImageFormat::Tga,
        ImageFileFormat::OpenExr => image::ImageFormat::OpenExr,
    }
}

/// Write an image asset into `script_dir/imgs`, returning its filename
///
/// Creates the sub-directory on first use and skips the write when a file
/// of the same name already exists.
pub fn export_image(img: &Image, script_dir: &Path) -> Result<String, ExportError> {
    let dir = script_dir.join(IMAGE_DIR_NAME);
    std::fs::create_dir_all(&dir)?;

    let filename = image_filename(img);
    let path = dir.join(&filename);
    if path.exists() {
        tracing::debug!("Asset {filename} already exported, skipping");
        return Ok(filename);
    }

    image::save_buffer_with_format(
        &path,
        &img.pixels,
        img.width,
        img.height,
        image::ExtendedColorType::Rgba8,
        encoder_format(img.file_format),
    )?;
    tracing::info!("Exported image asset to {}", path.display());
    Ok(filename)
}

/// Emit statements loading an exported asset at script-run time
///
/// The generated code resolves the running script's own directory, joins
/// the asset path, loads the image, and copies the three metadata fields
/// the host does not restore on load.
pub fn emit_image_loader(
    w: &mut ScriptWriter,
    names: &mut NameRegistry,
    target: &str,
    img: &Image,
    filename: &str,
) {
    let path_var = names.allocate("image_path");
    w.line(&format!(
        "{path_var} = os.path.join(os.path.dirname(os.path.abspath(__file__)), \"{IMAGE_DIR_NAME}\", \"{filename}\")"
    ));
    w.line(&format!(
        "{target} = bpy.data.images.load({path_var}, check_existing=True)"
    ));
    w.line(&format!("{target}.source = {}", py_enum(&img.source)));
    w.line(&format!(
        "{target}.colorspace_settings.name = {}",
        py_enum(&img.colorspace)
    ));
    w.line(&format!("{target}.alpha_mode = {}", py_enum(&img.alpha_mode)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(name: &str) -> Image {
        Image {
            name: name.to_string(),
            file_format: ImageFileFormat::Png,
            width: 2,
            height: 2,
            pixels: vec![255; 2 * 2 * 4],
            source: "FILE".to_string(),
            colorspace: "sRGB".to_string(),
            alpha_mode: "STRAIGHT".to_string(),
        }
    }

    #[test]
    fn test_filename_strips_old_extension() {
        assert_eq!(image_filename(&test_image("brick.tga.001")), "brick.png");
        assert_eq!(image_filename(&test_image("plain")), "plain.png");
    }

    #[test]
    fn test_export_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let img = test_image("brick");

        let first = export_image(&img, dir.path()).unwrap();
        let path = dir.path().join(IMAGE_DIR_NAME).join(&first);
        let written = std::fs::metadata(&path).unwrap().modified().unwrap();

        // Second export of the same name must not touch the file
        let mut again = test_image("brick");
        again.pixels = vec![0; 2 * 2 * 4];
        let second = export_image(&again, dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), written);
    }

    #[test]
    fn test_loader_statements() {
        let mut w = ScriptWriter::new();
        let mut names = NameRegistry::new();
        let img = test_image("brick");
        emit_image_loader(&mut w, &mut names, "node.image", &img, "brick.png");

        let text = w.into_string();
        assert!(text.contains("os.path.dirname(os.path.abspath(__file__))"));
        assert!(text.contains("bpy.data.images.load(image_path, check_existing=True)"));
        assert!(text.contains("node.image.source = 'FILE'"));
        assert!(text.contains("node.image.colorspace_settings.name = 'sRGB'"));
        assert!(text.contains("node.image.alpha_mode = 'STRAIGHT'"));
    }
}
