//! Rasterization and file output.

use std::fs;
use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use super::scene::Figure;
use crate::error::RenderError;

/// Families tried, in order, for the generic `sans-serif` used by the scene.
const SANS_CANDIDATES: [&str; 6] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "Segoe UI",
];

impl Figure {
    /// Rasterize to RGBA pixels at the figure's pixel size.
    pub fn rasterize(&self) -> Result<Pixmap, RenderError> {
        let mut opt = usvg::Options::default();
        map_sans_serif(opt.fontdb_mut());
        let tree = usvg::Tree::from_str(&self.to_svg(), &opt)?;
        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(RenderError::InvalidSize {
                width: size.width(),
                height: size.height(),
            })?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Rasterize and write a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let pixmap = self.rasterize()?;
        let png = pixmap.encode_png().map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        write_file(path, &png)?;
        tracing::debug!(
            path = %path.display(),
            width = pixmap.width(),
            height = pixmap.height(),
            "png written"
        );
        Ok(())
    }

    /// Write the SVG scene as-is.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        write_file(path.as_ref(), self.to_svg().as_bytes())
    }
}

/// Load system fonts and point `sans-serif` at the first installed candidate.
///
/// Without any installed font, text is skipped by the rasterizer and the
/// geometry is still drawn.
fn map_sans_serif(db: &mut fontdb::Database) {
    db.load_system_fonts();
    let installed = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let chosen = SANS_CANDIDATES
        .iter()
        .find(|name| installed(name))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .next()
                .and_then(|face| face.families.first().map(|(n, _)| n.clone()))
        });
    match chosen {
        Some(family) => {
            tracing::debug!(family = %family, "sans-serif font");
            db.set_sans_serif_family(family);
        }
        None => tracing::warn!("no system fonts found; labels will not be drawn"),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, bytes).map_err(io_err)
}
