use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    assets::{
        decode::{PreparedImage, decode_image},
        fonts::FontLibrary,
    },
    foundation::error::{ShalomError, ShalomResult},
    scene::node::StaticAsset,
};

/// Static images and fonts, decoded once up front so exports never wait on a load.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    root: Option<PathBuf>,
    images: HashMap<StaticAsset, PreparedImage>,
    fonts: FontLibrary,
}

impl AssetStore {
    /// Store with no images and no fonts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the shipped images from `root` and the fonts from `root/fonts`.
    ///
    /// Missing or undecodable images are skipped with a warning; the export then paints nothing
    /// in their place.
    #[tracing::instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn prepare(root: impl AsRef<Path>) -> ShalomResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ShalomError::validation(format!(
                "asset root '{}' is not a directory",
                root.display()
            )));
        }

        let mut images = HashMap::new();
        for asset in StaticAsset::ALL {
            let path = root.join(asset.file_name());
            let decoded = std::fs::read(&path)
                .map_err(|e| ShalomError::evaluation(format!("read '{}': {e}", path.display())))
                .and_then(|bytes| decode_image(&bytes));
            match decoded {
                Ok(img) => {
                    tracing::debug!(asset = asset.file_name(), w = img.width, h = img.height, "image ready");
                    images.insert(asset, img);
                }
                Err(e) => tracing::warn!(asset = asset.file_name(), error = %e, "image skipped"),
            }
        }

        let fonts = FontLibrary::load_dir(&root.join("fonts"));
        if fonts.is_empty() {
            tracing::warn!("no fonts loaded; exported text will be missing");
        }

        Ok(Self {
            root: Some(root.to_path_buf()),
            images,
            fonts,
        })
    }

    /// Add or replace a shipped image from encoded bytes.
    pub fn with_image(mut self, asset: StaticAsset, bytes: &[u8]) -> ShalomResult<Self> {
        self.images.insert(asset, decode_image(bytes)?);
        Ok(self)
    }

    /// Add a font file.
    pub fn with_font(mut self, label: &str, bytes: Vec<u8>) -> ShalomResult<Self> {
        self.fonts.register(label, bytes)?;
        Ok(self)
    }

    /// Directory the store was prepared from.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Decoded image for `asset`, if it was available.
    pub fn image(&self, asset: StaticAsset) -> Option<&PreparedImage> {
        self.images.get(&asset)
    }

    /// Loaded fonts.
    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
