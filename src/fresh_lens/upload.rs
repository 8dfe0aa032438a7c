use crate::error::ImageDecodeError;
use image::DynamicImage;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, PartialEq)]
pub struct Upload {
    pub id: u64,
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

impl Upload {
    pub fn new(id: u64, file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn from_path(id: u64, path: &Path) -> Result<Self, ImageDecodeError> {
        let file_name = file_name_of(path);

        let bytes = std::fs::read(path).map_err(|e| ImageDecodeError::Unreadable {
            file_name: file_name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(id, file_name, bytes))
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("id", &self.id)
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Downscaled RGBA copy of an upload for on-screen display.
#[derive(Clone, PartialEq)]
pub struct Preview {
    pub image: Arc<egui::ColorImage>,
}

impl Preview {
    pub const MAX_SIDE: u32 = 512;

    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = if image.width() > Self::MAX_SIDE || image.height() > Self::MAX_SIDE {
            image.thumbnail(Self::MAX_SIDE, Self::MAX_SIDE).to_rgba8()
        } else {
            image.to_rgba8()
        };

        let size = [rgba.width() as usize, rgba.height() as usize];

        Self {
            image: Arc::new(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())),
        }
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview").field("size", &self.size()).finish()
    }
}
