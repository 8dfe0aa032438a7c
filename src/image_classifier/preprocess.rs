use super::models::model_config::Normalization;
use crate::error::ImageDecodeError;
use image::{imageops, DynamicImage};
use std::path::Path;
use tract_onnx::prelude::*;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_accepted_file_name(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

pub fn decode_upload(file_name: &str, bytes: &[u8]) -> Result<DynamicImage, ImageDecodeError> {
    if !is_accepted_file_name(file_name) {
        return Err(ImageDecodeError::UnsupportedFileType {
            file_name: file_name.to_string(),
        });
    }

    image::load_from_memory(bytes).map_err(|e| ImageDecodeError::Malformed {
        file_name: file_name.to_string(),
        reason: e.to_string(),
    })
}

/// Stretches to exactly `width` x `height`; aspect ratio is not kept.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, imageops::FilterType::CatmullRom)
}

/// NHWC `[1, height, width, 3]` tensor of the image's RGB channels.
pub fn image_to_tensor(image: &DynamicImage, normalization: Normalization) -> Tensor {
    let rgb = image.to_rgb8();
    let scale = match normalization {
        Normalization::UnitRange => 1.0 / 255.0,
        Normalization::Raw => 1.0,
    };

    tract_ndarray::Array4::from_shape_fn(
        (1, rgb.height() as usize, rgb.width() as usize, 3),
        |(_, y, x, c)| rgb.get_pixel(x as u32, y as u32)[c] as f32 * scale,
    )
    .into_tensor()
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    normalization: Normalization,
) -> Tensor {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, normalization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_tensor_shape_is_fixed_for_any_source_size() {
        for (width, height) in [(1, 1), (100, 100), (300, 50), (37, 411)] {
            let image = solid_rgb(width, height, [10, 20, 30]);

            let tensor = resize_image_to_tensor(&image, 128, 128, Normalization::UnitRange);

            assert_eq!(tensor.shape(), &[1, 128, 128, 3]);
        }
    }

    #[test]
    fn test_tensor_shape_is_fixed_for_any_color_mode() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 32, Luma([200])));
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 90, Rgba([1, 2, 3, 4])));

        for image in [gray, rgba] {
            let tensor = resize_image_to_tensor(&image, 128, 96, Normalization::UnitRange);
            assert_eq!(tensor.shape(), &[1, 96, 128, 3]);
        }
    }

    #[test]
    fn test_channels_are_last() {
        let image = solid_rgb(10, 10, [255, 0, 0]);

        let tensor = resize_image_to_tensor(&image, 4, 4, Normalization::UnitRange);
        let slice = tensor.as_slice::<f32>().unwrap();

        assert_eq!(&slice[0..3], &[1.0, 0.0, 0.0]);
        assert_eq!(&slice[3..6], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unit_range_normalization() {
        let image = solid_rgb(100, 100, [128, 128, 128]);

        let tensor = resize_image_to_tensor(&image, 16, 16, Normalization::UnitRange);
        let slice = tensor.as_slice::<f32>().unwrap();

        let expected = 128.0 / 255.0;
        assert!(slice.iter().all(|v| (v - expected).abs() < 0.0001));
    }

    #[test]
    fn test_raw_normalization_keeps_intensities() {
        let image = solid_rgb(8, 8, [0, 64, 255]);

        let tensor = image_to_tensor(&image, Normalization::Raw);
        let slice = tensor.as_slice::<f32>().unwrap();

        assert_eq!(&slice[0..3], &[0.0, 64.0, 255.0]);
    }

    #[test]
    fn test_gray_is_expanded_to_three_channels() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([51])));

        let tensor = image_to_tensor(&gray, Normalization::UnitRange);
        let slice = tensor.as_slice::<f32>().unwrap();

        assert_eq!(tensor.shape(), &[1, 2, 2, 3]);
        assert!(slice.iter().all(|v| (v - 0.2).abs() < 0.0001));
    }

    #[test]
    fn test_decode_png_and_jpeg() {
        let image = solid_rgb(12, 7, [40, 80, 120]);

        let png = decode_upload("steak.png", &encode(&image, ImageFormat::Png)).unwrap();
        let jpeg = decode_upload("steak.JPG", &encode(&image, ImageFormat::Jpeg)).unwrap();

        assert_eq!((png.width(), png.height()), (12, 7));
        assert_eq!((jpeg.width(), jpeg.height()), (12, 7));
    }

    #[test]
    fn test_decode_corrupt_bytes_fails() {
        let error = decode_upload("steak.png", b"definitely not a png").unwrap_err();

        assert!(matches!(error, ImageDecodeError::Malformed { .. }));
    }

    #[test]
    fn test_decode_rejects_other_extensions() {
        let image = solid_rgb(4, 4, [0, 0, 0]);

        let error = decode_upload("notes.txt", &encode(&image, ImageFormat::Png)).unwrap_err();

        assert_eq!(
            error,
            ImageDecodeError::UnsupportedFileType {
                file_name: "notes.txt".to_string()
            }
        );
        assert!(!is_accepted_file_name("no_extension"));
        assert!(is_accepted_file_name("a.Jpeg"));
    }
}
