use crate::core::config::ResizeFilter;
use crate::core::error::{CodecError, CodecResult};
use crate::core::types::{PixelGrid, ReconstructedImage, BLOCK_SIZE};
use image::{imageops, DynamicImage, RgbImage};
use std::path::Path;

/// 이미지 파일을 64×64 RGB 픽셀 그리드로 로드
pub fn load_pixel_grid(path: &Path, filter: ResizeFilter) -> CodecResult<PixelGrid> {
    if !path.is_file() {
        return Err(CodecError::missing(path));
    }
    let image = image::open(path)?;
    log::info!(
        "이미지 로드: {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    pixel_grid_from_image(&image, filter)
}

/// RGB로 변환하고, 64×64가 아니면 리사이즈
pub fn pixel_grid_from_image(image: &DynamicImage, filter: ResizeFilter) -> CodecResult<PixelGrid> {
    let side = BLOCK_SIZE as u32;
    let rgb = image.to_rgb8();
    let rgb = if rgb.dimensions() != (side, side) {
        log::debug!("{:?} → {}x{} 리사이즈 ({:?})", rgb.dimensions(), side, side, filter);
        imageops::resize(&rgb, side, side, filter.into())
    } else {
        rgb
    };
    PixelGrid::from_raw(rgb.into_raw())
}

/// 복원 이미지를 `image` 버퍼로 변환
pub fn to_rgb_image(image: &ReconstructedImage) -> CodecResult<RgbImage> {
    RgbImage::from_raw(image.width(), image.height(), image.to_raw_vec())
        .ok_or_else(|| CodecError::Format("reconstructed buffer size mismatch".to_string()))
}

/// 복원 이미지를 파일로 저장 (형식은 확장자로 결정)
pub fn save_reconstructed(image: &ReconstructedImage, path: &Path) -> CodecResult<()> {
    to_rgb_image(image)?.save(path)?;
    log::info!("복원 이미지 저장: {}", path.display());
    Ok(())
}
