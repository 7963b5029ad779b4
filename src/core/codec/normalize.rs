use crate::core::types::{ChannelGrid, ReconstructedImage, BLOCK_SIZE, CHANNEL_COUNT};
use ndarray::Array3;

/// 세 채널을 64×64×3으로 쌓고 전역 min → 0, max → 255로 선형 매핑
///
/// min/max는 채널별이 아니라 12,288개 값 전체에서 구함.
/// min == max 이면 전부 0. 매핑 후 [0, 255]로 자르고 u8로 버림
pub fn normalize_to_u8(channels: [&ChannelGrid<f64>; CHANNEL_COUNT]) -> ReconstructedImage {
    let stacked = Array3::from_shape_fn((BLOCK_SIZE, BLOCK_SIZE, CHANNEL_COUNT), |(r, c, ch)| {
        *channels[ch].get(r, c)
    });

    let min = stacked.iter().copied().fold(f64::INFINITY, f64::min);
    let max = stacked.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > min {
        let range = max - min;
        ReconstructedImage::from_array(
            stacked.mapv(|v| ((v - min) / range * 255.0).clamp(0.0, 255.0) as u8),
        )
    } else {
        log::debug!("평탄한 복원 결과 (min = max = {}), 전부 0으로 출력", min);
        ReconstructedImage::from_array(Array3::zeros((BLOCK_SIZE, BLOCK_SIZE, CHANNEL_COUNT)))
    }
}
