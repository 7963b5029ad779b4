use super::normalize::normalize_to_u8;
use crate::core::transform::Dct2d;
use crate::core::types::{Channel, ChannelGrid, CoefficientSet, ReconstructedImage};

/// 채널별 역 DCT + 전역 정규화 디코더
pub struct Decoder {
    dct: Dct2d,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self { dct: Dct2d::new() }
    }

    /// 채널 하나: i32 → f64 → 정규직교 DCT-III
    pub fn reconstruct_channel(&self, coefficients: &ChannelGrid<i32>) -> ChannelGrid<f64> {
        let coeffs = coefficients.map(|&v| f64::from(v));
        self.dct.inverse(&coeffs)
    }

    pub fn decode(&self, coefficients: &CoefficientSet) -> ReconstructedImage {
        let [red, green, blue] =
            Channel::ALL.map(|ch| self.reconstruct_channel(coefficients.channel(ch)));
        normalize_to_u8([&red, &green, &blue])
    }
}

/// 계수 세트를 표시 가능한 RGB 이미지로 복원
pub fn decode(coefficients: &CoefficientSet) -> ReconstructedImage {
    Decoder::new().decode(coefficients)
}
