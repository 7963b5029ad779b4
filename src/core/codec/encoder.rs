use crate::core::transform::Dct2d;
use crate::core::types::{Channel, ChannelGrid, CoefficientSet, PixelGrid};

/// 계수 반올림: 가장 가까운 정수, 동률이면 짝수 쪽 (NumPy `rint`와 동일)
pub fn round_coefficient(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// 채널별 DCT 인코더
///
/// 64×64 8비트 입력의 DC 계수는 최대 4·4096·255 ≈ 4.2×10⁶ 이므로 `i32`로 충분함
pub struct Encoder {
    dct: Dct2d,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { dct: Dct2d::new() }
    }

    /// 채널 하나: u8 → f64 → 비정규화 DCT-II → 정수 반올림
    pub fn encode_channel(&self, pixels: &PixelGrid, channel: Channel) -> ChannelGrid<i32> {
        let samples = pixels.channel(channel);
        let coeffs = self.dct.forward(&samples);
        coeffs.map(|&v| round_coefficient(v))
    }

    pub fn encode(&self, pixels: &PixelGrid) -> CoefficientSet {
        let [red, green, blue] = Channel::ALL.map(|ch| self.encode_channel(pixels, ch));
        log::debug!(
            "인코딩 완료: DC = (R {}, G {}, B {})",
            red.get(0, 0),
            green.get(0, 0),
            blue.get(0, 0)
        );
        CoefficientSet::new(red, green, blue)
    }
}

/// 픽셀 그리드를 정수 DCT 계수 세트로 인코딩
pub fn encode(pixels: &PixelGrid) -> CoefficientSet {
    Encoder::new().encode(pixels)
}
