//! RGB DCT 코덱 라이브러리
//!
//! 64×64 RGB 이미지를 채널별 2D DCT 계수로 인코딩하고, 텍스트 계수 파일에서
//! 다시 표시 가능한 이미지로 복원하는 라이브러리

pub mod core;

// 핵심 모듈들 재수출
pub use self::core::{
    // 데이터 구조
    Channel, ChannelGrid, CoefficientSet, PixelGrid, ReconstructedImage,
    BLOCK_LEN, BLOCK_SIZE,
    // 에러 및 설정
    CodecError, CodecResult, CodecConfig, ResizeFilter,
    // 변환
    Dct2d,
    // 인코딩 / 디코딩
    Encoder, Decoder, encode, decode, normalize_to_u8, round_coefficient,
    // 직렬화
    format_coefficients, format_channel_line, parse_channel_line, parse_coefficients,
};
