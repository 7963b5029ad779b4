//! # 인코딩 / 디코딩
//!
//! 파일 I/O와 무관한 순수 함수들.
//! `encode(&PixelGrid) -> CoefficientSet`, `decode(&CoefficientSet) -> ReconstructedImage`

pub mod encoder;
pub mod decoder;
pub mod normalize;

pub use encoder::*;
pub use decoder::*;
pub use normalize::*;

#[cfg(test)]
mod __tests__;
