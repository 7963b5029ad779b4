//! # 2D DCT 변환
//!
//! 분리형 2D DCT. 열 방향(axis 0) 1D 변환 후 행 방향(axis 1) 1D 변환.
//!
//! - 순방향: 비정규화 DCT-II. 1D 패스마다 `y[k] = 2·Σ x[n]·cos(πk(2n+1)/2N)`
//! - 역방향: 정규직교(ortho) DCT-III
//!
//! 두 방향의 스케일이 서로 맞지 않으므로 `inverse(forward(x))`는 `x`가 아님.
//! 디코더의 전역 min-max 정규화가 이 차이를 흡수함

pub mod dct2d;

pub use dct2d::*;
