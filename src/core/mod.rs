//! # RGB DCT 핵심 모듈
//!
//! 변환, 직렬화, 입출력 어댑터

pub mod types;
pub mod error;
pub mod config;
pub mod transform;
pub mod codec;
pub mod format;
pub mod io;

// 주요 타입들 재수출
pub use types::*;
pub use error::*;
pub use config::*;
pub use transform::*;
pub use codec::*;
pub use format::*;
