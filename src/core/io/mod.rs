//! # 파일 입출력 어댑터
//!
//! 이미지 로드/리사이즈/저장과 계수 파일 읽기/쓰기.
//! 코덱 본체(`codec`)는 이 모듈에 의존하지 않음

pub mod image_io;
pub mod coefficient_file;

pub use image_io::*;
pub use coefficient_file::*;
