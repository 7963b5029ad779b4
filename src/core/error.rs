//! 코덱 에러 타입

use std::path::PathBuf;
use thiserror::Error;

/// 코덱 결과 타입
pub type CodecResult<T> = Result<T, CodecError>;

/// 인코딩/디코딩 중 발생할 수 있는 에러
///
/// 값 범위가 평탄한 경우(min == max)는 에러가 아니며 정규화 단계에서
/// 전부 0인 이미지로 처리됨
#[derive(Debug, Error)]
pub enum CodecError {
    /// 입력 파일(원본 이미지 또는 계수 파일)이 없음
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    /// 계수 텍스트 또는 그리드 크기가 형식에 맞지 않음
    #[error("invalid coefficient data: {0}")]
    Format(String),

    /// 이미지 디코딩/인코딩 실패
    #[error("image operation failed: {0}")]
    Image(#[from] image::ImageError),

    /// 기타 I/O 실패
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 설정 JSON 파싱 실패
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl CodecError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        CodecError::MissingInput { path: path.into() }
    }
}
