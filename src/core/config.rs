//! # 코덱 구성 설정
//!
//! 입출력 파일 이름과 리사이즈 필터. JSON 파일로 덮어쓸 수 있고,
//! 지정하지 않은 필드는 기본값을 유지함

use super::error::{CodecError, CodecResult};
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 기본 계수 파일 이름
pub const DEFAULT_COEFFICIENT_FILE: &str = "dct_data.txt";
/// 기본 복원 이미지 파일 이름
pub const DEFAULT_RECONSTRUCTED_FILE: &str = "reconstructed.png";

/// 64×64가 아닌 입력 이미지를 줄일 때 쓰는 필터
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// 바이큐빅 (기본값)
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// 코덱 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// 인코더 출력 / 디코더 입력 계수 파일
    pub coefficient_file: PathBuf,
    /// 디코더 출력 PNG
    pub reconstructed_file: PathBuf,
    /// 입력 리사이즈 필터
    pub resize_filter: ResizeFilter,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            coefficient_file: PathBuf::from(DEFAULT_COEFFICIENT_FILE),
            reconstructed_file: PathBuf::from(DEFAULT_RECONSTRUCTED_FILE),
            resize_filter: ResizeFilter::default(),
        }
    }
}

impl CodecConfig {
    /// JSON 문자열에서 설정 생성
    pub fn from_json_str(json: &str) -> CodecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 파일에서 설정 로드
    pub fn load(path: &Path) -> CodecResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CodecError::missing(path),
            _ => CodecError::Io(e),
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("설정 로드: {} → {:?}", path.display(), config);
        Ok(config)
    }

    /// 경로가 있으면 로드, 없으면 기본값
    pub fn load_or_default(path: Option<&Path>) -> CodecResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
