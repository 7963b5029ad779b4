use crate::core::error::{CodecError, CodecResult};
use crate::core::format::{format_coefficients, parse_coefficients};
use crate::core::types::CoefficientSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 계수 세트를 텍스트 파일로 저장
pub fn write_coefficient_file(path: &Path, coefficients: &CoefficientSet) -> CodecResult<()> {
    let text = format_coefficients(coefficients);
    fs::write(path, &text)?;
    log::info!("계수 파일 저장: {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// 계수 텍스트 파일 로드 및 파싱. 파일이 없으면 `MissingInput`
pub fn read_coefficient_file(path: &Path) -> CodecResult<CoefficientSet> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CodecError::missing(path),
        _ => CodecError::Io(e),
    })?;
    log::debug!("계수 파일 로드: {} ({} bytes)", path.display(), text.len());
    parse_coefficients(&text)
}
