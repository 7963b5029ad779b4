use anyhow::{Context, Result};
use clap::Parser;
use rgb_dct::core::io::{read_coefficient_file, save_reconstructed};
use rgb_dct::{decode, CodecConfig, CodecError};
use std::path::PathBuf;

/// DCT 계수 텍스트에서 64×64 RGB 이미지 복원
#[derive(Parser, Debug)]
#[command(name = "dct_decode", version, about = "DCT 계수 파일 → 복원 이미지")]
struct Args {
    /// 계수 파일 경로 (기본: 실행 파일 위치가 아닌 현재 작업 디렉토리의 dct_data.txt,
    /// dct_encode 기본 출력과 같은 위치)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// 복원 이미지 출력 경로 (기본: reconstructed.png)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// 설정 JSON 파일
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CodecConfig::load_or_default(args.config.as_deref())
        .context("설정 로드 실패")?;
    let input = args.input.unwrap_or(config.coefficient_file);
    let output = args.output.unwrap_or(config.reconstructed_file);

    // 계수 파일이 없으면 메시지만 출력하고 정상 종료
    let coefficients = match read_coefficient_file(&input) {
        Err(CodecError::MissingInput { path }) => {
            println!("Error: {} not found!", path.display());
            return Ok(());
        }
        other => other.with_context(|| format!("계수 파일 파싱 실패: {}", input.display()))?,
    };

    let image = decode(&coefficients);
    save_reconstructed(&image, &output)
        .with_context(|| format!("이미지 저장 실패: {}", output.display()))?;
    println!("Saved reconstructed image to {}", output.display());

    Ok(())
}
