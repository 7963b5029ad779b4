use anyhow::{Context, Result};
use clap::Parser;
use rgb_dct::core::io::{load_pixel_grid, write_coefficient_file};
use rgb_dct::{encode, CodecConfig};
use std::path::PathBuf;

/// 이미지를 64×64 RGB DCT 계수 텍스트로 인코딩
#[derive(Parser, Debug)]
#[command(name = "dct_encode", version, about = "64x64 RGB 이미지 → DCT 계수 파일")]
struct Args {
    /// 입력 이미지 경로
    image: PathBuf,

    /// 계수 파일 출력 경로 (기본: dct_data.txt)
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
    let output = args.output.unwrap_or(config.coefficient_file);

    let pixels = load_pixel_grid(&args.image, config.resize_filter)
        .with_context(|| format!("이미지 로드 실패: {}", args.image.display()))?;
    let coefficients = encode(&pixels);

    write_coefficient_file(&output, &coefficients)
        .with_context(|| format!("계수 파일 저장 실패: {}", output.display()))?;
    println!("Saved DCT coefficients to {}", output.display());

    Ok(())
}
