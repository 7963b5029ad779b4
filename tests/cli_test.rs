//! dct_encode / dct_decode 실행 파일 테스트

use image::{Rgb, RgbImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(bin: &str, dir: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn encode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dct_encode")
}

fn decode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dct_decode")
}

#[test]
fn test_decoder_missing_input_reports_and_exits_zero() {
    let dir = tempdir().unwrap();
    let out = run(decode_bin(), dir.path(), &[]);

    assert!(out.status.success(), "status: {:?}", out.status);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Error: dct_data.txt not found!"), "stdout: {}", stdout);
    assert!(!dir.path().join("reconstructed.png").exists());
}

#[test]
fn test_encoder_without_argument_fails() {
    let dir = tempdir().unwrap();
    let out = run(encode_bin(), dir.path(), &[]);

    assert!(!out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).is_empty());
    assert!(!dir.path().join("dct_data.txt").exists());
}

#[test]
fn test_encoder_missing_image_fails() {
    let dir = tempdir().unwrap();
    let out = run(encode_bin(), dir.path(), &["absent.png"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
    assert!(!dir.path().join("dct_data.txt").exists());
}

#[test]
fn test_encode_then_decode_with_default_paths() {
    let dir = tempdir().unwrap();
    let input = RgbImage::from_fn(80, 48, |x, y| Rgb([(x * 3) as u8, (y * 5) as u8, 60]));
    input.save(dir.path().join("input.png")).unwrap();

    let out = run(encode_bin(), dir.path(), &["input.png"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = std::fs::read_to_string(dir.path().join("dct_data.txt")).unwrap();
    assert!(text.starts_with("DCT_R = \""));

    let out = run(decode_bin(), dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Saved reconstructed image to reconstructed.png"),
        "stdout: {}",
        stdout
    );

    let restored = image::open(dir.path().join("reconstructed.png")).unwrap().to_rgb8();
    assert_eq!(restored.dimensions(), (64, 64));
}

#[test]
fn test_decoder_rejects_malformed_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("dct_data.txt"), "DCT_R = \"1,2,3\"\nDCT_G = \"\"\nDCT_B = \"\"").unwrap();

    let out = run(decode_bin(), dir.path(), &[]);

    assert!(!out.status.success());
    assert!(!dir.path().join("reconstructed.png").exists());
}
