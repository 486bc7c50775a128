use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output};

use fix_skin::{InvocationStatus, RUNTIME_FAILURE};
use image::{Rgba, RgbaImage};

fn fix_skin(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fix-skin"))
        .args(args)
        .output()
        .expect("failed to execute fix-skin")
}

/// Process exit status as reported by the OS for `code`.
fn os_code(code: i32) -> i32 {
    if cfg!(unix) { code & 0xff } else { code }
}

fn write_skin(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([0xff, 0, 0, 0xff]))
        .save(path)
        .expect("failed to write fixture");
}

#[test]
fn test_converts_skin() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_skin(&input, 100, 50);

    let out = fix_skin(&[input.as_path(), output.as_path()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "success is silent without -v");

    let decoder = png::Decoder::new(File::open(&output).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (104, 52));
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert!(info.srgb.is_some());
}

#[test]
fn test_verbose_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_skin(&input, 65, 32);

    let out = fix_skin(&[Path::new("-v"), input.as_path(), output.as_path()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("65x32 -> 72x32"), "{}", stdout);
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nonexistent.png");
    let output = dir.path().join("out.png");

    let out = fix_skin(&[input.as_path(), output.as_path()]);
    let expected = InvocationStatus::InputMissing.exit_code();
    assert_eq!(out.status.code(), Some(os_code(expected)));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Input file is inaccessible"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("existing_out.png");
    write_skin(&input, 10, 10);
    fs::write(&output, b"previous").unwrap();

    let out = fix_skin(&[input.as_path(), output.as_path()]);
    let expected = InvocationStatus::OutputExists.exit_code();
    assert_eq!(out.status.code(), Some(os_code(expected)));
    assert_eq!(fs::read(&output).unwrap(), b"previous");
}

#[test]
fn test_help() {
    let out = fix_skin(&[Path::new("--help"), Path::new("missing"), Path::new("missing")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage:"));
}

#[test]
fn test_unknown_flag_warns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_skin(&input, 8, 4);

    let out = fix_skin(&[Path::new("--frobnicate"), input.as_path(), output.as_path()]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--frobnicate"), "{}", stderr);
}

#[test]
fn test_broken_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    fs::write(&input, b"garbage").unwrap();

    let out = fix_skin(&[input.as_path(), output.as_path()]);
    assert_eq!(out.status.code(), Some(RUNTIME_FAILURE));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to convert skin"), "{}", stderr);
    assert!(stderr.contains("Usage:"), "{}", stderr);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_input_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use image::GenericImageView;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join(OsStr::from_bytes(b"sk\xffin.png"));
    let output = dir.path().join("out.png");
    RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0xff, 0xff]))
        .save_with_format(&input, image::ImageFormat::Png)
        .expect("failed to write fixture");

    let out = fix_skin(&[input.as_path(), output.as_path()]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let img = image::open(&output).unwrap();
    assert_eq!(img.dimensions(), (16, 12));
}
