use std::fs;
use std::path::{Path, PathBuf};

use detprep::{
    Error, ItemStatus, LetterboxParams, collect_image_inputs, letterbox_batch, letterbox_file,
};
use image::{GenericImageView, Rgb, RgbImage};
use tempfile::tempdir;

fn write_rgb_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

#[test]
fn collects_only_image_files_sorted() {
    let dir = tempdir().unwrap();
    write_rgb_png(&dir.path().join("b.png"), 4, 4, [0, 0, 0]);
    fs::write(dir.path().join("a.JPG"), b"not really a jpeg").unwrap();
    fs::write(dir.path().join("notes.txt"), b"skip me").unwrap();
    fs::create_dir(dir.path().join("c.png")).unwrap();

    let inputs = collect_image_inputs(dir.path()).unwrap();
    let names: Vec<_> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.JPG", "b.png"]);
}

#[test]
fn letterboxed_file_is_square_with_black_sides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tall.png");
    let output = dir.path().join("out.png");
    // 50 wide, 100 high
    write_rgb_png(&input, 50, 100, [200, 100, 50]);

    letterbox_file(&input, &output, 640).unwrap();

    let out = image::open(&output).unwrap();
    assert_eq!(out.dimensions(), (640, 640));
    let rgb = out.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 320).0, [0, 0, 0]);
    assert_eq!(rgb.get_pixel(159, 0).0, [0, 0, 0]);
    assert_eq!(rgb.get_pixel(480, 639).0, [0, 0, 0]);
    assert_eq!(rgb.get_pixel(639, 320).0, [0, 0, 0]);
}

#[test]
fn jpeg_destination_is_reencoded_and_overwritten() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.png");
    let output = dir.path().join("wide.jpg");
    write_rgb_png(&input, 300, 100, [10, 200, 10]);
    fs::write(&output, b"stale").unwrap();

    letterbox_file(&input, &output, 128).unwrap();

    let out = image::open(&output).unwrap();
    assert_eq!(out.dimensions(), (128, 128));
}

#[test]
fn unknown_destination_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_rgb_png(&input, 8, 8, [1, 2, 3]);

    let err = letterbox_file(&input, &dir.path().join("out.bmp"), 16).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

fn mixed_inputs(dir: &Path) -> Vec<PathBuf> {
    let good = dir.join("good.png");
    write_rgb_png(&good, 50, 100, [255, 255, 255]);

    let corrupt = dir.join("corrupt.jpg");
    fs::write(&corrupt, b"\xff\xd8 definitely not a complete jpeg").unwrap();

    // 1000 wide, 1 high: scaled height truncates to 0
    let sliver = dir.join("sliver.png");
    write_rgb_png(&sliver, 1000, 1, [9, 9, 9]);

    let missing = dir.join("missing.png");

    vec![good, corrupt, sliver, missing]
}

fn assert_mixed_report(report: &detprep::BatchReport, inputs: &[PathBuf], output_dir: &Path) {
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 3);
    assert_eq!(report.outcomes.len(), 4);

    let order: Vec<_> = report.outcomes.iter().map(|o| o.input.clone()).collect();
    assert_eq!(order, inputs);

    assert_eq!(report.outcomes[0].status, ItemStatus::Processed);
    assert_eq!(report.outcomes[0].output, output_dir.join("good.png"));
    for outcome in &report.outcomes[1..] {
        assert!(matches!(outcome.status, ItemStatus::Failed { .. }));
    }
    match &report.outcomes[2].status {
        ItemStatus::Failed { reason } => assert!(reason.contains("0 pixels"), "{reason}"),
        other => panic!("unexpected status {other:?}"),
    }

    let out = image::open(output_dir.join("good.png")).unwrap();
    assert_eq!(out.dimensions(), (640, 640));
    assert!(!output_dir.join("corrupt.jpg").exists());
}

#[test]
fn batch_continues_past_failing_items() {
    let input_dir = tempdir().unwrap();
    let output_root = tempdir().unwrap();
    let output_dir = output_root.path().join("nested").join("calib");
    let inputs = mixed_inputs(input_dir.path());

    let report = letterbox_batch(&inputs, &output_dir, &LetterboxParams::default()).unwrap();
    assert_mixed_report(&report, &inputs, &output_dir);
}

#[test]
fn parallel_batch_keeps_input_order() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let inputs = mixed_inputs(input_dir.path());
    let params = LetterboxParams {
        parallel: true,
        ..Default::default()
    };

    let report = letterbox_batch(&inputs, output_dir.path(), &params).unwrap();
    assert_mixed_report(&report, &inputs, output_dir.path());
}

#[test]
fn report_serializes_item_statuses() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let inputs = mixed_inputs(input_dir.path());

    let report = letterbox_batch(&inputs, output_dir.path(), &LetterboxParams::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["processed"], 1);
    assert_eq!(json["outcomes"][0]["status"], "processed");
    assert_eq!(json["outcomes"][1]["status"], "failed");
    assert!(json["outcomes"][1]["reason"].is_string());
    assert!(json["finished_at"].is_string());
}

#[test]
fn zero_target_size_fails_the_whole_call() {
    let output_dir = tempdir().unwrap();
    let params = LetterboxParams {
        target_size: 0,
        ..Default::default()
    };
    let err = letterbox_batch(&[], output_dir.path(), &params).unwrap_err();
    assert!(matches!(err, Error::ZeroSize { size: 0 }));
}

#[test]
fn png_contents_under_jpg_name_are_decoded() {
    let dir = tempdir().unwrap();
    let png = dir.path().join("source.png");
    write_rgb_png(&png, 50, 100, [30, 60, 90]);
    let misnamed = dir.path().join("photo.jpg");
    fs::rename(&png, &misnamed).unwrap();
    let output = dir.path().join("out.png");

    letterbox_file(&misnamed, &output, 64).unwrap();

    let out = image::open(&output).unwrap();
    assert_eq!(out.dimensions(), (64, 64));
}

#[test]
fn input_without_file_name_fails_with_clear_reason() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let inputs = vec![input_dir.path().join("..")];

    let report = letterbox_batch(&inputs, output_dir.path(), &LetterboxParams::default()).unwrap();

    assert_eq!(report.processed, 0);
    assert_eq!(report.errors, 1);
    match &report.outcomes[0].status {
        ItemStatus::Failed { reason } => assert!(reason.contains("no file name"), "{reason}"),
        other => panic!("unexpected status {other:?}"),
    }
}
