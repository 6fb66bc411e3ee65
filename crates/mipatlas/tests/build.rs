use std::fs;
use std::path::PathBuf;

use image::{ColorType, DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use mipatlas::{BuildConfig, Error, MipAtlasBuilder};

/// Per-test scratch directory, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("mipatlas-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.0.join(file)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn checker(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([240, 200, 40])
        } else {
            Rgb([20, 60, 180])
        }
    })
}

#[test]
fn test_build_square_rgb() {
    let scratch = Scratch::new("square-rgb");
    let input = scratch.path("texture.png");
    checker(256, 256).save(&input).unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input)).build().unwrap();

    assert_eq!(report.output, scratch.path("texture_mip.png"));
    assert_eq!(report.layout.mip_levels(), 9);
    assert_eq!(report.used_height(), 511);

    let atlas = image::open(&report.output).unwrap();
    assert_eq!(atlas.dimensions(), (384, 256));
    assert_eq!(atlas.color(), ColorType::Rgb8);

    let original = atlas.crop_imm(0, 0, 256, 256).to_rgb8();
    assert_eq!(original, checker(256, 256));
}

#[test]
fn test_build_keeps_rgba() {
    let scratch = Scratch::new("keeps-rgba");
    let input = scratch.path("decal.png");
    RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 128]))
        .save(&input)
        .unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input)).build().unwrap();

    let atlas = image::open(&report.output).unwrap();
    assert_eq!(atlas.color(), ColorType::Rgba8);
    assert_eq!(atlas.dimensions(), (60, 20));
}

#[test]
fn test_build_keeps_grayscale() {
    let scratch = Scratch::new("keeps-gray");
    let input = scratch.path("height.png");
    DynamicImage::new_luma8(32, 64).save(&input).unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input)).build().unwrap();

    let atlas = image::open(&report.output).unwrap();
    assert_eq!(atlas.color(), ColorType::L8);
    assert_eq!(atlas.dimensions(), (48, 64));
    assert_eq!(report.used_height(), 64 + 32 + 16 + 8 + 4 + 2 + 1);
}

#[test]
fn test_build_tga_texture() {
    let scratch = Scratch::new("tga");
    let input = scratch.path("albedo.tga");
    checker(32, 32).save(&input).unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input)).build().unwrap();

    assert_eq!(report.output, scratch.path("albedo_mip.tga"));
    let atlas = image::open(&report.output).unwrap();
    assert_eq!(atlas.color(), ColorType::Rgb8);
    assert_eq!(atlas.dimensions(), (48, 32));
    assert_eq!(atlas.crop_imm(0, 0, 32, 32).to_rgb8(), checker(32, 32));
}

#[test]
fn test_build_tiff_texture() {
    let scratch = Scratch::new("tiff");
    let input = scratch.path("normal.tiff");
    RgbaImage::from_pixel(16, 8, Rgba([128, 128, 255, 255]))
        .save(&input)
        .unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input)).build().unwrap();

    let atlas = image::open(&report.output).unwrap();
    assert_eq!(report.output, scratch.path("normal_mip.tiff"));
    assert_eq!(atlas.color(), ColorType::Rgba8);
    assert_eq!(atlas.dimensions(), (24, 8));
}

#[test]
fn test_path_through_a_file() {
    let scratch = Scratch::new("through-file");
    let file = scratch.path("plain.png");
    checker(8, 8).save(&file).unwrap();

    let err = MipAtlasBuilder::new(BuildConfig::new(file.join("tex.png")))
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::InputUnreadable { .. }));
    assert!(err.is_invalid_input());
}

#[test]
fn test_build_to_explicit_output() {
    let scratch = Scratch::new("explicit-output");
    let input = scratch.path("wall.png");
    let output = scratch.path("atlas.bmp");
    checker(64, 32).save(&input).unwrap();

    let report = MipAtlasBuilder::new(BuildConfig::new(&input).with_output(&output))
        .build()
        .unwrap();

    assert_eq!(report.output, output);
    assert!(output.is_file());
    assert!(!scratch.path("wall_mip.png").exists());
    assert_eq!(image::open(&output).unwrap().dimensions(), (96, 32));
}

#[test]
fn test_plan_reads_header_only() {
    let scratch = Scratch::new("plan");
    let input = scratch.path("floor.png");
    checker(100, 50).save(&input).unwrap();

    let layout = MipAtlasBuilder::new(BuildConfig::new(&input)).plan().unwrap();

    assert_eq!((layout.canvas_width(), layout.canvas_height()), (150, 50));
    assert_eq!(layout.mip_levels(), 7);
    assert!(!scratch.path("floor_mip.png").exists());
}

#[test]
fn test_directory_input() {
    let scratch = Scratch::new("dir-input");
    let err = MipAtlasBuilder::new(BuildConfig::new(&scratch.0))
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::InputNotAFile(_)));
    assert!(err.is_invalid_input());
}

#[test]
fn test_undecodable_input() {
    let scratch = Scratch::new("undecodable");
    let input = scratch.path("notes.png");
    fs::write(&input, b"definitely not a png").unwrap();

    let err = MipAtlasBuilder::new(BuildConfig::new(&input))
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(!err.is_invalid_input());
    assert!(!scratch.path("notes_mip.png").exists());
}

#[test]
fn test_unwritable_output() {
    let scratch = Scratch::new("unwritable");
    let input = scratch.path("tile.png");
    checker(16, 16).save(&input).unwrap();

    let err = MipAtlasBuilder::new(
        BuildConfig::new(&input).with_output(scratch.path("missing-dir/tile.png")),
    )
    .build()
    .unwrap_err();

    assert!(matches!(err, Error::Encode { .. }));
}
