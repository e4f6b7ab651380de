use icontool::commands;
use icontool::iconset::{write_icon_set, write_ico, ICONSET_SIZES};
use image::{Rgba, RgbaImage};

fn source(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255]))
}

fn dimensions_of(path: &std::path::Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

#[test]
fn writes_the_full_icon_set() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("build");

    let written = write_icon_set(&source(64), &out_dir).unwrap();
    // master + 10 iconset entries + ico
    assert_eq!(written.len(), 12);
    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }

    assert_eq!(dimensions_of(&out_dir.join("icon.png")), (1024, 1024));

    let iconset = out_dir.join("icon.iconset");
    for size in ICONSET_SIZES {
        let base = iconset.join(format!("icon_{size}x{size}.png"));
        let retina = iconset.join(format!("icon_{size}x{size}@2x.png"));
        assert_eq!(dimensions_of(&base), (size, size));
        assert_eq!(dimensions_of(&retina), (size * 2, size * 2));
    }
}

#[test]
fn write_ico_emits_a_decodable_icon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.ico");

    write_ico(&source(64), &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (256, 256));
    assert_eq!(*decoded.get_pixel(128, 128), Rgba([255, 0, 0, 255]));
}

#[test]
fn ico_decodes_to_its_largest_frame() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("build");

    write_icon_set(&source(64), &out_dir).unwrap();
    assert_eq!(dimensions_of(&out_dir.join("icon.ico")), (256, 256));
}

#[test]
fn prepare_command_with_rounding() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.png");
    let out_dir = dir.path().join("build");
    source(64).save(&input).unwrap();

    commands::prepare::run(&input, &out_dir, true).unwrap();

    let master = image::open(out_dir.join("icon.png")).unwrap().to_rgba8();
    assert_eq!(master.dimensions(), (1024, 1024));
    // Resampling smears the hard mask edge, so only assert the extremes.
    assert!(master.get_pixel(0, 0)[3] < 64, "corner should be transparent");
    assert!(master.get_pixel(512, 512)[3] > 200, "center should be opaque");
}

#[test]
fn prepare_command_without_rounding_keeps_corners() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.png");
    let out_dir = dir.path().join("build");
    source(64).save(&input).unwrap();

    commands::prepare::run(&input, &out_dir, false).unwrap();

    let master = image::open(out_dir.join("icon.png")).unwrap().to_rgba8();
    assert_eq!(master.get_pixel(0, 0)[3], 255);
}

#[test]
fn missing_source_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("build");

    let err = commands::prepare::run(&dir.path().join("nope.png"), &out_dir, false).unwrap_err();
    assert!(err.to_string().contains("Failed to open icon"));
    assert!(!out_dir.exists());
}
