//! End-to-end tests: files on disk through parse and render.

use boxview::image_io::{decode_annotation_bytes, decode_image, read_annotation_file, read_image};
use boxview::ir::io_yolo::parse;
use boxview::render::{render, render_in_place, RenderStyle};
use boxview::BoxviewError;

mod common;
use common::{changed_pixels, gray_image, write_gray_image, write_labels, GRAY, RED};

#[test]
fn single_centered_box_on_100x200_image() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image_path = temp.path().join("sample.png");
    let labels_path = temp.path().join("sample.txt");
    write_gray_image(&image_path, 100, 200);
    write_labels(&labels_path, "1 0.5 0.5 0.5 0.5\n");

    let image = read_image(&image_path).expect("read image");
    let annotations = parse(&read_annotation_file(&labels_path).expect("read labels"));

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations.as_slice()[0].class_id, 1);

    let bbox = annotations.as_slice()[0].to_pixel_box(image.width(), image.height());
    assert_eq!((bbox.xmin(), bbox.ymin()), (25.0, 50.0));
    assert_eq!((bbox.xmax(), bbox.ymax()), (75.0, 150.0));

    let annotated = render(Some(&image), &annotations).expect("image present");
    assert_eq!(*annotated.get_pixel(25, 50), RED);
    assert_eq!(*annotated.get_pixel(75, 150), RED);
    assert_eq!(*annotated.get_pixel(75, 50), RED);
    assert_eq!(*annotated.get_pixel(25, 150), RED);
    assert_eq!(*annotated.get_pixel(50, 100), GRAY);

    // Only the two-pixel outline changed.
    let changed = changed_pixels(&image, &annotated);
    assert!(changed
        .iter()
        .all(|&(x, y)| matches!(x, 25 | 26 | 74 | 75) || matches!(y, 50 | 51 | 149 | 150)));
    assert!(changed.iter().all(|&(x, y)| (25..=75).contains(&x) && (50..=150).contains(&y)));
}

#[test]
fn malformed_lines_are_not_drawn() {
    let image = gray_image(64, 64);
    let annotations = parse("0 0.25 0.25 0.25 0.25\n1 0.75 0.75\n2 0.75 0.75 0.25 0.25 9\n");
    assert_eq!(annotations.len(), 1);

    let annotated = render(Some(&image), &annotations).expect("image present");
    // Bottom-right quadrant would only be touched by the dropped lines.
    assert!(changed_pixels(&image, &annotated)
        .iter()
        .all(|&(x, y)| x < 32 && y < 32));
}

#[test]
fn empty_label_file_leaves_image_identical() {
    let image = gray_image(32, 16);
    let annotations = parse("   \n\n");

    let annotated = render(Some(&image), &annotations).expect("image present");
    assert_eq!(annotated, image);
}

#[test]
fn in_place_render_mutates_only_the_given_buffer() {
    let original = gray_image(50, 50);
    let mut working = original.clone();
    let annotations = parse("3 0.5 0.5 0.5 0.5");

    let drawn = render_in_place(&mut working, &annotations, &RenderStyle::default());
    assert_eq!(drawn, 1);
    assert_ne!(working, original);
    assert!(original.pixels().all(|p| *p == GRAY));
}

#[test]
fn in_memory_collaborators_surface_errors() {
    assert!(matches!(
        decode_image(&[0u8, 1, 2, 3]),
        Err(BoxviewError::ImageDecode { .. })
    ));
    assert!(matches!(
        decode_annotation_bytes(vec![0xc3, 0x28]),
        Err(BoxviewError::AnnotationNotUtf8 { .. })
    ));
}
