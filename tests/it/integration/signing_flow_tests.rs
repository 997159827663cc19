//! Signing workflow integration tests - draw, flatten, save, copy link.

use crate::helpers::{
    assert_inked, assert_opaque, assert_white, build_page, pointer_down, pointer_move, pointer_up,
};
use signpad::export::{DATA_URI_PREFIX, FlattenedSignature};

#[test]
fn test_draw_and_save_example_scenario() {
    // Surface width 400 -> height 160; one stroke through three points
    let mut page = build_page(None, None);
    page.pad.dispatch(&pointer_down(10.0, 10.0));
    page.pad.dispatch(&pointer_move(50.0, 50.0));
    page.pad.dispatch(&pointer_move(90.0, 10.0));
    page.pad.dispatch(&pointer_up());

    page.save_signature().unwrap();
    let field = page.signature_field();
    assert!(!field.is_empty());
    assert!(field.value().starts_with(DATA_URI_PREFIX));

    let image = FlattenedSignature::decode(field.value()).unwrap();
    assert_eq!((image.width(), image.height()), (400, 160));
    assert_opaque(&image);

    // The polyline passes through its anchor points and both segment
    // midpoints; the two segments connect at (50, 50)
    assert_inked(&image, 10, 10);
    assert_inked(&image, 30, 30);
    assert_inked(&image, 50, 50);
    assert_inked(&image, 70, 30);
    assert_inked(&image, 90, 10);

    // Far from the polyline the background is untouched white
    assert_white(&image, 200, 80);
    assert_white(&image, 10, 150);
    assert_white(&image, 390, 10);
}

#[test]
fn test_separate_strokes_are_disconnected() {
    let mut page = build_page(None, None);
    page.pad.dispatch(&pointer_down(10.0, 10.0));
    page.pad.dispatch(&pointer_move(30.0, 10.0));
    page.pad.dispatch(&pointer_up());
    page.pad.dispatch(&pointer_down(60.0, 10.0));
    page.pad.dispatch(&pointer_move(80.0, 10.0));
    page.pad.dispatch(&pointer_up());

    page.save_signature().unwrap();
    let image = FlattenedSignature::decode(page.signature_field().value()).unwrap();
    assert_inked(&image, 20, 10);
    assert_inked(&image, 70, 10);
    // The gap between the two subpaths carries no ink
    assert_white(&image, 45, 10);
}

#[test]
fn test_clear_then_save_is_uniform_white() {
    let mut page = build_page(None, None);
    page.pad.dispatch(&pointer_down(10.0, 10.0));
    page.pad.dispatch(&pointer_move(50.0, 50.0));
    page.pad.dispatch(&pointer_up());
    page.pad.clear();

    page.save_signature().unwrap();
    let image = FlattenedSignature::decode(page.signature_field().value()).unwrap();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_save_after_resize_reflects_new_geometry() {
    let mut page = build_page(None, None);
    page.pad.dispatch(&pointer_down(10.0, 10.0));
    page.pad.dispatch(&pointer_move(50.0, 50.0));
    page.pad.dispatch(&pointer_up());

    page.pad.resize(500);
    page.save_signature().unwrap();
    let image = FlattenedSignature::decode(page.signature_field().value()).unwrap();
    assert_eq!((image.width(), image.height()), (500, 200));
    // Prior strokes were discarded by the resize
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_copy_without_signing_url_element_is_inert() {
    let page = build_page(None, None);
    assert_eq!(page.copy_signing_url(), None);
}

#[test]
fn test_copy_signing_url_never_panics() {
    // Clipboard access may be denied in a headless environment; either
    // outcome is acceptable, panicking is not.
    let page = build_page(None, Some("https://sign.example/s/3f2c"));
    let _ = page.copy_signing_url();
}
