//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the stable, externally-visible bits: the artifact
//! prefix the form consumer matches on, the derived surface geometry, and
//! the default option sets hosts rely on when a page attribute is absent.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestPadBuilder;
use signpad::config::{PadOptions, PreviewOptions};
use signpad::surface::Surface;

#[test]
fn snapshot_export_prefix() {
    let pad = TestPadBuilder::new().build();
    let flattened = pad.export_flattened().unwrap();
    insta::assert_snapshot!(&flattened.data_uri()[..22], @"data:image/png;base64,");
}

#[test]
fn snapshot_surface_geometry() {
    let (width, height) = Surface::size_for(400);
    insta::assert_snapshot!(format!("{width}x{height}"), @"400x160");
}

#[test]
fn snapshot_default_pad_options() {
    insta::assert_json_snapshot!(PadOptions::default(), @r###"
    {
      "stroke_width": 2.0,
      "touch_input": true
    }
    "###);
}

#[test]
fn snapshot_default_preview_options() {
    insta::assert_json_snapshot!(PreviewOptions::default(), @r###"
    {
      "scale": 1.0
    }
    "###);
}
