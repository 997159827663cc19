//! The signature pad widget.
//!
//! `SignaturePad` owns everything the capture flow touches: the raster
//! surface, the stroke state machine, the input mode chosen at construction,
//! and the coordinate context for touch rebasing. The hosting shell forwards
//! device events through [`SignaturePad::dispatch`] and calls the
//! clear/resize/export operations from its own controls.

use crate::config::PadOptions;
use crate::error::ExportResult;
use crate::export::FlattenedSignature;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{
    DefaultAction, DeviceCapabilities, InputEvent, InputMode, InputState,
};
use crate::surface::Surface;
use crate::types::Point;

pub struct SignaturePad {
    surface: Surface,
    state: InputState,
    mode: InputMode,
    options: PadOptions,
    coords: CoordinateContext,
}

impl SignaturePad {
    /// Build a pad sized for `layout_width`, wiring exactly one event family
    /// from the capability probe. The touch family is only eligible when
    /// the options allow it.
    pub fn new(layout_width: u32, caps: &DeviceCapabilities, options: PadOptions) -> Self {
        let mode = if options.touch_input {
            InputMode::detect(caps)
        } else {
            InputMode::Pointer
        };
        Self {
            surface: Surface::new(layout_width),
            state: InputState::default(),
            mode,
            options,
            coords: CoordinateContext::new(Point::default()),
        }
    }

    /// The event family wired for this session.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// True while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.state.is_stroking()
    }

    /// Update the surface element's viewport origin after a layout pass.
    /// Touch events are rebased against this origin.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.coords = CoordinateContext::new(origin);
    }

    /// Track a layout resize: reallocates the surface at the new width,
    /// discarding all ink.
    pub fn resize(&mut self, layout_width: u32) {
        self.surface.resize(layout_width);
    }

    /// Discard all ink, keeping the current size.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Route one host event through the wired family. Events of the other
    /// family are ignored entirely.
    pub fn dispatch(&mut self, event: &InputEvent) -> DefaultAction {
        match (self.mode, event) {
            (InputMode::Pointer, InputEvent::PointerDown(ev)) => {
                self.begin_stroke(CoordinateConverter::pointer_to_surface(ev.offset));
            }
            (InputMode::Pointer, InputEvent::PointerMove(ev)) => {
                self.extend_stroke(CoordinateConverter::pointer_to_surface(ev.offset));
            }
            (InputMode::Pointer, InputEvent::PointerUp) => self.end_stroke(),
            (InputMode::Touch, InputEvent::TouchStart(ev)) => {
                self.begin_stroke(CoordinateConverter::touch_to_surface(
                    ev.client,
                    &self.coords,
                ));
            }
            (InputMode::Touch, InputEvent::TouchMove(ev)) => {
                let position = CoordinateConverter::touch_to_surface(ev.client, &self.coords);
                // Inking a touch move must win over the platform's
                // scroll/pan gesture
                if self.extend_stroke(position) {
                    return DefaultAction::Prevent;
                }
            }
            (InputMode::Touch, InputEvent::TouchEnd) => self.end_stroke(),
            _ => {}
        }
        DefaultAction::Allow
    }

    /// Begin (or re-anchor) a stroke at a surface-local position.
    pub fn begin_stroke(&mut self, position: Point) {
        self.state.begin(position);
    }

    /// Extend the stroke in progress with one segment. Returns whether ink
    /// was laid down; a pad with no active stroke changes nothing.
    pub fn extend_stroke(&mut self, position: Point) -> bool {
        let Some(head) = self.state.head() else {
            return false;
        };
        self.surface
            .stroke_segment(head, position, self.options.stroke_width);
        self.state.advance(position);
        true
    }

    /// End the stroke. The next begin starts a disconnected subpath.
    pub fn end_stroke(&mut self) {
        self.state.reset();
    }

    /// Flatten the surface over opaque white and encode it for the hidden
    /// form field. Built fresh on every call.
    pub fn export_flattened(&self) -> ExportResult<FlattenedSignature> {
        FlattenedSignature::from_surface(&self.surface)
    }
}
