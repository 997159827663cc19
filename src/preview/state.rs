//! Render stage machine - the preview's sequential load pipeline.
//!
//! Document load and page render happen in sequence. The pipeline is an
//! explicit state machine, so a hung or failed load is visible as a parked
//! stage rather than a callback that never fires.
//!
//! ## Stage Transitions
//!
//! ```text
//! Idle        -> Loading      (render requested; document load begins)
//! Loading     -> PageFetched  (document open, page 1 in hand)
//! PageFetched -> Rendered     (page rasterized into the pane)
//! Loading     -> Failed       (library missing, unreachable locator,
//! PageFetched -> Failed        parse or render error)
//! ```
//!
//! `Failed` and `Rendered` are terminal for a given render request; a new
//! request restarts from `Loading`.

/// Where the preview pipeline currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStage {
    /// No render requested yet
    #[default]
    Idle,

    /// Document is being located and opened
    Loading,

    /// Page 1 fetched; rasterization pending
    PageFetched,

    /// Page pixels are in the pane
    Rendered,

    /// The pipeline stopped; the pane keeps its prior (blank) content
    Failed,
}

impl RenderStage {
    /// Returns true before any render has been requested
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true once page pixels are available
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered)
    }

    /// Returns true when the pipeline gave up
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns true while the pipeline is between request and outcome
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Loading | Self::PageFetched)
    }
}
