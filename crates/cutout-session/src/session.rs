//! The interactive correction loop
//!
//! A [`CorrectionSession`] owns the working image, the trimap, and the
//! current refined mask for one extraction run, and advances through
//! discrete pointer events delivered by the surrounding UI:
//!
//! ```text
//! begin -> AutoSegmented -> AwaitingScribble -> (resegment) -> AutoSegmented
//!                |                                                  |
//!              accept / cancel  <-----------------------------------+
//! ```
//!
//! `begin` and `pointer_released` run segmentation and refinement
//! synchronously on the calling thread; a round in progress always
//! runs to completion. Accepting or cancelling consumes the session,
//! which is how the terminal states are represented.
//!
//! A failed correction round never discards prior progress: the
//! session reports the failure and keeps the last good mask.

use crate::{SessionError, SessionResult};
use cutout_core::{AlphaMask, Raster, Region, Scribble, ScribbleLabel, Segment, Trimap};
use cutout_filter::{refine, RefineOutcome, RefineParams};
use cutout_segment::{EnergyMinimizer, SegmentError, SegmentationEngine, DEFAULT_ITERATIONS};

/// Which pointer button started a scribble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Marks touched pixels as definite background
    Primary,
    /// Marks touched pixels as definite foreground
    Secondary,
}

impl PointerButton {
    /// The scribble label this button draws.
    #[inline]
    pub const fn scribble_label(self) -> ScribbleLabel {
        match self {
            PointerButton::Primary => ScribbleLabel::ForceBackground,
            PointerButton::Secondary => ScribbleLabel::ForceForeground,
        }
    }
}

/// Observable session states between events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A refined mask is available for display; the user may accept,
    /// cancel, or start drawing
    AutoSegmented,
    /// A scribble is being drawn or is queued for the next round
    AwaitingScribble,
}

/// How a correction round ended
#[derive(Debug)]
pub enum RoundResult {
    /// Scribbles were applied and a new refined mask is available
    Applied {
        /// Whether refinement ran fully or degraded to its input
        outcome: RefineOutcome,
    },
    /// Segmentation failed; the round was aborted and the previous
    /// refined mask kept
    RoundFailed(SegmentError),
    /// No pixels were touched this round; nothing was recomputed
    Idle,
}

/// Session tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Convergence effort per segmentation pass
    pub iterations: u32,
    /// Mask refinement parameters used after every pass
    pub refine: RefineParams,
    /// Width of correction strokes in pixels
    pub scribble_thickness: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            refine: RefineParams::default(),
            scribble_thickness: 2,
        }
    }
}

/// A scribble being drawn, tracking the pointer's last position
#[derive(Debug)]
struct ActiveScribble {
    scribble: Scribble,
    last: (i32, i32),
}

/// One interactive extraction run
///
/// Exclusively owns the image, trimap, and mask buffers for its
/// lifetime; no other component mutates them while the session runs.
#[derive(Debug)]
pub struct CorrectionSession<M> {
    image: Raster,
    engine: SegmentationEngine<M>,
    config: SessionConfig,
    trimap: Trimap,
    refined: AlphaMask,
    outcome: RefineOutcome,
    state: SessionState,
    active: Option<ActiveScribble>,
    pending: Vec<Scribble>,
}

impl<M: EnergyMinimizer> CorrectionSession<M> {
    /// Start a session: seed the trimap from the bounding box, run the
    /// first segmentation pass, refine once.
    ///
    /// # Errors
    ///
    /// Region and segmentation failures here are fatal: there is no
    /// prior good state to fall back to, and the user must redraw.
    pub fn begin(
        image: Raster,
        region: Region,
        minimizer: M,
        config: SessionConfig,
    ) -> SessionResult<Self> {
        let mut engine = SegmentationEngine::new(minimizer);
        let seeded = engine.initialize_from_region(&image, region)?;
        let trimap = engine.segment(&image, &seeded, config.iterations)?;
        let refined = refine(&trimap.to_binary_mask(), &config.refine);
        tracing::info!(outcome = ?refined.outcome, "initial segmentation complete");

        Ok(Self {
            image,
            engine,
            config,
            trimap,
            refined: refined.mask,
            outcome: refined.outcome,
            state: SessionState::AutoSegmented,
            active: None,
            pending: Vec::new(),
        })
    }

    /// The current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The working image.
    pub fn image(&self) -> &Raster {
        &self.image
    }

    /// The current trimap.
    pub fn trimap(&self) -> &Trimap {
        &self.trimap
    }

    /// The current refined mask (always the last good one).
    pub fn refined_mask(&self) -> &AlphaMask {
        &self.refined
    }

    /// How the current mask's refinement ended.
    pub fn refine_outcome(&self) -> RefineOutcome {
        self.outcome
    }

    /// Start a scribble at `(x, y)`.
    ///
    /// The primary button draws force-background, the secondary button
    /// force-foreground. Pressing again without a release commits the
    /// stroke so far and starts a new one.
    pub fn pointer_pressed(&mut self, button: PointerButton, x: i32, y: i32) {
        if let Some(active) = self.active.take()
            && !active.scribble.is_empty()
        {
            self.pending.push(active.scribble);
        }
        self.active = Some(ActiveScribble {
            scribble: Scribble::new(button.scribble_label(), self.config.scribble_thickness),
            last: (x, y),
        });
        self.state = SessionState::AwaitingScribble;
    }

    /// Extend the active scribble to `(x, y)`.
    ///
    /// Moves with no button down are ignored.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        if let Some(active) = &mut self.active {
            active
                .scribble
                .push_segment(Segment::new(active.last.0, active.last.1, x, y));
            active.last = (x, y);
        }
    }

    /// Complete the scribble and run one correction round.
    ///
    /// Rasterizes everything drawn since the last round in draw order,
    /// re-segments in mask mode, and re-refines. A release with
    /// nothing drawn is [`RoundResult::Idle`] and triggers no pass.
    pub fn pointer_released(&mut self) -> RoundResult {
        if let Some(active) = self.active.take() {
            let mut scribble = active.scribble;
            if scribble.is_empty() {
                // A click without a drag still stamps a dot.
                let (x, y) = active.last;
                scribble.push_segment(Segment::new(x, y, x, y));
            }
            self.pending.push(scribble);
        }

        if self.pending.is_empty() {
            self.state = SessionState::AutoSegmented;
            return RoundResult::Idle;
        }

        self.resegment()
    }

    /// Accept the current mask, ending the session.
    ///
    /// Strokes drawn but never released are discarded; accepting
    /// straight from `AutoSegmented` performs no extra pass.
    pub fn accept(self) -> AlphaMask {
        self.refined
    }

    /// Abandon the session without producing a mask.
    pub fn cancel(self) {}

    /// One correction round: rasterize, segment, refine.
    ///
    /// The trimap is only replaced when the whole round succeeds, so a
    /// failure leaves the session exactly as it was.
    fn resegment(&mut self) -> RoundResult {
        let mut trimap = self.trimap.clone();
        for scribble in self.pending.drain(..) {
            trimap.rasterize(&scribble);
        }

        match self.engine.segment(&self.image, &trimap, self.config.iterations) {
            Ok(next) => {
                let refined = refine(&next.to_binary_mask(), &self.config.refine);
                tracing::info!(outcome = ?refined.outcome, "correction round applied");
                self.trimap = next;
                self.refined = refined.mask;
                self.outcome = refined.outcome;
                self.state = SessionState::AutoSegmented;
                RoundResult::Applied {
                    outcome: refined.outcome,
                }
            }
            Err(err) => {
                tracing::info!(error = %err, "correction round failed; keeping last good mask");
                self.state = SessionState::AutoSegmented;
                RoundResult::RoundFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutout_core::{ChannelLayout, TrimapLabel};
    use cutout_segment::{InitMode, SegmentResult};

    /// Stub minimizer: flips every probable cell to probable
    /// foreground, optionally failing after a set number of calls.
    #[derive(Debug)]
    struct Stub {
        calls: u32,
        fail_from_call: Option<u32>,
    }

    impl Stub {
        fn new() -> Self {
            Self {
                calls: 0,
                fail_from_call: None,
            }
        }

        fn failing_from(call: u32) -> Self {
            Self {
                calls: 0,
                fail_from_call: Some(call),
            }
        }
    }

    impl EnergyMinimizer for Stub {
        fn minimize(
            &mut self,
            _image: &Raster,
            trimap: &Trimap,
            _mode: InitMode,
            iterations: u32,
        ) -> SegmentResult<Trimap> {
            self.calls += 1;
            if let Some(from) = self.fail_from_call
                && self.calls >= from
            {
                return Err(SegmentError::NotConverged {
                    changed: 1,
                    iterations,
                });
            }
            let mut out = trimap.clone();
            for label in out.labels_mut() {
                if !label.is_definite() {
                    *label = TrimapLabel::ProbableForeground;
                }
            }
            Ok(out)
        }
    }

    fn image() -> Raster {
        Raster::new(20, 20, ChannelLayout::Bgr).unwrap()
    }

    fn config() -> SessionConfig {
        SessionConfig {
            refine: RefineParams {
                kernel_size: 3,
                blur_size: 3,
                dilate_iterations: 1,
            },
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_begin_reaches_auto_segmented() {
        let session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();
        assert_eq!(session.state(), SessionState::AutoSegmented);
        assert_eq!(session.refined_mask().dimensions(), (20, 20));
    }

    #[test]
    fn test_begin_with_empty_region_fails() {
        let err =
            CorrectionSession::begin(image(), Region::new(4, 4, 0, 10), Stub::new(), config())
                .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Segment(SegmentError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_idle_release_runs_no_round() {
        let mut session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();
        assert!(matches!(session.pointer_released(), RoundResult::Idle));
        assert_eq!(session.state(), SessionState::AutoSegmented);
    }

    #[test]
    fn test_scribble_round_applies() {
        let mut session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();

        session.pointer_pressed(PointerButton::Primary, 6, 6);
        assert_eq!(session.state(), SessionState::AwaitingScribble);
        session.pointer_moved(12, 6);
        let result = session.pointer_released();

        assert!(matches!(result, RoundResult::Applied { .. }));
        assert_eq!(session.state(), SessionState::AutoSegmented);
        // The stroke became a hard background constraint.
        assert_eq!(session.trimap().get(8, 6), Some(TrimapLabel::Background));
    }

    #[test]
    fn test_moves_without_press_ignored() {
        let mut session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();
        session.pointer_moved(3, 3);
        assert_eq!(session.state(), SessionState::AutoSegmented);
        assert!(matches!(session.pointer_released(), RoundResult::Idle));
    }

    #[test]
    fn test_failed_round_keeps_last_good_mask() {
        // First call (begin) succeeds, second (the correction) fails.
        let mut session = CorrectionSession::begin(
            image(),
            Region::new(4, 4, 10, 10),
            Stub::failing_from(2),
            config(),
        )
        .unwrap();

        let before_mask = session.refined_mask().clone();
        let before_trimap = session.trimap().clone();

        session.pointer_pressed(PointerButton::Primary, 6, 6);
        session.pointer_moved(12, 6);
        let result = session.pointer_released();

        assert!(matches!(
            result,
            RoundResult::RoundFailed(SegmentError::NotConverged { .. })
        ));
        assert_eq!(session.state(), SessionState::AutoSegmented);
        assert_eq!(session.refined_mask(), &before_mask);
        assert_eq!(session.trimap(), &before_trimap);
    }

    #[test]
    fn test_accept_returns_current_mask() {
        let session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();
        let expected = session.refined_mask().clone();
        assert_eq!(session.accept(), expected);
    }

    #[test]
    fn test_press_press_commits_first_stroke() {
        let mut session =
            CorrectionSession::begin(image(), Region::new(4, 4, 10, 10), Stub::new(), config())
                .unwrap();

        session.pointer_pressed(PointerButton::Primary, 5, 5);
        session.pointer_moved(9, 5);
        session.pointer_pressed(PointerButton::Secondary, 5, 9);
        session.pointer_moved(9, 9);
        let result = session.pointer_released();

        assert!(matches!(result, RoundResult::Applied { .. }));
        assert_eq!(session.trimap().get(7, 5), Some(TrimapLabel::Background));
        assert_eq!(session.trimap().get(7, 9), Some(TrimapLabel::Foreground));
    }
}
