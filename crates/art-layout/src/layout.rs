//! Center layout state machine
//!
//! Three modes decide how the lesson and the artifact share the center panel:
//!
//! | Mode              | Lesson | Artifact | Split reported |
//! |-------------------|--------|----------|----------------|
//! | `LessonOnly`      | yes    | no       | no             |
//! | `LessonArtifact`  | yes    | yes      | yes            |
//! | `ArtifactOnly`    | no     | yes      | no             |
//!
//! The current artifact is stored inside the mode, so `LessonOnly` can never
//! carry one and the other two modes always do.

use crate::event::{CenterEvent, LessonId};
use art_artifact::{ArtifactDescriptor, Origin};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Center panel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Lesson alone (initial)
    LessonOnly,
    /// Lesson and artifact side by side
    LessonArtifact,
    /// Artifact alone; lesson state kept but hidden
    ArtifactOnly,
}

impl LayoutMode {
    /// All modes
    pub const ALL: [LayoutMode; 3] = [Self::LessonOnly, Self::LessonArtifact, Self::ArtifactOnly];

    /// Wire name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessonOnly => "LESSON_ONLY",
            Self::LessonArtifact => "LESSON_ARTIFACT",
            Self::ArtifactOnly => "ARTIFACT_ONLY",
        }
    }

    /// Whether an artifact is shown in this mode
    #[inline]
    #[must_use]
    pub fn shows_artifact(&self) -> bool {
        !matches!(self, Self::LessonOnly)
    }
}

impl Display for LayoutMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modes reachable from `from` in one dispatch, excluding staying put
#[must_use]
pub fn allowed_transitions(from: LayoutMode) -> Vec<LayoutMode> {
    use LayoutMode::{ArtifactOnly, LessonArtifact, LessonOnly};
    match from {
        LessonOnly => vec![LessonArtifact, ArtifactOnly],
        LessonArtifact => vec![ArtifactOnly, LessonOnly],
        ArtifactOnly => vec![LessonArtifact, LessonOnly],
    }
}

/// Lesson/artifact width split in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "SplitPercentages")]
pub struct SplitRatio {
    lesson: u8,
}

impl SplitRatio {
    /// Narrowest lesson width
    pub const MIN_LESSON: u8 = 30;
    /// Widest lesson width
    pub const MAX_LESSON: u8 = 70;
    /// Initial lesson width
    pub const DEFAULT_LESSON: u8 = 40;

    /// Split with an exact lesson width, if inside the allowed range
    #[must_use]
    pub fn new(lesson: u8) -> Option<Self> {
        (Self::MIN_LESSON..=Self::MAX_LESSON)
            .contains(&lesson)
            .then_some(Self { lesson })
    }

    /// Split nearest to a requested lesson width
    ///
    /// Clamps to the allowed range and rounds to a whole percent, so
    /// infinities land on the bounds. Returns `None` for NaN.
    #[must_use]
    pub fn clamped(lesson_percent: f64) -> Option<Self> {
        if lesson_percent.is_nan() {
            return None;
        }
        let clamped = lesson_percent
            .clamp(f64::from(Self::MIN_LESSON), f64::from(Self::MAX_LESSON))
            .round();
        // In range after the clamp, so the cast is exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lesson = clamped as u8;
        Some(Self { lesson })
    }

    /// Lesson width in percent
    #[inline]
    #[must_use]
    pub fn lesson(&self) -> u8 {
        self.lesson
    }

    /// Artifact width in percent
    #[inline]
    #[must_use]
    pub fn artifact(&self) -> u8 {
        100 - self.lesson
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self {
            lesson: Self::DEFAULT_LESSON,
        }
    }
}

impl Display for SplitRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lesson(), self.artifact())
    }
}

#[derive(Serialize)]
struct SplitPercentages {
    lesson: u8,
    artifact: u8,
}

impl From<SplitRatio> for SplitPercentages {
    fn from(split: SplitRatio) -> Self {
        Self {
            lesson: split.lesson(),
            artifact: split.artifact(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CenterView {
    LessonOnly,
    LessonArtifact(ArtifactDescriptor),
    ArtifactOnly(ArtifactDescriptor),
}

impl CenterView {
    fn mode(&self) -> LayoutMode {
        match self {
            Self::LessonOnly => LayoutMode::LessonOnly,
            Self::LessonArtifact(_) => LayoutMode::LessonArtifact,
            Self::ArtifactOnly(_) => LayoutMode::ArtifactOnly,
        }
    }

    fn artifact(&self) -> Option<&ArtifactDescriptor> {
        match self {
            Self::LessonOnly => None,
            Self::LessonArtifact(d) | Self::ArtifactOnly(d) => Some(d),
        }
    }
}

/// Center panel state
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    view: CenterView,
    split: SplitRatio,
    lesson_id: Option<LessonId>,
}

impl LayoutState {
    fn new(split: SplitRatio) -> Self {
        Self {
            view: CenterView::LessonOnly,
            split,
            lesson_id: None,
        }
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.view.mode()
    }

    /// Artifact on display, `None` exactly in `LessonOnly`
    #[inline]
    #[must_use]
    pub fn current_artifact(&self) -> Option<&ArtifactDescriptor> {
        self.view.artifact()
    }

    /// Split in effect, reported only while lesson and artifact share the panel
    #[must_use]
    pub fn split_ratio(&self) -> Option<SplitRatio> {
        matches!(self.view, CenterView::LessonArtifact(_)).then_some(self.split)
    }

    /// Last known split, kept across modes
    #[inline]
    #[must_use]
    pub fn last_split_ratio(&self) -> SplitRatio {
        self.split
    }

    /// Current lesson
    #[inline]
    #[must_use]
    pub fn current_lesson_id(&self) -> Option<&str> {
        self.lesson_id.as_deref()
    }

    /// Serializable view of the state
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot<'_> {
        LayoutSnapshot {
            mode: self.mode(),
            split_ratio: self.split_ratio(),
            current_lesson_id: self.current_lesson_id(),
            current_artifact: self.current_artifact(),
        }
    }
}

/// Serializable layout state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot<'a> {
    /// Mode
    pub mode: LayoutMode,
    /// Split, when reported
    pub split_ratio: Option<SplitRatio>,
    /// Current lesson
    pub current_lesson_id: Option<&'a str>,
    /// Artifact on display
    pub current_artifact: Option<&'a ArtifactDescriptor>,
}

/// Why a signal left the layout untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// `close` with no artifact open
    NothingToClose,
    /// `showLesson` while the lesson is already visible
    LessonAlreadyVisible,
    /// `resize` while no split is shown
    NoSplitShown,
    /// `resize` with NaN input
    NanResize,
}

impl IgnoreReason {
    /// Short description for logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NothingToClose => "no artifact to close",
            Self::LessonAlreadyVisible => "lesson already visible",
            Self::NoSplitShown => "no split shown",
            Self::NanResize => "NaN resize",
        }
    }
}

/// Effect of one dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "camelCase")]
pub enum Change {
    /// Artifact opened or replaced
    Opened {
        /// Producer of the artifact
        origin: Origin,
    },
    /// Artifact dismissed
    Closed,
    /// Lesson brought back beside the artifact
    LessonShown,
    /// Split changed
    Resized {
        /// New split
        ratio: SplitRatio,
    },
    /// Lesson id updated
    LessonChanged {
        /// New lesson id
        #[serde(rename = "lessonId")]
        lesson_id: Option<LessonId>,
    },
    /// Precondition not met; nothing changed
    Ignored {
        /// Unmet precondition
        reason: IgnoreReason,
    },
}

/// Record of one dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// Mode before
    pub from: LayoutMode,
    /// Mode after
    pub to: LayoutMode,
    /// What happened
    #[serde(flatten)]
    pub change: Change,
}

impl Transition {
    /// Whether the dispatch was a no-op
    #[inline]
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self.change, Change::Ignored { .. })
    }

    /// Origin of the opened artifact, for open transitions
    #[must_use]
    pub fn opened_origin(&self) -> Option<Origin> {
        match self.change {
            Change::Opened { origin } => Some(origin),
            _ => None,
        }
    }
}

/// Center layout state machine
///
/// Pure and deterministic: the same signal sequence always yields the same
/// states and transitions.
#[derive(Debug, Clone)]
pub struct CenterLayout {
    state: LayoutState,
}

impl CenterLayout {
    /// Machine in `LessonOnly` with the default 40/60 split
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_split(SplitRatio::default())
    }

    /// Machine in `LessonOnly` with a custom initial split
    #[must_use]
    pub fn with_default_split(split: SplitRatio) -> Self {
        Self {
            state: LayoutState::new(split),
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.state.mode()
    }

    /// Apply one signal
    pub fn dispatch(&mut self, event: CenterEvent) -> Transition {
        let from = self.mode();
        let change = match event {
            CenterEvent::Open { descriptor } => self.open(descriptor),
            CenterEvent::Close => self.close(),
            CenterEvent::ShowLesson => self.show_lesson(),
            CenterEvent::Resize { lesson_percent } => self.resize(lesson_percent),
            CenterEvent::LessonChange { lesson_id } => {
                self.state.lesson_id.clone_from(&lesson_id);
                Change::LessonChanged { lesson_id }
            }
        };
        let to = self.mode();

        if let Change::Ignored { reason } = &change {
            tracing::debug!(mode = %from, reason = reason.as_str(), "layout signal ignored");
        }
        Transition { from, to, change }
    }

    fn open(&mut self, descriptor: ArtifactDescriptor) -> Change {
        let origin = descriptor.origin();
        tracing::info!(
            kind = %descriptor.kind(),
            title = descriptor.display_title(),
            origin = %origin,
            "artifact opened"
        );
        self.state.view = match origin {
            Origin::Lesson => CenterView::LessonArtifact(descriptor),
            Origin::Chat | Origin::Manual => CenterView::ArtifactOnly(descriptor),
        };
        Change::Opened { origin }
    }

    fn close(&mut self) -> Change {
        if matches!(self.state.view, CenterView::LessonOnly) {
            return Change::Ignored {
                reason: IgnoreReason::NothingToClose,
            };
        }
        self.state.view = CenterView::LessonOnly;
        tracing::info!("artifact closed");
        Change::Closed
    }

    fn show_lesson(&mut self) -> Change {
        match std::mem::replace(&mut self.state.view, CenterView::LessonOnly) {
            CenterView::ArtifactOnly(descriptor) => {
                self.state.view = CenterView::LessonArtifact(descriptor);
                Change::LessonShown
            }
            other => {
                self.state.view = other;
                Change::Ignored {
                    reason: IgnoreReason::LessonAlreadyVisible,
                }
            }
        }
    }

    fn resize(&mut self, lesson_percent: f64) -> Change {
        if !matches!(self.state.view, CenterView::LessonArtifact(_)) {
            return Change::Ignored {
                reason: IgnoreReason::NoSplitShown,
            };
        }
        match SplitRatio::clamped(lesson_percent) {
            Some(ratio) => {
                self.state.split = ratio;
                Change::Resized { ratio }
            }
            None => Change::Ignored {
                reason: IgnoreReason::NanResize,
            },
        }
    }
}

impl Default for CenterLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lesson_artifact() -> ArtifactDescriptor {
        ArtifactDescriptor::markdown("Otto", "## cycle", Origin::Lesson)
    }

    fn chat_artifact() -> ArtifactDescriptor {
        ArtifactDescriptor::code("Widget", "<p>hi</p>", Origin::Chat)
    }

    #[test]
    fn starts_lesson_only() {
        let layout = CenterLayout::new();
        assert_eq!(layout.mode(), LayoutMode::LessonOnly);
        assert!(layout.state().current_artifact().is_none());
        assert!(layout.state().split_ratio().is_none());
        assert_eq!(layout.state().last_split_ratio(), SplitRatio::default());
    }

    #[test]
    fn lesson_open_splits() {
        let mut layout = CenterLayout::new();
        let t = layout.dispatch(CenterEvent::open(lesson_artifact()));
        assert_eq!(t.from, LayoutMode::LessonOnly);
        assert_eq!(t.to, LayoutMode::LessonArtifact);
        assert_eq!(t.opened_origin(), Some(Origin::Lesson));
        let split = layout.state().split_ratio().unwrap();
        assert_eq!((split.lesson(), split.artifact()), (40, 60));
    }

    #[test]
    fn chat_and_manual_open_full_width() {
        let mut layout = CenterLayout::new();
        layout.dispatch(CenterEvent::open(chat_artifact()));
        assert_eq!(layout.mode(), LayoutMode::ArtifactOnly);
        assert!(layout.state().split_ratio().is_none());

        let manual = ArtifactDescriptor::markdown("Lesson", "text", Origin::Manual);
        layout.dispatch(CenterEvent::open(manual.clone()));
        assert_eq!(layout.mode(), LayoutMode::ArtifactOnly);
        assert_eq!(layout.state().current_artifact(), Some(&manual));
    }

    #[test]
    fn close_keeps_split() {
        let mut layout = CenterLayout::new();
        layout.dispatch(CenterEvent::open(lesson_artifact()));
        layout.dispatch(CenterEvent::resize(62.4));
        let t = layout.dispatch(CenterEvent::Close);
        assert_eq!(t.change, Change::Closed);
        assert!(layout.state().current_artifact().is_none());
        assert_eq!(layout.state().last_split_ratio().lesson(), 62);

        layout.dispatch(CenterEvent::open(lesson_artifact()));
        assert_eq!(layout.state().split_ratio().unwrap().lesson(), 62);
    }

    #[test]
    fn close_when_nothing_open_is_ignored() {
        let mut layout = CenterLayout::new();
        let t = layout.dispatch(CenterEvent::Close);
        assert!(t.is_ignored());
        assert_eq!(t.from, t.to);
    }

    #[test]
    fn show_lesson_only_from_artifact_only() {
        let mut layout = CenterLayout::new();
        assert!(layout.dispatch(CenterEvent::ShowLesson).is_ignored());

        layout.dispatch(CenterEvent::open(chat_artifact()));
        let t = layout.dispatch(CenterEvent::ShowLesson);
        assert_eq!(t.change, Change::LessonShown);
        assert_eq!(layout.mode(), LayoutMode::LessonArtifact);
        assert_eq!(layout.state().current_artifact().unwrap().title(), "Widget");
    }

    #[test]
    fn resize_requires_split_and_finite_input() {
        let mut layout = CenterLayout::new();
        assert_eq!(
            layout.dispatch(CenterEvent::resize(50.0)).change,
            Change::Ignored {
                reason: IgnoreReason::NoSplitShown
            }
        );
        layout.dispatch(CenterEvent::open(lesson_artifact()));
        assert_eq!(
            layout.dispatch(CenterEvent::resize(f64::NAN)).change,
            Change::Ignored {
                reason: IgnoreReason::NanResize
            }
        );
        assert_eq!(
            layout.dispatch(CenterEvent::resize(f64::NEG_INFINITY)).change,
            Change::Resized {
                ratio: SplitRatio::new(30).unwrap()
            }
        );
        let t = layout.dispatch(CenterEvent::resize(85.0));
        assert_eq!(
            t.change,
            Change::Resized {
                ratio: SplitRatio::new(70).unwrap()
            }
        );
    }

    #[test]
    fn lesson_change_keeps_mode() {
        let mut layout = CenterLayout::new();
        layout.dispatch(CenterEvent::open(chat_artifact()));
        let t = layout.dispatch(CenterEvent::lesson_change("otto-cycle"));
        assert_eq!(t.from, LayoutMode::ArtifactOnly);
        assert_eq!(t.to, LayoutMode::ArtifactOnly);
        assert_eq!(layout.state().current_lesson_id(), Some("otto-cycle"));
    }

    #[test]
    fn lesson_id_survives_open_and_close() {
        let mut layout = CenterLayout::new();
        layout.dispatch(CenterEvent::lesson_change("diesel"));
        layout.dispatch(CenterEvent::open(lesson_artifact()));
        layout.dispatch(CenterEvent::Close);
        assert_eq!(layout.state().current_lesson_id(), Some("diesel"));
    }

    #[test]
    fn split_bounds() {
        assert!(SplitRatio::new(29).is_none());
        assert!(SplitRatio::new(71).is_none());
        assert_eq!(SplitRatio::clamped(10.0).unwrap().lesson(), 30);
        assert_eq!(SplitRatio::clamped(f64::NAN), None);
        assert_eq!(SplitRatio::clamped(f64::INFINITY).unwrap().lesson(), 70);
        assert_eq!(SplitRatio::clamped(f64::NEG_INFINITY).unwrap().lesson(), 30);
        assert_eq!(SplitRatio::clamped(45.5).unwrap().to_string(), "46/54");
    }

    #[test]
    fn snapshot_shape() {
        let mut layout = CenterLayout::new();
        layout.dispatch(CenterEvent::open(lesson_artifact()));
        let json = serde_json::to_value(layout.state().snapshot()).unwrap();
        assert_eq!(json["mode"], "LESSON_ARTIFACT");
        assert_eq!(json["splitRatio"], serde_json::json!({ "lesson": 40, "artifact": 60 }));
        assert_eq!(json["currentArtifact"]["title"], "Otto");
    }
}
