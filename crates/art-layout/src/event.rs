//! Signals carried on the center-panel bus

use art_artifact::ArtifactDescriptor;
use serde::{Deserialize, Serialize};

/// Lesson identifier
pub type LessonId = String;

/// Center-panel signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CenterEvent {
    /// Show an artifact
    Open {
        /// Artifact to show
        descriptor: ArtifactDescriptor,
    },
    /// Dismiss the artifact
    Close,
    /// Bring the lesson back next to a full-width artifact
    ShowLesson,
    /// Move the lesson/artifact divider
    Resize {
        /// Requested lesson width in percent
        #[serde(rename = "lessonPercent")]
        lesson_percent: f64,
    },
    /// Lesson navigation happened
    LessonChange {
        /// New lesson, or none
        #[serde(rename = "lessonId", default)]
        lesson_id: Option<LessonId>,
    },
}

impl CenterEvent {
    /// Open signal
    #[inline]
    #[must_use]
    pub fn open(descriptor: ArtifactDescriptor) -> Self {
        Self::Open { descriptor }
    }

    /// Resize signal
    #[inline]
    #[must_use]
    pub fn resize(lesson_percent: f64) -> Self {
        Self::Resize { lesson_percent }
    }

    /// Lesson-change signal
    #[inline]
    #[must_use]
    pub fn lesson_change(lesson_id: impl Into<LessonId>) -> Self {
        Self::LessonChange {
            lesson_id: Some(lesson_id.into()),
        }
    }

    /// Short label for logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Close => "close",
            Self::ShowLesson => "showLesson",
            Self::Resize { .. } => "resize",
            Self::LessonChange { .. } => "lessonChange",
        }
    }
}
