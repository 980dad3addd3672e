//! Deployment metadata entities
//!
//! `LessonMetadataRecord` is what the remote store keeps per lesson, and
//! `DeploymentMetadataFile` is the JSON document the generator hands to the
//! deployer. Field names follow the store's schema (`contentHash`,
//! `is_premium`, `createdAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Lesson;
use crate::domain::value_objects::{ContentHash, Slug};

/// Metadata pushed to the remote store for one lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMetadataRecord {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub code: String,
    pub content_hash: ContentHash,
    pub version: String,
    #[serde(rename = "is_premium")]
    pub is_premium: bool,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl LessonMetadataRecord {
    /// Build a record for a freshly scanned lesson, stamped with `now`
    pub fn from_lesson(lesson: &Lesson, now: DateTime<Utc>) -> Self {
        Self {
            slug: lesson.slug().clone(),
            title: lesson.title(),
            description: lesson.description(),
            code: lesson.code(),
            content_hash: lesson.hash().clone(),
            version: lesson.version(),
            is_premium: lesson.is_premium(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Keep timestamps from a previous run's record for the same slug
    ///
    /// `createdAt` is always carried over; `updatedAt` only while the
    /// content hash is unchanged.
    pub fn carry_over_from(&mut self, previous: &LessonMetadataRecord) {
        if previous.slug != self.slug {
            return;
        }
        self.created_at = previous.created_at;
        if previous.content_hash == self.content_hash {
            self.updated_at = previous.updated_at;
        }
    }
}

/// The JSON document handed from generator to deployer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentMetadataFile {
    pub lessons: Vec<LessonMetadataRecord>,
    #[serde(with = "iso8601")]
    pub generated_at: DateTime<Utc>,
    pub total_lessons: usize,
}

impl DeploymentMetadataFile {
    pub fn new(lessons: Vec<LessonMetadataRecord>, generated_at: DateTime<Utc>) -> Self {
        let total_lessons = lessons.len();
        Self {
            lessons,
            generated_at,
            total_lessons,
        }
    }

    pub fn find(&self, slug: &Slug) -> Option<&LessonMetadataRecord> {
        self.lessons.iter().find(|record| &record.slug == slug)
    }
}

/// ISO-8601 UTC timestamps with millisecond precision (`2024-05-01T08:00:00.000Z`)
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
