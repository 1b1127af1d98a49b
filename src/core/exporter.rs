use std::path::PathBuf;

use crate::core::loader::load_course;
use crate::core::validator;
use crate::error::export::ExportError;
use crate::model::course::Course;
use crate::model::summary::CourseSummary;
use crate::utils::fs::{ensure_parent_dir, write_atomic};

pub const DEFAULT_SLUG: &str = "js-masterclass";

/// Where the course is read from and where `course.json` goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub content_path: PathBuf,
    pub output_path: PathBuf,
}

impl ExportConfig {
    /// `content/<slug>.json` -> `public/apps/<slug>/course.json`
    pub fn for_slug(slug: &str) -> Self {
        ExportConfig {
            content_path: PathBuf::from(format!("content/{}.json", slug)),
            output_path: PathBuf::from(format!("public/apps/{}/course.json", slug)),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig::for_slug(DEFAULT_SLUG)
    }
}

pub struct CourseExporter {
    config: ExportConfig,
}

impl CourseExporter {
    pub fn new(config: ExportConfig) -> Self {
        CourseExporter { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Validated, pretty-printed JSON document for the course.
    pub fn render(course: &Course) -> Result<String, ExportError> {
        validator::validate(course).map_err(|err| ExportError::from(err).context("invalid course"))?;
        Ok(serde_json::to_string_pretty(course)?)
    }

    pub async fn export(&self, course: &Course) -> Result<CourseSummary, ExportError> {
        let json = Self::render(course)?;
        let output_path = &self.config.output_path;

        ensure_parent_dir(output_path)
            .await
            .map_err(|err| ExportError::from(err).context(output_path.display()))?;
        write_atomic(output_path, json.as_bytes())
            .await
            .map_err(|err| ExportError::from(err).context(output_path.display()))?;

        let summary = CourseSummary::of(course);
        log::info!("wrote {} ({} bytes): {}", output_path.display(), json.len(), summary);
        Ok(summary)
    }

    /// Load the authored content and export it.
    pub async fn run(&self) -> Result<CourseSummary, ExportError> {
        let course = load_course(&self.config.content_path).await?;
        self.export(&course).await
    }
}
