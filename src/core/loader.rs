use std::path::Path;

use crate::error::export::ExportError;
use crate::model::course::Course;

/// Read and parse an authored course file.
pub async fn load_course(path: &Path) -> Result<Course, ExportError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ExportError::from(err).context(path.display()))?;
    let course: Course =
        serde_json::from_str(&text).map_err(|err| ExportError::from(err).context(path.display()))?;

    log::info!(
        "loaded course \"{}\" from {} ({} modules)",
        course.title,
        path.display(),
        course.modules.len()
    );
    Ok(course)
}
