use course_export::core::exporter::{CourseExporter, ExportConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let exporter = CourseExporter::new(ExportConfig::default());
    let summary = exporter.run().await.map_err(|err| anyhow::anyhow!(err))?;

    println!("course.json generated successfully");
    println!("{}", summary);
    Ok(())
}
