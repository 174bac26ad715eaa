use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MapEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting map build");

        tracing::info!("Fetching feeds...");
        let feeds = self.pipeline.extract().await?;
        tracing::info!(
            "Feeds fetched (earthquakes: {}, tectonic plates: {})",
            if feeds.earthquakes.is_some() { "ok" } else { "unavailable" },
            if feeds.plates.is_some() { "ok" } else { "unavailable" },
        );

        tracing::info!("Composing map layers...");
        let session = self.pipeline.transform(feeds).await?;
        tracing::info!(
            "Composed {} earthquake marker(s)",
            session.quake_markers().len()
        );

        tracing::info!("Rendering page...");
        let output_path = self.pipeline.load(session).await?;
        tracing::info!("Map written to: {}", output_path);

        Ok(output_path)
    }
}
