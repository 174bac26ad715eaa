use crate::core::{legend, page, render, ConfigProvider, FeedData, MapSession, Pipeline, Storage};
use crate::utils::error::{MapError, Result};
use geojson::FeatureCollection;
use reqwest::Client;

pub const OUTPUT_FILE: &str = "map.html";

pub struct QuakeMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> QuakeMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Requesting feed: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Feed response status: {}", response.status());

        if !response.status().is_success() {
            return Err(MapError::FeedStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn fetch_earthquakes(&self) -> Option<FeatureCollection> {
        let url = self.config.earthquake_feed();
        let doc = match self.fetch_json(url).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Earthquake feed unavailable: {}", e);
                return None;
            }
        };

        match serde_json::from_value::<FeatureCollection>(doc) {
            Ok(collection) => {
                tracing::debug!(
                    "Earthquake feed returned {} feature(s)",
                    collection.features.len()
                );
                Some(collection)
            }
            Err(e) => {
                tracing::warn!("Earthquake feed is not a feature collection: {}", e);
                None
            }
        }
    }

    async fn fetch_plates(&self) -> Option<serde_json::Value> {
        let url = self.config.plate_feed();
        match self.fetch_json(url).await {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("Plate boundary feed unavailable: {}", e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuakeMapPipeline<S, C> {
    async fn extract(&self) -> Result<FeedData> {
        // The two feeds are independent; neither failure blocks the other,
        // and there is no ordering guarantee between their completions.
        let (earthquakes, plates) = tokio::join!(self.fetch_earthquakes(), self.fetch_plates());
        Ok(FeedData {
            earthquakes,
            plates,
        })
    }

    async fn transform(&self, feeds: FeedData) -> Result<MapSession> {
        let mut session = MapSession::new(self.config.map_center(), self.config.initial_zoom());

        // The legend reflects the band table, not the fetched data.
        session.set_legend(legend::build_legend());

        if let Some(collection) = &feeds.earthquakes {
            let quakes = render::features_from(collection);
            tracing::debug!("Styling {} earthquake marker(s)", quakes.len());
            session.add_quake_markers(quakes.iter().map(render::marker_for).collect());
        }

        if let Some(plates) = feeds.plates {
            session.set_plate_lines(plates);
        }

        Ok(session)
    }

    async fn load(&self, session: MapSession) -> Result<String> {
        let html = page::render_page(&session)?;
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage.write_file(OUTPUT_FILE, html.as_bytes()).await?;
        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                MapError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        earthquake_feed: String,
        plate_feed: String,
        output_path: String,
    }

    impl MockConfig {
        fn new(earthquake_feed: String, plate_feed: String) -> Self {
            Self {
                earthquake_feed,
                plate_feed,
                output_path: "test_output".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn earthquake_feed(&self) -> &str {
            &self.earthquake_feed
        }

        fn plate_feed(&self) -> &str {
            &self.plate_feed
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn map_center(&self) -> (f64, f64) {
            (28.75, -20.0)
        }

        fn initial_zoom(&self) -> u8 {
            3
        }
    }

    fn quake_feed_body() -> serde_json::Value {
        serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "mag": 4.5, "place": "Test Location" },
                "geometry": {
                    "type": "Point",
                    "coordinates": [-122.4, 37.8, 12]
                }
            }]
        })
    }

    fn plate_feed_body() -> serde_json::Value {
        serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "Name": "test boundary" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 0.0], [10.0, 10.0]]
                }
            }]
        })
    }

    #[tokio::test]
    async fn test_extract_fetches_both_feeds() {
        let server = MockServer::start();
        let quake_mock = server.mock(|when, then| {
            when.method(GET).path("/quakes.geojson");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(quake_feed_body());
        });
        let plate_mock = server.mock(|when, then| {
            when.method(GET).path("/plates.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(plate_feed_body());
        });

        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/quakes.geojson"), server.url("/plates.json")),
        );

        let feeds = pipeline.extract().await.unwrap();

        quake_mock.assert();
        plate_mock.assert();
        assert_eq!(feeds.earthquakes.unwrap().features.len(), 1);
        assert!(feeds.plates.is_some());
    }

    #[tokio::test]
    async fn test_earthquake_feed_failure_leaves_plates_intact() {
        let server = MockServer::start();
        let quake_mock = server.mock(|when, then| {
            when.method(GET).path("/quakes.geojson");
            then.status(500);
        });
        let plate_mock = server.mock(|when, then| {
            when.method(GET).path("/plates.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(plate_feed_body());
        });

        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/quakes.geojson"), server.url("/plates.json")),
        );

        let feeds = pipeline.extract().await.unwrap();

        quake_mock.assert();
        plate_mock.assert();
        assert!(feeds.earthquakes.is_none());
        assert!(feeds.plates.is_some());
    }

    #[tokio::test]
    async fn test_plate_feed_failure_leaves_earthquakes_intact() {
        let server = MockServer::start();
        let quake_mock = server.mock(|when, then| {
            when.method(GET).path("/quakes.geojson");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(quake_feed_body());
        });
        let plate_mock = server.mock(|when, then| {
            when.method(GET).path("/plates.json");
            then.status(404);
        });

        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/quakes.geojson"), server.url("/plates.json")),
        );

        let feeds = pipeline.extract().await.unwrap();

        quake_mock.assert();
        plate_mock.assert();
        assert!(feeds.earthquakes.is_some());
        assert!(feeds.plates.is_none());
    }

    #[tokio::test]
    async fn test_malformed_earthquake_document_degrades_silently() {
        let server = MockServer::start();
        let quake_mock = server.mock(|when, then| {
            when.method(GET).path("/quakes.geojson");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([1, 2, 3]));
        });
        let plate_mock = server.mock(|when, then| {
            when.method(GET).path("/plates.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(plate_feed_body());
        });

        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/quakes.geojson"), server.url("/plates.json")),
        );

        let feeds = pipeline.extract().await.unwrap();

        quake_mock.assert();
        plate_mock.assert();
        assert!(feeds.earthquakes.is_none());
        assert!(feeds.plates.is_some());
    }

    #[tokio::test]
    async fn test_transform_styles_markers_and_plates() {
        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://unused".to_string(), "http://unused".to_string()),
        );

        let feeds = FeedData {
            earthquakes: Some(serde_json::from_value(quake_feed_body()).unwrap()),
            plates: Some(plate_feed_body()),
        };

        let session = pipeline.transform(feeds).await.unwrap();

        assert_eq!(session.center(), (28.75, -20.0));
        assert_eq!(session.zoom(), 3);
        assert_eq!(session.quake_markers().len(), 1);

        let marker = &session.quake_markers()[0];
        assert_eq!(marker.lat, 37.8);
        assert_eq!(marker.lng, -122.4);
        assert_eq!(marker.radius, 27.0);
        assert_eq!(marker.fill_color, "#d4ee00");
        assert!(marker.popup.contains("Magnitude: 4.5"));
        assert!(marker.popup.contains("Depth: 12 km"));
        assert!(marker.popup.contains("Location: Test Location"));

        assert!(session.plate_lines().is_some());
    }

    #[tokio::test]
    async fn test_transform_without_feeds_still_builds_legend() {
        let pipeline = QuakeMapPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://unused".to_string(), "http://unused".to_string()),
        );

        let session = pipeline.transform(FeedData::default()).await.unwrap();

        assert!(session.quake_markers().is_empty());
        assert!(session.plate_lines().is_none());
        assert_eq!(session.legend().len(), 6);
    }

    #[tokio::test]
    async fn test_load_writes_page_through_storage() {
        let storage = MockStorage::new();
        let pipeline = QuakeMapPipeline::new(
            storage.clone(),
            MockConfig::new("http://unused".to_string(), "http://unused".to_string()),
        );

        let feeds = FeedData {
            earthquakes: Some(serde_json::from_value(quake_feed_body()).unwrap()),
            plates: None,
        };
        let session = pipeline.transform(feeds).await.unwrap();

        let output_path = pipeline.load(session).await.unwrap();
        assert_eq!(output_path, "test_output/map.html");

        let page = storage.get_file(OUTPUT_FILE).await.unwrap();
        let page = String::from_utf8(page).unwrap();
        assert!(page.contains("<div id=\"map\">"));
        assert!(page.contains("Magnitude: 4.5"));
        assert!(page.contains("const plateData = null;"));
    }
}
