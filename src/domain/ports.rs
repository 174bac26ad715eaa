use crate::domain::model::{FeedData, MapSession};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn earthquake_feed(&self) -> &str;
    fn plate_feed(&self) -> &str;
    fn output_path(&self) -> &str;
    fn map_center(&self) -> (f64, f64);
    fn initial_zoom(&self) -> u8;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FeedData>;
    async fn transform(&self, feeds: FeedData) -> Result<MapSession>;
    async fn load(&self, session: MapSession) -> Result<String>;
}
