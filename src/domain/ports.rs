use crate::domain::model::Topic;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 輸出一行文字的地方（終端機或記憶體）
pub trait Console: Send + Sync {
    fn line(&self, text: &str);

    fn blank(&self) {
        self.line("");
    }
}

#[async_trait]
pub trait Lesson: Send + Sync {
    fn name(&self) -> &'static str;
    fn topic(&self) -> Topic;
    fn summary(&self) -> &'static str;
    async fn run(&self, console: &dyn Console) -> Result<()>;
}
