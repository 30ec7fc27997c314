use crate::Reqwest;
use crate::Result;

/// The HTTP side of the client: GET an url and hand back the body as text.
/// Anything that is not a successful response must be an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl Fetcher for Reqwest {
    async fn fetch(&self, url: &str) -> Result<String> {
        let body = self
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for std::sync::Arc<F> {
    async fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url).await
    }
}
