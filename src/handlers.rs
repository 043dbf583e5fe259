use std::sync::Arc;

use tokio::sync::Semaphore;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::error::{JokeError, JokeResult};
use crate::models::{JokeRequest, JokeResponse, UpstreamJoke};
use crate::proto::ChuckNorrisService;
use crate::upstream::{JokeApi, random_joke_url};

/// Serves `GetJoke` by asking the upstream joke API.
/// Holds only injected dependencies; calls never share mutable state.
#[derive(Clone)]
pub struct JokeLookupHandler {
    api: Arc<dyn JokeApi>,
    permits: Arc<Semaphore>,
}

impl JokeLookupHandler {
    pub fn new(api: Arc<dyn JokeApi>, max_concurrent: usize) -> Self {
        Self {
            api,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Fetches one joke, optionally restricted to `category`
    pub async fn lookup(&self, category: Option<&str>) -> JokeResult<String> {
        let url = random_joke_url(self.api.base_url(), category);
        let reply = self.api.get(&url).await?;

        match reply.status {
            200 => {
                let joke: UpstreamJoke = serde_json::from_str(&reply.body)
                    .map_err(|e| JokeError::Internal(e.to_string()))?;
                Ok(joke.value)
            }
            404 => Err(JokeError::NotFound),
            status => Err(JokeError::Upstream(status)),
        }
    }

    /// Turns a request into a response; every failure becomes `success = false`
    pub async fn handle(&self, request: JokeRequest) -> JokeResponse {
        let category = request.category();
        match category {
            Some(category) => info!("Request for category: {}", category),
            None => info!("No category selected, fetching random joke"),
        }

        // Bounded like a worker pool; the semaphore is never closed
        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(e) => return JokeError::Internal(e.to_string()).into(),
        };

        match self.lookup(category).await {
            Ok(joke) => {
                debug!("Joke retrieved ({} chars)", joke.len());
                JokeResponse::joke(joke)
            }
            Err(e) => e.into(),
        }
    }
}

#[tonic::async_trait]
impl ChuckNorrisService for JokeLookupHandler {
    async fn get_joke(
        &self,
        request: Request<JokeRequest>,
    ) -> Result<Response<JokeResponse>, Status> {
        let response = self.handle(request.into_inner()).await;
        Ok(Response::new(response))
    }
}
