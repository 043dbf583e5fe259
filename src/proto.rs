pub use crate::models::{JokeRequest, JokeResponse};

// Server and client stubs generated by build.rs for the `jokes` package
include!(concat!(env!("OUT_DIR"), "/jokes.ChuckNorrisService.rs"));

pub use chuck_norris_service_client::ChuckNorrisServiceClient;
pub use chuck_norris_service_server::{ChuckNorrisService, ChuckNorrisServiceServer};
