//! Poetry backend access over tRPC's HTTP query protocol.
//!
//! A query is a `GET {base_url}/{procedure}?input=<json>`. Successful answers
//! arrive as `{"result":{"data":...}}`, failures as `{"error":{...}}`. When the
//! backend runs the superjson transformer both the input and every payload are
//! wrapped in an extra `{"json": ...}` object.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::poem::PoemsByTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{PoemReader, PoemsByTagQuery};

const FIND_BY_TAG_ID: &str = "poem.findByTagId";

/// Backend client shared by every worker.
#[derive(Clone)]
pub struct TrpcRepository {
    base_url: String,
    client: reqwest::Client,
    superjson: bool,
}

impl TrpcRepository {
    /// `base_url` is the tRPC endpoint, e.g. `http://localhost:3000/api/trpc`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            superjson: false,
        }
    }

    pub fn with_superjson(mut self, enabled: bool) -> Self {
        self.superjson = enabled;
        self
    }

    fn procedure_url(&self, procedure: &str) -> String {
        format!("{}/{}", self.base_url, procedure)
    }

    fn encode_input<I>(&self, input: &I) -> RepositoryResult<String>
    where
        I: Serialize + ?Sized,
    {
        let value = serde_json::to_value(input)?;
        let value = if self.superjson {
            serde_json::json!({ "json": value })
        } else {
            value
        };
        Ok(value.to_string())
    }

    fn build_request<I>(&self, procedure: &str, input: &I) -> RepositoryResult<reqwest::Request>
    where
        I: Serialize + ?Sized,
    {
        let input = self.encode_input(input)?;
        log::debug!("Calling {procedure} with input {input}");

        let request = self
            .client
            .get(self.procedure_url(procedure))
            .query(&[("input", input.as_str())])
            .build()?;
        Ok(request)
    }

    async fn query<I, T>(&self, procedure: &str, input: &I) -> RepositoryResult<T>
    where
        I: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(procedure, input)?;
        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_response(status, &body)
    }
}

#[async_trait]
impl PoemReader for TrpcRepository {
    async fn find_poems_by_tag(&self, query: PoemsByTagQuery) -> RepositoryResult<PoemsByTag> {
        self.query(FIND_BY_TAG_ID, &query).await
    }
}

/// Payload optionally wrapped by superjson.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Superjson { json: T },
    Plain(T),
}

impl<T> Payload<T> {
    fn into_inner(self) -> T {
        match self {
            Payload::Superjson { json } => json,
            Payload::Plain(value) => value,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    result: Option<ResultBody<T>>,
    error: Option<Payload<ErrorBody>>,
}

#[derive(Deserialize)]
struct ResultBody<T> {
    data: Payload<T>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    data: Option<ErrorData>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ErrorData {
    code: Option<String>,
    http_status: Option<u16>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a raw backend answer onto the procedure output or a repository error.
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> RepositoryResult<T> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) if is_success(status) => return Err(err.into()),
        Err(_) => {
            return Err(RepositoryError::Remote {
                status,
                code: None,
                message: body.to_string(),
            });
        }
    };

    if let Some(error) = envelope.error {
        let error = error.into_inner();
        let data = error.data.unwrap_or_default();
        return Err(RepositoryError::Remote {
            status: data.http_status.unwrap_or(status),
            code: data.code,
            message: error.message,
        });
    }

    match envelope.result {
        Some(result) if is_success(status) => Ok(result.data.into_inner()),
        Some(_) => Err(RepositoryError::Remote {
            status,
            code: None,
            message: "unexpected result with failure status".to_string(),
        }),
        None => Err(RepositoryError::Serialization(
            "response carries neither result nor error".to_string(),
        )),
    }
}
