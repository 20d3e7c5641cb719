use super::ProfileGateway;

use lattice_core::error::{LtError, LtResult};
use lattice_core::{Profile, ProfileWithEmail, ScoredProfile, Token};

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Gateway backed by the profile REST service at `{api_host}/profile`.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    api_url: String,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(serde::Serialize)]
struct VisibleBody {
    visible: bool,
}

impl HttpGateway {
    pub fn new(api_host: &str) -> LtResult<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            api_url: format!("{}/profile", api_host.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn request(&self, method: Method, path: &str, token: &Token) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "profile service request");

        self.client
            .request(method, url)
            .header(AUTHORIZATION, token.bearer())
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> LtResult<T> {
        Ok(accepted(request.send().await?).await?.json().await?)
    }

    async fn execute(&self, request: RequestBuilder) -> LtResult<()> {
        accepted(request.send().await?).await?;
        Ok(())
    }
}

async fn accepted(response: Response) -> LtResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await?;
    Err(rejection(status, &body))
}

/// The service explains failures in a JSON body `{"message": ...}`.
fn rejection(status: StatusCode, body: &[u8]) -> LtError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(error_body) => error_body.message,
        Err(_) => format!("profile service responded with {status}"),
    };
    tracing::warn!(%status, %message, "profile service rejected request");

    LtError::rejected(message)
}

impl ProfileGateway for HttpGateway {
    async fn get_profile(&self, token: &Token) -> LtResult<ProfileWithEmail> {
        self.fetch(self.request(Method::GET, "/", token)).await
    }

    async fn get_profiles(&self, token: &Token) -> LtResult<Vec<ScoredProfile>> {
        self.fetch(self.request(Method::GET, "/list", token)).await
    }

    async fn start_profile(&self, token: &Token) -> LtResult<()> {
        self.execute(self.request(Method::POST, "/start", token))
            .await
    }

    async fn update_profile(&self, token: &Token, profile: Profile) -> LtResult<ProfileWithEmail> {
        self.fetch(self.request(Method::PUT, "/", token).json(&profile))
            .await
    }

    async fn set_visible(&self, token: &Token, visible: bool) -> LtResult<ProfileWithEmail> {
        self.fetch(
            self.request(Method::PUT, "/visible", token)
                .json(&VisibleBody { visible }),
        )
        .await
    }

    async fn complete_tour(&self, token: &Token, tour_id: &str) -> LtResult<()> {
        self.execute(self.request(Method::POST, &format!("/tour/{tour_id}"), token))
            .await
    }
}
