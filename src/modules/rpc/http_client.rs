use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::config::RpcConfig;
use crate::features::billing::models::{CheckoutSession, SubscriptionPlan};
use crate::features::files::models::File;
use crate::modules::rpc::{RemoteProcedures, RpcError, SubscriptionPlanSource};

const PROCEDURE_LIST_FILES: &str = "getUserFiles";
const PROCEDURE_DELETE_FILE: &str = "deleteFile";
const PROCEDURE_CREATE_CHECKOUT: &str = "createStripeSession";
const PROCEDURE_SUBSCRIPTION_PLAN: &str = "getSubscriptionPlan";

/// Successful procedure response: `{"result":{"data":...}}`
#[derive(Debug, Deserialize)]
struct SuccessEnvelope<T> {
    result: ResultBody<T>,
}

#[derive(Debug, Deserialize)]
struct ResultBody<T> {
    data: T,
}

/// Failed procedure response: `{"error":{"message":...,"data":{"code":...,"httpStatus":...}}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorShape,
}

#[derive(Debug, Deserialize)]
struct ErrorShape {
    message: String,
    #[serde(default)]
    data: Option<ErrorData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorData {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    http_status: Option<u16>,
}

#[derive(Debug, Serialize)]
struct DeleteFileInput<'a> {
    id: &'a str,
}

/// HTTP client for the platform's procedure endpoint (tRPC wire format)
pub struct HttpRpcClient {
    config: RpcConfig,
    http_client: reqwest::Client,
}

impl HttpRpcClient {
    pub fn new(config: RpcConfig) -> Result<Self, RpcError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn procedure_url(&self, procedure: &str) -> String {
        format!("{}/{}", self.config.base_url, procedure)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Call a query procedure (GET, no input)
    async fn query<T: DeserializeOwned>(&self, procedure: &str) -> Result<T, RpcError> {
        let url = self.procedure_url(procedure);
        tracing::debug!("Calling query procedure: {}", url);

        let response = self
            .authorize(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to call {}: {}", procedure, e);
                RpcError::from(e)
            })?;

        Self::read_response(procedure, response).await
    }

    /// Call a mutation procedure (POST, optional JSON input)
    async fn mutation<I: Serialize, T: DeserializeOwned>(
        &self,
        procedure: &str,
        input: Option<&I>,
    ) -> Result<T, RpcError> {
        let url = self.procedure_url(procedure);
        tracing::debug!("Calling mutation procedure: {}", url);

        let mut request = self.authorize(self.http_client.post(&url));
        if let Some(input) = input {
            request = request.json(input);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to call {}: {}", procedure, e);
            RpcError::from(e)
        })?;

        Self::read_response(procedure, response).await
    }

    async fn read_response<T: DeserializeOwned>(
        procedure: &str,
        response: reqwest::Response,
    ) -> Result<T, RpcError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_body(status, &body).inspect_err(|e| {
            tracing::warn!("Procedure {} failed: {}", procedure, e);
        })
    }
}

/// Decode a procedure response body, turning error envelopes and non-2xx
/// statuses into `RpcError::Status`.
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RpcError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                let data = envelope.error.data.unwrap_or(ErrorData {
                    code: None,
                    http_status: None,
                });
                RpcError::Status {
                    status: data.http_status.unwrap_or(status),
                    code: data.code,
                    message: envelope.error.message,
                }
            }
            Err(_) => RpcError::Status {
                status,
                code: None,
                message: body.chars().take(200).collect(),
            },
        });
    }

    serde_json::from_str::<SuccessEnvelope<T>>(body)
        .map(|envelope| envelope.result.data)
        .map_err(|e| RpcError::Decode(e.to_string()))
}

#[async_trait]
impl RemoteProcedures for HttpRpcClient {
    async fn create_checkout_session(&self) -> Result<CheckoutSession, RpcError> {
        self.mutation::<(), _>(PROCEDURE_CREATE_CHECKOUT, None).await
    }

    async fn list_files(&self) -> Result<Vec<File>, RpcError> {
        self.query(PROCEDURE_LIST_FILES).await
    }

    async fn delete_file(&self, id: &str) -> Result<(), RpcError> {
        // The platform echoes the deleted record; nothing in it is needed here
        let _: serde::de::IgnoredAny = self
            .mutation(PROCEDURE_DELETE_FILE, Some(&DeleteFileInput { id }))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SubscriptionPlanSource for HttpRpcClient {
    async fn get_subscription_plan(&self) -> Result<SubscriptionPlan, RpcError> {
        self.query(PROCEDURE_SUBSCRIPTION_PLAN).await
    }
}
