use crate::core::time::{Clock, SystemClock};
use crate::core::types::{StatusPolicy, TimestampBody};
use anyhow::Context;
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::HeaderValue;
use http::header::CONTENT_TYPE;
use lambda_runtime::LambdaEvent;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Answers every request with the current time, whatever the request holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampHandler<C = SystemClock> {
    clock: C,
    status: StatusPolicy,
}

impl<C: Clock> TimestampHandler<C> {
    pub fn new(clock: C, status: StatusPolicy) -> Self {
        Self { clock, status }
    }

    pub fn status(&self) -> StatusPolicy {
        self.status
    }

    /// Build the proxy response for one invocation.
    ///
    /// The clock is read exactly once.
    pub fn respond(&self) -> anyhow::Result<ApiGatewayProxyResponse> {
        let body = TimestampBody {
            timestamp: self.clock.now_ms(),
        };
        let json = body.encode().context("Failed to serialize timestamp body")?;

        let mut resp = ApiGatewayProxyResponse::default();
        resp.status_code = self.status.code();
        resp.headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        resp.body = Some(Body::Text(json));
        resp.is_base64_encoded = false;

        tracing::debug!(
            timestamp = body.timestamp,
            status = resp.status_code,
            "built timestamp response"
        );
        Ok(resp)
    }

    /// Runtime entry point. The request payload is dropped unread.
    pub async fn handle(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> anyhow::Result<ApiGatewayProxyResponse> {
        let LambdaEvent {
            payload: _,
            context,
        } = event;
        tracing::info!(request_id = %context.request_id, "timestamp invocation");
        self.respond()
    }
}
