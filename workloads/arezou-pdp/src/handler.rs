//! Spin HTTP component entry point.

use anyhow::Context;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use arezou_sdk::arezou_core::{Method, RenderConfig, RequestContext};
use arezou_sdk::arezou_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use arezou_sdk::arezou_streaming::StreamingSink;
use futures::SinkExt;

use crate::page::{manifest, render_not_found, resolve_state, stream_page, PAGE_NAME};

/// HTTP handler for the product page.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let method = Method::parse(&format!("{:?}", req.method()));
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()))
        .collect();
    let ctx = RequestContext::from_uri(method, &path).with_headers(headers);
    let request_id = ctx.request_id.clone();
    let config = RenderConfig::default();

    let logger = StructuredLogger::new(request_id.clone())
        .with_page(PAGE_NAME)
        .with_route(&ctx.path)
        .with_min_level(LogLevel::parse(&config.log_level).unwrap_or(LogLevel::Info))
        .with_format(LogFormat::parse(&config.log_format).unwrap_or_default());

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_page(PAGE_NAME);
    metrics.set_route(&ctx.path);

    logger
        .info_builder("PDP request started")
        .field("method", ctx.method.as_str())
        .field("user_agent", ctx.header("user-agent").unwrap_or("-"))
        .emit();

    if let Err(e) = manifest().resolve(&ctx.path, ctx.method.as_str()) {
        logger
            .warn_builder("No page at path")
            .field("error", e.to_string())
            .emit();
        if let Err(e) = send_not_found(&ctx.path, &request_id.to_string(), response_out).await {
            logger
                .error_builder("Failed to send 404")
                .field("error", format!("{:#}", e))
                .emit();
        }
        logger.debug(&metrics.finalize(Some(404)).to_summary());
        return;
    }

    let resolved = resolve_state(&ctx.query);
    for rejected in &resolved.rejected {
        logger
            .warn_builder("Rejected query field")
            .field("field", rejected.field())
            .field("error", rejected.to_string())
            .emit();
    }
    if let Some(action) = resolved.applied {
        logger
            .info_builder("Action applied")
            .field("action", action.to_string())
            .emit();
    }

    let response = match build_response(&request_id.to_string(), 200) {
        Ok(response) => response,
        Err(e) => {
            logger
                .error_builder("Failed to start response")
                .field("error", format!("{:#}", e))
                .emit();
            return;
        }
    };
    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    if let Err(e) = stream_page(&resolved.state, &config, &mut sink, &logger, &mut metrics).await {
        logger
            .error_builder("Page stream failed")
            .field("error", e.to_string())
            .emit();
    }

    let final_metrics = metrics.finalize(Some(200));
    logger
        .info_builder("Request complete")
        .field_i64("total_bytes", final_metrics.total_bytes as i64)
        .emit();
    logger.debug(&final_metrics.to_summary());
}

fn build_response(request_id: &str, status: u16) -> anyhow::Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.as_bytes().to_vec()),
        ("cache-control".to_owned(), "no-store".into()),
    ];

    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
        .context("building response headers")?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|_| anyhow::anyhow!("invalid status code {}", status))?;
    Ok(response)
}

async fn send_not_found(
    path: &str,
    request_id: &str,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let response = build_response(request_id, 404)?;
    let mut body = response.take_body();
    response_out.set(response);
    body.send(render_not_found(path).into_bytes())
        .await
        .map_err(|e| anyhow::anyhow!("writing 404 body: {}", e))?;
    Ok(())
}
