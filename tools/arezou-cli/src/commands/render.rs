//! Render the page to a file or stdout.

use std::convert::Infallible;
use std::io::Write;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use arezou_pdp::{stream_page, PAGE_NAME};
use arezou_sdk::arezou_core::{RequestId, TimingContext};
use arezou_sdk::arezou_observability::{
    LogFormat, LogLevel, LogTarget, MetricsCollector, RequestMetrics, StructuredLogger,
};
use arezou_sdk::arezou_streaming::StreamingSink;

use super::{resolve, RenderArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Summary of a render, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub rendered_at: DateTime<Utc>,
    pub request_id: String,
    /// Query string of the rendered state.
    pub state: String,
    pub actions: Vec<String>,
    pub rejected: Vec<String>,
    pub sections: Vec<String>,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RequestMetrics>,
}

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let page_config = &ctx.config.page;
    page_config.validate().context("Invalid page configuration")?;

    let resolved = resolve(&args.query, &args.actions)?;
    for rejected in &resolved.rejected {
        ctx.output
            .warn(&format!("Ignored query field '{}': {}", rejected.field(), rejected));
    }

    let request_id = RequestId::generate();
    let logger = StructuredLogger::new(request_id.clone())
        .with_page(PAGE_NAME)
        .with_route(page_config.canonical_path.as_str())
        .with_min_level(LogLevel::parse(&page_config.log_level).unwrap_or(LogLevel::Info))
        .with_format(LogFormat::parse(&page_config.log_format).unwrap_or_default())
        .with_target(LogTarget::Tracing);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_page(PAGE_NAME);
    metrics.set_route(page_config.canonical_path.as_str());

    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), TimingContext::new());
    stream_page(&resolved.state, page_config, &mut sink, &logger, &mut metrics)
        .await
        .context("Failed to render page")?;

    let sections = sink.sections_sent().to_vec();
    let bytes = sink.bytes_sent();
    let html: Vec<u8> = sink.into_inner().concat();
    let final_metrics = metrics.finalize(Some(200));

    let output_path = match &args.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path.display().to_string())
        }
        None if !ctx.output.is_json() => {
            std::io::stdout()
                .write_all(&html)
                .context("Failed to write page to stdout")?;
            None
        }
        None => None,
    };

    if ctx.output.is_json() {
        let report = RenderReport {
            rendered_at: Utc::now(),
            request_id: request_id.to_string(),
            state: resolved.state.to_query(),
            actions: resolved.applied.iter().map(|a| a.to_string()).collect(),
            rejected: resolved.rejected.iter().map(|e| e.to_string()).collect(),
            sections,
            bytes,
            output: output_path,
            metrics: args.metrics.then_some(final_metrics),
        };
        ctx.output.json(&report);
        return Ok(());
    }

    if let Some(path) = &output_path {
        ctx.output.success(&format!(
            "Rendered {} sections ({}) to {}",
            sections.len(),
            format_bytes(bytes as u64),
            path
        ));
    }
    if args.metrics || ctx.output.is_verbose() {
        eprintln!("{}", final_metrics.to_summary());
    }

    Ok(())
}
