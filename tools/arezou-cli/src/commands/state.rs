//! Show the state a query and actions lead to.

use anyhow::Result;
use serde::Serialize;

use arezou_sdk::arezou_state::{Choice, PageState};

use super::{resolve, StateArgs};
use crate::context::Context;
use crate::output::flag;

#[derive(Serialize)]
struct StateReport<'a> {
    state: &'a PageState,
    query: String,
    href: String,
    actions: Vec<String>,
    rejected: Vec<String>,
}

/// Run the state command.
pub async fn run(args: StateArgs, ctx: &Context) -> Result<()> {
    let resolved = resolve(&args.query, &args.actions)?;
    let state = &resolved.state;

    if ctx.output.is_json() {
        ctx.output.json(&StateReport {
            state,
            query: state.to_query(),
            href: state.href(),
            actions: resolved.applied.iter().map(|a| a.to_string()).collect(),
            rejected: resolved.rejected.iter().map(|e| e.to_string()).collect(),
        });
        return Ok(());
    }

    for rejected in &resolved.rejected {
        ctx.output
            .warn(&format!("Ignored query field '{}': {}", rejected.field(), rejected));
    }
    for action in &resolved.applied {
        ctx.output.debug(&format!("Applied {}", action));
    }

    ctx.output.header("Product options");
    ctx.output.kv("size", state.options.size.label());
    ctx.output.kv("quantity", &state.options.quantity.to_string());
    ctx.output.kv(
        "open section",
        state
            .options
            .sections
            .expanded()
            .map(|s| s.label())
            .unwrap_or("none"),
    );
    ctx.output.kv("wishlisted", &flag(state.options.wishlisted));
    ctx.output.kv("zoomed", &flag(state.gallery.zoomed));

    ctx.output.header("Reviews");
    ctx.output.kv("view", state.reviews.view_mode.label());
    ctx.output.kv("show all", &flag(state.reviews.show_all));
    ctx.output.kv("filter", state.reviews.filter.label());
    ctx.output.kv("trust filter", state.trust.filter.label());

    ctx.output.header("Insights");
    ctx.output.kv("panel", &flag(state.insights.is_open()));
    ctx.output.kv(
        "expanded card",
        state
            .insights
            .cards
            .expanded()
            .map(|c| c.label())
            .unwrap_or("none"),
    );

    ctx.output.header("URL");
    ctx.output.kv("href", &state.href());

    Ok(())
}
