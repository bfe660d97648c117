//! List every page action.

use anyhow::Result;
use serde::Serialize;

use arezou_sdk::arezou_state::PageAction;

use super::ActionsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ActionEntry {
    action: String,
    description: String,
}

/// Actions whose text starts with `prefix`, in catalog order.
fn matching(prefix: Option<&str>) -> Vec<PageAction> {
    PageAction::catalog()
        .into_iter()
        .filter(|a| prefix.map_or(true, |p| a.to_string().starts_with(p)))
        .collect()
}

/// Run the actions command.
pub async fn run(args: ActionsArgs, ctx: &Context) -> Result<()> {
    let actions = matching(args.prefix.as_deref());

    if ctx.output.is_json() {
        let entries: Vec<ActionEntry> = actions
            .iter()
            .map(|a| ActionEntry {
                action: a.to_string(),
                description: a.description(),
            })
            .collect();
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header(&format!("{} actions", actions.len()));
    let width = actions
        .iter()
        .map(|a| a.to_string().len())
        .max()
        .unwrap_or(0);
    for action in &actions {
        let text = action.to_string();
        ctx.output
            .table_row(&[text.as_str(), action.description().as_str()], &[width, 0]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_filter() {
        let sizes = matching(Some("size:"));
        assert_eq!(sizes.len(), 2);
        assert!(sizes.iter().all(|a| matches!(a, PageAction::SelectSize(_))));

        assert_eq!(matching(None).len(), PageAction::catalog().len());
        assert!(matching(Some("nope")).is_empty());
    }
}
