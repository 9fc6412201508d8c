//! Host response to a review in a reviews snapshot.

use anyhow::Result;
use staylet_market::review::{ResponseStatus, ReviewDesk};
use staylet_market::{HostId, ReviewId};

use super::RespondArgs;
use crate::context::Context;
use crate::output::status_badge;
use crate::snapshot::{LogNotifier, SnapshotReviewStore};

/// Run the respond command.
pub async fn run(args: RespondArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let desk = ReviewDesk::new(SnapshotReviewStore::open(&path)?, LogNotifier);

    let review_id = ReviewId::new(args.review);
    let host_id = HostId::new(args.host);
    let now = ctx.now(args.now);

    let response = desk.respond(&review_id, &host_id, &args.body, now).await?;

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    ctx.output
        .success(&format!("Responded to review {}", review_id));
    ctx.output.kv("response", response.id.as_str());
    ctx.output.kv("written to", &path.display().to_string());

    let remaining = desk.pending_for_host(&host_id, now).await?;
    if !remaining.is_empty() {
        ctx.output.info(&format!(
            "{} more review(s) {}",
            remaining.len(),
            status_badge(ResponseStatus::Pending.as_str())
        ));
    }

    Ok(())
}
