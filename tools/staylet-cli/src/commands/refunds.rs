//! Refund list for a bookings snapshot.

use anyhow::Result;
use serde::Serialize;
use staylet_market::booking::{collect_refunds, Booking, RefundRecord, RefundSummary};

use super::RefundsArgs;
use crate::context::Context;
use crate::output::status_badge;
use crate::snapshot::load_rows;

#[derive(Serialize)]
struct RefundReport {
    refunds: Vec<RefundRecord>,
    summary: RefundSummary,
}

/// Run the refunds command.
pub async fn run(args: RefundsArgs, ctx: &Context) -> Result<()> {
    let bookings: Vec<Booking> = load_rows(&ctx.resolve_path(&args.file))?;
    let now = ctx.now(args.now);

    let refunds = collect_refunds(&bookings, now);
    let summary = RefundSummary::from_records(&refunds, ctx.config.market.currency)?;

    let cancelled = bookings.iter().filter(|b| b.is_cancelled()).count();
    ctx.output.debug(&format!(
        "{} booking(s), {} cancelled, {} with a refund",
        bookings.len(),
        cancelled,
        refunds.len()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&RefundReport { refunds, summary });
        return Ok(());
    }

    ctx.output.header("Refunds");

    if refunds.is_empty() {
        ctx.output.info("No refunds owed.");
        return Ok(());
    }

    ctx.output.table_row(
        &["BOOKING", "GUEST", "CANCELLED", "PERCENT", "AMOUNT", "TYPE"],
        &[14, 14, 20, 8, 14, 8],
    );
    for r in &refunds {
        let cancelled_at = r.cancelled_at.format("%Y-%m-%d %H:%M").to_string();
        let percent = format!("{}%", r.refund_percentage);
        let amount = r.amount.display();
        let kind = status_badge(r.refund_type.as_str());
        ctx.output.table_row(
            &[
                r.booking_id.as_str(),
                r.guest_id.as_str(),
                &cancelled_at,
                &percent,
                &amount,
                &kind,
            ],
            &[14, 14, 20, 8, 14, 8],
        );
    }

    ctx.output.info("");
    ctx.output.kv("refunds", &summary.count.to_string());
    ctx.output.kv("full", &summary.full_count.to_string());
    ctx.output.kv("partial", &summary.partial_count.to_string());
    ctx.output.kv("total", &summary.total.display());

    Ok(())
}
