//! Single refund calculation.

use anyhow::{anyhow, Result};
use staylet_market::booking::{compute_refund, CancellationPolicy};
use staylet_market::{Currency, Money};

use super::RefundArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the refund command.
pub async fn run(args: RefundArgs, ctx: &Context) -> Result<()> {
    if CancellationPolicy::from_code(&args.policy).is_none() {
        ctx.output.warn(&format!(
            "Unknown policy '{}', applying the flexible table",
            args.policy
        ));
    }
    let policy = CancellationPolicy::from_code_or_default(&args.policy);

    let currency = match args.currency.as_deref() {
        Some(code) => {
            Currency::from_code(code).ok_or_else(|| anyhow!("Unknown currency: {}", code))?
        }
        None => ctx.config.market.currency,
    };

    let cancelled_at = ctx.now(args.cancelled_at);
    let result = compute_refund(
        policy,
        args.check_in,
        cancelled_at,
        Money::new(args.total, currency),
    );

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output.header("Refund");
    ctx.output.kv("policy", policy.display_name());
    ctx.output.kv("terms", policy.summary());
    ctx.output.kv("check-in", &args.check_in.to_string());
    ctx.output.kv("cancelled at", &cancelled_at.to_rfc3339());
    ctx.output.kv("days until check-in", &result.days_until_check_in.to_string());
    ctx.output.kv("refund", &format!("{}%", result.refund_percentage));
    ctx.output.kv("amount", &result.refund_amount.display());
    ctx.output.kv("type", &status_badge(result.refund_type.as_str()));

    if !result.is_refundable() {
        ctx.output.info("Nothing to refund; the refund list skips this cancellation.");
    }

    Ok(())
}
