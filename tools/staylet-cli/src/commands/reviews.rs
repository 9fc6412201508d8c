//! Review response status over a reviews snapshot.

use anyhow::{anyhow, Result};
use serde::Serialize;
use staylet_market::review::{
    classify_all, time_remaining, ClassifiedReview, RatingSummary, ResponseCounts, ResponseStatus,
    Review,
};

use super::ReviewsArgs;
use crate::context::Context;
use crate::output::{format_remaining, status_badge, truncate};
use crate::snapshot::load_rows;

const WIDTHS: [usize; 6] = [12, 12, 6, 10, 10, 36];

#[derive(Serialize)]
struct ReviewReport {
    reviews: Vec<ClassifiedReview>,
    counts: ResponseCounts,
    rating: RatingSummary,
}

/// Run the reviews command.
pub async fn run(args: ReviewsArgs, ctx: &Context) -> Result<()> {
    let mut reviews: Vec<Review> = load_rows(&ctx.resolve_path(&args.file))?;
    let now = ctx.now(args.now);

    if let Some(host) = args.host.as_deref() {
        reviews.retain(|r| r.host_id.as_str() == host);
    }

    let wanted = match args.status.as_deref() {
        Some(code) => Some(
            ResponseStatus::from_code(code)
                .ok_or_else(|| anyhow!("Unknown review status: {}", code))?,
        ),
        None => None,
    };

    let rating = RatingSummary::from_reviews(&reviews);
    let mut classified = classify_all(reviews, now);
    let counts = ResponseCounts::tally(&classified);

    match wanted {
        Some(status) => classified.retain(|r| r.status == status),
        None if !ctx.config.reviews.show_expired => {
            classified.retain(|r| r.status != ResponseStatus::Expired)
        }
        None => {}
    }
    ctx.output.debug(&format!(
        "{} pending, {} responded, {} expired at {}",
        counts.pending,
        counts.responded,
        counts.expired,
        now.to_rfc3339()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&ReviewReport {
            reviews: classified,
            counts,
            rating,
        });
        return Ok(());
    }

    ctx.output.header("Reviews");

    if classified.is_empty() {
        ctx.output.info("No reviews to show.");
    } else {
        ctx.output.table_row(
            &["REVIEW", "GUEST", "STARS", "STATUS", "LEFT", "BODY"],
            &WIDTHS,
        );
        for entry in &classified {
            let review = &entry.review;
            let stars = review.render_stars();
            let status = status_badge(entry.status.as_str());
            let left = time_remaining(review, now)
                .map(format_remaining)
                .unwrap_or_else(|| "-".to_string());
            let body = truncate(&review.body, WIDTHS[5]);
            ctx.output.table_row(
                &[
                    review.id.as_str(),
                    review.guest_id.as_str(),
                    &stars,
                    &status,
                    &left,
                    &body,
                ],
                &WIDTHS,
            );
        }
    }

    ctx.output.info("");
    ctx.output.kv("pending", &counts.pending.to_string());
    ctx.output.kv("responded", &counts.responded.to_string());
    ctx.output.kv("expired", &counts.expired.to_string());
    if rating.total_reviews > 0 {
        ctx.output.kv(
            "average rating",
            &format!("{:.1} ({} reviews)", rating.average_rating, rating.total_reviews),
        );
    }

    if counts.pending > 0 {
        ctx.output.warn(&format!(
            "{} review(s) still waiting for a response",
            counts.pending
        ));
    }

    Ok(())
}
