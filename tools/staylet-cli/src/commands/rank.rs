//! Listing search and ranking over a listings snapshot.

use anyhow::{anyhow, Result};
use staylet_market::listing::{Listing, RentalType};
use staylet_market::search::{Filter, SearchQuery, SortMode};

use super::RankArgs;
use crate::context::Context;
use crate::output::truncate;
use crate::snapshot::load_rows;

const WIDTHS: [usize; 6] = [4, 30, 16, 14, 8, 8];

/// Run the rank command.
pub async fn run(args: RankArgs, ctx: &Context) -> Result<()> {
    let listings: Vec<Listing> = load_rows(&ctx.resolve_path(&args.file))?;

    let sort = match args.sort.as_deref() {
        Some(code) => {
            if SortMode::from_code(code).is_none() {
                ctx.output
                    .warn(&format!("Unknown sort '{}', ranking by popularity", code));
            }
            SortMode::from_code_or_default(code)
        }
        None => ctx.config.search.default_sort,
    };
    let per_page = args.per_page.unwrap_or_else(|| ctx.config.per_page());

    let query = build_query(&args)?
        .with_sort(sort)
        .with_pagination(args.page, per_page);
    ctx.output.debug(&format!(
        "{} filter(s), sort {}, page {} of size {}",
        query.filters.len(),
        sort.as_str(),
        query.page,
        query.per_page
    ));

    let results = query.apply(&listings);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!("Listings ({})", sort.display_name()));

    if results.is_empty() {
        ctx.output.info("No listings match.");
        return Ok(());
    }

    ctx.output.table_row(
        &["#", "TITLE", "TYPE", "PRICE", "RATING", "REVIEWS"],
        &WIDTHS,
    );
    let offset = results.pagination.offset();
    for (i, listing) in results.items.iter().enumerate() {
        let rank = (offset + i + 1).to_string();
        let title = truncate(&listing.title, WIDTHS[1]);
        let price = listing
            .nightly_price()
            .map(|p| p.display())
            .unwrap_or_else(|| "-".to_string());
        let rating = listing
            .rating
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());
        let reviews = listing.review_count.unwrap_or(0).to_string();
        ctx.output.table_row(
            &[
                &rank,
                &title,
                listing.rental_type.display_name(),
                &price,
                &rating,
                &reviews,
            ],
            &WIDTHS,
        );
    }

    let p = &results.pagination;
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages.max(1)
    ));

    Ok(())
}

fn build_query(args: &RankArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::new();

    if let Some(code) = args.rental_type.as_deref() {
        let rental_type =
            RentalType::from_code(code).ok_or_else(|| anyhow!("Unknown rental type: {}", code))?;
        query = query.with_filter(Filter::rental_type(rental_type));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::price_range(args.min_price, args.max_price));
    }
    if let Some(min) = args.min_rating {
        query = query.with_filter(Filter::min_rating(min));
    }
    if let Some(text) = args.query.as_deref() {
        query = query.with_filter(Filter::text(text));
    }
    if let Some(host) = args.host.as_deref() {
        query = query.with_filter(Filter::host(host));
    }

    Ok(query)
}
