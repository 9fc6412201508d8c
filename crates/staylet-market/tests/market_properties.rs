//! Behavioural checks across the refund, ranking and deadline components.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use staylet_market::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn krw(amount: i64) -> Money {
    Money::new(amount, Currency::KRW)
}

fn listing(id: &str, price: Option<i64>, rating: Option<f64>, reviews: Option<u32>) -> Listing {
    Listing {
        id: ListingId::new(id),
        host_id: HostId::new("host-1"),
        title: format!("Listing {id}"),
        rental_type: RentalType::ShortTerm,
        location: None,
        price_per_night: price,
        currency: Currency::KRW,
        cancellation_policy: CancellationPolicy::Flexible,
        rating,
        review_count: reviews,
        created_at: None,
    }
}

fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

#[test]
fn refund_is_monotone_in_lead_time() {
    let check_in = date(2024, 6, 30);
    for policy in CancellationPolicy::ALL {
        let mut previous = 100;
        for day in 1..=30 {
            let result = compute_refund(policy, check_in, at(2024, 6, day), krw(100000));
            assert!(result.refund_percentage <= previous, "{policy} on day {day}");
            previous = result.refund_percentage;
        }
    }
}

#[test]
fn flexible_refund_two_days_out() {
    let result = compute_refund(
        CancellationPolicy::Flexible,
        date(2024, 6, 10),
        at(2024, 6, 8),
        krw(100000),
    );
    assert_eq!(result.days_until_check_in, 2);
    assert_eq!(result.refund_percentage, 100);
    assert_eq!(result.refund_amount, krw(100000));
    assert_eq!(result.refund_type, RefundType::Full);
}

#[test]
fn moderate_refund_boundary() {
    let exactly_five = compute_refund(
        CancellationPolicy::Moderate,
        date(2024, 6, 10),
        at(2024, 6, 5),
        krw(80000),
    );
    assert_eq!(exactly_five.days_until_check_in, 5);
    assert_eq!(exactly_five.refund_amount, krw(80000));

    let four = compute_refund(
        CancellationPolicy::Moderate,
        date(2024, 6, 10),
        at(2024, 6, 6),
        krw(80000),
    );
    assert_eq!(four.days_until_check_in, 4);
    assert_eq!(four.refund_percentage, 50);
    assert_eq!(four.refund_amount, krw(40000));
    assert_eq!(four.refund_type, RefundType::Partial);
}

#[test]
fn non_refundable_is_always_zero() {
    for (day, price) in [(1, 100000), (9, 1), (20, 999_999), (28, 0)] {
        let result = compute_refund(
            CancellationPolicy::NonRefundable,
            date(2024, 6, 10),
            at(2024, 5, day),
            krw(price),
        );
        assert_eq!(result.refund_amount.amount, 0);
    }
}

#[test]
fn ranking_is_idempotent() {
    let xs = vec![
        listing("a", Some(120000), Some(4.2), Some(10)),
        listing("b", None, Some(4.8), Some(2)),
        listing("c", Some(150000), Some(4.8), Some(2)),
        listing("d", Some(95000), None, None),
        listing("e", Some(95000), Some(3.9), Some(40)),
    ];
    for mode in SortMode::ALL {
        let once = rank_properties(&xs, mode);
        let twice = rank_properties(&once, mode);
        assert_eq!(ids(&once), ids(&twice), "{mode}");
    }
}

#[test]
fn rating_ties_keep_input_order() {
    let xs = vec![
        listing("first", Some(1000), Some(4.5), Some(12)),
        listing("top", Some(1000), Some(4.9), Some(3)),
        listing("second", Some(2000), Some(4.5), Some(12)),
    ];
    assert_eq!(
        ids(&rank_properties(&xs, SortMode::Rating)),
        vec!["top", "first", "second"]
    );
}

#[test]
fn zero_reviews_score_zero_for_any_rating() {
    for rating in [0.0, 1.0, 4.99, 5.0] {
        let l = listing("x", None, Some(rating), Some(0));
        assert_eq!(popularity_score(&l), 0.0);
    }

    let xs = vec![
        listing("unreviewed", None, Some(5.0), Some(0)),
        listing("reviewed", None, Some(3.0), Some(4)),
        listing("also-unreviewed", None, Some(4.0), None),
    ];
    assert_eq!(
        ids(&rank_properties(&xs, SortMode::Popular)),
        vec!["reviewed", "unreviewed", "also-unreviewed"]
    );
}

#[test]
fn deadline_transition() {
    let now = at(2024, 6, 10);
    let mut review = Review {
        id: ReviewId::new("rev-1"),
        listing_id: ListingId::new("ls-1"),
        host_id: HostId::new("host-1"),
        guest_id: GuestId::new("guest-1"),
        rating: 2,
        body: "Heating did not work".to_string(),
        created_at: now - Duration::days(3),
        approved_at: None,
        response_deadline: Some(now - Duration::seconds(1)),
        response: None,
    };
    assert_eq!(classify_review(&review, now), ResponseStatus::Expired);

    review.response = Some(HostResponse {
        id: ResponseId::new("resp-1"),
        host_id: HostId::new("host-1"),
        body: "Sorry, the boiler has been replaced".to_string(),
        created_at: now,
    });
    assert_eq!(classify_review(&review, now), ResponseStatus::Responded);
}

#[test]
fn empty_input_ranks_to_empty() {
    for mode in SortMode::ALL {
        assert!(rank_properties::<Listing>(&[], mode).is_empty());
    }
    assert!(SearchQuery::new().apply(&[]).is_empty());
}

#[test]
fn refund_list_drops_zero_amounts() {
    let booking = |id: &str, policy: CancellationPolicy| Booking {
        id: BookingId::new(id),
        listing_id: ListingId::new("ls-1"),
        guest_id: GuestId::new("guest-1"),
        check_in_date: date(2024, 6, 10),
        check_out_date: date(2024, 6, 11),
        total_price: 70000,
        currency: Currency::KRW,
        cancellation_policy: policy,
        status: BookingStatus::Cancelled,
        cancelled_at: Some(at(2024, 6, 9)),
    };
    let bookings = vec![
        booking("flex", CancellationPolicy::Flexible),
        booking("strict", CancellationPolicy::Strict),
        booking("moderate", CancellationPolicy::Moderate),
        booking("nr", CancellationPolicy::NonRefundable),
    ];

    let records = collect_refunds(&bookings, at(2024, 6, 20));
    let kept: Vec<(&str, i64)> = records
        .iter()
        .map(|r| (r.booking_id.as_str(), r.amount.amount))
        .collect();
    assert_eq!(kept, vec![("flex", 70000), ("moderate", 35000)]);
}
