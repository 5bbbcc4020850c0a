//! Pure search and aggregate functions over a review snapshot.
//!
//! # Invariants
//! - Filters combine with AND; an absent or empty filter field matches everything.
//! - Results keep snapshot order.
//! - `read_date` bounds compare strings lexicographically and are inclusive.

use crate::model::review::{BookReview, ReviewFilters};
use std::collections::BTreeSet;

/// Returns the reviews matching every populated filter field.
pub fn filter_reviews(reviews: &[BookReview], filters: &ReviewFilters) -> Vec<BookReview> {
    let search = filters
        .search
        .as_deref()
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);
    // A zero threshold is treated as unset.
    let min_rating = filters.rating.filter(|rating| *rating != 0.0);
    let tags = filters.tags.as_deref().filter(|tags| !tags.is_empty());
    let date_from = filters.date_from.as_deref().filter(|date| !date.is_empty());
    let date_to = filters.date_to.as_deref().filter(|date| !date.is_empty());

    reviews
        .iter()
        .filter(|review| {
            search
                .as_deref()
                .map_or(true, |term| matches_search_term(review, term))
        })
        .filter(|review| min_rating.map_or(true, |min| review.rating >= min))
        .filter(|review| {
            tags.map_or(true, |wanted| {
                wanted.iter().any(|tag| review.tags.contains(tag))
            })
        })
        .filter(|review| date_from.map_or(true, |from| review.read_date.as_str() >= from))
        .filter(|review| date_to.map_or(true, |to| review.read_date.as_str() <= to))
        .cloned()
        .collect()
}

/// Mean rating rounded to one decimal place, or `0.0` for an empty snapshot.
pub fn average_rating(reviews: &[BookReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|review| review.rating).sum();
    let mean = sum / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Distinct tags across the snapshot, sorted.
pub fn collect_tags(reviews: &[BookReview]) -> Vec<String> {
    reviews
        .iter()
        .flat_map(|review| review.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_search_term(review: &BookReview, lowered_term: &str) -> bool {
    review.title.to_lowercase().contains(lowered_term)
        || review.author.to_lowercase().contains(lowered_term)
        || review.review.to_lowercase().contains(lowered_term)
}

#[cfg(test)]
mod tests {
    use super::{average_rating, collect_tags, filter_reviews};
    use crate::model::review::{BookReview, CreateReviewRequest, ReviewFilters};
    use chrono::{TimeZone, Utc};

    fn review(title: &str, author: &str, rating: f64, tags: &[&str], read_date: &str) -> BookReview {
        BookReview::from_request(
            title.to_lowercase(),
            CreateReviewRequest {
                title: title.to_string(),
                author: author.to_string(),
                rating,
                review: String::new(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                read_date: read_date.to_string(),
                ..CreateReviewRequest::default()
            },
            Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
        )
    }

    fn titles(reviews: &[BookReview]) -> Vec<&str> {
        reviews.iter().map(|review| review.title.as_str()).collect()
    }

    fn shelf() -> Vec<BookReview> {
        vec![
            review("Dune", "Frank Herbert", 5.0, &["sci-fi"], "2024-01-01"),
            review("Emma", "Jane Austen", 3.0, &["classic"], "2024-06-01"),
        ]
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let reviews = shelf();
        let found = filter_reviews(&reviews, &ReviewFilters::default());
        assert_eq!(titles(&found), vec!["Dune", "Emma"]);
    }

    #[test]
    fn rating_is_an_inclusive_minimum() {
        let reviews = shelf();
        let filters = ReviewFilters {
            rating: Some(3.0),
            ..ReviewFilters::default()
        };
        assert_eq!(filter_reviews(&reviews, &filters).len(), 2);

        let filters = ReviewFilters {
            rating: Some(0.0),
            ..ReviewFilters::default()
        };
        assert_eq!(filter_reviews(&reviews, &filters).len(), 2);
    }

    #[test]
    fn search_matches_author_and_review_body_case_insensitively() {
        let mut reviews = shelf();
        reviews[1].review = "A meddling HEROINE".to_string();

        let by_author = ReviewFilters {
            search: Some("HERBERT".to_string()),
            ..ReviewFilters::default()
        };
        assert_eq!(titles(&filter_reviews(&reviews, &by_author)), vec!["Dune"]);

        let by_body = ReviewFilters {
            search: Some("heroine".to_string()),
            ..ReviewFilters::default()
        };
        assert_eq!(titles(&filter_reviews(&reviews, &by_body)), vec!["Emma"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let reviews = shelf();
        let filters = ReviewFilters {
            date_from: Some("2024-01-01".to_string()),
            date_to: Some("2024-01-01".to_string()),
            ..ReviewFilters::default()
        };
        assert_eq!(titles(&filter_reviews(&reviews, &filters)), vec!["Dune"]);
    }

    #[test]
    fn combined_filters_are_conjunctive() {
        let reviews = shelf();
        let filters = ReviewFilters {
            search: Some("e".to_string()),
            tags: Some(vec!["classic".to_string(), "poetry".to_string()]),
            ..ReviewFilters::default()
        };
        assert_eq!(titles(&filter_reviews(&reviews, &filters)), vec!["Emma"]);
    }

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[]), 0.0);

        let ratings = |values: &[f64]| -> Vec<BookReview> {
            values
                .iter()
                .map(|rating| review("T", "A", *rating, &[], "2024-01-01"))
                .collect()
        };
        assert_eq!(average_rating(&ratings(&[3.0, 4.0, 5.0])), 4.0);
        assert_eq!(average_rating(&ratings(&[3.0, 3.0, 4.0])), 3.3);
        assert_eq!(average_rating(&ratings(&[4.0, 5.0])), 4.5);
    }

    #[test]
    fn collect_tags_deduplicates_and_sorts() {
        let reviews = vec![
            review("A", "A", 1.0, &["zen", "art"], "2024-01-01"),
            review("B", "B", 1.0, &["art", "art"], "2024-01-02"),
        ];
        assert_eq!(collect_tags(&reviews), vec!["art", "zen"]);
    }
}
