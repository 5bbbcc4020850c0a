use anyhow::Result;
use relive_core::BookReview;
use serde_json::json;

/// Renders command results as text or JSON.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn reviews(&self, reviews: &[BookReview]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(reviews)?);
            return Ok(());
        }
        if reviews.is_empty() {
            println!("No reviews yet.");
            return Ok(());
        }
        for review in reviews {
            println!("{}", summary_line(review));
        }
        Ok(())
    }

    pub fn review(&self, review: &BookReview) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(review)?);
            return Ok(());
        }
        println!("{}", summary_line(review));
        if let Some(isbn) = &review.isbn {
            println!("  isbn:    {isbn}");
        }
        if !review.tags.is_empty() {
            println!("  tags:    {}", review.tags.join(", "));
        }
        if !review.summary.is_empty() {
            println!("  summary: {}", review.summary);
        }
        if let Some(quote) = &review.favorite_quote {
            println!("  quote:   \"{quote}\"");
        }
        if !review.review.is_empty() {
            println!();
            println!("{}", review.review);
        }
        Ok(())
    }

    pub fn deleted(&self, id: &str) -> Result<()> {
        if self.json {
            println!("{}", json!({ "deleted": id }));
        } else {
            println!("Deleted {id}");
        }
        Ok(())
    }

    pub fn stats(&self, total: usize, average: f64) -> Result<()> {
        if self.json {
            println!(
                "{}",
                json!({ "totalReviews": total, "averageRating": average })
            );
        } else {
            println!("Reviews: {total}");
            println!("Average rating: {average:.1}");
        }
        Ok(())
    }

    pub fn tags(&self, tags: &[String]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(tags)?);
        } else {
            for tag in tags {
                println!("{tag}");
            }
        }
        Ok(())
    }
}

fn summary_line(review: &BookReview) -> String {
    format!(
        "{}  {}  {} by {}  [{}]",
        review.id, review.read_date, review.title, review.author, review.rating
    )
}
