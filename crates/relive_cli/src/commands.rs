use crate::cli::{AddArgs, Commands, EditArgs, SearchArgs};
use crate::output::Output;
use anyhow::{bail, Result};
use relive_core::{
    CreateReviewRequest, ReviewFilters, ReviewRepository, ReviewStore, UpdateReviewRequest,
};

pub fn run<R: ReviewRepository>(
    command: Commands,
    store: &mut ReviewStore<R>,
    output: &Output,
) -> Result<()> {
    match command {
        Commands::List => output.reviews(store.reviews()),
        Commands::Show { id } => match store.get_review(&id) {
            Some(review) => output.review(review),
            None => bail!("Review not found"),
        },
        Commands::Add(args) => {
            let created = store.add_review(create_request(args))?;
            output.review(&created)
        }
        Commands::Edit(args) => {
            let updated = store.update_review(&update_request(args))?;
            output.review(&updated)
        }
        Commands::Delete { id } => {
            store.delete_review(&id);
            output.deleted(&id)
        }
        Commands::Search(args) => output.reviews(&store.search_reviews(&filters(args))),
        Commands::Stats => output.stats(store.total_reviews(), store.average_rating()),
        Commands::Tags => output.tags(&store.all_tags()),
    }
}

fn create_request(args: AddArgs) -> CreateReviewRequest {
    CreateReviewRequest {
        title: args.title,
        author: args.author,
        isbn: args.isbn,
        rating: args.rating,
        review: args.review,
        summary: args.summary,
        favorite_quote: args.quote,
        tags: args.tag,
        read_date: args
            .read_date
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
    }
}

fn update_request(args: EditArgs) -> UpdateReviewRequest {
    UpdateReviewRequest {
        id: args.id,
        title: args.title,
        author: args.author,
        isbn: optional_field(args.isbn, args.clear_isbn),
        rating: args.rating,
        review: args.review,
        summary: args.summary,
        favorite_quote: optional_field(args.quote, args.clear_quote),
        tags: (!args.tag.is_empty()).then_some(args.tag),
        read_date: args.read_date,
    }
}

fn optional_field(value: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

fn filters(args: SearchArgs) -> ReviewFilters {
    ReviewFilters {
        search: args.text,
        rating: args.min_rating,
        tags: (!args.tag.is_empty()).then_some(args.tag),
        date_from: args.from,
        date_to: args.to,
    }
}
