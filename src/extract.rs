//! Response Extraction
//!
//! Reshapes raw listings into the records the templates consume.

use crate::error::{WidgetError, WidgetResult};
use crate::models::{InfoResponse, Post, PostsResponse, RawPost, SubredditDetails};

/// Group digits in threes with `,` (`1234567` -> `"1,234,567"`)
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Map every listing child to a display-ready post
pub fn extract_posts_data(results: &PostsResponse) -> Vec<Post> {
    results
        .data
        .children
        .iter()
        .map(|child| to_post(&child.data))
        .collect()
}

fn to_post(raw: &RawPost) -> Post {
    Post {
        title: raw.title.clone(),
        author: raw.author.clone(),
        score: raw.score,
        num_comments: format_count(raw.num_comments),
        subreddit_subscribers: format_count(raw.subreddit_subscribers),
        are_comments: raw.num_comments > 0,
        subreddit_id: raw.subreddit_id.clone(),
        permalink: raw.permalink.clone(),
        extra: raw.extra.clone(),
    }
}

/// First child of an info response
pub fn extract_info_data(results: &InfoResponse) -> WidgetResult<SubredditDetails> {
    results
        .data
        .children
        .first()
        .map(|child| child.data.clone())
        .ok_or_else(|| WidgetError::MalformedResponse("No data present in info response".into()))
}

/// `subreddit_id` of the first post in a posts response
pub fn extract_subreddit_id(results: &PostsResponse) -> WidgetResult<String> {
    results
        .data
        .children
        .first()
        .map(|child| child.data.subreddit_id.clone())
        .ok_or_else(|| {
            WidgetError::MalformedResponse("No posts found to get subreddit_id from".into())
        })
}
