//! Display Templates
//!
//! Markup generators for the post list and the subreddit details panel.
//! Compiled once at startup and shared read-only afterwards.

use std::fmt::Write;

use crate::config::AppConfig;
use crate::error::WidgetResult;
use crate::extract::format_count;
use crate::markdown::{escape_html, parse_markdown};
use crate::models::{Post, SubredditDetails};

/// Single post entry, reused by the posts template
#[derive(Debug, Clone)]
pub struct PostTemplate {
    link_base: String,
}

impl PostTemplate {
    pub fn render_into(&self, out: &mut String, post: &Post) -> WidgetResult<()> {
        writeln!(out, r#"<li class="post">"#)?;
        if post.permalink.is_empty() {
            writeln!(out, r#"  <span class="post-title">{}</span>"#, escape_html(&post.title))?;
        } else {
            writeln!(
                out,
                r#"  <a class="post-title" href="{}{}" target="_blank" rel="noopener">{}</a>"#,
                self.link_base,
                escape_html(&post.permalink),
                escape_html(&post.title)
            )?;
        }
        writeln!(out, r#"  <div class="post-meta">"#)?;
        writeln!(out, r#"    <span class="post-score">{} points</span>"#, format_count(post.score))?;
        writeln!(out, r#"    <span class="post-author">by u/{}</span>"#, escape_html(&post.author))?;
        if post.are_comments {
            writeln!(
                out,
                r#"    <span class="post-comments">{} comments</span>"#,
                escape_html(&post.num_comments)
            )?;
        } else {
            writeln!(out, r#"    <span class="post-comments">No comments yet</span>"#)?;
        }
        writeln!(out, "  </div>")?;
        writeln!(out, "</li>")?;
        Ok(())
    }
}

/// Post list
#[derive(Debug, Clone)]
pub struct PostsTemplate {
    post: PostTemplate,
}

impl PostsTemplate {
    pub fn render(&self, posts: &[Post]) -> WidgetResult<String> {
        let mut out = String::new();
        if posts.is_empty() {
            writeln!(out, r#"<p class="posts-empty">No posts</p>"#)?;
            return Ok(out);
        }
        writeln!(out, r#"<ul class="posts">"#)?;
        for post in posts {
            self.post.render_into(&mut out, post)?;
        }
        writeln!(out, "</ul>")?;
        Ok(out)
    }
}

/// Subreddit details panel
#[derive(Debug, Clone)]
pub struct DetailsTemplate {
    link_base: String,
}

impl DetailsTemplate {
    pub fn render(&self, details: &SubredditDetails) -> WidgetResult<String> {
        let heading = if details.display_name_prefixed.is_empty() {
            format!("r/{}", details.display_name)
        } else {
            details.display_name_prefixed.clone()
        };

        let mut out = String::new();
        writeln!(out, r#"<section class="subreddit-details">"#)?;
        writeln!(out, "  <h2>{}</h2>", escape_html(&heading))?;
        if !details.title.is_empty() {
            writeln!(out, r#"  <p class="subreddit-title">{}</p>"#, escape_html(&details.title))?;
        }
        if !details.public_description.is_empty() {
            writeln!(
                out,
                r#"  <div class="subreddit-description">{}</div>"#,
                parse_markdown(&details.public_description, &self.link_base)
            )?;
        }
        if let Some(subscribers) = details.subscribers {
            writeln!(
                out,
                r#"  <p class="subreddit-subscribers">{} subscribers</p>"#,
                format_count(subscribers)
            )?;
        }
        writeln!(out, "</section>")?;
        Ok(out)
    }
}

/// Both display templates, built once and injected where needed
#[derive(Debug, Clone)]
pub struct Templates {
    pub posts: PostsTemplate,
    pub details: DetailsTemplate,
}

impl Templates {
    pub fn compile(config: &AppConfig) -> Self {
        let link_base = config.link_base.trim_end_matches('/').to_string();
        Self {
            posts: PostsTemplate {
                post: PostTemplate { link_base: link_base.clone() },
            },
            details: DetailsTemplate { link_base },
        }
    }
}
