use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::domain::{FeedSelector, RankMode, Story};
use crate::layout::{bucketize, continued_page, excerpt, Region, EXCERPT_WORDS};
use crate::timefmt::{format_masthead_date, format_relative_at};

pub const MASTHEAD: &str = "The Broadsheet";

/// Selector from the command line, falling back to the configured default.
pub fn resolve_selector(config: &Config, source: Option<&str>, top: bool) -> FeedSelector {
    let selector = match source {
        Some(path) => FeedSelector::parse(path),
        None => config.feeds.default_selector(),
    };
    if top {
        selector.with_rank_mode(RankMode::TopAllTime)
    } else {
        selector
    }
}

pub async fn show(ctx: &AppContext, selector: FeedSelector, json: bool) -> Result<()> {
    let token = ctx.board.begin();
    ctx.run_pass(token, selector.clone()).await;

    let stories = ctx
        .board
        .current()
        .await
        .map(|edition| edition.stories)
        .unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&stories)?);
        return Ok(());
    }

    if stories.is_empty() {
        eprintln!("No stories for {}", selector);
    }
    print!("{}", render_front_page(&selector, &stories, Local::now()));
    Ok(())
}

pub fn list_sources(ctx: &AppContext) -> Result<()> {
    let default = ctx.config.feeds.default_selector();
    for source in ctx.config.feeds.sources() {
        let marker = if source == default.source { "*" } else { " " };
        println!("{} {:<20} {}", marker, source.id(), source.label());
    }
    Ok(())
}

/// Plain-text front page: masthead, then every non-empty region in page order.
pub fn render_front_page(selector: &FeedSelector, stories: &[Story], now: DateTime<Local>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_front_page(&mut out, selector, stories, now);
    out
}

fn write_front_page(
    out: &mut String,
    selector: &FeedSelector,
    stories: &[Story],
    now: DateTime<Local>,
) -> std::fmt::Result {
    let rule = "=".repeat(72);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^72}", MASTHEAD.to_uppercase())?;
    writeln!(out, "{:^72}", format_masthead_date(&now))?;
    writeln!(out, "{:^72}", selector.describe())?;
    writeln!(out, "{}", rule)?;

    for (region, region_stories) in bucketize(stories).regions() {
        if region_stories.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "--- {} ---", region.title())?;

        for story in region_stories {
            writeln!(out)?;
            writeln!(out, "{}", story.title)?;
            writeln!(
                out,
                "By {} | {} | {}",
                story.display_author(),
                story.source,
                format_relative_at(story.created, now)
            )?;
            writeln!(out, "{}", story.href)?;
            if let Some(image) = &story.image_href {
                writeln!(out, "[image] {}", image)?;
            }

            // Only the lead stories carry body text on the printed page.
            if region == Region::CenterSpread && story.has_text() {
                let body = excerpt(&story.text, EXCERPT_WORDS);
                writeln!(out, "{}", body.text)?;
                if body.truncated {
                    writeln!(out, "Continued on Page A{}", continued_page(story))?;
                }
            }
        }
    }

    Ok(())
}
