use std::collections::{HashMap, HashSet};
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use sift::{
    evaluate, load_index_file, parse_index, IndexError, IndexStore, QueryConfig, SearchOutcome,
};

mod cli;
use cli::display::{
    bold, channel_label, close, dim, divider, format_size, line, open, pad_left, pad_right, paint,
    paint_bold, palette, score_value, timing_ms, truncate_path, url_label,
};
use cli::{Cli, Commands};

/// Search result output for --json consumers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    title: &'a str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    excerpt: &'a str,
    score: u32,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => run_search(&index, &query, limit, json),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Run a query against an index file with the same semantics as the widget.
fn run_search(index_path: &str, query: &str, limit: usize, json: bool) -> Result<(), IndexError> {
    let index = load_index_file(index_path)?;
    let article_count = index.len();
    let store = IndexStore::ready(index);
    let config = QueryConfig {
        max_results: limit,
        ..QueryConfig::default()
    };

    let started = Instant::now();
    let outcome = evaluate(&store, query, &config);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        print_json(&store, &outcome);
        return Ok(());
    }

    open("SIFT SEARCH");
    line("");
    line(&format!("  Query:     {}", bold(query)));
    line(&format!("  Index:     {}", truncate_path(index_path, 55)));
    line(&format!("  Articles:  {}", article_count));
    line("");

    match outcome {
        SearchOutcome::Hidden => {
            divider("RESULTS");
            line("");
            line(&format!(
                "  {}",
                dim("Query too short - nothing to search for.")
            ));
            line("");
            close();
        }
        SearchOutcome::Placeholder(kind) => {
            divider("RESULTS");
            line("");
            line(&format!("  {}", paint_bold(palette().yellow, kind.title())));
            line(&format!("  {}", dim(kind.excerpt())));
            line("");
            print_timing(article_count, elapsed_ms);
        }
        SearchOutcome::Results(results) => {
            let index = store.index().expect("results require a loaded index");
            divider("RESULTS");
            line("");
            for (rank, result) in results.iter().enumerate() {
                let article = index
                    .get(result.article_id)
                    .expect("result ids come from this index");

                let rank_str = pad_left(&format!("{}.", rank + 1), 4);
                line(&format!(
                    "  {} {}  {}",
                    rank_str,
                    score_value(result.score),
                    bold(&article.title)
                ));

                let meta = match article.channel.as_deref().filter(|c| !c.is_empty()) {
                    Some(channel) => format!(
                        "              {}  {}",
                        channel_label(channel),
                        url_label(&article.url)
                    ),
                    None => format!("              {}", url_label(&article.url)),
                };
                line(&meta);
                line("");
            }
            print_timing(article_count, elapsed_ms);
        }
    }

    Ok(())
}

fn print_timing(article_count: usize, elapsed_ms: f64) {
    divider("TIMING");
    line("");
    line(&format!(
        "  Searched {} articles in {} ms",
        article_count,
        timing_ms(elapsed_ms)
    ));
    line("");
    close();
}

/// Emit results as JSON. Placeholder and hidden outcomes become an empty
/// array so scripted consumers always get a list.
fn print_json(store: &IndexStore, outcome: &SearchOutcome) {
    let hits: Vec<SearchHit> = match outcome {
        SearchOutcome::Results(results) => {
            let index = store.index().expect("results require a loaded index");
            results
                .iter()
                .filter_map(|result| {
                    index.get(result.article_id).map(|article| SearchHit {
                        title: &article.title,
                        url: &article.url,
                        channel: article.channel.as_deref().filter(|c| !c.is_empty()),
                        excerpt: &article.excerpt,
                        score: result.score,
                    })
                })
                .collect()
        }
        _ => Vec::new(),
    };

    let serialized = serde_json::to_string_pretty(&hits).expect("serialize results");
    println!("{}", serialized);
}

/// Summarize an index file: counts, text stats, the most common tags, and
/// hygiene warnings for records the widget will render badly.
fn run_inspect(index_path: &str) -> Result<(), IndexError> {
    let raw = std::fs::read_to_string(index_path)?;
    let file_size = raw.len();
    let index = parse_index(&raw)?;

    let articles = index.articles();
    let article_count = articles.len();

    let with_channel = articles
        .iter()
        .filter(|a| a.channel.as_deref().map_or(false, |c| !c.is_empty()))
        .count();
    let channels: HashSet<&str> = articles
        .iter()
        .filter_map(|a| a.channel.as_deref().filter(|c| !c.is_empty()))
        .collect();
    let tagged = articles.iter().filter(|a| !a.tags.is_empty()).count();

    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        for tag in &article.tags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    let unique_tags = tag_counts.len();

    let total_title_chars: usize = articles.iter().map(|a| a.title.chars().count()).sum();
    let total_excerpt_chars: usize = articles.iter().map(|a| a.excerpt.chars().count()).sum();
    let avg_title = if article_count > 0 {
        total_title_chars / article_count
    } else {
        0
    };
    let avg_excerpt = if article_count > 0 {
        total_excerpt_chars / article_count
    } else {
        0
    };
    let longest_title = articles
        .iter()
        .max_by_key(|a| a.title.chars().count())
        .map_or("", |a| a.title.as_str());

    let mut top_tags: Vec<(&str, usize)> = tag_counts.into_iter().collect();
    top_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    top_tags.truncate(10);

    // An empty title renders as a blank dropdown row; a duplicated url means
    // two index entries point at the same page.
    let empty_titles = articles.iter().filter(|a| a.title.trim().is_empty()).count();
    let mut url_counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        *url_counts.entry(article.url.as_str()).or_insert(0) += 1;
    }
    let mut duplicate_urls: Vec<(&str, usize)> = url_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    duplicate_urls.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    open("SIFT INDEX INSPECTOR");
    line("");
    line(&format!("  File:  {}", truncate_path(index_path, 55)));
    line(&format!("  Size:  {}", format_size(file_size)));
    line("");

    divider("ARTICLES");
    line("");
    line(&format!(
        "  Articles:      {}",
        pad_left(&article_count.to_string(), 6)
    ));
    line(&format!(
        "  With channel:  {}  ({} distinct)",
        pad_left(&with_channel.to_string(), 6),
        channels.len()
    ));
    line(&format!(
        "  With tags:     {}  ({} distinct)",
        pad_left(&tagged.to_string(), 6),
        unique_tags
    ));
    line("");

    divider("TEXT");
    line("");
    line(&format!(
        "  Avg title:     {} chars",
        pad_left(&avg_title.to_string(), 6)
    ));
    line(&format!(
        "  Avg excerpt:   {} chars",
        pad_left(&avg_excerpt.to_string(), 6)
    ));
    line(&format!(
        "  Longest title: {}",
        truncate_path(longest_title, 48)
    ));
    line("");

    if !top_tags.is_empty() {
        divider("TOP TAGS");
        line("");

        let bar_width = 24;
        let max_count = top_tags[0].1.max(1);
        for (tag, count) in &top_tags {
            let bar_len = (count * bar_width / max_count).max(1);
            let bar: String = "█".repeat(bar_len);
            let empty: String = "░".repeat(bar_width - bar_len);
            line(&format!(
                "  {} │{}{}│ {}",
                pad_right(tag, 16),
                bar,
                empty,
                pad_left(&count.to_string(), 4)
            ));
        }
        line("");
    }

    if empty_titles > 0 || !duplicate_urls.is_empty() {
        divider("WARNINGS");
        line("");
        if empty_titles > 0 {
            line(&format!(
                "  {}",
                paint(
                    palette().yellow,
                    &format!("{} article(s) with an empty title", empty_titles)
                )
            ));
        }
        for (url, count) in &duplicate_urls {
            line(&format!(
                "  {}",
                paint(
                    palette().yellow,
                    &format!("duplicate url {} ({} articles)", truncate_path(url, 36), count)
                )
            ));
        }
        line("");
    }
    close();

    Ok(())
}
