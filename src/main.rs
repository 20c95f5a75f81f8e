//! `VerseFinder` - Chinese/English scripture reference lookup CLI.

use anyhow::Context;
use std::io::BufRead;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use versefinder::config::Config;
use versefinder::constants::search::MAX_SEARCH_RESULTS;
use versefinder::corpus::Translation;
use versefinder::loader::{self, Library};
use versefinder::pipeline::Resolution;
use versefinder::search;

/// Parsed command-line arguments.
struct CliArgs {
    translation: Translation,
    query: Vec<String>,
    search: Option<String>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs {
        translation: Translation::default(),
        query: Vec::new(),
        search: None,
    };

    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--translation" | "-t" => {
                let value = raw
                    .next()
                    .context("--translation requires a value, e.g. 和合本 or kjv")?;
                args.translation = Translation::from_text(&value)
                    .with_context(|| format!("unknown translation: {value}"))?;
            }
            "--search" | "-s" => {
                let value = raw.next().context("--search requires a keyword")?;
                args.search = Some(value);
            }
            _ => args.query.push(arg),
        }
    }

    Ok(args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = parse_args()?;
    let config = Config::load().context("failed to load configuration")?;
    let library = loader::load(&config)
        .await
        .context("initialization failed")?;

    if let Some(keyword) = args.search.as_deref() {
        run_search(&library, args.translation, keyword);
        return Ok(());
    }

    if args.query.is_empty() {
        run_interactive(&library, args.translation)?;
    } else {
        let query = args.query.join(" ");
        let resolution =
            library
                .resolver
                .resolve(&query, args.translation.name(), library.corpus(args.translation));
        print_resolution(&resolution);
    }

    Ok(())
}

/// Read queries line by line from stdin until EOF.
fn run_interactive(library: &Library, translation: Translation) -> anyhow::Result<()> {
    let corpus = library.corpus(translation);
    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let resolution = library.resolver.resolve(&line, translation.name(), corpus);
        print_resolution(&resolution);
    }
    Ok(())
}

fn run_search(library: &Library, translation: Translation, keyword: &str) {
    let hits = search::search_text(library.corpus(translation), keyword, MAX_SEARCH_RESULTS);
    if hits.is_empty() {
        println!("未找到包含“{keyword}”的经文");
        return;
    }
    for hit in hits {
        println!("{} {}:{} {}", hit.book, hit.chapter, hit.verse, hit.text);
    }
}

fn print_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::Success { title, verses } => {
            println!("{title}");
            for verse in verses {
                println!("{} {}", verse.number, verse.text);
            }
        }
        Resolution::Ambiguous { candidates } => {
            println!("书名不明确，可能是：{}", candidates.join("、"));
        }
        Resolution::ParseFailure => {
            println!("无法识别的引用格式，请使用如 创1:1、创1:1-5、创3、创三:16 的格式");
        }
        Resolution::NotFound { book, chapter } => {
            println!("未找到 {book} {chapter}章 的经文");
        }
    }
}
