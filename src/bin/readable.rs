//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Suited for piping fetched pages through shell pipelines.

use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: Option<String>,
    date: Option<String>,
    text: String,
    images: Vec<String>,
    word_count: usize,
}

fn main() {
    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let page = unboil::load(&html);

    // Content accessors fail together when no article was found; emit the
    // metadata that still resolved and leave the rest empty.
    let output = Output {
        title: page.title(),
        date: page.date(),
        text: page.text().unwrap_or_default(),
        images: page.images().unwrap_or_default(),
        word_count: page.word_count().unwrap_or_default(),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
