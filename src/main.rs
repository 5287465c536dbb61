mod config;
mod dictionary;
mod game;
mod models;
mod utils;

use std::io::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use dictionary::Dictionary;
use game::{GridGenerator, GridSolver, Scorer};
use models::FoundWord;

const INTRO: &str = "Boggle is a word game played on a grid of letters, in which players\n\
attempt to find words in sequences of adjacent letters.\n\n\
'Qu' counts as a single tile, but should be entered as 'Q'.\n";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load dictionary
    let dictionary = Dictionary::load(&config.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "failed to load dictionary from {}",
                config.dictionary_path
            )
        })?;

    let solver = GridSolver::new(
        Arc::new(dictionary),
        config.grid_width,
        config.grid_height,
    );

    // One-shot mode: solve a grid passed as the only argument and print the
    // scored results as JSON.
    if let Some(content) = std::env::args().nth(1) {
        let results: Vec<FoundWord> = solver
            .find_words(&content)?
            .into_iter()
            .map(|word| {
                let score = Scorer::score(&word);
                FoundWord { word, score }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    run_interactive(&solver, config.page_size).await
}

/// The line-based console loop: read a grid one row at a time, solve it,
/// print the scored words a page at a time.
async fn run_interactive(solver: &GridSolver, page_size: usize) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{INTRO}");

    loop {
        match read_grid(&mut lines, solver.width(), solver.height()).await? {
            GridInput::Quit => break,
            GridInput::Content(content) => match solver.find_words(&content) {
                Ok(words) => print_words(&mut lines, &words, page_size).await?,
                Err(e) => println!("{e}"),
            },
        }
    }

    println!("\nExiting boggle solver.");
    Ok(())
}

enum GridInput {
    Content(String),
    Quit,
}

/// Read one grid from the console, a row per line. An empty first row quits;
/// 'random' generates a grid instead.
async fn read_grid(
    lines: &mut Lines<BufReader<Stdin>>,
    width: usize,
    height: usize,
) -> Result<GridInput> {
    println!(
        "Enter the grid one row at a time ({width} letters per row), \
'random' for a generated grid, or an empty row to quit."
    );

    let mut content = String::with_capacity(width * height);
    let mut row = 1;
    while row <= height {
        print!("Row {row}: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(GridInput::Quit);
        };
        let line = line.trim();

        if content.is_empty() {
            if line.is_empty() {
                return Ok(GridInput::Quit);
            }
            if line.eq_ignore_ascii_case("random") {
                let generated = GridGenerator::generate(width, height);
                print_grid(&generated, width);
                return Ok(GridInput::Content(generated));
            }
        }

        match parse_row(line, width) {
            Some(letters) => {
                content.push_str(&letters);
                row += 1;
            }
            None => println!("Please enter exactly {width} letters."),
        }
    }

    Ok(GridInput::Content(content))
}

/// Keep only the letters of a typed row, uppercased. A row is accepted when
/// exactly `width` letters remain.
fn parse_row(line: &str, width: usize) -> Option<String> {
    let letters: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    (letters.chars().count() == width).then_some(letters)
}

/// Display grid content as rows, with the Q tile shown as "Qu".
fn print_grid(content: &str, width: usize) {
    for (i, c) in content.chars().enumerate() {
        if i > 0 && i % width == 0 {
            println!();
        }
        let tile = if c == 'Q' { "Qu".to_string() } else { c.to_string() };
        print!("{tile:<3}");
    }
    println!();
}

/// Print found words with scores, pausing for Enter between pages.
async fn print_words(
    lines: &mut Lines<BufReader<Stdin>>,
    words: &[String],
    page_size: usize,
) -> Result<()> {
    println!("\nWords found: {}", words.len());

    for (i, word) in words.iter().enumerate() {
        println!("{} [{}]", word, Scorer::score(word));
        let printed = i + 1;
        if page_size > 0 && printed % page_size == 0 && printed < words.len() {
            println!("[Hit Enter for more]");
            if lines.next_line().await?.is_none() {
                break;
            }
        }
    }

    println!("*** End of word list ***\n");
    Ok(())
}
