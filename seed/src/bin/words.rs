extern crate indicatif;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use indicatif::ProgressBar;

const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words_alpha.txt";
const DEFAULT_DICTIONARY_PATH: &str = "wordpuzzle/resources/dictionary.txt";

/// Only plain lowercase words can ever be built from a puzzle's letters.
fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = dotenv::var("WORDLIST_URL").unwrap_or_else(|_| DEFAULT_WORDLIST_URL.to_owned());
    let path: PathBuf = dotenv::var("DICTIONARY_PATH")
        .unwrap_or_else(|_| DEFAULT_DICTIONARY_PATH.to_owned())
        .into();

    println!("Downloading {}", url);
    let text = reqwest::get(&url)
        .await?
        .error_for_status()?
        .text()
        .await?;
    let lines: Vec<&str> = text.lines().collect();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(&path)?);
    let mut seen: HashSet<String> = HashSet::with_capacity(lines.len());

    println!("Processing...");
    let pb = ProgressBar::new(lines.len() as u64);
    for line in lines {
        pb.inc(1);
        if let Some(word) = normalize(line) {
            if seen.insert(word.clone()) {
                writeln!(out, "{}", word)?;
            }
        }
    }
    out.flush()?;
    pb.finish_and_clear();

    println!("Wrote {} words to {}", seen.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Apple\r"), Some("apple".to_owned()));
        assert_eq!(normalize("  fox "), Some("fox".to_owned()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("don't"), None);
        assert_eq!(normalize("naïve"), None);
    }
}
