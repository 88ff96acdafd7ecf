//! Build script to embed the word lists
//!
//! Validates `data/answers.txt` and `data/allowed.txt` and writes them to `OUT_DIR` as const
//! slices. A malformed entry, or an answer missing from the allowed list, fails the build.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_dir = Path::new(&out_dir);

    let answers = read_words("data/answers.txt");
    let allowed = read_words("data/allowed.txt");

    if let Some(missing) = answers.difference(&allowed).next() {
        panic!("answer {missing:?} is not in data/allowed.txt");
    }

    write_list(
        &out_dir.join("answers.rs"),
        "ANSWERS",
        "Words that can be picked as the secret word",
        &answers,
    );
    write_list(
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "All accepted guess words",
        &allowed,
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

/// Lower-cased, de-duplicated words of one list
fn read_words(path: &str) -> BTreeSet<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            let word = line.trim().to_ascii_lowercase();
            assert!(
                word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase()),
                "{path}:{}: {word:?} is not a {WORD_LENGTH}-letter word",
                number + 1
            );
            word
        })
        .collect()
}

fn write_list(output_path: &Path, const_name: &str, doc_comment: &str, words: &BTreeSet<String>) {
    let count = words.len();
    let mut source = String::new();

    writeln!(source, "// Generated by build.rs").unwrap();
    writeln!(source, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(source, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(source, "    {word:?},").unwrap();
    }
    writeln!(source, "];").unwrap();
    writeln!(source, "/// Number of words in `{const_name}`").unwrap();
    writeln!(source, "pub const {const_name}_COUNT: usize = {count};").unwrap();

    fs::write(output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
