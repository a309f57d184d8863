//! Build script to generate embedded word lists
//!
//! Reads the answer and allowed-guess files and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words that can be drawn as the secret answer",
    )?;

    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Words accepted as guesses (answers included)",
    )?;

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)
        .map_err(|e| io::Error::new(e.kind(), format!("failed to read {input_path}: {e}")))?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;
    Ok(())
}
