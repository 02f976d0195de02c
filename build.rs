//! Build script to generate the embedded dictionary
//!
//! Reads the word list file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default US English dictionary",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Lines are kept exactly as `dictionary::loader` reads a file
    let words: Vec<&str> = content.lines().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
