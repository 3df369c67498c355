//! Build script to embed word lists
//!
//! Scans `data/` for `<N>-letter-words.txt` files and generates a lookup
//! function that returns each list as a static string.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const RESOURCE_NAME_SUFFIX: &str = "-letter-words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join(DATA_DIR);

    let lists = find_word_lists(&data_dir);
    generate_embedded(&lists, &Path::new(&out_dir).join("embedded_lists.rs"));

    // Rebuild if word lists are added, removed or changed
    println!("cargo:rerun-if-changed={DATA_DIR}");
    for (_, path) in &lists {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

fn find_word_lists(data_dir: &Path) -> Vec<(usize, PathBuf)> {
    let entries = fs::read_dir(data_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", data_dir.display()));

    let mut lists: Vec<(usize, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let length = name.strip_suffix(RESOURCE_NAME_SUFFIX)?.parse().ok()?;
            Some((length, entry.path()))
        })
        .collect();

    lists.sort_by_key(|(length, _)| *length);
    lists
}

fn generate_embedded(lists: &[(usize, PathBuf)], output_path: &Path) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list lookup").unwrap();
    writeln!(output).unwrap();

    let lengths: Vec<String> = lists.iter().map(|(length, _)| length.to_string()).collect();
    writeln!(output, "/// Word lengths with an embedded word list").unwrap();
    writeln!(
        output,
        "pub const EMBEDDED_LENGTHS: &[usize] = &[{}];",
        lengths.join(", ")
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "/// Embedded `<N>-letter-words.txt` contents for a word length").unwrap();
    writeln!(output, "#[must_use]").unwrap();
    writeln!(
        output,
        "pub fn embedded_word_list(word_length: usize) -> Option<&'static str> {{"
    )
    .unwrap();
    writeln!(output, "    match word_length {{").unwrap();
    for (length, path) in lists {
        let path = path.to_string_lossy();
        writeln!(output, "        {length} => Some(include_str!({path:?})),").unwrap();
    }
    writeln!(output, "        _ => None,").unwrap();
    writeln!(output, "    }}").unwrap();
    writeln!(output, "}}").unwrap();
}
