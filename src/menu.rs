// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Interactive menu over a loaded filter.
use std::io::{self, BufRead, Write};

use tribloom::{source, BloomFilter, HASH_NAMES};

use crate::report;

/// Run the menu until the user exits or the input ends.
pub fn run<R: BufRead, W: Write>(filter: &BloomFilter, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        writeln!(out, "\n--- Bloom Filter Menu ---")?;
        writeln!(out, "Bitset size: {}", filter.capacity())?;
        writeln!(out, "Hash functions used: {}", HASH_NAMES.join(", "))?;
        writeln!(out, "1. Test a file")?;
        writeln!(out, "2. Test a website string")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.parse::<u32>() {
            Ok(1) => {
                let Some(path) = prompt(&mut input, &mut out, "Enter the file name to test: ")?
                else {
                    return Ok(());
                };
                match source::read_all(&path) {
                    Ok(lines) => report::write_scan(&mut out, &filter.scan(lines))?,
                    Err(err) => {
                        tracing::error!("{err}");
                        writeln!(out, "Unable to test file: {err}")?;
                    }
                }
            }
            Ok(2) => {
                let Some(website) = prompt(&mut input, &mut out, "Enter the website URL to test: ")?
                else {
                    return Ok(());
                };
                report::write_single(&mut out, &website, filter.contains(&website))?;
            }
            Ok(3) => return Ok(()),
            Ok(_) => writeln!(out, "Invalid choice. Please enter a number between 1 and 3.")?,
            Err(_) => writeln!(out, "Invalid input. Please enter a number between 1 and 3.")?,
        }
    }
}

/// Print a prompt and return the first word of the next non-blank line, or
/// `None` once the input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(word) = line.split_whitespace().next() {
            return Ok(Some(word.to_owned()));
        }
    }
}
