// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Line-oriented input sources.
//!
//! Lines are raw bytes. Nothing is decoded, so any byte sequence in a list
//! reaches the hash functions unchanged.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Lines of a file, with trailing `\n` or `\r\n` removed.
#[derive(Debug)]
pub struct Lines {
    path: PathBuf,
    inner: io::Split<BufReader<File>>,
}

impl Iterator for Lines {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|line| match line {
            Ok(mut line) => {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                Ok(line)
            }
            Err(source) => Err(Error::Io {
                path: self.path.clone(),
                source,
            }),
        })
    }
}

/// Open a file for reading line by line.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Lines> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    Ok(Lines {
        path: path.to_owned(),
        inner: BufReader::new(file).split(b'\n'),
    })
}

/// Read every line of a file, failing if any line cannot be read.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    read_lines(path)?.collect()
}
