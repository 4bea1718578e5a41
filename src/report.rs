// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Console rendering of filter verdicts.
use std::io::{self, Write};

use tribloom::ScanReport;

/// Text shown for a matched or unmatched candidate.
pub fn label(matched: bool) -> &'static str {
    if matched {
        "possibly malicious"
    } else {
        "not malicious"
    }
}

/// Write the verdict for a single ad-hoc string.
pub fn write_single<W: Write>(out: &mut W, item: &str, matched: bool) -> io::Result<()> {
    writeln!(out, "The website {} is {}.", item, label(matched))
}

/// Write one line per candidate, the totals, then the matched candidates.
pub fn write_scan<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    for verdict in report.verdicts() {
        writeln!(out, "Checking {} : {}", verdict.item, label(verdict.matched))?;
    }
    writeln!(out, "Total Positives: {}", report.positives())?;
    writeln!(out, "Total Negatives: {}", report.negatives())?;

    if report.positives() == 0 {
        writeln!(out, "\nNo malicious URLs found.")?;
    } else {
        writeln!(out, "\nMalicious URLs:")?;
        for item in report.matched() {
            writeln!(out, "{}", item)?;
        }
    }
    Ok(())
}
