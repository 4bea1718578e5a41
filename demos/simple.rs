//! A simple example showing the use of a Bloom filter.
use tribloom::BloomFilter;

fn main() {
    let mut bf: BloomFilter = ["evil.com", "bad.org"].into_iter().collect();

    bf.add("phish.net");

    bf.contains("evil.com"); // true
    bf.contains("phish.net"); // true
    bf.contains("safe.com"); // false

    let report = bf.scan(["bad.org", "example.com"]);
    for verdict in report.verdicts() {
        println!("{}: {}", verdict.item, verdict.matched);
    }
    println!(
        "{} positives, {} negatives",
        report.positives(),
        report.negatives()
    );
}
