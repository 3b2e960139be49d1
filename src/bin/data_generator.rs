use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};

const WORDS: [&str; 8] = [
    "Lorem", "ipsum", "DOLOR", "sit", "amet", "consectetur", "Adipiscing", "elit",
];

fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/text_100m.txt".to_string());
    let target_bytes: usize = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000_000);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    let mut rng = rand::rng();
    let mut written = 0;
    while written < target_bytes {
        let word = WORDS[rng.random_range(0..WORDS.len())];
        let number: u16 = rng.random_range(0..1000);
        let sep = [" ", ", ", ".\n", "\t"][rng.random_range(0..4)];
        let line = format!("{} {}{}", word, number, sep);
        writer.write_all(line.as_bytes())?;
        written += line.len();
    }
    writer.flush()?;

    println!("Sample text generated: {} ({} bytes)", path, written);
    Ok(())
}
