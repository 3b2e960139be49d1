use std::fmt;

use crate::processor::LetterStats;

/// Human-readable rendering of a merged [`LetterStats`]
///
/// Letters are printed four per line, followed by the square-root sum.
pub struct Report<'a>(pub &'a LetterStats);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Letter counts (a-z) ---")?;
        for (i, (letter, count)) in self.0.letters().enumerate() {
            write!(f, "{}: {}", letter, count)?;
            if (i + 1) % 4 == 0 {
                writeln!(f)?;
            } else {
                write!(f, "\t")?;
            }
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(f, "Sum of square roots: {:.6}", self.0.sqrt_sum)
    }
}
