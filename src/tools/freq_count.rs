use rayon::prelude::*;

use crate::huffman::FreqTable;

/// Returns a frequency count of the input text. Uses parallelism when the
/// input is over 64k.
///
/// The parallel path folds a private table per chunk and merges them by
/// addition, so where rayon splits the text cannot change the totals.
pub fn freqs(text: &str) -> FreqTable {
    if text.len() > 64_000 {
        text.par_chars()
            .fold(FreqTable::default, |mut freqs, symbol| {
                *freqs.entry(symbol).or_insert(0) += 1;
                freqs
            })
            .reduce(FreqTable::default, |mut total, partial| {
                for (symbol, count) in partial {
                    *total.entry(symbol).or_insert(0) += count;
                }
                total
            })
    } else {
        let mut freqs = FreqTable::default();
        text.chars()
            .for_each(|symbol| *freqs.entry(symbol).or_insert(0) += 1);
        freqs
    }
}
