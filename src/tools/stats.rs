//! Small measurements reported alongside the code: the entropy of the
//! input and the mean length of the code actually built. The two bracket
//! each other, a Huffman code's mean length sits within one bit above the
//! entropy.

use crate::huffman::{CodeTable, FreqTable};

/// Shannon entropy of a frequency table, in bits per symbol. Zero counts
/// contribute nothing, and an empty table reads as zero entropy.
pub fn entropy(freqs: &FreqTable) -> f64 {
    let total: u64 = freqs.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    freqs
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Mean code length in bits per symbol, weighted by how often each symbol
/// occurs.
pub fn mean_code_len(freqs: &FreqTable, table: &CodeTable) -> f64 {
    let mut weighted_bits = 0u64;
    let mut total = 0u64;
    for (symbol, &count) in freqs {
        if let Some(code) = table.get(symbol) {
            weighted_bits += count * code.len() as u64;
            total += count;
        }
    }
    if total == 0 {
        return 0.0;
    }
    weighted_bits as f64 / total as f64
}
