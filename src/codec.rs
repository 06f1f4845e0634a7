//! The driver for the whole run. Reads the input text, carries it through
//! the coding pipeline, and writes the report file. Everything here talks
//! in `io::Result` so main can hand any failure straight to the user.

use log::{debug, error, info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::huffman::{build_code_table, decode, encode, CodeTable, HuffmanTree};
use crate::tools::cli::Options;
use crate::tools::freq_count::freqs;
use crate::tools::listing;
use crate::tools::stats;
use crate::tools::timer::Timer;

/// Runs the full pipeline for the file named in `opts` and writes the
/// report. Refuses to overwrite an existing report unless the force flag
/// was given.
pub fn run(opts: &Options) -> io::Result<()> {
    let mut timer = Timer::new();

    if Path::new(&opts.output).exists() {
        if !opts.force_overwrite {
            error!("{} already exists. Use --force to overwrite it.", opts.output);
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", opts.output),
            ));
        }
        warn!("Overwriting {}.", opts.output);
    }

    let text = fs::read_to_string(&opts.file)?;
    info!("Read {} bytes from {}.", text.len(), opts.file);
    timer.mark("read");

    let (table, bits, decoded) = transcode(&text, &mut timer)?;

    let mut f_out = BufWriter::new(File::create(&opts.output)?);
    listing::write_report(&mut f_out, &table, &bits, &decoded)?;
    f_out.flush()?;
    info!("Wrote the report to {}.", opts.output);
    timer.mark("write");

    timer.report();
    Ok(())
}

/// Carries one text through the pipeline: count frequencies, build the
/// tree, derive the code table, encode, then decode the bits back and
/// compare against the input. A mismatch can only mean the coder itself is
/// broken, so it is a hard error rather than a warning.
///
/// Returns the code table, the encoded bit-string, and the decoded text,
/// which is everything the report needs.
pub fn transcode(text: &str, timer: &mut Timer) -> io::Result<(CodeTable, String, String)> {
    let symbol_total = text.chars().count();

    let freq = freqs(text);
    info!(
        "Counted {} distinct symbols in {} total.",
        freq.len(),
        symbol_total
    );
    timer.mark("freqs");

    let tree = HuffmanTree::build(&freq)?;
    timer.mark("tree");

    let table = build_code_table(&tree);
    debug!(
        "Entropy is {:.4} bits per symbol, mean code length {:.4}.",
        stats::entropy(&freq),
        stats::mean_code_len(&freq, &table)
    );
    timer.mark("codes");

    let bits = encode(text, &table)?;
    info!(
        "Encoded {} symbols into {} bits, about {} bytes packed against {} input bytes.",
        symbol_total,
        bits.len(),
        (bits.len() + 7) / 8,
        text.len()
    );
    timer.mark("encode");

    let decoded = decode(&bits, &tree)?;
    if decoded != text {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "decoded text does not match the input",
        ));
    }
    timer.mark("decode");

    Ok((table, bits, decoded))
}
