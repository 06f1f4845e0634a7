//! Turns the results into the report file: a sorted listing of every
//! symbol's code, then the encoded bit-string, then the text decoded back
//! from it. Everything is plain text so the report can be read, diffed,
//! and picked apart by hand.

use std::io::{self, Write};

use crate::huffman::CodeTable;

/// Writes one `'symbol': code` line per table entry, sorted by symbol so
/// the listing is stable run to run.
pub fn write_code_table<W: Write>(w: &mut W, table: &CodeTable) -> io::Result<()> {
    let mut entries: Vec<(char, &str)> = table
        .iter()
        .map(|(&symbol, code)| (symbol, code.as_str()))
        .collect();
    entries.sort_unstable();
    for (symbol, code) in entries {
        writeln!(w, "'{}': {}", escape(symbol), code)?;
    }
    Ok(())
}

/// Printable form of a symbol for the listing. Line breaks and tabs come
/// out as their escape sequences so one table entry stays one line.
fn escape(symbol: char) -> String {
    match symbol {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}

/// Writes the full three-section report: the code table, the encoded text,
/// and the decoded text.
pub fn write_report<W: Write>(
    w: &mut W,
    table: &CodeTable,
    bits: &str,
    decoded: &str,
) -> io::Result<()> {
    writeln!(w, "--- Symbol codes ---")?;
    write_code_table(w, table)?;
    writeln!(w, "\n--- Encoded text ---")?;
    writeln!(w, "{}", bits)?;
    writeln!(w, "\n--- Decoded text ---")?;
    writeln!(w, "{}", decoded)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{write_code_table, write_report};
    use crate::huffman::CodeTable;

    fn sample_table() -> CodeTable {
        [('b', "11"), ('a', "0"), ('c', "10")]
            .into_iter()
            .map(|(symbol, code)| (symbol, code.to_string()))
            .collect()
    }

    fn written(run: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut sink = Vec::new();
        run(&mut sink);
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn listing_is_sorted_by_symbol_test() {
        let out = written(|sink| write_code_table(sink, &sample_table()).unwrap());
        assert_eq!(out, "'a': 0\n'b': 11\n'c': 10\n");
    }

    #[test]
    fn control_symbols_are_escaped_test() {
        let table: CodeTable = [('\n', "0"), ('\t', "10"), ('x', "11")]
            .into_iter()
            .map(|(symbol, code)| (symbol, code.to_string()))
            .collect();
        let out = written(|sink| write_code_table(sink, &table).unwrap());
        assert!(out.contains("'\\n': 0"));
        assert!(out.contains("'\\t': 10"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn report_has_three_sections_test() {
        let out = written(|sink| {
            write_report(sink, &sample_table(), "01011", "abc").unwrap()
        });
        assert!(out.contains("--- Symbol codes ---"));
        assert!(out.contains("--- Encoded text ---"));
        assert!(out.contains("--- Decoded text ---"));
        assert!(out.contains("01011"));
        assert!(out.ends_with("abc\n"));
    }

    #[test]
    fn sections_appear_in_order_test() {
        let out = written(|sink| {
            write_report(sink, &sample_table(), "0", "a").unwrap()
        });
        let codes = out.find("--- Symbol codes ---").unwrap();
        let encoded = out.find("--- Encoded text ---").unwrap();
        let decoded = out.find("--- Decoded text ---").unwrap();
        assert!(codes < encoded);
        assert!(encoded < decoded);
    }
}
