use super::code_table::CodeTable;
use super::error::HuffmanError;

/// Concatenates the code of every symbol in `text`, in input order, into
/// one printable bit-string. A symbol missing from the table stops the
/// whole encode with `UnknownSymbol` rather than being dropped.
pub fn encode(text: &str, table: &CodeTable) -> Result<String, HuffmanError> {
    let mut bits = String::with_capacity(text.len());
    for symbol in text.chars() {
        match table.get(&symbol) {
            Some(code) => bits.push_str(code),
            None => return Err(HuffmanError::UnknownSymbol(symbol)),
        }
    }
    Ok(bits)
}
