//! A1-style cell addressing helpers (1-based)

/// Convert a 1-based column index to its letter label (1→A, 26→Z, 27→AA, ...)
pub fn column_letter(column: u32) -> String {
    let mut result = String::new();
    let mut num = column;

    while num > 0 {
        let remainder = (num - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        num = (num - 1) / 26;
    }

    result
}

/// Parse a column label (case-insensitive) back into its 1-based index
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index * 26 + digit;
    }

    Some(index)
}

/// Cell address such as `L5`
pub fn coordinate(row: u32, column: u32) -> String {
    format!("{}{}", column_letter(column), row)
}
