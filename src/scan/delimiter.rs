/// Returns the opening delimiter that `closer` closes, or `None` when the
/// byte is not a closing delimiter.
pub fn matching_opener(closer: u8) -> Option<u8> {
    match closer {
        b')' => Some(b'('),
        b']' => Some(b'['),
        b'}' => Some(b'{'),
        b'>' => Some(b'<'),
        _ => None,
    }
}

/// Brackets that always open a nested region. `<` is only an opener when the
/// angle-bracket pass says so.
pub fn is_bracket_opener(byte: u8) -> bool {
    matches!(byte, b'(' | b'[' | b'{')
}

pub fn is_bracket_closer(byte: u8) -> bool {
    matches!(byte, b')' | b']' | b'}')
}
