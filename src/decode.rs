use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid hex length {len}: expected an even number of digits")]
    InvalidLength { len: usize },

    #[error("invalid hex digit {digit:?} at position {index}")]
    InvalidDigit { digit: char, index: usize },
}

fn hex_digit_to_u8(hex_digit: char) -> Option<u8> {
    match hex_digit {
        '0'..='9' => Some(hex_digit as u8 - b'0'),
        'a'..='f' => Some(hex_digit as u8 - b'a' + 10),
        'A'..='F' => Some(hex_digit as u8 - b'A' + 10),
        _ => None,
    }
}

/// Decodes a string of hex digit pairs into bytes. Digits are case-insensitive.
///
/// Lengths and positions are counted in characters, so a stray non-ASCII
/// character is reported where the user sees it.
pub fn hex_decode(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let len = hex.chars().count();
    if len % 2 != 0 {
        return Err(DecodeError::InvalidLength { len });
    }

    let nibbles = hex
        .chars()
        .enumerate()
        .map(|(index, digit)| {
            hex_digit_to_u8(digit).ok_or(DecodeError::InvalidDigit { digit, index })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(nibbles.chunks_exact(2).map(|chunk| match chunk {
        [high, low] => *high << 4 | *low,
        _ => unreachable!("Chunks contain exactly 2 elements"),
    }).collect())
}

#[cfg(test)]
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
