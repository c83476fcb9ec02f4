//! Base62 编码
//!
//! 字母表顺序为 a-z、A-Z、0-9，数字 0 对应 'a'。

/// Base62 字母表
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 短码最大长度
///
/// A `u32` never needs more than 6 symbols, so the cap is never hit for
/// hashed codes and shorter codes are left unpadded.
pub const SHORT_CODE_MAX_LEN: usize = 7;

/// Encode an integer in Base62, most significant symbol first.
pub fn encode_base62(mut num: u32) -> String {
    if num == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut symbols = Vec::with_capacity(6);
    while num > 0 {
        symbols.push(ALPHABET[(num % 62) as usize]);
        num /= 62;
    }

    symbols.iter().rev().map(|&b| b as char).collect()
}

/// 检查短码格式：1..=7 个字母表字符
#[inline]
pub fn is_valid_short_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= SHORT_CODE_MAX_LEN
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
