//! # 容器字段序列化模块
//!
//! 负责长度字段与扩展名字段在整数/字符串与定长字节数组之间的转换。

use crate::constants::{EXTENSION_FIELD_LEN, SIZE_FIELD_LEN};
use crate::error::Result;
use std::path::Path;

/// 将载荷长度序列化为 4 字节大端序数组，`bytes[0]` 为最高位字节。
pub fn int_to_bytes(n: u32) -> [u8; SIZE_FIELD_LEN] {
    let mut bytes = [0u8; SIZE_FIELD_LEN];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (n >> (24 - 8 * i)) as u8;
    }
    bytes
}

/// `int_to_bytes` 的逆运算，按大端序拼接任意长度的输入。
/// 超过 4 字节时，高位字节会被移出结果。
pub fn bytes_to_int(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &byte| acc.wrapping_shl(8) | u32::from(byte))
}

/// 将扩展名编码为 8 字节字段。
///
/// 扩展名的 UTF-8 字节右对齐存放，左侧补零；超过 8 字节时只保留最后 8 字节。
/// 截断可能切断多字节字符，解码时会得到 `StegoError::Encoding`。
pub fn extension_to_bytes(ext: &str) -> [u8; EXTENSION_FIELD_LEN] {
    let mut field = [0u8; EXTENSION_FIELD_LEN];
    field
        .iter_mut()
        .rev()
        .zip(ext.as_bytes().iter().rev())
        .for_each(|(slot, &byte)| *slot = byte);
    field
}

/// 从 8 字节字段还原扩展名，去掉两端的空白与零字节。
///
/// # Errors
///
/// 字段不是合法的 UTF-8 时返回 `StegoError::Encoding`。
pub fn extension_from_bytes(field: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(field)?;
    Ok(text
        .trim_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string())
}

/// 返回文件名中最后一个 `.` 之后的部分；没有 `.` 时返回空字符串。
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    name.rfind('.')
        .map(|dot| name[dot + 1..].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StegoError;

    #[test]
    fn size_field_is_big_endian() {
        assert_eq!(int_to_bytes(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(int_to_bytes(2), [0, 0, 0, 2]);
        assert_eq!(bytes_to_int(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        assert_eq!(bytes_to_int(&int_to_bytes(u32::MAX)), u32::MAX);
    }

    #[test]
    fn bytes_to_int_accepts_short_input() {
        assert_eq!(bytes_to_int(&[]), 0);
        assert_eq!(bytes_to_int(&[0xAB]), 0xAB);
        assert_eq!(bytes_to_int(&[0x01, 0x00]), 0x100);
    }

    #[test]
    fn extension_is_right_justified() {
        assert_eq!(extension_to_bytes("txt"), [0, 0, 0, 0, 0, b't', b'x', b't']);
        assert_eq!(extension_to_bytes("c"), [0, 0, 0, 0, 0, 0, 0, b'c']);
        assert_eq!(extension_to_bytes(""), [0; 8]);
        assert_eq!(extension_to_bytes("abcdefgh"), *b"abcdefgh");
    }

    #[test]
    fn long_extension_keeps_last_eight_bytes() {
        assert_eq!(extension_to_bytes("tar.gz2xy"), *b"ar.gz2xy");
        assert_eq!(extension_to_bytes("backup.tar"), *b"ckup.tar");
    }

    #[test]
    fn extension_field_is_trimmed() {
        assert_eq!(extension_from_bytes(&[0, 0, 0, 0, 0, b't', b'x', b't']).unwrap(), "txt");
        assert_eq!(extension_from_bytes(&[0; 8]).unwrap(), "");
        assert_eq!(extension_from_bytes(b"  md\0\0\0\0").unwrap(), "md");
    }

    #[test]
    fn invalid_utf8_extension_is_an_encoding_error() {
        let result = extension_from_bytes(&[0, 0, 0, 0, 0, 0, 0xC3, 0x28]);
        assert!(matches!(result, Err(StegoError::Encoding(_))));
    }

    #[test]
    fn extension_of_takes_text_after_last_dot() {
        assert_eq!(extension_of(Path::new("secret.txt")), "txt");
        assert_eq!(extension_of(Path::new("dir.d/archive.tar.gz")), "gz");
        assert_eq!(extension_of(Path::new("dir.d/README")), "");
        assert_eq!(extension_of(Path::new("trailing.")), "");
    }
}
