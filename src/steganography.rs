//! # LSB 比特引擎
//!
//! 每个载体字节只承载 1 bit：写入时替换最低位，读取时取出最低位。
//! 每个数据字节按最高位优先的顺序展开到连续 8 个载体字节中。

use crate::constants::BITS_PER_BYTE;
use std::io::{self, Read, Write};

/// 将 `value` 的 8 个比特写入 `chunk` 各字节的最低位，最高位优先。
pub fn embed_byte(value: u8, chunk: &mut [u8; BITS_PER_BYTE]) {
    for (i, byte) in chunk.iter_mut().enumerate() {
        let bit = (value >> (7 - i)) & 0x1;
        *byte = (*byte & !0x1) | bit;
    }
}

/// `embed_byte` 的逆运算：第一个载体字节的最低位成为结果的最高位。
pub fn extract_byte(chunk: &[u8; BITS_PER_BYTE]) -> u8 {
    chunk
        .iter()
        .fold(0u8, |acc, &byte| (acc << 1) | (byte & 0x1))
}

/// 从 `carrier` 读取 `data.len() * 8` 个字节，嵌入 `data` 后写入 `out`。
///
/// # Errors
///
/// 载体字节不足时返回 `ErrorKind::UnexpectedEof`；读写失败原样返回。
pub fn embed_bytes<R: Read, W: Write>(
    carrier: &mut R,
    out: &mut W,
    data: &[u8],
) -> io::Result<()> {
    let mut chunk = [0u8; BITS_PER_BYTE];
    for &value in data {
        carrier.read_exact(&mut chunk)?;
        embed_byte(value, &mut chunk);
        out.write_all(&chunk)?;
    }
    Ok(())
}

/// 从 `stego` 读取 `count * 8` 个字节并还原出 `count` 个数据字节。
///
/// # Errors
///
/// 数据在还原完成前耗尽时返回 `ErrorKind::UnexpectedEof`，不会静默截断。
pub fn extract_bytes<R: Read>(stego: &mut R, count: usize) -> io::Result<Vec<u8>> {
    let mut chunk = [0u8; BITS_PER_BYTE];
    let mut data = Vec::new();
    for _ in 0..count {
        stego.read_exact(&mut chunk)?;
        data.push(extract_byte(&chunk));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind};

    #[test]
    fn embeds_most_significant_bit_first() {
        let mut chunk = [0u8; 8];
        embed_byte(0x41, &mut chunk);
        assert_eq!(chunk, [0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn embedding_only_touches_the_lowest_bit() {
        let original = [0xFF, 0xFE, 0x80, 0x81, 0x10, 0x11, 0xAA, 0x55];
        let mut chunk = original;
        embed_byte(0b1010_0101, &mut chunk);

        for (before, after) in original.iter().zip(chunk.iter()) {
            assert_eq!(before & !0x1, after & !0x1);
        }
        assert_eq!(extract_byte(&chunk), 0b1010_0101);
    }

    #[test]
    fn stream_embedding_consumes_eight_carrier_bytes_per_byte() -> io::Result<()> {
        let mut carrier = Cursor::new(vec![0xF0u8; 20]);
        let mut out = Vec::new();

        embed_bytes(&mut carrier, &mut out, &[0xFF, 0x00])?;

        assert_eq!(out.len(), 16);
        assert_eq!(carrier.position(), 16);
        assert_eq!(&out[..8], &[0xF1; 8]);
        assert_eq!(&out[8..], &[0xF0; 8]);
        Ok(())
    }

    #[test]
    fn stream_extraction_reverses_embedding() -> io::Result<()> {
        let data = b"hidden";
        let mut out = Vec::new();
        embed_bytes(&mut Cursor::new(vec![0x5Au8; 64]), &mut out, data)?;

        let recovered = extract_bytes(&mut Cursor::new(out), data.len())?;
        assert_eq!(recovered, data);
        Ok(())
    }

    #[test]
    fn short_carrier_fails_with_unexpected_eof() {
        let mut out = Vec::new();
        let err = embed_bytes(&mut Cursor::new(vec![0u8; 7]), &mut out, &[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

        let err = extract_bytes(&mut Cursor::new(vec![0u8; 15]), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
