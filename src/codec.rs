//! # 编解码核心模块
//!
//! 容器布局：
//!
//! ```text
//! [54 字节头部，原样复制]
//! [长度字段，4 字节大端序，占 32 个载体字节]
//! [扩展名字段，8 字节右对齐，占 64 个载体字节]
//! [载荷，每字节占 8 个载体字节]
//! [剩余载体字节，原样复制]
//! ```

use crate::constants::{
    BITS_PER_BYTE, CAPACITY_OVERHEAD, EXTENSION_FIELD_LEN, HEADER_SIZE, SIZE_FIELD_LEN,
};
use crate::container::{
    bytes_to_int, extension_from_bytes, extension_of, extension_to_bytes, int_to_bytes,
};
use crate::error::{Result, StegoError};
use crate::steganography::{embed_bytes, extract_bytes};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// 从隐写容器中还原出的载荷。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub extension: String,
    pub payload: Vec<u8>,
}

/// 长度为 `carrier_len` 的载体最多能容纳的载荷字节数。
pub fn capacity_of(carrier_len: u64) -> u64 {
    carrier_len.saturating_sub(CAPACITY_OVERHEAD) / BITS_PER_BYTE as u64
}

fn check_capacity(payload_len: usize, carrier_len: u64) -> Result<u32> {
    let required = payload_len as u64 * BITS_PER_BYTE as u64;
    let available = carrier_len.saturating_sub(CAPACITY_OVERHEAD);

    if required + CAPACITY_OVERHEAD > carrier_len {
        return Err(StegoError::Capacity { required, available });
    }

    u32::try_from(payload_len).map_err(|_| StegoError::Capacity { required, available })
}

/// 将载荷嵌入 `carrier`，结果写入 `out`。
///
/// `carrier_len` 为载体的总字节数，用于容量预检查；检查失败时不会向 `out` 写入任何内容。
///
/// # Errors
///
/// * 载荷放不下时返回 `StegoError::Capacity`。
/// * 读写失败时返回 `StegoError::Io`，此时 `out` 可能只写入了一部分。
pub fn encode_stream<R: Read, W: Write>(
    mut carrier: R,
    carrier_len: u64,
    payload: &[u8],
    extension: &str,
    mut out: W,
) -> Result<()> {
    let payload_len = check_capacity(payload.len(), carrier_len)?;

    let mut header = [0u8; HEADER_SIZE];
    carrier.read_exact(&mut header)?;
    out.write_all(&header)?;

    debug!("embedding size field: {payload_len} bytes");
    embed_bytes(&mut carrier, &mut out, &int_to_bytes(payload_len))?;

    debug!("embedding extension field: {extension:?}");
    embed_bytes(&mut carrier, &mut out, &extension_to_bytes(extension))?;

    debug!(
        "embedding payload at carrier offset {}",
        HEADER_SIZE + (SIZE_FIELD_LEN + EXTENSION_FIELD_LEN) * BITS_PER_BYTE
    );
    embed_bytes(&mut carrier, &mut out, payload)?;

    let tail = io::copy(&mut carrier, &mut out)?;
    debug!("copied {tail} trailing carrier bytes");

    out.flush()?;
    Ok(())
}

/// 从隐写容器中读取长度、扩展名与载荷。不校验长度字段是否合理。
///
/// # Errors
///
/// * 数据提前耗尽或读取失败时返回 `StegoError::Io`。
/// * 扩展名字段不是合法 UTF-8 时返回 `StegoError::Encoding`。
pub fn decode_stream<R: Read>(mut stego: R) -> Result<Decoded> {
    let mut header = [0u8; HEADER_SIZE];
    stego.read_exact(&mut header)?;

    let size = bytes_to_int(&extract_bytes(&mut stego, SIZE_FIELD_LEN)?);
    debug!("size field: {size} bytes");

    let extension = extension_from_bytes(&extract_bytes(&mut stego, EXTENSION_FIELD_LEN)?)?;
    debug!("extension field: {extension:?}");

    let payload = extract_bytes(&mut stego, size as usize)?;

    Ok(Decoded { extension, payload })
}

/// 将 `payload` 文件隐藏进 `carrier` 文件，生成 `output`。
///
/// 扩展名取自载荷文件名。`output` 已存在时会被覆盖。
///
/// # Errors
///
/// 同 [`encode_stream`]；另外任一文件无法打开时返回 `StegoError::Io`。
pub fn encode(carrier: &Path, payload: &Path, output: &Path) -> Result<()> {
    let payload_bytes = fs::read(payload)?;
    let extension = extension_of(payload);

    let carrier_file = File::open(carrier)?;
    let carrier_len = carrier_file.metadata()?.len();
    check_capacity(payload_bytes.len(), carrier_len)?;

    let out = BufWriter::new(File::create(output)?);
    encode_stream(
        BufReader::new(carrier_file),
        carrier_len,
        &payload_bytes,
        &extension,
        out,
    )?;

    info!(
        "hid {} bytes from {} in {}",
        payload_bytes.len(),
        payload.display(),
        output.display()
    );
    Ok(())
}

/// 从 `stego` 文件中还原载荷，写入 `<output_base>.<扩展名>` 并返回实际路径。
///
/// 扩展名为空时直接写入 `output_base`。
///
/// # Errors
///
/// 同 [`decode_stream`]；另外输出文件无法写入时返回 `StegoError::Io`。
pub fn decode(stego: &Path, output_base: &Path) -> Result<PathBuf> {
    let decoded = decode_stream(BufReader::new(File::open(stego)?))?;

    let target = output_path(output_base, &decoded.extension);
    fs::write(&target, &decoded.payload)?;

    info!(
        "recovered {} bytes from {} into {}",
        decoded.payload.len(),
        stego.display(),
        target.display()
    );
    Ok(target)
}

fn output_path(base: &Path, extension: &str) -> PathBuf {
    if extension.is_empty() {
        return base.to_path_buf();
    }

    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
