/// BMP 文件的标准头部大小 (字节)。
/// 头部原样复制，不参与 LSB 隐写。
pub const HEADER_SIZE: usize = 54;

/// 载荷长度字段的字节数 (大端序 `u32`)。
pub const SIZE_FIELD_LEN: usize = 4;

/// 扩展名字段的字节数，右对齐，左侧补零。
pub const EXTENSION_FIELD_LEN: usize = 8;

/// 每个数据字节占用的载体字节数：每个载体字节只存 1 bit。
pub const BITS_PER_BYTE: usize = 8;

/// 容量预检查使用的固定开销：54 字节头部 + 32 个长度字段字节 + 64 个扩展名字段字节。
/// 判定条件为 `payload_len * 8 > carrier_len - 150`。
pub const CAPACITY_OVERHEAD: u64 = 150;
