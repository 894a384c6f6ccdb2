/// 长度字段的定宽位数。
/// 协议将消息的比特长度渲染为 33 位的二进制串 (高位在前)，
/// 但首位 (index 0) 从不写入图像，实际嵌入的只有 index 1..=32。
pub const LENGTH_FIELD_BITS: usize = 33;

/// 长度头部占用的像素数。
/// 32 bits 按每像素 3 个通道 (R、G、B 各一个 LSB) 写入，
/// 因此需要 ceil(32 / 3) = 11 个像素，其中第 11 个像素的 B 通道不被触碰。
pub const LENGTH_HEADER_PIXELS: usize = 11;

/// 每个像素可承载的比特数 (R、G、B 三个通道的 LSB)。
pub const BITS_PER_PIXEL: usize = 3;

/// 单个字符占用的比特数。
/// 每个字符按其码点的 `u8` (8 bits) 处理，高位在前。
pub const BITS_PER_CHAR: usize = 8;

/// 输出图像使用的固定无损格式扩展名。
/// 有损压缩会破坏 LSB 数据，因此输出始终以 PNG 保存。
pub const OUTPUT_EXTENSION: &str = "png";
