//! # 像素遍历模块
//!
//! 编码器与解码器共享的遍历原语：从图像右下角出发，沿行向左移动，
//! 越过左边缘后回到最右列并上移一行，直至走出图像顶端。
//! 遍历顺序是编码与解码之间唯一的"协议"，两侧必须逐像素一致。

/// 一个惰性的、有限的像素坐标序列。
///
/// 起点为 `(width - 1, height - 1)`；每步 x 减 1，x 越过左边缘时
/// 重置为 `width - 1` 且 y 减 1；y 低于 0 时序列结束且不再产生任何坐标。
/// 宽或高为 0 的图像产生空序列。
#[derive(Debug, Clone)]
pub struct PixelTraversal {
    width: u32,
    x: i64,
    y: i64,
}

impl PixelTraversal {
    /// 创建一个从图像右下角开始的新遍历器。
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            x: i64::from(width) - 1,
            y: i64::from(height) - 1,
        }
    }
}

impl Iterator for PixelTraversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.x < 0 || self.y < 0 {
            return None;
        }

        let coord = (self.x as u32, self.y as u32);

        self.x -= 1;
        if self.x < 0 {
            self.x = i64::from(self.width) - 1;
            self.y -= 1;
        }

        Some(coord)
    }
}
