//! # 入口处理逻辑模块
//!
//! 包含隐藏 (hide) 与恢复 (recover) 两个操作的高级业务逻辑。
//! 本模块负责图像文件的读取与保存、调用核心隐写算法以及向用户报告结果。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::constants::OUTPUT_EXTENSION;
use crate::steganography::{decode, encode};

/// 处理 'Hide' 操作的执行逻辑。
///
/// 负责读取载体图像、调用编码器将消息嵌入像素数据，
/// 并以固定的无损格式 (PNG) 保存到 `output_stem` 指定的输出标识下。
/// 返回实际写入的文件路径。
///
/// # Arguments
///
/// * `image` - 载体图像文件路径 (任意可解码的无损格式，如 PNG, BMP)。
/// * `message` - 要隐藏的消息，所有字符的码点必须落在 0..=255。
/// * `output_stem` - 输出标识；实际文件名为该标识加上 `.png` 扩展名。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像的像素数不足以容纳消息 (容量检查在任何写入之前完成)。
/// * 消息包含码点超出单字节范围的字符。
/// * 无法写入输出图像文件。
pub fn handle_hide(image: &Path, message: &str, output_stem: &Path) -> Result<PathBuf> {
    let carrier = image::open(image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let encoded = encode(&carrier, message).with_context(|| {
        format!(
            "Failed to hide the message in '{}'.",
            image.to_string_lossy().red().bold()
        )
    })?;

    let dest = output_stem.with_extension(OUTPUT_EXTENSION);

    encoded.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}

/// 处理 'Recover' 操作的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码器还原隐藏的消息，
/// 并将消息字符串返回给调用方。
///
/// 对不含隐写数据的图像不会报错，只会解出无意义的内容；
/// 声明长度超出图像容量时解码在图像边界处安全截断。
///
/// # Arguments
///
/// * `image` - 已隐藏消息数据的图像文件路径。
///
/// # Errors
///
/// 仅当无法读取或解码输入的图像文件时返回错误。
pub fn handle_recover(image: &Path) -> Result<String> {
    let picture = image::open(image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    Ok(decode(&picture))
}
