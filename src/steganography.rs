use std::io::{self, ErrorKind};

use image::RgbImage;

use crate::constants::{BITS_PER_CHAR, BITS_PER_PIXEL, LENGTH_FIELD_BITS, LENGTH_HEADER_PIXELS};
use crate::traversal::PixelTraversal;

fn set_lsb(value: u8, bit: u8) -> u8 {
    (value & 0xFE) | (bit & 1)
}

fn get_lsb(value: u8) -> u8 {
    value & 1
}

pub fn encode(image: &RgbImage, message: &str) -> Result<RgbImage, io::Error> {
    let (width, height) = image.dimensions();
    let pixels_in_image = u64::from(width) * u64::from(height);

    // 逐字符校验码点落在单字节范围内，同时统计字符数。
    let mut char_count: u64 = 0;
    for letter in message.chars() {
        if u32::from(letter) > u32::from(u8::MAX) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "The message contains a character outside the byte range: '{letter}' (U+{:04X}).",
                    u32::from(letter)
                ),
            ));
        }
        char_count += 1;
    }

    let total_bits = char_count * BITS_PER_CHAR as u64;
    let pixels_needed = total_bits.div_ceil(BITS_PER_PIXEL as u64);

    if pixels_needed + LENGTH_HEADER_PIXELS as u64 > pixels_in_image {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!(
                "The image is too small to hold this big of a message: {} pixels needed, {} available.",
                pixels_needed + LENGTH_HEADER_PIXELS as u64,
                pixels_in_image
            ),
        ));
    }

    let mut output = image.clone();
    let mut traversal = PixelTraversal::new(width, height);

    // 长度阶段：33 位定宽长度串只有 index 1..=32 被写入，
    // 首位被丢弃。这是协议原样保留的怪癖，不可"修正"。
    let mut length_bits =
        (1..LENGTH_FIELD_BITS).map(|i| ((total_bits >> (LENGTH_FIELD_BITS - 1 - i)) & 1) as u8);

    for (x, y) in (&mut traversal).take(LENGTH_HEADER_PIXELS) {
        let pixel = &mut output.get_pixel_mut(x, y).0;
        for channel in pixel.iter_mut() {
            let Some(bit) = length_bits.next() else {
                break;
            };
            *channel = set_lsb(*channel, bit);
        }
    }

    // 负载阶段：同一个遍历器继续向前，消息紧跟在头部像素之后。
    // 最后一个像素中未被消耗的通道保持原样。
    let mut message_bits = message.chars().flat_map(|letter| {
        let code = u32::from(letter);
        (0..BITS_PER_CHAR).map(move |i| ((code >> (BITS_PER_CHAR - 1 - i)) & 1) as u8)
    });

    for (x, y) in traversal.take(pixels_needed as usize) {
        let pixel = &mut output.get_pixel_mut(x, y).0;
        for channel in pixel.iter_mut() {
            let Some(bit) = message_bits.next() else {
                break;
            };
            *channel = set_lsb(*channel, bit);
        }
    }

    Ok(output)
}

pub fn decode(image: &RgbImage) -> String {
    let (width, height) = image.dimensions();
    let pixels_in_image = u64::from(width) * u64::from(height);
    let mut traversal = PixelTraversal::new(width, height);

    // 长度阶段：从 11 个像素收集 32 bits (第 11 个像素的 B 通道被跳过)。
    let mut num_bits_in_msg: u64 = 0;
    let mut collected = 0;
    for (x, y) in (&mut traversal).take(LENGTH_HEADER_PIXELS) {
        for channel in image.get_pixel(x, y).0 {
            if collected == LENGTH_FIELD_BITS - 1 {
                break;
            }
            num_bits_in_msg = (num_bits_in_msg << 1) | u64::from(get_lsb(channel));
            collected += 1;
        }
    }

    let pixels_needed = num_bits_in_msg.div_ceil(BITS_PER_PIXEL as u64);

    // 负载阶段：继续遍历，收集到声明的比特数为止。
    // 遍历器走出图像即停止，已收集的部分照常还原 (安全下界，不报错)。
    let capacity = num_bits_in_msg.min(pixels_in_image * BITS_PER_PIXEL as u64);
    let mut message_bits: Vec<u8> = Vec::with_capacity(capacity as usize);

    for (x, y) in traversal.take(pixels_needed as usize) {
        for channel in image.get_pixel(x, y).0 {
            if message_bits.len() as u64 == num_bits_in_msg {
                break;
            }
            message_bits.push(get_lsb(channel));
        }
    }

    // 每 8 bits 还原为一个字符；末组不足 8 bits 时按其实际位宽取值。
    let mut message = String::with_capacity(message_bits.len() / BITS_PER_CHAR + 1);
    for group in message_bits.chunks(BITS_PER_CHAR) {
        let code = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
        message.push(char::from(code));
    }

    message
}
