//! # 图像格式签名模块
//!
//! 通过文件头部魔数（magic bytes）识别图像格式，不信任文件名后缀。
//!
//! ## 功能
//! - 签名注册表：追加新格式只需加一个枚举变体、一个判定函数和一行注册
//! - 从可读流嗅探格式，只读取固定长度的头部前缀
//! - 格式名到规范后缀的映射（jpeg -> jpg）
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `error.rs`

use crate::error::{ImgextError, Result};
use std::fmt;
use std::io::Read;

/// 签名判定所需的头部字节数
pub const HEADER_LEN: usize = 16;

/// 可识别的图像格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// 格式的规范短名
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// 规范文件后缀，与格式名不同时以此为准
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            other => other.name(),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单条格式签名：格式 + 头部判定函数
struct Signature {
    format: ImageFormat,
    matches: fn(&[u8]) -> bool,
}

/// 已注册的签名表，按此顺序逐条匹配
const SIGNATURES: &[Signature] = &[
    Signature {
        format: ImageFormat::Png,
        matches: is_png,
    },
    Signature {
        format: ImageFormat::Jpeg,
        matches: is_jpeg,
    },
    Signature {
        format: ImageFormat::Gif,
        matches: is_gif,
    },
    Signature {
        format: ImageFormat::WebP,
        matches: is_webp,
    },
    Signature {
        format: ImageFormat::Tiff,
        matches: is_tiff,
    },
    Signature {
        format: ImageFormat::Bmp,
        matches: is_bmp,
    },
];

/// PNG: 89 50 4E 47 0D 0A 1A 0A
fn is_png(header: &[u8]) -> bool {
    header.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
}

/// JPEG: FF D8 FF（覆盖 JFIF/EXIF 等全部变体）
fn is_jpeg(header: &[u8]) -> bool {
    header.starts_with(&[0xFF, 0xD8, 0xFF])
}

/// GIF: GIF87a 或 GIF89a
fn is_gif(header: &[u8]) -> bool {
    header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a")
}

/// WebP: RIFF 容器，第 8 字节起为 WEBP
fn is_webp(header: &[u8]) -> bool {
    header.len() >= 12 && header.starts_with(b"RIFF") && &header[8..12] == b"WEBP"
}

/// TIFF: II*\0（小端）或 MM\0*（大端）
fn is_tiff(header: &[u8]) -> bool {
    header.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || header.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
}

/// BMP: BM
fn is_bmp(header: &[u8]) -> bool {
    header.starts_with(b"BM")
}

/// 从头部字节判定图像格式
pub fn detect_format(header: &[u8]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|sig| (sig.matches)(header))
        .map(|sig| sig.format)
}

/// 从可读流读取头部前缀并分类
///
/// 最多读取 [`HEADER_LEN`] 字节，短读（截断文件、空文件）不报 I/O 错，
/// 直接落入签名不匹配的分支。
pub fn sniff_format<R: Read>(reader: &mut R) -> Result<ImageFormat> {
    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = reader
            .read(&mut header[filled..])
            .map_err(|e| ImgextError::ClassifyFailed { source: e })?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    detect_format(&header[..filled]).ok_or(ImgextError::UnrecognizedFormat)
}
