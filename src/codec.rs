//! # 图像编解码边界
//!
//! 封装 libheif 解码与 `image` crate 的 JPEG 编码。
//!
//! ## 功能
//! - 进程级 libheif 一次性初始化
//! - HEIF 主图像解码（含 alpha 时解码为 RGBA）
//! - 按需转换为 RGB
//! - 指定质量编码 JPEG（临时文件 + 重命名，失败不留半成品）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `libheif-rs` 解码、`image` 编码

use crate::error::{HeiconvError, Result};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::sync::OnceLock;

static LIB_HEIF: OnceLock<LibHeif> = OnceLock::new();

/// 获取进程级 libheif 实例（惰性初始化，重复调用幂等）
fn lib_heif() -> &'static LibHeif {
    LIB_HEIF.get_or_init(LibHeif::new)
}

/// 解码 HEIF 文件的主图像
///
/// 带 alpha 通道的源解码为 RGBA，其余解码为 RGB。
pub fn decode_heif(path: &Path) -> Result<DynamicImage> {
    let data = fs::read(path).map_err(|e| HeiconvError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let decode_err = |reason: String| HeiconvError::DecodeError {
        path: path.display().to_string(),
        reason,
    };

    let ctx = HeifContext::read_from_bytes(&data).map_err(|e| decode_err(e.to_string()))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| decode_err(e.to_string()))?;

    let has_alpha = handle.has_alpha_channel();
    let chroma = if has_alpha {
        RgbChroma::Rgba
    } else {
        RgbChroma::Rgb
    };
    let heif_image = lib_heif()
        .decode(&handle, ColorSpace::Rgb(chroma), None)
        .map_err(|e| decode_err(e.to_string()))?;

    let width = heif_image.width();
    let height = heif_image.height();
    let planes = heif_image.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| decode_err("no interleaved pixel plane".to_string()))?;

    // 逐行拷贝，剥离 stride 行尾填充
    let bytes_per_pixel = if has_alpha { 4 } else { 3 };
    let row_len = width as usize * bytes_per_pixel;
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in 0..height as usize {
        let start = row * plane.stride;
        let line = plane
            .data
            .get(start..start + row_len)
            .ok_or_else(|| decode_err("pixel plane shorter than expected".to_string()))?;
        pixels.extend_from_slice(line);
    }

    let image = if has_alpha {
        RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
    } else {
        RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
    };
    image.ok_or_else(|| decode_err("decoded pixel buffer has wrong size".to_string()))
}

/// 按需转换为 RGB（JPEG 不支持 alpha 等色彩模式）
pub fn to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}

/// 以指定质量编码 JPEG
///
/// 先写入同目录临时文件，编码成功后重命名到目标路径。
pub fn write_jpeg(image: &RgbImage, output_path: &Path, quality: u8) -> Result<()> {
    let temp_path = output_path.with_extension("jpg.tmp");

    let file = fs::File::create(&temp_path).map_err(|e| HeiconvError::FileWriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encode_result = {
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        encoder.encode_image(image)
    };
    if let Err(e) = encode_result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(HeiconvError::EncodeError {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        });
    }

    // rename 之前必须完成 flush
    if let Err(e) = writer.into_inner() {
        let _ = fs::remove_file(&temp_path);
        return Err(HeiconvError::FileWriteError {
            path: temp_path.display().to_string(),
            source: e.into_error(),
        });
    }

    fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        HeiconvError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        }
    })
}

/// 单文件转换：解码 -> RGB -> JPEG
pub fn convert_file(input_path: &Path, output_path: &Path, quality: u8) -> Result<()> {
    let image = decode_heif(input_path)?;
    let rgb = to_rgb(image);
    write_jpeg(&rgb, output_path, quality)
}
