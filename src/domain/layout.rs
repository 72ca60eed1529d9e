//! 页面布局
//!
//! 将文本行放置到固定尺寸的页面画布上：光标从页顶边距开始逐行下移，
//! 越过底边距后停止，未放置的行原样返回给调用方决定去向

use serde::{Deserialize, Serialize};

/// 页面几何配置
///
/// 默认值对应 Letter 规格页面（612 x 794），所有字段均可通过配置调整
#[derive(Debug, Clone, Deserialize)]
pub struct PageGeometry {
    /// 页面宽度
    #[serde(default = "default_width")]
    pub width: f64,

    /// 页面高度
    #[serde(default = "default_height")]
    pub height: f64,

    /// 顶部边距（距页顶）
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,

    /// 底部边距（距页底）
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f64,

    /// 行起始横坐标
    #[serde(default = "default_left_origin")]
    pub left_origin: f64,

    /// 行高
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    /// 字号
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_width() -> f64 {
    612.0
}

fn default_height() -> f64 {
    794.0
}

fn default_top_margin() -> f64 {
    70.0
}

fn default_bottom_margin() -> f64 {
    60.0
}

fn default_left_origin() -> f64 {
    60.0
}

fn default_line_height() -> f64 {
    14.0
}

fn default_font_size() -> f64 {
    12.0
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            top_margin: default_top_margin(),
            bottom_margin: default_bottom_margin(),
            left_origin: default_left_origin(),
            line_height: default_line_height(),
            font_size: default_font_size(),
        }
    }
}

/// 单行放置指令
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// 单页放置结果
///
/// `remainder` 为未放入本页的行，顺序与原文一致；是否续页由调用方决定
#[derive(Debug, Clone)]
pub struct Placement {
    pub lines: Vec<PlacedLine>,
    pub remainder: Vec<String>,
}

impl Placement {
    pub fn is_exhausted(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// 将文本按行放置到一页画布上
///
/// 光标从 `height - top_margin` 开始，每放一行下移 `line_height`；
/// 光标低于 `bottom_margin` 时停止，当前行及其后所有行进入 remainder。
/// 纯几何计算，不会失败。
pub fn place_lines(text: &str, geometry: &PageGeometry) -> Placement {
    let mut lines = Vec::new();
    let mut remainder = Vec::new();
    let mut cursor = geometry.height - geometry.top_margin;

    for line in text.split('\n') {
        if cursor < geometry.bottom_margin {
            remainder.push(line.to_string());
            continue;
        }
        lines.push(PlacedLine {
            text: line.to_string(),
            x: geometry.left_origin,
            y: cursor,
        });
        cursor -= geometry.line_height;
    }

    Placement { lines, remainder }
}
