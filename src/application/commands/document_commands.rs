//! Document Commands - 文档处理命令

/// 翻译整篇文档命令
///
/// 语言标识直接透传给远程翻译服务
#[derive(Debug, Clone)]
pub struct TranslateDocument {
    pub source_lang: String,
    pub target_lang: String,
}

/// 识别图片文字并排版命令
#[derive(Debug, Clone)]
pub struct RecognizeImage {
    /// 图片原始字节
    pub image: Vec<u8>,
    /// 原始文件名（用于格式校验与表单字段）
    pub file_name: String,
    /// 识别语言标识
    pub lang: String,
}
