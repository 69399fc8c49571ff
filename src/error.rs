use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizeFitError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("サイズ表が不正: {0}")]
    InvalidTable(String),

    #[error("製品が見つかりません: {0}")]
    UnknownProduct(String),

    #[error("採寸コードが不正: {0}")]
    UnknownCode(String),

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SizeFitError>;
