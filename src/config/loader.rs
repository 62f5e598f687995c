//! 設定ファイルとリソースマッピングの読み込み関数

use std::io;
use std::path::Path;

use super::{
    CONFIG_FILE_NAME,
    ConfigError,
    MatrixSettings,
};
use crate::matrix::ResourceMapping;

/// `workspace_root` 直下の `.i18n-matrix.json` を読み込む
///
/// ファイルが無いことはエラーではなく `Ok(None)` で表す。
/// 存在確認と読み込みを分けず、`NotFound` だけを「未設定」とみなす。
///
/// # Errors
/// - `NotFound` 以外の I/O エラー
/// - JSON パースエラー
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<MatrixSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let settings = serde_json::from_str::<MatrixSettings>(&content)?;
    tracing::debug!(path = %config_path.display(), "Settings file read");
    Ok(Some(settings))
}

/// リソースマッピングファイルを読み込む
///
/// 値は文字列またはその配列: `{"pt_BR": "a.properties", "de": ["a.properties", "b.properties"]}`
///
/// # Errors
/// - ファイル読み込みエラー（ファイルが存在しない場合を含む）
/// - JSON パースエラー
pub fn load_resource_mapping(path: &Path) -> Result<ResourceMapping, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mapping: ResourceMapping = serde_json::from_str(&content)?;

    tracing::debug!(path = %path.display(), locales = mapping.len(), "Resource mapping loaded");
    Ok(mapping)
}
