//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    MatrixSettings,
    loader,
};
use crate::matrix::ResourceMapping;

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: MatrixSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: MatrixSettings::default(), workspace_root: None }
    }

    /// ワークスペースの設定を読み込んで保持する
    ///
    /// 設定ファイルが無ければデフォルト設定を使う。検証に失敗した場合は
    /// 設定もワークスペースルートも変更しない。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: PathBuf) -> Result<(), ConfigError> {
        let settings = loader::load_from_workspace(&workspace_root)?.unwrap_or_default();
        self.replace(settings)?;
        self.workspace_root = Some(workspace_root);
        Ok(())
    }

    /// 現在の設定の複製に `overrides` を適用し、検証を通った場合だけ採用する
    ///
    /// コマンドライン引数による上書きに使う。
    ///
    /// # Errors
    /// - バリデーションエラー（失敗時は現在の設定を維持）
    pub fn apply_overrides(
        &mut self,
        overrides: impl FnOnce(&mut MatrixSettings),
    ) -> Result<(), ConfigError> {
        let mut candidate = self.current_settings.clone();
        overrides(&mut candidate);
        self.replace(candidate)
    }

    /// 検証済みの設定だけを `current_settings` に入れる
    fn replace(&mut self, settings: MatrixSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!(
            batch_size = settings.batch_size,
            max_parallel = settings.max_parallel,
            flat_locales = settings.locales.is_some(),
            resources_file = %settings.resources_file,
            "Settings accepted"
        );
        self.current_settings = settings;
        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &MatrixSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// リソースマッピングファイルのパスを取得
    ///
    /// 相対パスはワークスペースルートを基準に解決する
    #[must_use]
    pub fn resources_path(&self) -> PathBuf {
        let file = PathBuf::from(&self.current_settings.resources_file);
        match &self.workspace_root {
            Some(root) if file.is_relative() => root.join(file),
            _ => file,
        }
    }

    /// リソースマッピングを読み込む
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    pub fn load_resources(&self) -> Result<ResourceMapping, ConfigError> {
        loader::load_resource_mapping(&self.resources_path())
    }
}
