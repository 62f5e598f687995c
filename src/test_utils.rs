//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::locale::LocaleId;
use crate::matrix::{
    ResourceMapping,
    ResourceNames,
};
use crate::tiers::PriorityTiers;

/// 文字列スライスからロケール ID のリストを作成する
pub(crate) fn locales(ids: &[&str]) -> Vec<LocaleId> {
    ids.iter().copied().map(LocaleId::from).collect()
}

/// テスト用の優先度ティアを作成する
///
/// # Arguments
/// * `critical` - 最優先のロケール
/// * `important` - 次点のロケール
/// * `standard` - 残りのロケール
pub(crate) fn tiers(critical: &[&str], important: &[&str], standard: &[&str]) -> PriorityTiers {
    PriorityTiers {
        critical: locales(critical),
        important: locales(important),
        standard: locales(standard),
    }
}

/// ロケールごとに 1 つのリソースを持つマッピングを作成する
pub(crate) fn resources(pairs: &[(&str, &str)]) -> ResourceMapping {
    pairs
        .iter()
        .map(|&(locale, resource)| (LocaleId::from(locale), ResourceNames::from(resource)))
        .collect()
}
