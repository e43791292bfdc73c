//! DispatcherConfig - Dispatcher の設定

use serde::{Deserialize, Serialize};

use crate::typed::DEEP_COPY_INTO;

/// DispatcherConfig は JSON などから読み込める設定
///
/// # フィールド
/// - `method_name`: capability として探すメソッド名（既定: `DeepCopyInto`）
/// - `expected_types`: build() 時に capability を持っていなければならない型名
///   （`std::any::type_name` の出力と完全一致で照合）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    pub method_name: String,
    pub expected_types: Vec<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            method_name: DEEP_COPY_INTO.to_string(),
            expected_types: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: DispatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DispatcherConfig::default());
        assert_eq!(config.method_name, "DeepCopyInto");
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let config: DispatcherConfig =
            serde_json::from_str(r#"{ "expected_types": ["app::Point"] }"#).unwrap();
        assert_eq!(config.method_name, DEEP_COPY_INTO);
        assert_eq!(config.expected_types, vec!["app::Point".to_string()]);
    }
}
