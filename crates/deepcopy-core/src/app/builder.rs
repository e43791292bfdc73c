//! DispatcherBuilder - Dispatcher の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 開発体験の改善（明確なエラーメッセージ）

use std::any::Any;
use std::sync::Arc;

use crate::typed::{CloneInto, DeepCopyInto, DynMethod, MethodRegistry, RegistryError, TypedDeepCopy};

use super::config::DispatcherConfig;
use super::dispatcher::Dispatcher;

/// DispatcherBuilder は Dispatcher を構築
///
/// # 使用例
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .register::<Point>()?
///     .expect_type::<Point>()
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_type() / 設定ファイルの expected_types で期待される型を登録
/// - build() 時に「期待集合 ⊆ capability を持つ型の集合」をチェック
/// - 不足があれば BuildError を返す
pub struct DispatcherBuilder {
    registry: MethodRegistry,
    config: DispatcherConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing capabilities for types: {0:?}. These types were expected but not registered.")]
    MissingCapabilities(Vec<String>),
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// 設定から構築を始める
    ///
    /// 以降の register 系は `config.method_name` の名前で登録されます。
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: MethodRegistry::new(),
            config,
        }
    }

    pub fn register<T: DeepCopyInto>(self) -> Result<Self, RegistryError> {
        self.register_method::<T>(Arc::new(TypedDeepCopy::<T>::new()))
    }

    pub fn register_clone<T: Clone + Any>(self) -> Result<Self, RegistryError> {
        self.register_method::<T>(Arc::new(CloneInto::<T>::new()))
    }

    pub fn register_method<T: Any>(
        mut self,
        method: Arc<dyn DynMethod>,
    ) -> Result<Self, RegistryError> {
        self.registry
            .register_method::<T>(&self.config.method_name, method)?;
        Ok(self)
    }

    pub fn expect_type<T: Any>(mut self) -> Self {
        self.config
            .expected_types
            .push(std::any::type_name::<T>().to_string());
        self
    }

    pub fn expect_type_names(mut self, type_names: &[&str]) -> Self {
        self.config
            .expected_types
            .extend(type_names.iter().map(|name| name.to_string()));
        self
    }

    /// Dispatcher を構築
    ///
    /// # 検証
    /// - 期待される型が全て `method_name` の capability を持っているかチェック
    /// - 不足があれば BuildError::MissingCapabilities を返す
    pub fn build(self) -> Result<Dispatcher, BuildError> {
        let method_name = &self.config.method_name;
        let mut missing: Vec<String> = self
            .config
            .expected_types
            .iter()
            .filter(|name| !self.registry.has_method_named(name, method_name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing.sort();
            missing.dedup();
            return Err(BuildError::MissingCapabilities(missing));
        }
        Ok(Dispatcher::with_method_name(
            Arc::new(self.registry),
            method_name,
        ))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Inventory, NoCopy, OtherType, Point};

    #[test]
    fn test_build_success() {
        let dispatcher = DispatcherBuilder::new()
            .register::<Point>()
            .unwrap()
            .expect_type::<Point>()
            .build();
        assert!(dispatcher.is_ok());
    }

    #[test]
    fn test_build_missing_types() {
        let result = DispatcherBuilder::new()
            .register::<Point>()
            .unwrap()
            .expect_type::<Point>()
            .expect_type::<OtherType>()
            .expect_type::<NoCopy>()
            .build();

        let mut expected = vec![
            std::any::type_name::<OtherType>().to_string(),
            std::any::type_name::<NoCopy>().to_string(),
        ];
        expected.sort();
        assert!(matches!(
            result,
            Err(BuildError::MissingCapabilities(missing)) if missing == expected
        ));
    }

    #[test]
    fn test_build_without_expectations() {
        let dispatcher = DispatcherBuilder::default().build().unwrap();
        assert!(dispatcher.registry().is_empty());
        assert_eq!(dispatcher.method_name(), "DeepCopyInto");
    }

    #[test]
    fn test_config_method_name_is_used_for_registration_and_lookup() {
        let config = DispatcherConfig {
            method_name: "CopyInto".to_string(),
            expected_types: vec![std::any::type_name::<Inventory>().to_string()],
        };
        let dispatcher = DispatcherBuilder::with_config(config)
            .register_clone::<Inventory>()
            .unwrap()
            .build()
            .unwrap();

        let source = Inventory::with_items(&["washer"]);
        let mut target = Inventory::default();
        dispatcher.copy_into(&source, &mut target).unwrap();
        assert_eq!(target, source);
        assert_eq!(dispatcher.method_name(), "CopyInto");
    }

    #[test]
    fn test_expected_type_names_from_strings() {
        let result = DispatcherBuilder::new()
            .register::<Point>()
            .unwrap()
            .expect_type_names(&["not::Registered"])
            .build();
        assert!(matches!(
            result,
            Err(BuildError::MissingCapabilities(missing)) if missing == vec!["not::Registered".to_string()]
        ));
    }

    #[test]
    fn test_duplicate_registration_propagates() {
        let result = DispatcherBuilder::new()
            .register::<Point>()
            .unwrap()
            .register::<Point>();
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered { .. })));
    }
}
