//! MethodRegistry - 型ごとのメソッド集合の登録と管理
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権
//!
//! 起動時に構築（mutable）し、実行時は Dispatcher から読み取り専用で使います。

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::TypeDescriptor;

use super::capability::{DEEP_COPY_INTO, DeepCopyInto};
use super::method::{CloneInto, DynMethod, TypedDeepCopy};

struct TypeEntry {
    descriptor: TypeDescriptor,
    methods: HashMap<String, Arc<dyn DynMethod>>,
}

/// MethodRegistry は型ごとに名前付きメソッドを保持する
///
/// # 使用例
/// ```
/// use std::any::TypeId;
/// use deepcopy_core::{DEEP_COPY_INTO, MethodRegistry};
///
/// #[derive(Clone)]
/// struct Settings {
///     name: String,
/// }
///
/// let mut registry = MethodRegistry::new();
/// registry.register_clone::<Settings>().unwrap();
/// assert!(registry.method(TypeId::of::<Settings>(), DEEP_COPY_INTO).is_some());
/// ```
#[derive(Default)]
pub struct MethodRegistry {
    types: HashMap<TypeId, TypeEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("method '{method}' is already registered for type {type_name}")]
    AlreadyRegistered {
        type_name: &'static str,
        method: String,
    },
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// `T: DeepCopyInto` を既定の名前（`DeepCopyInto`）で登録
    pub fn register<T: DeepCopyInto>(&mut self) -> Result<(), RegistryError> {
        self.register_as::<T>(DEEP_COPY_INTO)
    }

    /// `T: DeepCopyInto` を任意の名前で登録
    pub fn register_as<T: DeepCopyInto>(&mut self, name: &str) -> Result<(), RegistryError> {
        self.register_method::<T>(name, Arc::new(TypedDeepCopy::<T>::new()))
    }

    /// `T: Clone` を `Clone::clone_from` 経由で既定の名前に登録
    pub fn register_clone<T: Clone + Any>(&mut self) -> Result<(), RegistryError> {
        self.register_method::<T>(DEEP_COPY_INTO, Arc::new(CloneInto::<T>::new()))
    }

    /// 任意の DynMethod を `T` のメソッド集合に追加
    ///
    /// シグネチャはここでは検証しません（Dispatcher が呼び出し時に検証します）。
    pub fn register_method<T: Any>(
        &mut self,
        name: &str,
        method: Arc<dyn DynMethod>,
    ) -> Result<(), RegistryError> {
        let entry = self.entry::<T>();
        if entry.methods.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered {
                type_name: entry.descriptor.name(),
                method: name.to_string(),
            });
        }
        debug!(
            type_name = entry.descriptor.name(),
            method = name,
            signature = %method.signature(),
            "registered method"
        );
        entry.methods.insert(name.to_string(), method);
        Ok(())
    }

    /// メソッドを持たない型として `T` を登録
    pub fn register_type<T: Any>(&mut self) {
        self.entry::<T>();
    }

    fn entry<T: Any>(&mut self) -> &mut TypeEntry {
        let descriptor = TypeDescriptor::of::<T>();
        self.types
            .entry(descriptor.id())
            .or_insert_with(|| TypeEntry {
                descriptor,
                methods: HashMap::new(),
            })
    }

    pub fn method(&self, type_id: TypeId, name: &str) -> Option<Arc<dyn DynMethod>> {
        self.types.get(&type_id)?.methods.get(name).cloned()
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.types.contains_key(&type_id)
    }

    /// `type_name` の型が `method` を持つか（設定ファイルの型名照合用）
    pub fn has_method_named(&self, type_name: &str, method: &str) -> bool {
        self.types
            .values()
            .any(|entry| entry.descriptor.name() == type_name && entry.methods.contains_key(method))
    }

    /// 登録済みの型名（ソート済み）
    pub fn registered_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .types
            .values()
            .map(|entry| entry.descriptor.name().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
