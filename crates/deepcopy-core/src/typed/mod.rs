//! Typed - 型付き capability API
//!
//! # 二層構造
//! - **表層（Typed）**: `DeepCopyInto` trait - 型ごとにオプトインする
//! - **内部（Dyn）**: `DynMethod` trait - object-safe, type erasure
//!
//! `MethodRegistry` が `TypeId -> { メソッド名 -> Arc<dyn DynMethod> }` を保持し、
//! Dispatcher は実行時にこれを引いて検証・呼び出しを行います。

pub mod capability;
pub mod method;
pub mod registry;

pub use self::capability::{DEEP_COPY_INTO, DeepCopyInto};
pub use self::method::{BindError, CloneInto, DynMethod, FnMethod, TypedDeepCopy};
pub use self::registry::{MethodRegistry, RegistryError};
