//! DeepCopyInto trait - 型ごとの copy-into capability
//!
//! 具体的なコピー処理は各型の実装者の責任です。
//! Dispatcher は「深さ」について何も保証せず、この実装に委譲するだけです。

use std::any::Any;

/// Dispatcher が capability を探すときの既定のメソッド名
pub const DEEP_COPY_INTO: &str = "DeepCopyInto";

/// DeepCopyInto は receiver の状態を全て target にコピーする
///
/// # 使用例
/// ```
/// use deepcopy_core::DeepCopyInto;
///
/// struct Tags {
///     names: Vec<String>,
/// }
///
/// impl DeepCopyInto for Tags {
///     fn deep_copy_into(&self, target: &mut Self) {
///         target.names.clear();
///         target.names.extend(self.names.iter().cloned());
///     }
/// }
/// ```
///
/// # Trait Bounds
/// - `Any`: `TypeId` で型を識別し downcast するため
/// - `Send + Sync` は要求しない: `Rc` / `RefCell` を持つ型もオプトインできる
pub trait DeepCopyInto: Any {
    fn deep_copy_into(&self, target: &mut Self);
}
