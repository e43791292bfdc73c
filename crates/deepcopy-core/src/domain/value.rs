//! Value - 型消去された値と、その動的型の記述子
//!
//! # 学習ポイント
//! - `Any` による downcast
//! - blanket impl で全ての `'static` な Sized 型を `AnyValue` にする
//! - 比較は `TypeId`、表示は `type_name`

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// TypeDescriptor は値の動的型を表す
///
/// 等価性は `TypeId` のみで判定します。`name` はエラーメッセージ用で、
/// `std::any::type_name` の出力（安定していない文字列）を保持します。
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// AnyValue は Dispatcher に渡す不透明な値
///
/// `&dyn Any` からは型名が取れないため、記述子を返すメソッドを足しています。
///
/// # 注意
/// `Box<dyn AnyValue>` 自身も `AnyValue` を実装します。
/// 中身を渡したい場合は `&*boxed` / `&mut *boxed` と明示的に deref してください。
///
/// `&mut dyn AnyValue` も同様で、`value.descriptor()` は autoref により
/// 参照型そのものの blanket impl を選びます。`(*value).descriptor()` と deref してから呼んでください。
pub trait AnyValue: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn descriptor(&self) -> TypeDescriptor;
}

impl<T: Any> AnyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }
}
