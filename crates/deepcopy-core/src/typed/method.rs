//! DynMethod - object-safe な型消去メソッド
//!
//! # 学習ポイント
//! - Object-safe trait (DynMethod)
//! - Type erasure パターン (TypedDeepCopy<T> → DynMethod)
//! - 引数の束縛は downcast で行い、失敗は BindError として返す

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;

use crate::domain::MethodSignature;

use super::capability::DeepCopyInto;

/// 型消去された境界で receiver / 引数を束縛できなかった
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("expected {expected} argument(s), got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("receiver is not a {expected}")]
    Receiver { expected: &'static str },

    #[error("argument {index} is not a {expected}")]
    Argument { index: usize, expected: &'static str },
}

/// DynMethod は MethodRegistry に格納される型消去されたメソッド
///
/// # Object Safety
/// - ジェネリックなメソッドを持たない
/// - `Arc<dyn DynMethod>` として格納できる
///
/// `signature()` は検証用に宣言された形を返します。
/// `call()` は宣言と実際の束縛が食い違った場合に `BindError` を返します。
pub trait DynMethod: Send + Sync {
    fn signature(&self) -> MethodSignature;

    fn call(&self, receiver: &dyn Any, args: &mut [&mut dyn Any]) -> Result<(), BindError>;
}

fn bind_one<'a, T: Any>(
    receiver: &'a dyn Any,
    args: &'a mut [&mut dyn Any],
) -> Result<(&'a T, &'a mut T), BindError> {
    let receiver = receiver
        .downcast_ref::<T>()
        .ok_or(BindError::Receiver {
            expected: type_name::<T>(),
        })?;
    let actual = args.len();
    let [target] = args else {
        return Err(BindError::ArgumentCount {
            expected: 1,
            actual,
        });
    };
    let target = (**target)
        .downcast_mut::<T>()
        .ok_or(BindError::Argument {
            index: 0,
            expected: type_name::<T>(),
        })?;
    Ok((receiver, target))
}

/// `T: DeepCopyInto` を DynMethod に変換するアダプタ
pub struct TypedDeepCopy<T: DeepCopyInto> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeepCopyInto> TypedDeepCopy<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: DeepCopyInto> Default for TypedDeepCopy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeepCopyInto> DynMethod for TypedDeepCopy<T> {
    fn signature(&self) -> MethodSignature {
        MethodSignature::copy_into::<T>()
    }

    fn call(&self, receiver: &dyn Any, args: &mut [&mut dyn Any]) -> Result<(), BindError> {
        let (source, target) = bind_one::<T>(receiver, args)?;
        source.deep_copy_into(target);
        Ok(())
    }
}

/// `T: Clone` を `Clone::clone_from` 経由で DynMethod にするアダプタ
///
/// 所有データだけを持つ型なら `clone_from` がそのまま deep copy になります。
/// `Rc` / `Arc` を含む型では共有が残るので、`DeepCopyInto` を実装してください。
pub struct CloneInto<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone + Any> CloneInto<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Clone + Any> Default for CloneInto<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Any> DynMethod for CloneInto<T> {
    fn signature(&self) -> MethodSignature {
        MethodSignature::copy_into::<T>()
    }

    fn call(&self, receiver: &dyn Any, args: &mut [&mut dyn Any]) -> Result<(), BindError> {
        let (source, target) = bind_one::<T>(receiver, args)?;
        target.clone_from(source);
        Ok(())
    }
}

/// 明示的なシグネチャとクロージャから作る DynMethod
///
/// 外部クレートの型を橋渡しする場合などに使います。
/// 宣言したシグネチャは Dispatcher の検証にそのまま使われます。
pub struct FnMethod<F> {
    signature: MethodSignature,
    f: F,
}

impl<F> FnMethod<F>
where
    F: Fn(&dyn Any, &mut [&mut dyn Any]) -> Result<(), BindError> + Send + Sync,
{
    pub fn new(signature: MethodSignature, f: F) -> Self {
        Self { signature, f }
    }
}

impl<F> DynMethod for FnMethod<F>
where
    F: Fn(&dyn Any, &mut [&mut dyn Any]) -> Result<(), BindError> + Send + Sync,
{
    fn signature(&self) -> MethodSignature {
        self.signature.clone()
    }

    fn call(&self, receiver: &dyn Any, args: &mut [&mut dyn Any]) -> Result<(), BindError> {
        (self.f)(receiver, args)
    }
}

impl<F> fmt::Debug for FnMethod<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMethod")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
