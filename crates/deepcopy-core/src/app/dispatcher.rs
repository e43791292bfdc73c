//! Dispatcher - copy-into capability の検証と呼び出し
//!
//! # 検証パイプライン（どれかが失敗した時点で終了、値は変更しない）
//! 1. 型の一致: source と target の動的型が同じ
//! 2. capability の探索: source の型が `DeepCopyInto` という名前のメソッドを持つ
//! 3. arity: receiver を含めてパラメータが 2 つ
//! 4. パラメータ型: receiver と引数が共に source の型
//!
//! 検証を通過した後の呼び出しだけを panic guard で囲みます。

use std::any::Any;
use std::sync::Arc;

use crate::domain::{AnyValue, CopyError, SignatureError, TypeDescriptor};
use crate::typed::{DEEP_COPY_INTO, DynMethod, MethodRegistry};

use super::builder::DispatcherBuilder;
use super::guard::catch_fault;

const COPY_INTO_ARITY: usize = 2;

/// Dispatcher は型消去された値同士の deep copy を仲介する
///
/// 呼び出し間で状態を持たず、`Clone` で安価に共有できます。
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<MethodRegistry>,
    method_name: Arc<str>,
}

impl Dispatcher {
    pub fn new(registry: Arc<MethodRegistry>) -> Self {
        Self::with_method_name(registry, DEEP_COPY_INTO)
    }

    pub fn with_method_name(registry: Arc<MethodRegistry>, method_name: &str) -> Self {
        Self {
            registry,
            method_name: Arc::from(method_name),
        }
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// `source` の状態を `target` に deep copy する
    ///
    /// 成功時は `target` が `source` のコピーになり、`source` は変更されません。
    /// 失敗時はエラーを返すだけで、ログ出力や panic の伝播はしません。
    pub fn copy_into(
        &self,
        source: &dyn AnyValue,
        target: &mut dyn AnyValue,
    ) -> Result<(), CopyError> {
        // `&mut dyn AnyValue` is itself an `AnyValue`; deref so the vtable answers.
        let source_type = (*source).descriptor();
        let target_type = (*target).descriptor();
        let method = self.resolve(source_type, target_type)?;

        let receiver: &dyn Any = (*source).as_any();
        let mut args: [&mut dyn Any; 1] = [(*target).as_any_mut()];
        let outcome = catch_fault(|| method.call(receiver, &mut args));

        let message = match outcome {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(bind)) => bind.to_string(),
            Err(fault) => fault,
        };
        Err(CopyError::Invocation {
            method: self.method_name.to_string(),
            source_type: source_type.name(),
            target_type: target_type.name(),
            message,
        })
    }

    /// 値に触れずに検証パイプラインだけを実行する
    ///
    /// コンテナが格納前に「この型はコピー可能か」を確かめる用途を想定しています。
    pub fn check(&self, source: TypeDescriptor, target: TypeDescriptor) -> Result<(), CopyError> {
        self.resolve(source, target).map(|_| ())
    }

    pub fn supports<T: Any>(&self) -> bool {
        let descriptor = TypeDescriptor::of::<T>();
        self.check(descriptor, descriptor).is_ok()
    }

    fn resolve(
        &self,
        source: TypeDescriptor,
        target: TypeDescriptor,
    ) -> Result<Arc<dyn DynMethod>, CopyError> {
        if source != target {
            return Err(CopyError::TypeMismatch {
                source_type: source.name(),
                target_type: target.name(),
            });
        }

        let method = self
            .registry
            .method(source.id(), &self.method_name)
            .ok_or_else(|| CopyError::MissingCapability {
                type_name: source.name(),
                method: self.method_name.to_string(),
            })?;

        let signature = method.signature();
        if signature.arity() != COPY_INTO_ARITY {
            return Err(SignatureError::Arity {
                type_name: source.name(),
                method: self.method_name.to_string(),
                expected: COPY_INTO_ARITY,
                actual: signature.arity(),
            }
            .into());
        }

        for (index, param) in signature.params().iter().enumerate() {
            if *param != source {
                return Err(SignatureError::ParamType {
                    type_name: source.name(),
                    method: self.method_name.to_string(),
                    index,
                    expected: source.name(),
                    actual: param.name(),
                }
                .into());
            }
        }

        Ok(method)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("method_name", &self.method_name)
            .field("registered_types", &self.registry.registered_types())
            .finish()
    }
}
