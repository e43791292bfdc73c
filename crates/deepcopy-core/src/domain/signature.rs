//! MethodSignature - 型消去されたメソッドのパラメータ型
//!
//! receiver を先頭パラメータとして数えます。
//! `deep_copy_into(&self, target: &mut Self)` なら `[Self, Self]`（arity 2）です。

use std::fmt;

use super::value::TypeDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    params: Vec<TypeDescriptor>,
}

impl MethodSignature {
    pub fn new(params: Vec<TypeDescriptor>) -> Self {
        Self { params }
    }

    /// `T` の copy-into に期待される形: receiver と引数が共に `T`
    pub fn copy_into<T: 'static>() -> Self {
        let param = TypeDescriptor::of::<T>();
        Self::new(vec![param, param])
    }

    /// receiver を含むパラメータ数
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn receiver(&self) -> Option<TypeDescriptor> {
        self.param(0)
    }

    pub fn param(&self, index: usize) -> Option<TypeDescriptor> {
        self.params.get(index).copied()
    }

    pub fn params(&self) -> &[TypeDescriptor] {
        &self.params
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.name())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{OtherType, Point};

    #[test]
    fn test_copy_into_shape_counts_receiver() {
        let signature = MethodSignature::copy_into::<Point>();
        assert_eq!(signature.arity(), 2);
        assert_eq!(signature.receiver(), Some(TypeDescriptor::of::<Point>()));
        assert_eq!(signature.param(1), Some(TypeDescriptor::of::<Point>()));
        assert_eq!(signature.param(2), None);
    }

    #[test]
    fn test_empty_signature_has_no_receiver() {
        let signature = MethodSignature::new(vec![]);
        assert_eq!(signature.arity(), 0);
        assert!(signature.receiver().is_none());
    }

    #[test]
    fn test_display_lists_parameter_types() {
        let signature = MethodSignature::new(vec![
            TypeDescriptor::of::<Point>(),
            TypeDescriptor::of::<OtherType>(),
        ]);
        let text = signature.to_string();
        assert!(text.starts_with('('));
        assert!(text.contains("Point, "));
        assert!(text.ends_with("OtherType)"));
    }
}
