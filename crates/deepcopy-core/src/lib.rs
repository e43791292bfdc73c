//! deepcopy-core
//!
//! Type-checked dispatch of "deep copy into" operations for values held
//! behind type-erased references.
//!
//! # モジュール構成
//! - **domain**: 動的型の記述子（TypeDescriptor, AnyValue）、MethodSignature、エラー型、CopyReport
//! - **typed**: 型付き capability API（DeepCopyInto trait, DynMethod trait, MethodRegistry）
//! - **app**: Dispatcher（検証パイプライン + panic guard）、DispatcherBuilder、DispatcherConfig
//!
//! # Example
//! ```
//! use deepcopy_core::{DeepCopyInto, Dispatcher};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl DeepCopyInto for Point {
//!     fn deep_copy_into(&self, target: &mut Self) {
//!         target.x = self.x;
//!         target.y = self.y;
//!     }
//! }
//!
//! let dispatcher = Dispatcher::builder()
//!     .register::<Point>()
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let source = Point { x: 1, y: 2 };
//! let mut target = Point::default();
//! dispatcher.copy_into(&source, &mut target).unwrap();
//! assert_eq!(target, Point { x: 1, y: 2 });
//! ```

pub mod app;
pub mod domain;
pub mod typed;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{BuildError, Dispatcher, DispatcherBuilder, DispatcherConfig};
pub use domain::{
    AnyValue, CopyError, CopyReport, ErrorKind, MethodSignature, SignatureError, TypeDescriptor,
};
pub use typed::{
    BindError, CloneInto, DEEP_COPY_INTO, DeepCopyInto, DynMethod, FnMethod, MethodRegistry,
    RegistryError, TypedDeepCopy,
};
