//! Domain model (type descriptors, signatures, errors, reports).

pub mod errors;
pub mod report;
pub mod signature;
pub mod value;

pub use self::errors::{CopyError, ErrorKind, SignatureError};
pub use self::report::CopyReport;
pub use self::signature::MethodSignature;
pub use self::value::{AnyValue, TypeDescriptor};
