//! Errors - Dispatcher が返すエラー型と分類
//!
//! 全てのエラーは呼び出し元に返され、内部でログ出力はしません。
//! メッセージには関係する具体型の名前を必ず含めます。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ErrorKind はエラーの分類
///
/// - TypeMismatch / MissingCapability / Signature: 検証フェーズ（値は一切変更されていない）
/// - Invocation: 呼び出しフェーズ（target が途中まで書き換わっている可能性がある）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TypeMismatch,
    MissingCapability,
    Signature,
    Invocation,
}

/// capability は存在するが形が合わない
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error(
        "{type_name}'s {method} requires an unexpected number of parameters. expected {expected}, requiring {actual}"
    )]
    Arity {
        type_name: &'static str,
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "{type_name}'s {method} requires an unexpected type for parameter {index}. expected {expected}, requiring {actual}"
    )]
    ParamType {
        type_name: &'static str,
        method: String,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("can not deep copy different types: from {source_type} to {target_type}")]
    TypeMismatch {
        source_type: &'static str,
        target_type: &'static str,
    },

    #[error("type {type_name} does not have a {method} method")]
    MissingCapability {
        type_name: &'static str,
        method: String,
    },

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("error invoking {method} from {source_type} to {target_type}: {message}")]
    Invocation {
        method: String,
        source_type: &'static str,
        target_type: &'static str,
        message: String,
    },
}

impl CopyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CopyError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CopyError::MissingCapability { .. } => ErrorKind::MissingCapability,
            CopyError::Signature(_) => ErrorKind::Signature,
            CopyError::Invocation { .. } => ErrorKind::Invocation,
        }
    }

    /// 検証フェーズで失敗したか（target は変更されていない）
    pub fn is_validation(&self) -> bool {
        !matches!(self, CopyError::Invocation { .. })
    }

    /// source 側の型名
    pub fn source_type(&self) -> &'static str {
        match self {
            CopyError::TypeMismatch { source_type, .. } => *source_type,
            CopyError::MissingCapability { type_name, .. } => *type_name,
            CopyError::Signature(SignatureError::Arity { type_name, .. }) => *type_name,
            CopyError::Signature(SignatureError::ParamType { type_name, .. }) => *type_name,
            CopyError::Invocation { source_type, .. } => *source_type,
        }
    }

    /// target 側の型名（型が一致している場合は source と同じ）
    pub fn target_type(&self) -> &'static str {
        match self {
            CopyError::TypeMismatch { target_type, .. } => *target_type,
            CopyError::Invocation { target_type, .. } => *target_type,
            other => other.source_type(),
        }
    }
}
