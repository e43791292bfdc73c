//! CopyReport - CopyError のシリアライズ可能なビュー
//!
//! 呼び出し元がエラーを構造化ログや API レスポンスとして扱うためのものです。

use serde::{Deserialize, Serialize};

use super::errors::{CopyError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    pub kind: ErrorKind,
    pub source_type: String,
    pub target_type: String,
    pub message: String,
}

impl From<&CopyError> for CopyReport {
    fn from(err: &CopyError) -> Self {
        Self {
            kind: err.kind(),
            source_type: err.source_type().to_string(),
            target_type: err.target_type().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<CopyError> for CopyReport {
    fn from(err: CopyError) -> Self {
        Self::from(&err)
    }
}
