//! Scoped panic guard around a single reflective call.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// `f` を実行し、panic した場合はそのメッセージを `Err` で返す
///
/// `AssertUnwindSafe` を使うため、panic 後の target は途中まで書き換わっている可能性があります。
pub(crate) fn catch_fault<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
