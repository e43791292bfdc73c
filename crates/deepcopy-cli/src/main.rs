use std::collections::BTreeMap;
use std::path::Path;

use deepcopy_core::{
    AnyValue, CopyError, CopyReport, DeepCopyInto, Dispatcher, DispatcherBuilder, DispatcherConfig,
};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Point {
    x: i64,
    y: i64,
}

impl DeepCopyInto for Point {
    fn deep_copy_into(&self, target: &mut Self) {
        target.x = self.x;
        target.y = self.y;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct OtherType {
    name: String,
}

impl DeepCopyInto for OtherType {
    fn deep_copy_into(&self, target: &mut Self) {
        target.name.clone_from(&self.name);
    }
}

#[derive(Debug, Default)]
struct NoCopy;

/// キャッシュのエントリ。`clone_from` で十分なので Clone 経由で登録する
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct CacheEntry {
    key: String,
    tags: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct Locked {
    locked: bool,
}

impl DeepCopyInto for Locked {
    fn deep_copy_into(&self, target: &mut Self) {
        if target.locked {
            panic!("target is locked");
        }
        target.locked = self.locked;
    }
}

fn load_config(path: Option<&str>) -> Result<DispatcherConfig, String> {
    let Some(path) = path else {
        return Ok(DispatcherConfig::default());
    };
    let text = std::fs::read_to_string(Path::new(path))
        .map_err(|e| format!("read config {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("parse config {path}: {e}"))
}

fn build_dispatcher(config: DispatcherConfig) -> Result<Dispatcher, String> {
    DispatcherBuilder::with_config(config)
        .register::<Point>()
        .and_then(|b| b.register::<OtherType>())
        .and_then(|b| b.register::<Locked>())
        .and_then(|b| b.register_clone::<CacheEntry>())
        .map_err(|e| e.to_string())?
        .build()
        .map_err(|e| e.to_string())
}

/// 1 シナリオ実行して結果をログに出す
fn run(dispatcher: &Dispatcher, name: &str, source: &dyn AnyValue, target: &mut dyn AnyValue) {
    match dispatcher.copy_into(source, target) {
        Ok(()) => info!(scenario = name, "copied"),
        Err(err) => report(name, &err),
    }
}

fn report(name: &str, err: &CopyError) {
    let report = CopyReport::from(err);
    let json = serde_json::to_string(&report).unwrap_or_else(|_| report.message.clone());
    if err.is_validation() {
        warn!(scenario = name, kind = ?report.kind, report = %json, "copy rejected");
    } else {
        error!(scenario = name, kind = ?report.kind, report = %json, "copy failed");
    }
}

/// panic hook を一時的に無効化し、終了後に元の hook を戻す
fn with_quiet_panics<R>(f: impl FnOnce() -> R) -> R {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = f();
    std::panic::set_hook(previous_hook);
    result
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let dispatcher = match build_dispatcher(config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            error!(error = %e, "failed to build dispatcher");
            std::process::exit(1);
        }
    };
    info!(
        method = dispatcher.method_name(),
        types = ?dispatcher.registry().registered_types(),
        "dispatcher ready"
    );

    // (A) 同じ型: 成功
    let source = Point { x: 1, y: 2 };
    let mut target = Point::default();
    run(&dispatcher, "point", &source, &mut target);
    info!(point = ?target, "point after copy");

    // (B) 型が違う: TypeMismatch
    let mut other = OtherType::default();
    run(&dispatcher, "point-to-other", &source, &mut other);

    // (C) capability なし: MissingCapability
    run(&dispatcher, "no-copy", &NoCopy, &mut NoCopy);

    // (D) Clone 経由
    let entry = CacheEntry {
        key: "user:42".to_string(),
        tags: BTreeMap::from([("region".to_string(), "eu".to_string())]),
    };
    let mut slot = CacheEntry::default();
    run(&dispatcher, "cache-entry", &entry, &mut slot);
    match serde_json::to_string(&slot) {
        Ok(json) => info!(entry = %json, "cache entry after copy"),
        Err(e) => warn!(error = %e, "cache entry is not serializable"),
    }

    // (E) capability 内部の panic: Invocation
    with_quiet_panics(|| {
        run(&dispatcher, "locked", &Locked::default(), &mut Locked { locked: true })
    });
}
