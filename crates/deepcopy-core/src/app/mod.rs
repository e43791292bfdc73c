//! App - Dispatcher とその構築
//!
//! # 主要コンポーネント
//! - **Dispatcher**: 検証パイプライン + スコープ付き panic guard
//! - **DispatcherBuilder**: 登録と起動時検証（Fail-fast）
//! - **DispatcherConfig**: メソッド名と期待される型の設定

pub mod builder;
pub mod config;
pub mod dispatcher;
mod guard;

pub use self::builder::{BuildError, DispatcherBuilder};
pub use self::config::DispatcherConfig;
pub use self::dispatcher::Dispatcher;
