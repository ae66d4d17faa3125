//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部の協力者（永続ストア、タスク API、画面）への
//! インターフェースを提供し、実装の詳細を隠蔽します。

pub mod clock;
pub mod id_generator;
pub mod kv_store;
pub mod renderer;
pub mod task_source;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, TimestampIdGenerator, UuidGenerator, select_id_generator};
pub use self::kv_store::KeyValueStore;
pub use self::renderer::Renderer;
pub use self::task_source::TaskSource;
