//! IdGenerator port - Note ID 生成の抽象化
//!
//! NoteStore は ID の作り方を知らない。戦略は構築時に一度だけ選ぶ。
//!
//! # 実装
//! - **UuidGenerator**: OS の乱数源を使う UUID v4（優先）
//! - **TimestampIdGenerator**: `<unix millis>-<hex>` 形式（OS 乱数源が使えない環境向け）

use crate::domain::NoteId;
use crate::ports::Clock;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;
use uuid::Uuid;

/// IdGenerator は Note の ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> NoteId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn generate_id(&self) -> NoteId {
        (**self).generate_id()
    }
}

/// UUID v4 ベースの ID 生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> NoteId {
        NoteId::new(Uuid::new_v4().to_string())
    }
}

/// 時刻 + 乱数サフィックスの ID 生成器
///
/// 乱数は時刻で seed した StdRng から取る（OS 乱数源に依存しない）。
pub struct TimestampIdGenerator<C> {
    clock: C,
    rng: Mutex<StdRng>,
}

impl<C: Clock> TimestampIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        let seed = clock.now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self {
            clock,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl<C: Clock> IdGenerator for TimestampIdGenerator<C> {
    fn generate_id(&self) -> NoteId {
        let millis = self.clock.now().timestamp_millis();
        let suffix: u64 = match self.rng.lock() {
            Ok(mut rng) => rng.r#gen(),
            Err(poisoned) => poisoned.into_inner().r#gen(),
        };
        NoteId::new(format!("{millis}-{suffix:x}"))
    }
}

/// プラットフォームに合わせて ID 戦略を選ぶ
///
/// OS の乱数源から読めれば UUID、読めなければ時刻ベースにフォールバックする。
pub fn select_id_generator<C: Clock + 'static>(clock: C) -> Box<dyn IdGenerator> {
    let mut probe = [0u8; 16];
    match OsRng.try_fill_bytes(&mut probe) {
        Ok(()) => Box::new(UuidGenerator),
        Err(e) => {
            tracing::warn!(error = %e, "OS random source unavailable; falling back to timestamp ids");
            Box::new(TimestampIdGenerator::new(clock))
        }
    }
}
