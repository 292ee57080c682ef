//! ビュー寿命に紐づくキャンセルトークン

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 共有キャンセルフラグ
///
/// クローンは同じフラグを共有する。一度キャンセルされると戻らない。
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
