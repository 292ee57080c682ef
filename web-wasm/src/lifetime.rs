//! ビューの寿命管理
//!
//! ページのマウント時に作成し、アンマウント時にキャンセルする。
//! 送信中の fetch は AbortController で中断し、遅れて届いた結果は捨てる。

use leptos::prelude::*;
use profpilot_common::CancelToken;
use web_sys::{AbortController, AbortSignal};

#[derive(Clone, Copy)]
pub struct ViewLifetime {
    token: StoredValue<CancelToken>,
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl ViewLifetime {
    /// 現在のオーナーに紐づけて作成
    pub fn attach() -> Self {
        let token = CancelToken::new();
        let lifetime = Self {
            token: StoredValue::new(token.clone()),
            controller: StoredValue::new_local(AbortController::new().ok()),
        };

        let controller = lifetime.controller;
        on_cleanup(move || {
            token.cancel();
            controller.try_with_value(|c| {
                if let Some(c) = c {
                    c.abort();
                }
            });
        });

        lifetime
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller
            .try_with_value(|c| c.as_ref().map(|c| c.signal()))
            .flatten()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token
            .try_with_value(|t| t.is_cancelled())
            .unwrap_or(true)
    }
}
