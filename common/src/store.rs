//! 永続キーバリューストア
//!
//! ブラウザの localStorage、CLIの設定ディレクトリ内JSONファイル、
//! テスト用のメモリストアを同じトレイトで扱う。

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::handoff::{Handoff, HANDOFF_KEY, HANDOFF_VERSION};

/// 文字列キー/値の永続ストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// 引き継ぎオブジェクトの保存・読込
#[derive(Debug)]
pub struct HandoffStore<S> {
    store: S,
}

impl<S: KeyValueStore> HandoffStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// 引き継ぎを上書き保存
    pub fn save(&self, handoff: &Handoff) -> Result<()> {
        let json = serde_json::to_string(handoff)?;
        self.store.set(HANDOFF_KEY, &json)
    }

    /// 保存済みの引き継ぎを読込
    ///
    /// 未保存なら `Ok(None)`。バージョン不一致・JSON不正はエラー。
    pub fn load(&self) -> Result<Option<Handoff>> {
        let Some(raw) = self.store.get(HANDOFF_KEY)? else {
            return Ok(None);
        };

        let probe: VersionProbe = serde_json::from_str(&raw)?;
        if probe.version != HANDOFF_VERSION {
            return Err(Error::UnsupportedVersion(probe.version));
        }

        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(HANDOFF_KEY)
    }
}
