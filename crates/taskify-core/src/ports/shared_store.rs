//! SharedStore port - すべてのコンテキストから届く永続 key-value ストア
//!
//! スナップショットと言語設定の source of truth。どのコンポーネントも
//! 他方が生きているかを知れないので、ストアが唯一の調停点でもある。
//!
//! # 設計原則
//! - `put` は値全体をアトミックに置き換える。読み手には古い値か新しい値の
//!   どちらかが見え、混ざることはない。書き手が途中で落ちても古い値が残る。
//! - コンテキストをまたぐロックはない。同じキーに 2 つの書き手が競合すると
//!   両方成功し、後の rename が勝つ。もう一方の更新は失われる
//!   （last writer wins を受け入れる）。
//! - 読み込みはローカルかつ同期。描画はホストの時間制限内で走るので、
//!   実装はローカル I/O 以外でブロックしてはならない。

use crate::domain::StoreError;

pub trait SharedStore: Send + Sync {
    /// Current value of `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the whole value of `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
