use chrono::{DateTime, Utc};

/// 時刻ポート
///
/// 延滞判定の評価時刻を供給する。テストでは固定時刻に差し替える。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
