//! 并发查询的汇集
//!
//! 同一请求内互不依赖的读取同时发出，第一个错误立即返回，
//! 其余尚未完成的查询被丢弃；不做重试。

use std::collections::HashMap;
use std::hash::Hash;

use futures::future::{try_join_all, BoxFuture};

/// 按名称并发执行一组同类型查询
///
/// 全部成功时返回 名称 → 结果 的映射；否则返回最先出现的错误。
pub async fn parallel<'a, K, T, E>(
    tasks: Vec<(K, BoxFuture<'a, Result<T, E>>)>,
) -> Result<HashMap<K, T>, E>
where
    K: Eq + Hash,
{
    let (names, futures): (Vec<K>, Vec<_>) = tasks.into_iter().unzip();
    let results = try_join_all(futures).await?;
    Ok(names.into_iter().zip(results).collect())
}
