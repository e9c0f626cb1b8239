//! 在巢狀 JSON 中依路徑取值，任何一層缺少或型別不符都回傳預設值而不是錯誤。
//!
//! 路徑片段預設視為物件的 key；若當前節點是陣列且片段可解析為整數，則視為索引。

use serde_json::Value;

/// 依序走訪 `path`，任一層找不到即回傳 `None`
pub fn get_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    })
}

pub fn get_path_or<'a>(root: &'a Value, path: &[&str], default: &'a Value) -> &'a Value {
    get_path(root, path).unwrap_or(default)
}

/// 取得路徑上的陣列；不存在或不是陣列時回傳空 slice
pub fn get_array<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    get_path(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn get_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    get_path(root, path).and_then(Value::as_str)
}

/// 整數，或內容為整數的字串
pub fn get_i64(root: &Value, path: &[&str]) -> Option<i64> {
    match get_path(root, path)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
