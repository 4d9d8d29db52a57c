use crate::utils::error::Result;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// 擷取群組 `file` 優先，其次是第 1 個群組
fn marker_filename<'h>(caps: &Captures<'h>) -> &'h str {
    caps.name("file")
        .or_else(|| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// 以 `resolve` 的結果取代 `body` 中每一個標記。
///
/// 每個比對到的區段整段被換掉，其餘內容原封不動；解析失敗時把錯誤訊息
/// 放在該標記的位置，不中斷後續標記。取代字串按字面插入，引言中的 `$1`
/// 之類的內容不會被展開。沒有任何標記時回傳借用的原始字串。
pub fn substitute<'b, F>(body: &'b str, pattern: &Regex, mut resolve: F) -> Cow<'b, str>
where
    F: FnMut(&str) -> Result<String>,
{
    if body.is_empty() {
        return Cow::Borrowed(body);
    }

    pattern.replace_all(body, |caps: &Captures<'_>| {
        let filename = marker_filename(caps);
        match resolve(filename) {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!("Quote marker '{}' left inline error: {}", filename, e);
                e.to_string()
            }
        }
    })
}
