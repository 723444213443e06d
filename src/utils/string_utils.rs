//! # 문자열 유틸리티
//!
//! 쿼리 파라미터 정리와 검색 패턴 생성에 쓰이는 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Casa  ".to_string())), Some("Casa".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `?name=&address=` 처럼 빈 값으로 전달된 쿼리 파라미터를 None으로 취급합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct PropertyQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 접두어 일치용 정규식 패턴 생성
///
/// 사용자 입력의 정규식 메타 문자를 이스케이프한 뒤 `^`를 붙입니다.
///
/// ```rust,ignore
/// assert_eq!(prefix_pattern("Cra 7 #12"), "^Cra 7 \\#12");
/// assert_eq!(prefix_pattern("a.b"), "^a\\.b");
/// ```
pub fn prefix_pattern(value: &str) -> String {
    format!("^{}", regex::escape(value))
}
