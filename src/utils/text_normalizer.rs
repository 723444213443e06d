//! 검색용 텍스트 정규화
//!
//! 매물 이름/주소를 소문자 + 발음 구별 기호 제거 형태로 바꿔서
//! `nameNorm`, `addressNorm` 필드에 저장하고 접두어 검색에 사용합니다.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 텍스트를 검색용으로 정규화합니다.
///
/// 1. 값이 없거나 공백뿐이면 빈 문자열
/// 2. 앞뒤 공백 제거 후 소문자화
/// 3. NFD 분해 후 결합 문자(악센트 등) 제거
///    (`is_combining_mark` 기준이라 Mn 외에 Mc, Me 문자도 제거됩니다)
/// 4. NFC 재조합
///
/// # 예제
///
/// ```rust,ignore
/// assert_eq!(normalize(Some("  Dúplex CEDRITOS ")), "duplex cedritos");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(input: Option<&str>) -> String {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}
