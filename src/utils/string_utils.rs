//! # 문자열 유틸리티
//!
//! 검증 메시지 생성과 공백 판별에 사용되는 문자열 함수들입니다.

/// camelCase 필드명을 사람이 읽을 수 있는 라벨로 변환합니다.
///
/// 대문자 경계에서 단어를 나누고 첫 글자만 대문자로 남깁니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::humanize_field_name;
///
/// assert_eq!(humanize_field_name("salaryMin"), "Salary min");
/// assert_eq!(humanize_field_name("status"), "Status");
/// ```
pub fn humanize_field_name(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);

    for (index, ch) in name.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else if ch == '_' {
            label.push(' ');
        } else {
            label.push(ch);
        }
    }

    label
}

/// 공백만 있거나 비어 있는 문자열인지 확인합니다.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
