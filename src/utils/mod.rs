//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필드 이름 변환, 공백 문자열 처리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::humanize_field_name;
//!
//! assert_eq!(humanize_field_name("salaryMin"), "Salary min");
//! ```

pub mod string_utils;
