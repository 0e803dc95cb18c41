//! 소셜 미디어 값 객체
//!
//! `Candidate`와 `Company`가 구성으로 하나씩 소유합니다.
//! 생성 시점에 만들어지고, null이 되지 않으며, 공유되지 않습니다.
//! 페이로드의 `linkedin`, `github`, `twitter`, `website` 키가 이 객체로 전달됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::validation::{setters, Constraint, FieldDef, FieldType, InvalidArgument, Setter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// 소셜 미디어 값 객체를 소유하는 엔티티
pub trait HasSocialMedia {
    fn social_media_mut(&mut self) -> &mut SocialMedia;
}

fn set_linkedin<E: HasSocialMedia>(entity: &mut E, value: &Value) -> Result<(), InvalidArgument> {
    entity.social_media_mut().linkedin = setters::optional_string(value)?;
    Ok(())
}

fn set_github<E: HasSocialMedia>(entity: &mut E, value: &Value) -> Result<(), InvalidArgument> {
    entity.social_media_mut().github = setters::optional_string(value)?;
    Ok(())
}

fn set_twitter<E: HasSocialMedia>(entity: &mut E, value: &Value) -> Result<(), InvalidArgument> {
    entity.social_media_mut().twitter = setters::optional_string(value)?;
    Ok(())
}

fn set_website<E: HasSocialMedia>(entity: &mut E, value: &Value) -> Result<(), InvalidArgument> {
    entity.social_media_mut().website = setters::optional_string(value)?;
    Ok(())
}

/// 소유 엔티티의 스키마에 덧붙일 네 개의 URL 필드 정의
pub fn social_media_fields<E: HasSocialMedia>() -> Vec<FieldDef<E>> {
    let url_field = |name: &'static str, setter: Setter<E>| {
        FieldDef::new(name, setter)
            .with(Constraint::Type(FieldType::String))
            .with(Constraint::max_length(255))
            .with(Constraint::Url)
    };

    vec![
        url_field("linkedin", set_linkedin::<E>),
        url_field("github", set_github::<E>),
        url_field("twitter", set_twitter::<E>),
        url_field("website", set_website::<E>),
    ]
}
