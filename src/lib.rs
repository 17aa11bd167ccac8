//! content-i18n
//!
//! 多言語コンテンツレコードのフィールド単位ローカライズ
//!
//! Content records of the catalog (news posts, manufacturers, brands,
//! resources) arrive as flat JSON objects where a logical field `title` is
//! stored as `title_ru`, `title_en`, `title_de`, `title_pt` plus an optional
//! untagged `title`. This crate resolves the best available value per field
//! for a requested [`Language`], with Russian as the fixed fallback, and
//! formats dates for the matching locale.
//!
//! All functions are pure and total over their inputs: a localization miss
//! degrades to an empty string instead of failing the render.

pub mod date;
pub mod fields;
pub mod language;
pub mod preference;
pub mod resolve;

pub use date::{
    DateError,
    resolve_date,
};
pub use fields::FieldTranslations;
pub use language::{
    Language,
    UnsupportedLanguage,
};
pub use preference::{
    PREFERENCE_KEY,
    detect_system_language,
    resolve_preference,
};
pub use resolve::{
    available_languages,
    has_translation,
    localize_records,
    resolve_field,
    suffixed_key,
};
