//! Localization
//!
//! Flat dotted-key string tables per language. [`Translator::t`] looks a
//! key up in the active language, falls back to English, then to the key
//! itself, and interpolates `{{name}}` placeholders.

mod ar;
mod en;
mod he;
mod ru;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use shared::AppError;

type Strings = &'static [(&'static str, &'static str)];
type Lists = &'static [(&'static str, &'static [&'static str])];

const TEMPLATE_GROUP_PREFIX: &str = "contentAI.culturalTemplates.";

/// Supported UI languages, in selector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Language {
    #[default]
    En = 0,
    Ar = 1,
    He = 2,
    Ru = 3,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ar, Language::He, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::He => "he",
            Language::Ru => "ru",
        }
    }

    /// Name in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::He => "עברית",
            Language::Ru => "Русский",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar | Language::He)
    }

    /// Next language in selector order, wrapping around
    pub fn next(&self) -> Language {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }

    fn from_index(index: u8) -> Language {
        Self::ALL.get(index as usize).copied().unwrap_or_default()
    }

    fn strings(&self) -> Strings {
        match self {
            Language::En => en::STRINGS,
            Language::Ar => ar::STRINGS,
            Language::He => he::STRINGS,
            Language::Ru => ru::STRINGS,
        }
    }

    fn lists(&self) -> Lists {
        match self {
            Language::En => en::LISTS,
            Language::Ar => ar::LISTS,
            Language::He => he::LISTS,
            Language::Ru => ru::LISTS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| AppError::config(format!("Unsupported language: {}", s)))
    }
}

/// Process-wide active language
///
/// Cloning shares the setting; the translator and the locale-filtered
/// hooks read the same handle.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    current: Arc<AtomicU8>,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self {
            current: Arc::new(AtomicU8::new(language as u8)),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_index(self.current.load(Ordering::Acquire))
    }

    pub fn set_language(&self, language: Language) {
        tracing::info!(language = %language, "Language changed");
        self.current.store(language as u8, Ordering::Release);
    }

    /// Switch to the next language and return it
    pub fn cycle(&self) -> Language {
        let next = self.language().next();
        self.set_language(next);
        next
    }
}

/// Titled group of quick templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGroup {
    pub id: &'static str,
    pub title: String,
    pub templates: &'static [&'static str],
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn language(&self) -> Language {
        self.locale.language()
    }

    /// Translate `key` with `{{name}}` placeholders filled from `params`
    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = lookup(self.language().strings(), key)
            .or_else(|| lookup(Language::En.strings(), key))
            .unwrap_or(key);
        interpolate(template, params)
    }

    /// Translate without parameters
    pub fn tr(&self, key: &str) -> String {
        self.t(key, &[])
    }

    /// String list, falling back to English; empty when unknown
    pub fn t_list(&self, key: &str) -> &'static [&'static str] {
        lookup(self.language().lists(), key)
            .or_else(|| lookup(Language::En.lists(), key))
            .unwrap_or(&[])
    }

    /// Quick-template groups of the active language, in table order
    pub fn template_groups(&self) -> Vec<TemplateGroup> {
        let lists = self.language().lists();
        lists
            .iter()
            .filter_map(|&(key, templates)| {
                let id = key.strip_prefix(TEMPLATE_GROUP_PREFIX)?.strip_suffix(".templates")?;
                Some(TemplateGroup {
                    id,
                    title: self.tr(&format!("{}{}.title", TEMPLATE_GROUP_PREFIX, id)),
                    templates,
                })
            })
            .collect()
    }
}

fn lookup<T: Copy>(table: &'static [(&'static str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}
