//! Locale resolution and the number, currency and date formatters the
//! mapper uses.
//!
//! [`setup_i18n`] settles once per process whether locale tags resolve
//! strictly against the built-in table or leniently by language.

mod date;
mod locale;
mod number;

use std::sync::OnceLock;

use tracing::{debug, warn};

pub use date::DateFormat;
pub use locale::{DateOrder, LocaleData, MinusPosition, SymbolPosition, LOCALES, ROOT_LOCALE};
pub use number::{CurrencyFormat, NumberFormat};
pub(crate) use number::round_half_expand;

/// How locale tags missing from the built-in table are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleResolution {
    /// Only exact table entries; anything else falls back to the root locale.
    #[default]
    Exact,
    /// Unknown tags match the first entry with the same language subtag
    /// before falling back to the root locale.
    Lenient,
}

static RESOLUTION: OnceLock<LocaleResolution> = OnceLock::new();

/// Settle locale resolution for the process. Switches to
/// [`LocaleResolution::Lenient`] when any of `locales` is not in the
/// built-in table. Only the first call decides; later calls return the
/// settled mode.
pub fn setup_i18n(locales: &[&str]) -> LocaleResolution {
    *RESOLUTION.get_or_init(|| {
        if are_locales_supported(locales) {
            debug!(?locales, "built-in locale table covers requested locales");
            LocaleResolution::Exact
        } else {
            warn!(?locales, "locales missing from built-in table, using lenient resolution");
            LocaleResolution::Lenient
        }
    })
}

/// Mode settled by [`setup_i18n`], or `Exact` before it ran.
pub fn resolution() -> LocaleResolution {
    RESOLUTION.get().copied().unwrap_or_default()
}

pub fn are_locales_supported(locales: &[&str]) -> bool {
    locales.iter().all(|tag| locale::find_exact(tag).is_some())
}

/// Locale data for `tag` under the process-wide resolution mode.
pub fn resolve_locale(tag: &str) -> &'static LocaleData {
    resolve_locale_with(tag, resolution())
}

pub fn resolve_locale_with(tag: &str, mode: LocaleResolution) -> &'static LocaleData {
    let found = match mode {
        LocaleResolution::Exact => locale::find_exact(tag),
        LocaleResolution::Lenient => locale::find_exact(tag).or_else(|| locale::find_language(tag)),
    };
    found.unwrap_or_else(locale::root)
}
