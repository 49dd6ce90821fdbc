/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€100.00`
    Prefix,
    /// `€ 100,00` (no-break space)
    PrefixSpaced,
    /// `100,00 €` (no-break space)
    SuffixSpaced,
}

/// Where the minus sign of a negative amount goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinusPosition {
    /// `-€5.50`
    BeforeSymbol,
    /// `€ -5,50`
    BeforeAmount,
}

/// Field order of a numeric short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
}

/// Formatting conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal: char,
    pub group: char,
    pub symbol_position: SymbolPosition,
    pub minus_position: MinusPosition,
    pub date_order: DateOrder,
    pub date_separator: char,
    /// Day and month are zero-padded to two digits.
    pub date_padded: bool,
}

impl LocaleData {
    /// Primary language subtag, e.g. "de" for "de-AT".
    pub fn language(&self) -> &'static str {
        language_of(self.tag)
    }
}

pub(crate) fn language_of(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

pub const ROOT_LOCALE: &str = "en-US";

pub const LOCALES: &[LocaleData] = &[
    LocaleData {
        tag: "de-DE",
        decimal: ',',
        group: '.',
        symbol_position: SymbolPosition::SuffixSpaced,
        minus_position: MinusPosition::BeforeSymbol,
        date_order: DateOrder::DayMonthYear,
        date_separator: '.',
        date_padded: false,
    },
    LocaleData {
        tag: "de-AT",
        decimal: ',',
        group: '\u{a0}',
        symbol_position: SymbolPosition::PrefixSpaced,
        minus_position: MinusPosition::BeforeSymbol,
        date_order: DateOrder::DayMonthYear,
        date_separator: '.',
        date_padded: false,
    },
    LocaleData {
        tag: "en-US",
        decimal: '.',
        group: ',',
        symbol_position: SymbolPosition::Prefix,
        minus_position: MinusPosition::BeforeSymbol,
        date_order: DateOrder::MonthDayYear,
        date_separator: '/',
        date_padded: false,
    },
    LocaleData {
        tag: "en-GB",
        decimal: '.',
        group: ',',
        symbol_position: SymbolPosition::Prefix,
        minus_position: MinusPosition::BeforeSymbol,
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
        date_padded: true,
    },
    LocaleData {
        tag: "fr-FR",
        decimal: ',',
        group: '\u{202f}',
        symbol_position: SymbolPosition::SuffixSpaced,
        minus_position: MinusPosition::BeforeSymbol,
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
        date_padded: true,
    },
    LocaleData {
        tag: "nl-NL",
        decimal: ',',
        group: '.',
        symbol_position: SymbolPosition::PrefixSpaced,
        minus_position: MinusPosition::BeforeAmount,
        date_order: DateOrder::DayMonthYear,
        date_separator: '-',
        date_padded: false,
    },
];

/// Table entry whose tag equals `tag`, ignoring case and `_`/`-`.
pub fn find_exact(tag: &str) -> Option<&'static LocaleData> {
    let wanted = tag.replace('_', "-");
    LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&wanted))
}

/// First table entry with the same language subtag.
pub fn find_language(tag: &str) -> Option<&'static LocaleData> {
    let language = language_of(tag);
    LOCALES
        .iter()
        .find(|l| l.language().eq_ignore_ascii_case(language))
}

pub fn root() -> &'static LocaleData {
    &LOCALES[2]
}
