// SPDX-License-Identifier: MIT

//! Localized month names and share-text labels.
//!
//! Immutable static tables indexed by the language preference captured at
//! submission time (0=en, 1=he, 2=es, 3=fr, 4=de, 5=zh). Out-of-range
//! indexes fall back to English. Owned by the presentation layer; the
//! rollup engine never reads these.

/// Number of supported languages.
pub const LANG_COUNT: usize = 6;

const MONTH_NAMES: [[&str; 12]; LANG_COUNT] = [
    // English
    [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    // Hebrew
    [
        "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר",
        "נובמבר", "דצמבר",
    ],
    // Spanish
    [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto", "Septiembre",
        "Octubre", "Noviembre", "Diciembre",
    ],
    // French
    [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août", "Septembre",
        "Octobre", "Novembre", "Décembre",
    ],
    // German
    [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    // Chinese
    [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
];

const FINISHED_WORKOUT: [&str; LANG_COUNT] = [
    "finished a workout!",
    "סיים אימון!",
    "¡terminó un entrenamiento!",
    "a terminé un entraînement !",
    "hat ein Training beendet!",
    "完成了一次锻炼！",
];

const MONTHLY_SUMMARY: [&str; LANG_COUNT] = [
    "Monthly Summary",
    "סיכום חודשי",
    "Resumen Mensual",
    "Résumé Mensuel",
    "Monatsübersicht",
    "月度总结",
];

/// Clamp a stored language index to the supported range.
fn lang_index(lang: u8) -> usize {
    let idx = lang as usize;
    if idx < LANG_COUNT {
        idx
    } else {
        0
    }
}

/// Localized month name for a 1-based month number.
///
/// Callers validate the month; an out-of-range value falls back to the
/// number itself rather than panicking.
pub fn month_name(lang: u8, month: u32) -> String {
    match month {
        1..=12 => MONTH_NAMES[lang_index(lang)][(month - 1) as usize].to_string(),
        _ => month.to_string(),
    }
}

/// Localized "finished a workout!" label.
pub fn finished_workout(lang: u8) -> &'static str {
    FINISHED_WORKOUT[lang_index(lang)]
}

/// Localized "Monthly Summary" label.
pub fn monthly_summary(lang: u8) -> &'static str {
    MONTHLY_SUMMARY[lang_index(lang)]
}
