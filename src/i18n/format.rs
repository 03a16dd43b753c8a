// SPDX-License-Identifier: MPL-2.0
//! Locale-aware number and date rendering.
//!
//! Pure functions over the supported locales. Each language carries its own
//! separator and month-name tables; there is no environment lookup and no
//! state, so output is fully determined by the arguments.

use super::lang::Language;
use chrono::{Datelike, NaiveDate};

/// How a date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Long form with the month spelled out, e.g. `31 de agosto de 2026`.
    #[default]
    Long,
    /// All-numeric form, e.g. `31/08/2026` (`08/31/2026` for English).
    Numeric,
}

struct NumberFormat {
    group_separator: &'static str,
    decimal_separator: &'static str,
}

fn number_format(lang: Language) -> NumberFormat {
    match lang {
        Language::PtBr | Language::Es => NumberFormat {
            group_separator: ".",
            decimal_separator: ",",
        },
        Language::En => NumberFormat {
            group_separator: ",",
            decimal_separator: ".",
        },
        // French groups with a non-breaking space.
        Language::Fr => NumberFormat {
            group_separator: "\u{a0}",
            decimal_separator: ",",
        },
    }
}

/// Formats a number with the language's digit grouping and decimal
/// separator. Fractions are kept to at most three places with trailing
/// zeros dropped.
pub fn format_number(value: f64, lang: Language) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let format = number_format(lang);
    let negative = value.is_sign_negative() && value != 0.0;
    let rendered = format!("{:.3}", value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut grouped = String::new();
    let digits = integer.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(format.group_separator);
        }
        grouped.push(*digit as char);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push_str(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn month_name(lang: Language, month: u32) -> &'static str {
    const PT: [&str; 12] = [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ];
    const EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    const ES: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ];
    const FR: [&str; 12] = [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ];
    let index = (month as usize).saturating_sub(1).min(11);
    match lang {
        Language::PtBr => PT[index],
        Language::En => EN[index],
        Language::Es => ES[index],
        Language::Fr => FR[index],
    }
}

/// Formats a calendar date in the language's conventional shape.
pub fn format_date(date: NaiveDate, lang: Language, style: DateStyle) -> String {
    match style {
        DateStyle::Numeric => match lang {
            Language::En => format!("{:02}/{:02}/{}", date.month(), date.day(), date.year()),
            _ => format!("{:02}/{:02}/{}", date.day(), date.month(), date.year()),
        },
        DateStyle::Long => {
            let month = month_name(lang, date.month());
            match lang {
                Language::PtBr | Language::Es => {
                    format!("{} de {} de {}", date.day(), month, date.year())
                }
                Language::En => format!("{} {}, {}", month, date.day(), date.year()),
                Language::Fr => format!("{} {} {}", date.day(), month, date.year()),
            }
        }
    }
}
