use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Símbolo de una moneda; los códigos desconocidos se devuelven en mayúsculas.
pub fn currency_symbol(code: &str) -> String {
    let code = code.trim().to_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "TRY" => "₺",
        "JPY" => "¥",
        "RUB" => "₽",
        "INR" => "₹",
        "SAR" => "﷼",
        "AED" => "د.إ",
        "IQD" => "ع.د",
        _ => return code,
    };
    symbol.to_string()
}

/// Importe con símbolo, separador de miles y exactamente dos decimales.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let formatted = format_number_with_separators(amount.abs(), 2);
    let symbol = currency_symbol(currency);

    if amount < 0.0 && formatted != "0.00" {
        format!("-{}{}", symbol, formatted)
    } else {
        format!("{}{}", symbol, formatted)
    }
}

pub fn format_number_with_separators(num: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", num, decimals = decimals);
    let (integer, decimal) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    let mut count = 0;

    for c in integer.chars().rev() {
        if count == 3 && c.is_ascii_digit() {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    let integer_formatted: String = result.chars().rev().collect();

    if decimals > 0 {
        format!("{}.{}", integer_formatted, decimal)
    } else {
        integer_formatted
    }
}

/// Porcentaje sin ceros finales: `10%`, `12.5%`.
pub fn format_percentage(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Los precios negativos se tratan como 0.
pub fn try_parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
}

/// Convierte un precio almacenado como texto; lo que no es numérico vale 0.
pub fn parse_price(raw: &str) -> f64 {
    try_parse_price(raw).unwrap_or(0.0)
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_datetime(value).map(|dt| dt.date())
}

/// Fecha para documentos: `05 Jan 2024`. Entradas inválidas dan "".
pub fn format_date(value: &str) -> String {
    format_date_string(value, "%d %b %Y")
}

/// Fecha corta para pantalla: `05/01/2024`.
pub fn format_date_display(value: &str) -> String {
    format_date_string(value, "%d/%m/%Y")
}

pub fn format_date_string(value: &str, format: &str) -> String {
    parse_date(value)
        .map(|date| date.format(format).to_string())
        .unwrap_or_default()
}

/// Años cumplidos a fecha `today`.
pub fn calculate_age(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let birth = parse_date(birth_date)?;
    if birth > today {
        return None;
    }

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

/// Noches entre entrada y salida: `max(0, ceil(días))`.
pub fn calculate_nights(checkin: &str, checkout: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_datetime(checkin), parse_datetime(checkout)) else {
        return 0;
    };

    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }

    let nights = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(nights).unwrap_or(u32::MAX)
}

/// Marcador de lista (`-`, `+`) o de enumeración (`12.`) al inicio de línea.
/// Devuelve la posición del carácter a escapar.
fn list_marker_at_start(text: &str) -> Option<usize> {
    let start = text.len() - text.trim_start().len();
    let rest = &text[start..];
    let followed_by_space = |i: usize| rest[i..].chars().next().map_or(true, char::is_whitespace);

    if rest.starts_with('-') || rest.starts_with('+') {
        return followed_by_space(1).then_some(start);
    }

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && rest[digits..].starts_with('.') && followed_by_space(digits + 1) {
        return Some(start + digits);
    }
    None
}

/// Escapa caracteres especiales para Typst
pub fn escape_typst(text: &str) -> String {
    let marker = list_marker_at_start(text);
    let mut escaped = String::with_capacity(text.len() + 1);
    for (i, c) in text.char_indices() {
        if Some(i) == marker {
            escaped.push('\\');
        }
        match c {
            '\\' | '#' | '$' | '@' | '*' | '_' | '[' | ']' | '<' | '>' | '`' | '~' | '=' | '/' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbol_lookup() {
        assert_eq!(currency_symbol("usd"), "$");
        assert_eq!(currency_symbol("Eur"), "€");
        assert_eq!(currency_symbol("try"), "₺");
        assert_eq!(currency_symbol("chf"), "CHF");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_currency(0.0, "EUR"), "€0.00");
        assert_eq!(format_currency(-550.5, "GBP"), "-£550.50");
        assert_eq!(format_currency(999.999, "xyz"), "XYZ1,000.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn test_format_currency_is_stable_on_its_own_output() {
        for amount in [0.0, 1.005, 12.5, 999.994, 1234.5678, 10_000_000.1] {
            let first = format_currency(amount, "USD");
            let reparsed = parse_price(first.trim_start_matches('$'));
            assert_eq!(format_currency(reparsed, "USD"), first);
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(10.0), "10%");
        assert_eq!(format_percentage(12.5), "12.5%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("100"), 100.0);
        assert_eq!(parse_price(" 1,250.75 "), 1250.75);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
    }

    #[test]
    fn test_negative_price_counts_as_zero() {
        assert_eq!(parse_price("-150"), 0.0);
        assert_eq!(try_parse_price("-0.5"), Some(0.0));
        assert_eq!(try_parse_price("-abc"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "05 Jan 2024");
        assert_eq!(format_date("2024-03-10T14:30:00Z"), "10 Mar 2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("not a date"), "");
        assert_eq!(format_date_display("2024-01-05"), "05/01/2024");
    }

    #[test]
    fn test_calculate_age() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(calculate_age("1990-06-15", today), Some(34));
        assert_eq!(calculate_age("1990-06-16", today), Some(33));
        assert_eq!(calculate_age("2024-06-15", today), Some(0));
        assert_eq!(calculate_age("2030-01-01", today), None);
        assert_eq!(calculate_age("", today), None);
    }

    #[test]
    fn test_calculate_nights() {
        assert_eq!(calculate_nights("2024-01-01", "2024-01-04"), 3);
        assert_eq!(calculate_nights("2024-01-01", "2024-01-01"), 0);
        assert_eq!(calculate_nights("2024-01-04", "2024-01-01"), 0);
        assert_eq!(calculate_nights("", "2024-01-04"), 0);
        assert_eq!(calculate_nights("2024-01-01", ""), 0);
        assert_eq!(calculate_nights("2024-01-01T14:00", "2024-01-03T11:00"), 2);
        assert_eq!(calculate_nights("2024-01-01T10:00", "2024-01-03T11:00"), 3);
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("Room #1 $50"), "Room \\#1 \\$50");
        assert_eq!(escape_typst("a*b_c"), "a\\*b\\_c");
    }

    #[test]
    fn test_escape_typst_list_markers() {
        assert_eq!(escape_typst("- shuttle"), "\\- shuttle");
        assert_eq!(escape_typst("+ extra"), "\\+ extra");
        assert_eq!(escape_typst("1. Airport pickup"), "1\\. Airport pickup");
        assert_eq!(escape_typst("  12. Dinner"), "  12\\. Dinner");
        assert_eq!(escape_typst("-"), "\\-");
        assert_eq!(escape_typst("-5 km"), "-5 km");
        assert_eq!(escape_typst("3.5 km"), "3.5 km");
        assert_eq!(escape_typst("Day 1. Tour"), "Day 1. Tour");
    }
}
