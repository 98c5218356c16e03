// Numeric parsing for Brazilian-formatted quantities.

/// Parse a decimal that may use Brazilian formatting: comma as the decimal
/// separator and dot as a thousands separator ("1.250,5"), or plain dot
/// decimals ("1.2"). A lone dot followed by exactly three digits is treated
/// as a thousands separator ("12.000" → 12000).
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        match s.rfind('.') {
            Some(pos) if s.len() - pos - 1 == 3 => s.replace('.', ""),
            _ => s.to_string(),
        }
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a base-10 integer count.
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Convert a captured volume to liters given its unit capture ("m³", "m3",
/// "litros", "l").
pub fn volume_to_liters(value: f64, unit: &str) -> f64 {
    let unit = unit.trim().to_lowercase();
    if unit == "m³" || unit == "m3" {
        value * 1000.0
    } else {
        value
    }
}

/// Convert a captured length to meters given its unit capture ("m",
/// "metros", "cm").
pub fn length_to_meters(value: f64, unit: &str) -> f64 {
    if unit.trim().to_lowercase() == "cm" {
        value / 100.0
    } else {
        value
    }
}
