//! Extraction of typed domain facts from memorial text.
//!
//! First occurrence wins: rules are deterministic over documents that
//! mention the same quantity more than once. Quantified mentions
//! (extinguishers, hydrants) are the exception — every mention is collected
//! so counts can be summed.

use crate::extractors::numeric::{length_to_meters, parse_count, parse_decimal, volume_to_liters};
use crate::patterns::{
    BUILDING_HEIGHT_PATTERN, EXIT_WIDTH_PATTERNS, EXTINGUISHER_PATTERN, FINISHING_CLASS_PATTERN,
    FIRE_RESERVE_PATTERN, FLOOR_AREA_PATTERN, HYDRANT_PATTERN, LIGHTING_AUTONOMY_PATTERN,
    OCCUPANCY_CODE_BARE_PATTERN, OCCUPANCY_CODE_PATTERN, OCCUPANT_LOAD_PATTERNS,
    REGISTRATION_PATTERN, RESPONSIBLE_ENGINEER_PATTERN,
};

/// Responsible technical professional named in the memorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsibleEngineer {
    pub name: String,
    /// "CREA 12345" style registration, when declared.
    pub registration: Option<String>,
}

/// One extinguisher/hydrant mention. A mention without an explicit quantity
/// counts as a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantifiedMention {
    pub quantity: u32,
    pub kind: Option<String>,
}

pub fn extract_responsible_engineer(text: &str) -> Option<ResponsibleEngineer> {
    let caps = RESPONSIBLE_ENGINEER_PATTERN.captures(text)?;
    let name = caps.get(1)?.as_str().trim().to_string();

    let registration = REGISTRATION_PATTERN.captures(text).and_then(|reg| {
        let body = reg.get(1)?.as_str().to_uppercase();
        let number = reg.get(2)?.as_str().trim_end_matches(['.', '-', '/']);
        Some(format!("{} {}", body, number))
    });

    Some(ResponsibleEngineer { name, registration })
}

pub fn extract_floor_area(text: &str) -> Option<f64> {
    let caps = FLOOR_AREA_PATTERN.captures(text)?;
    parse_decimal(caps.get(1)?.as_str())
}

pub fn extract_building_height(text: &str) -> Option<f64> {
    let caps = BUILDING_HEIGHT_PATTERN.captures(text)?;
    parse_decimal(caps.get(1)?.as_str())
}

/// Occupancy classification code, upper-cased: "A-1", "F-5" or a bare
/// group letter ("D"). Invalid codes are still extracted so the rule can
/// distinguish "present but invalid" from "missing".
pub fn extract_occupancy_code(text: &str) -> Option<String> {
    if let Some(caps) = OCCUPANCY_CODE_PATTERN.captures(text) {
        let letter = caps.get(1)?.as_str().to_uppercase();
        let digit = caps.get(2)?.as_str();
        return Some(format!("{}-{}", letter, digit));
    }

    let caps = OCCUPANCY_CODE_BARE_PATTERN.captures(text)?;
    Some(caps.get(1)?.as_str().to_uppercase())
}

/// Emergency-exit width in meters, first match wins across patterns.
pub fn extract_exit_width(text: &str) -> Option<f64> {
    for re in EXIT_WIDTH_PATTERNS.iter() {
        if let Some(caps) = re.captures(text) {
            let value = caps.get(1).and_then(|m| parse_decimal(m.as_str()));
            let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("m");
            if let Some(v) = value {
                return Some(length_to_meters(v, unit));
            }
        }
    }
    None
}

pub fn extract_occupant_load(text: &str) -> Option<u32> {
    for re in OCCUPANT_LOAD_PATTERNS.iter() {
        if let Some(caps) = re.captures(text) {
            if let Some(load) = caps.get(1).and_then(|m| parse_count(m.as_str())) {
                return Some(load);
            }
        }
    }
    None
}

pub fn extract_extinguishers(text: &str) -> Vec<QuantifiedMention> {
    collect_quantified(text, &EXTINGUISHER_PATTERN)
}

pub fn extract_hydrants(text: &str) -> Vec<QuantifiedMention> {
    collect_quantified(text, &HYDRANT_PATTERN)
}

fn collect_quantified(text: &str, pattern: &regex::Regex) -> Vec<QuantifiedMention> {
    pattern
        .captures_iter(text)
        .map(|caps| {
            let quantity = caps
                .get(1)
                .and_then(|m| parse_count(m.as_str()))
                .unwrap_or(1);
            let kind = caps
                .get(2)
                .map(|m| m.as_str().trim().to_uppercase())
                .filter(|k| !k.is_empty());
            QuantifiedMention { quantity, kind }
        })
        .collect()
}

/// Emergency-lighting autonomy in hours.
pub fn extract_lighting_autonomy(text: &str) -> Option<f64> {
    let caps = LIGHTING_AUTONOMY_PATTERN.captures(text)?;
    parse_decimal(caps.get(1)?.as_str())
}

/// Fire-reserve volume normalized to liters.
pub fn extract_fire_reserve_liters(text: &str) -> Option<f64> {
    let caps = FIRE_RESERVE_PATTERN.captures(text)?;
    let value = parse_decimal(caps.get(1)?.as_str())?;
    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("litros");
    Some(volume_to_liters(value, unit))
}

/// Finishing-material class, trimmed and upper-cased ("II-A", "A").
pub fn extract_finishing_class(text: &str) -> Option<String> {
    let caps = FINISHING_CLASS_PATTERN.captures(text)?;
    let raw = caps.get(1)?.as_str().trim().to_uppercase();
    Some(raw.replace(char::is_whitespace, ""))
}
