//! Regex patterns for the domain facts found in descriptive memorials.
//!
//! Every pattern is tolerant to diacritics ("área"/"area"), synonyms
//! ("área"/"superfície") and Brazilian number formatting (comma decimals,
//! dot thousands separators). Typed extraction on top of these lives in
//! [`crate::extractors`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "Responsável Técnico: João Silva" — capitalized name after the label.
    /// The label is case-insensitive; the name capture is not, so it stops
    /// at all-caps registration acronyms ("CREA") and punctuation.
    pub static ref RESPONSIBLE_ENGINEER_PATTERN: Regex = Regex::new(
        r"(?:(?i:respons[áa]vel\s+t[ée]cnico|profissional\s+respons[áa]vel|engenheir[oa]\s+respons[áa]vel|arquitet[oa]\s+respons[áa]vel)\s*[:\-]?\s*)([A-ZÀ-Ú][a-zà-ú]+(?:\s+(?:d[aeo]s?\s+)?[A-ZÀ-Ú][a-zà-ú]+)+)"
    ).unwrap();

    /// Professional registration: "CREA 12345", "CAU-SP nº 123.456-7".
    pub static ref REGISTRATION_PATTERN: Regex = Regex::new(
        r"(?i)\b(crea|cau|corem|confea)(?:[-/][a-z]{2})?\s*(?:n[º°o.]{0,2})?\s*[:\-]?\s*(\d[\d./-]*)"
    ).unwrap();

    /// Floor area: "área: 500 m²", "superfície construída de 1.250,5 m2".
    pub static ref FLOOR_AREA_PATTERN: Regex = Regex::new(
        r"(?i)(?:[áa]rea(?:\s+(?:total|constru[íi]da|edificada|do\s+terreno))?|superf[íi]cie(?:\s+constru[íi]da)?)\s*[:\-]?\s*(?:de\s+)?([\d.,]+)\s*(?:m²|m2|metros\s+quadrados)"
    ).unwrap();

    /// Building height: "altura da edificação: 12,5 m".
    pub static ref BUILDING_HEIGHT_PATTERN: Regex = Regex::new(
        r"(?i)altura(?:\s+(?:da\s+edifica[çc][ãa]o|total|de\s+descarga))?\s*[:\-]?\s*(?:de\s+)?([\d.,]+)\s*(?:m\b|metros)"
    ).unwrap();

    /// Occupancy code with a numeric suffix: "divisão F-5", "ocupação: A-1".
    /// Any letter is accepted here so that invalid codes ("Z-9") are still
    /// extracted and reported as invalid rather than missing.
    pub static ref OCCUPANCY_CODE_PATTERN: Regex = Regex::new(
        r"(?i:divis[ãa]o|classifica[çc][ãa]o(?:\s+d[ae]\s+ocupa[çc][ãa]o)?|ocupa[çc][ãa]o|grupo)\s*[:\-]?\s*([A-Za-z])\s*-\s*(\d{1,2})\b"
    ).unwrap();

    /// Bare occupancy letter ("grupo D"). Upper-case only, to avoid
    /// swallowing ordinary prose after the label. Codes with a numeric
    /// suffix are handled by `OCCUPANCY_CODE_PATTERN`, tried first.
    pub static ref OCCUPANCY_CODE_BARE_PATTERN: Regex = Regex::new(
        r"(?i:divis[ãa]o|classifica[çc][ãa]o(?:\s+d[ae]\s+ocupa[çc][ãa]o)?|ocupa[çc][ãa]o|grupo)\s*[:\-]?\s*([A-Z])\b"
    ).unwrap();

    /// Emergency-exit width, label before or after the element name.
    pub static ref EXIT_WIDTH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:sa[íi]das?(?:\s+de\s+emerg[êe]ncia)?|rotas?\s+de\s+fuga|escadas?|corredores?|portas?)[^.\n]{0,60}?largura\s*(?:m[íi]nima\s*)?[:\-]?\s*(?:de\s+)?([\d.,]+)\s*(m\b|metros|cm)").unwrap(),
        Regex::new(r"(?i)largura\s*(?:m[íi]nima\s*)?(?:de\s+|das?\s+|dos?\s+)?(?:sa[íi]das?(?:\s+de\s+emerg[êe]ncia)?|rotas?\s+de\s+fuga|escadas?|corredores?|portas?)\s*[:\-]?\s*(?:de\s+)?([\d.,]+)\s*(m\b|metros|cm)").unwrap(),
    ];

    /// Occupant load: "população: 250 pessoas", "lotação máxima de 180".
    pub static ref OCCUPANT_LOAD_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:popula[çc][ãa]o|lota[çc][ãa]o|capacidade)\s*(?:m[áa]xima\s*)?[:\-]?\s*(?:de\s+)?(\d+)").unwrap(),
        Regex::new(r"(?i)(\d+)\s+(?:pessoas|ocupantes)\b").unwrap(),
    ];

    /// Extinguisher mentions with optional quantity and type. The type
    /// capture is bounded to two words so a following quantified mention
    /// ("... e 2 extintores de água") is not swallowed.
    pub static ref EXTINGUISHER_PATTERN: Regex = Regex::new(
        r"(?i)\b(\d+)?\s*extintor(?:es)?\b(?:\s+(?:de|do\s+tipo|tipo)\s+([a-zà-ú][a-zà-ú0-9]*(?:\s+[a-zà-ú][a-zà-ú0-9]{2,})?))?"
    ).unwrap();

    /// Hydrant/mangotinho mentions with optional quantity and type.
    pub static ref HYDRANT_PATTERN: Regex = Regex::new(
        r"(?i)\b(\d+)?\s*(?:hidrantes?|mangotinhos?)\b(?:\s+de\s+(parede|coluna|recalque|marco))?"
    ).unwrap();

    /// Presence of an emergency-lighting system.
    pub static ref EMERGENCY_LIGHTING_PATTERN: Regex = Regex::new(
        r"(?i)ilumina[çc][ãa]o\s+de\s+emerg[êe]ncia|blocos?\s+aut[ôo]nomos?"
    ).unwrap();

    /// Lighting autonomy in hours: "autonomia: 1h", "autonomia de 2 horas".
    pub static ref LIGHTING_AUTONOMY_PATTERN: Regex = Regex::new(
        r"(?i)autonomia\s*(?:m[íi]nima\s*)?[:\-]?\s*(?:de\s+)?([\d.,]+)\s*(?:h\b|horas?|hrs?)"
    ).unwrap();

    /// Fire reserve volume: "reserva de incêndio: 12.000 litros",
    /// "reserva técnica de 20 m³".
    pub static ref FIRE_RESERVE_PATTERN: Regex = Regex::new(
        r"(?i)reserva\s+(?:t[ée]cnica\s+)?(?:de\s+)?(?:inc[êe]ndio|[áa]gua)?[^.\n]{0,30}?([\d.,]+)\s*(m³|m3|litros?|l\b)"
    ).unwrap();

    /// Finishing/lining material mention.
    pub static ref FINISHING_MENTION_PATTERN: Regex = Regex::new(
        r"(?i)(?:materia(?:l|is)\s+de\s+)?(?:acabamento|revestimento)"
    ).unwrap();

    /// Finishing-material class: "classe II-A", "materiais de acabamento classe A".
    pub static ref FINISHING_CLASS_PATTERN: Regex = Regex::new(
        r"(?i)(?:acabamento|revestimento)[^.\n]{0,60}?classe\s*[:\-]?\s*((?:iv|vi?|i{1,3})(?:\s*-?\s*[ab])?|[a-f])\b"
    ).unwrap();

    /// Document-type cues, checked against the metadata title first and the
    /// body as fallback.
    pub static ref MEMORIAL_TYPE_PATTERN: Regex =
        Regex::new(r"(?i)memorial\s+descritivo").unwrap();
    pub static ref PROJECT_TYPE_PATTERN: Regex = Regex::new(
        r"(?i)projeto\s+(?:t[ée]cnico|de\s+(?:seguran[çc]a|prote[çc][ãa]o)\s+contra\s+inc[êe]ndio)"
    ).unwrap();
    pub static ref REPORT_TYPE_PATTERN: Regex =
        Regex::new(r"(?i)laudo(?:\s+t[ée]cnico)?").unwrap();
}

/// Egress-related keywords for presence checks outside the width rule.
pub const EXIT_KEYWORDS: &[&str] = &[
    "saída de emergência",
    "saídas de emergência",
    "saida de emergencia",
    "rota de fuga",
    "rotas de fuga",
    "escada de emergência",
];

/// Check whether any keyword of the group occurs in the lower-cased text.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}
