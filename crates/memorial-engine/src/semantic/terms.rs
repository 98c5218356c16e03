//! Curated technical vocabulary, organized by topic category.
//!
//! Terms are stored pre-normalized (lower case, no diacritics) so they can
//! be compared directly against normalized tokens. The categories mirror
//! the instruction corpus categories.

/// One topic category of the technical vocabulary.
pub struct TermCategory {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

pub const TERM_CATEGORIES: &[TermCategory] = &[
    TermCategory {
        name: "procedimentos",
        terms: &[
            "memorial", "descritivo", "projeto", "responsavel", "tecnico", "crea", "cau",
            "art", "vistoria", "licenciamento", "regularizacao", "documentacao", "aprovacao",
            "bombeiros",
        ],
    },
    TermCategory {
        name: "classificacao",
        terms: &[
            "ocupacao", "divisao", "grupo", "classificacao", "risco", "carga", "incendio",
            "altura", "area", "pavimento", "edificacao", "uso",
        ],
    },
    TermCategory {
        name: "saidas",
        terms: &[
            "saida", "saidas", "emergencia", "escada", "rota", "fuga", "largura", "porta",
            "corrimao", "acesso", "descarga", "lotacao", "populacao", "abandono",
        ],
    },
    TermCategory {
        name: "iluminacao",
        terms: &[
            "iluminacao", "emergencia", "autonomia", "bloco", "autonomo", "luminaria",
            "bateria", "circuito", "balizamento", "aclaramento", "sinalizacao",
        ],
    },
    TermCategory {
        name: "extintores",
        terms: &[
            "extintor", "extintores", "quimico", "agua", "pressurizada", "capacidade",
            "extintora", "classe", "fogo", "portatil", "distribuicao", "sinalizado",
        ],
    },
    TermCategory {
        name: "hidrantes",
        terms: &[
            "hidrante", "hidrantes", "mangueira", "mangotinho", "esguicho", "recalque",
            "reserva", "reservatorio", "bomba", "pressao", "vazao", "tubulacao", "registro",
        ],
    },
    TermCategory {
        name: "chuveiros",
        terms: &[
            "chuveiro", "chuveiros", "automatico", "automaticos", "sprinkler", "ramal",
            "bico", "aspersor", "cobertura", "densidade", "valvula", "governo",
        ],
    },
    TermCategory {
        name: "deteccao",
        terms: &[
            "deteccao", "detector", "detectores", "fumaca", "alarme", "acionador", "manual",
            "central", "sirene", "aviso", "sensor", "termico",
        ],
    },
    TermCategory {
        name: "materiais",
        terms: &[
            "acabamento", "revestimento", "material", "materiais", "classe", "propagacao",
            "chama", "piso", "parede", "teto", "forro", "incombustivel",
        ],
    },
    TermCategory {
        name: "ventilacao",
        terms: &[
            "ventilacao", "fumaca", "controle", "exaustao", "pressurizacao", "duto",
            "damper", "abertura", "tiragem", "natural", "mecanica",
        ],
    },
];

/// Flattened technical vocabulary used to weight tokens during
/// vectorization. Injected via [`crate::EngineConfig`]; tests may
/// substitute a smaller dictionary.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    terms: Vec<String>,
}

impl TermDictionary {
    /// Dictionary with the full built-in vocabulary.
    pub fn builtin() -> Self {
        let terms = TERM_CATEGORIES
            .iter()
            .flat_map(|c| c.terms.iter().map(|t| t.to_string()))
            .collect();
        Self { terms }
    }

    /// Dictionary over caller-provided terms (expected pre-normalized).
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// A token is technical when it matches a dictionary entry as a
    /// substring, in either direction.
    pub fn is_technical(&self, token: &str) -> bool {
        self.terms
            .iter()
            .any(|term| token.contains(term.as_str()) || term.contains(token))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Templated remediation suggestion for a corpus category.
pub fn suggestion_for_category(category: &str) -> String {
    match category {
        "procedimentos" => {
            "Revisar a documentação do processo e a anotação de responsabilidade técnica."
        }
        "classificacao" => {
            "Confirmar o enquadramento da ocupação e os parâmetros de área e altura da edificação."
        }
        "saidas" => "Detalhar o dimensionamento das saídas de emergência e das rotas de fuga.",
        "iluminacao" => "Especificar o sistema de iluminação de emergência e sua autonomia.",
        "extintores" => "Detalhar a distribuição e a capacidade extintora dos extintores.",
        "hidrantes" => "Descrever a rede de hidrantes, a reserva técnica e o conjunto de bombas.",
        "chuveiros" => "Avaliar a exigência de chuveiros automáticos para a ocupação.",
        "deteccao" => "Especificar o sistema de detecção e alarme de incêndio.",
        "materiais" => "Classificar os materiais de acabamento e revestimento quanto à reação ao fogo.",
        "ventilacao" => "Detalhar o sistema de controle de fumaça e ventilação das rotas de fuga.",
        _ => "Complementar o memorial com as informações exigidas pela instrução técnica.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionary_covers_all_categories() {
        let dict = TermDictionary::builtin();
        assert!(dict.len() > 100);
        assert!(dict.is_technical("extintor"));
        assert!(dict.is_technical("hidrante"));
    }

    #[test]
    fn test_substring_match_in_both_directions() {
        let dict = TermDictionary::builtin();
        // token contains a dictionary term
        assert!(dict.is_technical("extintores"));
        // dictionary term contains the token
        assert!(dict.is_technical("hidrant"));
        assert!(!dict.is_technical("orçamento"));
    }

    #[test]
    fn test_every_category_has_a_suggestion() {
        for category in TERM_CATEGORIES {
            let suggestion = suggestion_for_category(category.name);
            assert!(!suggestion.is_empty());
            assert!(!suggestion.starts_with("Complementar o memorial"), "{}", category.name);
        }
    }
}
