//! Built-in corpus of fire-safety technical instructions (ITs).
//!
//! Read-only and shared across analyses. Callers may substitute their own
//! corpus through [`crate::EngineConfig`]; this module only supplies the
//! default entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionCorpusEntry {
    pub id: String,
    /// Display code ("IT-11").
    pub number: String,
    pub title: String,
    pub short_description: String,
    pub full_content: String,
    /// Topic category, aligned with the semantic term dictionary.
    pub category: String,
}

impl InstructionCorpusEntry {
    fn new(
        id: &str,
        number: &str,
        title: &str,
        short_description: &str,
        full_content: &str,
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            number: number.to_string(),
            title: title.to_string(),
            short_description: short_description.to_string(),
            full_content: full_content.to_string(),
            category: category.to_string(),
        }
    }
}

/// Default instruction corpus, in evaluation order.
pub fn default_corpus() -> Vec<InstructionCorpusEntry> {
    vec![
        InstructionCorpusEntry::new(
            "it-01-procedimentos",
            "IT-01",
            "Procedimentos Administrativos",
            "Documentação, responsabilidade técnica e tramitação do processo de segurança contra incêndio.",
            "O processo de regularização exige memorial descritivo, projeto técnico e anotação de \
             responsabilidade técnica (ART) do profissional habilitado, com registro no CREA ou CAU. \
             A documentação deve identificar o responsável técnico pela elaboração e execução das \
             medidas de segurança contra incêndio, sujeitas a vistoria do Corpo de Bombeiros para \
             licenciamento e aprovação.",
            "procedimentos",
        ),
        InstructionCorpusEntry::new(
            "it-04-classificacao",
            "IT-04",
            "Classificação das Edificações quanto à Ocupação",
            "Enquadramento da edificação por grupo e divisão de ocupação, área e altura.",
            "Toda edificação deve ser classificada quanto à ocupação em grupo e divisão, considerando \
             o uso predominante, a carga de incêndio, a área construída, a altura e o número de \
             pavimentos. A classificação determina o risco e as medidas de segurança exigíveis para a \
             edificação.",
            "classificacao",
        ),
        InstructionCorpusEntry::new(
            "it-10-materiais",
            "IT-10",
            "Controle de Materiais de Acabamento e de Revestimento",
            "Classes de reação ao fogo dos materiais de acabamento de piso, parede e teto.",
            "Os materiais de acabamento e de revestimento empregados em piso, parede, teto e forro \
             devem ser classificados quanto à propagação de chama e à densidade de fumaça, atendendo \
             às classes admitidas para cada ocupação. Materiais incombustíveis são admitidos sem \
             restrição.",
            "materiais",
        ),
        InstructionCorpusEntry::new(
            "it-11-saidas",
            "IT-11",
            "Saídas de Emergência",
            "Dimensionamento de saídas, rotas de fuga, escadas e portas para abandono seguro.",
            "As saídas de emergência devem ser dimensionadas em função da população de cada pavimento, \
             com largura mínima das rotas de fuga, portas, escadas e corredores calculada pela unidade \
             de passagem. As rotas de fuga devem permanecer desobstruídas, sinalizadas e com acesso à \
             descarga, garantindo o abandono seguro da edificação. Corrimãos e guarda-corpos são \
             exigidos nas escadas.",
            "saidas",
        ),
        InstructionCorpusEntry::new(
            "it-15-fumaca",
            "IT-15",
            "Controle de Fumaça",
            "Ventilação e extração de fumaça das rotas de fuga e áreas de grande permanência.",
            "O sistema de controle de fumaça deve garantir a extração ou a tiragem natural ou mecânica \
             da fumaça, por aberturas de ventilação, dutos e dampers, mantendo as rotas de fuga e as \
             escadas pressurizadas livres de fumaça durante o abandono.",
            "ventilacao",
        ),
        InstructionCorpusEntry::new(
            "it-18-iluminacao",
            "IT-18",
            "Iluminação de Emergência",
            "Sistema de iluminação de emergência com autonomia mínima para abandono e balizamento.",
            "O sistema de iluminação de emergência deve garantir níveis mínimos de aclaramento e \
             balizamento das rotas de fuga, por blocos autônomos ou central com bateria, com autonomia \
             mínima de funcionamento de duas horas, assegurando a sinalização das saídas durante o \
             abandono da edificação.",
            "iluminacao",
        ),
        InstructionCorpusEntry::new(
            "it-19-deteccao",
            "IT-19",
            "Sistemas de Detecção e Alarme de Incêndio",
            "Detectores, acionadores manuais, central e avisadores de alarme de incêndio.",
            "O sistema de detecção e alarme de incêndio deve cobrir a edificação com detectores de \
             fumaça ou térmicos, acionadores manuais junto às saídas, central de alarme supervisionada \
             e avisadores sonoros audíveis em toda a edificação.",
            "deteccao",
        ),
        InstructionCorpusEntry::new(
            "it-21-extintores",
            "IT-21",
            "Sistema de Proteção por Extintores de Incêndio",
            "Distribuição, capacidade extintora e tipos de extintores portáteis.",
            "A edificação deve ser protegida por extintores portáteis distribuídos de forma que a \
             distância máxima a percorrer até o extintor não exceda os limites admitidos, com \
             capacidade extintora compatível com a classe de fogo do risco: água pressurizada, pó \
             químico ou CO2. Cada unidade extintora deve permanecer sinalizada e desobstruída.",
            "extintores",
        ),
        InstructionCorpusEntry::new(
            "it-22-hidrantes",
            "IT-22",
            "Sistemas de Hidrantes e de Mangotinhos",
            "Rede de hidrantes, reserva técnica de incêndio, bombas e pressão mínima.",
            "O sistema de hidrantes deve dispor de reserva técnica de incêndio em reservatório \
             dimensionado para a edificação, bomba de incêndio assegurando pressão e vazão mínimas nos \
             esguichos, mangueiras e registro de recalque no passeio. A tubulação deve atender ao \
             dimensionamento da rede.",
            "hidrantes",
        ),
        InstructionCorpusEntry::new(
            "it-23-chuveiros",
            "IT-23",
            "Sistemas de Chuveiros Automáticos",
            "Cobertura por chuveiros automáticos (sprinklers), densidade e válvulas de governo.",
            "O sistema de chuveiros automáticos deve cobrir as áreas protegidas com bicos aspersores \
             dimensionados por densidade de projeto, válvula de governo e alarme, garantindo a \
             supressão automática do incêndio no ramal atingido.",
            "chuveiros",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corpus_is_ordered_and_complete() {
        let corpus = default_corpus();
        assert_eq!(corpus.len(), 10);
        assert_eq!(corpus[0].number, "IT-01");
        assert!(corpus.iter().all(|e| !e.full_content.is_empty()));
        assert!(corpus.iter().all(|e| !e.category.is_empty()));
    }

    #[test]
    fn test_corpus_ids_are_unique() {
        let corpus = default_corpus();
        let mut ids: Vec<_> = corpus.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), corpus.len());
    }
}
