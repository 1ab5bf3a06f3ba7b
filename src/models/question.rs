// src/models/question.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of DETRAN exam topics a question can belong to.
///
/// Serialized as the Portuguese label shown to candidates, which is also the
/// key used in the per-category result breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Legislação de Trânsito")]
    LegislacaoDeTransito,
    #[serde(rename = "Direção Defensiva")]
    DirecaoDefensiva,
    #[serde(rename = "Sinalização de Trânsito")]
    SinalizacaoDeTransito,
    #[serde(rename = "Primeiros Socorros")]
    PrimeirosSocorros,
    #[serde(rename = "Meio Ambiente e Cidadania")]
    MeioAmbienteECidadania,
    #[serde(rename = "Mecânica Básica")]
    MecanicaBasica,
    #[serde(rename = "Infrações e Penalidades")]
    InfracoesEPenalidades,
    #[serde(rename = "Normas de Circulação")]
    NormasDeCirculacao,
    #[serde(rename = "Processo de Habilitação")]
    ProcessoDeHabilitacao,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::LegislacaoDeTransito => "Legislação de Trânsito",
            Category::DirecaoDefensiva => "Direção Defensiva",
            Category::SinalizacaoDeTransito => "Sinalização de Trânsito",
            Category::PrimeirosSocorros => "Primeiros Socorros",
            Category::MeioAmbienteECidadania => "Meio Ambiente e Cidadania",
            Category::MecanicaBasica => "Mecânica Básica",
            Category::InfracoesEPenalidades => "Infrações e Penalidades",
            Category::NormasDeCirculacao => "Normas de Circulação",
            Category::ProcessoDeHabilitacao => "Processo de Habilitação",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item of the simulado question bank.
///
/// The options are a fixed-order list of exactly four alternatives;
/// `correct_option` indexes into them. The catalog is immutable after
/// process start, so questions are only ever cloned into sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub category: Category,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_option: usize,
}

/// DTO for sending a question to the client (excludes the correct answer).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub category: Category,
    pub prompt: String,
    pub options: [String; 4],
}

impl From<&QuizQuestion> for PublicQuestion {
    fn from(q: &QuizQuestion) -> Self {
        PublicQuestion {
            id: q.id,
            category: q.category,
            prompt: q.prompt.clone(),
            options: q.options.clone(),
        }
    }
}
