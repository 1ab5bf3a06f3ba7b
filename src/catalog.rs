// src/catalog.rs
//
// The static simulado question bank: 30 DETRAN-style questions across the
// nine exam topics. Loaded once at startup into the QuestionBank.

use crate::models::question::{Category, QuizQuestion};

fn q(
    id: i64,
    category: Category,
    prompt: &str,
    options: [&str; 4],
    correct_option: usize,
) -> QuizQuestion {
    QuizQuestion {
        id,
        category,
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct_option,
    }
}

pub fn catalog() -> Vec<QuizQuestion> {
    use Category::*;

    vec![
        q(
            1,
            LegislacaoDeTransito,
            "Qual é a velocidade máxima permitida em vias urbanas de trânsito rápido, quando não houver sinalização?",
            ["60 km/h", "70 km/h", "80 km/h", "90 km/h"],
            2,
        ),
        q(
            2,
            LegislacaoDeTransito,
            "A Carteira Nacional de Habilitação da categoria B permite conduzir:",
            [
                "Motocicletas de qualquer cilindrada",
                "Veículos de passeio de até 8 lugares, excluído o condutor",
                "Ônibus urbanos",
                "Caminhões acima de 6.000 kg",
            ],
            1,
        ),
        q(
            3,
            LegislacaoDeTransito,
            "Dirigir sob a influência de álcool é considerado infração:",
            ["Leve", "Média", "Grave", "Gravíssima"],
            3,
        ),
        q(
            4,
            LegislacaoDeTransito,
            "O uso do cinto de segurança é obrigatório:",
            [
                "Apenas para o condutor",
                "Apenas nos bancos dianteiros",
                "Para condutor e todos os passageiros",
                "Apenas em rodovias",
            ],
            2,
        ),
        q(
            5,
            LegislacaoDeTransito,
            "A idade mínima para obter a primeira habilitação é:",
            ["16 anos", "17 anos", "18 anos", "21 anos"],
            2,
        ),
        q(
            6,
            DirecaoDefensiva,
            "Direção defensiva é:",
            [
                "Dirigir devagar em qualquer situação",
                "Dirigir de modo a evitar acidentes, apesar das ações incorretas dos outros",
                "Usar a buzina para alertar os demais condutores",
                "Manter o veículo sempre na faixa da esquerda",
            ],
            1,
        ),
        q(
            7,
            DirecaoDefensiva,
            "Em pista molhada, a distância de seguimento em relação ao veículo da frente deve ser:",
            ["Mantida igual à de pista seca", "Reduzida", "Aumentada", "Irrelevante"],
            2,
        ),
        q(
            8,
            DirecaoDefensiva,
            "Ao perceber aquaplanagem, o condutor deve:",
            [
                "Frear bruscamente",
                "Acelerar para sair da lâmina de água",
                "Manter a direção firme e aliviar o acelerador",
                "Girar o volante para o acostamento",
            ],
            2,
        ),
        q(
            9,
            DirecaoDefensiva,
            "O principal fator de risco associado à fadiga ao volante é:",
            [
                "O aumento do consumo de combustível",
                "A redução do tempo de reação do condutor",
                "O desgaste prematuro dos pneus",
                "O superaquecimento do motor",
            ],
            1,
        ),
        q(
            10,
            DirecaoDefensiva,
            "Antes de iniciar uma ultrapassagem, o condutor deve:",
            [
                "Buzinar três vezes",
                "Certificar-se de que dispõe de espaço e visibilidade suficientes",
                "Acender o pisca-alerta",
                "Reduzir a marcha para a primeira",
            ],
            1,
        ),
        q(
            11,
            SinalizacaoDeTransito,
            "A placa R-1 (octógono vermelho) significa:",
            [
                "Dê a preferência",
                "Parada obrigatória",
                "Proibido estacionar",
                "Sentido proibido",
            ],
            1,
        ),
        q(
            12,
            SinalizacaoDeTransito,
            "As placas de advertência têm, em regra, a cor:",
            ["Vermelha", "Azul", "Amarela", "Verde"],
            2,
        ),
        q(
            13,
            SinalizacaoDeTransito,
            "A luz amarela do semáforo indica:",
            [
                "Passagem liberada",
                "Atenção, o sinal vai mudar; pare se for seguro",
                "Parada obrigatória imediata em qualquer situação",
                "Defeito no semáforo",
            ],
            1,
        ),
        q(
            14,
            SinalizacaoDeTransito,
            "A faixa contínua amarela no centro da pista indica:",
            [
                "Ultrapassagem permitida",
                "Ultrapassagem proibida",
                "Estacionamento permitido",
                "Via de mão única",
            ],
            1,
        ),
        q(
            15,
            PrimeirosSocorros,
            "Ao presenciar um acidente com vítimas, a primeira providência é:",
            [
                "Remover as vítimas do veículo",
                "Sinalizar o local e chamar o socorro especializado",
                "Oferecer água às vítimas",
                "Retirar o capacete dos motociclistas",
            ],
            1,
        ),
        q(
            16,
            PrimeirosSocorros,
            "Uma vítima inconsciente de acidente de moto deve ter o capacete:",
            [
                "Removido imediatamente",
                "Mantido, salvo se impedir a respiração e por pessoa treinada",
                "Afrouxado e girado",
                "Trocado por um colar cervical improvisado",
            ],
            1,
        ),
        q(
            17,
            PrimeirosSocorros,
            "Em caso de hemorragia externa intensa, deve-se:",
            [
                "Aplicar torniquete imediatamente",
                "Comprimir o ferimento com pano limpo",
                "Lavar o ferimento com álcool",
                "Manter o membro abaixado",
            ],
            1,
        ),
        q(
            18,
            PrimeirosSocorros,
            "O número do SAMU para emergências médicas é:",
            ["190", "191", "192", "193"],
            2,
        ),
        q(
            19,
            MeioAmbienteECidadania,
            "A manutenção correta do motor contribui para:",
            [
                "Aumentar a emissão de poluentes",
                "Reduzir a emissão de poluentes",
                "Aumentar o ruído do veículo",
                "Reduzir a vida útil do catalisador",
            ],
            1,
        ),
        q(
            20,
            MeioAmbienteECidadania,
            "Jogar lixo pela janela do veículo é:",
            [
                "Permitido em rodovias",
                "Infração de trânsito e dano ao meio ambiente",
                "Tolerado em vias rurais",
                "Apenas falta de educação, sem punição",
            ],
            1,
        ),
        q(
            21,
            MeioAmbienteECidadania,
            "O uso racional da buzina está relacionado ao combate à:",
            ["Poluição do ar", "Poluição sonora", "Poluição visual", "Poluição da água"],
            1,
        ),
        q(
            22,
            MecanicaBasica,
            "O sistema responsável por reter o veículo parado em rampas é:",
            [
                "O freio de estacionamento",
                "A embreagem",
                "O câmbio",
                "A suspensão",
            ],
            0,
        ),
        q(
            23,
            MecanicaBasica,
            "Pneus com sulcos abaixo do limite (carecas) comprometem principalmente:",
            [
                "O consumo de combustível apenas",
                "A aderência e a frenagem",
                "O funcionamento do alternador",
                "A iluminação do painel",
            ],
            1,
        ),
        q(
            24,
            MecanicaBasica,
            "A luz de óleo acesa no painel com o motor em funcionamento indica:",
            [
                "Nível alto de combustível",
                "Problema na lubrificação; pare o motor",
                "Farol alto ligado",
                "Porta aberta",
            ],
            1,
        ),
        q(
            25,
            InfracoesEPenalidades,
            "Avançar o sinal vermelho do semáforo é infração:",
            ["Leve", "Média", "Grave", "Gravíssima"],
            3,
        ),
        q(
            26,
            InfracoesEPenalidades,
            "Estacionar em vaga reservada a pessoa com deficiência, sem credencial, é infração:",
            ["Leve", "Média", "Grave", "Gravíssima"],
            3,
        ),
        q(
            27,
            NormasDeCirculacao,
            "Em uma rotatória, a preferência de passagem é:",
            [
                "De quem entra na rotatória",
                "De quem já circula na rotatória",
                "Do veículo maior",
                "Do veículo mais rápido",
            ],
            1,
        ),
        q(
            28,
            NormasDeCirculacao,
            "A ultrapassagem de outro veículo deve ser feita:",
            [
                "Pela direita, em regra",
                "Pela esquerda, em regra",
                "Pelo acostamento",
                "Por qualquer lado, livremente",
            ],
            1,
        ),
        q(
            29,
            ProcessoDeHabilitacao,
            "A Permissão para Dirigir (PPD) tem validade de:",
            ["6 meses", "1 ano", "2 anos", "5 anos"],
            1,
        ),
        q(
            30,
            ProcessoDeHabilitacao,
            "Durante a validade da Permissão para Dirigir, o condutor não pode cometer:",
            [
                "Nenhuma infração de qualquer natureza",
                "Infração gravíssima, grave ou ser reincidente em média",
                "Mais de cinco infrações leves",
                "Infrações em rodovias federais",
            ],
            1,
        ),
    ]
}
