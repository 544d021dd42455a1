//! Postal service catalog.

use super::extra_services::EXTRA_SERVICE_RR;

pub const SERVICE_PAC: u32 = 41068;
pub const SERVICE_SEDEX: u32 = 40096;
pub const SERVICE_SEDEX10: u32 = 40215;
pub const SERVICE_SEDEX12: u32 = 40169;
pub const SERVICE_E_SEDEX: u32 = 81019;

/// Raw catalog entry. Declared values are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub code: u32,
    pub id: u32,
    pub description: &'static str,
    pub category: &'static str,
    pub display_name: &'static str,
    pub max_weight: Option<u32>,
    pub symbol: Option<&'static str>,
    pub default_extra_services: &'static [u32],
    pub min_declared_value: Option<i64>,
    pub max_declared_value: Option<i64>,
}

const REGISTERED: &[u32] = &[EXTRA_SERVICE_RR];

/// Insured shipment: registered, weight-limited, declared value within bounds.
#[allow(clippy::too_many_arguments)]
const fn shipping(
    code: u32,
    id: u32,
    description: &'static str,
    category: &'static str,
    display_name: &'static str,
    max_weight: u32,
    symbol: &'static str,
    max_declared_value: i64,
) -> ServiceRecord {
    ServiceRecord {
        code,
        id,
        description,
        category,
        display_name,
        max_weight: Some(max_weight),
        symbol: Some(symbol),
        default_extra_services: REGISTERED,
        min_declared_value: Some(17_00),
        max_declared_value: Some(max_declared_value),
    }
}

const fn letter(
    code: u32,
    id: u32,
    description: &'static str,
    category: &'static str,
    display_name: &'static str,
) -> ServiceRecord {
    ServiceRecord {
        code,
        id,
        description,
        category,
        display_name,
        max_weight: None,
        symbol: None,
        default_extra_services: &[],
        min_declared_value: None,
        max_declared_value: None,
    }
}

pub static SERVICES: [ServiceRecord; 19] = [
    shipping(40215, 104707, "SEDEX 10", "SERVICO_COM_RESTRICAO", "SEDEX 10", 10_000, "premium", 10_000_00),
    shipping(81019, 104672, "E-SEDEX STANDARD", "SERVICO_COM_RESTRICAO", "E-SEDEX", 15_000, "express", 10_000_00),
    shipping(41068, 109819, "PAC", "PAC", "PAC", 30_000, "standard", 3_000_00),
    shipping(40444, 109811, "SEDEX - CONTRATO", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40436, 109810, "SEDEX - CONTRATO", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40096, 104625, "SEDEX (CONTRATO)", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40380, 109806, "SEDEX REVERSO 40096", "REVERSO", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40010, 104295, "SEDEX A VISTA", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(41211, 113546, "PAC - CONTRATO", "PAC", "PAC", 30_000, "standard", 3_000_00),
    shipping(40630, 114976, "SEDEX PAGAMENTO NA ENTREGA -", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40916, 118568, "SEDEX AGRUPADO II", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(40908, 118567, "SEDEX AGRUPADO I", "SEDEX", "SEDEX", 30_000, "express", 10_000_00),
    shipping(41300, 120366, "PAC GRANDES FORMATOS", "SERVICO_COM_RESTRICAO", "PAC", 50_000, "standard", 3_000_00),
    shipping(40169, 115218, "SEDEX 12", "SERVICO_COM_RESTRICAO", "SEDEX 12", 10_000, "premium", 10_000_00),
    shipping(40290, 108934, "SEDEX HOJE", "SERVICO_COM_RESTRICAO", "SEDEX Hoje", 10_000, "premium", 10_000_00),
    letter(10154, 118424, "CARTA COMERCIAL  REGISTRADA", "CARTA_REGISTRADA", "Carta Registrada"),
    letter(41246, 115487, "REM. CAMPANHA PAPAI NOEL DOS", "SEM_CATEGORIA", "Papai Noel dos Correios"),
    letter(40150, 115136, "SERVICO DE PROTOCOLO POSTAL -", "SEDEX", "Protocolo"),
    letter(10065, 109480, "CARTA COMERCIAL A FATURAR", "CARTA_REGISTRADA", "Carta Comercial"),
];
