//! Regional directions (administrative routing units).

/// Raw regional direction entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRecord {
    pub number: u32,
    pub code: &'static str,
    pub name: &'static str,
}

const fn direction(number: u32, code: &'static str, name: &'static str) -> DirectionRecord {
    DirectionRecord { number, code, name }
}

pub static DIRECTIONS: [DirectionRecord; 29] = [
    direction(1, "AC", "AC - ADMINISTRAÇAO CENTRAL"),
    direction(3, "ACR", "DR - ACRE"),
    direction(4, "AL", "DR - ALAGOAS"),
    direction(6, "AM", "DR - AMAZONAS"),
    direction(5, "AP", "DR - AMAPÁ"),
    direction(8, "BA", "DR - BAHIA"),
    direction(10, "BSB", "DR - BRASÍLIA"),
    direction(12, "CE", "DR - CEARÁ"),
    direction(14, "ES", "DR - ESPIRITO SANTO"),
    direction(16, "GO", "DR - GOIÁS"),
    direction(18, "MA", "DR - MARANHÃO"),
    direction(20, "MG", "DR - MINAS GERAIS"),
    direction(22, "MS", "DR - MATO GROSSO DO SUL"),
    direction(24, "MT", "DR - MATO GROSSO"),
    direction(28, "PA", "DR - PARÁ"),
    direction(30, "PB", "DR - PARAÍBA"),
    direction(32, "PE", "DR - PERNAMBUCO"),
    direction(34, "PI", "DR - PIAUÍ"),
    direction(36, "PR", "DR - PARANÁ"),
    direction(50, "RJ", "DR - RIO DE JANEIRO"),
    direction(60, "RN", "DR - RIO GRANDE DO NORTE"),
    direction(26, "RO", "DR - RONDONIA"),
    direction(65, "RR", "DR - RORAIMA"),
    direction(64, "RS", "DR - RIO GRANDE DO SUL"),
    direction(68, "SC", "DR - SANTA CATARINA"),
    direction(70, "SE", "DR - SERGIPE"),
    direction(74, "SPI", "DR - SÃO PAULO INTERIOR"),
    direction(72, "SPM", "DR - SÃO PAULO"),
    direction(75, "TO", "DR - TOCANTINS"),
];
