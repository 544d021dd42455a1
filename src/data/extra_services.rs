//! Extra services that can be attached to a shipment.

pub const EXTRA_SERVICE_AR: u32 = 1;
pub const EXTRA_SERVICE_MP: u32 = 2;
pub const EXTRA_SERVICE_VD: u32 = 19;
pub const EXTRA_SERVICE_RR: u32 = 25;

/// Raw extra service entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraServiceRecord {
    pub number: u32,
    pub code: &'static str,
    pub name: &'static str,
}

pub static EXTRA_SERVICES: [ExtraServiceRecord; 4] = [
    ExtraServiceRecord {
        number: EXTRA_SERVICE_AR,
        code: "AR",
        name: "Aviso de Recebimento",
    },
    ExtraServiceRecord {
        number: EXTRA_SERVICE_MP,
        code: "MP",
        name: "Mão Própria Nacional",
    },
    ExtraServiceRecord {
        number: EXTRA_SERVICE_VD,
        code: "VD",
        name: "Valor Declarado (Encomendas)",
    },
    ExtraServiceRecord {
        number: EXTRA_SERVICE_RR,
        code: "RR",
        name: "Registro Nacional",
    },
];
