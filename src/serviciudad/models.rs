//! Response body of `GET /api/deuda/cliente/{clienteId}`. Every field is optional
//! on the wire; missing or `null` values fall back to their defaults.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtSummary {
    pub nombre_cliente: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cliente_id: String,
    pub fecha_consulta: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_a_pagar: f64,
    pub estadisticas: Option<Statistics>,
    #[serde(deserialize_with = "null_as_default")]
    pub alertas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub facturas_acueducto: Vec<WaterInvoice>,
    #[serde(deserialize_with = "null_as_default")]
    pub consumos_energia: Vec<EnergyReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    #[serde(deserialize_with = "null_as_default")]
    pub total_facturas_acueducto: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub deuda_acumulada_acueducto: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_consumo_acueducto: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deuda_acumulada_energia: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_consumo_energia: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub promedio_consumo_acueducto: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterInvoice {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub periodo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub estado: String,
    #[serde(deserialize_with = "null_as_default")]
    pub consumo_metros_cubicos: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub valor_pagar: f64,
    pub fecha_vencimiento: Option<String>,
    pub dias_hasta_vencimiento: Option<i64>,
}

impl WaterInvoice {
    #[must_use]
    pub fn status(&self) -> InvoiceStatus {
        InvoiceStatus::from_estado(&self.estado)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyReading {
    #[serde(deserialize_with = "null_as_default")]
    pub periodo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub valido: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub consumo_kwh: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub valor_pagar: f64,
    pub fecha_lectura: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Overdue,
    Pending,
}

impl InvoiceStatus {
    #[must_use]
    pub fn from_estado(estado: &str) -> Self {
        match estado {
            "PAGADA" => Self::Paid,
            "VENCIDA" => Self::Overdue,
            _ => Self::Pending,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Paid => "estado-pagada",
            Self::Overdue => "estado-vencida",
            Self::Pending => "estado-pendiente",
        }
    }
}

/// Alert category derived from the tag embedded in the alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Danger,
    Info,
}

impl AlertKind {
    /// `VENCIMIENTO_PROXIMO` is checked first: it must not be read as `VENCIDA`.
    #[must_use]
    pub fn classify(alert: &str) -> Self {
        if alert.contains("VENCIMIENTO_PROXIMO") {
            Self::Warning
        } else if alert.contains("VENCIDA") {
            Self::Danger
        } else {
            Self::Info
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "alert alert-warning",
            Self::Danger => "alert alert-danger",
            Self::Info => "alert alert-info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Danger => "🚨",
            Self::Info => "ℹ️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_body() {
        let body = json!({
            "nombreCliente": "María Pérez",
            "clienteId": "0001234567",
            "fechaConsulta": "2025-10-17T14:30:00",
            "totalAPagar": 125000,
            "estadisticas": {
                "totalFacturasAcueducto": 2,
                "deudaAcumuladaAcueducto": 80000.5,
                "totalConsumoAcueducto": 30,
                "deudaAcumuladaEnergia": 45000,
                "totalConsumoEnergia": 210,
                "promedioConsumoAcueducto": 15.25
            },
            "alertas": ["VENCIDA: factura 10"],
            "facturasAcueducto": [{
                "id": 10,
                "periodo": "202509",
                "estado": "VENCIDA",
                "consumoMetrosCubicos": 15,
                "valorPagar": 40000,
                "fechaVencimiento": "2025-10-01",
                "diasHastaVencimiento": -16
            }],
            "consumosEnergia": [{
                "periodo": "202509",
                "valido": true,
                "consumoKwh": 210,
                "valorPagar": 45000,
                "fechaLectura": "2025-09-30"
            }]
        });

        let summary: DebtSummary = serde_json::from_value(body).unwrap();
        assert_eq!(summary.cliente_id, "0001234567");
        assert_eq!(summary.total_a_pagar, 125_000.0);
        let stats = summary.estadisticas.unwrap();
        assert_eq!(stats.total_facturas_acueducto, 2);
        assert_eq!(summary.facturas_acueducto[0].status(), InvoiceStatus::Overdue);
        assert_eq!(summary.facturas_acueducto[0].dias_hasta_vencimiento, Some(-16));
        assert!(summary.consumos_energia[0].valido);
    }

    #[test]
    fn tolerates_missing_and_null_fields() {
        let body = json!({
            "clienteId": "0001234567",
            "alertas": null,
            "facturasAcueducto": null,
            "totalAPagar": null
        });

        let summary: DebtSummary = serde_json::from_value(body).unwrap();
        assert!(summary.alertas.is_empty());
        assert!(summary.facturas_acueducto.is_empty());
        assert!(summary.consumos_energia.is_empty());
        assert!(summary.estadisticas.is_none());
        assert_eq!(summary.total_a_pagar, 0.0);
    }

    #[test]
    fn classifies_alerts() {
        assert_eq!(
            AlertKind::classify("VENCIMIENTO_PROXIMO: factura 11 vence en 3 días"),
            AlertKind::Warning
        );
        assert_eq!(AlertKind::classify("VENCIDA: factura 10"), AlertKind::Danger);
        assert_eq!(
            AlertKind::classify("CONSUMO_ALTO: energía"),
            AlertKind::Info
        );
    }

    #[test]
    fn invoice_status_defaults_to_pending() {
        assert_eq!(InvoiceStatus::from_estado("PAGADA"), InvoiceStatus::Paid);
        assert_eq!(InvoiceStatus::from_estado("VENCIDA"), InvoiceStatus::Overdue);
        assert_eq!(InvoiceStatus::from_estado("PENDIENTE"), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::from_estado(""), InvoiceStatus::Pending);
    }
}
