//! Pure rendering of a [`DebtSummary`] into HTML fragments (for the web pages) and
//! plain text (for the terminal). No business logic lives here.

use super::{
    errors::InquiryError,
    format::{format_currency, format_date_long, format_date_short},
    models::{AlertKind, DebtSummary, EnergyReading, Statistics, WaterInvoice},
};
use std::fmt::Write as _;

const NOT_AVAILABLE: &str = "No disponible";
const NO_INVOICES: &str = "No hay facturas de acueducto registradas";
const NO_READINGS: &str = "No hay consumos de energía registrados";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
}

impl Format {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

#[must_use]
pub fn render(summary: &DebtSummary, format: Format) -> String {
    match format {
        Format::Text => render_text(summary),
        Format::Html => render_html(summary),
    }
}

#[must_use]
pub fn render_error(err: &InquiryError, format: Format) -> String {
    match format {
        Format::Text => format!("{}: {}", err.title(), err),
        Format::Html => format!(
            "<div class=\"error active\"><div id=\"errorMessage\"><strong>{}:</strong><br>{}</div></div>",
            escape_html(err.title()),
            escape_html(&err.to_string())
        ),
    }
}

#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn client_name(summary: &DebtSummary) -> &str {
    summary
        .nombre_cliente
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

fn query_date(summary: &DebtSummary) -> String {
    summary
        .fecha_consulta
        .as_deref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), format_date_long)
}

fn short_date(value: Option<&str>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_date_short)
}

/// The six statistic cards: icon, label, value.
#[must_use]
pub fn statistic_cards(stats: &Statistics) -> [(&'static str, &'static str, String); 6] {
    [
        (
            "💧",
            "Facturas Acueducto",
            stats.total_facturas_acueducto.to_string(),
        ),
        (
            "📊",
            "Deuda Acueducto",
            format_currency(stats.deuda_acumulada_acueducto),
        ),
        (
            "🚰",
            "Consumo Acueducto",
            format!("{} m³", stats.total_consumo_acueducto),
        ),
        (
            "⚡",
            "Deuda Energía",
            format_currency(stats.deuda_acumulada_energia),
        ),
        (
            "💡",
            "Consumo Energía",
            format!("{} kWh", stats.total_consumo_energia),
        ),
        (
            "📈",
            "Promedio Acueducto",
            format!("{:.1} m³", stats.promedio_consumo_acueducto),
        ),
    ]
}

#[must_use]
pub fn render_html(summary: &DebtSummary) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<div id=\"result\" class=\"result active\">\
         <div id=\"nombreCliente\">{}</div>\
         <div id=\"clienteIdDisplay\">{}</div>\
         <div id=\"fechaConsulta\">{}</div>\
         <div id=\"totalAPagar\">{}</div>",
        escape_html(client_name(summary)),
        escape_html(&summary.cliente_id),
        escape_html(&query_date(summary)),
        escape_html(&format_currency(summary.total_a_pagar)),
    );

    html.push_str("<div id=\"estadisticas\">");
    if let Some(stats) = &summary.estadisticas {
        for (icon, label, value) in statistic_cards(stats) {
            let _ = write!(
                html,
                "<div class=\"stat-card\"><div class=\"stat-icon\">{icon}</div>\
                 <div class=\"stat-value\">{}</div><div class=\"stat-label\">{label}</div></div>",
                escape_html(&value)
            );
        }
    }
    html.push_str("</div>");

    html.push_str("<div id=\"alertas\">");
    for alert in &summary.alertas {
        let kind = AlertKind::classify(alert);
        let _ = write!(
            html,
            "<div class=\"{}\">{} {}</div>",
            kind.css_class(),
            kind.icon(),
            escape_html(alert)
        );
    }
    html.push_str("</div>");

    html.push_str("<div id=\"facturasAcueducto\">");
    if summary.facturas_acueducto.is_empty() {
        let _ = write!(html, "<p class=\"empty\">{NO_INVOICES}</p>");
    } else {
        for invoice in &summary.facturas_acueducto {
            html.push_str(&invoice_html(invoice));
        }
    }
    html.push_str("</div>");

    html.push_str("<div id=\"consumosEnergia\">");
    if summary.consumos_energia.is_empty() {
        let _ = write!(html, "<p class=\"empty\">{NO_READINGS}</p>");
    } else {
        for reading in &summary.consumos_energia {
            html.push_str(&reading_html(reading));
        }
    }
    html.push_str("</div></div>");

    html
}

fn invoice_html(invoice: &WaterInvoice) -> String {
    let mut html = String::new();
    let status = invoice.status();

    let _ = write!(
        html,
        "<div class=\"factura-card\"><div class=\"factura-header\">\
         <strong>📄 Factura #{} - Periodo {}</strong>\
         <span class=\"estado-badge {}\">{}</span></div><div class=\"factura-body\">\
         <div><div class=\"result-label\">Consumo</div><div>{} m³</div></div>\
         <div><div class=\"result-label\">Valor</div><div><strong>{}</strong></div></div>\
         <div><div class=\"result-label\">Vencimiento</div><div>{}</div></div>",
        invoice.id,
        escape_html(&invoice.periodo),
        status.css_class(),
        escape_html(&invoice.estado),
        invoice.consumo_metros_cubicos,
        escape_html(&format_currency(invoice.valor_pagar)),
        escape_html(&short_date(invoice.fecha_vencimiento.as_deref())),
    );

    if let Some(days) = invoice.dias_hasta_vencimiento {
        let _ = write!(
            html,
            "<div><div class=\"result-label\">Días</div><div>{days} días</div></div>"
        );
    }

    html.push_str("</div></div>");
    html
}

fn reading_html(reading: &EnergyReading) -> String {
    let badge = if reading.valido {
        "<span class=\"estado-badge estado-pagada\">✓ Válido</span>"
    } else {
        "<span class=\"estado-badge estado-vencida\">✗ Inválido</span>"
    };

    format!(
        "<div class=\"energia-card\"><div class=\"factura-header\">\
         <strong>⚡ Periodo {}</strong>{badge}</div><div class=\"factura-body\">\
         <div><div class=\"result-label\">Consumo</div><div>{} kWh</div></div>\
         <div><div class=\"result-label\">Valor</div><div><strong>{}</strong></div></div>\
         <div><div class=\"result-label\">Fecha Lectura</div><div>{}</div></div></div></div>",
        escape_html(&reading.periodo),
        reading.consumo_kwh,
        escape_html(&format_currency(reading.valor_pagar)),
        escape_html(&short_date(reading.fecha_lectura.as_deref())),
    )
}

#[must_use]
pub fn render_text(summary: &DebtSummary) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "Cliente:        {}", client_name(summary));
    let _ = writeln!(text, "Identificación: {}", summary.cliente_id);
    let _ = writeln!(text, "Consulta:       {}", query_date(summary));
    let _ = writeln!(
        text,
        "Total a pagar:  {}",
        format_currency(summary.total_a_pagar)
    );

    if let Some(stats) = &summary.estadisticas {
        text.push_str("\nEstadísticas\n");
        for (icon, label, value) in statistic_cards(stats) {
            let _ = writeln!(text, "  {icon} {label}: {value}");
        }
    }

    if !summary.alertas.is_empty() {
        text.push_str("\nAlertas\n");
        for alert in &summary.alertas {
            let _ = writeln!(text, "  {} {}", AlertKind::classify(alert).icon(), alert);
        }
    }

    text.push_str("\nFacturas de acueducto\n");
    if summary.facturas_acueducto.is_empty() {
        let _ = writeln!(text, "  {NO_INVOICES}");
    }
    for invoice in &summary.facturas_acueducto {
        let _ = write!(
            text,
            "  #{} {} [{}] {} m³ {} vence {}",
            invoice.id,
            invoice.periodo,
            invoice.estado,
            invoice.consumo_metros_cubicos,
            format_currency(invoice.valor_pagar),
            short_date(invoice.fecha_vencimiento.as_deref()),
        );
        if let Some(days) = invoice.dias_hasta_vencimiento {
            let _ = write!(text, " ({days} días)");
        }
        text.push('\n');
    }

    text.push_str("\nConsumos de energía\n");
    if summary.consumos_energia.is_empty() {
        let _ = writeln!(text, "  {NO_READINGS}");
    }
    for reading in &summary.consumos_energia {
        let _ = writeln!(
            text,
            "  {} [{}] {} kWh {} lectura {}",
            reading.periodo,
            if reading.valido { "✓ Válido" } else { "✗ Inválido" },
            reading.consumo_kwh,
            format_currency(reading.valor_pagar),
            short_date(reading.fecha_lectura.as_deref()),
        );
    }

    text
}
