use chrono::{DateTime, Days, TimeZone, Utc};
use cotiza::core::*;
use cotiza::document::{DEFAULT_LOGO_DATA_URI, render_document};
use rust_decimal_macros::dec;
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 16, 30, 0).unwrap()
}

fn bolt_line() -> LineItem {
    LineItem {
        name: "Bolt".into(),
        quantity: 2,
        tax_rate_percent: dec!(19),
        locations: vec![StockLocation {
            unit_price_incl_tax: dec!(1190),
        }],
    }
}

fn record(record_type: RecordType) -> Record {
    Record {
        record_type,
        number: "COT-0042".into(),
        created_at: now(),
        client: ClientInfo {
            names: Some("María".into()),
            last_names: Some("Gómez".into()),
            tax_id: Some("900123456".into()),
            address: Some("Cra 23 #10-15".into()),
            city: Some("Manizales".into()),
            phone: Some("3001234567".into()),
        },
        company: CompanyInfo {
            name: "AMAS Ferretería".into(),
            phone: "8871234".into(),
            address: "Av Santander 45".into(),
            tax_id: "901000111-2".into(),
        },
        content: None,
        line_items: vec![bolt_line()],
    }
}

fn render(record: &Record, at: DateTime<Utc>) -> String {
    render_document(record, DEFAULT_LOGO_DATA_URI, at).unwrap()
}

// --- Structure and headings ---

#[test]
fn quote_heading_and_reference_amounts() {
    let html = render(&record(RecordType::Quote), now());
    assert!(html.starts_with("<!DOCTYPE html><html>"));
    assert!(html.contains("Cotización: "));
    assert!(html.contains("COT-0042"));
    // Bolt reference case: 1190 incl. 19% → 1000 net, 190 tax, 2380 total
    assert!(html.contains("$ 1,000.00"));
    assert!(html.contains("$ 190.00"));
    assert!(html.contains("$ 2,380.00"));
    // table headers
    for header in ["Item", "Descripción", "Cant", "P Unitario sin IVA", "IVA Unitario", "P Total"] {
        assert!(html.contains(header), "missing header {header}");
    }
}

#[test]
fn order_heading_is_pedido() {
    let html = render(&record(RecordType::Order), now());
    assert!(html.contains("Pedido: "));
    assert!(!html.contains("Cotización: "));
}

#[test]
fn preorder_has_no_heading_line_only_date() {
    let html = render(&record(RecordType::Preorder), now());
    assert!(!html.contains("Pedido: "));
    assert!(!html.contains("Cotización: "));
    assert!(html.contains("Fecha: "));
}

#[test]
fn date_is_spelled_out_in_spanish_local_time() {
    // 2026-06-15 16:30 UTC is Monday 11:30 in Bogotá
    let html = render(&record(RecordType::Quote), now());
    assert!(html.contains("lunes, junio 15 2026 11:30:00"));
}

#[test]
fn totals_block_lines() {
    let html = render(&record(RecordType::Quote), now());
    assert!(html.contains("Total Neto:"));
    assert!(html.contains("IVA Total:"));
    assert!(html.contains("Total a pagar:"));
}

#[test]
fn render_is_deterministic_for_fixed_clock() {
    let rec = record(RecordType::Quote);
    assert_eq!(render(&rec, now()), render(&rec, now()));
}

// --- Edge cases ---

#[test]
fn empty_line_items_render_zero_total_and_no_body_rows() {
    let mut rec = record(RecordType::Order);
    rec.line_items.clear();
    let html = render(&rec, now());
    // header row + total row only
    assert_eq!(html.matches("<tr").count(), 2);
    assert!(html.contains("Total"));
    assert!(html.contains("$ 0.00"));
}

#[test]
fn missing_client_fields_keep_their_labels() {
    let mut rec = record(RecordType::Quote);
    rec.client = ClientInfo::default();
    let html = render(&rec, now());
    for label in ["Cliente: ", "NIT/CC: ", "Dirección: ", "Ciudad: ", "Teléfono: "] {
        assert!(html.contains(label), "missing label {label}");
    }
    // no placeholder junk in place of the values
    assert!(!html.contains("null"));
}

#[test]
fn content_object_renders_one_row_per_entry_in_order() {
    let mut rec = record(RecordType::Quote);
    rec.content = Some(json!({
        "Entrega": "48 horas",
        "Garantía": "6 meses",
        "Anticipo": 50
    }));
    let html = render(&rec, now());
    let entrega = html.find("Entrega").unwrap();
    let garantia = html.find("Garantía").unwrap();
    let anticipo = html.find("Anticipo").unwrap();
    assert!(entrega < garantia && garantia < anticipo);
    assert!(html.contains("48 horas"));
    assert!(html.contains("50"));
}

#[test]
fn non_object_content_skips_the_block_entirely() {
    let mut rec = record(RecordType::Quote);
    rec.content = Some(json!(["not", "a", "map"]));
    let html = render(&rec, now());
    // the supplementary table carries a distinctive style
    assert!(!html.contains("margin-top: 0px;"));

    rec.content = None;
    assert!(!render(&rec, now()).contains("margin-top: 0px;"));
}

#[test]
fn line_index_is_one_based() {
    let mut rec = record(RecordType::Quote);
    rec.line_items.push(LineItem {
        name: "Tuerca".into(),
        quantity: 1,
        tax_rate_percent: dec!(0),
        locations: vec![StockLocation {
            unit_price_incl_tax: dec!(10),
        }],
    });
    let html = render(&rec, now());
    let first = html.find(">1</td>").unwrap();
    let second = html.find(">2</td>").unwrap();
    assert!(first < second);
}

// --- Validity notice ---

#[test]
fn fresh_quote_shows_three_days_in_green() {
    let html = render(&record(RecordType::Quote), now());
    assert!(html.contains("Validez de la oferta: 3 días"));
    assert!(html.contains("color: green"));
    assert!(html.contains("Sujeto a verificación de inventario"));
}

#[test]
fn stale_quote_shows_expired_in_red() {
    let rec = record(RecordType::Quote);
    let later = now() + Days::new(4);
    let html = render(&rec, later);
    assert!(html.contains("No válida, tiempo de espera superado"));
    assert!(html.contains("color: red"));
}

#[test]
fn orders_never_show_validity_notice() {
    let html = render(&record(RecordType::Order), now());
    assert!(!html.contains("Validez de la oferta"));
    assert!(!html.contains("Sujeto a verificación de inventario"));
}

#[test]
fn footer_shows_print_timestamp_not_creation_date() {
    let rec = record(RecordType::Order);
    let later = now() + Days::new(10);
    let html = render(&rec, later);
    assert!(html.contains("Impresión 2026-06-25"));
}

// --- Escaping ---

#[test]
fn client_name_markup_is_escaped() {
    let mut rec = record(RecordType::Quote);
    rec.client.names = Some("<script>alert(1)</script>".into());
    let html = render(&rec, now());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn item_name_ampersand_is_escaped() {
    let mut rec = record(RecordType::Quote);
    rec.line_items[0].name = "Bolts & Nuts".into();
    let html = render(&rec, now());
    assert!(html.contains("Bolts &amp; Nuts"));
}
