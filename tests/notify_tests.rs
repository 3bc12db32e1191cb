use cotiza::notify::{build_notification, expiring_quote_line};

#[test]
fn body_carries_logo_cid_banner_and_boilerplate() {
    let html = build_notification("Cotizaciones que vencen 2026-08-29", "idImage", &[]).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("cid:idImage"));
    assert!(html.contains("background-color: #263238"));
    assert!(html.contains("Cotizaciones que vencen 2026-08-29"));
    assert!(html.contains("Correo desatendido"));
    assert!(html.contains("Equipo AMAS."));
    assert!(html.contains("soporteti@amas.com.co"));
    assert!(html.contains("Copyright:AMAS FERRETERIA"));
}

#[test]
fn one_paragraph_per_message_line() {
    let lines = vec!["primera línea".to_string(), "segunda línea".to_string()];
    let html = build_notification("Aviso", "logo", &lines).unwrap();
    let first = html.find("primera línea").unwrap();
    let second = html.find("segunda línea").unwrap();
    assert!(first < second);
}

#[test]
fn message_lines_keep_their_inline_markup() {
    // Lines are trusted, pre-formatted markup; the composer must not escape
    // them. This pins the documented trust boundary.
    let line = expiring_quote_line("María Gómez", "COT-0042", "https://amass.com.co", "645ff7c3");
    let html = build_notification("Aviso", "logo", &[line]).unwrap();
    assert!(html.contains("href='https://amass.com.co/orders/quote/645ff7c3'"));
    assert!(html.contains(">Detalle</a>"));
    assert!(!html.contains("&lt;a "));
}

#[test]
fn untrusted_line_content_would_inject_markup() {
    // Deliberate contract: a hostile caller could inject arbitrary markup.
    let html =
        build_notification("Aviso", "logo", &["<script>evil()</script>".to_string()]).unwrap();
    assert!(html.contains("<script>evil()</script>"));
}

#[test]
fn title_text_is_escaped() {
    let html = build_notification("Bolts & Nuts <SA>", "logo", &[]).unwrap();
    assert!(html.contains("Bolts &amp; Nuts &lt;SA&gt;"));
}

#[test]
fn alert_line_mentions_client_and_quote_number() {
    let line = expiring_quote_line("María Gómez", "COT-0042", "https://amass.com.co", "abc123");
    assert!(line.starts_with("María Gómez, cotización COT-0042"));
    assert!(line.contains("background-color:#3498db"));
}
