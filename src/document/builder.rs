use chrono::{DateTime, Utc};

use super::style;
use crate::core::dates;
use crate::core::{CotizaError, DocumentTotals, LineAmounts, Record, RecordType, format_amount};
use crate::html::{Element, Node, el, text, to_html};

/// Company web site printed under the company column.
const COMPANY_WEBSITE: &str = "amass.com.co";

/// Fixed inventory disclaimer shown on quotes.
const INVENTORY_NOTE: &str = "Sujeto a verificación de inventario al momento de la facturación.";

/// Build the complete document tree for one record.
///
/// Pure: the same `(record, logo_data_uri, now)` always yields the same tree.
/// `now` feeds only the validity notice and the print-timestamp footer.
pub fn build_document(record: &Record, logo_data_uri: &str, now: DateTime<Utc>) -> Node {
    let (items_table, totals) = items_table(record);

    let mut container = el("div")
        .attr("id", "containerTable")
        .style(style::CONTAINER)
        .child(header_section(record, logo_data_uri))
        .child(parties_section(record));

    if let Some(table) = content_table(record) {
        container = container.child(table);
    }

    container = container
        .child(items_table)
        .children(totals_block(&totals))
        .child(notices_section(record, now));

    el("html")
        .child(el("head").child(el("meta").attr("http-equiv", "Content-Type").attr(
            "content",
            "text/html; charset=UTF-8",
        )))
        .child(
            el("body")
                .style(style::BODY)
                .child(el("style").attr("type", "text/css").text(style::PAGE_CSS))
                .child(container),
        )
        .into()
}

/// Build and serialize in one step.
pub fn render_document(
    record: &Record,
    logo_data_uri: &str,
    now: DateTime<Utc>,
) -> Result<String, CotizaError> {
    to_html(&build_document(record, logo_data_uri, now))
}

/// A `<p><strong>label</strong>value</p>` line, the basic unit of the info
/// columns. The label is always printed even when the value is empty.
fn labeled_line(label: &str, value: &str) -> Node {
    el("p")
        .style(style::LABELED_LINE)
        .child(el("strong").text(label))
        .child(text(value))
        .into()
}

/// Logo at half width, record label and creation date right-aligned.
fn header_section(record: &Record, logo_data_uri: &str) -> Node {
    let mut info = el("div").style(style::HEADER_INFO_COLUMN);

    // Only the two known labeled branches get a heading line; a preorder (or
    // any future type) shows just the date.
    match record.record_type {
        RecordType::Quote => info = info.child(labeled_line("Cotización: ", &record.number)),
        RecordType::Order => info = info.child(labeled_line("Pedido: ", &record.number)),
        RecordType::Preorder => {}
    }
    info = info.child(labeled_line(
        "Fecha: ",
        &dates::spanish_local_datetime(record.created_at),
    ));

    el("div")
        .style(style::HEADER_ROW)
        .child(
            el("div").style(style::LOGO_COLUMN).child(
                el("img")
                    .attr("src", logo_data_uri)
                    .style(style::LOGO_IMG),
            ),
        )
        .child(info)
        .into()
}

/// Client column on the left, fixed company column on the right.
fn parties_section(record: &Record) -> Node {
    let client = &record.client;
    let client_lines = [
        ("Cliente: ", client.full_name()),
        (
            "NIT/CC: ",
            client.tax_id.clone().unwrap_or_default(),
        ),
        (
            "Dirección: ",
            client.address.clone().unwrap_or_default(),
        ),
        ("Ciudad: ", client.city.clone().unwrap_or_default()),
        ("Teléfono: ", client.phone.clone().unwrap_or_default()),
    ];

    let company = &record.company;
    let company_lines = [
        company.name.as_str(),
        company.phone.as_str(),
        company.address.as_str(),
        company.tax_id.as_str(),
        COMPANY_WEBSITE,
    ];

    el("div")
        .style(style::PARTIES_ROW)
        .child(
            el("div").style(style::CLIENT_COLUMN).children(
                client_lines
                    .iter()
                    .map(|(label, value)| labeled_line(label, value)),
            ),
        )
        .child(
            el("div").style(style::COMPANY_COLUMN).children(
                company_lines
                    .iter()
                    .map(|line| el("p").style(style::LABELED_LINE).text(*line).into()),
            ),
        )
        .into()
}

/// Supplementary key/value table. Emitted only when `content` is a JSON
/// object — any other shape (absent, array, scalar) skips the block with no
/// empty table shell.
fn content_table(record: &Record) -> Option<Node> {
    let entries = record.content.as_ref()?.as_object()?;

    let rows = entries.iter().map(|(key, value)| {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        el("tr")
            .child(el("th").text(key.as_str()).style(style::HEADER_CELL))
            .child(el("td").text(rendered).style(style::CONTENT_VALUE_CELL))
            .into()
    });

    Some(el("table").style(style::CONTENT_TABLE).children(rows).into())
}

const ITEM_HEADERS: [&str; 6] = [
    "Item",
    "Descripción",
    "Cant",
    "P Unitario sin IVA",
    "IVA Unitario",
    "P Total",
];

/// Line-item table plus the totals accumulated while walking the lines.
/// An empty record still gets the header row and a `$ 0.00` total row.
fn items_table(record: &Record) -> (Node, DocumentTotals) {
    let header_row = el("tr").attr("style", "width: 100%;").children(
        ITEM_HEADERS
            .iter()
            .map(|h| el("th").text(*h).style(style::HEADER_CELL).into()),
    );

    let mut totals = DocumentTotals::new();
    let mut body = el("tbody").style(style::ITEMS_BODY);

    for (index, item) in record.line_items.iter().enumerate() {
        let amounts = LineAmounts::compute(
            item.unit_price_incl_tax(),
            item.tax_rate_percent,
            item.quantity,
        );
        totals.add_line(&amounts, item.quantity);

        let cells = [
            (index + 1).to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            format_amount(amounts.unit_net),
            format_amount(amounts.unit_tax),
            format_amount(amounts.line_total),
        ];
        body = body.child(
            el("tr").children(
                cells
                    .iter()
                    .map(|cell| el("td").text(cell.as_str()).style(style::BODY_CELL).into()),
            ),
        );
    }

    body = body.child(
        el("tr")
            .child(
                el("td")
                    .text("Total")
                    .attr("colspan", "5")
                    .style(style::BODY_CELL),
            )
            .child(
                el("td")
                    .style(style::TOTAL_CELL)
                    .child(el("strong").text(format_amount(totals.total_cost))),
            ),
    );

    let table = el("table")
        .style(style::ITEMS_TABLE)
        .child(el("thead").child(header_row))
        .child(body);
    (table.into(), totals)
}

/// The three labeled totals lines under the table.
fn totals_block(totals: &DocumentTotals) -> Vec<Node> {
    [
        ("Total Neto:", totals.net_total()),
        ("IVA Total:", totals.total_tax),
        ("Total a pagar:", totals.total_cost),
    ]
    .into_iter()
    .map(|(label, value)| {
        el("p")
            .style(style::LABELED_LINE)
            .child(el("strong").text(label))
            .child(text(format!("{} ", format_amount(value))))
            .into()
    })
    .collect()
}

/// Validity notice (quotes only) and print-timestamp footer.
fn notices_section(record: &Record, now: DateTime<Utc>) -> Node {
    let mut section = el("div");

    if record.record_type == RecordType::Quote {
        let remaining = dates::validity_days_remaining(record.created_at, now);
        let notice = if remaining > 0 {
            el("p")
                .text(format!("Validez de la oferta: {remaining} días"))
                .style(style::NOTICE_VALID)
        } else {
            el("p")
                .text("Validez de la oferta: No válida, tiempo de espera superado")
                .style(style::NOTICE_EXPIRED)
        };
        section = section
            .child(notice)
            .child(el("p").text(INVENTORY_NOTE).style(style::NOTICE_PLAIN));
    }

    section
        .child(footer(now))
        .into()
}

fn footer(now: DateTime<Utc>) -> Element {
    el("p")
        .text(format!("Impresión {}", dates::print_timestamp(now)))
        .style(style::FOOTER)
        .attr("align", "center")
}
