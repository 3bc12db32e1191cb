//! HTML body for the expiring-quote alert mail.
//!
//! Message lines are inserted verbatim: they are produced in-house (see
//! [`expiring_quote_line`]) and intentionally carry inline markup such as the
//! styled detail link. Nothing escapes them, so this composer must never be
//! fed third-party content — that trust boundary is part of the contract and
//! is pinned by tests, not hardened away.

use crate::core::CotizaError;
use crate::html::{el, raw, to_html};

const OUTER_TABLE: &str = "background-color:#e9e9e9; padding: 20px 10px; border-radius: 5px;";
const LOGO_IMG: &str = "padding: 0;max-width: 600px;object-fit: scale-down;";
const BANNER_CELL: &str = "background-color: #263238; text-align:left;padding: 0;";
const CONTENT_WRAP: &str = "color: #34495e;margin 4% 10% 2%;text-align:justify;font-family:sans-serif";
const TITLE: &str = "color: #00B1EE;text-align:center; margin: 0 0 7px;margin-top: 7%;";
const LINE_P: &str = "margin: 2px;margin-top: 4%;font-size: 17px;";
const BOILERPLATE_P: &str = "margin: 2px;margin-top: 7%;font-size: 17px;";
const COPYRIGHT_P: &str = "color: #b3b3b3; font-size: 12px; text-align: center;margin: 30px 0 0";

const UNATTENDED_NOTICE: &str = "Correo desatendido: Por favor no responda a la dirección de \
     correo electrónico que envía este mensaje, dicha cuenta no es revisada por ningún \
     funcionario de nuestra entidad. Este mensaje es informativo.";

/// Link button style used inside alert lines.
const DETAIL_LINK: &str = "text-decoration: none; border-radius: 5px; padding: 11px 23px; \
     color:white;font-size: 17px; background-color:#3498db";

/// Build the alert body: logo (referenced by `cid`), dark banner strip,
/// centered title, one paragraph per message line, then the fixed
/// unattended-mailbox notice, contact line, and copyright footer.
pub fn build_notification(title: &str, cid: &str, lines: &[String]) -> Result<String, CotizaError> {
    let mut content = el("div")
        .style(CONTENT_WRAP)
        .child(el("h2").style(TITLE).text(title));

    for line in lines {
        // Verbatim by contract; see module docs.
        content = content.child(el("p").style(LINE_P).child(raw(line.as_str())));
    }

    content = content
        .child(
            el("p")
                .style(BOILERPLATE_P)
                .text(UNATTENDED_NOTICE)
                .child(el("br"))
                .child(el("br"))
                .text("Saludos,")
                .child(el("br"))
                .child(el("br"))
                .text("Equipo AMAS."),
        )
        .child(
            el("p")
                .style(BOILERPLATE_P)
                .child(el("b").text("Contacto:"))
                .child(el("br"))
                .text("soporteti@amas.com.co"),
        )
        .child(
            el("p")
                .style(COPYRIGHT_P)
                .child(el("br"))
                .text("Manizales-Colombia")
                .child(el("br"))
                .text("Copyright:AMAS FERRETERIA"),
        );

    let table = el("table")
        .style(OUTER_TABLE)
        .child(
            el("tr").child(
                el("td").attr("style", "padding: 0").child(
                    el("div").child(
                        el("img")
                            .style(LOGO_IMG)
                            .attr("src", format!("cid:{cid}"))
                            .attr("alt", "logoAmas"),
                    ),
                ),
            ),
        )
        .child(
            el("tr").child(
                el("td")
                    .style(BANNER_CELL)
                    .child(el("div").attr("style", "height: 35px;").attr("class", "container")),
            ),
        )
        .child(
            el("tr").child(
                el("td")
                    .attr("style", "background-color: white;")
                    .child(content),
            ),
        );

    let root = el("html")
        .child(el("head").child(el("meta").attr("http-equiv", "Content-Type").attr(
            "content",
            "text/html; charset=UTF-8",
        )))
        .child(el("body").child(table))
        .into();

    to_html(&root)
}

/// One alert line for a quote expiring today: client name, quote number, and
/// a styled link to the quote detail page.
pub fn expiring_quote_line(
    client_full_name: &str,
    quote_number: &str,
    base_url: &str,
    record_id: &str,
) -> String {
    format!(
        "{client_full_name}, cotización {quote_number}  <a style='{DETAIL_LINK}' \
         href='{base_url}/orders/quote/{record_id}'>Detalle</a>"
    )
}
