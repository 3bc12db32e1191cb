//! Inline CSS carried verbatim from the store's established document look.
//! The PDF renderer gets no external stylesheet, so everything is inline.

pub const BODY: &str = "font-size: small;";

pub const PAGE_CSS: &str = "\n    @media print {\n        @page { size: letter; }\n    }\n    ";

pub const CONTAINER: &str = "border: solid 1px gray; border-radius: 12px;padding: 1%";

pub const ITEMS_TABLE: &str =
    "letter-spacing: 1px; font-size: 0.8rem; width: 100%; margin-bottom: 2px";

pub const CONTENT_TABLE: &str =
    "letter-spacing: 1px; font-size: 0.8rem; width: 100%; margin-top: 0px;";

pub const HEADER_ROW: &str =
    "display: flex; justify-content: space-between; align-items: center; width: 100%; margin-bottom: 20px;";

pub const LOGO_COLUMN: &str = "flex-basis: 50%; text-align: left;";

pub const LOGO_IMG: &str = "width: 100%; max-width: 250px;";

pub const HEADER_INFO_COLUMN: &str =
    "flex-basis: 50%; text-align: right; font-size: 10px; margin-left: 10px;";

pub const PARTIES_ROW: &str = "display: flex; justify-content: space-between;";

pub const CLIENT_COLUMN: &str = "flex-basis: 50%; margin-right: 10px; font-size: 10px;";

pub const COMPANY_COLUMN: &str = "flex-basis: 50%; text-align: right; font-size: 10px;";

pub const LABELED_LINE: &str = "margin: 2px 0;";

pub const HEADER_CELL: &str = "border: 1px solid rgb(190, 190, 190); border-radius: 12px; padding: 2px 4px;background-color: rgb(235, 235, 235); text-align: center; font-size: 10px;";

pub const BODY_CELL: &str =
    "border: 1px solid gray; padding: 2px 4px; text-align: center; font-size: 8px;";

pub const CONTENT_VALUE_CELL: &str =
    "border: 1px solid gray; padding: 5px;border-radius: 12px; text-align: left; font-size: 8px;";

pub const TOTAL_CELL: &str = "border: 1px solid rgb(190, 190, 190); border-radius: 12px; padding: 2px 4px; background-color: rgb(235, 235, 235); text-align: center;";

pub const ITEMS_BODY: &str = "margin-bottom: 200px;";

pub const NOTICE_VALID: &str = "text-align: center; color: green;";

pub const NOTICE_EXPIRED: &str = "text-align: center; color: red;";

pub const NOTICE_PLAIN: &str = "text-align: center;";

pub const FOOTER: &str = "text-align: center; font-size: 5px;";
