//! CSV export and printable HTML reports, per kind.

use seedstock_core::{Entry, Kind};

use crate::error::StoreError;

/// Column layout for a kind, in export order.
fn columns(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Inward | Kind::Outward => {
            &["id", "seedName", "quantity", "date", "party", "notes", "createdAt"]
        }
        Kind::Returns => &["id", "seedName", "quantity", "date", "reason", "notes", "createdAt"],
        Kind::Expiry => &[
            "id",
            "seedName",
            "quantity",
            "date",
            "expiryDate",
            "action",
            "notes",
            "createdAt",
        ],
    }
}

fn field(entry: &Entry, column: &str) -> String {
    match column {
        "id" => entry.id.clone(),
        "seedName" => entry.seed_name.clone(),
        "quantity" => format!("{}", entry.quantity),
        "date" => entry.date.to_string(),
        "party" => entry.party.clone().unwrap_or_default(),
        "reason" => entry.reason.clone().unwrap_or_default(),
        "expiryDate" => entry.expiry_date.map(|d| d.to_string()).unwrap_or_default(),
        "action" => entry.action.map(|a| a.as_str().to_string()).unwrap_or_default(),
        "notes" => entry.notes.clone().unwrap_or_default(),
        "createdAt" => entry.created_at.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render a kind's entries as CSV: quoted header row, every value quoted
/// with `""` escaping, CRLF line endings. Exporting nothing is an error.
pub fn to_csv(kind: Kind, entries: &[Entry]) -> Result<String, StoreError> {
    if entries.is_empty() {
        return Err(StoreError::Export("No data to export".into()));
    }

    let cols = columns(kind);
    let mut out = String::new();
    out.push_str(&cols.iter().map(|c| csv_quote(c)).collect::<Vec<_>>().join(","));
    out.push_str("\r\n");

    for entry in entries {
        let row: Vec<String> = cols.iter().map(|c| csv_quote(&field(entry, c))).collect();
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }
    Ok(out)
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a standalone printable HTML report for a kind.
pub fn to_html_report(kind: Kind, entries: &[Entry], generated_at: &str) -> String {
    let title = format!("{} Report", kind.label());
    let cols = columns(kind);

    let mut html = String::new();
    html.push_str("<html>\n<head>\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; margin: 20px; }\n\
         h1 { color: #333; text-align: center; }\n\
         table { width: 100%; border-collapse: collapse; margin-top: 20px; }\n\
         th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
         th { background-color: #f2f2f2; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(&format!("<p>Generated on: {}</p>\n", html_escape(generated_at)));
    html.push_str("<table>\n<thead>\n<tr>");
    for col in cols {
        html.push_str(&format!("<th>{}</th>", col));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for entry in entries {
        html.push_str("<tr>");
        for col in cols {
            html.push_str(&format!("<td>{}</td>", html_escape(&field(entry, col))));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> Entry {
        Entry {
            id: "42".into(),
            seed_name: "Wheat \"Gold\"".into(),
            quantity: 12.5,
            date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            party: Some("Sharma, Seeds".into()),
            reason: None,
            expiry_date: None,
            action: None,
            notes: None,
            created_at: Some("2025-04-02T08:00:00+00:00".into()),
        }
    }

    #[test]
    fn csv_has_quoted_header_and_crlf() {
        let csv = to_csv(Kind::Inward, &[entry()]).unwrap();
        let mut lines = csv.split("\r\n");
        assert_eq!(
            lines.next().unwrap(),
            "\"id\",\"seedName\",\"quantity\",\"date\",\"party\",\"notes\",\"createdAt\""
        );
        let row = lines.next().unwrap();
        // Embedded quotes doubled, commas kept inside the quoted field.
        assert!(row.contains("\"Wheat \"\"Gold\"\"\""));
        assert!(row.contains("\"Sharma, Seeds\""));
        assert!(csv.ends_with("\r\n"));
    }

    #[test]
    fn csv_of_empty_collection_is_an_error() {
        assert!(matches!(to_csv(Kind::Inward, &[]), Err(StoreError::Export(_))));
    }

    #[test]
    fn expiry_columns_include_action() {
        let mut e = entry();
        e.expiry_date = NaiveDate::from_ymd_opt(2025, 8, 1);
        e.action = Some(seedstock_core::ExpiryAction::Destroyed);
        let csv = to_csv(Kind::Expiry, &[e]).unwrap();
        assert!(csv.starts_with("\"id\",\"seedName\",\"quantity\",\"date\",\"expiryDate\",\"action\""));
        assert!(csv.contains("\"2025-08-01\",\"destroyed\""));
    }

    #[test]
    fn html_report_escapes_cells() {
        let mut e = entry();
        e.seed_name = "Wheat <b>".into();
        let html = to_html_report(Kind::Inward, &[e], "2025-04-02 10:00");
        assert!(html.contains("<h1>Inward Report</h1>"));
        assert!(html.contains("Wheat &lt;b&gt;"));
        assert!(html.contains("<th>party</th>"));
    }
}
