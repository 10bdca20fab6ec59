use iso_currency::Currency;

use crate::{
    entities::{BillsViewModel, DisplayBill, ViewState},
    presentation::utils::{escape_html, format_amount},
};

/// Renders the bills page as a markup string consumed by the host shell.
/// Rendering is total: every well-formed view model produces exactly one of
/// the three page states, and the same view model always produces identical
/// markup.
pub(crate) struct BillsPagePrinter;

impl BillsPagePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_page(&self, view_model: &BillsViewModel) -> String {
        match ViewState::from(view_model.clone()) {
            ViewState::Loading => self.print_loading(),
            ViewState::Error(message) => self.print_error(&message),
            ViewState::Populated(bills) => self.print_bills(bills),
        }
    }

    fn print_loading(&self) -> String {
        "<div class='loading' data-testid='loading-page'>\n  Loading...\n</div>\n".to_string()
    }

    fn print_error(&self, message: &str) -> String {
        let mut page = String::new();
        page.push_str("<div class='error' data-testid='error-page'>\n");
        page.push_str("  <p>Erreur</p>\n");
        page.push_str(&format!(
            "  <p data-testid='error-message'>{}</p>\n",
            escape_html(message)
        ));
        page.push_str("</div>\n");
        page
    }

    fn print_bills(&self, bills: Vec<DisplayBill>) -> String {
        // Most recent first. The display-date form is fixed-width, so the
        // lexicographic comparison is a chronological one; sort_by is stable,
        // so equal dates keep their store order.
        let sorted = {
            let mut v = bills;
            v.sort_by(|a, b| b.date.cmp(&a.date));
            v
        };

        let mut page = String::new();
        page.push_str("<div class='content' data-testid='bills-page'>\n");
        page.push_str("  <div class='content-header'>\n");
        page.push_str("    <div class='content-title'>Mes notes de frais</div>\n");
        page.push_str(
            "    <button type='button' class='btn btn-primary' data-testid='btn-new-bill'>\
             Nouvelle note de frais</button>\n",
        );
        page.push_str("  </div>\n");
        page.push_str("  <table class='table table-striped' data-testid='bills-table'>\n");
        page.push_str(
            "    <thead><tr><th>Type</th><th>Date</th><th>Montant</th><th>Statut</th>\
             <th>Actions</th></tr></thead>\n",
        );
        page.push_str("    <tbody data-testid='tbody'>\n");
        for bill in &sorted {
            self.print_row(&mut page, bill);
        }
        page.push_str("    </tbody>\n");
        page.push_str("  </table>\n");
        self.print_receipt_modal(&mut page);
        page.push_str("</div>\n");
        page
    }

    fn print_row(&self, page: &mut String, bill: &DisplayBill) {
        let amount = bill
            .amount
            .map(|a| format_amount(a, Currency::EUR))
            .unwrap_or_default();
        page.push_str("      <tr>\n");
        page.push_str(&format!(
            "        <td>{}</td>\n",
            escape_html(&bill.expense_type)
        ));
        page.push_str(&format!(
            "        <td data-testid='bill-date'>{}</td>\n",
            escape_html(&bill.date)
        ));
        page.push_str(&format!("        <td>{}</td>\n", escape_html(&amount)));
        page.push_str(&format!(
            "        <td data-testid='bill-status'>{}</td>\n",
            escape_html(&bill.status)
        ));
        page.push_str(&format!(
            "        <td><div class=\"icon-actions\"><div data-testid=\"icon-eye\" \
             data-bill-url=\"{}\"></div></div></td>\n",
            escape_html(bill.receipt_url.as_deref().unwrap_or_default())
        ));
        page.push_str("      </tr>\n");
    }

    fn print_receipt_modal(&self, page: &mut String) {
        page.push_str("  <div class='modal fade' data-testid='modale-file'>\n");
        page.push_str("    <div class='modal-header'>Justificatif</div>\n");
        page.push_str("    <div class='modal-body'></div>\n");
        page.push_str("  </div>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(id: &str, date: &str) -> DisplayBill {
        DisplayBill {
            id: id.to_string(),
            email: "a@a".to_string(),
            date: date.to_string(),
            amount: Some(400.0),
            expense_type: "Transports".to_string(),
            status: "En attente".to_string(),
            receipt_url: Some(format!("https://test.storage.tld/{}.jpg", id)),
            commentary: None,
        }
    }

    fn populated(bills: Vec<DisplayBill>) -> BillsViewModel {
        BillsViewModel {
            loading: false,
            error: None,
            data: Some(bills),
        }
    }

    #[test]
    fn loading_state_renders_loading_text() {
        let page = BillsPagePrinter::new().print_page(&BillsViewModel {
            loading: true,
            error: None,
            data: None,
        });
        assert!(page.contains("Loading..."));
    }

    #[test]
    fn loading_wins_over_error_and_data() {
        let page = BillsPagePrinter::new().print_page(&BillsViewModel {
            loading: true,
            error: Some("x".to_string()),
            data: Some(vec![bill("b1", "2004-04-04")]),
        });
        assert!(page.contains("Loading..."));
        assert!(!page.contains("Erreur"));
        assert!(!page.contains("icon-eye"));
    }

    #[test]
    fn error_state_renders_static_heading_and_message() {
        let page = BillsPagePrinter::new().print_page(&BillsViewModel {
            loading: false,
            error: Some("Erreur 404".to_string()),
            data: None,
        });
        assert!(page.contains("Erreur"));
        assert!(page.contains("Erreur 404"));
    }

    #[test]
    fn error_wins_over_data() {
        let page = BillsPagePrinter::new().print_page(&BillsViewModel {
            loading: false,
            error: Some("Erreur 500".to_string()),
            data: Some(vec![bill("b1", "2004-04-04")]),
        });
        assert!(page.contains("Erreur 500"));
        assert!(!page.contains("icon-eye"));
    }

    #[test]
    fn bills_are_ordered_from_latest_to_earliest() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![
            bill("b1", "2021-01-01"),
            bill("b2", "2022-06-15"),
        ]));
        let newest = page.find("2022-06-15").unwrap();
        let oldest = page.find("2021-01-01").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn rendered_dates_are_non_increasing() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![
            bill("b1", "2001-01-01"),
            bill("b2", "2004-04-04"),
            bill("b3", "2003-03-03"),
            bill("b4", "2002-02-02"),
        ]));
        let dates: Vec<&str> = page
            .lines()
            .filter_map(|l| {
                l.trim()
                    .strip_prefix("<td data-testid='bill-date'>")?
                    .strip_suffix("</td>")
            })
            .collect();
        assert_eq!(dates.len(), 4);
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn equal_dates_keep_store_order() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![
            bill("first", "2004-04-04"),
            bill("second", "2004-04-04"),
        ]));
        let first = page.find("first.jpg").unwrap();
        let second = page.find("second.jpg").unwrap();
        assert!(first < second);
    }

    #[test]
    fn rendering_is_idempotent() {
        let view_model = populated(vec![bill("b1", "2021-01-01"), bill("b2", "2022-06-15")]);
        let printer = BillsPagePrinter::new();
        assert_eq!(printer.print_page(&view_model), printer.print_page(&view_model));
    }

    #[test]
    fn each_row_carries_an_eye_affordance_with_its_receipt_reference() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![bill("b1", "2004-04-04")]));
        assert!(page.contains("data-testid=\"icon-eye\""));
        assert!(page.contains("data-bill-url=\"https://test.storage.tld/b1.jpg\""));
    }

    #[test]
    fn page_exposes_new_bill_button_and_receipt_modal() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![]));
        assert!(page.contains("data-testid='btn-new-bill'"));
        assert!(page.contains("Nouvelle note de frais"));
        assert!(page.contains("Justificatif"));
    }

    #[test]
    fn missing_fields_render_blank_cells() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![DisplayBill {
            id: "b1".to_string(),
            email: String::new(),
            date: String::new(),
            amount: None,
            expense_type: String::new(),
            status: String::new(),
            receipt_url: None,
            commentary: None,
        }]));
        assert!(page.contains("<td></td>"));
        assert!(page.contains("<td data-testid='bill-date'></td>"));
        assert!(page.contains("data-bill-url=\"\""));
    }

    #[test]
    fn amounts_are_formatted_as_eur() {
        let page = BillsPagePrinter::new().print_page(&populated(vec![bill("b1", "2004-04-04")]));
        assert!(page.contains("400.00 €"));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let page = BillsPagePrinter::new().print_page(&BillsViewModel {
            loading: false,
            error: Some("<script>alert(1)</script>".to_string()),
            data: None,
        });
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
