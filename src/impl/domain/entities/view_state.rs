use super::display_bill::DisplayBill;

/// Render request payload, as handed over by the page shell. Several flags
/// may be set at once; precedence is resolved by [`ViewState::from`].
#[derive(Debug, Clone, Default)]
pub struct BillsViewModel {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Vec<DisplayBill>>,
}

/// The presenter's rendering mode. Exactly one of the three states; built
/// fresh per render request and not retained between renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Populated(Vec<DisplayBill>),
}

impl From<BillsViewModel> for ViewState {
    /// Precedence is a policy choice, not incidental: `loading` wins over
    /// `error`, and `error` wins over `data`. A missing `data` renders as an
    /// empty list.
    fn from(view_model: BillsViewModel) -> Self {
        if view_model.loading {
            ViewState::Loading
        } else if let Some(message) = view_model.error {
            ViewState::Error(message)
        } else {
            ViewState::Populated(view_model.data.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_bill() -> DisplayBill {
        DisplayBill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            date: "2004-04-04".to_string(),
            amount: Some(400.0),
            expense_type: "Hôtel et logement".to_string(),
            status: "En attente".to_string(),
            receipt_url: None,
            commentary: None,
        }
    }

    #[test]
    fn loading_takes_precedence_over_error_and_data() {
        let state = ViewState::from(BillsViewModel {
            loading: true,
            error: Some("x".to_string()),
            data: Some(vec![some_bill()]),
        });
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn error_takes_precedence_over_data() {
        let state = ViewState::from(BillsViewModel {
            loading: false,
            error: Some("x".to_string()),
            data: Some(vec![some_bill()]),
        });
        assert_eq!(state, ViewState::Error("x".to_string()));
    }

    #[test]
    fn data_renders_populated() {
        let state = ViewState::from(BillsViewModel {
            loading: false,
            error: None,
            data: Some(vec![some_bill()]),
        });
        assert_eq!(state, ViewState::Populated(vec![some_bill()]));
    }

    #[test]
    fn empty_view_model_renders_empty_list() {
        let state = ViewState::from(BillsViewModel::default());
        assert_eq!(state, ViewState::Populated(vec![]));
    }
}
