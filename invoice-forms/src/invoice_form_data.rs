use serde::{Deserialize, Serialize};

/// Print-ready invoice fields. Every value is already formatted for
/// display; the form only positions them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceFormData {
    /// Up to five address lines.
    pub address: Vec<String>,
    pub invoice_id: String,
    pub invoice_date: String,
    pub customer_id: String,
    pub billing_period: String,
    pub payment_terms: String,
    pub text: String,
    pub total_net_value: String,
    pub vat_percentage: String,
    pub total_vat_amount: String,
    pub total_gross_amount: String,
    pub cash_discount_percentage: String,
    pub cash_discount_base_amount: String,
    pub cash_discount_amount: String,
    pub payable_amount: String,
    pub cash_discount_due_date: String,
    pub items: Vec<InvoiceItemFormData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceItemFormData {
    pub item_id: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub net_value: String,
}

impl InvoiceFormData {
    /// Whether the cash discount band is printed: the percentage must
    /// parse to a number above zero.
    pub fn has_cash_discount(&self) -> bool {
        self.cash_discount_percentage
            .trim()
            .parse::<f64>()
            .is_ok_and(|p| p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_discount(p: &str) -> InvoiceFormData {
        InvoiceFormData {
            cash_discount_percentage: p.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cash_discount_guard() {
        assert!(with_discount("2").has_cash_discount());
        assert!(with_discount(" 0.5").has_cash_discount());
        assert!(!with_discount("0").has_cash_discount());
        assert!(!with_discount("").has_cash_discount());
        assert!(!with_discount("-1").has_cash_discount());
        assert!(!with_discount("zwei").has_cash_discount());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(InvoiceFormData {
            invoice_id: "1001".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["invoiceId"], "1001");
        assert!(json.get("cashDiscountDueDate").is_some());
    }
}
