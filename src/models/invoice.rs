use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    /// Amount in the currency's minor unit (cents)
    pub amount_cents: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Issued,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceResponse {
    #[serde(rename = "invoiceId")]
    pub invoice_id: String,
    pub status: InvoiceStatus,
    pub amount_cents: i64,
    pub currency: String,
}
