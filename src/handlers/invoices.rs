use crate::core::error::PaymentError;
use crate::models::invoice::{InvoiceRequest, InvoiceResponse, InvoiceStatus};
use axum::{extract::rejection::JsonRejection, Json};
use tracing::{info, warn};
use uuid::Uuid;

/// Issue a synthetic invoice echoing the request
///
/// POST /api/v1/payments/invoices
pub async fn create_invoice_handler(
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, PaymentError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected invoice request");
        PaymentError::InvalidBody(rejection.body_text())
    })?;

    let invoice_id = format!("inv-{}", Uuid::new_v4().simple());

    info!(
        invoice_id = %invoice_id,
        amount_cents = request.amount_cents,
        currency = %request.currency,
        "Invoice issued"
    );

    Ok(Json(InvoiceResponse {
        invoice_id,
        status: InvoiceStatus::Issued,
        amount_cents: request.amount_cents,
        currency: request.currency,
    }))
}
