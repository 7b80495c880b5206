pub mod fallback;
pub mod health;
pub mod invoices;
pub mod upload;
