use serde_json::json;

use crate::client::{require_id, required_text, FastBillClient, Variant};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::{FastBillError, Result};
use crate::http::Transport;
use crate::types::{EmailRecipients, Invoice, Model};

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// `invoice.create`. Sets `invoice_id` from the reply.
    pub fn create_invoice<'a>(&self, invoice: &'a mut Invoice) -> Result<&'a mut Invoice> {
        let envelope = self.mutate("invoice.create", invoice.to_wire()?)?;
        invoice.invoice_id = Some(required_text(&envelope, "INVOICE_ID")?);
        Ok(invoice)
    }

    /// `invoice.complete`. Turns a draft into a final invoice and sets the
    /// `invoice_number` the server generated.
    pub fn complete_invoice<'a>(&self, invoice: &'a mut Invoice) -> Result<&'a mut Invoice> {
        let id = require_id(&invoice.invoice_id, Invoice::ENTITY)?;
        let envelope = self.mutate("invoice.complete", json!({ "INVOICE_ID": id }))?;
        invoice.invoice_number = Some(required_text(&envelope, "INVOICE_NUMBER")?);
        Ok(invoice)
    }

    /// `invoice.sendbyemail`.
    pub fn send_invoice_by_email(
        &self,
        invoice: &Invoice,
        recipients: &EmailRecipients,
    ) -> Result<()> {
        let id = require_id(&invoice.invoice_id, Invoice::ENTITY)?;
        if recipients.is_empty() {
            return Err(FastBillError::NoRecipients);
        }
        let data =
            serde_json::to_value(recipients.wire_data(id)).map_err(FastBillError::Serialization)?;
        self.mutate("invoice.sendbyemail", data)?;
        Ok(())
    }

    /// `invoice.get`.
    pub fn get_invoices(&self, filter: &Filter, props: &Props) -> Result<Vec<Invoice>> {
        self.collect(&RequestEnvelope::query("invoice.get", filter, props), "INVOICES")
    }
}
