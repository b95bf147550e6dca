use serde::Serialize;
use serde_with::skip_serializing_none;

/// Addressing for `invoice.sendbyemail`.
///
/// Serialized as the `RECIPIENT` object plus the optional top-level
/// `SUBJECT`, `MESSAGE` and `RECEIPT_CONFIRMATION` fields of the request
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailRecipients {
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub receipt_confirmation: bool,
}

impl EmailRecipients {
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: vec![address.into()],
            ..Self::default()
        }
    }

    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_receipt_confirmation(mut self) -> Self {
        self.receipt_confirmation = true;
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty()
    }

    pub(crate) fn wire_data(&self, invoice_id: &str) -> SendByEmailData<'_> {
        SendByEmailData {
            invoice_id: invoice_id.to_string(),
            recipient: RecipientData {
                to: join_addresses(&self.to),
                cc: join_addresses(&self.cc),
                bcc: join_addresses(&self.bcc),
            },
            subject: self.subject.as_deref(),
            message: self.message.as_deref(),
            receipt_confirmation: self.receipt_confirmation.then_some("1"),
        }
    }
}

fn join_addresses(addresses: &[String]) -> Option<String> {
    (!addresses.is_empty()).then(|| addresses.join(","))
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct SendByEmailData<'a> {
    invoice_id: String,
    recipient: RecipientData,
    subject: Option<&'a str>,
    message: Option<&'a str>,
    receipt_confirmation: Option<&'static str>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct RecipientData {
    to: Option<String>,
    cc: Option<String>,
    bcc: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_data_joins_addresses_and_skips_unset() {
        let recipients = EmailRecipients::to("a@example.com")
            .cc("b@example.com")
            .cc("c@example.com")
            .subject("Your invoice");
        let wire = serde_json::to_value(recipients.wire_data("42")).unwrap();
        assert_eq!(
            wire,
            json!({
                "INVOICE_ID": "42",
                "RECIPIENT": {"TO": "a@example.com", "CC": "b@example.com,c@example.com"},
                "SUBJECT": "Your invoice"
            })
        );
    }

    #[test]
    fn receipt_confirmation_is_sent_as_flag() {
        let recipients = EmailRecipients::to("a@example.com").with_receipt_confirmation();
        let wire = serde_json::to_value(recipients.wire_data("1")).unwrap();
        assert_eq!(wire["RECEIPT_CONFIRMATION"], "1");
    }

    #[test]
    fn is_empty_without_any_address() {
        assert!(EmailRecipients::default().is_empty());
        assert!(!EmailRecipients::default().bcc("x@example.com").is_empty());
    }
}
