use crate::client::{require_id, required_text, FastBillClient, Variant};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Contact, Model};

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// `contact.create`. Sets `contact_id` from the reply.
    pub fn create_contact<'a>(&self, contact: &'a mut Contact) -> Result<&'a mut Contact> {
        let envelope = self.mutate("contact.create", contact.to_wire()?)?;
        contact.contact_id = Some(required_text(&envelope, "CONTACT_ID")?);
        Ok(contact)
    }

    /// `contact.update`.
    pub fn update_contact<'a>(&self, contact: &'a mut Contact) -> Result<&'a mut Contact> {
        require_id(&contact.contact_id, Contact::ENTITY)?;
        self.mutate("contact.update", contact.to_wire()?)?;
        Ok(contact)
    }

    /// `contact.get`. FastBill expects a `customer_id` filter here.
    pub fn get_contacts(&self, filter: &Filter, props: &Props) -> Result<Vec<Contact>> {
        self.collect(&RequestEnvelope::query("contact.get", filter, props), "CONTACTS")
    }
}
