use crate::client::{require_id, required_text, FastBillClient, Variant};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Customer, Model};

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// `customer.create`, whether or not a matching customer exists. Sets
    /// `customer_id` from the reply, replacing any previous value.
    pub fn create_customer<'a>(&self, customer: &'a mut Customer) -> Result<&'a mut Customer> {
        let envelope = self.mutate("customer.create", customer.to_wire()?)?;
        customer.customer_id = Some(required_text(&envelope, "CUSTOMER_ID")?);
        Ok(customer)
    }

    /// `customer.update`.
    pub fn update_customer<'a>(&self, customer: &'a mut Customer) -> Result<&'a mut Customer> {
        require_id(&customer.customer_id, Customer::ENTITY)?;
        self.mutate("customer.update", customer.to_wire()?)?;
        Ok(customer)
    }

    /// `customer.get`.
    pub fn get_customers(&self, filter: &Filter, props: &Props) -> Result<Vec<Customer>> {
        self.collect(&RequestEnvelope::query("customer.get", filter, props), "CUSTOMERS")
    }
}
