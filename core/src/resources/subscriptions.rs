use crate::client::{require_id, required_text, Automatic, FastBillClient};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Model, Subscription};

impl<T: Transport> FastBillClient<T, Automatic> {
    /// `subscription.create`. Sets `subscription_id` from the reply.
    pub fn create_subscription<'a>(
        &self,
        subscription: &'a mut Subscription,
    ) -> Result<&'a mut Subscription> {
        let envelope = self.mutate("subscription.create", subscription.to_wire()?)?;
        subscription.subscription_id = Some(required_text(&envelope, "SUBSCRIPTION_ID")?);
        Ok(subscription)
    }

    /// `subscription.update`.
    pub fn update_subscription<'a>(
        &self,
        subscription: &'a mut Subscription,
    ) -> Result<&'a mut Subscription> {
        require_id(&subscription.subscription_id, Subscription::ENTITY)?;
        self.mutate("subscription.update", subscription.to_wire()?)?;
        Ok(subscription)
    }

    /// `subscription.cancel`. Sets `cancellation_date` from the reply.
    pub fn cancel_subscription<'a>(
        &self,
        subscription: &'a mut Subscription,
    ) -> Result<&'a mut Subscription> {
        require_id(&subscription.subscription_id, Subscription::ENTITY)?;
        let envelope = self.mutate("subscription.cancel", subscription.to_wire()?)?;
        subscription.cancellation_date = Some(required_text(&envelope, "CANCELLATION_DATE")?);
        Ok(subscription)
    }

    /// `subscription.reactivate`. Only valid before the cancellation date is
    /// reached; the server enforces that.
    pub fn reactivate_subscription<'a>(
        &self,
        subscription: &'a mut Subscription,
    ) -> Result<&'a mut Subscription> {
        require_id(&subscription.subscription_id, Subscription::ENTITY)?;
        self.mutate("subscription.reactivate", subscription.to_wire()?)?;
        Ok(subscription)
    }

    /// `subscription.get`.
    pub fn get_subscriptions(&self, filter: &Filter) -> Result<Vec<Subscription>> {
        self.collect(
            &RequestEnvelope::query("subscription.get", filter, &Props::new()),
            "SUBSCRIPTIONS",
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::Automatic;
    use crate::error::FastBillError;
    use crate::resources::testing::client;
    use crate::types::Subscription;
    use crate::Filter;

    fn existing() -> Subscription {
        Subscription {
            subscription_id: Some("77".to_string()),
            ..Subscription::default()
        }
    }

    #[test]
    fn create_subscription_sets_id() {
        let client = client::<Automatic>(&[
            r#"{"RESPONSE":{"STATUS":"success","SUBSCRIPTION_ID":"77"}}"#,
        ]);
        let mut subscription = Subscription {
            customer_id: Some("1001".to_string()),
            article_number: Some("PRO-M".to_string()),
            ..Subscription::default()
        };
        client.create_subscription(&mut subscription).unwrap();
        assert_eq!(subscription.subscription_id.as_deref(), Some("77"));
    }

    #[test]
    fn cancel_subscription_sets_cancellation_date() {
        let client = client::<Automatic>(&[
            r#"{"RESPONSE":{"STATUS":"success","CANCELLATION_DATE":"2024-12-31 23:59:59"}}"#,
        ]);
        let mut subscription = existing();
        let returned = client.cancel_subscription(&mut subscription).unwrap();
        assert_eq!(returned.cancellation_date.as_deref(), Some("2024-12-31 23:59:59"));
        assert_eq!(
            client.transport().sent_bodies()[0],
            json!({"SERVICE": "subscription.cancel", "DATA": {"SUBSCRIPTION_ID": "77"}})
        );
    }

    #[test]
    fn update_and_reactivate_send_their_services() {
        let client = client::<Automatic>(&[
            r#"{"RESPONSE":{"STATUS":"success"}}"#,
            r#"{"RESPONSE":{"STATUS":"success"}}"#,
        ]);
        let mut subscription = existing();
        client.update_subscription(&mut subscription).unwrap();
        client.reactivate_subscription(&mut subscription).unwrap();
        let services: Vec<_> = client
            .transport()
            .sent_bodies()
            .iter()
            .map(|body| body["SERVICE"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(services, ["subscription.update", "subscription.reactivate"]);
    }

    #[test]
    fn cancel_without_id_never_dispatches() {
        let client = client::<Automatic>(&[]);
        let err = client.cancel_subscription(&mut Subscription::default()).unwrap_err();
        assert!(matches!(err, FastBillError::MissingIdentifier { entity: "subscription" }));
        assert_eq!(client.transport().calls(), 0);
    }

    #[test]
    fn get_subscriptions_filters_by_customer() {
        let client = client::<Automatic>(&[
            r#"{"RESPONSE":{"SUBSCRIPTIONS":[{"SUBSCRIPTION_ID":"77","STATUS":"active"}]}}"#,
        ]);
        let subscriptions = client
            .get_subscriptions(&Filter::new().with("customer_id", "1001"))
            .unwrap();
        assert_eq!(subscriptions[0].status.as_deref(), Some("active"));
        assert_eq!(
            client.transport().sent_bodies()[0],
            json!({"SERVICE": "subscription.get", "FILTER": {"CUSTOMER_ID": "1001"}})
        );
    }
}
