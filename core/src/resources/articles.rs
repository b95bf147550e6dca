use crate::client::{Automatic, FastBillClient};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::Article;

impl<T: Transport> FastBillClient<T, Automatic> {
    /// `article.get`.
    pub fn get_articles(&self, filter: &Filter) -> Result<Vec<Article>> {
        self.collect(
            &RequestEnvelope::query("article.get", filter, &Props::new()),
            "ARTICLES",
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::Automatic;
    use crate::resources::testing::client;
    use crate::Filter;

    #[test]
    fn get_articles_keeps_server_order() {
        let client = client::<Automatic>(&[r#"{"RESPONSE":{"ARTICLES":[
            {"ARTICLE_NUMBER":"B","TITLE":"Basic"},
            {"ARTICLE_NUMBER":"P","TITLE":"Pro"},
            {"ARTICLE_NUMBER":"A","TITLE":"Addon","IS_ADDON":1}
        ]}}"#]);
        let articles = client.get_articles(&Filter::new()).unwrap();
        let numbers: Vec<_> = articles
            .iter()
            .map(|article| article.article_number.as_deref().unwrap())
            .collect();
        assert_eq!(numbers, ["B", "P", "A"]);
        assert_eq!(articles[2].is_addon.as_deref(), Some("1"));
        assert_eq!(
            client.transport().sent_bodies()[0],
            json!({"SERVICE": "article.get"})
        );
    }
}
