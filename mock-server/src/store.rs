//! In-memory FastBill account backing the mock server.
//!
//! Records are kept as raw wire objects so the store never disagrees with the
//! client about field names; the client's own types are deliberately not
//! used here.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

type Record = Map<String, Value>;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, Record>,
}

impl Table {
    fn insert(&mut self, id: u64, record: Record) {
        self.rows.insert(id, record);
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Record> {
        self.rows.get_mut(&id)
    }

    fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Rows matching every filter entry, newest first like FastBill lists
    /// them, after `OFFSET`/`LIMIT`.
    fn query(&self, filter: Option<&Value>, request: &Value) -> Vec<Value> {
        let offset = number_prop(request, "OFFSET").unwrap_or(0);
        let limit = number_prop(request, "LIMIT").unwrap_or(usize::MAX);
        self.rows
            .values()
            .rev()
            .filter(|row| matches_filter(row, filter))
            .skip(offset)
            .take(limit)
            .map(|row| Value::Object(row.clone()))
            .collect()
    }
}

#[derive(Debug)]
pub struct Store {
    next_id: u64,
    next_invoice_number: u64,
    customers: Table,
    contacts: Table,
    invoices: Table,
    subscriptions: Table,
    projects: Table,
    expenses: Table,
    articles: Vec<Record>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Empty account with a small fixed catalogue of articles, projects and
    /// expenses, which the API does not let clients create.
    pub fn new() -> Self {
        let mut store = Self {
            next_id: 1000,
            next_invoice_number: 1,
            customers: Table::default(),
            contacts: Table::default(),
            invoices: Table::default(),
            subscriptions: Table::default(),
            projects: Table::default(),
            expenses: Table::default(),
            articles: Vec::new(),
        };
        store.articles = vec![
            record(json!({
                "ARTICLE_NUMBER": "BASIC-M",
                "TITLE": "Basic monthly",
                "UNIT_PRICE": "9.00",
                "IS_ADDON": "0"
            })),
            record(json!({
                "ARTICLE_NUMBER": "PRO-M",
                "TITLE": "Pro monthly",
                "UNIT_PRICE": "29.00",
                "IS_ADDON": "0"
            })),
            record(json!({
                "ARTICLE_NUMBER": "SEATS",
                "TITLE": "Extra seat",
                "UNIT_PRICE": "4.00",
                "IS_ADDON": "1"
            })),
        ];
        store.projects.insert(
            1,
            record(json!({"PROJECT_ID": "1", "PROJECT_NAME": "Internal", "HOUR_PRICE": "0.00"})),
        );
        store.expenses.insert(
            1,
            record(json!({
                "INVOICE_ID": "1",
                "ORGANIZATION": "Office Supplies AG",
                "TOTAL": "59.50",
                "INVOICE_DATE": "2024-03-04"
            })),
        );
        store
    }

    /// Executes one request envelope and returns the `RESPONSE` object.
    pub fn handle(&mut self, request: &Value) -> Value {
        let service = request.get("SERVICE").and_then(Value::as_str).unwrap_or("");
        let data = request.get("DATA").cloned().unwrap_or(Value::Null);
        let filter = request.get("FILTER");

        let result = match service {
            "customer.create" => self.create_customer(data),
            "customer.update" => update(&mut self.customers, "CUSTOMER_ID", data),
            "customer.get" => Ok(json!({"CUSTOMERS": self.customers.query(filter, request)})),
            "contact.create" => self.create_contact(data),
            "contact.update" => update(&mut self.contacts, "CONTACT_ID", data),
            "contact.get" => Ok(json!({"CONTACTS": self.contacts.query(filter, request)})),
            "invoice.create" => self.create_invoice(data),
            "invoice.complete" => self.complete_invoice(&data),
            "invoice.sendbyemail" => self.send_invoice(&data),
            "invoice.get" => Ok(json!({"INVOICES": self.invoices.query(filter, request)})),
            "project.get" => Ok(json!({"PROJECTS": self.projects.query(filter, request)})),
            "expense.get" => Ok(json!({"EXPENSES": self.expenses.query(filter, request)})),
            "subscription.create" => self.create_subscription(data),
            "subscription.update" => update(&mut self.subscriptions, "SUBSCRIPTION_ID", data),
            "subscription.cancel" => self.cancel_subscription(&data),
            "subscription.reactivate" => self.reactivate_subscription(&data),
            "subscription.get" => {
                Ok(json!({"SUBSCRIPTIONS": self.subscriptions.query(filter, request)}))
            }
            "article.get" => Ok(json!({"ARTICLES": self.query_articles(filter)})),
            other => Err(format!("unknown service: {other}")),
        };

        match result {
            Ok(response) => response,
            Err(message) => json!({"STATUS": "error", "ERRORS": [message]}),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn create_customer(&mut self, data: Value) -> Result<Value, String> {
        let mut row = data_record(data)?;
        let business = text(&row, "CUSTOMER_TYPE").as_deref() == Some("business");
        if business && text(&row, "ORGANIZATION").is_none() {
            return Err("ORGANIZATION is required for business customers".to_string());
        }
        let id = self.allocate_id();
        row.insert("CUSTOMER_ID".to_string(), json!(id.to_string()));
        self.customers.insert(id, row);
        Ok(json!({"STATUS": "success", "CUSTOMER_ID": id.to_string()}))
    }

    fn create_contact(&mut self, data: Value) -> Result<Value, String> {
        let mut row = data_record(data)?;
        self.require_customer(&row)?;
        let id = self.allocate_id();
        row.insert("CONTACT_ID".to_string(), json!(id.to_string()));
        self.contacts.insert(id, row);
        Ok(json!({"STATUS": "success", "CONTACT_ID": id.to_string()}))
    }

    fn create_invoice(&mut self, data: Value) -> Result<Value, String> {
        let mut row = data_record(data)?;
        self.require_customer(&row)?;
        let id = self.allocate_id();
        row.insert("INVOICE_ID".to_string(), json!(id.to_string()));
        row.insert("INVOICE_NUMBER".to_string(), Value::Null);
        self.invoices.insert(id, row);
        Ok(json!({"STATUS": "success", "INVOICE_ID": id.to_string()}))
    }

    fn complete_invoice(&mut self, data: &Value) -> Result<Value, String> {
        let id = id_field(data, "INVOICE_ID")?;
        let number = format!("RE-{:04}", self.next_invoice_number);
        let row = self.invoices.get_mut(id).ok_or("invoice not found")?;
        if matches!(row.get("INVOICE_NUMBER"), Some(existing) if !existing.is_null()) {
            return Err("invoice is already completed".to_string());
        }
        row.insert("INVOICE_NUMBER".to_string(), json!(number));
        self.next_invoice_number += 1;
        Ok(json!({"STATUS": "success", "INVOICE_NUMBER": number}))
    }

    fn send_invoice(&mut self, data: &Value) -> Result<Value, String> {
        let id = id_field(data, "INVOICE_ID")?;
        if !self.invoices.contains(id) {
            return Err("invoice not found".to_string());
        }
        let has_recipient = ["TO", "CC", "BCC"]
            .iter()
            .any(|key| data.pointer(&format!("/RECIPIENT/{key}")).is_some());
        if !has_recipient {
            return Err("RECIPIENT is required".to_string());
        }
        Ok(json!({"STATUS": "success"}))
    }

    fn create_subscription(&mut self, data: Value) -> Result<Value, String> {
        let mut row = data_record(data)?;
        self.require_customer(&row)?;
        let article = text(&row, "ARTICLE_NUMBER").ok_or("ARTICLE_NUMBER is required")?;
        let known = self
            .articles
            .iter()
            .any(|a| text(a, "ARTICLE_NUMBER").as_deref() == Some(article.as_str()));
        if !known {
            return Err(format!("unknown article: {article}"));
        }
        let id = self.allocate_id();
        row.insert("SUBSCRIPTION_ID".to_string(), json!(id.to_string()));
        row.insert("STATUS".to_string(), json!("active"));
        self.subscriptions.insert(id, row);
        Ok(json!({"STATUS": "success", "SUBSCRIPTION_ID": id.to_string()}))
    }

    fn cancel_subscription(&mut self, data: &Value) -> Result<Value, String> {
        let id = id_field(data, "SUBSCRIPTION_ID")?;
        let row = self.subscriptions.get_mut(id).ok_or("subscription not found")?;
        let date = data
            .get("CANCELLATION_DATE")
            .and_then(Value::as_str)
            .unwrap_or("2099-12-31 23:59:59")
            .to_string();
        row.insert("STATUS".to_string(), json!("canceled"));
        row.insert("CANCELLATION_DATE".to_string(), json!(date));
        Ok(json!({"STATUS": "success", "CANCELLATION_DATE": date}))
    }

    fn reactivate_subscription(&mut self, data: &Value) -> Result<Value, String> {
        let id = id_field(data, "SUBSCRIPTION_ID")?;
        let row = self.subscriptions.get_mut(id).ok_or("subscription not found")?;
        if text(row, "STATUS").as_deref() != Some("canceled") {
            return Err("subscription is not canceled".to_string());
        }
        row.insert("STATUS".to_string(), json!("active"));
        row.remove("CANCELLATION_DATE");
        Ok(json!({"STATUS": "success"}))
    }

    fn query_articles(&self, filter: Option<&Value>) -> Vec<Value> {
        self.articles
            .iter()
            .filter(|row| matches_filter(row, filter))
            .map(|row| Value::Object(row.clone()))
            .collect()
    }

    fn require_customer(&self, row: &Record) -> Result<(), String> {
        let id = text(row, "CUSTOMER_ID")
            .and_then(|id| id.parse::<u64>().ok())
            .ok_or("CUSTOMER_ID is required")?;
        if self.customers.contains(id) {
            Ok(())
        } else {
            Err(format!("invalid customer: {id}"))
        }
    }
}

/// Merges `data` into the row named by its id field.
fn update(table: &mut Table, id_key: &str, data: Value) -> Result<Value, String> {
    let id = id_field(&data, id_key)?;
    let changes = data_record(data)?;
    let row = table
        .get_mut(id)
        .ok_or_else(|| format!("{id_key} {id} not found"))?;
    row.extend(changes);
    Ok(json!({"STATUS": "success", id_key: id.to_string()}))
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

fn data_record(data: Value) -> Result<Record, String> {
    match data {
        Value::Object(map) => Ok(map),
        _ => Err("DATA must be an object".to_string()),
    }
}

fn text(row: &Record, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn id_field(data: &Value, key: &str) -> Result<u64, String> {
    let id = match data.get(key) {
        Some(Value::String(s)) => s.parse().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    };
    id.ok_or_else(|| format!("{key} is required"))
}

fn number_prop(request: &Value, key: &str) -> Option<usize> {
    match request.get(key)? {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Every filter entry must equal the row's field, compared as text.
fn matches_filter(row: &Record, filter: Option<&Value>) -> bool {
    let Some(Value::Object(filter)) = filter else {
        return true;
    };
    filter.iter().all(|(key, expected)| {
        let expected = match expected {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        text(row, key).as_deref() == Some(expected.as_str())
    })
}
