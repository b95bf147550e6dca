use crate::client::{FastBillClient, Variant};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::Project;

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// `project.get`.
    pub fn get_projects(&self, filter: &Filter, props: &Props) -> Result<Vec<Project>> {
        self.collect(&RequestEnvelope::query("project.get", filter, props), "PROJECTS")
    }
}
