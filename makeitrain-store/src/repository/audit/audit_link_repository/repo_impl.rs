use makeitrain_db::models::audit::AuditLinkModel;
use parking_lot::RwLock;
use uuid::Uuid;

pub struct AuditLinkRepositoryImpl {
    pub(crate) links: RwLock<Vec<AuditLinkModel>>,
}

impl AuditLinkRepositoryImpl {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(Vec::new()),
        }
    }

    pub async fn create(&self, audit_link: &AuditLinkModel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::create_impl(self, audit_link).await
    }

    pub async fn find_by_audit_log_id(
        &self,
        audit_log_id: Uuid,
    ) -> Result<Vec<AuditLinkModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_audit_log_id_impl(self, audit_log_id).await
    }
}

impl Default for AuditLinkRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}
