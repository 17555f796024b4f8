/// One identifier reassignment, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub entity_name: String,
    pub old_id: String,
    pub new_id: String,
}
