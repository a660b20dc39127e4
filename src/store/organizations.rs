use crate::models::Organization;
use crate::store::Collections;

impl Collections {
    pub fn find_org_by_id(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// Resolve an organization by signup code: an exact id match or a
    /// fuzzy domain-substring match. An empty code never matches.
    pub fn resolve_org_by_code(&self, code: &str) -> Option<&Organization> {
        if code.is_empty() {
            return None;
        }
        self.organizations
            .iter()
            .find(|o| o.id == code || o.domain.contains(code))
    }
}
