use crate::models::User;
use crate::store::Collections;

impl Collections {
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn count_users_in_org(&self, organization_id: &str) -> usize {
        self.users
            .iter()
            .filter(|u| u.organization_id == organization_id)
            .count()
    }

    pub fn users_in_org(&self, organization_id: &str) -> impl Iterator<Item = &User> {
        self.users
            .iter()
            .filter(move |u| u.organization_id == organization_id)
    }
}
