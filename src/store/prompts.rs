use crate::models::Prompt;
use crate::store::Collections;

impl Collections {
    pub fn find_prompt_by_id(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn find_prompt_by_id_mut(&mut self, id: &str) -> Option<&mut Prompt> {
        self.prompts.iter_mut().find(|p| p.id == id)
    }

    pub fn prompt_index(&self, id: &str) -> Option<usize> {
        self.prompts.iter().position(|p| p.id == id)
    }

    pub fn prompts_in_org(&self, organization_id: &str) -> impl Iterator<Item = &Prompt> {
        self.prompts
            .iter()
            .filter(move |p| p.organization_id == organization_id)
    }
}
