use common::workspace::TemplateDraft;

pub struct TemplateBuilderPage {
    pub draft: TemplateDraft,
}

impl TemplateBuilderPage {
    pub fn new() -> Self {
        Self {
            draft: TemplateDraft::new(),
        }
    }
}
