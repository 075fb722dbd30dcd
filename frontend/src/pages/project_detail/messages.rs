use crate::components::field_control::FieldEvent;

pub enum Msg {
    Field(String, FieldEvent),
    Submit,
    OpenPreview {
        submission_id: String,
        field_id: String,
    },
    ClosePreview,
}
