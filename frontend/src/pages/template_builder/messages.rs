use common::model::FieldKind;

pub enum Msg {
    SetName(String),
    SetDescription(String),
    SetFieldLabel(String),
    SetFieldKind(FieldKind),
    SetFieldRequired(bool),
    SetPendingOption(String),
    AddOption,
    RemoveOption(usize),
    AddField,
    RemoveField(String),
    Save,
}
