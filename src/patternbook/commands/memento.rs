use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub text: String,
    pub cursor: usize,
}

/// Editor state in another form (JSON). Opaque to everyone but [`Editor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Editor {
    pub fn type_text(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn save(&self) -> Result<Snapshot> {
        Ok(Snapshot(serde_json::to_string(self)?))
    }

    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        *self = serde_json::from_str(&snapshot.0)?;
        Ok(())
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Memento);
    let mut editor = Editor::default();

    editor.type_text("Hello");
    let snapshot = editor.save()?;
    result.add_message(CmdMessage::info(format!("saved {}", snapshot.as_str())));

    editor.type_text(", world");
    result.add_message(CmdMessage::info(format!("edited to {:?}", editor.text)));

    editor.restore(&snapshot)?;
    result.add_message(CmdMessage::info(format!("restored to {:?}", editor.text)));

    result.exhibit("editor", &editor)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn restore_returns_to_saved_state() {
        let mut editor = Editor::default();
        editor.type_text("draft");
        let saved = editor.clone();
        let snapshot = editor.save().unwrap();

        editor.type_text(" two");
        editor.restore(&snapshot).unwrap();
        assert_eq!(editor, saved);
    }

    #[test]
    fn corrupt_snapshot_is_a_serialization_error() {
        let mut editor = Editor::default();
        let err = editor.restore(&Snapshot("{not json".into())).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
        assert_eq!(editor, Editor::default());
    }
}
