//! 保留中の破壊的アクション
//!
//! モーダルは同時に1つしか開けない。単一の Option<PendingAction> スロットで
//! 表現し、確定・キャンセル・Escape・背景クリックのいずれでも破棄される

/// 開いているモーダルの種別と対象ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// 削除確認モーダル
    Delete { filename: String },
    /// タイトル編集モーダル
    EditTitle { filename: String },
}

impl PendingAction {
    pub fn delete(filename: impl Into<String>) -> Self {
        PendingAction::Delete {
            filename: filename.into(),
        }
    }

    pub fn edit_title(filename: impl Into<String>) -> Self {
        PendingAction::EditTitle {
            filename: filename.into(),
        }
    }

    /// 対象のファイル名（表示タイトルではなく元のファイル名）
    pub fn filename(&self) -> &str {
        match self {
            PendingAction::Delete { filename } => filename,
            PendingAction::EditTitle { filename } => filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_accessor() {
        assert_eq!(PendingAction::delete("a.txt").filename(), "a.txt");
        assert_eq!(PendingAction::edit_title("b.txt").filename(), "b.txt");
    }

    #[test]
    fn test_single_slot_replaces_previous_action() {
        let mut slot = Some(PendingAction::delete("a.txt"));
        slot = Some(PendingAction::edit_title("b.txt"));
        assert_eq!(slot, Some(PendingAction::edit_title("b.txt")));

        slot = None;
        assert!(slot.is_none());
    }
}
