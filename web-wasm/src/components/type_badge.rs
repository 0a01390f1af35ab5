//! ファイル種別バッジ

use fileshelf_common::FileType;
use leptos::prelude::*;

/// 種別ごとの表示グリフ
fn glyph(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Book => "📖",
        FileType::Ebook => "📱",
        FileType::Audiobook => "🎧",
        FileType::Anthology => "📚",
        FileType::Essay | FileType::Whitepaper => "📄",
    }
}

#[component]
pub fn TypeBadge(file_type: Signal<Option<FileType>>) -> impl IntoView {
    view! {
        <p
            class="file-item-type-badge"
            title=move || file_type.get().map(|t| t.as_str())
        >
            {move || file_type.get().map(glyph)}
        </p>
    }
}
