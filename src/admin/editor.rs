//! Staged editors
//!
//! The content tab edits a scratch copy of the translations and the social
//! links. Nothing reaches the store until the editor is saved; discarding
//! returns the draft to the last committed value.

use std::str::FromStr;

use crate::catalog::{Language, SocialLinks};
use crate::i18n::{ContentField, Translations};
use crate::storage::{PersistedStore, StorageBackend, StorageResult};

/// A scratch copy of `T` that is only committed on request
#[derive(Debug, Clone, PartialEq)]
pub struct StagedEditor<T: Clone + PartialEq> {
    committed: T,
    draft: T,
}

impl<T: Clone + PartialEq> StagedEditor<T> {
    pub fn new(current: T) -> Self {
        Self {
            draft: current.clone(),
            committed: current,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// Modify the draft
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.draft)
    }

    /// Whether the draft differs from the committed value
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Accept the draft and return it
    pub fn commit(&mut self) -> T {
        self.committed = self.draft.clone();
        self.draft.clone()
    }

    /// Drop all edits since the last commit
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }
}

/// Staged per-language edits of the editable site copy
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationEditor {
    staged: StagedEditor<Translations>,
}

impl TranslationEditor {
    /// Start editing from what the store currently holds
    pub fn load<B: StorageBackend>(store: &PersistedStore<B>) -> Self {
        Self {
            staged: StagedEditor::new(store.translations().clone()),
        }
    }

    pub fn get(&self, lang: Language, field: ContentField) -> &str {
        self.staged.draft().get(lang).content(field)
    }

    pub fn set(&mut self, lang: Language, field: ContentField, value: impl Into<String>) {
        let value = value.into();
        self.staged
            .edit(|translations| translations.get_mut(lang).set_content(field, value));
    }

    pub fn is_dirty(&self) -> bool {
        self.staged.is_dirty()
    }

    pub fn discard(&mut self) {
        self.staged.discard();
    }

    pub fn draft(&self) -> &Translations {
        self.staged.draft()
    }

    /// Commit the draft into the store ("Save All")
    pub fn save<B: StorageBackend>(&mut self, store: &mut PersistedStore<B>) -> StorageResult<()> {
        let translations = self.staged.commit();
        store.set_translations(translations)?;
        tracing::info!("Translations saved");
        Ok(())
    }
}

/// A footer social network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    Twitter,
}

impl SocialNetwork {
    pub fn all() -> &'static [SocialNetwork] {
        &[
            SocialNetwork::Facebook,
            SocialNetwork::Instagram,
            SocialNetwork::Twitter,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Twitter => "twitter",
        }
    }

    /// This network's link
    pub fn link<'a>(&self, links: &'a SocialLinks) -> &'a str {
        match self {
            SocialNetwork::Facebook => &links.facebook,
            SocialNetwork::Instagram => &links.instagram,
            SocialNetwork::Twitter => &links.twitter,
        }
    }

    fn link_mut<'a>(&self, links: &'a mut SocialLinks) -> &'a mut String {
        match self {
            SocialNetwork::Facebook => &mut links.facebook,
            SocialNetwork::Instagram => &mut links.instagram,
            SocialNetwork::Twitter => &mut links.twitter,
        }
    }
}

impl std::fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SocialNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(SocialNetwork::Facebook),
            "instagram" => Ok(SocialNetwork::Instagram),
            "twitter" => Ok(SocialNetwork::Twitter),
            other => Err(format!("unknown social network: {}", other)),
        }
    }
}

/// Staged edits of the footer social links
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLinksEditor {
    staged: StagedEditor<SocialLinks>,
}

impl SocialLinksEditor {
    pub fn load<B: StorageBackend>(store: &PersistedStore<B>) -> Self {
        Self {
            staged: StagedEditor::new(store.social_links().clone()),
        }
    }

    pub fn get(&self, network: SocialNetwork) -> &str {
        network.link(self.staged.draft())
    }

    /// Links are stored as typed; there is no URL validation
    pub fn set(&mut self, network: SocialNetwork, url: impl Into<String>) {
        let url = url.into();
        self.staged.edit(|links| *network.link_mut(links) = url);
    }

    pub fn is_dirty(&self) -> bool {
        self.staged.is_dirty()
    }

    pub fn discard(&mut self) {
        self.staged.discard();
    }

    pub fn draft(&self) -> &SocialLinks {
        self.staged.draft()
    }

    /// Commit the draft into the store ("Save Links")
    pub fn save<B: StorageBackend>(&mut self, store: &mut PersistedStore<B>) -> StorageResult<()> {
        let links = self.staged.commit();
        store.set_social_links(links)?;
        tracing::info!("Social links saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_staged_editor_commit_and_discard() {
        let mut editor = StagedEditor::new(vec![1, 2]);
        assert!(!editor.is_dirty());

        editor.edit(|v| v.push(3));
        assert!(editor.is_dirty());
        assert_eq!(editor.committed(), &vec![1, 2]);

        editor.discard();
        assert_eq!(editor.draft(), &vec![1, 2]);

        editor.edit(|v| v.clear());
        assert_eq!(editor.commit(), Vec::<i32>::new());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_translation_edits_stay_staged_until_save() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let original = store.translations().en.hero.title_main.clone();
        let mut editor = TranslationEditor::load(&store);

        editor.set(Language::En, ContentField::HeroTitleMain, "Sharper Than Ever");
        assert_eq!(
            editor.get(Language::En, ContentField::HeroTitleMain),
            "Sharper Than Ever"
        );
        assert_eq!(store.translations().en.hero.title_main, original);
        assert!(editor.is_dirty());

        editor.save(&mut store).unwrap();
        assert!(!editor.is_dirty());
        assert_eq!(store.translations().en.hero.title_main, "Sharper Than Ever");
        // the other language is untouched
        assert_eq!(
            store.translations().vi,
            Translations::default().vi
        );
    }

    #[test]
    fn test_translation_discard() {
        let store = PersistedStore::open(MemoryBackend::new());
        let mut editor = TranslationEditor::load(&store);
        editor.set(Language::Vi, ContentField::HeroSubtitle, "tạm");
        editor.discard();
        assert_eq!(editor.draft(), store.translations());
    }

    #[test]
    fn test_social_links_editor() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let mut editor = SocialLinksEditor::load(&store);

        editor.set(SocialNetwork::Instagram, "https://instagram.com/luxecut.sg");
        assert_eq!(store.social_links(), &SocialLinks::default());

        editor.save(&mut store).unwrap();
        assert_eq!(
            store.social_links().instagram,
            "https://instagram.com/luxecut.sg"
        );
        assert_eq!(store.social_links().facebook, "https://facebook.com");
        assert_eq!(
            "Twitter".parse::<SocialNetwork>().unwrap(),
            SocialNetwork::Twitter
        );
    }
}
