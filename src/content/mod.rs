//! Embedded study content
//!
//! The exam taxonomy, guide index, and keyword list are fixed reference
//! tables compiled into the binary. They are built once at startup into a
//! [`ContentLibrary`] that handlers receive through application state, so
//! nothing reads them as ambient globals.

pub mod cache_key;
pub mod guide_index;
pub mod keywords;
pub mod taxonomy;

pub use cache_key::{concept_cache_key, text_cache_key};
pub use guide_index::{GuideIndex, GuideReference};
pub use keywords::KeywordList;
pub use taxonomy::ExamTaxonomy;

/// Immutable study content shared across handlers
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    /// AZ-104 domain/objective/skill tree
    pub taxonomy: ExamTaxonomy,
    /// Concept name to guide page/section index
    pub guide_index: GuideIndex,
    /// Recognized Azure terms for local extraction
    pub keywords: KeywordList,
}

impl ContentLibrary {
    /// Build the embedded content tables
    pub fn builtin() -> Self {
        Self {
            taxonomy: ExamTaxonomy::builtin(),
            guide_index: GuideIndex::builtin(),
            keywords: KeywordList::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_populated() {
        let content = ContentLibrary::builtin();
        assert_eq!(content.taxonomy.domains.len(), 5);
        assert!(content.guide_index.len() >= 30);
        assert!(content.keywords.len() >= 60);
    }
}
