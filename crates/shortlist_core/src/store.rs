use crate::{AnalysisResult, BatchResultSet};

/// Holds the most recent batch response. A new set replaces the old one
/// wholesale; there is no merging and no history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultStore {
    current: BatchResultSet,
}

impl ResultStore {
    pub fn replace(&mut self, set: BatchResultSet) {
        self.current = set;
    }

    pub fn all(&self) -> &[AnalysisResult] {
        &self.current.results
    }

    pub fn get(&self, index: usize) -> Option<&AnalysisResult> {
        self.current.results.get(index)
    }

    pub fn len(&self) -> usize {
        self.current.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.results.is_empty()
    }

    /// Count reported by the collaborator, which may differ from `len()`.
    pub fn total_resumes(&self) -> usize {
        self.current.total_resumes
    }
}
