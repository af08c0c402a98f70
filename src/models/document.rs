//! Analyzed-document result returned by the parse endpoint.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GlossaError;

/// Result of a `/parse` call: task name mapped to per-sentence annotations.
///
/// Keys are task names (`tok/fine`, `pos`, `dep`, ...); each value holds one
/// annotation entry per sentence, in input order. Task order is
/// server-determined and preserved as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, Vec<Value>>);

impl Document {
    /// Number of tasks in the result.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the result contains no tasks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw per-sentence annotations for one task.
    pub fn get(&self, task: &str) -> Option<&[Value]> {
        self.0.get(task).map(Vec::as_slice)
    }

    /// Task names in response order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(task, per-sentence annotations)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.0.iter().map(|(task, values)| (task.as_str(), values.as_slice()))
    }

    /// Decode one task's annotations as token lists, one per sentence.
    ///
    /// Fails with [`GlossaError::Decode`] when the task is absent or its
    /// annotations are not lists of strings.
    pub fn token_lists(&self, task: &str) -> Result<Vec<Vec<String>>, GlossaError> {
        let values = self.get(task).ok_or_else(|| {
            GlossaError::Decode(format!("task {task:?} missing from response"))
        })?;
        values
            .iter()
            .map(|sentence| {
                serde_json::from_value(sentence.clone())
                    .map_err(|e| GlossaError::Decode(format!("task {task:?}: {e}")))
            })
            .collect()
    }

    /// The sole task name, when the result holds exactly one task.
    pub(crate) fn single_task(&self) -> Option<String> {
        if self.0.len() == 1 {
            self.0.keys().next().cloned()
        } else {
            None
        }
    }

    /// Consume the result, yielding the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Vec<Value>> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Document {
        serde_json::from_value(json!({
            "tok/fine": [["商品", "和", "服务", "。"], ["晚安", "。"]],
            "pos": [["NN", "CC", "NN", "PU"], ["VV", "PU"]]
        }))
        .unwrap()
    }

    #[test]
    fn test_task_order_is_preserved() {
        let doc = sample();
        assert_eq!(doc.tasks().collect::<Vec<_>>(), vec!["tok/fine", "pos"]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_token_lists_decodes_per_sentence() {
        let doc = sample();
        let lists = doc.token_lists("tok/fine").unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], vec!["商品", "和", "服务", "。"]);
        assert_eq!(lists[1], vec!["晚安", "。"]);
    }

    #[test]
    fn test_missing_task_is_a_decode_error() {
        let doc = sample();
        let err = doc.token_lists("dep").unwrap_err();
        assert!(matches!(err, GlossaError::Decode(_)));
    }

    #[test]
    fn test_malformed_annotations_are_a_decode_error() {
        let doc: Document =
            serde_json::from_value(json!({"tok/fine": [[1, 2, 3]]})).unwrap();
        let err = doc.token_lists("tok/fine").unwrap_err();
        assert!(matches!(err, GlossaError::Decode(_)));
    }

    #[test]
    fn test_single_task() {
        let doc: Document =
            serde_json::from_value(json!({"tok/coarse": [["晚安", "。"]]})).unwrap();
        assert_eq!(doc.single_task().as_deref(), Some("tok/coarse"));
        assert_eq!(sample().single_task(), None);
    }
}
