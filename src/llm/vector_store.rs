use crate::document::Chunk;

/// Ephemeral in-memory nearest-neighbor index over (chunk, embedding)
/// pairs. Lives only as long as its engine; nothing is persisted.
pub struct VectorStore {
    entries: Vec<(Chunk, Vec<f32>)>,
}

impl VectorStore {
    pub fn new(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>) -> Self {
        debug_assert_eq!(chunks.len(), embeddings.len());
        Self {
            entries: chunks.into_iter().zip(embeddings).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `k` chunks ranked by cosine similarity to `query`,
    /// highest first.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(&Chunk, f32)> {
        let mut scored: Vec<(&Chunk, f32)> = self
            .entries
            .iter()
            .map(|(chunk, embedding)| (chunk, cosine_similarity(query, embedding)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);
        scored
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Chunk {
        Chunk {
            text: text.to_string(),
            page: 1,
            offset: 0,
        }
    }

    #[test]
    fn ranks_by_cosine_similarity() {
        let store = VectorStore::new(
            vec![chunk("x axis"), chunk("y axis"), chunk("diagonal")],
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![0.7, 0.7],
            ],
        );

        let hits = store.search(&[1.0, 0.1], 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0.text, "x axis");
        assert_eq!(hits[1].0.text, "diagonal");
        assert!(hits[0].1 > hits[1].1);
    }

    #[test]
    fn k_larger_than_store_returns_everything() {
        let store = VectorStore::new(
            vec![chunk("only one")],
            vec![vec![0.5, 0.5]],
        );
        assert_eq!(store.search(&[1.0, 0.0], 4).len(), 1);
    }

    #[test]
    fn empty_store_returns_nothing() {
        let store = VectorStore::new(Vec::new(), Vec::new());
        assert!(store.search(&[1.0], 4).is_empty());
    }

    #[test]
    fn zero_vectors_do_not_panic() {
        let store = VectorStore::new(vec![chunk("zeros")], vec![vec![0.0, 0.0]]);
        let hits = store.search(&[1.0, 0.0], 1);
        assert_eq!(hits[0].1, 0.0);
    }
}
