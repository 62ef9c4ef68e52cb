use crate::document::Page;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// A bounded span of document text used as a unit of retrieval. Overlaps its
/// neighbors by the splitter's configured overlap and remembers which page
/// it came from.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub text: String,
    pub page: usize,
    /// Character offset of this chunk within its page's text.
    pub offset: usize,
}

/// Splits page text into overlapping chunks, cutting preferentially at
/// paragraph, line, sentence and word boundaries before falling back to a
/// raw character cut. Consecutive chunks from the same page share exactly
/// `chunk_overlap` characters, so concatenating each chunk's non-overlapping
/// suffix reproduces the page text losslessly.
#[derive(Debug, Clone, Copy)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(
            chunk_overlap < chunk_size / 2,
            "overlap must be well below chunk size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Splits a single text, returning `(char_offset, chunk_text)` pairs.
    pub fn split(&self, text: &str) -> Vec<(usize, String)> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        if len == 0 {
            return Vec::new();
        }
        if len <= self.chunk_size {
            return vec![(0, text.to_string())];
        }

        let mut chunks = Vec::new();
        let mut start = 0usize;
        loop {
            let hard_end = (start + self.chunk_size).min(len);
            let end = if hard_end == len {
                len
            } else {
                self.break_point(&chars, start, hard_end)
            };
            chunks.push((start, chars[start..end].iter().collect()));
            if end == len {
                break;
            }
            start = end - self.chunk_overlap;
        }
        chunks
    }

    /// Splits every page, dropping whitespace-only chunks.
    pub fn split_pages(&self, pages: &[Page]) -> Vec<Chunk> {
        pages
            .iter()
            .flat_map(|page| {
                self.split(&page.text)
                    .into_iter()
                    .map(|(offset, text)| Chunk {
                        text,
                        page: page.number,
                        offset,
                    })
            })
            .filter(|chunk| !chunk.text.trim().is_empty())
            .collect()
    }

    /// Picks the cut position in `(lo..=hard_end]`, preferring the latest
    /// paragraph break, then line break, then sentence end, then word gap.
    /// The cut lands just after the separator so no text is lost.
    fn break_point(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let lo = (start + self.chunk_size / 2).max(start + self.chunk_overlap + 1);

        for i in (lo..=hard_end).rev() {
            if i >= 2 && chars[i - 2] == '\n' && chars[i - 1] == '\n' {
                return i;
            }
        }
        for i in (lo..=hard_end).rev() {
            if chars[i - 1] == '\n' {
                return i;
            }
        }
        for i in (lo..=hard_end).rev() {
            if i >= 2 && chars[i - 2] == '.' && chars[i - 1] == ' ' {
                return i;
            }
        }
        for i in (lo..=hard_end).rev() {
            if chars[i - 1] == ' ' {
                return i;
            }
        }
        hard_end
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}
