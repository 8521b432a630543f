use std::collections::BTreeMap;

// the corpus is always exactly the pair being compared
const CORPUS_SIZE: f64 = 2.0;

#[derive(Debug)]
pub struct WeightedPair {
    pub subject: Vec<f64>,
    pub query: Vec<f64>,
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().take(2).count() == 2)
        .map(str::to_string)
        .collect()
}

/// Projects both documents into a shared tf-idf vector space. The idf is
/// smoothed as ln((1 + n) / (1 + df)) + 1 over the two-document corpus, so a
/// term both sides use carries less discriminative weight than one only a
/// single side uses, while still contributing to the overlap.
pub fn vectorize_pair(subject_text: &str, query_text: &str) -> WeightedPair {
    let subject_terms = tokenize(subject_text);
    let query_terms = tokenize(query_text);

    let mut vocab: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for term in &subject_terms {
        vocab.entry(term).or_default().0 += 1.0;
    }
    for term in &query_terms {
        vocab.entry(term).or_default().1 += 1.0;
    }

    let mut subject = Vec::with_capacity(vocab.len());
    let mut query = Vec::with_capacity(vocab.len());
    for (subject_tf, query_tf) in vocab.values() {
        let df = (*subject_tf > 0.0) as u8 + (*query_tf > 0.0) as u8;
        let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0;
        subject.push(subject_tf * idf);
        query.push(query_tf * idf);
    }
    WeightedPair { subject, query }
}
