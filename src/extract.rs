//! Paragraph-scoring content extraction.
//!
//! Every paragraph in the document votes for its immediate parent: class and
//! id names from a boilerplate vocabulary pull the parent's score down, names
//! from a content vocabulary push it up, and paragraphs long enough to be
//! prose add their character count. The highest-scoring parent becomes the
//! article root.
//!
//! Scores live in a side table keyed by node id, scoped to one call and
//! discarded afterward - nothing is ever written onto the tree, so repeated
//! calls cannot double-count.

use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::dom;
use crate::patterns::{NEGATIVE_CLASS, NEGATIVE_ID, POSITIVE_CLASS, POSITIVE_ID};

/// Score adjustment for a class/id in the boilerplate vocabulary.
const BOILERPLATE_WEIGHT: i64 = -50;

/// Score adjustment for a class/id in the content vocabulary.
const CONTENT_WEIGHT: i64 = 25;

/// Paragraphs at or below this character count carry no length signal.
const MIN_PARAGRAPH_CHARS: usize = 10;

/// Select the article root node, if any.
///
/// Walks every `<p>` element in document order, accumulating a score on each
/// paragraph's parent, then picks the first-seen parent with the highest
/// nonzero score. Returns `None` when the document has no paragraphs or no
/// parent ends the pass above zero.
pub(crate) fn find_article_node(doc: &Document) -> Option<Selection<'_>> {
    let mut scores: HashMap<NodeId, i64> = HashMap::new();
    // Candidates in first-seen order; ties in the final scan keep the earlier one.
    let mut candidates: Vec<NodeRef<'_>> = Vec::new();

    let paragraphs = doc.select("p");
    for p_node in paragraphs.nodes() {
        let Some(parent_node) = p_node.parent() else {
            continue;
        };

        let score = scores.entry(parent_node.id).or_insert_with(|| {
            candidates.push(parent_node);
            0
        });

        *score += attribute_weight(&Selection::from(parent_node));

        let paragraph = Selection::from(*p_node);
        let text_len = dom::text_content(&paragraph).chars().count();
        if text_len > MIN_PARAGRAPH_CHARS {
            *score += text_len as i64;
        }
    }

    let mut best: Option<NodeRef<'_>> = None;
    let mut best_score = 0i64;
    for candidate in candidates {
        let score = scores.get(&candidate.id).copied().unwrap_or(0);
        if score > best_score {
            best = Some(candidate);
            best_score = score;
        }
    }

    best.map(Selection::from)
}

/// Weight contributed by an element's class and id attributes.
///
/// Per attribute, the boilerplate vocabulary is checked before the content
/// vocabulary, so a single attribute never contributes both signals. The
/// class and id checks are independent and both adjustments accumulate.
fn attribute_weight(parent: &Selection) -> i64 {
    let mut weight = 0;

    if let Some(class) = parent.attr("class") {
        if NEGATIVE_CLASS.is_match(&class) {
            weight += BOILERPLATE_WEIGHT;
        } else if POSITIVE_CLASS.is_match(&class) {
            weight += CONTENT_WEIGHT;
        }
    }

    if let Some(id) = parent.attr("id") {
        if NEGATIVE_ID.is_match(&id) {
            weight += BOILERPLATE_WEIGHT;
        } else if POSITIVE_ID.is_match(&id) {
            weight += CONTENT_WEIGHT;
        }
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_text(html: &str) -> Option<String> {
        let doc = dom::parse(html);
        find_article_node(&doc).map(|sel| dom::text_content(&sel).trim().to_string())
    }

    #[test]
    fn long_paragraph_selects_its_parent() {
        let html = r#"<div id="wrapper"><p>A paragraph well past the length cutoff.</p></div>"#;
        assert_eq!(
            article_text(html).as_deref(),
            Some("A paragraph well past the length cutoff.")
        );
    }

    #[test]
    fn short_paragraphs_carry_no_length_signal() {
        // Ten characters or fewer, and no class/id signal: score stays zero.
        let html = "<div><p>tiny text</p><p>also tiny</p></div>";
        assert_eq!(article_text(html), None);
    }

    #[test]
    fn no_paragraphs_yields_no_article() {
        let html = "<div><span>not a paragraph, however long it might ramble on</span></div>";
        assert_eq!(article_text(html), None);
    }

    #[test]
    fn comment_classed_parent_scores_below_zero() {
        let html = r#"<div class="comment"><p>A forty-character remark, give or take.</p></div>"#;
        assert_eq!(article_text(html), None);
    }

    #[test]
    fn content_class_outweighs_plain_length() {
        let html = r#"
            <div><p>Plain container paragraph of middling size.</p></div>
            <div class="entry-content"><p>Marked container paragraph of middling size.</p></div>
        "#;
        assert_eq!(
            article_text(html).as_deref(),
            Some("Marked container paragraph of middling size.")
        );
    }

    #[test]
    fn class_and_id_signals_accumulate() {
        let doc = dom::parse(r#"<div class="comment" id="post"><p>x</p></div>"#);
        let div = doc.select("div");
        assert_eq!(attribute_weight(&div), BOILERPLATE_WEIGHT + CONTENT_WEIGHT);

        let doc = dom::parse(r#"<div class="hentry" id="entry-body"><p>x</p></div>"#);
        let div = doc.select("div");
        assert_eq!(attribute_weight(&div), 2 * CONTENT_WEIGHT);
    }

    #[test]
    fn ties_keep_the_earlier_candidate() {
        let html = r#"
            <div><p>alpha paragraph text one!</p></div>
            <div><p>bravo paragraph text two!</p></div>
        "#;
        assert_eq!(article_text(html).as_deref(), Some("alpha paragraph text one!"));
    }

    #[test]
    fn repeated_parents_accumulate_in_place() {
        // Two paragraphs in one div beat one longer paragraph elsewhere.
        let html = r#"
            <div id="a"><p>First of two paragraphs here.</p><p>Second of two paragraphs here.</p></div>
            <div id="b"><p>One single paragraph, a little bit longer.</p></div>
        "#;
        let doc = dom::parse(html);
        let article = find_article_node(&doc).map(|sel| sel.attr("id").map(|id| id.to_string()));
        assert_eq!(article.flatten().as_deref(), Some("a"));
    }

    #[test]
    fn negative_id_requires_exact_value() {
        // "page-footer" does not anchor-match the boilerplate vocabulary.
        let html = r#"<div id="page-footer"><p>Long enough paragraph to score its parent.</p></div>"#;
        assert!(article_text(html).is_some());
    }

    #[test]
    fn attribute_weight_checks_negative_before_positive() {
        let doc = dom::parse(r#"<div class="footer post"><p>x</p></div>"#);
        let div = doc.select("div");
        assert_eq!(attribute_weight(&div), BOILERPLATE_WEIGHT);
    }
}
